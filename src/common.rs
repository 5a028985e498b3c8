//! Common types for the engine: coordinates, attack results and errors.

use crate::game::GameState;

/// A position on a grid. Values produced by the engine are always in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl core::fmt::Display for Coord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Width and height of the rectangle covered by a ship of `length`.
    pub const fn extent(self, length: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (length, 1),
            Orientation::Vertical => (1, length),
        }
    }
}

/// Which side of the table a board belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

/// Result of a bomb landing on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    /// Bomb landed on open water.
    Miss,
    /// Bomb hit a ship segment; more segments remain afloat.
    Hit,
    /// Bomb hit the last remaining ship segment on the board.
    AllSunk,
}

impl AttackResult {
    /// Returns `true` for both `Hit` and `AllSunk`.
    pub fn is_hit(self) -> bool {
        !matches!(self, AttackResult::Miss)
    }
}

/// A resolved bomb: where it landed and what it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub target: Coord,
    pub result: AttackResult,
}

/// Why a ship placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementIssue {
    /// Some segment would fall outside the grid.
    OutOfBounds,
    /// Some segment covers a cell that is not empty.
    Overlap,
    /// No unplaced ship of that length remains in the fleet.
    NotInFleet,
    /// Zero-sized or larger than the grid.
    Degenerate,
}

/// Errors returned by grid, board and controller operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate outside the grid.
    OutOfBounds { x: i32, y: i32 },
    /// Ship placement overlapping or out of bounds.
    InvalidPlacement { reason: PlacementIssue },
    /// The targeted cell was already attacked.
    AlreadyAttacked { x: i32, y: i32 },
    /// The action is not allowed in the current game state.
    IllegalStateTransition {
        state: GameState,
        action: &'static str,
    },
    /// No cell satisfies the random placement constraints.
    NoValidPosition,
}

impl GameError {
    pub(crate) const fn placement(reason: PlacementIssue) -> Self {
        GameError::InvalidPlacement { reason }
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfBounds { x, y } => {
                write!(f, "coordinate ({}, {}) is outside the grid", x, y)
            }
            GameError::InvalidPlacement { reason } => match reason {
                PlacementIssue::OutOfBounds => write!(f, "ship placement is out of bounds"),
                PlacementIssue::Overlap => write!(f, "ship placement overlaps another ship"),
                PlacementIssue::NotInFleet => {
                    write!(f, "no unplaced ship of that length remains in the fleet")
                }
                PlacementIssue::Degenerate => write!(f, "ship dimensions are not valid"),
            },
            GameError::AlreadyAttacked { x, y } => {
                write!(f, "cell ({}, {}) was already attacked", x, y)
            }
            GameError::IllegalStateTransition { state, action } => {
                write!(f, "cannot {} while the game is in {:?}", action, state)
            }
            GameError::NoValidPosition => write!(f, "no valid position left on the grid"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
