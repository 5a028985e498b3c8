//! One side's board: grid, fleet bookkeeping and attack handling.

use core::fmt;

use log::{debug, info};
use rand::Rng;

use crate::common::{AttackResult, Coord, GameError, Orientation, PlacementIssue, Shot, Side};
use crate::config::{FLEET, FLEET_SIZE, GRID_SIZE, TOTAL_SHIP_CELLS};
use crate::grid::{CellState, Grid};
use crate::placement::{generate_bomb_position, generate_ship_position};

/// A side's board. Ships are not tracked individually once placed; only the
/// number of unhit ship segments matters for win detection.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    side: Side,
    grid: Grid,
    placed: [bool; FLEET_SIZE],
    occupied_remaining: usize,
}

impl Board {
    /// Create an empty board with the whole fleet still to be placed.
    pub fn new(side: Side) -> Self {
        Board {
            side,
            grid: Grid::new(),
            placed: [false; FLEET_SIZE],
            occupied_remaining: TOTAL_SHIP_CELLS,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Immutable view of the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// State of the cell at (x, y).
    pub fn cell(&self, x: i32, y: i32) -> Result<CellState, GameError> {
        self.grid.get(x, y)
    }

    /// Ship segments that have not been hit yet.
    pub fn occupied_remaining(&self) -> usize {
        self.occupied_remaining
    }

    /// Returns `true` once every ship of the fleet is on the board.
    pub fn is_fleet_complete(&self) -> bool {
        self.placed.iter().all(|&p| p)
    }

    /// Lengths of fleet ships still waiting to be placed, in fleet order.
    pub fn remaining_fleet(&self) -> impl Iterator<Item = usize> + '_ {
        FLEET
            .iter()
            .zip(self.placed.iter())
            .filter(|&(_, &placed)| !placed)
            .map(|(&len, _)| len)
    }

    /// Place a horizontal ship covering `[x, x + width)` on row `y`.
    pub fn place_ship_manually(&mut self, x: i32, y: i32, width: usize) -> Result<(), GameError> {
        self.place_ship(x, y, width, Orientation::Horizontal)
    }

    /// Place a ship of `length` with its top-left segment at (x, y).
    pub fn place_ship(
        &mut self,
        x: i32,
        y: i32,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        let slot = self
            .unplaced_slot(length)
            .ok_or(GameError::placement(PlacementIssue::NotInFleet))?;
        let origin =
            Grid::locate(x, y).map_err(|_| GameError::placement(PlacementIssue::OutOfBounds))?;
        let (width, height) = orientation.extent(length);
        if origin.x + width > GRID_SIZE || origin.y + height > GRID_SIZE {
            return Err(GameError::placement(PlacementIssue::OutOfBounds));
        }
        if !self.grid.is_vacant(origin, width, height) {
            return Err(GameError::placement(PlacementIssue::Overlap));
        }
        self.fill(origin, width, height)?;
        self.placed[slot] = true;
        debug!(
            "{:?} board: placed length-{} ship at {} {:?}",
            self.side, length, origin, orientation
        );
        Ok(())
    }

    /// Randomly place every ship that is not on the board yet, largest first.
    pub fn generate_ships<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        for slot in 0..FLEET_SIZE {
            if self.placed[slot] {
                continue;
            }
            let length = FLEET[slot];
            let orientation = if length == 1 || rng.random_bool(0.5) {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (width, height) = orientation.extent(length);
            let origin = generate_ship_position(width, height, &self.grid, rng)?;
            self.fill(origin, width, height)?;
            self.placed[slot] = true;
        }
        info!("{:?} board: fleet generated", self.side);
        Ok(())
    }

    /// Resolve a bomb landing on (x, y).
    pub fn receive_attack(&mut self, x: i32, y: i32) -> Result<AttackResult, GameError> {
        let result = match self.grid.get(x, y)? {
            CellState::Resolved => return Err(GameError::AlreadyAttacked { x, y }),
            CellState::Empty => AttackResult::Miss,
            CellState::Occupied => {
                self.occupied_remaining = self.occupied_remaining.saturating_sub(1);
                if self.occupied_remaining == 0 {
                    AttackResult::AllSunk
                } else {
                    AttackResult::Hit
                }
            }
        };
        self.grid.set(x, y, CellState::Resolved)?;
        debug!(
            "{:?} board: bomb at ({}, {}) -> {:?}, {} segments left",
            self.side, x, y, result, self.occupied_remaining
        );
        Ok(result)
    }

    fn unplaced_slot(&self, length: usize) -> Option<usize> {
        (0..FLEET_SIZE).find(|&i| !self.placed[i] && FLEET[i] == length)
    }

    fn fill(&mut self, origin: Coord, width: usize, height: usize) -> Result<(), GameError> {
        for y in origin.y..origin.y + height {
            for x in origin.x..origin.x + width {
                self.grid.set_cell(Coord::new(x, y), CellState::Occupied)?;
            }
        }
        Ok(())
    }
}

/// Drop a bomb on a uniformly random untried cell of `opponent`.
pub fn auto_attack<R: Rng + ?Sized>(opponent: &mut Board, rng: &mut R) -> Result<Shot, GameError> {
    let target = generate_bomb_position(opponent.grid(), rng)?;
    let result = opponent.receive_attack(target.x as i32, target.y as i32)?;
    Ok(Shot { target, result })
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  side: {:?},\n  occupied_remaining: {},\n  placed: {:?},\n  grid:\n{}\n}}",
            self.side, self.occupied_remaining, self.placed, self.grid
        )
    }
}
