use log::{debug, info};
use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    board::{auto_attack, Board},
    common::{AttackResult, GameError, Orientation, Shot, Side},
    grid::Grid,
};

/// Phase of a game. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    /// Player is placing ships.
    Placement,
    /// Waiting for the player's shot at the computer board.
    PlayerTurn,
    /// Waiting for the computer's shot at the player board.
    ComputerTurn,
    /// One fleet is sunk. Only a reset leaves this state.
    Finished,
}

/// Everything a renderer needs to draw both boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub state: GameState,
    pub winner: Option<Side>,
    pub player_grid: Grid,
    /// Computer grid with unhit ship segments hidden.
    pub computer_grid: Grid,
    pub player_remaining: usize,
    pub computer_remaining: usize,
}

/// Turn state machine coordinating the player's and the computer's boards.
pub struct GameController {
    player: Board,
    computer: Board,
    state: GameState,
    winner: Option<Side>,
    rng: SmallRng,
    epoch: u64,
    last_computer_shot: Option<Shot>,
}

impl GameController {
    /// Start a game whose randomness is fully determined by `seed`. The
    /// computer fleet is generated immediately.
    pub fn new(seed: u64) -> Result<Self, GameError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let computer = Self::generate_computer_board(&mut rng)?;
        info!("new game (seed {})", seed);
        Ok(Self {
            player: Board::new(Side::Player),
            computer,
            state: GameState::Placement,
            winner: None,
            rng,
            epoch: 0,
            last_computer_shot: None,
        })
    }

    /// Start from prepared boards, still in placement. The player board may
    /// hold any part of its fleet. The computer board must hold all of it,
    /// otherwise its segment count can never reach zero.
    pub fn with_boards(seed: u64, player: Board, computer: Board) -> Result<Self, GameError> {
        if !computer.is_fleet_complete() {
            return Err(GameError::IllegalStateTransition {
                state: GameState::Placement,
                action: "start with an incomplete computer fleet",
            });
        }
        Ok(Self {
            player,
            computer,
            state: GameState::Placement,
            winner: None,
            rng: SmallRng::seed_from_u64(seed),
            epoch: 0,
            last_computer_shot: None,
        })
    }

    /// Start a game seeded from the thread RNG.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Result<Self, GameError> {
        Self::new(rand::Rng::random(&mut rand::rng()))
    }

    fn generate_computer_board(rng: &mut SmallRng) -> Result<Board, GameError> {
        let mut board = Board::new(Side::Computer);
        board.generate_ships(rng)?;
        Ok(board)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The winning side once the game is finished.
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn player_board(&self) -> &Board {
        &self.player
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer
    }

    /// Number of resets since this controller was created.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The computer's most recent shot in the current game.
    pub fn last_computer_shot(&self) -> Option<Shot> {
        self.last_computer_shot
    }

    fn require(&self, expected: GameState, action: &'static str) -> Result<(), GameError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(GameError::IllegalStateTransition {
                state: self.state,
                action,
            })
        }
    }

    fn transition(&mut self, next: GameState) {
        debug!("state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Place a horizontal player ship of `width` at (x, y).
    pub fn place_ship(&mut self, x: i32, y: i32, width: usize) -> Result<(), GameError> {
        self.place_ship_oriented(x, y, width, Orientation::Horizontal)
    }

    /// Place a player ship in either orientation.
    pub fn place_ship_oriented(
        &mut self,
        x: i32,
        y: i32,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        self.require(GameState::Placement, "place a ship")?;
        self.player.place_ship(x, y, length, orientation)
    }

    /// Randomly place whatever is left of the player's fleet.
    pub fn randomize_player_fleet(&mut self) -> Result<(), GameError> {
        self.require(GameState::Placement, "randomize the fleet")?;
        self.player.generate_ships(&mut self.rng)
    }

    /// Leave placement and hand the first shot to the player.
    pub fn confirm_ready(&mut self) -> Result<(), GameError> {
        self.require(GameState::Placement, "confirm readiness")?;
        if !self.player.is_fleet_complete() {
            return Err(GameError::IllegalStateTransition {
                state: self.state,
                action: "confirm readiness with an incomplete fleet",
            });
        }
        info!("player ready");
        self.transition(GameState::PlayerTurn);
        Ok(())
    }

    /// Fire the player's bomb at (x, y) on the computer board. A rejected
    /// shot leaves the turn with the player.
    pub fn player_attack(&mut self, x: i32, y: i32) -> Result<AttackResult, GameError> {
        self.require(GameState::PlayerTurn, "attack")?;
        let result = self.computer.receive_attack(x, y)?;
        if result == AttackResult::AllSunk {
            self.finish(Side::Player);
        } else {
            self.transition(GameState::ComputerTurn);
        }
        Ok(result)
    }

    /// Take the computer's single shot at a random untried player cell.
    pub fn computer_turn(&mut self) -> Result<Shot, GameError> {
        self.require(GameState::ComputerTurn, "take the computer turn")?;
        let shot = auto_attack(&mut self.player, &mut self.rng)?;
        self.last_computer_shot = Some(shot);
        if shot.result == AttackResult::AllSunk {
            self.finish(Side::Computer);
        } else {
            self.transition(GameState::PlayerTurn);
        }
        Ok(shot)
    }

    fn finish(&mut self, winner: Side) {
        info!("{:?} wins, {:?} fleet sunk", winner, winner.opponent());
        self.winner = Some(winner);
        self.transition(GameState::Finished);
    }

    /// Discard both boards and start over in placement. The RNG stream
    /// carries on, so consecutive games differ.
    pub fn reset(&mut self) -> Result<(), GameError> {
        let computer = Self::generate_computer_board(&mut self.rng)?;
        self.player = Board::new(Side::Player);
        self.computer = computer;
        self.winner = None;
        self.last_computer_shot = None;
        self.epoch += 1;
        self.state = GameState::Placement;
        info!("game reset (epoch {})", self.epoch);
        Ok(())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            state: self.state,
            winner: self.winner,
            player_grid: *self.player.grid(),
            computer_grid: self.computer.grid().masked(),
            player_remaining: self.player.occupied_remaining(),
            computer_remaining: self.computer.occupied_remaining(),
        }
    }
}
