//! Commonly used types and utilities for ease of import.

pub use crate::{
    auto_attack, generate_bomb_position, generate_ship_position, AttackResult, Board, CellState,
    Coord, GameConfig, GameController, GameError, GameState, Grid, Orientation, Shot, Side, FLEET,
    GRID_SIZE,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, GameSession};
