#![cfg_attr(not(feature = "std"), no_std)]

//! Battleship engine for a human playing against the computer on paired
//! 10×10 grids.
//!
//! The core (`grid`, `placement`, `board`, `game`) is `no_std` and does not
//! allocate. With the `std` feature, [`GameSession`] adds the computer's
//! delayed reply on top of tokio.

mod board;
mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
pub mod prelude;
#[cfg(feature = "std")]
mod session;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::{generate_bomb_position, generate_ship_position};
#[cfg(feature = "std")]
pub use session::GameSession;
