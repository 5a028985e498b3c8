//! Random placement of ships and bombs by rejection sampling.
//!
//! Both generators draw a uniform `(x, y)` in `[0, GRID_SIZE)²` and retry
//! until the candidate is acceptable. Before sampling they confirm that at
//! least one acceptable candidate exists, so a saturated grid yields
//! `NoValidPosition` instead of an endless loop.

use rand::Rng;

use crate::common::{Coord, GameError, PlacementIssue};
use crate::config::GRID_SIZE;
use crate::grid::{CellState, Grid};

/// Returns a top-left coordinate where a `width × height` ship fits entirely
/// inside the grid over empty cells.
///
/// Every cell of the candidate rectangle is checked before a position is
/// accepted.
pub fn generate_ship_position<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    grid: &Grid,
    rng: &mut R,
) -> Result<Coord, GameError> {
    if width == 0 || height == 0 || width > GRID_SIZE || height > GRID_SIZE {
        return Err(GameError::placement(PlacementIssue::Degenerate));
    }
    let any_fit = grid
        .iter()
        .any(|(coord, _)| grid.is_vacant(coord, width, height));
    if !any_fit {
        return Err(GameError::NoValidPosition);
    }
    loop {
        let candidate = random_coord(rng);
        if grid.is_vacant(candidate, width, height) {
            return Ok(candidate);
        }
    }
}

/// Returns a uniformly random coordinate whose cell has not been attacked.
pub fn generate_bomb_position<R: Rng + ?Sized>(
    grid: &Grid,
    rng: &mut R,
) -> Result<Coord, GameError> {
    if grid.count(CellState::Resolved) == GRID_SIZE * GRID_SIZE {
        return Err(GameError::NoValidPosition);
    }
    loop {
        let candidate = random_coord(rng);
        if grid.cell(candidate)? != CellState::Resolved {
            return Ok(candidate);
        }
    }
}

fn random_coord<R: Rng + ?Sized>(rng: &mut R) -> Coord {
    let x = rng.random_range(0..GRID_SIZE);
    let y = rng.random_range(0..GRID_SIZE);
    Coord::new(x, y)
}
