//! A fixed-size grid of cell states.
//!
//! The grid is a plain `GRID_SIZE × GRID_SIZE` array with no heap
//! allocation. Coordinates arrive as signed integers so callers can pass
//! anything they received from input; out-of-range values are rejected.

use core::fmt;

use crate::common::{Coord, GameError};
use crate::config::GRID_SIZE;

/// State of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Open water, never attacked.
    #[default]
    Empty,
    /// Ship segment, never attacked.
    Occupied,
    /// Attacked. Terminal regardless of what was there.
    Resolved,
}

impl CellState {
    fn glyph(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Occupied => '#',
            CellState::Resolved => 'x',
        }
    }
}

/// One side's `GRID_SIZE × GRID_SIZE` board of cell states, indexed `[y][x]`.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: [[CellState; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Create a grid with every cell empty.
    pub const fn new() -> Self {
        Grid {
            cells: [[CellState::Empty; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Validate a signed coordinate and convert it into a [`Coord`].
    pub fn locate(x: i32, y: i32) -> Result<Coord, GameError> {
        let size = GRID_SIZE as i32;
        if x < 0 || y < 0 || x >= size || y >= size {
            Err(GameError::OutOfBounds { x, y })
        } else {
            Ok(Coord::new(x as usize, y as usize))
        }
    }

    /// State of the cell at (x, y).
    pub fn get(&self, x: i32, y: i32) -> Result<CellState, GameError> {
        let c = Self::locate(x, y)?;
        Ok(self.cells[c.y][c.x])
    }

    /// Overwrite the cell at (x, y).
    pub fn set(&mut self, x: i32, y: i32, state: CellState) -> Result<(), GameError> {
        let c = Self::locate(x, y)?;
        self.cells[c.y][c.x] = state;
        Ok(())
    }

    /// State of the cell at `coord`.
    pub fn cell(&self, coord: Coord) -> Result<CellState, GameError> {
        self.check_coord(coord)?;
        Ok(self.cells[coord.y][coord.x])
    }

    /// Overwrite the cell at `coord`.
    pub fn set_cell(&mut self, coord: Coord, state: CellState) -> Result<(), GameError> {
        self.check_coord(coord)?;
        self.cells[coord.y][coord.x] = state;
        Ok(())
    }

    #[inline]
    fn check_coord(&self, coord: Coord) -> Result<(), GameError> {
        if coord.x >= GRID_SIZE || coord.y >= GRID_SIZE {
            Err(GameError::OutOfBounds {
                x: i32::try_from(coord.x).unwrap_or(i32::MAX),
                y: i32::try_from(coord.y).unwrap_or(i32::MAX),
            })
        } else {
            Ok(())
        }
    }

    /// Returns `true` when the `width × height` rectangle with top-left corner
    /// `origin` lies inside the grid and every cell in it is empty.
    pub fn is_vacant(&self, origin: Coord, width: usize, height: usize) -> bool {
        let (Some(right), Some(bottom)) =
            (origin.x.checked_add(width), origin.y.checked_add(height))
        else {
            return false;
        };
        if right > GRID_SIZE || bottom > GRID_SIZE {
            return false;
        }
        self.cells[origin.y..bottom]
            .iter()
            .all(|row| row[origin.x..right].iter().all(|&c| c == CellState::Empty))
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.iter().filter(|&(_, s)| s == state).count()
    }

    /// Row-major view of the cells, `rows()[y][x]`.
    pub fn rows(&self) -> &[[CellState; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Iterator over every cell, row by row.
    pub fn iter(&self) -> Cells<'_> {
        Cells { grid: self, idx: 0 }
    }

    /// Copy of the grid as an opponent may see it: unattacked ship segments
    /// are reported as empty water.
    pub fn masked(&self) -> Self {
        let mut out = *self;
        for row in out.cells.iter_mut() {
            for cell in row.iter_mut() {
                if *cell == CellState::Occupied {
                    *cell = CellState::Empty;
                }
            }
        }
        out
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}:", GRID_SIZE, GRID_SIZE)?;
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for x in 0..GRID_SIZE {
            write!(f, " {}", x)?;
        }
        writeln!(f)?;
        for (y, row) in self.cells.iter().enumerate() {
            write!(f, "{:2}", y)?;
            for cell in row.iter() {
                write!(f, " {}", cell.glyph())?;
            }
            if y + 1 < GRID_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over `(Coord, CellState)` pairs of a grid.
#[derive(Clone, Copy)]
pub struct Cells<'a> {
    grid: &'a Grid,
    idx: usize,
}

impl Iterator for Cells<'_> {
    type Item = (Coord, CellState);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= GRID_SIZE * GRID_SIZE {
            return None;
        }
        let (x, y) = (self.idx % GRID_SIZE, self.idx / GRID_SIZE);
        self.idx += 1;
        Some((Coord::new(x, y), self.grid.cells[y][x]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = GRID_SIZE * GRID_SIZE - self.idx;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Cells<'_> {}
