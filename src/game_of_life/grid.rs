//! Fixed-size cell grid with clamped or toroidal edges

use super::CellState;
use crate::error::{LifeError, LifeResult};
use anyhow::Result;
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `rows x cols` board of cells. Dimensions and edge policy never change
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    rows: usize,
    cols: usize,
    toroidal: bool,
    cells: Vec<CellState>,
}

#[derive(Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    toroidal: bool,
    cells: Vec<CellState>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = String;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let expected = raw
            .rows
            .checked_mul(raw.cols)
            .ok_or_else(|| format!("grid of {}x{} cells is too large", raw.rows, raw.cols))?;
        if raw.cells.len() != expected {
            return Err(format!(
                "grid holds {} cells, expected {} for {}x{}",
                raw.cells.len(),
                expected,
                raw.rows,
                raw.cols
            ));
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            toroidal: raw.toroidal,
            cells: raw.cells,
        })
    }
}

impl Grid {
    /// Create a new grid with every cell dead
    pub fn new(rows: usize, cols: usize, toroidal: bool) -> Self {
        Self {
            rows,
            cols,
            toroidal,
            cells: vec![CellState::Dead; rows * cols],
        }
    }

    /// Create a grid from rows of cell states
    pub fn from_cells(cells: Vec<Vec<CellState>>, toroidal: bool) -> Result<Self> {
        if cells.is_empty() {
            anyhow::bail!("Grid cannot be empty");
        }

        let rows = cells.len();
        let cols = cells[0].len();

        if cols == 0 {
            anyhow::bail!("Grid width cannot be zero");
        }

        for (i, row) in cells.iter().enumerate() {
            if row.len() != cols {
                anyhow::bail!("Row {} has length {}, expected {}", i, row.len(), cols);
            }
        }

        Ok(Self {
            rows,
            cols,
            toroidal,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_toroidal(&self) -> bool {
        self.toroidal
    }

    pub fn same_shape(&self, other: &Grid) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        row >= 0 && (row as u64) < self.rows as u64 && col >= 0 && (col as u64) < self.cols as u64
    }

    /// Read a cell. Never fails: a toroidal grid wraps the coordinates, a
    /// clamped grid reports everything outside the board as dead.
    pub fn get_cell_state(&self, row: i64, col: i64) -> CellState {
        if self.cells.is_empty() {
            return CellState::Dead;
        }

        let (row, col) = if self.toroidal {
            (
                row.rem_euclid(self.rows as i64) as usize,
                col.rem_euclid(self.cols as i64) as usize,
            )
        } else if self.in_bounds(row, col) {
            (row as usize, col as usize)
        } else {
            return CellState::Dead;
        };

        self.cells[self.index(row, col)]
    }

    /// Overwrite a single cell. Writes never wrap, even on a toroidal grid.
    pub fn set_cell_state(&mut self, row: i64, col: i64, state: CellState) -> LifeResult<()> {
        if !self.in_bounds(row, col) {
            return Err(self.out_of_bounds(row, col));
        }
        let idx = self.index(row as usize, col as usize);
        self.cells[idx] = state;
        Ok(())
    }

    fn out_of_bounds(&self, row: i64, col: i64) -> LifeError {
        LifeError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Number of alive cells in the Moore neighbourhood, always in `0..=8`
    pub fn count_alive_neighbours(&self, row: i64, col: i64) -> u8 {
        if self.cells.is_empty() {
            return 0;
        }

        // Normalise first so the offsets below cannot overflow on a torus
        let (row, col) = if self.toroidal {
            (
                row.rem_euclid(self.rows as i64),
                col.rem_euclid(self.cols as i64),
            )
        } else {
            (row, col)
        };

        iproduct!(-1i64..=1, -1i64..=1)
            .filter(|&(dr, dc)| (dr, dc) != (0, 0))
            .filter(|&(dr, dc)| match (row.checked_add(dr), col.checked_add(dc)) {
                (Some(r), Some(c)) => self.get_cell_state(r, c).is_alive(),
                _ => false,
            })
            .count() as u8
    }

    /// Copy a pattern verbatim into the top-left corner. Cells the pattern
    /// does not cover keep their state. Nothing is written if any pattern
    /// cell would land outside the board.
    pub fn configure(&mut self, pattern: &[Vec<CellState>]) -> LifeResult<()> {
        for (r, row) in pattern.iter().enumerate() {
            if row.is_empty() {
                continue;
            }
            let (last_row, last_col) = (r as i64, row.len() as i64 - 1);
            if !self.in_bounds(last_row, last_col) {
                return Err(self.out_of_bounds(last_row, last_col));
            }
        }

        for (r, row) in pattern.iter().enumerate().filter(|(_, row)| !row.is_empty()) {
            let start = self.index(r, 0);
            self.cells[start..start + row.len()].copy_from_slice(row);
        }
        Ok(())
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> &[CellState] {
        let start = self.index(row, 0);
        &self.cells[start..start + self.cols]
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [CellState] {
        &mut self.cells
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.rows, 0..self.cols)
            .filter(|&(row, col)| self.cells[self.index(row, col)].is_alive())
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for cell in self.row(row) {
                let symbol = if cell.is_alive() { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn grid_from_digits(rows: &[&[u8]], toroidal: bool) -> Grid {
    let cells = rows
        .iter()
        .map(|row| row.iter().map(|&v| CellState::from(v == 1)).collect())
        .collect();
    Grid::from_cells(cells, toroidal).unwrap()
}
