//! Conway's rule table and the single-generation step

use super::{CellState, Grid};
use crate::error::{LifeError, LifeResult};
use rayon::prelude::*;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Compute the next generation of `current` into `next`.
    ///
    /// Every cell of `next` is overwritten and `current` is only read, so the
    /// order in which cells are evaluated does not matter. Rows are computed
    /// in parallel.
    pub fn step(current: &Grid, next: &mut Grid) -> LifeResult<()> {
        if !current.same_shape(next) {
            return Err(LifeError::DimensionMismatch {
                left_rows: current.rows(),
                left_cols: current.cols(),
                right_rows: next.rows(),
                right_cols: next.cols(),
            });
        }

        let cols = current.cols();
        if cols == 0 {
            return Ok(());
        }

        next.cells_mut()
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(row, out)| {
                for (col, cell) in out.iter_mut().enumerate() {
                    let (r, c) = (row as i64, col as i64);
                    *cell = Self::next_state(
                        current.get_cell_state(r, c),
                        current.count_alive_neighbours(r, c),
                    );
                }
            });

        Ok(())
    }

    /// Neighbour counts that bring a dead cell to life
    pub const BIRTH: [u8; 1] = [3];

    /// Neighbour counts that keep a live cell alive
    pub const SURVIVAL: [u8; 2] = [2, 3];

    /// State of a cell in the next generation given its current state and
    /// neighbour count
    pub fn next_state(state: CellState, neighbours: u8) -> CellState {
        let counts: &[u8] = match state {
            CellState::Alive => &Self::SURVIVAL,
            CellState::Dead => &Self::BIRTH,
        };
        CellState::from(counts.contains(&neighbours))
    }
}
