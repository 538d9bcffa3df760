//! Double-buffered simulation engine

use super::{CellState, GameOfLifeRules, Grid};
use crate::error::LifeResult;
use log::debug;

/// Owns two equally sized grids and flips between them on every generation.
///
/// `buffers[front]` is the current generation; the other slot is scratch space
/// that `advance` fully repopulates before it becomes current.
#[derive(Debug, Clone)]
pub struct LifeEngine {
    buffers: [Grid; 2],
    front: usize,
    generation: u64,
}

impl LifeEngine {
    pub fn new(rows: usize, cols: usize, toroidal: bool) -> Self {
        let grid = Grid::new(rows, cols, toroidal);
        Self {
            buffers: [grid.clone(), grid],
            front: 0,
            generation: 0,
        }
    }

    /// Start from an existing grid
    pub fn from_grid(grid: Grid) -> Self {
        let scratch = Grid::new(grid.rows(), grid.cols(), grid.is_toroidal());
        Self {
            buffers: [grid, scratch],
            front: 0,
            generation: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.current().rows()
    }

    pub fn cols(&self) -> usize {
        self.current().cols()
    }

    pub fn is_toroidal(&self) -> bool {
        self.current().is_toroidal()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current(&self) -> &Grid {
        &self.buffers[self.front]
    }

    /// The scratch buffer. Its contents are whatever the generation before
    /// last left behind.
    pub fn next(&self) -> &Grid {
        &self.buffers[1 - self.front]
    }

    pub fn get_cell_state(&self, row: i64, col: i64) -> CellState {
        self.current().get_cell_state(row, col)
    }

    pub fn set_cell_state(&mut self, row: i64, col: i64, state: CellState) -> LifeResult<()> {
        self.buffers[self.front].set_cell_state(row, col, state)
    }

    pub fn count_alive_neighbours(&self, row: i64, col: i64) -> u8 {
        self.current().count_alive_neighbours(row, col)
    }

    /// Seed the current generation from a pattern anchored at the top-left corner
    pub fn configure(&mut self, pattern: &[Vec<CellState>]) -> LifeResult<()> {
        self.buffers[self.front].configure(pattern)
    }

    /// Compute the next generation and make it current. Returns the new
    /// generation number.
    pub fn advance(&mut self) -> LifeResult<u64> {
        let (head, tail) = self.buffers.split_at_mut(1);
        let (current, next) = if self.front == 0 {
            (&head[0], &mut tail[0])
        } else {
            (&tail[0], &mut head[0])
        };
        GameOfLifeRules::step(current, next)?;

        self.front = 1 - self.front;
        self.generation += 1;
        debug!(
            "generation {}: {} alive",
            self.generation,
            self.current().living_count()
        );
        Ok(self.generation)
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        for grid in &mut self.buffers {
            grid.clear();
        }
        self.generation = 0;
    }

    pub fn living_count(&self) -> usize {
        self.current().living_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeError;
    use crate::game_of_life::grid::grid_from_digits;
    use CellState::{Alive, Dead};

    fn blinker_engine() -> LifeEngine {
        let mut engine = LifeEngine::new(5, 5, false);
        for col in 1..=3 {
            engine.set_cell_state(2, col, Alive).unwrap();
        }
        engine
    }

    #[test]
    fn test_new_engine_is_dead() {
        let engine = LifeEngine::new(18, 18, true);
        assert_eq!(engine.living_count(), 0);
        assert_eq!(engine.generation(), 0);
        assert!(engine.is_toroidal());
        assert!(engine.current().same_shape(engine.next()));
    }

    #[test]
    fn test_advance_swaps_buffers() {
        let mut engine = blinker_engine();
        let before = engine.current().clone();

        let mut expected = Grid::new(5, 5, false);
        GameOfLifeRules::step(&before, &mut expected).unwrap();

        assert_eq!(engine.advance().unwrap(), 1);
        assert_eq!(engine.current(), &expected);
        // The previous generation now sits in the scratch slot
        assert_eq!(engine.next(), &before);
    }

    #[test]
    fn test_scratch_buffer_reused_without_stale_data() {
        let mut engine = blinker_engine();
        engine.advance().unwrap();
        engine.advance().unwrap();
        engine.advance().unwrap();

        let vertical = grid_from_digits(
            &[
                &[0, 0, 0, 0, 0],
                &[0, 0, 1, 0, 0],
                &[0, 0, 1, 0, 0],
                &[0, 0, 1, 0, 0],
                &[0, 0, 0, 0, 0],
            ],
            false,
        );
        assert_eq!(engine.current(), &vertical);
        assert_eq!(engine.generation(), 3);
    }

    #[test]
    fn test_writes_after_swap_target_current() {
        let mut engine = LifeEngine::new(3, 3, false);
        engine.advance().unwrap();
        engine.set_cell_state(1, 1, Alive).unwrap();

        assert_eq!(engine.get_cell_state(1, 1), Alive);
        assert_eq!(engine.next().get_cell_state(1, 1), Dead);
    }

    #[test]
    fn test_out_of_bounds_write() {
        let mut engine = LifeEngine::new(3, 3, true);
        assert!(matches!(
            engine.set_cell_state(-1, 0, Alive),
            Err(LifeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_clear_resets_generation() {
        let mut engine = blinker_engine();
        engine.advance().unwrap();
        engine.clear();
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.living_count(), 0);
        assert!(engine.next().is_empty());
    }

    #[test]
    fn test_from_grid_keeps_edge_policy() {
        let grid = grid_from_digits(&[&[1, 0, 0], &[0, 0, 0], &[0, 0, 0]], true);
        let engine = LifeEngine::from_grid(grid);
        assert!(engine.is_toroidal());
        assert_eq!(engine.count_alive_neighbours(2, 2), 1);
    }
}
