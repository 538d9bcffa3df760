//! Embedded neighbour-count self-test

use super::{CellState, Grid};
use crate::error::LifeResult;

/// Known 3x3 boards and the alive-neighbour count of their centre cell
pub const NEIGHBOUR_FIXTURES: [([[u8; 3]; 3], u8); 5] = [
    ([[0, 0, 0], [0, 0, 0], [0, 0, 0]], 0),
    ([[1, 1, 1], [0, 0, 1], [0, 0, 0]], 4),
    ([[1, 1, 1], [1, 0, 1], [1, 1, 1]], 8),
    ([[1, 0, 0], [0, 0, 0], [0, 0, 0]], 1),
    ([[1, 1, 1], [0, 0, 0], [0, 0, 0]], 3),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureOutcome {
    pub board: Grid,
    pub expected: u8,
    pub found: u8,
}

impl FixtureOutcome {
    pub fn passed(&self) -> bool {
        self.expected == self.found
    }
}

fn pattern(rows: &[[u8; 3]; 3]) -> Vec<Vec<CellState>> {
    rows.iter()
        .map(|row| row.iter().map(|&v| CellState::from(v == 1)).collect())
        .collect()
}

/// Load each fixture into one clamped 3x3 board and count around `(1, 1)`
pub fn run_neighbour_self_test() -> LifeResult<Vec<FixtureOutcome>> {
    let mut board = Grid::new(3, 3, false);
    let mut outcomes = Vec::with_capacity(NEIGHBOUR_FIXTURES.len());

    for (rows, expected) in &NEIGHBOUR_FIXTURES {
        board.configure(&pattern(rows))?;
        outcomes.push(FixtureOutcome {
            board: board.clone(),
            expected: *expected,
            found: board.count_alive_neighbours(1, 1),
        });
    }

    Ok(outcomes)
}
