//! Game of Life core functionality

pub mod cell;
pub mod engine;
pub mod fixtures;
pub mod grid;
pub mod io;
pub mod rules;

pub use cell::CellState;
pub use engine::LifeEngine;
pub use fixtures::{run_neighbour_self_test, FixtureOutcome};
pub use grid::Grid;
pub use io::{create_example_patterns, load_grid_from_file, load_pattern_from_file, save_grid_to_file};
pub use rules::GameOfLifeRules;
