//! Conway's Game of Life on a fixed-size board
//!
//! The core is [`LifeEngine`]: a double-buffered grid with clamped or toroidal
//! edges. Rendering, pointer input and playback sit around it in [`render`],
//! [`app`] and [`playback`].

pub mod app;
pub mod config;
pub mod error;
pub mod game_of_life;
pub mod playback;
pub mod render;
pub mod utils;

pub use app::{App, Event};
pub use config::Settings;
pub use error::{LifeError, LifeResult};
pub use game_of_life::{CellState, Grid, LifeEngine};

use anyhow::Result;

/// Run `generations` steps from a starting grid and return the final one
pub fn simulate(grid: Grid, generations: u64) -> Result<Grid> {
    let mut engine = LifeEngine::from_grid(grid);
    for _ in 0..generations {
        engine.advance()?;
    }
    Ok(engine.current().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::io::parse_grid_from_string;

    #[test]
    fn test_simulate_blinker_period() {
        let grid = parse_grid_from_string("00000\n00000\n01110\n00000\n00000\n", false).unwrap();
        assert_eq!(simulate(grid.clone(), 2).unwrap(), grid);
        assert_ne!(simulate(grid.clone(), 1).unwrap(), grid);
        assert_eq!(simulate(grid.clone(), 0).unwrap(), grid);
    }
}
