//! Drawing surfaces for a grid
//!
//! The engine never depends on pixels: a [`Renderer`] only needs the grid's
//! dimensions and `get_cell_state`.

pub mod canvas;
pub mod terminal;

pub use canvas::{Canvas, CanvasRenderer, Framebuffer};
pub use terminal::TerminalRenderer;

use crate::error::LifeResult;
use crate::game_of_life::Grid;

/// Anything that can show the current generation
pub trait Renderer {
    fn render(&mut self, grid: &Grid, generation: u64) -> LifeResult<()>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, grid: &Grid, generation: u64) -> LifeResult<()> {
        (**self).render(grid, generation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Parse `#RRGGBB`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Pixel size of one cell on a surface; also maps pointer positions to cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGeometry {
    pub cell_width: u32,
    pub cell_height: u32,
}

impl CellGeometry {
    /// Split a `width x height` surface evenly across the board. Leftover
    /// pixels on the right and bottom edges belong to no cell.
    pub fn for_surface(width: u32, height: u32, rows: usize, cols: usize) -> Self {
        let span = |pixels: u32, cells: usize| (pixels as usize / cells.max(1)).max(1) as u32;
        Self {
            cell_width: span(width, cols),
            cell_height: span(height, rows),
        }
    }

    /// `(row, col)` of the cell under pixel `(x, y)`. The result may lie
    /// outside the board when the pointer is in the leftover margin.
    pub fn cell_at(&self, x: u32, y: u32) -> (i64, i64) {
        ((y / self.cell_height) as i64, (x / self.cell_width) as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_colours() {
        assert_eq!(Rgb::from_hex("#FF5050"), Some(Rgb(255, 80, 80)));
        assert_eq!(Rgb::from_hex("#505050"), Some(Rgb(80, 80, 80)));
        assert_eq!(Rgb::from_hex("FF5050"), None);
        assert_eq!(Rgb::from_hex("#FF50"), None);
        assert_eq!(Rgb::from_hex("#GG0000"), None);
        assert_eq!(Rgb::from_hex("#ééé"), None);
    }

    #[test]
    fn test_geometry_for_demo_surface() {
        let geometry = CellGeometry::for_surface(800, 800, 18, 18);
        assert_eq!(geometry.cell_width, 44);
        assert_eq!(geometry.cell_height, 44);

        assert_eq!(geometry.cell_at(0, 0), (0, 0));
        assert_eq!(geometry.cell_at(43, 44), (1, 0));
        assert_eq!(geometry.cell_at(100, 10), (0, 2));
        // 18 * 44 = 792, so the last 8 pixels fall off the board
        assert_eq!(geometry.cell_at(799, 0), (0, 18));
    }

    #[test]
    fn test_geometry_never_zero() {
        let geometry = CellGeometry::for_surface(5, 5, 10, 10);
        assert_eq!(geometry.cell_width, 1);
        assert_eq!(geometry.cell_at(4, 4), (4, 4));
    }
}
