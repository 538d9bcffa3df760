//! Pixel canvas rendering: filled cells plus grid lines

use super::{CellGeometry, Renderer, Rgb};
use crate::config::RenderConfig;
use crate::error::{LifeError, LifeResult};
use crate::game_of_life::Grid;
use std::io::Write;

/// A 2D drawing surface. Drawing outside the surface is clipped.
pub trait Canvas {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, colour: Rgb);
    fn hline(&mut self, y: u32, colour: Rgb);
    fn vline(&mut self, x: u32, colour: Rgb);
}

/// In-memory RGB surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> LifeResult<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::MissingSurface(format!(
                "framebuffer of {}x{} pixels",
                width, height
            )));
        }
        Ok(Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width as usize * height as usize],
        })
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        (x < self.width && y < self.height).then(|| self.pixels[(y * self.width + x) as usize])
    }

    /// Binary PPM (P6)
    pub fn write_ppm<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        let bytes: Vec<u8> = self.pixels.iter().flat_map(|p| [p.0, p.1, p.2]).collect();
        out.write_all(&bytes)?;
        out.flush()
    }
}

impl Canvas for Framebuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, colour: Rgb) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        for py in y.min(y_end)..y_end {
            let row = (py * self.width) as usize;
            self.pixels[row + x.min(x_end) as usize..row + x_end as usize].fill(colour);
        }
    }

    fn hline(&mut self, y: u32, colour: Rgb) {
        let width = self.width;
        self.fill_rect(0, y, width, 1, colour);
    }

    fn vline(&mut self, x: u32, colour: Rgb) {
        let height = self.height;
        self.fill_rect(x, 0, 1, height, colour);
    }
}

/// Draws every cell as a rectangle in the colour of its state, then the cell
/// borders on top
#[derive(Debug, Clone)]
pub struct CanvasRenderer<C: Canvas> {
    canvas: C,
    alive: Rgb,
    dead: Rgb,
    grid_lines: Rgb,
}

impl<C: Canvas> CanvasRenderer<C> {
    pub fn new(canvas: C, alive: Rgb, dead: Rgb, grid_lines: Rgb) -> Self {
        Self {
            canvas,
            alive,
            dead,
            grid_lines,
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn into_canvas(self) -> C {
        self.canvas
    }

    pub fn geometry(&self, grid: &Grid) -> CellGeometry {
        CellGeometry::for_surface(
            self.canvas.width(),
            self.canvas.height(),
            grid.rows(),
            grid.cols(),
        )
    }
}

impl CanvasRenderer<Framebuffer> {
    /// Off-screen surface sized and coloured from the render settings
    pub fn from_config(render: &RenderConfig) -> anyhow::Result<Self> {
        let (alive, dead, grid_lines) = render.palette()?;
        let surface = Framebuffer::new(render.width, render.height)?;
        Ok(Self::new(surface, alive, dead, grid_lines))
    }
}

impl<C: Canvas> Renderer for CanvasRenderer<C> {
    fn render(&mut self, grid: &Grid, _generation: u64) -> LifeResult<()> {
        let geometry = self.geometry(grid);
        let (cw, ch) = (geometry.cell_width, geometry.cell_height);

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let colour = if grid.get_cell_state(row as i64, col as i64).is_alive() {
                    self.alive
                } else {
                    self.dead
                };
                self.canvas
                    .fill_rect(col as u32 * cw, row as u32 * ch, cw, ch, colour);
            }
        }

        for col in 0..=grid.cols() as u32 {
            self.canvas.vline(col * cw, self.grid_lines);
        }
        for row in 0..=grid.rows() as u32 {
            self.canvas.hline(row * ch, self.grid_lines);
        }

        Ok(())
    }
}
