//! Text rendering for playback in a terminal

use super::Renderer;
use crate::error::{LifeError, LifeResult};
use crate::game_of_life::Grid;
use crate::utils::{Color, ColorOutput};
use std::io::{IsTerminal, Stdout, Write};

pub struct TerminalRenderer<W: Write> {
    out: W,
    colour: bool,
    clear_screen: bool,
}

impl TerminalRenderer<Stdout> {
    /// Render to stdout, redrawing in place. Fails when stdout is not a terminal.
    pub fn stdout(colour: bool) -> LifeResult<Self> {
        let out = std::io::stdout();
        if !out.is_terminal() {
            return Err(LifeError::MissingSurface("stdout is not a terminal".to_string()));
        }
        Ok(Self {
            out,
            colour: colour && ColorOutput::supports_color(),
            clear_screen: true,
        })
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Append frames to any writer, without colours or cursor movement
    pub fn plain(out: W) -> Self {
        Self {
            out,
            colour: false,
            clear_screen: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.colour {
            ColorOutput::paint(text, color)
        } else {
            text.to_string()
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, grid: &Grid, generation: u64) -> LifeResult<()> {
        let mut frame = String::new();
        if self.clear_screen {
            frame.push_str("\x1b[H\x1b[2J");
        }
        frame.push_str(&format!(
            "Generation {} ({} alive)\n",
            generation,
            grid.living_count()
        ));

        for row in 0..grid.rows() {
            let line: String = grid
                .row(row)
                .iter()
                .map(|cell| if cell.is_alive() { '█' } else { '·' })
                .collect();
            let color = if line.contains('█') { Color::Red } else { Color::Cyan };
            frame.push_str(&self.paint(&line, color));
            frame.push('\n');
        }

        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::io::parse_grid_from_string;

    #[test]
    fn test_plain_frame() {
        let grid = parse_grid_from_string("010\n000\n", false).unwrap();
        let mut renderer = TerminalRenderer::plain(Vec::new());
        renderer.render(&grid, 7).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, "Generation 7 (1 alive)\n·█·\n···\n");
    }

    #[test]
    fn test_frames_append() {
        let grid = Grid::new(1, 2, true);
        let mut renderer = TerminalRenderer::plain(Vec::new());
        renderer.render(&grid, 0).unwrap();
        renderer.render(&grid, 1).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text.matches("Generation").count(), 2);
    }
}
