//! Display and output formatting utilities

use crate::game_of_life::{FixtureOutcome, Grid};

/// Format grids and reports for the console
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::new();
        for row in 0..grid.rows() {
            for cell in grid.row(row) {
                output.push(if cell.is_alive() { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for col in 0..grid.cols() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for row in 0..grid.rows() {
            output.push_str(&format!("{:2} ", row));
            for cell in grid.row(row) {
                output.push_str(if cell.is_alive() { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// One block per fixture: expected vs found, then the board
    pub fn format_self_test(outcomes: &[FixtureOutcome]) -> String {
        let mut output = String::new();
        for (i, outcome) in outcomes.iter().enumerate() {
            let status = if outcome.passed() {
                ColorOutput::success("ok")
            } else {
                ColorOutput::error("FAILED")
            };
            output.push_str(&format!(
                "Fixture {}: expected {}, found {} [{}]\n",
                i + 1,
                outcome.expected,
                outcome.found,
                status
            ));
            output.push_str(&Self::format_grid_compact(&outcome.board));
            output.push('\n');
        }
        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            Self::paint(text, color)
        } else {
            text.to_string()
        }
    }

    /// Wrap text in ANSI escapes unconditionally
    pub fn paint(text: &str, color: Color) -> String {
        format!("\x1b[{}m{}\x1b[0m", color.code(), text)
    }

    /// Check if terminal supports color
    pub fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
}

impl Color {
    pub fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Cyan => 36,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::io::parse_grid_from_string;
    use crate::game_of_life::run_neighbour_self_test;

    #[test]
    fn test_grid_formatting() {
        let grid = parse_grid_from_string("101\n010\n101\n", false).unwrap();

        let compact = GridFormatter::format_grid_compact(&grid);
        assert_eq!(compact, "█·█\n·█·\n█·█\n");

        let with_coords = GridFormatter::format_grid_with_coords(&grid);
        assert!(with_coords.contains(" 0 1 2"));
        assert!(with_coords.contains(" 1 ··██··"));
    }

    #[test]
    fn test_self_test_report() {
        let outcomes = run_neighbour_self_test().unwrap();
        let report = GridFormatter::format_self_test(&outcomes);
        assert!(report.contains("Fixture 3: expected 8, found 8"));
        assert!(!report.contains("FAILED"));
    }

    #[test]
    fn test_color_output() {
        assert_eq!(ColorOutput::paint("x", Color::Red), "\x1b[31mx\x1b[0m");
        assert!(ColorOutput::success("OK").contains("OK"));
    }
}
