//! Pattern files: one row per line, '1' for alive cells and '0' for dead cells

use super::{CellState, Grid};
use anyhow::{Context, Result};
use std::path::Path;

/// Load a pattern from a text file
pub fn load_pattern_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<CellState>>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_pattern(&content)
        .with_context(|| format!("Failed to parse pattern file: {}", path.as_ref().display()))
}

/// Load a pattern file as a grid sized exactly to the pattern
pub fn load_grid_from_file<P: AsRef<Path>>(path: P, toroidal: bool) -> Result<Grid> {
    Grid::from_cells(load_pattern_from_file(path)?, toroidal)
}

/// Parse rows of '0'/'1' characters. Blank lines are skipped; all rows must
/// have the same length.
pub fn parse_pattern(content: &str) -> Result<Vec<Vec<CellState>>> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Pattern is empty or contains no valid rows");
    }

    let width = lines[0].chars().count();
    let mut cells = Vec::with_capacity(lines.len());

    for (row_idx, line) in lines.iter().enumerate() {
        let row = line
            .chars()
            .enumerate()
            .map(|(col_idx, ch)| match ch {
                '0' => Ok(CellState::Dead),
                '1' => Ok(CellState::Alive),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    row_idx,
                    col_idx
                ),
            })
            .collect::<Result<Vec<_>>>()?;

        if row.len() != width {
            anyhow::bail!(
                "Row {} has length {}, expected {} (all rows must have the same length)",
                row_idx,
                row.len(),
                width
            );
        }
        cells.push(row);
    }

    Ok(cells)
}

/// Parse a grid from a string representation
pub fn parse_grid_from_string(content: &str, toroidal: bool) -> Result<Grid> {
    Grid::from_cells(parse_pattern(content)?, toroidal)
}

/// Save a grid to a text file
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, grid_to_string(grid))
        .with_context(|| format!("Failed to write grid to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a grid to string representation
pub fn grid_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.rows() * (grid.cols() + 1));

    for row in 0..grid.rows() {
        for cell in grid.row(row) {
            result.push(if cell.is_alive() { '1' } else { '0' });
        }
        result.push('\n');
    }

    result
}

/// Example patterns written by `setup`
pub const EXAMPLE_PATTERNS: [(&str, &str); 5] = [
    ("glider", "010\n001\n111\n"),
    ("blinker", "000\n111\n000\n"),
    ("block", "0000\n0110\n0110\n0000\n"),
    ("beacon", "1100\n1100\n0011\n0011\n"),
    ("toad", "0000\n0111\n1110\n0000\n"),
];

/// Create example pattern files
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    for (name, content) in EXAMPLE_PATTERNS {
        let file = dir.join(format!("{}.txt", name));
        std::fs::write(&file, content)
            .with_context(|| format!("Failed to write {}", file.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_grid_from_string() {
        let grid = parse_grid_from_string("010\n101\n010\n", false).unwrap();

        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.living_cells(), vec![(0, 1), (1, 0), (1, 2), (2, 1)]);
    }

    #[test]
    fn test_blank_lines_and_padding_ignored() {
        let pattern = parse_pattern("\n  011 \n\n110\n").unwrap();
        assert_eq!(pattern.len(), 2);
        assert_eq!(pattern[0], vec![CellState::Dead, CellState::Alive, CellState::Alive]);
    }

    #[test]
    fn test_grid_to_string() {
        let grid = parse_grid_from_string("0110\n1001\n", true).unwrap();
        assert_eq!(grid_to_string(&grid), "0110\n1001\n");
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested/test_grid.txt");

        let original = parse_grid_from_string("101\n010\n", false).unwrap();
        save_grid_to_file(&original, &file_path).unwrap();

        let loaded = load_grid_from_file(&file_path, false).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_invalid_input() {
        assert!(parse_pattern("010\n1X1\n010\n").is_err());
        assert!(parse_pattern("010\n11\n010\n").is_err());
        assert!(parse_pattern("").is_err());
        assert!(load_pattern_from_file("/definitely/not/here.txt").is_err());
    }

    #[test]
    fn test_create_example_patterns() {
        let temp_dir = tempdir().unwrap();
        create_example_patterns(temp_dir.path()).unwrap();

        for (name, _) in EXAMPLE_PATTERNS {
            assert!(temp_dir.path().join(format!("{}.txt", name)).exists());
        }

        let glider = load_pattern_from_file(temp_dir.path().join("glider.txt")).unwrap();
        let alive: usize = glider.iter().flatten().filter(|c| c.is_alive()).count();
        assert_eq!(alive, 5);
    }
}
