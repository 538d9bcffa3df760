//! Configuration settings for the Game of Life engine and its front ends

use crate::render::Rgb;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub board: BoardConfig,
    pub playback: PlaybackConfig,
    pub render: RenderConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    /// Wrap neighbour lookups around the edges instead of treating them as dead
    pub toroidal: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Speed selector value; the tick interval is `speed * tick_millis`
    pub speed: u32,
    pub tick_millis: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub alive_colour: String,
    pub dead_colour: String,
    pub grid_colour: String,
    /// ANSI colours in the terminal renderer
    pub colour_output: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// Pattern copied into the top-left corner at startup
    pub pattern_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
    Ppm,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Ppm => "ppm",
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 18,
            cols: 18,
            toroidal: true,
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed: 1,
            tick_millis: 100,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            alive_colour: "#FF5050".to_string(),
            dead_colour: "#505050".to_string(),
            grid_colour: "#000000".to_string(),
            colour_output: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            output_directory: PathBuf::from("output"),
        }
    }
}

impl PlaybackConfig {
    /// Interval at speed 1
    pub fn interval_unit(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis.saturating_mul(self.speed as u64))
    }
}

impl RenderConfig {
    /// Parsed `(alive, dead, grid)` colours
    pub fn palette(&self) -> Result<(Rgb, Rgb, Rgb)> {
        let parse = |name: &str, value: &str| {
            Rgb::from_hex(value).with_context(|| format!("Invalid {} colour '{}'", name, value))
        };
        Ok((
            parse("alive", &self.alive_colour)?,
            parse("dead", &self.dead_colour)?,
            parse("grid", &self.grid_colour)?,
        ))
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.board.rows == 0 || self.board.cols == 0 {
            anyhow::bail!(
                "Board dimensions must be positive, got {}x{}",
                self.board.rows,
                self.board.cols
            );
        }

        if (self.render.width as usize) < self.board.cols
            || (self.render.height as usize) < self.board.rows
        {
            anyhow::bail!(
                "Surface {}x{} is too small for a {}x{} board",
                self.render.width,
                self.render.height,
                self.board.rows,
                self.board.cols
            );
        }

        if self.playback.tick_millis == 0 {
            anyhow::bail!("Playback tick must be at least 1ms");
        }

        self.render.palette()?;

        if let Some(pattern) = &self.input.pattern_file {
            if !pattern.exists() {
                anyhow::bail!("Pattern file does not exist: {}", pattern.display());
            }
        }

        Ok(())
    }

    /// Where a saved board goes when no explicit path is given:
    /// `<output_directory>/<name>.<format extension>`
    pub fn default_output_path(&self, name: &str) -> PathBuf {
        self.output
            .output_directory
            .join(format!("{}.{}", name, self.output.format.extension()))
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.board.rows = rows;
        }
        if let Some(cols) = cli_overrides.cols {
            self.board.cols = cols;
        }
        if let Some(toroidal) = cli_overrides.toroidal {
            self.board.toroidal = toroidal;
        }
        if let Some(speed) = cli_overrides.speed {
            self.playback.speed = speed;
        }
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.input.pattern_file = Some(pattern_file.clone());
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub toroidal: Option<bool>,
    pub speed: Option<u32>,
    pub pattern_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}
