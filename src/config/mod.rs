//! Configuration management

pub mod settings;

pub use settings::{
    BoardConfig, CliOverrides, InputConfig, OutputConfig, OutputFormat, PlaybackConfig,
    RenderConfig, Settings,
};
