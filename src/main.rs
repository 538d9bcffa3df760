//! Command line front end for the Game of Life engine

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use life_engine::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{create_example_patterns, run_neighbour_self_test, save_grid_to_file},
    render::{CanvasRenderer, Framebuffer, TerminalRenderer},
    utils::{ColorOutput, GridFormatter},
    App, Event,
};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "life_engine")]
#[command(about = "Conway's Game of Life on a fixed-size board")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct BoardArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Pattern file copied into the top-left corner (overrides config)
    #[arg(short, long)]
    pattern: Option<PathBuf>,

    /// Board rows (overrides config)
    #[arg(long)]
    rows: Option<usize>,

    /// Board columns (overrides config)
    #[arg(long)]
    cols: Option<usize>,

    /// Wrap neighbours around the board edges
    #[arg(long, conflicts_with = "clamped")]
    toroidal: bool,

    /// Treat everything beyond the board edges as dead
    #[arg(long)]
    clamped: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the board in the terminal
    Run {
        #[command(flatten)]
        board: BoardArgs,

        /// Speed selector; the tick interval is speed x tick_millis (overrides config)
        #[arg(short, long)]
        speed: Option<u32>,

        /// Stop after this many generations
        #[arg(short, long)]
        generations: Option<u64>,
    },

    /// Advance a board headlessly and print or save the result
    Step {
        #[command(flatten)]
        board: BoardArgs,

        /// Number of generations
        #[arg(short, long, default_value_t = 1)]
        generations: u64,

        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Save to the output directory, named after the pattern file
        #[arg(long, conflicts_with = "output")]
        save: bool,

        /// Output directory used by --save (overrides config)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Check neighbour counting against the embedded fixtures
    SelfTest,

    /// Create a default configuration and example patterns
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            board,
            speed,
            generations,
        } => run_command(board, speed, generations),
        Commands::Step {
            board,
            generations,
            output,
            save,
            output_dir,
            format,
        } => {
            let target = match (output, save) {
                (Some(path), _) => OutputTarget::File(path),
                (None, true) => OutputTarget::OutputDirectory(output_dir),
                (None, false) => OutputTarget::None,
            };
            step_command(board, generations, target, format)
        }
        Commands::SelfTest => self_test_command(),
        Commands::Setup { directory, force } => setup_command(directory, force),
    };

    if let Err(e) = &result {
        error!("{:#}", e);
    }
    result
}

/// Where `step` writes the final board
#[derive(Debug)]
enum OutputTarget {
    None,
    File(PathBuf),
    /// `<output_directory>/<pattern name>.<extension>`, directory optionally overridden
    OutputDirectory(Option<PathBuf>),
}

fn load_settings(board: &BoardArgs, overrides: CliOverrides) -> Result<Settings> {
    let mut settings = if board.config.exists() {
        Settings::from_file(&board.config)
            .with_context(|| format!("Failed to load config from {}", board.config.display()))?
    } else {
        info!("config file {} not found, using defaults", board.config.display());
        Settings::default()
    };

    let toroidal = match (board.toroidal, board.clamped) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    settings.merge_with_cli(&CliOverrides {
        rows: board.rows,
        cols: board.cols,
        toroidal,
        pattern_file: board.pattern.clone(),
        ..overrides
    });

    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn run_command(board: BoardArgs, speed: Option<u32>, generations: Option<u64>) -> Result<()> {
    let settings = load_settings(
        &board,
        CliOverrides {
            speed,
            ..Default::default()
        },
    )?;

    let mut app = App::start(&settings, |s| {
        Ok(TerminalRenderer::stdout(s.render.colour_output)?)
    })?;

    app.handle(Event::Play)?;
    while generations.map_or(true, |limit| app.engine().generation() < limit) {
        std::thread::sleep(app.playback().interval());
        app.handle(Event::Tick)?;
    }
    app.handle(Event::Stop)?;

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Stopped after {} generations, {} alive",
            app.engine().generation(),
            app.engine().living_count()
        ))
    );
    Ok(())
}

fn step_command(
    board: BoardArgs,
    generations: u64,
    target: OutputTarget,
    format: Option<OutputFormat>,
) -> Result<()> {
    let output_dir = match &target {
        OutputTarget::OutputDirectory(dir) => dir.clone(),
        _ => None,
    };
    let settings = load_settings(
        &board,
        CliOverrides {
            format,
            output_dir,
            ..Default::default()
        },
    )?;

    let mut app = App::start(&settings, |s| CanvasRenderer::from_config(&s.render))?;

    let start_time = Instant::now();
    for _ in 0..generations {
        app.handle(Event::Next)?;
    }
    let elapsed = start_time.elapsed();

    let grid = app.engine().current();
    println!("Generation {} ({} alive):", app.engine().generation(), grid.living_count());
    println!("{}", GridFormatter::format_grid_with_coords(grid));
    info!("{} generations in {:.3}s", generations, elapsed.as_secs_f64());

    let path = match target {
        OutputTarget::None => return Ok(()),
        OutputTarget::File(path) => path,
        OutputTarget::OutputDirectory(_) => {
            let name = settings
                .input
                .pattern_file
                .as_deref()
                .and_then(|p| p.file_stem())
                .and_then(|stem| stem.to_str())
                .unwrap_or("board");
            settings.default_output_path(name)
        }
    };
    save_output(&app, &path, settings.output.format)?;
    println!("{}", ColorOutput::success(&format!("Saved to {}", path.display())));

    Ok(())
}

fn save_output(
    app: &App<CanvasRenderer<Framebuffer>>,
    path: &Path,
    format: OutputFormat,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    match format {
        OutputFormat::Text => save_grid_to_file(app.engine().current(), path)?,
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(app.engine().current())?;
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        OutputFormat::Ppm => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            app.renderer()
                .canvas()
                .write_ppm(std::io::BufWriter::new(file))
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
    }
    Ok(())
}

fn self_test_command() -> Result<()> {
    let outcomes = run_neighbour_self_test()?;
    print!("{}", GridFormatter::format_self_test(&outcomes));

    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    if failed > 0 {
        anyhow::bail!("{} of {} neighbour fixtures failed", failed, outcomes.len());
    }
    println!("{}", ColorOutput::success("All neighbour fixtures passed"));
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");
    let output_dir = directory.join("output");

    for dir in [&config_dir, &patterns_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let mut settings = Settings::default();
        settings.output.output_directory = output_dir.clone();
        settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!("Skipped: {} (already exists)", config_path.display()))
        );
    }

    create_example_patterns(&patterns_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    let clamped_path = config_dir.join("clamped.yaml");
    let mut clamped = Settings::default();
    clamped.board.toroidal = false;
    clamped.input.pattern_file = Some(patterns_dir.join("glider.txt"));
    clamped.to_file(&clamped_path)?;
    println!("Created: {}", clamped_path.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_engine::game_of_life::load_grid_from_file;
    use life_engine::Grid;
    use tempfile::tempdir;

    fn board_args(dir: &Path, pattern: Option<PathBuf>) -> BoardArgs {
        BoardArgs {
            config: dir.join("missing.yaml"),
            pattern,
            rows: Some(6),
            cols: Some(6),
            toroidal: false,
            clamped: true,
        }
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "life_engine", "run", "--rows", "10", "--toroidal", "--speed", "3",
        ]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["life_engine", "step", "--toroidal", "--clamped"]);
        assert!(cli.is_err());

        let cli = Cli::try_parse_from(["life_engine", "step", "--format", "ppm"]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["life_engine", "step", "--save", "--output", "x.txt"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf(), false).unwrap();

        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("patterns/glider.txt").exists());
        Settings::from_file(&temp_dir.path().join("config/clamped.yaml")).unwrap();
    }

    #[test]
    fn test_self_test_command() {
        assert!(self_test_command().is_ok());
    }

    #[test]
    fn test_step_command_outputs() {
        let temp_dir = tempdir().unwrap();
        let pattern = temp_dir.path().join("blinker.txt");
        std::fs::write(&pattern, "000\n111\n000\n").unwrap();

        let text_out = temp_dir.path().join("out/blinker.txt");
        step_command(
            board_args(temp_dir.path(), Some(pattern.clone())),
            1,
            OutputTarget::File(text_out.clone()),
            Some(OutputFormat::Text),
        )
        .unwrap();
        let grid = load_grid_from_file(&text_out, false).unwrap();
        assert_eq!(grid.living_cells(), vec![(0, 1), (1, 1), (2, 1)]);

        let json_out = temp_dir.path().join("out/blinker.json");
        step_command(
            board_args(temp_dir.path(), Some(pattern.clone())),
            2,
            OutputTarget::File(json_out.clone()),
            Some(OutputFormat::Json),
        )
        .unwrap();
        let grid: Grid = serde_json::from_str(&std::fs::read_to_string(&json_out).unwrap()).unwrap();
        assert_eq!(grid.living_cells(), vec![(1, 0), (1, 1), (1, 2)]);

        let ppm_out = temp_dir.path().join("out/blinker.ppm");
        step_command(
            board_args(temp_dir.path(), Some(pattern)),
            1,
            OutputTarget::File(ppm_out.clone()),
            Some(OutputFormat::Ppm),
        )
        .unwrap();
        let bytes = std::fs::read(&ppm_out).unwrap();
        assert!(bytes.starts_with(b"P6\n800 800\n255\n"));
    }

    #[test]
    fn test_step_saves_into_output_directory() {
        let temp_dir = tempdir().unwrap();
        let pattern = temp_dir.path().join("blinker.txt");
        std::fs::write(&pattern, "000\n111\n000\n").unwrap();
        let frames = temp_dir.path().join("frames");

        step_command(
            board_args(temp_dir.path(), Some(pattern)),
            1,
            OutputTarget::OutputDirectory(Some(frames.clone())),
            Some(OutputFormat::Json),
        )
        .unwrap();

        let saved = frames.join("blinker.json");
        let grid: Grid = serde_json::from_str(&std::fs::read_to_string(&saved).unwrap()).unwrap();
        assert_eq!(grid.living_cells(), vec![(0, 1), (1, 1), (2, 1)]);
    }
}
