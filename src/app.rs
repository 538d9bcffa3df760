//! Event-driven front end: one engine, one drawing surface, one playback control

use crate::config::Settings;
use crate::error::LifeResult;
use crate::game_of_life::{load_pattern_from_file, CellState, LifeEngine};
use crate::playback::Playback;
use crate::render::{CellGeometry, Renderer};
use anyhow::{Context, Result};
use log::{debug, info, warn};

/// Input delivered to the app, one at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Pointer click at surface pixel coordinates
    Click { x: u32, y: u32 },
    /// Advance exactly one generation
    Next,
    Play,
    Stop,
    SetSpeed(u32),
    /// Recurring playback timer
    Tick,
}

pub struct App<R: Renderer> {
    engine: LifeEngine,
    renderer: R,
    playback: Playback,
    geometry: CellGeometry,
}

impl<R: Renderer> App<R> {
    /// Build the engine from settings, seed it from the configured pattern
    /// file and draw the first frame
    pub fn new(settings: &Settings, renderer: R) -> Result<Self> {
        let board = &settings.board;
        let mut engine = LifeEngine::new(board.rows, board.cols, board.toroidal);

        if let Some(path) = &settings.input.pattern_file {
            let pattern = load_pattern_from_file(path)?;
            engine
                .configure(&pattern)
                .with_context(|| format!("Pattern {} does not fit the board", path.display()))?;
        }

        let mut app = Self {
            engine,
            renderer,
            playback: Playback::new(settings.playback.speed, settings.playback.interval_unit()),
            geometry: CellGeometry::for_surface(
                settings.render.width,
                settings.render.height,
                board.rows,
                board.cols,
            ),
        };
        info!(
            "board {}x{} ({}), {} alive",
            board.rows,
            board.cols,
            if board.toroidal { "toroidal" } else { "clamped" },
            app.engine.living_count()
        );
        app.redraw()?;
        Ok(app)
    }

    /// Acquire the drawing surface, then build the app on it. Startup aborts
    /// with [`LifeError::MissingSurface`] when no surface can be obtained.
    ///
    /// [`LifeError::MissingSurface`]: crate::error::LifeError::MissingSurface
    pub fn start<F>(settings: &Settings, acquire: F) -> Result<Self>
    where
        F: FnOnce(&Settings) -> Result<R>,
    {
        let renderer = acquire(settings).context("Failed to acquire drawing surface")?;
        Self::new(settings, renderer)
    }

    pub fn engine(&self) -> &LifeEngine {
        &self.engine
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn geometry(&self) -> CellGeometry {
        self.geometry
    }

    fn redraw(&mut self) -> LifeResult<()> {
        self.renderer
            .render(self.engine.current(), self.engine.generation())
    }

    /// Handle one event to completion
    pub fn handle(&mut self, event: Event) -> LifeResult<()> {
        match event {
            Event::Click { x, y } => {
                let (row, col) = self.geometry.cell_at(x, y);
                if let Err(e) = self.engine.set_cell_state(row, col, CellState::Alive) {
                    warn!("click at ({}, {}) ignored: {}", x, y, e);
                    return Err(e);
                }
                debug!("click at ({}, {}) -> cell ({}, {})", x, y, row, col);
                self.redraw()
            }
            Event::Next => {
                self.engine.advance()?;
                self.redraw()
            }
            Event::Play => {
                self.playback.start();
                Ok(())
            }
            Event::Stop => {
                self.playback.stop();
                Ok(())
            }
            Event::SetSpeed(speed) => {
                self.playback.set_speed(speed);
                Ok(())
            }
            Event::Tick => {
                self.playback.tick(&mut self.engine, &mut self.renderer)?;
                Ok(())
            }
        }
    }
}
