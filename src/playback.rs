//! Auto-advance control: a start/stop toggle plus a speed selector

use crate::error::LifeResult;
use crate::game_of_life::LifeEngine;
use crate::render::Renderer;
use log::info;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback {
    running: bool,
    speed: u32,
    tick: Duration,
}

impl Playback {
    /// `tick` is the interval for speed 1
    pub fn new(speed: u32, tick: Duration) -> Self {
        Self {
            running: false,
            speed,
            tick,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed;
    }

    /// Time between ticks at the current speed
    pub fn interval(&self) -> Duration {
        self.tick.saturating_mul(self.speed)
    }

    /// Returns `false` without changing anything if playback is already running
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        info!("playback started, interval {:?}", self.interval());
        true
    }

    /// Stop and reset the speed selector to zero
    pub fn stop(&mut self) {
        if self.running {
            info!("playback stopped");
        }
        self.running = false;
        self.speed = 0;
    }

    /// Timer callback: advance one generation and redraw while running.
    /// Returns whether a generation was computed.
    pub fn tick<R: Renderer>(&self, engine: &mut LifeEngine, renderer: &mut R) -> LifeResult<bool> {
        if !self.running {
            return Ok(false);
        }
        let generation = engine.advance()?;
        renderer.render(engine.current(), generation)?;
        Ok(true)
    }
}
