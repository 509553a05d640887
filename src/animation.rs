//! Animation controller
//!
//! Owns the simulation state for one session and turns each tick into a frame.

use crate::renderer::{RenderCommand, RenderSurface, compose_frame, replay};
use crate::settings::{Settings, SettingsError};
use crate::sim::{self, Intersection, SimState, SurfaceSize};

pub struct Animation {
    state: SimState,
    settings: Settings,
    last_hit: Option<Intersection>,
}

impl Animation {
    pub fn new(settings: Settings, width: f32, height: f32) -> Result<Self, SettingsError> {
        let surface = SurfaceSize::new(width, height)?;
        let state = SimState::new(surface, &settings)?;

        log::info!(
            "Animation ready: {}x{} surface, ball r={} speed={}, cap={}",
            width,
            height,
            settings.ball_radius,
            settings.ball_speed,
            settings.cap_style.as_str()
        );

        Ok(Self {
            state,
            settings,
            last_hit: None,
        })
    }

    /// Build an animation sized to `surface`
    pub fn for_surface<S: RenderSurface + ?Sized>(
        settings: Settings,
        surface: &S,
    ) -> Result<Self, SettingsError> {
        Self::new(settings, surface.width(), surface.height())
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Intersection result of the latest tick, `None` before the first tick
    pub fn last_hit(&self) -> Option<Intersection> {
        self.last_hit
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.settings.debug = debug;
    }

    /// Advance the simulation by one tick without drawing
    pub fn advance(&mut self) {
        self.last_hit = Some(sim::tick(&mut self.state));
    }

    /// Commands drawing the current state
    pub fn render(&self) -> Vec<RenderCommand> {
        compose_frame(&self.state, &self.settings)
    }

    /// Advance one tick and return the resulting frame
    pub fn tick(&mut self) -> Vec<RenderCommand> {
        self.advance();
        self.render()
    }

    /// Advance one tick and draw it on `surface`
    pub fn frame<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) {
        let commands = self.tick();
        replay(&commands, surface);
    }
}
