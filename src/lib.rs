//! Meniscus - a ball rising through a curved water line
//!
//! Core modules:
//! - `sim`: Deterministic per-tick motion and line/circle intersection
//! - `renderer`: Render commands, liquid path construction, drawing surfaces
//! - `platform`: Frame scheduling (requestAnimationFrame on web, headless on native)
//! - `animation`: The controller tying one session together
//! - `settings`: Configuration

pub mod animation;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use animation::Animation;
pub use settings::{CapStyle, Settings, SettingsError};

/// Animation configuration constants
pub mod consts {
    /// Default surface size for headless runs
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 75.0;
    /// Pixels per tick
    pub const BALL_SPEED: f32 = 0.3333;

    /// Drag as a fraction of ball speed
    pub const DRAG_RATIO: f32 = 0.5;
    /// Intersection fallback drift, in multiples of drag
    pub const DRIFT_FACTOR: f32 = 1.75;

    /// Liquid shape layout
    pub const BASE_LINE_OFFSET: f32 = 200.0;
    pub const BASE_POINT_SPREAD: f32 = 150.0;
    pub const CONTROL_POINT_DEVIANCE: f32 = 50.0;
}

/// Step `current` toward `target` by at most `max_step`
#[inline]
pub fn move_toward(current: f32, target: f32, max_step: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_step {
        target
    } else {
        current + max_step.copysign(delta)
    }
}
