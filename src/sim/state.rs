//! Simulation state
//!
//! Everything the animation mutates per tick lives in [`SimState`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::DRAG_RATIO;
use crate::settings::{Settings, SettingsError};

/// Size of the drawing surface in pixels (origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Result<Self, SettingsError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !(valid(width) && valid(height)) {
            return Err(SettingsError::InvalidSurface { width, height });
        }
        Ok(Self { width, height })
    }

    /// Horizontal center of the surface
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }
}

/// The rising ball. `pos.x` never changes after setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
    /// Rise per tick
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, speed: f32) -> Self {
        Self { pos, radius, speed }
    }

    /// Height of the ball's top edge
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    /// Whether the whole ball has left the surface through the top,
    /// with one radius of margin
    #[inline]
    pub fn is_past_top(&self) -> bool {
        self.pos.y + self.radius < -self.radius
    }
}

/// Horizontal liquid surface spanning the full width
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterLine {
    pub y: f32,
}

/// Fixed anchors at the bottom corners of the liquid shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasePoints {
    pub left: Vec2,
    pub right: Vec2,
}

/// Where the water line meets the ball, or the drifted fallback
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntersectionPoints {
    pub left: Vec2,
    pub right: Vec2,
}

impl IntersectionPoints {
    /// Sink both points by `drift`
    pub fn drift_down(&mut self, drift: f32) {
        self.left.y += drift;
        self.right.y += drift;
    }
}

/// Complete animation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub surface: SurfaceSize,
    pub ball: Ball,
    pub water_line: WaterLine,
    /// Height of the baseline the base points sit on
    pub base_line_y: f32,
    pub base_points: BasePoints,
    pub intersection_points: IntersectionPoints,
    /// Multiplier on drag for the no-intersection drift
    pub drift_factor: f32,
    /// Ticks advanced since setup
    pub time_ticks: u64,
    /// Times the ball has wrapped back to the bottom
    pub wraps: u64,
}

impl SimState {
    /// Place the ball resting at the bottom with the water line on its top edge
    pub fn new(surface: SurfaceSize, settings: &Settings) -> Result<Self, SettingsError> {
        settings.validate()?;

        let radius = settings.ball_radius;
        let center_x = surface.center_x();
        let ball = Ball::new(
            Vec2::new(center_x, surface.height - radius),
            radius,
            settings.ball_speed,
        );

        let base_line_y = surface.height - settings.base_line_offset;
        let reach = radius + settings.base_point_spread;
        let base_points = BasePoints {
            left: Vec2::new(center_x - reach, base_line_y),
            right: Vec2::new(center_x + reach, base_line_y),
        };

        Ok(Self {
            surface,
            ball,
            water_line: WaterLine { y: ball.top() },
            base_line_y,
            base_points,
            // Start flat on the baseline
            intersection_points: IntersectionPoints {
                left: base_points.left,
                right: base_points.right,
            },
            drift_factor: settings.drift_factor,
            time_ticks: 0,
            wraps: 0,
        })
    }

    /// Damping applied to the water line near its rest height
    #[inline]
    pub fn drag(&self) -> f32 {
        self.ball.speed * DRAG_RATIO
    }
}
