//! Render commands
//!
//! A frame is a flat list of drawing operations. Producing the list is pure,
//! so frames can be inspected in tests or dumped as JSON without a canvas.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::surface::RenderSurface;

/// One drawing operation against a [`RenderSurface`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RenderCommand {
    Clear,
    SetFillStyle { color: String },
    FillCircle { center: Vec2, radius: f32 },
    StrokeCircle { center: Vec2, radius: f32 },
    DrawLine { from: Vec2, to: Vec2 },
    BeginPath,
    MoveTo { to: Vec2 },
    LineTo { to: Vec2 },
    QuadraticCurveTo { control: Vec2, to: Vec2 },
    Fill,
}

impl RenderCommand {
    pub fn set_fill_style(color: &str) -> Self {
        RenderCommand::SetFillStyle {
            color: color.to_string(),
        }
    }

    /// Issue this command on a surface
    pub fn apply<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        match self {
            RenderCommand::Clear => surface.clear(),
            RenderCommand::SetFillStyle { color } => surface.set_fill_style(color),
            RenderCommand::FillCircle { center, radius } => surface.fill_circle(*center, *radius),
            RenderCommand::StrokeCircle { center, radius } => {
                surface.stroke_circle(*center, *radius)
            }
            RenderCommand::DrawLine { from, to } => surface.draw_line(*from, *to),
            RenderCommand::BeginPath => surface.begin_path(),
            RenderCommand::MoveTo { to } => surface.move_to(*to),
            RenderCommand::LineTo { to } => surface.line_to(*to),
            RenderCommand::QuadraticCurveTo { control, to } => {
                surface.quadratic_curve_to(*control, *to)
            }
            RenderCommand::Fill => surface.fill(),
        }
    }
}

/// Issue a whole frame on a surface, in order
pub fn replay<S: RenderSurface + ?Sized>(commands: &[RenderCommand], surface: &mut S) {
    for command in commands {
        command.apply(surface);
    }
}
