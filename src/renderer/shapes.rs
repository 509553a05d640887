//! Shape generation for a frame
//!
//! The liquid shape is a single filled path:
//! left intersection → curve down to the left base point → baseline →
//! curve up to the right intersection → cap back to the left intersection.

use glam::Vec2;

use super::commands::RenderCommand;
use crate::settings::{CapStyle, Settings};
use crate::sim::{BasePoints, IntersectionPoints, SimState};

/// Build the filled liquid path through the intersection points and base anchors.
///
/// The side curves bow outward: their control points sit on the baseline,
/// pushed `deviance` away from the ball. `cap_control_x` is the ball's center,
/// used as the control x of a [`CapStyle::Quadratic`] cap.
pub fn liquid_path(
    points: &IntersectionPoints,
    base: &BasePoints,
    cap: CapStyle,
    cap_control_x: f32,
    deviance: f32,
) -> Vec<RenderCommand> {
    let IntersectionPoints { left, right } = *points;

    let mut commands = Vec::with_capacity(7);
    commands.push(RenderCommand::BeginPath);
    commands.push(RenderCommand::MoveTo { to: left });
    commands.push(RenderCommand::QuadraticCurveTo {
        control: Vec2::new(left.x - deviance, base.left.y),
        to: base.left,
    });
    commands.push(RenderCommand::LineTo { to: base.right });
    commands.push(RenderCommand::QuadraticCurveTo {
        control: Vec2::new(right.x + deviance, base.right.y),
        to: right,
    });
    commands.push(match cap {
        CapStyle::Straight => RenderCommand::LineTo { to: left },
        CapStyle::Quadratic => RenderCommand::QuadraticCurveTo {
            control: Vec2::new(cap_control_x, left.y),
            to: left,
        },
    });
    commands.push(RenderCommand::Fill);

    commands
}

/// Filled rectangle from the baseline to the bottom of the surface
pub fn pool(state: &SimState) -> Vec<RenderCommand> {
    let top = state.base_line_y;
    let (w, h) = (state.surface.width, state.surface.height);

    vec![
        RenderCommand::BeginPath,
        RenderCommand::MoveTo {
            to: Vec2::new(0.0, top),
        },
        RenderCommand::LineTo {
            to: Vec2::new(w, top),
        },
        RenderCommand::LineTo {
            to: Vec2::new(w, h),
        },
        RenderCommand::LineTo {
            to: Vec2::new(0.0, h),
        },
        RenderCommand::Fill,
    ]
}

/// Raw water line (default stroke) and intersection markers (filled in
/// the marker color)
pub fn debug_overlay(state: &SimState, settings: &Settings) -> Vec<RenderCommand> {
    let line_y = state.water_line.y;
    let points = state.intersection_points;

    vec![
        RenderCommand::DrawLine {
            from: Vec2::new(0.0, line_y),
            to: Vec2::new(state.surface.width, line_y),
        },
        RenderCommand::set_fill_style(&settings.marker_color),
        RenderCommand::FillCircle {
            center: points.left,
            radius: settings.marker_radius,
        },
        RenderCommand::FillCircle {
            center: points.right,
            radius: settings.marker_radius,
        },
    ]
}

/// Every command needed to draw the current state, back to front
pub fn compose_frame(state: &SimState, settings: &Settings) -> Vec<RenderCommand> {
    let mut commands = Vec::with_capacity(32);

    commands.push(RenderCommand::Clear);

    commands.push(RenderCommand::set_fill_style(&settings.pool_color));
    commands.extend(pool(state));

    commands.push(RenderCommand::set_fill_style(&settings.ball_color));
    commands.push(RenderCommand::FillCircle {
        center: state.ball.pos,
        radius: state.ball.radius,
    });

    if settings.debug {
        commands.extend(debug_overlay(state, settings));
    }

    commands.push(RenderCommand::set_fill_style(&settings.liquid_color));
    commands.extend(liquid_path(
        &state.intersection_points,
        &state.base_points,
        settings.cap_style,
        state.ball.pos.x,
        settings.control_point_deviance,
    ));

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SurfaceSize;

    fn points() -> IntersectionPoints {
        IntersectionPoints {
            left: Vec2::new(350.0, 380.0),
            right: Vec2::new(450.0, 380.0),
        }
    }

    fn base() -> BasePoints {
        BasePoints {
            left: Vec2::new(175.0, 400.0),
            right: Vec2::new(625.0, 400.0),
        }
    }

    #[test]
    fn test_liquid_path_quadratic_cap() {
        let path = liquid_path(&points(), &base(), CapStyle::Quadratic, 400.0, 50.0);

        assert_eq!(
            path,
            vec![
                RenderCommand::BeginPath,
                RenderCommand::MoveTo {
                    to: Vec2::new(350.0, 380.0)
                },
                RenderCommand::QuadraticCurveTo {
                    control: Vec2::new(300.0, 400.0),
                    to: Vec2::new(175.0, 400.0),
                },
                RenderCommand::LineTo {
                    to: Vec2::new(625.0, 400.0)
                },
                RenderCommand::QuadraticCurveTo {
                    control: Vec2::new(500.0, 400.0),
                    to: Vec2::new(450.0, 380.0),
                },
                RenderCommand::QuadraticCurveTo {
                    control: Vec2::new(400.0, 380.0),
                    to: Vec2::new(350.0, 380.0),
                },
                RenderCommand::Fill,
            ]
        );
    }

    #[test]
    fn test_liquid_path_straight_cap_without_deviance() {
        let path = liquid_path(&points(), &base(), CapStyle::Straight, 400.0, 0.0);

        // Control x falls back to the intersection's own x
        assert_eq!(
            path[2],
            RenderCommand::QuadraticCurveTo {
                control: Vec2::new(350.0, 400.0),
                to: Vec2::new(175.0, 400.0),
            }
        );
        assert_eq!(
            path[5],
            RenderCommand::LineTo {
                to: Vec2::new(350.0, 380.0)
            }
        );
    }

    fn state() -> SimState {
        let surface = SurfaceSize::new(800.0, 600.0).unwrap();
        SimState::new(surface, &Settings::default()).unwrap()
    }

    #[test]
    fn test_frame_order_without_debug() {
        let settings = Settings::default();
        let frame = compose_frame(&state(), &settings);

        assert_eq!(frame[0], RenderCommand::Clear);
        assert_eq!(frame.last(), Some(&RenderCommand::Fill));
        assert!(
            !frame
                .iter()
                .any(|c| matches!(c, RenderCommand::DrawLine { .. }))
        );

        // Ball is drawn before the liquid shape
        let ball = frame
            .iter()
            .position(|c| matches!(c, RenderCommand::FillCircle { radius, .. } if *radius == 75.0))
            .unwrap();
        let liquid_start = frame
            .iter()
            .rposition(|c| *c == RenderCommand::BeginPath)
            .unwrap();
        assert!(ball < liquid_start);
    }

    #[test]
    fn test_debug_adds_line_and_markers() {
        let settings = Settings {
            debug: true,
            ..Default::default()
        };
        let state = state();
        let frame = compose_frame(&state, &settings);

        assert!(frame.contains(&RenderCommand::DrawLine {
            from: Vec2::new(0.0, 450.0),
            to: Vec2::new(800.0, 450.0),
        }));
        let markers = frame
            .iter()
            .filter(|c| matches!(c, RenderCommand::FillCircle { radius, .. } if *radius == 4.0))
            .count();
        assert_eq!(markers, 2);
        assert!(
            !frame
                .iter()
                .any(|c| matches!(c, RenderCommand::StrokeCircle { .. }))
        );

        // Only the markers take the marker color
        let overlay = debug_overlay(&state, &settings);
        assert!(matches!(overlay[0], RenderCommand::DrawLine { .. }));
        assert_eq!(overlay[1], RenderCommand::set_fill_style("black"));
        assert_eq!(overlay.len(), 4);
    }

    #[test]
    fn test_pool_covers_below_baseline() {
        let pool = pool(&state());
        assert_eq!(
            pool[1],
            RenderCommand::MoveTo {
                to: Vec2::new(0.0, 400.0)
            }
        );
        assert_eq!(
            pool[3],
            RenderCommand::LineTo {
                to: Vec2::new(800.0, 600.0)
            }
        );
    }
}
