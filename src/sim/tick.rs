//! Per-tick simulation step
//!
//! Motion is expressed per tick, not per second, so a slow or uneven frame
//! rate only slows the animation down.

use super::intersect::{Intersection, intersect_circle_with_horizontal_line};
use super::state::SimState;
use crate::move_toward;

/// Move the ball up one tick and let the water line follow it
pub fn advance(state: &mut SimState) {
    let speed = state.ball.speed;
    state.ball.pos.y -= speed;
    state.time_ticks += 1;

    let drag = state.drag();

    if state.ball.is_past_top() {
        // Snap rather than ease, or the line would sweep across the surface
        state.ball.pos.y = state.surface.height - state.ball.radius;
        state.water_line.y = state.ball.top();
        state.wraps += 1;
        log::debug!(
            "Ball wrapped at tick {} (wrap #{})",
            state.time_ticks,
            state.wraps
        );
        return;
    }

    if state.water_line.y <= state.base_line_y {
        // At or above rest: sink slowly back toward the baseline
        state.water_line.y += drag;
    } else {
        state.water_line.y = move_toward(state.water_line.y, state.ball.top(), speed);
    }
}

/// Recompute the intersection points from the current ball and water line.
///
/// When the line misses the ball the previous points are kept and sink by
/// `drag * drift_factor`.
pub fn update_intersections(state: &mut SimState) -> Intersection {
    let hit =
        intersect_circle_with_horizontal_line(state.water_line.y, state.ball.pos, state.ball.radius);

    match hit.points() {
        Some(points) => state.intersection_points = points,
        None => {
            let drift = state.drag() * state.drift_factor;
            state.intersection_points.drift_down(drift);
        }
    }

    log::trace!(
        "tick {}: line={:.3} hit={} left={:?} right={:?}",
        state.time_ticks,
        state.water_line.y,
        hit.intersects(),
        state.intersection_points.left,
        state.intersection_points.right
    );

    hit
}

/// Advance one tick and refresh the intersection points
pub fn tick(state: &mut SimState) -> Intersection {
    advance(state);
    update_intersections(state)
}
