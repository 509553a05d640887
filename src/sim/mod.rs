//! Deterministic simulation module
//!
//! Ball motion, water-line tracking and intersection points. This module must
//! stay pure:
//! - Fixed per-tick steps only
//! - No rendering or platform dependencies

pub mod intersect;
pub mod state;
pub mod tick;

pub use intersect::{
    Intersection, Line, intersect_circle_with_horizontal_line, intersect_circle_with_line,
};
pub use state::{Ball, BasePoints, IntersectionPoints, SimState, SurfaceSize, WaterLine};
pub use tick::{advance, tick, update_intersections};
