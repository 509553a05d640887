//! Line/circle intersection
//!
//! The water line is horizontal, but the solver handles any line through two
//! points. Lines are treated as infinite; the endpoints only fix direction.
//!
//! For a non-vertical line `y = m·x + c` substituted into the circle equation,
//! `x` solves `a·x² + b·x + c' = 0` with discriminant `delta = b² - 4ac'`.
//! The quadratic is formed relative to the circle center so that large screen
//! coordinates don't cancel in `delta`.

use glam::Vec2;

use super::state::IntersectionPoints;

/// An infinite line through two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Vec2,
    pub end: Vec2,
}

impl Line {
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Horizontal line at `y` spanning `0..width`
    pub const fn horizontal(y: f32, width: f32) -> Self {
        Self::new(Vec2::new(0.0, y), Vec2::new(width, y))
    }
}

/// Result of intersecting a line with a circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    /// The line touches or crosses the circle. `left` has the smaller x
    /// (for a vertical line, the smaller y). Equal points mean a tangent.
    Intersecting { left: Vec2, right: Vec2 },
    /// The line misses the circle
    NoIntersection,
}

impl Intersection {
    #[inline]
    pub fn intersects(&self) -> bool {
        matches!(self, Intersection::Intersecting { .. })
    }

    pub fn points(&self) -> Option<IntersectionPoints> {
        match *self {
            Intersection::Intersecting { left, right } => Some(IntersectionPoints { left, right }),
            Intersection::NoIntersection => None,
        }
    }
}

/// Intersect an infinite line with a circle
pub fn intersect_circle_with_line(line: &Line, center: Vec2, radius: f32) -> Intersection {
    let dir = line.end - line.start;

    if dir.x == 0.0 {
        if dir.y == 0.0 {
            // Two equal points don't define a line
            return Intersection::NoIntersection;
        }
        return intersect_vertical(line.start.x, center, radius);
    }

    let m = dir.y / dir.x;
    // Intercept in center-relative coordinates
    let c = (line.start.y - center.y) - m * (line.start.x - center.x);

    let a = 1.0 + m * m;
    let b = 2.0 * m * c;
    let c_prime = c * c - radius * radius;
    let delta = b * b - 4.0 * a * c_prime;

    // Also rejects NaN
    if !(delta >= 0.0) {
        return Intersection::NoIntersection;
    }

    let root = delta.sqrt();
    // a > 0, so the "+" root is always the larger x
    let x_right = center.x + (-b + root) / (2.0 * a);
    let x_left = center.x + (-b - root) / (2.0 * a);
    let y_at = |x: f32| line.start.y + m * (x - line.start.x);

    Intersection::Intersecting {
        left: Vec2::new(x_left, y_at(x_left)),
        right: Vec2::new(x_right, y_at(x_right)),
    }
}

fn intersect_vertical(x: f32, center: Vec2, radius: f32) -> Intersection {
    let dx = x - center.x;
    let delta = radius * radius - dx * dx;
    if !(delta >= 0.0) {
        return Intersection::NoIntersection;
    }

    let half = delta.sqrt();
    Intersection::Intersecting {
        left: Vec2::new(x, center.y - half),
        right: Vec2::new(x, center.y + half),
    }
}

/// Intersect the horizontal line at `line_y` with a circle
pub fn intersect_circle_with_horizontal_line(
    line_y: f32,
    center: Vec2,
    radius: f32,
) -> Intersection {
    // Any nonzero width gives the same direction
    intersect_circle_with_line(&Line::horizontal(line_y, 1.0), center, radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-2;

    #[test]
    fn test_horizontal_through_lower_half() {
        let center = Vec2::new(400.0, 524.6667);
        let hit = intersect_circle_with_horizontal_line(450.0, center, 75.0);
        let Intersection::Intersecting { left, right } = hit else {
            panic!("expected intersection, got {:?}", hit);
        };

        assert_eq!(left.y, 450.0);
        assert_eq!(right.y, 450.0);
        assert!(left.x < right.x);
        // Symmetric about the center
        assert!(((left.x + right.x) / 2.0 - 400.0).abs() < EPS);
        assert!(((left - center).length() - 75.0).abs() < EPS);
        assert!(((right - center).length() - 75.0).abs() < EPS);
    }

    #[test]
    fn test_through_center_spans_diameter() {
        let center = Vec2::new(100.0, 100.0);
        let hit = intersect_circle_with_horizontal_line(100.0, center, 10.0);
        assert_eq!(
            hit,
            Intersection::Intersecting {
                left: Vec2::new(90.0, 100.0),
                right: Vec2::new(110.0, 100.0),
            }
        );
    }

    #[test]
    fn test_miss_is_tagged_not_nan() {
        let hit = intersect_circle_with_horizontal_line(0.0, Vec2::new(400.0, 525.0), 75.0);
        assert_eq!(hit, Intersection::NoIntersection);
        assert!(!hit.intersects());
        assert!(hit.points().is_none());
    }

    #[test]
    fn test_zero_coordinate_is_a_real_intersection() {
        // Left intersection lands exactly on x = 0
        let hit = intersect_circle_with_horizontal_line(50.0, Vec2::new(10.0, 50.0), 10.0);
        let points = hit.points().expect("intersects");
        assert_eq!(points.left.x, 0.0);
        assert_eq!(points.right.x, 20.0);
    }

    #[test]
    fn test_tangent_gives_single_point() {
        let center = Vec2::new(400.0, 525.0);
        for line_y in [450.0, 600.0] {
            let points = intersect_circle_with_horizontal_line(line_y, center, 75.0)
                .points()
                .expect("tangent counts as intersecting");
            assert!((points.left.x - points.right.x).abs() < EPS);
            assert!((points.left.x - 400.0).abs() < EPS);
        }
    }

    #[test]
    fn test_tilted_line() {
        // y = x through a unit circle at the origin
        let line = Line::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));
        let points = intersect_circle_with_line(&line, Vec2::ZERO, 1.0)
            .points()
            .expect("intersects");
        let h = std::f32::consts::FRAC_1_SQRT_2;
        assert!((points.left - Vec2::new(-h, -h)).length() < 1e-5);
        assert!((points.right - Vec2::new(h, h)).length() < 1e-5);
    }

    #[test]
    fn test_vertical_line_is_guarded() {
        let line = Line::new(Vec2::new(3.0, 0.0), Vec2::new(3.0, 10.0));
        let points = intersect_circle_with_line(&line, Vec2::ZERO, 5.0)
            .points()
            .expect("intersects");
        assert_eq!(points.left, Vec2::new(3.0, -4.0));
        assert_eq!(points.right, Vec2::new(3.0, 4.0));

        let miss = Line::new(Vec2::new(6.0, 0.0), Vec2::new(6.0, 10.0));
        assert!(!intersect_circle_with_line(&miss, Vec2::ZERO, 5.0).intersects());
    }

    #[test]
    fn test_degenerate_line() {
        let line = Line::new(Vec2::ONE, Vec2::ONE);
        assert_eq!(
            intersect_circle_with_line(&line, Vec2::ONE, 5.0),
            Intersection::NoIntersection
        );
    }

    proptest! {
        #[test]
        fn prop_inside_band_lies_on_circle_and_line(
            cx in 0.0f32..800.0,
            cy in 0.0f32..600.0,
            radius in 1.0f32..200.0,
            t in -0.999f32..0.999,
        ) {
            let center = Vec2::new(cx, cy);
            let line_y = cy + t * radius;
            let hit = intersect_circle_with_horizontal_line(line_y, center, radius);
            prop_assert!(hit.intersects());
            let IntersectionPoints { left, right } = hit.points().unwrap();

            prop_assert_eq!(left.y, line_y);
            prop_assert_eq!(right.y, line_y);
            prop_assert!(left.x <= right.x);
            let tol = 1e-3 * radius.max(1.0) + 0.05;
            prop_assert!(((left - center).length() - radius).abs() < tol);
            prop_assert!(((right - center).length() - radius).abs() < tol);
        }

        #[test]
        fn prop_outside_band_misses(
            cx in 0.0f32..800.0,
            cy in 0.0f32..600.0,
            radius in 1.0f32..200.0,
            gap in 0.01f32..500.0,
            above in any::<bool>(),
        ) {
            let center = Vec2::new(cx, cy);
            let offset = radius + gap;
            let line_y = if above { cy - offset } else { cy + offset };
            prop_assert!(!intersect_circle_with_horizontal_line(line_y, center, radius).intersects());
        }
    }
}
