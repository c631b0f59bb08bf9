//! Arc geometry
//!
//! Pure conversions between the three coordinate systems of a circular range
//! control:
//!
//! - **progress**: an integer in `[0, max_progress)`, the value a thumb reports
//! - **angle**: degrees in `[0, 360)`, measured clockwise from the positive x
//!   axis in screen space (y grows downwards)
//! - **point**: a planar position on an ellipse around a centre
//!
//! The track starts at `start_angle` (progress 0) and extends clockwise for
//! `arc_span` degrees. A span of 360 is a full circle; anything smaller leaves
//! a gap that touches can land in but thumbs can never reach.

use serde::{Deserialize, Serialize};

/// Degrees in a full turn
pub const FULL_TURN: f64 = 360.0;

/// 2D point in control coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance to another point
    pub fn distance_sq(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Fold an angle into `[0, 360)`.
///
/// Unlike the `%` operator this is correct for negative input: `-90` maps to
/// `270`. Tiny negative values whose euclidean remainder rounds up to a full
/// turn map to `0`.
pub fn normalize_360(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(FULL_TURN);
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

/// Angular extent of a track running clockwise from `start_angle` to
/// `end_angle`. Equal angles describe a full circle.
pub fn arc_span(start_angle: f64, end_angle: f64) -> f64 {
    if start_angle == end_angle {
        FULL_TURN
    } else {
        normalize_360(FULL_TURN + end_angle - start_angle)
    }
}

/// Clockwise angular distance from `from` to `to`, in `[0, 360)`.
pub fn sweep(from: f64, to: f64) -> f64 {
    normalize_360(to - from)
}

/// Fold a progress value into `[0, max_progress)` by whole turns.
///
/// `max_progress` must be positive; callers validate it at configuration time.
pub fn wrap_progress(value: i32, max_progress: i32) -> i32 {
    debug_assert!(max_progress > 0);
    value.rem_euclid(max_progress)
}

/// Angle of the vector `(dx, dy)` in `[0, 360)`.
///
/// A vertical vector (including the zero vector) resolves to 90 when `dy` is
/// positive and 270 otherwise, so a touch exactly on the centre still yields a
/// defined angle.
pub fn point_to_angle(dx: f64, dy: f64) -> f64 {
    let radians = if dx == 0.0 {
        if dy > 0.0 {
            std::f64::consts::FRAC_PI_2
        } else {
            -std::f64::consts::FRAC_PI_2
        }
    } else {
        dy.atan2(dx)
    };
    normalize_360(radians.to_degrees())
}

/// Point at `angle` on the ellipse centred on `(center_x, center_y)` with the
/// given radii.
pub fn angle_to_point(
    angle: f64,
    center_x: f32,
    center_y: f32,
    radius_x: f32,
    radius_y: f32,
) -> Point {
    let radians = angle.to_radians();
    Point::new(
        center_x + (radians.cos() * radius_x as f64) as f32,
        center_y + (radians.sin() * radius_y as f64) as f32,
    )
}

/// Mapping between progress and angle for one track configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcGeometry {
    start_angle: f64,
    arc_span: f64,
    max_progress: i32,
}

impl ArcGeometry {
    /// Create the mapping for a track from `start_angle` to `end_angle` with
    /// `max_progress` steps.
    pub fn new(start_angle: f64, end_angle: f64, max_progress: i32) -> Self {
        Self {
            start_angle: normalize_360(start_angle),
            arc_span: arc_span(normalize_360(start_angle), normalize_360(end_angle)),
            max_progress,
        }
    }

    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    pub fn arc_span(&self) -> f64 {
        self.arc_span
    }

    pub fn max_progress(&self) -> i32 {
        self.max_progress
    }

    /// Whether the track covers the whole circle
    pub fn is_full_circle(&self) -> bool {
        self.arc_span == FULL_TURN
    }

    /// Absolute angle at which `progress` is drawn
    pub fn progress_to_angle(&self, progress: i32) -> f64 {
        normalize_360(
            progress as f64 * self.arc_span / self.max_progress as f64 + self.start_angle,
        )
    }

    /// Angle measured from the start of the track, in `[0, 360)`
    pub fn relative_angle(&self, absolute: f64) -> f64 {
        normalize_360(absolute - self.start_angle)
    }

    /// Whether a relative angle lies on the track rather than in the gap
    pub fn contains(&self, relative: f64) -> bool {
        relative <= self.arc_span
    }

    /// Nearest progress for a relative angle, rounding halves up.
    ///
    /// The result can equal `max_progress` for angles close to the end of the
    /// track. Drag validation rejects that value instead of folding it onto 0.
    pub fn angle_to_progress(&self, relative: f64) -> i32 {
        (relative / self.arc_span * self.max_progress as f64 + 0.5).floor() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_normalize_360() {
        assert_eq!(normalize_360(0.0), 0.0);
        assert_eq!(normalize_360(360.0), 0.0);
        assert_eq!(normalize_360(-90.0), 270.0);
        assert_eq!(normalize_360(725.0), 5.0);
        assert_eq!(normalize_360(-725.0), 355.0);
        assert_eq!(normalize_360(-1e-20), 0.0);
    }

    #[test]
    fn test_normalize_360_is_idempotent_and_congruent() {
        let mut x = -2000.0;
        while x < 2000.0 {
            let n = normalize_360(x);
            assert!((0.0..360.0).contains(&n), "{x} -> {n}");
            assert_eq!(normalize_360(n), n);
            let turns = (x - n) / 360.0;
            assert!(approx(turns, turns.round()), "{x} -> {n}");
            x += 17.25;
        }
    }

    #[test]
    fn test_arc_span() {
        assert_eq!(arc_span(125.0, 125.0), 360.0);
        assert_eq!(arc_span(125.0, 55.0), 290.0);
        assert_eq!(arc_span(0.0, 90.0), 90.0);
        assert_eq!(arc_span(270.0, 90.0), 180.0);
    }

    #[test]
    fn test_sweep() {
        assert_eq!(sweep(125.0, 270.0), 145.0);
        assert_eq!(sweep(270.0, 125.0), 215.0);
        assert_eq!(sweep(10.0, 10.0), 0.0);
    }

    #[test]
    fn test_wrap_progress() {
        assert_eq!(wrap_progress(105, 100), 5);
        assert_eq!(wrap_progress(-3, 100), 97);
        assert_eq!(wrap_progress(-300, 100), 0);
        assert_eq!(wrap_progress(42, 100), 42);
    }

    #[test]
    fn test_point_to_angle_quadrants() {
        assert!(approx(point_to_angle(1.0, 0.0), 0.0));
        assert!(approx(point_to_angle(1.0, 1.0), 45.0));
        assert!(approx(point_to_angle(-1.0, 1.0), 135.0));
        assert!(approx(point_to_angle(-1.0, 0.0), 180.0));
        assert!(approx(point_to_angle(-1.0, -1.0), 225.0));
        assert!(approx(point_to_angle(1.0, -1.0), 315.0));
    }

    #[test]
    fn test_point_to_angle_vertical_and_center() {
        assert!(approx(point_to_angle(0.0, 5.0), 90.0));
        assert!(approx(point_to_angle(0.0, -5.0), 270.0));
        assert!(approx(point_to_angle(0.0, 0.0), 270.0));
    }

    #[test]
    fn test_angle_to_point() {
        let p = angle_to_point(0.0, 100.0, 100.0, 50.0, 50.0);
        assert!((p.x - 150.0).abs() < 1e-4 && (p.y - 100.0).abs() < 1e-4);

        let p = angle_to_point(90.0, 100.0, 100.0, 50.0, 50.0);
        assert!((p.x - 100.0).abs() < 1e-4 && (p.y - 150.0).abs() < 1e-4);

        let p = angle_to_point(180.0, 0.0, 0.0, 10.0, 20.0);
        assert!((p.x + 10.0).abs() < 1e-4 && p.y.abs() < 1e-4);
    }

    #[test]
    fn test_point_angle_inverse() {
        for deg in [0.0, 30.0, 89.0, 135.0, 200.0, 300.0, 359.0] {
            let p = angle_to_point(deg, 0.0, 0.0, 10.0, 10.0);
            assert!((point_to_angle(p.x as f64, p.y as f64) - deg).abs() < 1e-3);
        }
    }

    #[test]
    fn test_progress_to_angle_partial_arc() {
        let geometry = ArcGeometry::new(125.0, 55.0, 100);
        assert_eq!(geometry.arc_span(), 290.0);
        assert!(approx(geometry.progress_to_angle(0), 125.0));
        assert!(approx(geometry.progress_to_angle(50), 270.0));
        assert!(approx(geometry.progress_to_angle(99), normalize_360(125.0 + 287.1)));
    }

    #[test]
    fn test_angle_to_progress_rounds_half_up() {
        let geometry = ArcGeometry::new(0.0, 0.0, 100);
        assert_eq!(geometry.angle_to_progress(0.0), 0);
        assert_eq!(geometry.angle_to_progress(1.9), 1);
        assert_eq!(geometry.angle_to_progress(1.7), 0);
        assert_eq!(geometry.angle_to_progress(359.0), 100);
    }

    #[test]
    fn test_progress_round_trip() {
        for (start, end, max) in [(125.0, 55.0, 100), (0.0, 0.0, 360), (90.0, 45.0, 7)] {
            let geometry = ArcGeometry::new(start, end, max);
            for progress in 0..max {
                let relative = geometry.relative_angle(geometry.progress_to_angle(progress));
                let back = geometry.angle_to_progress(relative);
                assert!((back - progress).abs() <= 1, "{progress} -> {back}");
            }
        }
    }

    #[test]
    fn test_contains_gap() {
        let geometry = ArcGeometry::new(125.0, 55.0, 100);
        assert!(geometry.contains(0.0));
        assert!(geometry.contains(290.0));
        assert!(!geometry.contains(300.0));

        let full = ArcGeometry::new(10.0, 10.0, 100);
        assert!(full.is_full_circle());
        assert!(full.contains(359.999));
    }
}
