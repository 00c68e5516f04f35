//! Annular sector paths for pie, donut and radar geometry.
//!
//! Angles are screen radians: `cos` runs along +x, `sin` along +y (down), and
//! angles from [`crate::angle::layout_angles`] already carry the `-π/2` offset
//! that puts the first segment at 12 o'clock.

use crate::angle::polar_point;
use crate::path::PathBuilder;
use chartgeo_core::Point;
use std::f64::consts::{PI, TAU};

/// Sweeps this close to `2π` are treated as a full circle
const FULL_CIRCLE_TOLERANCE: f64 = 1e-9;

/// Closed outline of a pie slice (`inner_radius == 0`) or donut segment.
///
/// Sweeps of `2π` or more are drawn as two half arcs, since a single arc whose
/// endpoints coincide renders as nothing. A zero sweep yields an empty path.
pub fn build_sector_path(
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> String {
    let sweep = end_angle - start_angle;
    if sweep <= 0.0 || outer_radius <= 0.0 {
        return String::new();
    }

    if sweep >= TAU - FULL_CIRCLE_TOLERANCE {
        return full_ring_path(center, inner_radius, outer_radius, start_angle);
    }

    let large_arc = sweep > PI;
    let outer_start = polar_point(center, outer_radius, start_angle);
    let outer_end = polar_point(center, outer_radius, end_angle);

    if inner_radius <= 0.0 {
        return PathBuilder::new()
            .move_to(center.x, center.y)
            .line_to(outer_start.x, outer_start.y)
            .arc_to(outer_radius, outer_radius, 0.0, large_arc, true, outer_end.x, outer_end.y)
            .close()
            .build();
    }

    let inner_end = polar_point(center, inner_radius, end_angle);
    let inner_start = polar_point(center, inner_radius, start_angle);

    PathBuilder::new()
        .move_to(outer_start.x, outer_start.y)
        .arc_to(outer_radius, outer_radius, 0.0, large_arc, true, outer_end.x, outer_end.y)
        .line_to(inner_end.x, inner_end.y)
        .arc_to(inner_radius, inner_radius, 0.0, large_arc, false, inner_start.x, inner_start.y)
        .close()
        .build()
}

fn full_ring_path(center: Point, inner_radius: f64, outer_radius: f64, start_angle: f64) -> String {
    let half_angle = start_angle + PI;
    let outer_start = polar_point(center, outer_radius, start_angle);
    let outer_half = polar_point(center, outer_radius, half_angle);

    let builder = PathBuilder::new()
        .move_to(outer_start.x, outer_start.y)
        .arc_to(outer_radius, outer_radius, 0.0, false, true, outer_half.x, outer_half.y)
        .arc_to(outer_radius, outer_radius, 0.0, false, true, outer_start.x, outer_start.y)
        .close();

    if inner_radius <= 0.0 {
        return builder.build();
    }

    // inner ring traced the other way so the hole stays unfilled
    let inner_start = polar_point(center, inner_radius, start_angle);
    let inner_half = polar_point(center, inner_radius, half_angle);

    builder
        .move_to(inner_start.x, inner_start.y)
        .arc_to(inner_radius, inner_radius, 0.0, false, false, inner_half.x, inner_half.y)
        .arc_to(inner_radius, inner_radius, 0.0, false, false, inner_start.x, inner_start.y)
        .close()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const CENTER: Point = Point::new(50.0, 50.0);

    #[test]
    fn test_quarter_pie_slice() {
        // 12 o'clock to 3 o'clock
        let path = build_sector_path(CENTER, 0.0, 40.0, -FRAC_PI_2, 0.0);
        assert_eq!(path, "M50.00,50.00L50.00,10.00A40.00,40.00,0.00,0,1,90.00,50.00Z");
    }

    #[test]
    fn test_large_arc_flag() {
        let path = build_sector_path(CENTER, 0.0, 40.0, -FRAC_PI_2, PI);
        assert!(path.contains("A40.00,40.00,0.00,1,1"));
    }

    #[test]
    fn test_donut_traces_inner_arc_backwards() {
        let path = build_sector_path(CENTER, 20.0, 40.0, -FRAC_PI_2, 0.0);
        assert!(path.starts_with("M50.00,10.00"));
        assert!(path.contains("L70.00,50.00"));
        assert!(path.contains("A20.00,20.00,0.00,0,0,50.00,30.00"));
        assert!(path.ends_with('Z'));
    }

    #[test]
    fn test_full_circle_splits_into_half_arcs() {
        let path = build_sector_path(CENTER, 0.0, 40.0, -FRAC_PI_2, -FRAC_PI_2 + TAU);
        assert_eq!(path.matches('A').count(), 2);
        assert!(path.contains("A40.00,40.00,0.00,0,1,50.00,90.00"));

        let ring = build_sector_path(CENTER, 20.0, 40.0, 0.0, TAU);
        assert_eq!(ring.matches('A').count(), 4);
        assert_eq!(ring.matches('Z').count(), 2);
    }

    #[test]
    fn test_zero_sweep_is_empty() {
        assert_eq!(build_sector_path(CENTER, 0.0, 40.0, 1.0, 1.0), "");
        assert_eq!(build_sector_path(CENTER, 0.0, 0.0, 0.0, 1.0), "");
    }
}
