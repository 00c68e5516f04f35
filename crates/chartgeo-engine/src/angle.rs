//! Angular layout of categories around a circle (pie, donut, radar)

use chartgeo_core::{AngleSpan, DataPoint, Point, Segment};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Lay out consecutive angular spans, one per weight, in input order.
///
/// Each span covers `weight × 2π`; accumulation starts at
/// `start_angle − π/2` so that a `start_angle` of 0 begins at 12 o'clock.
pub fn layout_angles(weights: &[f64], start_angle: f64) -> Vec<AngleSpan> {
    let origin = start_angle - FRAC_PI_2;

    weights
        .iter()
        .scan(origin, |current, &weight| {
            let start = *current;
            let end = start + weight * TAU;
            *current = end;
            Some(AngleSpan {
                start_angle: start,
                end_angle: end,
                mid_angle: start + (end - start) / 2.0,
            })
        })
        .collect()
}

/// `n` equal weights (radar axes)
pub fn even_weights(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    vec![1.0 / n as f64; n]
}

/// Point at `radius` from `center` along `angle`
pub fn polar_point(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Turn data points into pie segments with percentages, angles and label
/// anchors at `label_radius`.
///
/// A zero total gives every segment `0%` and an empty sweep.
pub fn layout_segments(
    points: &[DataPoint],
    start_angle: f64,
    center: Point,
    label_radius: f64,
) -> Vec<Segment> {
    let total: f64 = points.iter().map(|p| p.value).sum();
    let percentages: Vec<f64> = points
        .iter()
        .map(|p| if total == 0.0 { 0.0 } else { p.value * 100.0 / total })
        .collect();
    let weights: Vec<f64> = percentages.iter().map(|pct| pct / 100.0).collect();

    points
        .iter()
        .zip(percentages)
        .zip(layout_angles(&weights, start_angle))
        .map(|((point, percentage), span)| Segment {
            point: point.clone(),
            percentage,
            start_angle: span.start_angle,
            end_angle: span.end_angle,
            mid_angle: span.mid_angle,
            centroid: polar_point(center, label_radius, span.mid_angle),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_single_weight_spans_full_circle() {
        for start in [0.0, 1.0, -2.5, PI] {
            let spans = layout_angles(&[1.0], start);
            assert_eq!(spans.len(), 1);
            assert!((spans[0].sweep() - TAU).abs() < EPS);
            assert!((spans[0].start_angle - (start - FRAC_PI_2)).abs() < EPS);
        }
    }

    #[test]
    fn test_spans_are_contiguous() {
        let spans = layout_angles(&[0.25, 0.5, 0.25], 0.0);
        assert_eq!(spans[0].end_angle, spans[1].start_angle);
        assert_eq!(spans[1].end_angle, spans[2].start_angle);
        assert!((spans[1].sweep() - PI).abs() < EPS);
        assert!((spans[2].end_angle - (TAU - FRAC_PI_2)).abs() < EPS);
    }

    #[test]
    fn test_even_weights() {
        assert_eq!(even_weights(4), vec![0.25; 4]);
        assert!(even_weights(0).is_empty());
    }

    #[test]
    fn test_polar_point_twelve_oclock() {
        let p = polar_point(Point::new(50.0, 50.0), 10.0, -FRAC_PI_2);
        assert!((p.x - 50.0).abs() < EPS);
        assert!((p.y - 40.0).abs() < EPS);
    }

    #[test]
    fn test_segments_percentages_and_centroids() {
        let points = [
            DataPoint::new("A", 30.0),
            DataPoint::new("B", 45.0),
            DataPoint::new("C", 25.0),
        ];
        let segments = layout_segments(&points, 0.0, Point::new(0.0, 0.0), 10.0);

        for (segment, expected) in segments.iter().zip([30.0, 45.0, 25.0]) {
            assert!((segment.percentage - expected).abs() < EPS);
        }

        let total_sweep: f64 = segments.iter().map(|s| s.end_angle - s.start_angle).sum();
        assert!((total_sweep - TAU).abs() < EPS);

        let first = &segments[0];
        let expected = polar_point(Point::new(0.0, 0.0), 10.0, first.mid_angle);
        assert_eq!(first.centroid, expected);
    }

    #[test]
    fn test_zero_total_segments() {
        let points = [DataPoint::new("A", 0.0), DataPoint::new("B", 0.0)];
        let segments = layout_segments(&points, 0.0, Point::default(), 1.0);
        assert!(segments.iter().all(|s| s.percentage == 0.0));
        assert!(segments.iter().all(|s| s.start_angle == s.end_angle));
    }
}
