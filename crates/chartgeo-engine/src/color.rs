//! Scalar-to-color mapping over sequential, diverging and categorical scales

use chartgeo_core::{ColorScale, ColorScaleKind, Rgb};

/// Map `value` to a color on `scale`.
///
/// Scales with fewer than two stops are a misconfiguration: this logs a
/// warning and returns the first stop (black when there is none).
pub fn interpolate_color(scale: &ColorScale, value: f64) -> Rgb {
    let stops = &scale.stops;
    if stops.len() < 2 {
        tracing::warn!(stops = stops.len(), "color scale needs at least 2 stops");
        return scale.first_stop();
    }

    let min = scale.resolved_min();
    let max = scale.resolved_max();

    match scale.kind {
        ColorScaleKind::Categorical => {
            let last = stops.len() - 1;
            let index = (fraction(value, min, max) * last as f64).floor();
            stops[clamp_index(index, last)]
        }
        ColorScaleKind::Diverging => diverging(stops, value, min, scale.resolved_center(), max),
        ColorScaleKind::Sequential => sequential(stops, fraction(value, min, max)),
    }
}

/// Linear interpolation between two colors, `t` in `[0, 1]`
pub fn lerp_rgb(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let channel = |c1: u8, c2: u8| {
        let v = c1 as f64 + t * (c2 as f64 - c1 as f64);
        v.round().clamp(0.0, 255.0) as u8
    };
    Rgb::new(channel(a.r, b.r), channel(a.g, b.g), channel(a.b, b.b))
}

/// Evenly spaced samples along a scale's value range (legend gradients)
pub fn sample_scale(scale: &ColorScale, count: usize) -> Vec<(f64, Rgb)> {
    let min = scale.resolved_min();
    let max = scale.resolved_max();

    match count {
        0 => Vec::new(),
        1 => vec![(min, interpolate_color(scale, min))],
        _ => (0..count)
            .map(|i| {
                let value = min + (max - min) * i as f64 / (count - 1) as f64;
                (value, interpolate_color(scale, value))
            })
            .collect(),
    }
}

fn sequential(stops: &[Rgb], norm: f64) -> Rgb {
    let last = stops.len() - 1;
    if norm <= 0.0 {
        return stops[0];
    }
    if norm >= 1.0 {
        return stops[last];
    }

    let segment = norm * last as f64;
    let index = segment.floor() as usize;
    if index >= last {
        return stops[last];
    }
    lerp_rgb(stops[index], stops[index + 1], segment - index as f64)
}

/// Values below `center` pick from the lower half of the stops, the rest from
/// the upper half. Lookup is discrete, not interpolated.
fn diverging(stops: &[Rgb], value: f64, min: f64, center: f64, max: f64) -> Rgb {
    let last = stops.len() - 1;
    let half = stops.len() as f64 / 2.0;

    let index = if value < center {
        (fraction(value, min, center) * half).floor()
    } else {
        (half + fraction(value, center, max) * half).floor()
    };

    stops[clamp_index(index, last)]
}

/// Position of `value` in `[lo, hi]`, clamped; zero-width ranges map to 0
fn fraction(value: f64, lo: f64, hi: f64) -> f64 {
    let span = hi - lo;
    if span == 0.0 || !span.is_finite() {
        return 0.0;
    }
    let t = (value - lo) / span;
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

fn clamp_index(index: f64, last: usize) -> usize {
    if index.is_nan() || index < 0.0 {
        return 0;
    }
    (index as usize).min(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartgeo_core::colors;

    fn red() -> Rgb {
        Rgb::new(255, 0, 0)
    }

    fn white() -> Rgb {
        Rgb::new(255, 255, 255)
    }

    fn blue() -> Rgb {
        Rgb::new(0, 0, 255)
    }

    #[test]
    fn test_sequential_endpoints_exact() {
        let scale = ColorScale::default().with_range(0.0, 100.0);
        assert_eq!(interpolate_color(&scale, 0.0), colors::HEAT_LOW);
        assert_eq!(interpolate_color(&scale, 100.0), colors::HEAT_HIGH);
        assert_eq!(interpolate_color(&scale, -5.0), colors::HEAT_LOW);
        assert_eq!(interpolate_color(&scale, 500.0), colors::HEAT_HIGH);
    }

    #[test]
    fn test_sequential_midpoint() {
        let scale = ColorScale::sequential(vec![Rgb::BLACK, white()]);
        assert_eq!(interpolate_color(&scale, 0.5), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_sequential_three_stops() {
        let scale = ColorScale::sequential(vec![red(), white(), blue()]).with_range(0.0, 4.0);
        assert_eq!(interpolate_color(&scale, 2.0), white());
        assert_eq!(interpolate_color(&scale, 3.0), Rgb::new(128, 128, 255));
    }

    #[test]
    fn test_sequential_is_monotonic() {
        let scale = ColorScale::sequential(vec![Rgb::BLACK, white()]).with_range(0.0, 10.0);
        let reds: Vec<u8> = (0..=10)
            .map(|v| interpolate_color(&scale, v as f64).r)
            .collect();
        assert!(reds.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_categorical_buckets() {
        let scale = ColorScale::categorical(vec![red(), white(), blue()]).with_range(0.0, 1.0);
        assert_eq!(interpolate_color(&scale, 0.0), red());
        assert_eq!(interpolate_color(&scale, 0.6), white());
        assert_eq!(interpolate_color(&scale, 1.0), blue());
        assert_eq!(interpolate_color(&scale, 9.0), blue());
    }

    #[test]
    fn test_diverging_halves() {
        let scale = ColorScale::diverging(vec![red(), Rgb::new(255, 200, 200), white(), blue()])
            .with_range(-10.0, 10.0)
            .with_center(0.0);

        assert_eq!(interpolate_color(&scale, -10.0), red());
        assert_eq!(interpolate_color(&scale, -2.0), Rgb::new(255, 200, 200));
        assert_eq!(interpolate_color(&scale, 0.0), white());
        assert_eq!(interpolate_color(&scale, 10.0), blue());
    }

    #[test]
    fn test_too_few_stops_falls_back() {
        let single = ColorScale::sequential(vec![red()]);
        assert_eq!(interpolate_color(&single, 0.3), red());

        let empty = ColorScale::sequential(Vec::new());
        assert_eq!(interpolate_color(&empty, 0.3), Rgb::BLACK);
    }

    #[test]
    fn test_zero_width_range() {
        let scale = ColorScale::sequential(vec![red(), blue()]).with_range(5.0, 5.0);
        assert_eq!(interpolate_color(&scale, 5.0), red());
    }

    #[test]
    fn test_lerp_rgb() {
        assert_eq!(lerp_rgb(Rgb::BLACK, white(), 0.0), Rgb::BLACK);
        assert_eq!(lerp_rgb(Rgb::BLACK, white(), 1.0), white());
        assert_eq!(lerp_rgb(red(), blue(), 0.25), Rgb::new(191, 0, 64));
    }

    #[test]
    fn test_sample_scale() {
        let scale = ColorScale::sequential(vec![Rgb::BLACK, white()]).with_range(0.0, 10.0);
        let samples = sample_scale(&scale, 3);
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0], (0.0, Rgb::BLACK));
        assert_eq!(samples[2], (10.0, white()));
    }
}
