//! Series normalization onto the `[0,1]×[0,1]` plane, including stacking.
//!
//! Stacked series are bottom-up in input order: the first series sits on the
//! baseline and each following series starts where the previous one ended.

use crate::stack_origin;
use chartgeo_core::{Domain, NormalizedPoint, NormalizedSeries, Rgb, Series, colors};
use serde::{Deserialize, Serialize};

/// Options for [`normalize_series`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    pub stacked: bool,
    /// Shared lower edge for bands (0 when unset)
    pub baseline: Option<f64>,
    /// Colors for series without their own; the default palette when empty
    pub palette: Vec<Rgb>,
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    pub fn baseline(mut self, baseline: f64) -> Self {
        self.baseline = Some(baseline);
        self
    }

    pub fn palette(mut self, palette: Vec<Rgb>) -> Self {
        self.palette = palette;
        self
    }
}

/// Map every series onto the domain's label order.
///
/// Labels a series has no point for are zero-filled. Stacking offsets are
/// threaded through the series as an explicit accumulator: each step returns a
/// fresh offsets vector instead of mutating shared state.
pub fn normalize_series(
    series: &[Series],
    domain: &Domain,
    options: &NormalizeOptions,
) -> Vec<NormalizedSeries> {
    let baseline = if options.stacked {
        stack_origin(options.baseline)
    } else {
        options.baseline.unwrap_or(0.0)
    };
    let initial_offsets = vec![baseline; domain.labels.len()];

    let (normalized, _) = series.iter().enumerate().fold(
        (Vec::with_capacity(series.len()), initial_offsets),
        |(mut out, offsets), (index, s)| {
            let points = normalize_points(s, domain, &offsets, options.stacked, baseline);
            let next_offsets = if options.stacked {
                points.iter().map(|p| p.stacked_value).collect()
            } else {
                offsets
            };

            out.push(NormalizedSeries {
                id: s.id.clone(),
                name: s.name.clone(),
                color: s.color.unwrap_or_else(|| colors::pick(&options.palette, index)),
                line_style: s.line_style.unwrap_or_default(),
                points,
            });
            (out, next_offsets)
        },
    );

    normalized
}

fn normalize_points(
    series: &Series,
    domain: &Domain,
    offsets: &[f64],
    stacked: bool,
    baseline: f64,
) -> Vec<NormalizedPoint> {
    let label_count = domain.labels.len();

    domain
        .labels
        .iter()
        .zip(offsets)
        .enumerate()
        .map(|(index, (label, &offset))| {
            let found = series.find(label);
            let value = found.map_or(0.0, |p| p.value);
            let (base, stacked_value) = if stacked {
                (offset, offset + value)
            } else {
                (baseline, value)
            };

            NormalizedPoint {
                label: label.clone(),
                value,
                x: x_fraction(index, label_count),
                y: normalize_y(domain, stacked_value),
                base_y: normalize_y(domain, base),
                base,
                stacked_value,
                present: found.is_some(),
            }
        })
        .collect()
}

/// Horizontal fraction of the `index`-th of `count` labels
/// (`0.5` when there is only one, so a lone point is centered)
pub fn x_fraction(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 0.5;
    }
    index as f64 / (count - 1) as f64
}

/// Fraction of the way from `min` to `max`, not inverted
pub fn normalize_value(domain: &Domain, value: f64) -> f64 {
    let span = domain.span();
    if span == 0.0 {
        return 0.5;
    }
    (value - domain.min) / span
}

/// Screen-space vertical fraction: `0` at `max` (top), `1` at `min` (bottom)
pub fn normalize_y(domain: &Domain, value: f64) -> f64 {
    1.0 - normalize_value(domain, value)
}
