//! Radar (spider) charts: one polygon per series over shared axes

use crate::colors;
use chartgeo_core::{Label, LineStyle, Point, Rgb, Series, SeriesId};
use chartgeo_engine::{build_polygon_path, even_weights, layout_angles, polar_point};
use serde::{Deserialize, Serialize};

/// Radar charts use a fixed square viewBox
pub const RADAR_VIEW_SIZE: f64 = 500.0;

/// Distance of axis labels beyond the outer ring
const LABEL_OFFSET: f64 = 15.0;

/// Radar chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    pub padding: f64,
    /// Number of concentric grid rings
    pub levels: usize,
    /// Value at the outer ring; defaults to the data maximum
    pub max_value: Option<f64>,
    /// Radius in percent of the space inside the padding
    pub radius_size: f64,
    pub filled: bool,
    pub fill_opacity: f64,
    pub show_points: bool,
    pub colors: Vec<Rgb>,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            padding: 30.0,
            levels: 5,
            max_value: None,
            radius_size: 85.0,
            filled: true,
            fill_opacity: 0.2,
            show_points: true,
            colors: Vec::new(),
        }
    }
}

impl RadarConfig {
    pub fn max_value(mut self, max: f64) -> Self {
        self.max_value = Some(max);
        self
    }

    pub fn levels(mut self, levels: usize) -> Self {
        self.levels = levels;
        self
    }

    pub fn filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    pub fn radius(&self) -> f64 {
        (RADAR_VIEW_SIZE / 2.0 - self.padding) * (self.radius_size / 100.0)
    }
}

/// Spoke from the center to the outer ring
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarAxis {
    pub label: Label,
    pub angle: f64,
    pub end: Point,
    pub label_anchor: Point,
}

/// Concentric grid ring
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarLevel {
    /// Data value the ring stands for
    pub value: f64,
    pub radius: f64,
    /// Polygon through every axis at this radius
    pub path: String,
}

/// One vertex of a series polygon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarVertex {
    pub axis: Label,
    /// 0 when the series has no value on this axis
    pub value: f64,
    pub normalized: f64,
    pub position: Point,
}

/// Geometry of one radar series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeriesGeometry {
    pub id: SeriesId,
    pub name: String,
    pub color: Rgb,
    /// Empty unless filled
    pub fill: String,
    pub line_style: LineStyle,
    pub dash_array: &'static str,
    pub path: String,
    /// Empty unless `show_points`
    pub vertices: Vec<RadarVertex>,
}

/// Complete radar chart geometry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarGeometry {
    pub view_box: String,
    pub center: Point,
    pub radius: f64,
    pub max_value: f64,
    pub axes: Vec<RadarAxis>,
    pub levels: Vec<RadarLevel>,
    pub series: Vec<RadarSeriesGeometry>,
}

/// Union of every series' labels in first-seen order
pub fn radar_axes(series: &[Series]) -> Vec<Label> {
    let mut axes: Vec<Label> = Vec::new();
    for label in series.iter().flat_map(|s| s.data.iter().map(|p| &p.label)) {
        if !axes.contains(label) {
            axes.push(label.clone());
        }
    }
    axes
}

/// Compute radar geometry.
///
/// Axis `i` of `n` points at `i·2π/n` clockwise from 12 o'clock. A
/// non-positive or missing maximum falls back to the data maximum, then to 1.
pub fn compute_radar(series: &[Series], config: &RadarConfig) -> RadarGeometry {
    let center = Point::new(RADAR_VIEW_SIZE / 2.0, RADAR_VIEW_SIZE / 2.0);
    let radius = config.radius();

    let axis_labels = radar_axes(series);
    let angles: Vec<f64> = layout_angles(&even_weights(axis_labels.len()), 0.0)
        .iter()
        .map(|span| span.start_angle)
        .collect();

    let data_max = series
        .iter()
        .flat_map(|s| s.data.iter().map(|p| p.value))
        .filter(|v| v.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    let max_value = config
        .max_value
        .filter(|m| *m > 0.0)
        .or(Some(data_max).filter(|m| *m > 0.0))
        .unwrap_or(1.0);

    let ring = |r: f64| -> Vec<Point> {
        angles.iter().map(|&a| polar_point(center, r, a)).collect()
    };

    let axes = axis_labels
        .iter()
        .zip(&angles)
        .map(|(label, &angle)| RadarAxis {
            label: label.clone(),
            angle,
            end: polar_point(center, radius, angle),
            label_anchor: polar_point(center, radius + LABEL_OFFSET, angle),
        })
        .collect();

    let levels = (1..=config.levels)
        .map(|i| {
            let fraction = i as f64 / config.levels as f64;
            RadarLevel {
                value: max_value * fraction,
                radius: radius * fraction,
                path: build_polygon_path(&ring(radius * fraction)),
            }
        })
        .collect();

    let geometry: Vec<RadarSeriesGeometry> = series
        .iter()
        .enumerate()
        .map(|(index, s)| {
            let color = s.color.unwrap_or_else(|| colors::pick(&config.colors, index));
            let line_style = s.line_style.unwrap_or_default();

            let vertices: Vec<RadarVertex> = axis_labels
                .iter()
                .zip(&angles)
                .map(|(axis, &angle)| {
                    let value = s.value_at(axis);
                    let normalized = value / max_value;
                    RadarVertex {
                        axis: axis.clone(),
                        value,
                        normalized,
                        position: polar_point(center, normalized * radius, angle),
                    }
                })
                .collect();

            let outline: Vec<Point> = vertices.iter().map(|v| v.position).collect();

            RadarSeriesGeometry {
                id: s.id.clone(),
                name: s.name.clone(),
                color,
                fill: if config.filled {
                    color.with_alpha(config.fill_opacity)
                } else {
                    String::new()
                },
                line_style,
                dash_array: line_style.dash_array(),
                path: build_polygon_path(&outline),
                vertices: if config.show_points { vertices } else { Vec::new() },
            }
        })
        .collect();

    tracing::trace!(
        kind = "radar",
        axes = axis_labels.len(),
        series = geometry.len(),
        max_value,
        "computed chart geometry"
    );

    RadarGeometry {
        view_box: format!("0 0 {} {}", RADAR_VIEW_SIZE, RADAR_VIEW_SIZE),
        center,
        radius,
        max_value,
        axes,
        levels,
        series: geometry,
    }
}
