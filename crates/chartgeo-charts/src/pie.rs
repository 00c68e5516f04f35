//! Pie and donut charts

use crate::{ChartDimensions, colors};
use chartgeo_core::{AngleSpan, DataPoint, Point, Rgb};
use chartgeo_engine::{build_sector_path, layout_segments, polar_point};
use serde::{Deserialize, Serialize};

/// Label anchor distance for solid pies, as a share of the radius
const PIE_LABEL_RADIUS: f64 = 0.65;

/// Segment to highlight, by position or by label text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActiveSegment {
    Index(usize),
    Label(String),
}

impl ActiveSegment {
    fn matches(&self, index: usize, point: &DataPoint) -> bool {
        match self {
            Self::Index(i) => *i == index,
            Self::Label(label) => point.label.to_string() == *label,
        }
    }
}

/// Pie chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieConfig {
    pub aspect_ratio: f64,
    /// Space around the pie, in percent of the half-extent
    pub padding: f64,
    pub donut: bool,
    /// Ring thickness, in percent of the radius
    pub donut_width: f64,
    /// Degrees clockwise from 12 o'clock
    pub start_angle: f64,
    /// Segment palette; empty uses the extended segment palette
    pub colors: Vec<Rgb>,
    pub active_segment: Option<ActiveSegment>,
    /// Indices of segments pulled out from the center
    pub explode: Vec<usize>,
    /// Explode distance as a share of the radius
    pub explode_offset: f64,
}

impl Default for PieConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 1.0,
            padding: 30.0,
            donut: false,
            donut_width: 60.0,
            start_angle: 0.0,
            colors: Vec::new(),
            active_segment: None,
            explode: Vec::new(),
            explode_offset: 0.1,
        }
    }
}

impl PieConfig {
    pub fn donut(mut self, width: f64) -> Self {
        self.donut = true;
        self.donut_width = width;
        self
    }

    pub fn start_angle(mut self, degrees: f64) -> Self {
        self.start_angle = degrees;
        self
    }

    pub fn active_segment(mut self, active: ActiveSegment) -> Self {
        self.active_segment = Some(active);
        self
    }

    pub fn explode(mut self, indices: Vec<usize>) -> Self {
        self.explode = indices;
        self
    }

    pub fn dimensions(&self) -> ChartDimensions {
        ChartDimensions::from_aspect_ratio(self.aspect_ratio)
    }

    fn color(&self, index: usize) -> Rgb {
        if self.colors.is_empty() {
            colors::SEGMENTS[index % colors::SEGMENTS.len()]
        } else {
            colors::pick(&self.colors, index)
        }
    }
}

/// One slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSegmentGeometry {
    pub index: usize,
    pub label: String,
    pub value: f64,
    pub percentage: f64,
    pub color: Rgb,
    pub path: String,
    /// Label anchor, already shifted by `offset`
    pub centroid: Point,
    /// Explode translation (zero unless exploded)
    pub offset: Point,
    pub angles: AngleSpan,
    pub active: bool,
}

/// Complete pie chart geometry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieGeometry {
    pub view_box: String,
    pub center: Point,
    pub radius: f64,
    /// 0 for a solid pie
    pub inner_radius: f64,
    pub total: f64,
    pub segments: Vec<PieSegmentGeometry>,
}

/// Compute pie or donut geometry.
///
/// Segments keep input order, clockwise from `start_angle`. Zero-valued
/// points produce a segment with an empty path.
pub fn compute_pie(data: &[DataPoint], config: &PieConfig) -> PieGeometry {
    let dims = config.dimensions();
    let center = Point::new(dims.width / 2.0, dims.height / 2.0);
    let half = center.x.min(center.y);
    let radius = half - config.padding / 100.0 * half;

    let (inner_radius, label_radius) = if config.donut {
        (
            radius - config.donut_width / 100.0 * radius,
            radius - config.donut_width / 2.0 / 100.0 * radius,
        )
    } else {
        (0.0, radius * PIE_LABEL_RADIUS)
    };

    let total = data.iter().map(|p| p.value).sum();

    let segments: Vec<PieSegmentGeometry> =
        layout_segments(data, config.start_angle.to_radians(), center, label_radius)
            .into_iter()
            .enumerate()
            .map(|(index, segment)| {
                let offset = if config.explode.contains(&index) {
                    polar_point(
                        Point::default(),
                        radius * config.explode_offset,
                        segment.mid_angle,
                    )
                } else {
                    Point::default()
                };
                let shifted = Point::new(center.x + offset.x, center.y + offset.y);

                PieSegmentGeometry {
                    index,
                    label: segment.point.label.to_string(),
                    value: segment.point.value,
                    percentage: segment.percentage,
                    color: config.color(index),
                    path: build_sector_path(
                        shifted,
                        inner_radius,
                        radius,
                        segment.start_angle,
                        segment.end_angle,
                    ),
                    centroid: Point::new(segment.centroid.x + offset.x, segment.centroid.y + offset.y),
                    offset,
                    angles: AngleSpan {
                        start_angle: segment.start_angle,
                        end_angle: segment.end_angle,
                        mid_angle: segment.mid_angle,
                    },
                    active: config
                        .active_segment
                        .as_ref()
                        .is_some_and(|a| a.matches(index, &segment.point)),
                }
            })
            .collect();

    tracing::trace!(
        kind = "pie",
        segments = segments.len(),
        donut = config.donut,
        "computed chart geometry"
    );

    PieGeometry {
        view_box: dims.viewbox(),
        center,
        radius,
        inner_radius,
        total,
        segments,
    }
}
