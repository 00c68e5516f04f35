//! Engine output types: domains, ticks, normalized points, angular segments

use crate::{DataPoint, Label, LineStyle, Rgb, SeriesId};
use serde::{Deserialize, Serialize};

/// 2D point (normalized or pixel space, depending on the producer)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle (bars, heatmap cells)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Closed numeric interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const UNIT: Range = Range { min: 0.0, max: 1.0 };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Resolved axis domain: numeric range plus ordered category labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
    /// De-duplicated, sorted x-labels (empty for purely numeric axes)
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl Domain {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            labels: Vec::new(),
        }
    }

    /// The `[0, 1]` fallback used for empty input
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    pub fn with_labels(mut self, labels: Vec<Label>) -> Self {
        self.labels = labels;
        self
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Axis tick on a numeric axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub label: String,
    /// Fraction along the axis, `0` at `min`, `1` at `max`
    pub position: f64,
}

/// Axis tick on a category axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdinalTick {
    pub index: usize,
    pub label: String,
    pub position: f64,
}

/// A data point placed on the normalized `[0,1]×[0,1]` plane.
///
/// `y` and `base_y` are already inverted for screen space (0 = top).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub label: Label,
    /// Raw value of this series at the label (0 when the series had no point)
    pub value: f64,
    pub x: f64,
    /// Normalized upper edge (`stacked_value`)
    pub y: f64,
    /// Normalized lower edge (`base`)
    pub base_y: f64,
    /// Raw lower edge of the band
    pub base: f64,
    /// Raw upper edge of the band
    pub stacked_value: f64,
    /// Whether the series actually had a point at this label
    pub present: bool,
}

impl NormalizedPoint {
    /// Band thickness in raw units
    pub fn extent(&self) -> f64 {
        self.stacked_value - self.base
    }
}

/// Normalized points for one series, aligned to the domain's labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSeries {
    pub id: SeriesId,
    pub name: String,
    pub color: Rgb,
    pub line_style: LineStyle,
    pub points: Vec<NormalizedPoint>,
}

/// Angular extent of one category, in screen radians
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleSpan {
    pub start_angle: f64,
    pub end_angle: f64,
    pub mid_angle: f64,
}

impl AngleSpan {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Pie/radar segment: a data point with its share of the circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub point: DataPoint,
    /// Share of the total, `0..=100`
    pub percentage: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub mid_angle: f64,
    /// Label anchor
    pub centroid: Point,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_keeps_labels() {
        let domain = Domain::unit().with_labels(vec!["Jan".into(), "Feb".into()]);
        assert_eq!(domain.labels[1], Label::from("Feb"));
        assert_eq!(domain.span(), 1.0);
    }
}
