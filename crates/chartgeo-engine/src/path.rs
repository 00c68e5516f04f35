//! # path
//!
//! Path description primitives: a fluent builder, line/area/polygon
//! generators over normalized points, and scatter marker shapes.
//! Implements Strategy pattern for path generation.

use chartgeo_core::{NormalizedPoint, Point};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

// ============================================================================
// PLOT FRAME
// ============================================================================

/// Pixel rectangle that normalized `[0,1]` coordinates are projected into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotFrame {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Identity frame: paths stay in normalized coordinates
    pub const fn unit() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    pub fn project_x(&self, nx: f64) -> f64 {
        self.x + nx * self.width
    }

    pub fn project_y(&self, ny: f64) -> f64 {
        self.y + ny * self.height
    }

    pub fn project(&self, nx: f64, ny: f64) -> Point {
        Point::new(self.project_x(nx), self.project_y(ny))
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

impl Default for PlotFrame {
    fn default() -> Self {
        Self::unit()
    }
}

// ============================================================================
// PATH BUILDER (fluent API)
// ============================================================================

/// Path builder with fluent API; coordinates are written with two decimals
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            commands: String::with_capacity(256),
        }
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "M{:.2},{:.2}", x, y);
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "L{:.2},{:.2}", x, y);
        self
    }

    pub fn horizontal_to(mut self, x: f64) -> Self {
        let _ = write!(self.commands, "H{:.2}", x);
        self
    }

    pub fn vertical_to(mut self, y: f64) -> Self {
        let _ = write!(self.commands, "V{:.2}", y);
        self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn arc_to(
        mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        let _ = write!(
            self.commands,
            "A{:.2},{:.2},{:.2},{},{},{:.2},{:.2}",
            rx, ry, rotation, large_arc as u8, sweep as u8, x, y
        );
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push('Z');
        self
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn build(self) -> String {
        self.commands
    }
}

// ============================================================================
// STRATEGY PATTERN: Path Generator Trait
// ============================================================================

/// Strategy trait for turning a pixel-space point list into a path
pub trait PathGenerator: Send + Sync {
    fn generate(&self, points: &[Point]) -> String;
}

/// Open polyline
#[derive(Debug, Clone, Copy, Default)]
pub struct LinePath;

impl PathGenerator for LinePath {
    fn generate(&self, points: &[Point]) -> String {
        let Some((first, rest)) = points.split_first() else {
            return String::new();
        };

        rest.iter()
            .fold(PathBuilder::new().move_to(first.x, first.y), |b, p| {
                b.line_to(p.x, p.y)
            })
            .build()
    }
}

/// Closed polygon (radar outlines, level rings)
#[derive(Debug, Clone, Copy, Default)]
pub struct PolygonPath;

impl PathGenerator for PolygonPath {
    fn generate(&self, points: &[Point]) -> String {
        if points.is_empty() {
            return String::new();
        }
        let mut path = LinePath.generate(points);
        path.push('Z');
        path
    }
}

/// Filled region between a top edge and a constant baseline
#[derive(Debug, Clone, Copy)]
pub struct BaselineAreaPath {
    pub baseline_y: f64,
}

impl PathGenerator for BaselineAreaPath {
    fn generate(&self, points: &[Point]) -> String {
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return String::new();
        };

        points
            .iter()
            .fold(PathBuilder::new().move_to(first.x, self.baseline_y), |b, p| {
                b.line_to(p.x, p.y)
            })
            .line_to(last.x, self.baseline_y)
            .close()
            .build()
    }
}

// ============================================================================
// NORMALIZED SERIES PATHS
// ============================================================================

/// Line through each point's upper edge (`y`), in domain order
pub fn build_line_path(points: &[NormalizedPoint], frame: &PlotFrame) -> String {
    let projected: Vec<Point> = points.iter().map(|p| frame.project(p.x, p.y)).collect();
    LinePath.generate(&projected)
}

/// Closed band between each point's `stacked_value` and `base` edges.
///
/// Traces the upper edge left to right, then the base edge right to left.
pub fn build_area_path(points: &[NormalizedPoint], frame: &PlotFrame) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };

    let top = frame.project(first.x, first.y);
    let builder = rest
        .iter()
        .map(|p| frame.project(p.x, p.y))
        .fold(PathBuilder::new().move_to(top.x, top.y), |b, p| b.line_to(p.x, p.y));

    points
        .iter()
        .rev()
        .map(|p| frame.project(p.x, p.base_y))
        .fold(builder, |b, p| b.line_to(p.x, p.y))
        .close()
        .build()
}

/// Closed polygon through pixel-space points
pub fn build_polygon_path(points: &[Point]) -> String {
    PolygonPath.generate(points)
}

// ============================================================================
// MARKERS
// ============================================================================

/// Scatter point marker shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerShape {
    #[default]
    Circle,
    Square,
    Triangle,
    Diamond,
    Cross,
}

/// Outline of a marker of diameter `size` centered on `(cx, cy)`.
///
/// The cross is two open strokes and is meant to be stroked, not filled.
pub fn marker_path(shape: MarkerShape, cx: f64, cy: f64, size: f64) -> String {
    let half = size / 2.0;

    match shape {
        MarkerShape::Circle => PathBuilder::new()
            .move_to(cx - half, cy)
            .arc_to(half, half, 0.0, false, true, cx + half, cy)
            .arc_to(half, half, 0.0, false, true, cx - half, cy)
            .close()
            .build(),
        MarkerShape::Square => PathBuilder::new()
            .move_to(cx - half, cy - half)
            .horizontal_to(cx + half)
            .vertical_to(cy + half)
            .horizontal_to(cx - half)
            .close()
            .build(),
        MarkerShape::Triangle => {
            let sqrt3 = 3.0_f64.sqrt();
            PathBuilder::new()
                .move_to(cx, cy - size / sqrt3)
                .line_to(cx + half, cy + size / (2.0 * sqrt3))
                .line_to(cx - half, cy + size / (2.0 * sqrt3))
                .close()
                .build()
        }
        MarkerShape::Diamond => PathBuilder::new()
            .move_to(cx, cy - half)
            .line_to(cx + half, cy)
            .line_to(cx, cy + half)
            .line_to(cx - half, cy)
            .close()
            .build(),
        MarkerShape::Cross => PathBuilder::new()
            .move_to(cx - half, cy - half)
            .line_to(cx + half, cy + half)
            .move_to(cx - half, cy + half)
            .line_to(cx + half, cy - half)
            .build(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chartgeo_core::Label;

    fn band(x: f64, y: f64, base_y: f64) -> NormalizedPoint {
        NormalizedPoint {
            label: Label::from(x),
            value: 0.0,
            x,
            y,
            base_y,
            base: 0.0,
            stacked_value: 0.0,
            present: true,
        }
    }

    #[test]
    fn test_path_builder() {
        let path = PathBuilder::new()
            .move_to(0.0, 0.0)
            .line_to(100.0, 100.0)
            .close()
            .build();

        assert_eq!(path, "M0.00,0.00L100.00,100.00Z");
    }

    #[test]
    fn test_line_path_generator() {
        let path = LinePath.generate(&[
            Point::new(0.0, 0.0),
            Point::new(50.0, 50.0),
            Point::new(100.0, 0.0),
        ]);

        assert!(path.starts_with("M0.00,0.00"));
        assert!(path.contains("L50.00,50.00"));
        assert_eq!(path.matches('L').count(), 2);
    }

    #[test]
    fn test_empty_inputs_yield_empty_paths() {
        assert_eq!(LinePath.generate(&[]), "");
        assert_eq!(build_polygon_path(&[]), "");
        assert_eq!(build_line_path(&[], &PlotFrame::unit()), "");
        assert_eq!(build_area_path(&[], &PlotFrame::unit()), "");
        assert_eq!(BaselineAreaPath { baseline_y: 1.0 }.generate(&[]), "");
    }

    #[test]
    fn test_line_path_projects_into_frame() {
        let frame = PlotFrame::new(50.0, 30.0, 100.0, 200.0);
        let path = build_line_path(&[band(0.0, 0.5, 1.0), band(1.0, 0.0, 1.0)], &frame);
        assert_eq!(path, "M50.00,130.00L150.00,30.00");
    }

    #[test]
    fn test_area_path_traces_base_in_reverse() {
        let points = [band(0.0, 0.2, 0.6), band(0.5, 0.1, 0.5), band(1.0, 0.3, 0.7)];
        let path = build_area_path(&points, &PlotFrame::new(0.0, 0.0, 100.0, 100.0));

        assert_eq!(
            path,
            "M0.00,20.00L50.00,10.00L100.00,30.00L100.00,70.00L50.00,50.00L0.00,60.00Z"
        );
    }

    #[test]
    fn test_baseline_area() {
        let path = BaselineAreaPath { baseline_y: 10.0 }
            .generate(&[Point::new(0.0, 2.0), Point::new(5.0, 4.0)]);
        assert_eq!(path, "M0.00,10.00L0.00,2.00L5.00,4.00L5.00,10.00Z");
    }

    #[test]
    fn test_polygon_closes() {
        let path = build_polygon_path(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ]);
        assert!(path.ends_with('Z'));
        assert_eq!(path.matches('L').count(), 2);
    }

    #[test]
    fn test_marker_shapes() {
        assert_eq!(
            marker_path(MarkerShape::Diamond, 10.0, 10.0, 4.0),
            "M10.00,8.00L12.00,10.00L10.00,12.00L8.00,10.00Z"
        );
        assert_eq!(
            marker_path(MarkerShape::Square, 0.0, 0.0, 2.0),
            "M-1.00,-1.00H1.00V1.00H-1.00Z"
        );
        assert_eq!(marker_path(MarkerShape::Circle, 0.0, 0.0, 2.0).matches('A').count(), 2);
        assert!(!marker_path(MarkerShape::Cross, 0.0, 0.0, 2.0).contains('Z'));
    }
}
