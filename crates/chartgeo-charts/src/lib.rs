//! # chartgeo-charts
//!
//! Per-chart-kind geometry built on `chartgeo-engine`. Each kind takes
//! series plus a serde config and returns plain geometry (paths, rectangles,
//! ticks, colors) ready for an external renderer.
//!
//! ## Architecture
//!
//! Uses tagged-variant dispatch (`ChartSpec`) over chart kinds; every kind
//! shares the engine's domain, tick, normalization and path components.
//!
//! ## Modules
//!
//! - `axis` - Axis titles, units and tick label formats
//! - `area` - Area charts, stacked or layered
//! - `line` - Line charts with optional fill
//! - `bar` - Grouped/stacked bars, vertical or horizontal
//! - `scatter` - Numeric x/y scatter with markers and trend lines
//! - `heatmap` - Label grid colored through a color scale
//! - `pie` - Pie and donut charts
//! - `radar` - Radar (spider) charts
//! - `histogram` - Binned value distributions
//! - `spec` - `ChartSpec` / `ChartGeometry` dispatch
//! - `memo` - Geometry cache

pub mod area;
pub mod axis;
pub mod bar;
pub mod heatmap;
pub mod histogram;
pub mod line;
pub mod memo;
pub mod pie;
pub mod radar;
pub mod scatter;
pub mod spec;

pub use area::*;
pub use axis::*;
pub use bar::*;
pub use heatmap::*;
pub use histogram::*;
pub use line::*;
pub use memo::*;
pub use pie::*;
pub use radar::*;
pub use scatter::*;
pub use spec::*;

// Re-export palettes from chartgeo-core for convenience
pub use chartgeo_core::colors;

use chartgeo_engine::PlotFrame;
use serde::{Deserialize, Serialize};

/// Width of every chart's viewBox; height follows the aspect ratio
pub const VIEWBOX_WIDTH: f64 = 1000.0;

/// Default aspect ratio for cartesian charts
pub const DEFAULT_ASPECT_RATIO: f64 = 16.0 / 9.0;

/// Chart margin configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ChartMargin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    /// Standard cartesian chart padding
    pub const fn standard() -> Self {
        Self::new(30.0, 30.0, 40.0, 50.0)
    }

    /// Extra room for row and column labels
    pub const fn heatmap() -> Self {
        Self::new(40.0, 30.0, 50.0, 60.0)
    }
}

impl Default for ChartMargin {
    fn default() -> Self {
        Self::standard()
    }
}

/// Chart dimensions with margin handling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
}

impl ChartDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: ChartMargin::default(),
        }
    }

    /// Fixed-width viewBox whose height is `round(width / aspect_ratio)`
    pub fn from_aspect_ratio(aspect_ratio: f64) -> Self {
        let aspect_ratio = if aspect_ratio > 0.0 && aspect_ratio.is_finite() {
            aspect_ratio
        } else {
            DEFAULT_ASPECT_RATIO
        };
        Self::new(VIEWBOX_WIDTH, (VIEWBOX_WIDTH / aspect_ratio).round())
    }

    pub fn with_margin(mut self, margin: ChartMargin) -> Self {
        self.margin = margin;
        self
    }

    /// Inner width (excluding margins)
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Inner height (excluding margins)
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    /// Plot area the normalized geometry is projected into
    pub fn plot_frame(&self) -> PlotFrame {
        PlotFrame::new(
            self.margin.left,
            self.margin.top,
            self.inner_width(),
            self.inner_height(),
        )
    }

    /// ViewBox string for SVG
    pub fn viewbox(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self::from_aspect_ratio(DEFAULT_ASPECT_RATIO)
    }
}
