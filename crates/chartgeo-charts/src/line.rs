//! Line charts: one polyline per series, optional fill to the plot bottom

use crate::{AxisConfig, ChartDimensions, ChartMargin, DEFAULT_ASPECT_RATIO};
use chartgeo_core::{Domain, LineStyle, OrdinalTick, Point, Rgb, Series, SeriesId, Tick};
use chartgeo_engine::{
    BaselineAreaPath, DomainOptions, LinePath, NormalizeOptions, PathGenerator, PlotFrame,
    normalize_series, resolve_domain,
};
use serde::{Deserialize, Serialize};

/// Line chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    pub aspect_ratio: f64,
    pub padding: ChartMargin,
    pub start_y_at_zero: bool,
    pub show_area: bool,
    pub area_opacity: f64,
    pub show_points: bool,
    pub colors: Vec<Rgb>,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            padding: ChartMargin::standard(),
            start_y_at_zero: false,
            show_area: false,
            area_opacity: 0.1,
            show_points: true,
            colors: Vec::new(),
            x_axis: AxisConfig::default(),
            y_axis: AxisConfig::default(),
        }
    }
}

impl LineConfig {
    pub fn start_y_at_zero(mut self, zero: bool) -> Self {
        self.start_y_at_zero = zero;
        self
    }

    pub fn show_area(mut self, show: bool) -> Self {
        self.show_area = show;
        self
    }

    pub fn dimensions(&self) -> ChartDimensions {
        ChartDimensions::from_aspect_ratio(self.aspect_ratio).with_margin(self.padding)
    }
}

/// Geometry of one line series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeriesGeometry {
    pub id: SeriesId,
    pub name: String,
    pub color: Rgb,
    pub line_style: LineStyle,
    /// SVG `stroke-dasharray` for `line_style`
    pub dash_array: &'static str,
    pub path: String,
    /// Fill under the line; empty unless `show_area`
    pub area_path: String,
    pub points: Vec<Point>,
}

/// Complete line chart geometry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineGeometry {
    pub view_box: String,
    pub frame: PlotFrame,
    pub domain: Domain,
    pub series: Vec<LineSeriesGeometry>,
    pub x_ticks: Vec<OrdinalTick>,
    pub y_ticks: Vec<Tick>,
}

/// Compute line chart geometry.
///
/// Lines only pass through labels a series actually has a point for; gaps are
/// bridged rather than dropped to zero.
pub fn compute_line(series: &[Series], config: &LineConfig) -> LineGeometry {
    let dims = config.dimensions();
    let frame = dims.plot_frame();

    let domain = resolve_domain(series, &DomainOptions::new().zero_based(config.start_y_at_zero));
    let normalized = normalize_series(
        series,
        &domain,
        &NormalizeOptions::new().palette(config.colors.clone()),
    );

    let geometry: Vec<LineSeriesGeometry> = normalized
        .into_iter()
        .map(|n| {
            let points: Vec<Point> = n
                .points
                .iter()
                .filter(|p| p.present)
                .map(|p| frame.project(p.x, p.y))
                .collect();

            LineSeriesGeometry {
                dash_array: n.line_style.dash_array(),
                path: LinePath.generate(&points),
                area_path: if config.show_area {
                    BaselineAreaPath {
                        baseline_y: frame.bottom(),
                    }
                    .generate(&points)
                } else {
                    String::new()
                },
                points: if config.show_points { points } else { Vec::new() },
                id: n.id,
                name: n.name,
                color: n.color,
                line_style: n.line_style,
            }
        })
        .collect();

    tracing::trace!(kind = "line", series = geometry.len(), "computed chart geometry");

    LineGeometry {
        view_box: dims.viewbox(),
        frame,
        x_ticks: config.x_axis.category_ticks(&domain.labels),
        y_ticks: config.y_axis.value_ticks(&domain),
        domain,
        series: geometry,
    }
}
