//! Scatter plots: numeric x/y points with marker shapes and trend lines

use crate::{AxisConfig, ChartDimensions, ChartMargin, DEFAULT_ASPECT_RATIO, colors};
use chartgeo_core::{Domain, Metadata, Point, Range, Rgb, SeriesId, Tick};
use chartgeo_engine::{
    DomainOptions, LinePath, MarkerShape, PathGenerator, PlotFrame, Regression, fit_regression,
    marker_path, normalize_value, normalize_y, resolve_numeric_domain,
};
use serde::{Deserialize, Serialize};

/// Share of the data extent added on both sides of a computed axis
const AXIS_PADDING: f64 = 0.05;

/// Default marker diameter
pub const DEFAULT_POINT_SIZE: f64 = 8.0;

/// Single scatter observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    /// Overrides the series point size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    /// Overrides the series color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl ScatterPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            size: None,
            color: None,
            label: None,
            metadata: None,
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }
}

/// Scatter series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub id: SeriesId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_size: Option<f64>,
    #[serde(default)]
    pub shape: MarkerShape,
    #[serde(default)]
    pub data: Vec<ScatterPoint>,
}

impl ScatterSeries {
    pub fn new(id: impl Into<SeriesId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: None,
            point_size: None,
            shape: MarkerShape::default(),
            data: Vec::new(),
        }
    }

    /// Build a series from `(x, y)` pairs
    pub fn from_xy(
        id: impl Into<SeriesId>,
        name: impl Into<String>,
        pairs: impl IntoIterator<Item = (f64, f64)>,
    ) -> Self {
        let mut series = Self::new(id, name);
        series.data = pairs.into_iter().map(|(x, y)| ScatterPoint::new(x, y)).collect();
        series
    }

    pub fn with_shape(mut self, shape: MarkerShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_point_size(mut self, size: f64) -> Self {
        self.point_size = Some(size);
        self
    }
}

/// Scatter plot configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    pub aspect_ratio: f64,
    pub padding: ChartMargin,
    /// Fixed x range; disables padding on that axis
    pub x_domain: Option<Range>,
    pub y_domain: Option<Range>,
    pub start_x_at_zero: bool,
    pub start_y_at_zero: bool,
    pub show_regression_line: bool,
    pub colors: Vec<Rgb>,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            padding: ChartMargin::standard(),
            x_domain: None,
            y_domain: None,
            start_x_at_zero: false,
            start_y_at_zero: false,
            show_regression_line: false,
            colors: Vec::new(),
            x_axis: AxisConfig::default(),
            y_axis: AxisConfig::default(),
        }
    }
}

impl ScatterConfig {
    pub fn x_domain(mut self, min: f64, max: f64) -> Self {
        self.x_domain = Some(Range::new(min, max));
        self
    }

    pub fn y_domain(mut self, min: f64, max: f64) -> Self {
        self.y_domain = Some(Range::new(min, max));
        self
    }

    pub fn start_at_zero(mut self, x: bool, y: bool) -> Self {
        self.start_x_at_zero = x;
        self.start_y_at_zero = y;
        self
    }

    pub fn show_regression_line(mut self, show: bool) -> Self {
        self.show_regression_line = show;
        self
    }

    pub fn dimensions(&self) -> ChartDimensions {
        ChartDimensions::from_aspect_ratio(self.aspect_ratio).with_margin(self.padding)
    }
}

/// One placed marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterMarker {
    /// Pixel position
    pub position: Point,
    /// Data coordinates
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: Rgb,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Markers of one series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeriesGeometry {
    pub id: SeriesId,
    pub name: String,
    pub color: Rgb,
    pub shape: MarkerShape,
    pub markers: Vec<ScatterMarker>,
}

/// Least-squares trend line clipped to the x-domain edges
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendLine {
    pub series_id: SeriesId,
    pub color: Rgb,
    pub regression: Regression,
    pub start: Point,
    pub end: Point,
    pub path: String,
}

/// Complete scatter plot geometry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterGeometry {
    pub view_box: String,
    pub frame: PlotFrame,
    pub x_domain: Domain,
    pub y_domain: Domain,
    pub series: Vec<ScatterSeriesGeometry>,
    pub trend_lines: Vec<TrendLine>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

/// Resolve one scatter axis.
///
/// `start_at_zero` only ever lowers a positive minimum. Computed axes get 5%
/// of their extent added on both ends; an explicit range is used as given.
pub fn scatter_axis_domain(
    values: impl IntoIterator<Item = f64>,
    explicit: Option<Range>,
    start_at_zero: bool,
) -> Domain {
    let options = DomainOptions {
        explicit,
        ..DomainOptions::default()
    };
    let mut domain = resolve_numeric_domain(values, &options);

    if start_at_zero && domain.min > 0.0 {
        domain.min = 0.0;
    }

    if explicit.is_none() {
        let pad = domain.span() * AXIS_PADDING;
        domain.min -= pad;
        domain.max += pad;
    }

    domain
}

/// Compute scatter plot geometry
pub fn compute_scatter(series: &[ScatterSeries], config: &ScatterConfig) -> ScatterGeometry {
    let dims = config.dimensions();
    let frame = dims.plot_frame();

    let points = || series.iter().flat_map(|s| s.data.iter());
    let x_domain = scatter_axis_domain(
        points().map(|p| p.x),
        config.x_domain,
        config.start_x_at_zero,
    );
    let y_domain = scatter_axis_domain(
        points().map(|p| p.y),
        config.y_domain,
        config.start_y_at_zero,
    );

    let place = |x: f64, y: f64| {
        frame.project(normalize_value(&x_domain, x), normalize_y(&y_domain, y))
    };

    let mut geometry = Vec::with_capacity(series.len());
    let mut trend_lines = Vec::new();

    for (index, s) in series.iter().enumerate() {
        let color = s.color.unwrap_or_else(|| colors::pick(&config.colors, index));
        let base_size = s.point_size.unwrap_or(DEFAULT_POINT_SIZE);

        let markers = s
            .data
            .iter()
            .map(|p| {
                let position = place(p.x, p.y);
                let size = p.size.unwrap_or(base_size);
                ScatterMarker {
                    position,
                    x: p.x,
                    y: p.y,
                    size,
                    color: p.color.unwrap_or(color),
                    path: marker_path(s.shape, position.x, position.y, size),
                    label: p.label.clone(),
                }
            })
            .collect();

        if config.show_regression_line {
            let pairs: Vec<(f64, f64)> = s.data.iter().map(|p| (p.x, p.y)).collect();
            if let Some(regression) = fit_regression(&pairs) {
                let start = place(x_domain.min, regression.at(x_domain.min));
                let end = place(x_domain.max, regression.at(x_domain.max));
                trend_lines.push(TrendLine {
                    series_id: s.id.clone(),
                    color,
                    regression,
                    start,
                    end,
                    path: LinePath.generate(&[start, end]),
                });
            }
        }

        geometry.push(ScatterSeriesGeometry {
            id: s.id.clone(),
            name: s.name.clone(),
            color,
            shape: s.shape,
            markers,
        });
    }

    tracing::trace!(
        kind = "scatter",
        series = geometry.len(),
        trend_lines = trend_lines.len(),
        "computed chart geometry"
    );

    ScatterGeometry {
        view_box: dims.viewbox(),
        frame,
        x_ticks: config.x_axis.value_ticks(&x_domain),
        y_ticks: config.y_axis.value_ticks(&y_domain),
        x_domain,
        y_domain,
        series: geometry,
        trend_lines,
    }
}
