//! Area charts: filled bands under one or more series, optionally stacked

use crate::{AxisConfig, ChartDimensions, ChartMargin, DEFAULT_ASPECT_RATIO};
use chartgeo_core::{Domain, OrdinalTick, Point, Rgb, Series, SeriesId, Tick};
use chartgeo_engine::{
    DomainOptions, NormalizeOptions, PlotFrame, build_area_path, build_line_path,
    normalize_series, normalize_y, resolve_domain,
};
use serde::{Deserialize, Serialize};

/// Area chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaConfig {
    pub aspect_ratio: f64,
    pub padding: ChartMargin,
    pub start_y_at_zero: bool,
    pub stacked: bool,
    /// Lower edge of the fill; defaults to 0 when zero-based
    pub area_base_value: Option<f64>,
    pub filled: bool,
    pub fill_opacity: f64,
    pub show_points: bool,
    pub show_average: bool,
    pub colors: Vec<Rgb>,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            padding: ChartMargin::standard(),
            start_y_at_zero: true,
            stacked: false,
            area_base_value: None,
            filled: true,
            fill_opacity: 0.2,
            show_points: true,
            show_average: false,
            colors: Vec::new(),
            x_axis: AxisConfig::default(),
            y_axis: AxisConfig::default(),
        }
    }
}

impl AreaConfig {
    pub fn stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    pub fn start_y_at_zero(mut self, zero: bool) -> Self {
        self.start_y_at_zero = zero;
        self
    }

    pub fn area_base_value(mut self, base: f64) -> Self {
        self.area_base_value = Some(base);
        self
    }

    pub fn show_average(mut self, show: bool) -> Self {
        self.show_average = show;
        self
    }

    pub fn dimensions(&self) -> ChartDimensions {
        ChartDimensions::from_aspect_ratio(self.aspect_ratio).with_margin(self.padding)
    }

    /// Explicit base value, or 0 for zero-based charts
    pub fn base_value(&self) -> Option<f64> {
        self.area_base_value
            .or(self.start_y_at_zero.then_some(0.0))
    }
}

/// Geometry of one area series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaSeriesGeometry {
    pub id: SeriesId,
    pub name: String,
    pub color: Rgb,
    /// `rgba()` fill derived from `color`
    pub fill: String,
    /// Empty when the chart is not filled
    pub area_path: String,
    pub line_path: String,
    /// Marker positions for points the series actually has
    pub points: Vec<Point>,
    /// Mean of the series' own values and its pixel y
    pub average: Option<(f64, f64)>,
}

/// Complete area chart geometry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaGeometry {
    pub view_box: String,
    pub frame: PlotFrame,
    pub domain: Domain,
    pub series: Vec<AreaSeriesGeometry>,
    pub x_ticks: Vec<OrdinalTick>,
    pub y_ticks: Vec<Tick>,
}

/// Compute area chart geometry
pub fn compute_area(series: &[Series], config: &AreaConfig) -> AreaGeometry {
    let dims = config.dimensions();
    let frame = dims.plot_frame();
    // stacks always grow from their base (0 unless set), which stays on the chart
    let base_value = if config.stacked {
        Some(config.base_value().unwrap_or(0.0))
    } else {
        config.base_value()
    };

    let mut domain_options = DomainOptions::new()
        .zero_based(config.start_y_at_zero)
        .stacked(config.stacked);
    domain_options.baseline = base_value;
    let domain = resolve_domain(series, &domain_options);

    // without a base value the fill runs down to the bottom of the plot
    let normalize_options = NormalizeOptions::new()
        .stacked(config.stacked)
        .baseline(base_value.unwrap_or(domain.min))
        .palette(config.colors.clone());
    let normalized = normalize_series(series, &domain, &normalize_options);

    let geometry: Vec<AreaSeriesGeometry> = normalized
        .iter()
        .zip(series)
        .map(|(n, raw)| AreaSeriesGeometry {
            id: n.id.clone(),
            name: n.name.clone(),
            color: n.color,
            fill: n.color.with_alpha(config.fill_opacity),
            area_path: if config.filled {
                build_area_path(&n.points, &frame)
            } else {
                String::new()
            },
            line_path: build_line_path(&n.points, &frame),
            points: if config.show_points {
                n.points
                    .iter()
                    .filter(|p| p.present)
                    .map(|p| frame.project(p.x, p.y))
                    .collect()
            } else {
                Vec::new()
            },
            average: config
                .show_average
                .then(|| series_mean(raw))
                .flatten()
                .map(|mean| (mean, frame.project_y(normalize_y(&domain, mean)))),
        })
        .collect();

    tracing::trace!(
        kind = "area",
        series = geometry.len(),
        labels = domain.labels.len(),
        "computed chart geometry"
    );

    AreaGeometry {
        view_box: dims.viewbox(),
        frame,
        x_ticks: config.x_axis.category_ticks(&domain.labels),
        y_ticks: config.y_axis.value_ticks(&domain),
        domain,
        series: geometry,
    }
}

fn series_mean(series: &Series) -> Option<f64> {
    if series.is_empty() {
        return None;
    }
    Some(series.data.iter().map(|p| p.value).sum::<f64>() / series.len() as f64)
}
