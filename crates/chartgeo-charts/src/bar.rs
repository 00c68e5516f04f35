//! Bar charts: grouped or stacked bands, vertical or horizontal

use crate::{AxisConfig, ChartDimensions, ChartMargin, DEFAULT_ASPECT_RATIO};
use chartgeo_core::{Domain, Label, OrdinalTick, Rect, Rgb, Series, SeriesId, Tick};
use chartgeo_engine::{DomainOptions, NormalizeOptions, PlotFrame, normalize_series, resolve_domain};
use serde::{Deserialize, Serialize};

/// Share of each category band occupied by bars
const BAND_FILL: f64 = 0.8;

/// Bar chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    pub aspect_ratio: f64,
    pub padding: ChartMargin,
    pub start_y_at_zero: bool,
    pub horizontal: bool,
    pub stacked: bool,
    pub colors: Vec<Rgb>,
    /// Category axis
    pub x_axis: AxisConfig,
    /// Value axis
    pub y_axis: AxisConfig,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            padding: ChartMargin::standard(),
            start_y_at_zero: true,
            horizontal: false,
            stacked: false,
            colors: Vec::new(),
            x_axis: AxisConfig::default(),
            y_axis: AxisConfig::default(),
        }
    }
}

impl BarConfig {
    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    pub fn start_y_at_zero(mut self, zero: bool) -> Self {
        self.start_y_at_zero = zero;
        self
    }

    pub fn dimensions(&self) -> ChartDimensions {
        ChartDimensions::from_aspect_ratio(self.aspect_ratio).with_margin(self.padding)
    }
}

/// One bar rectangle in pixel space
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarGeometry {
    pub series_id: SeriesId,
    pub label: Label,
    pub value: f64,
    pub color: Rgb,
    pub rect: Rect,
}

/// Complete bar chart geometry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChartGeometry {
    pub view_box: String,
    pub frame: PlotFrame,
    pub domain: Domain,
    pub horizontal: bool,
    /// Bar thickness along the category axis, in pixels
    pub bar_width: f64,
    pub bars: Vec<BarGeometry>,
    pub category_ticks: Vec<OrdinalTick>,
    pub value_ticks: Vec<Tick>,
}

/// Normalized band layout: bar thickness and per-series offset as fractions of
/// the category axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandLayout {
    pub categories: usize,
    pub series: usize,
    pub stacked: bool,
}

impl BandLayout {
    /// `0.8 / totalBars`, where stacked charts have one bar per category
    pub fn bar_width(&self) -> f64 {
        let total = if self.stacked {
            self.categories
        } else {
            self.categories * self.series
        };
        if total == 0 {
            return 0.0;
        }
        BAND_FILL / total as f64
    }

    /// Center of a category band
    pub fn category_center(&self, category: usize) -> f64 {
        (category as f64 + 0.5) / self.categories.max(1) as f64
    }

    /// Offset of a series' bar from its category center
    pub fn group_offset(&self, series_index: usize) -> f64 {
        if self.stacked {
            return 0.0;
        }
        let width = self.bar_width();
        let spacing = width / 4.0;
        (series_index as f64 - self.series as f64 / 2.0 + 0.5) * (width + spacing)
    }

    /// Leading edge of a bar along the category axis
    pub fn bar_start(&self, category: usize, series_index: usize) -> f64 {
        self.category_center(category) + self.group_offset(series_index) - self.bar_width() / 2.0
    }
}

/// Compute bar chart geometry.
///
/// Stacked bars with a zero value are omitted.
pub fn compute_bar(series: &[Series], config: &BarConfig) -> BarChartGeometry {
    let dims = config.dimensions();
    let frame = dims.plot_frame();

    let domain = resolve_domain(
        series,
        &DomainOptions::new()
            .zero_based(config.start_y_at_zero)
            .stacked(config.stacked),
    );

    // grouped bars grow from zero, or from the nearest domain edge
    let mut normalize_options = NormalizeOptions::new()
        .stacked(config.stacked)
        .palette(config.colors.clone());
    if !config.stacked {
        normalize_options = normalize_options.baseline(0.0_f64.clamp(domain.min, domain.max));
    }
    let normalized = normalize_series(series, &domain, &normalize_options);

    let layout = BandLayout {
        categories: domain.labels.len(),
        series: series.len(),
        stacked: config.stacked,
    };
    let bar_width = layout.bar_width();
    let (stacked, horizontal) = (config.stacked, config.horizontal);

    let bars: Vec<BarGeometry> = normalized
        .iter()
        .enumerate()
        .flat_map(|(series_index, n)| {
            n.points
                .iter()
                .enumerate()
                .filter(move |(_, p)| !(stacked && p.value == 0.0))
                .map(move |(category, p)| {
                    // value fractions measured up from the bottom
                    let a = (1.0 - p.base_y).clamp(0.0, 1.0);
                    let b = (1.0 - p.y).clamp(0.0, 1.0);
                    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                    let start = layout.bar_start(category, series_index);

                    BarGeometry {
                        series_id: n.id.clone(),
                        label: p.label.clone(),
                        value: p.value,
                        color: n.color,
                        rect: bar_rect(&frame, horizontal, start, bar_width, lo, hi),
                    }
                })
        })
        .collect();

    tracing::trace!(
        kind = "bar",
        bars = bars.len(),
        stacked = config.stacked,
        horizontal = config.horizontal,
        "computed chart geometry"
    );

    let category_extent = if config.horizontal { frame.height } else { frame.width };

    BarChartGeometry {
        view_box: dims.viewbox(),
        frame,
        horizontal: config.horizontal,
        bar_width: bar_width * category_extent,
        bars,
        category_ticks: config.x_axis.category_ticks(&domain.labels),
        value_ticks: config.y_axis.value_ticks(&domain),
        domain,
    }
}

fn bar_rect(frame: &PlotFrame, horizontal: bool, start: f64, width: f64, lo: f64, hi: f64) -> Rect {
    if horizontal {
        Rect::new(
            frame.x + lo * frame.width,
            frame.y + start * frame.height,
            (hi - lo) * frame.width,
            width * frame.height,
        )
    } else {
        Rect::new(
            frame.x + start * frame.width,
            frame.y + (1.0 - hi) * frame.height,
            width * frame.width,
            (hi - lo) * frame.height,
        )
    }
}
