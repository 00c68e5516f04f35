//! Histograms: equal-width bins drawn as touching bars

use crate::{AxisConfig, ChartDimensions, ChartMargin, DEFAULT_ASPECT_RATIO, colors};
use chartgeo_core::{Domain, Label, Rect, Rgb, Series, Tick};
use chartgeo_engine::{
    Bin, DEFAULT_BIN_COUNT, DomainOptions, PlotFrame, bin_values, bins_to_series, normalize_y,
    resolve_domain,
};
use serde::{Deserialize, Serialize};

/// Histogram configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramConfig {
    pub aspect_ratio: f64,
    pub padding: ChartMargin,
    pub bin_count: usize,
    /// Horizontal gap between neighbouring bars, in pixels
    pub bar_gap: f64,
    pub color: Option<Rgb>,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            padding: ChartMargin::standard(),
            bin_count: DEFAULT_BIN_COUNT,
            bar_gap: 1.0,
            color: None,
            x_axis: AxisConfig::default(),
            y_axis: AxisConfig::default(),
        }
    }
}

impl HistogramConfig {
    pub fn bin_count(mut self, count: usize) -> Self {
        self.bin_count = count;
        self
    }

    pub fn dimensions(&self) -> ChartDimensions {
        ChartDimensions::from_aspect_ratio(self.aspect_ratio).with_margin(self.padding)
    }
}

/// One bin's bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBar {
    pub bin: Bin,
    pub label: String,
    pub rect: Rect,
}

/// Complete histogram geometry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramGeometry {
    pub view_box: String,
    pub frame: PlotFrame,
    pub color: Rgb,
    /// Count axis domain; labels are the bin ranges in bin order
    pub domain: Domain,
    pub bars: Vec<HistogramBar>,
    /// Bins as a `label -> count` series
    pub series: Series,
    /// Value axis along the bins
    pub x_ticks: Vec<Tick>,
    /// Count axis
    pub y_ticks: Vec<Tick>,
}

/// Bin `values` and lay the bins out left to right
pub fn compute_histogram(values: &[f64], config: &HistogramConfig) -> HistogramGeometry {
    let dims = config.dimensions();
    let frame = dims.plot_frame();
    let color = config.color.unwrap_or(colors::SERIES[0]);

    let bins = bin_values(values, config.bin_count);
    let series = bins_to_series(&bins, "histogram", "Frequency").with_color(color);

    let domain = resolve_domain(
        std::slice::from_ref(&series),
        &DomainOptions::new().zero_based(true),
    )
    .with_labels(bins.iter().map(|b| Label::from(b.label())).collect());

    let slot = if bins.is_empty() {
        0.0
    } else {
        frame.width / bins.len() as f64
    };
    let gap = config.bar_gap.clamp(0.0, slot);
    let baseline = frame.project_y(normalize_y(&domain, 0.0));

    let bars: Vec<HistogramBar> = bins
        .iter()
        .enumerate()
        .map(|(i, bin)| {
            let top = frame.project_y(normalize_y(&domain, bin.count as f64));
            HistogramBar {
                bin: *bin,
                label: bin.label(),
                rect: Rect::new(
                    frame.x + i as f64 * slot + gap / 2.0,
                    top,
                    slot - gap,
                    baseline - top,
                ),
            }
        })
        .collect();

    let value_domain = match (bins.first(), bins.last()) {
        (Some(first), Some(last)) => Domain::new(first.start, last.end),
        _ => Domain::unit(),
    };

    tracing::trace!(
        kind = "histogram",
        values = values.len(),
        bins = bars.len(),
        "computed chart geometry"
    );

    HistogramGeometry {
        view_box: dims.viewbox(),
        frame,
        color,
        x_ticks: config.x_axis.value_ticks(&value_domain),
        y_ticks: config.y_axis.value_ticks(&domain),
        domain,
        bars,
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn latencies() -> Vec<f64> {
        vec![12.0, 15.0, 18.0, 22.0, 25.0, 25.0, 31.0, 48.0, 52.0]
    }

    #[test]
    fn test_bars_keep_bin_order() {
        let geometry = compute_histogram(&latencies(), &HistogramConfig::default().bin_count(4));
        assert_eq!(geometry.bars.len(), 4);
        assert_eq!(geometry.series.len(), 4);
        for pair in geometry.bars.windows(2) {
            assert!(pair[0].rect.x < pair[1].rect.x);
            assert!(pair[0].bin.end <= pair[1].bin.start + EPS);
        }
        assert_eq!(geometry.domain.labels[0], Label::from(geometry.bars[0].label.clone()));
    }

    #[test]
    fn test_tallest_bar_fills_frame() {
        let geometry = compute_histogram(&latencies(), &HistogramConfig::default().bin_count(4));
        let counts: Vec<usize> = geometry.bars.iter().map(|b| b.bin.count).collect();
        assert_eq!(counts, vec![3, 4, 0, 2]);
        assert_eq!(geometry.domain.max, 4.0);

        let tallest = &geometry.bars[1];
        assert!((tallest.rect.y - geometry.frame.y).abs() < EPS);
        assert!((tallest.rect.height - geometry.frame.height).abs() < EPS);
    }

    #[test]
    fn test_bars_share_slot_width() {
        let config = HistogramConfig::default().bin_count(4);
        let geometry = compute_histogram(&latencies(), &config);
        let slot = geometry.frame.width / 4.0;
        assert!((geometry.bars[0].rect.width - (slot - 1.0)).abs() < EPS);
        assert!((geometry.bars[0].rect.x - (geometry.frame.x + 0.5)).abs() < EPS);
    }

    #[test]
    fn test_empty_bin_has_no_height() {
        let geometry = compute_histogram(&latencies(), &HistogramConfig::default().bin_count(4));
        assert_eq!(geometry.bars[2].rect.height, 0.0);
    }

    #[test]
    fn test_value_ticks_span_bins() {
        let geometry = compute_histogram(&latencies(), &HistogramConfig::default());
        assert_eq!(geometry.x_ticks.first().unwrap().value, 12.0);
        assert_eq!(geometry.x_ticks.last().unwrap().value, 52.0);
    }

    #[test]
    fn test_empty_values() {
        let geometry = compute_histogram(&[], &HistogramConfig::default());
        assert!(geometry.bars.is_empty());
        assert!(geometry.series.is_empty());
        assert_eq!((geometry.domain.min, geometry.domain.max), (0.0, 1.0));
    }
}
