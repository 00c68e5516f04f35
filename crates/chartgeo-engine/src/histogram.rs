//! Equal-width histogram binning

use chartgeo_core::{DataPoint, Series, SeriesId, format_number};
use serde::{Deserialize, Serialize};

/// Default number of bins
pub const DEFAULT_BIN_COUNT: usize = 10;

/// Half-open `[start, end)` bucket; the last bin of a histogram is closed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl Bin {
    /// `"start-end"` axis label
    pub fn label(&self) -> String {
        format!("{}-{}", format_number(self.start), format_number(self.end))
    }
}

/// Bucket finite values into `bin_count` equal-width bins over their extent.
///
/// Empty input (or `bin_count == 0`) yields no bins. Constant input yields a
/// single bin widened by `±0.5` around the value.
pub fn bin_values(values: &[f64], bin_count: usize) -> Vec<Bin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bin_count == 0 {
        return Vec::new();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return vec![Bin {
            start: min - 0.5,
            end: max + 0.5,
            count: finite.len(),
        }];
    }

    let width = (max - min) / bin_count as f64;
    let mut counts = vec![0usize; bin_count];
    for v in &finite {
        let index = ((v - min) / width).floor() as usize;
        counts[index.min(bin_count - 1)] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bin {
            start: min + width * i as f64,
            end: if i == bin_count - 1 {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count,
        })
        .collect()
}

/// One data point per bin (label = bin range, value = count)
pub fn bins_to_series(bins: &[Bin], id: impl Into<SeriesId>, name: impl Into<String>) -> Series {
    let mut series = Series::new(id, name);
    for bin in bins {
        series.push(DataPoint::new(bin.label(), bin.count as f64));
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_cover_every_value() {
        let values = [1.0, 2.0, 2.5, 3.0, 4.0, 5.0, 9.0, 10.0];
        let bins = bin_values(&values, 3);

        assert_eq!(bins.len(), 3);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
        assert_eq!(bins[0].start, 1.0);
        assert_eq!(bins[2].end, 10.0);
        assert_eq!(bins[0].count, 4);
        assert_eq!(bins[1].count, 2);
        // max lands in the closed last bin
        assert_eq!(bins[2].count, 2);
    }

    #[test]
    fn test_constant_input_single_bin() {
        let bins = bin_values(&[7.0, 7.0, 7.0], 5);
        assert_eq!(bins, vec![Bin { start: 6.5, end: 7.5, count: 3 }]);
    }

    #[test]
    fn test_empty_input() {
        assert!(bin_values(&[], 5).is_empty());
        assert!(bin_values(&[1.0, 2.0], 0).is_empty());
        assert!(bin_values(&[f64::NAN], 5).is_empty());
    }

    #[test]
    fn test_bins_to_series() {
        let bins = bin_values(&[0.0, 5.0, 10.0], 2);
        let series = bins_to_series(&bins, "hist", "Histogram");
        assert_eq!(series.len(), 2);
        assert_eq!(series.data[0].label.to_string(), "0-5");
        assert_eq!(series.data[1].value, 2.0);
    }
}
