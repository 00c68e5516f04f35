//! Domain resolution: x-label union and y-range from one or more series.
//!
//! Range precedence, applied in order:
//! 1. data extent (raw values, or per-label stack tops when stacked)
//! 2. zero-basing: the range is widened to include 0
//! 3. baseline: the range is widened to include the area base value
//! 4. an explicit domain replaces the computed range entirely
//! 5. degenerate widening when `min == max`

use chartgeo_core::{Domain, Label, Range, Series};
use serde::{Deserialize, Serialize};

/// Options controlling how a y-domain is resolved
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainOptions {
    /// Include zero in the range
    pub zero_based: bool,
    /// Use per-label sums across series instead of raw values
    pub stacked: bool,
    /// Fixed range, overriding the data extent
    pub explicit: Option<Range>,
    /// Area base value; the range always covers it. Stacks start here.
    pub baseline: Option<f64>,
}

impl DomainOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zero_based(mut self, zero_based: bool) -> Self {
        self.zero_based = zero_based;
        self
    }

    pub fn stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    pub fn explicit(mut self, min: f64, max: f64) -> Self {
        self.explicit = Some(Range::new(min, max));
        self
    }

    pub fn baseline(mut self, baseline: f64) -> Self {
        self.baseline = Some(baseline);
        self
    }
}

/// Resolve the label order and y-range for a set of series.
///
/// Never fails: empty input yields the `[0, 1]` domain.
pub fn resolve_domain(series: &[Series], options: &DomainOptions) -> Domain {
    let labels = collect_labels(series);

    let extent = if options.stacked {
        // the normalizer stacks from the baseline, so the tops sit above it
        let origin = stack_origin(options.baseline);
        extent(stack_totals(series, &labels).into_iter().map(|t| origin + t))
    } else {
        extent(series.iter().flat_map(|s| s.data.iter().map(|p| p.value)))
    };

    let range = resolve_range(extent, options);

    tracing::debug!(
        min = range.min,
        max = range.max,
        labels = labels.len(),
        stacked = options.stacked,
        "resolved domain"
    );

    Domain::new(range.min, range.max).with_labels(labels)
}

/// Resolve a purely numeric domain (scatter x-axis, histogram values)
pub fn resolve_numeric_domain(
    values: impl IntoIterator<Item = f64>,
    options: &DomainOptions,
) -> Domain {
    let range = resolve_range(extent(values), options);
    Domain::new(range.min, range.max)
}

/// De-duplicated union of all x-labels, sorted numerically when every label
/// is a number and by display string otherwise.
pub fn collect_labels(series: &[Series]) -> Vec<Label> {
    sort_labels(
        series
            .iter()
            .flat_map(|s| s.data.iter().map(|p| p.label.clone()))
            .collect(),
    )
}

/// Sort and de-duplicate labels with the axis ordering used by
/// [`collect_labels`]
pub fn sort_labels(mut labels: Vec<Label>) -> Vec<Label> {
    if labels.iter().all(Label::is_numeric) {
        labels.sort_by(|a, b| a.axis_cmp(b));
    } else {
        labels.sort_by_cached_key(|l| (l.to_string(), !l.is_numeric()));
    }
    labels.dedup();

    labels
}

/// Per-label sum of every series' value (missing points count as zero)
pub fn stack_totals(series: &[Series], labels: &[Label]) -> Vec<f64> {
    labels
        .iter()
        .map(|label| series.iter().map(|s| s.value_at(label)).sum())
        .collect()
}

/// Value every stack starts from: the baseline when it is finite, else 0
pub fn stack_origin(baseline: Option<f64>) -> f64 {
    baseline.filter(|b| b.is_finite()).unwrap_or(0.0)
}

/// Apply zero-basing, baseline, explicit override and degenerate widening
/// to a raw `(min, max)` extent.
pub fn resolve_range(extent: Option<(f64, f64)>, options: &DomainOptions) -> Range {
    if let Some(explicit) = options.explicit {
        let (min, max) = sorted_pair(explicit.min, explicit.max);
        return widen_degenerate(min, max, options.zero_based);
    }

    let Some((mut min, mut max)) = extent else {
        return Range::UNIT;
    };

    if options.zero_based {
        min = min.min(0.0);
        max = max.max(0.0);
    }

    if let Some(baseline) = options.baseline.filter(|b| b.is_finite()) {
        min = min.min(baseline);
        max = max.max(baseline);
    }

    widen_degenerate(min, max, options.zero_based)
}

/// Guarantee `min < max`.
///
/// All-zero data becomes `[0, 1]`; otherwise the ends move outward by 10% of
/// their magnitude (the lower end stays put when zero-based).
pub fn widen_degenerate(mut min: f64, mut max: f64, zero_based: bool) -> Range {
    if min == max {
        if min == 0.0 {
            max = 1.0;
        } else {
            if !zero_based {
                min -= min.abs() * 0.1;
            }
            max += max.abs() * 0.1;
        }
        tracing::debug!(min, max, "widened degenerate domain");
    }
    Range::new(min, max)
}

/// Finite min/max of a value stream; non-finite values are skipped
fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

fn sorted_pair(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn months() -> Series {
        Series::from_pairs("rev", "Revenue", [("Jan", 100.0), ("Feb", 150.0), ("Mar", 200.0)])
    }

    #[test]
    fn test_zero_based_domain() {
        let domain = resolve_domain(&[months()], &DomainOptions::new().zero_based(true));
        assert_eq!(domain.min, 0.0);
        assert_eq!(domain.max, 200.0);
        // lexicographic label order
        assert_eq!(
            domain.labels,
            vec![Label::from("Feb"), Label::from("Jan"), Label::from("Mar")]
        );
    }

    #[test]
    fn test_data_extent_without_zero_basing() {
        let domain = resolve_domain(&[months()], &DomainOptions::new());
        assert_eq!(domain.min, 100.0);
        assert_eq!(domain.max, 200.0);
    }

    #[test]
    fn test_numeric_labels_sort_numerically() {
        let series = Series::from_pairs("a", "A", [(10, 1.0), (2, 2.0), (1, 3.0), (2, 4.0)]);
        let labels = collect_labels(&[series]);
        assert_eq!(labels, vec![Label::from(1), Label::from(2), Label::from(10)]);
    }

    #[test]
    fn test_mixed_labels_sort_by_text() {
        let series = Series::from_pairs("a", "A", [(Label::from(10), 1.0), (Label::from("2"), 2.0)]);
        let labels = collect_labels(&[series]);
        assert_eq!(labels, vec![Label::from(10), Label::from("2")]);
    }

    #[test]
    fn test_stacked_domain_uses_sums() {
        let a = Series::from_pairs("a", "A", [("A", 10.0), ("B", 20.0)]);
        let b = Series::from_pairs("b", "B", [("A", 5.0), ("B", 15.0)]);
        let domain = resolve_domain(&[a, b], &DomainOptions::new().stacked(true).zero_based(true));
        assert_eq!(domain.min, 0.0);
        assert_eq!(domain.max, 35.0);
    }

    #[test]
    fn test_stacked_without_zero_basing_uses_min_sum() {
        let a = Series::from_pairs("a", "A", [("A", 10.0), ("B", 20.0)]);
        let b = Series::from_pairs("b", "B", [("A", 5.0), ("B", 15.0)]);
        let domain = resolve_domain(&[a, b], &DomainOptions::new().stacked(true));
        assert_eq!(domain.min, 15.0);
        assert_eq!(domain.max, 35.0);
    }

    #[test]
    fn test_stacked_domain_starts_tops_at_baseline() {
        let a = Series::from_pairs("a", "A", [("A", 10.0), ("B", 20.0)]);
        let b = Series::from_pairs("b", "B", [("A", 5.0), ("B", 15.0)]);
        let options = DomainOptions::new().stacked(true).zero_based(true).baseline(5.0);
        let domain = resolve_domain(&[a, b], &options);
        assert_eq!((domain.min, domain.max), (0.0, 40.0));
    }

    #[test]
    fn test_empty_input_is_unit_domain() {
        let domain = resolve_domain(&[], &DomainOptions::new().stacked(true));
        assert_eq!((domain.min, domain.max), (0.0, 1.0));
        assert!(domain.labels.is_empty());

        let empty_series = Series::new("e", "Empty");
        let domain = resolve_domain(&[empty_series], &DomainOptions::new());
        assert_eq!((domain.min, domain.max), (0.0, 1.0));
    }

    #[test]
    fn test_all_zero_values() {
        let series = Series::from_pairs("z", "Z", [("a", 0.0), ("b", 0.0)]);
        let domain = resolve_domain(&[series], &DomainOptions::new());
        assert_eq!((domain.min, domain.max), (0.0, 1.0));
    }

    #[test]
    fn test_constant_values_widen() {
        let series = Series::from_pairs("c", "C", [("a", 50.0), ("b", 50.0)]);
        let domain = resolve_domain(&[series], &DomainOptions::new());
        assert!((domain.min - 45.0).abs() < 1e-9);
        assert!((domain.max - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_constant_values_stay_ordered() {
        let series = Series::from_pairs("c", "C", [("a", -5.0)]);
        let domain = resolve_domain(&[series], &DomainOptions::new());
        assert!(domain.min < domain.max);
        assert!((domain.min + 5.5).abs() < 1e-9);
        assert!((domain.max + 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_based_keeps_negative_values() {
        let series = Series::from_pairs("n", "N", [("a", -20.0), ("b", 40.0)]);
        let domain = resolve_domain(&[series], &DomainOptions::new().zero_based(true));
        assert_eq!((domain.min, domain.max), (-20.0, 40.0));
    }

    #[test]
    fn test_baseline_extends_min() {
        let series = Series::from_pairs("a", "A", [("a", 10.0), ("b", 20.0)]);
        let domain = resolve_domain(&[series], &DomainOptions::new().baseline(-5.0));
        assert_eq!((domain.min, domain.max), (-5.0, 20.0));
    }

    #[test]
    fn test_explicit_domain_wins() {
        let series = Series::from_pairs("a", "A", [("a", 10.0), ("b", 20.0)]);
        let options = DomainOptions::new().zero_based(true).baseline(-50.0).explicit(100.0, 0.0);
        let domain = resolve_domain(&[series], &options);
        assert_eq!((domain.min, domain.max), (0.0, 100.0));
        assert_eq!(domain.labels.len(), 2);
    }

    #[test]
    fn test_non_finite_values_skipped() {
        let series = Series::from_pairs("a", "A", [("a", f64::NAN), ("b", 4.0), ("c", 8.0)]);
        let domain = resolve_domain(&[series], &DomainOptions::new());
        assert_eq!((domain.min, domain.max), (4.0, 8.0));
    }

    #[test]
    fn test_numeric_domain() {
        let domain = resolve_numeric_domain([3.0, 9.0, 6.0], &DomainOptions::new());
        assert_eq!((domain.min, domain.max), (3.0, 9.0));
        assert!(domain.labels.is_empty());
    }
}
