//! Axis tick generation for value and category axes

use chartgeo_core::{Domain, Label, LabelFormatter, OrdinalTick, Tick};

/// Default number of ticks on a value axis
pub const DEFAULT_TICK_COUNT: usize = 5;

/// Default maximum number of visible category labels
pub const DEFAULT_LABEL_BUDGET: usize = 10;

/// Evenly spaced ticks from `domain.min` to `domain.max` (both inclusive).
///
/// `step = (max - min) / (count - 1)`; the last tick is pinned to `max` so
/// float accumulation never drifts past the domain.
pub fn generate_ticks<F>(domain: &Domain, count: usize, formatter: &F) -> Vec<Tick>
where
    F: LabelFormatter + ?Sized,
{
    match count {
        0 => Vec::new(),
        1 => vec![make_tick(domain, domain.min, formatter)],
        _ => {
            let step = domain.span() / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    let value = if i == count - 1 {
                        domain.max
                    } else {
                        domain.min + step * i as f64
                    };
                    make_tick(domain, value, formatter)
                })
                .collect()
        }
    }
}

fn make_tick<F>(domain: &Domain, value: f64, formatter: &F) -> Tick
where
    F: LabelFormatter + ?Sized,
{
    Tick {
        value,
        label: formatter.format(value),
        position: value_position(domain, value),
    }
}

/// Fraction of the way from `min` to `max` (0 for a zero-width domain)
pub fn value_position(domain: &Domain, value: f64) -> f64 {
    let span = domain.span();
    if span == 0.0 {
        return 0.0;
    }
    (value - domain.min) / span
}

/// Indices of the category labels to show under a visibility budget.
///
/// Everything is shown when it fits; otherwise the first and last label are
/// always kept (even when the budget is below 2) and the rest are sampled
/// every `ceil(n / (budget - 2))`.
pub fn visible_label_indices(label_count: usize, budget: usize) -> Vec<usize> {
    if label_count <= budget.max(2) {
        return (0..label_count).collect();
    }

    let last = label_count - 1;
    let step = label_count.div_ceil(budget.saturating_sub(2).max(1));

    let mut indices = vec![0];
    indices.extend((step..last).step_by(step));
    indices.push(last);
    indices
}

/// Ticks for a category axis, subsampled to `budget` labels
pub fn ordinal_ticks<F>(labels: &[Label], budget: usize, formatter: &F) -> Vec<OrdinalTick>
where
    F: Fn(&Label) -> String + ?Sized,
{
    let denominator = labels.len().saturating_sub(1).max(1) as f64;

    visible_label_indices(labels.len(), budget)
        .into_iter()
        .map(|index| OrdinalTick {
            index,
            label: formatter(&labels[index]),
            position: index as f64 / denominator,
        })
        .collect()
}
