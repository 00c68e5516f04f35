//! Axis configuration shared by the cartesian chart kinds

use chartgeo_core::{
    CompactFormatter, DateFormatter, DecimalFormatter, Domain, Label, LabelFormatter,
    OrdinalTick, PercentFormatter, PlainFormatter, Tick,
};
use chartgeo_engine::{DEFAULT_LABEL_BUDGET, DEFAULT_TICK_COUNT, generate_ticks, ordinal_ticks};
use serde::{Deserialize, Serialize};

/// Serializable choice of tick label formatter
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LabelFormat {
    #[default]
    Plain,
    Decimal {
        decimals: usize,
    },
    Compact,
    Percent {
        decimals: usize,
    },
    /// Values are epoch milliseconds
    Date {
        pattern: String,
    },
}

impl LabelFormatter for LabelFormat {
    fn format(&self, value: f64) -> String {
        match self {
            Self::Plain => PlainFormatter.format(value),
            Self::Decimal { decimals } => DecimalFormatter { decimals: *decimals }.format(value),
            Self::Compact => CompactFormatter.format(value),
            Self::Percent { decimals } => PercentFormatter { decimals: *decimals }.format(value),
            Self::Date { pattern } => DateFormatter::new(pattern.as_str()).format(value),
        }
    }
}

/// Axis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub title: Option<String>,
    /// Appended to every tick label after a space
    pub unit: Option<String>,
    pub tick_count: usize,
    /// Maximum visible category labels
    pub label_budget: usize,
    pub format: LabelFormat,
}

impl AxisConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_format(mut self, format: LabelFormat) -> Self {
        self.format = format;
        self
    }

    fn decorate(&self, label: String) -> String {
        match &self.unit {
            Some(unit) => format!("{} {}", label, unit),
            None => label,
        }
    }

    /// Ticks for a numeric axis over `domain`
    pub fn value_ticks(&self, domain: &Domain) -> Vec<Tick> {
        let formatter = |v: f64| self.decorate(self.format.format(v));
        generate_ticks(domain, self.tick_count, &formatter)
    }

    /// Ticks for a category axis; numeric labels go through the formatter
    pub fn category_ticks(&self, labels: &[Label]) -> Vec<OrdinalTick> {
        let formatter = |label: &Label| {
            let text = match label {
                Label::Number(n) => self.format.format(*n),
                Label::Text(s) => s.clone(),
            };
            self.decorate(text)
        };
        ordinal_ticks(labels, self.label_budget, &formatter)
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            title: None,
            unit: None,
            tick_count: DEFAULT_TICK_COUNT,
            label_budget: DEFAULT_LABEL_BUDGET,
            format: LabelFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_ticks_with_unit() {
        let axis = AxisConfig::default().with_unit("kg");
        let ticks = axis.value_ticks(&Domain::new(0.0, 100.0));
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[1].label, "25 kg");
    }

    #[test]
    fn test_format_from_json() {
        let axis: AxisConfig =
            serde_json::from_str(r#"{"format": {"kind": "compact"}, "tick_count": 3}"#).unwrap();
        let ticks = axis.value_ticks(&Domain::new(0.0, 2_000_000.0));
        assert_eq!(ticks.len(), 3);
        assert_eq!(ticks[1].label, "1.00M");
    }

    #[test]
    fn test_category_ticks_format_numbers() {
        let axis = AxisConfig::default().with_format(LabelFormat::Decimal { decimals: 1 });
        let ticks = axis.category_ticks(&[Label::from(1), Label::from("total")]);
        assert_eq!(ticks[0].label, "1.0");
        assert_eq!(ticks[1].label, "total");
    }
}
