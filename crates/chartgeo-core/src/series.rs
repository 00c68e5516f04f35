//! Input data: labeled points grouped into series

use crate::{Label, LineStyle, Rgb, SeriesId};
use serde::{Deserialize, Serialize};

/// Free-form metadata carried through to consumers untouched
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Single labeled value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(alias = "x")]
    pub label: Label,
    #[serde(alias = "y")]
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl DataPoint {
    pub fn new(label: impl Into<Label>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            metadata: None,
        }
    }
}

/// Named sequence of data points sharing one color/style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: SeriesId,
    pub name: String,
    #[serde(default)]
    pub data: Vec<DataPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
}

impl Series {
    pub fn new(id: impl Into<SeriesId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            data: Vec::new(),
            color: None,
            line_style: None,
        }
    }

    /// Build a series from `(label, value)` pairs
    pub fn from_pairs<L: Into<Label>>(
        id: impl Into<SeriesId>,
        name: impl Into<String>,
        pairs: impl IntoIterator<Item = (L, f64)>,
    ) -> Self {
        let mut series = Self::new(id, name);
        series.data = pairs
            .into_iter()
            .map(|(label, value)| DataPoint::new(label, value))
            .collect();
        series
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_line_style(mut self, style: LineStyle) -> Self {
        self.line_style = Some(style);
        self
    }

    pub fn push(&mut self, point: DataPoint) {
        self.data.push(point);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// First point carrying `label`
    pub fn find(&self, label: &Label) -> Option<&DataPoint> {
        self.data.iter().find(|p| &p.label == label)
    }

    /// Value at `label`; absent labels read as zero
    pub fn value_at(&self, label: &Label) -> f64 {
        self.find(label).map(|p| p.value).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_json_accepts_xy_aliases() {
        let series: Series = serde_json::from_str(
            r##"{"id":"rev","name":"Revenue","color":"#10b981",
                "data":[{"x":"Jan","y":100},{"label":"Feb","value":150,"metadata":{"note":"peak"}}]}"##,
        )
        .unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.data[0].label, Label::from("Jan"));
        assert_eq!(series.data[1].value, 150.0);
        assert!(series.data[1].metadata.is_some());
        assert_eq!(series.color, Some(Rgb::new(0x10, 0xb9, 0x81)));
    }

    #[test]
    fn test_value_at_zero_fills() {
        let series = Series::from_pairs("a", "A", [("Jan", 3.0)]);
        assert_eq!(series.value_at(&Label::from("Jan")), 3.0);
        assert_eq!(series.value_at(&Label::from("Feb")), 0.0);
    }
}
