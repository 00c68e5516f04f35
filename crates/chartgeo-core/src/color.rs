//! Color value types: RGB triples and color scale configuration

use crate::{ChartError, ChartResult, colors};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 8-bit RGB color, serialized as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgba()` string with the given alpha
    pub fn with_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {:.2})", self.r, self.g, self.b, alpha)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ChartError;

    fn from_str(s: &str) -> ChartResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        let invalid = || ChartError::InvalidColor(s.to_string());

        if !hex.is_ascii() {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());

        match hex.len() {
            3 => {
                let expand = |i: usize| channel(&hex[i..i + 1].repeat(2));
                Ok(Self::new(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = ChartError;

    fn try_from(s: String) -> ChartResult<Self> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_string()
    }
}

// ============================================================================
// COLOR SCALE
// ============================================================================

/// Color mapping strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScaleKind {
    #[default]
    Sequential,
    Diverging,
    Categorical,
}

/// Color scale: stops plus optional value-range overrides.
///
/// Unset `min`/`max` resolve to `0.0`/`1.0`; unset `center` resolves to the
/// midpoint. Use [`ColorScale::fit`] to derive them from data instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    #[serde(rename = "type", default)]
    pub kind: ColorScaleKind,
    #[serde(alias = "colors")]
    pub stops: Vec<Rgb>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<f64>,
}

impl ColorScale {
    pub fn new(kind: ColorScaleKind, stops: Vec<Rgb>) -> Self {
        Self {
            kind,
            stops,
            min: None,
            max: None,
            center: None,
        }
    }

    pub fn sequential(stops: Vec<Rgb>) -> Self {
        Self::new(ColorScaleKind::Sequential, stops)
    }

    pub fn diverging(stops: Vec<Rgb>) -> Self {
        Self::new(ColorScaleKind::Diverging, stops)
    }

    pub fn categorical(stops: Vec<Rgb>) -> Self {
        Self::new(ColorScaleKind::Categorical, stops)
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn with_center(mut self, center: f64) -> Self {
        self.center = Some(center);
        self
    }

    /// Fill unset `min`/`max` from the data extent. Explicit overrides win.
    pub fn fit(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in values {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if lo.is_finite() && hi.is_finite() {
            self.min = self.min.or(Some(lo));
            self.max = self.max.or(Some(hi));
        }
        self
    }

    pub fn resolved_min(&self) -> f64 {
        self.min.unwrap_or(0.0)
    }

    pub fn resolved_max(&self) -> f64 {
        self.max.unwrap_or(1.0)
    }

    pub fn resolved_center(&self) -> f64 {
        self.center
            .unwrap_or_else(|| (self.resolved_min() + self.resolved_max()) / 2.0)
    }

    /// First stop, or black for an empty scale
    pub fn first_stop(&self) -> Rgb {
        self.stops.first().copied().unwrap_or(Rgb::BLACK)
    }

    /// Scales need at least two stops to interpolate
    pub fn validate(&self) -> ChartResult<()> {
        if self.stops.len() < 2 {
            return Err(ChartError::TooFewStops(self.stops.len()));
        }
        Ok(())
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::sequential(vec![colors::HEAT_LOW, colors::HEAT_HIGH])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!("#3B82F6".parse::<Rgb>().unwrap(), Rgb::new(0x3B, 0x82, 0xF6));
        assert_eq!("fff".parse::<Rgb>().unwrap(), Rgb::new(255, 255, 255));
        assert_eq!("#0a0".parse::<Rgb>().unwrap(), Rgb::new(0, 0xAA, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#gggggg".parse::<Rgb>().is_err());
        assert!("".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_display_lowercase_hex() {
        assert_eq!(Rgb::new(0x08, 0x30, 0x6B).to_string(), "#08306b");
    }

    #[test]
    fn test_scale_json() {
        let scale: ColorScale =
            serde_json::from_str(r##"{"type":"diverging","colors":["#ff0000","#ffffff","#0000ff"],"center":0}"##)
                .unwrap();
        assert_eq!(scale.kind, ColorScaleKind::Diverging);
        assert_eq!(scale.stops.len(), 3);
        assert_eq!(scale.center, Some(0.0));
    }

    #[test]
    fn test_fit_keeps_overrides() {
        let scale = ColorScale::default().with_range(0.0, 10.0).fit([3.0, 42.0]);
        assert_eq!(scale.resolved_min(), 0.0);
        assert_eq!(scale.resolved_max(), 10.0);

        let fitted = ColorScale::default().fit([3.0, 42.0]);
        assert_eq!(fitted.resolved_min(), 3.0);
        assert_eq!(fitted.resolved_max(), 42.0);
        assert_eq!(fitted.resolved_center(), 22.5);
    }

    #[test]
    fn test_validate_too_few_stops() {
        let scale = ColorScale::sequential(vec![Rgb::BLACK]);
        assert!(matches!(scale.validate(), Err(ChartError::TooFewStops(1))));
        assert!(ColorScale::default().validate().is_ok());
    }
}
