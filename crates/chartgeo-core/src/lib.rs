//! # chartgeo-core
//!
//! Core value types for the chartgeo geometry engine.
//! Implements Strategy pattern for axis label formatting.

pub mod color;
pub mod error;
pub mod geometry;
pub mod series;

pub use color::*;
pub use error::*;
pub use geometry::*;
pub use series::*;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// STRATEGY PATTERN: Label Formatters
// ============================================================================

/// Strategy trait for turning axis values into tick labels
pub trait LabelFormatter: Send + Sync {
    fn format(&self, value: f64) -> String;
}

impl<F> LabelFormatter for F
where
    F: Fn(f64) -> String + Send + Sync,
{
    fn format(&self, value: f64) -> String {
        self(value)
    }
}

/// Plain formatter: shortest round-trip representation, no trailing `.0`
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl LabelFormatter for PlainFormatter {
    fn format(&self, value: f64) -> String {
        format_number(value)
    }
}

/// Fixed decimal places
#[derive(Debug, Clone)]
pub struct DecimalFormatter {
    pub decimals: usize,
}

impl Default for DecimalFormatter {
    fn default() -> Self {
        Self { decimals: 2 }
    }
}

impl LabelFormatter for DecimalFormatter {
    fn format(&self, value: f64) -> String {
        format!("{:.prec$}", value, prec = self.decimals)
    }
}

/// Compact formatter for large numbers (K, M, B suffixes)
#[derive(Debug, Clone, Default)]
pub struct CompactFormatter;

impl LabelFormatter for CompactFormatter {
    fn format(&self, num: f64) -> String {
        let abs = num.abs();
        let sign = if num < 0.0 { "-" } else { "" };

        if abs >= 1_000_000_000.0 {
            format!("{}{:.2}B", sign, abs / 1_000_000_000.0)
        } else if abs >= 1_000_000.0 {
            format!("{}{:.2}M", sign, abs / 1_000_000.0)
        } else if abs >= 1_000.0 {
            format!("{}{:.2}K", sign, abs / 1_000.0)
        } else {
            format!("{}{:.2}", sign, abs)
        }
    }
}

/// Percentage formatter (`42.5` -> `"42.5%"`)
#[derive(Debug, Clone)]
pub struct PercentFormatter {
    pub decimals: usize,
}

impl Default for PercentFormatter {
    fn default() -> Self {
        Self { decimals: 1 }
    }
}

impl LabelFormatter for PercentFormatter {
    fn format(&self, value: f64) -> String {
        format!("{:.prec$}%", value, prec = self.decimals)
    }
}

/// Date formatter for axes whose values are Unix timestamps in milliseconds
#[derive(Debug, Clone)]
pub struct DateFormatter {
    /// `chrono` strftime pattern
    pub pattern: String,
}

impl DateFormatter {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new("%Y-%m-%d")
    }
}

impl LabelFormatter for DateFormatter {
    fn format(&self, value: f64) -> String {
        use chrono::{TimeZone, Utc};

        match Utc.timestamp_millis_opt(value as i64).single() {
            Some(dt) => dt.format(&self.pattern).to_string(),
            None => {
                tracing::warn!("Timestamp out of range for date label: {}", value);
                format_number(value)
            }
        }
    }
}

/// Format a number the way a template literal would (`100`, `2.5`, `0`)
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // collapses -0
        return "0".to_string();
    }
    format!("{}", value)
}

// ============================================================================
// CORE VALUE TYPES
// ============================================================================

/// Series identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(pub String);

impl SeriesId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Random UUID v4 identifier
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SeriesId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SeriesId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Category or numeric x-label of a data point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Number(f64),
    Text(String),
}

impl Label {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Ordering used for label axes: numeric when both are numbers,
    /// otherwise by display string.
    pub fn axis_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            _ => self
                .to_string()
                .cmp(&other.to_string())
                .then_with(|| self.rank().cmp(&other.rank())),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Number(_) => 0,
            Self::Text(_) => 1,
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Label {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for Label {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i32> for Label {
    fn from(n: i32) -> Self {
        Self::Number(n as f64)
    }
}

/// Stroke pattern for lines and radar outlines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    /// SVG `stroke-dasharray` value
    pub fn dash_array(&self) -> &'static str {
        match self {
            Self::Solid => "none",
            Self::Dashed => "6,4",
            Self::Dotted => "2,2",
        }
    }
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    use crate::Rgb;

    /// Default series palette (line, area, bar, scatter, radar)
    pub const SERIES: [Rgb; 10] = [
        Rgb::new(0x3B, 0x82, 0xF6),
        Rgb::new(0x10, 0xB9, 0x81),
        Rgb::new(0xF5, 0x9E, 0x0B),
        Rgb::new(0xEF, 0x44, 0x44),
        Rgb::new(0x8B, 0x5C, 0xF6),
        Rgb::new(0xEC, 0x48, 0x99),
        Rgb::new(0x06, 0xB6, 0xD4),
        Rgb::new(0x14, 0xB8, 0xA6),
        Rgb::new(0xF9, 0x73, 0x16),
        Rgb::new(0x63, 0x66, 0xF1),
    ];

    /// Extended palette for pie segments
    pub const SEGMENTS: [Rgb; 15] = [
        Rgb::new(0x3B, 0x82, 0xF6),
        Rgb::new(0x10, 0xB9, 0x81),
        Rgb::new(0xF5, 0x9E, 0x0B),
        Rgb::new(0xEF, 0x44, 0x44),
        Rgb::new(0x8B, 0x5C, 0xF6),
        Rgb::new(0xEC, 0x48, 0x99),
        Rgb::new(0x06, 0xB6, 0xD4),
        Rgb::new(0x14, 0xB8, 0xA6),
        Rgb::new(0xF9, 0x73, 0x16),
        Rgb::new(0x63, 0x66, 0xF1),
        Rgb::new(0xA8, 0x55, 0xF7),
        Rgb::new(0x0E, 0xA5, 0xE9),
        Rgb::new(0x84, 0xCC, 0x16),
        Rgb::new(0x22, 0xD3, 0xEE),
        Rgb::new(0xF4, 0x72, 0xB6),
    ];

    /// Heatmap default sequential stops
    pub const HEAT_LOW: Rgb = Rgb::new(0xF7, 0xFB, 0xFF);
    pub const HEAT_HIGH: Rgb = Rgb::new(0x08, 0x30, 0x6B);

    /// Cyclic palette lookup; an empty palette falls back to the default one
    pub fn pick(palette: &[Rgb], index: usize) -> Rgb {
        if palette.is_empty() {
            return SERIES[index % SERIES.len()];
        }
        palette[index % palette.len()]
    }
}
