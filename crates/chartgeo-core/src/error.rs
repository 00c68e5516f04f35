//! Error types for the few fallible edges (color parsing, chart config).

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid color '{0}': expected #rgb or #rrggbb")]
    InvalidColor(String),

    #[error("color scale needs at least 2 stops, got {0}")]
    TooFewStops(usize),

    #[error("invalid chart config: {0}")]
    Config(#[from] serde_json::Error),
}
