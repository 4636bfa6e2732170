// File: crates/accum-core/src/error.rs
// Summary: Error type for configuration and series validation.

use thiserror::Error;

/// Errors raised when a chart is configured or fed with unusable input.
///
/// Degenerate but finite data (empty series, flat values, zero additions) is
/// never an error; it renders as empty or collapsed geometry instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("chart size {width}x{height} leaves no plotting area inside the padding")]
    NoPlotArea { width: u32, height: u32 },

    #[error("moving-average period at position {slot} must be at least 1")]
    ZeroPeriod { slot: usize },

    #[error("target must be a positive finite number, got {0}")]
    InvalidTarget(f64),

    #[error("series point {index} has a non-finite {field} value")]
    NonFiniteValue { index: usize, field: &'static str },

    #[error("accumulated values span [{min}, {max}], too wide to scale")]
    RangeOverflow { min: f64, max: f64 },
}

pub type ChartResult<T> = Result<T, ChartError>;
