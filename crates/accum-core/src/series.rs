// File: crates/accum-core/src/series.rs
// Summary: Series model for accumulated values, per-bucket additions, and optional per-point targets.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One time bucket of the accumulation series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Bucket label, typically an ISO date (`2024-03-01`) or month (`2024-03`).
    pub date: String,
    /// Running total at the end of the bucket.
    pub accumulated: f64,
    /// Amount added during the bucket; may be negative.
    pub added: f64,
    /// Per-point target overriding the chart-wide target.
    #[serde(default)]
    pub target: Option<f64>,
}

impl SeriesPoint {
    pub fn new(date: impl Into<String>, accumulated: f64, added: f64) -> Self {
        Self { date: date.into(), accumulated, added, target: None }
    }

    pub fn with_target(mut self, target: f64) -> Self {
        self.target = Some(target);
        self
    }

    /// Effective target for this point: its own, else `fallback`. Only positive targets count.
    pub fn effective_target(&self, fallback: Option<f64>) -> Option<f64> {
        self.target.or(fallback).filter(|t| t.is_finite() && *t > 0.0)
    }

    /// Accumulated value as a percentage of the effective target.
    pub fn percent_of_target(&self, fallback: Option<f64>) -> Option<f64> {
        self.effective_target(fallback).map(|t| self.accumulated / t * 100.0)
    }
}

/// Accumulated values in series order.
pub fn accumulated_values(points: &[SeriesPoint]) -> Vec<f64> {
    points.iter().map(|p| p.accumulated).collect()
}

/// Whether `accumulated` never decreases. Accumulation semantics suggest it,
/// but callers are free to pass anything; this only reports.
pub fn is_non_decreasing(points: &[SeriesPoint]) -> bool {
    points.windows(2).all(|w| w[1].accumulated >= w[0].accumulated)
}

/// Reject NaN/infinite values, naming the first offending point.
pub fn check_finite(points: &[SeriesPoint]) -> ChartResult<()> {
    for (index, p) in points.iter().enumerate() {
        if !p.accumulated.is_finite() {
            return Err(ChartError::NonFiniteValue { index, field: "accumulated" });
        }
        if !p.added.is_finite() {
            return Err(ChartError::NonFiniteValue { index, field: "added" });
        }
        if let Some(t) = p.target {
            if !t.is_finite() {
                return Err(ChartError::NonFiniteValue { index, field: "target" });
            }
        }
    }
    Ok(())
}
