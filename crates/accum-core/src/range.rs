// File: crates/accum-core/src/range.rs
// Summary: Value ranges derived from a series (accumulated extents with padding, max absolute addition).

use crate::series::SeriesPoint;
use crate::types::VALUE_PADDING_RATIO;

/// Ranges that parameterize the scales for one render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRanges {
    pub min_accumulated: f64,
    pub max_accumulated: f64,
    /// Padding applied below `min_accumulated` and above `max_accumulated`.
    pub pad: f64,
    /// Largest `|added|` over the series; zero when every addition is zero.
    pub max_added: f64,
}

impl ValueRanges {
    /// Scan the series once. Returns `None` for an empty series.
    pub fn from_points(points: &[SeriesPoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut min_acc = f64::INFINITY;
        let mut max_acc = f64::NEG_INFINITY;
        let mut max_added = 0.0f64;
        for p in points {
            min_acc = min_acc.min(p.accumulated);
            max_acc = max_acc.max(p.accumulated);
            max_added = max_added.max(p.added.abs());
        }
        if !min_acc.is_finite() || !max_acc.is_finite() {
            return None;
        }
        let span = max_acc - min_acc;
        let pad = if span.abs() < 1e-12 {
            (max_acc.abs() * VALUE_PADDING_RATIO).max(1.0)
        } else {
            span * VALUE_PADDING_RATIO
        };
        Some(Self { min_accumulated: min_acc, max_accumulated: max_acc, pad, max_added })
    }

    /// Lower end of the primary axis (the area baseline).
    pub fn padded_min(&self) -> f64 { self.min_accumulated - self.pad }

    /// Upper end of the primary axis.
    pub fn padded_max(&self) -> f64 { self.max_accumulated + self.pad }

    /// Whether the padded range has a finite width. Extremes near `f64::MAX`
    /// overflow it even though every value is finite.
    pub fn is_scalable(&self) -> bool {
        (self.padded_max() - self.padded_min()).is_finite()
    }

    /// Whether `v` falls inside the padded primary range.
    pub fn contains(&self, v: f64) -> bool {
        v >= self.padded_min() && v <= self.padded_max()
    }
}
