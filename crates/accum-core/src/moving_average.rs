// File: crates/accum-core/src/moving_average.rs
// Summary: Trailing simple moving averages over accumulated values, one sequence per configured period.

use crate::series::{self, SeriesPoint};

/// Stroke pattern for an overlay line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// A moving-average sequence aligned with the input series.
#[derive(Clone, Debug, PartialEq)]
pub struct MovingAverage {
    pub period: usize,
    /// `None` before index `period - 1` (not enough history), the trailing mean after.
    pub values: Vec<Option<f64>>,
}

impl MovingAverage {
    pub fn compute(points: &[SeriesPoint], period: usize) -> Self {
        Self { period, values: sma(&series::accumulated_values(points), period) }
    }

    /// Value at `index`, flattening "undefined" and out-of-range to `None`.
    pub fn at(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    /// Number of defined entries.
    pub fn defined_len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Iterate `(index, value)` over defined entries only.
    pub fn defined(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values.iter().enumerate().filter_map(|(i, v)| v.map(|v| (i, v)))
    }
}

/// Simple moving average with a running sum. Output has the same length as `data`;
/// a zero period or one longer than the data yields all `None`.
pub fn sma(data: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; data.len()];
    if period == 0 || data.len() < period {
        return out;
    }
    let p = period as f64;
    let mut sum = 0.0f64;
    for i in 0..data.len() {
        sum += data[i];
        if i + 1 > period {
            sum -= data[i - period];
        }
        if i + 1 >= period {
            out[i] = Some(sum / p);
        }
    }
    out
}

/// Compute one sequence per period, preserving the configured order.
pub fn compute_all(points: &[SeriesPoint], periods: &[usize]) -> Vec<MovingAverage> {
    periods.iter().map(|&p| MovingAverage::compute(points, p)).collect()
}

/// The shortest configured period draws solid, every longer one dashed.
pub fn style_for(periods: &[usize], slot: usize) -> LineStyle {
    let shortest = periods.iter().copied().min();
    match (periods.get(slot), shortest) {
        (Some(&p), Some(s)) if p == s => LineStyle::Solid,
        _ => LineStyle::Dashed,
    }
}
