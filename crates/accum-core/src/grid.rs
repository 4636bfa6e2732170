// File: crates/accum-core/src/grid.rs
// Summary: Grid/tick layout helpers (value ticks over the padded range, strided x-label indices).

/// Horizontal grid lines drawn over the primary chart.
pub const VALUE_TICKS: usize = 5;
/// Most x-axis labels shown at once.
pub const MAX_X_LABELS: usize = 6;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Indices that get an x-axis label: all of them for short series, otherwise
/// `max_labels` evenly strided ones, first and last included.
pub fn label_indices(n: usize, max_labels: usize) -> Vec<usize> {
    if n == 0 || max_labels == 0 {
        return Vec::new();
    }
    if n <= max_labels || max_labels == 1 {
        return if max_labels == 1 { vec![0] } else { (0..n).collect() };
    }
    let last = (n - 1) as f64;
    let mut out: Vec<usize> = (0..max_labels)
        .map(|k| (k as f64 * last / (max_labels - 1) as f64).round() as usize)
        .collect();
    out.dedup();
    out
}
