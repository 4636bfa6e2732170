// File: crates/accum-demo/src/series_csv.rs
// Summary: CSV loader for accumulation series with header aliases and derived additions.

use accum_core::SeriesPoint;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::warn;

const DATE_HEADERS: &[&str] = &["date", "time", "day", "period"];
const ACCUMULATED_HEADERS: &[&str] = &["accumulated", "total", "cumulative"];
const ADDED_HEADERS: &[&str] = &["added", "delta", "change"];
const TARGET_HEADERS: &[&str] = &["target", "goal"];

/// Load `date,accumulated,added[,target]` rows from `path`.
pub fn load_series_csv(path: &Path) -> Result<Vec<SeriesPoint>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_series(file)
}

/// Parse series rows. Headers match case-insensitively against known aliases.
/// A missing `added` value is derived from consecutive accumulated values; rows
/// without a numeric accumulated value are skipped.
pub fn read_series<R: Read>(reader: R) -> Result<Vec<SeriesPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));

    let i_date = idx(DATE_HEADERS);
    let i_acc = idx(ACCUMULATED_HEADERS).with_context(|| format!("no accumulated column in {:?}", headers))?;
    let i_added = idx(ADDED_HEADERS);
    let i_target = idx(TARGET_HEADERS);

    let mut out: Vec<SeriesPoint> = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).and_then(|s| s.parse::<f64>().ok());

        let Some(acc) = parse(Some(i_acc)) else {
            warn!(row, "skipping row without a numeric accumulated value");
            continue;
        };
        let added = parse(i_added).unwrap_or_else(|| acc - out.last().map_or(0.0, |p| p.accumulated));
        let date = i_date
            .and_then(|ix| rec.get(ix))
            .map(str::to_string)
            .unwrap_or_else(|| row.to_string());

        let mut point = SeriesPoint::new(date, acc, added);
        if let Some(t) = parse(i_target) {
            point = point.with_target(t);
        }
        out.push(point);
    }
    Ok(out)
}
