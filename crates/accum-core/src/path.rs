// File: crates/accum-core/src/path.rs
// Summary: Scaled points to SVG path data (area, line, moving averages) and bar rectangles.

use std::fmt::Write as _;

use crate::geometry::{Point, RectF};
use crate::moving_average::MovingAverage;
use crate::scale::{BarScale, ChartScales, IndexScale};
use crate::series::SeriesPoint;

/// Bar width as a fraction of point spacing.
pub const BAR_WIDTH_RATIO: f32 = 0.6;
/// Widest bar, in pixels.
pub const MAX_BAR_WIDTH: f32 = 28.0;

/// Incremental SVG path data (`M`, `L`, `Z` commands, two-decimal coordinates).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    d: String,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.command('M', p)
    }
    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.command('L', p)
    }
    pub fn close(&mut self) -> &mut Self {
        self.d.push_str(" Z");
        self
    }
    pub fn is_empty(&self) -> bool {
        self.d.is_empty()
    }
    pub fn as_str(&self) -> &str {
        &self.d
    }
    pub fn into_string(self) -> String {
        self.d
    }

    fn command(&mut self, cmd: char, p: Point) -> &mut Self {
        if !self.d.is_empty() {
            self.d.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(self.d, "{cmd}{:.2},{:.2}", p.x, p.y);
        self
    }

    /// Polyline through `pts`, starting with a move.
    fn polyline<I: IntoIterator<Item = Point>>(pts: I) -> Self {
        let mut path = Self::new();
        for (i, p) in pts.into_iter().enumerate() {
            if i == 0 { path.move_to(p); } else { path.line_to(p); }
        }
        path
    }
}

/// One bar in the addition strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub index: usize,
    pub rect: RectF,
    pub positive: bool,
}

/// Map every point to pixel space on the primary axis.
pub fn scaled_points(points: &[SeriesPoint], scales: &ChartScales) -> Vec<Point> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| Point::new(scales.x.to_px(i as f64), scales.y.to_px(p.accumulated)))
        .collect()
}

/// Closed polygon: the polyline, then down to `baseline_y` at the last and first x.
pub fn area_path(pts: &[Point], baseline_y: f32) -> Option<String> {
    let (first, last) = (pts.first()?, pts.last()?);
    let mut path = PathData::polyline(pts.iter().copied());
    path.line_to(Point::new(last.x, baseline_y))
        .line_to(Point::new(first.x, baseline_y))
        .close();
    Some(path.into_string())
}

/// Open polyline through every point in index order.
pub fn line_path(pts: &[Point]) -> Option<String> {
    if pts.is_empty() {
        return None;
    }
    Some(PathData::polyline(pts.iter().copied()).into_string())
}

/// Open polyline through the defined entries of `ma`; needs at least two of them.
pub fn moving_average_path(ma: &MovingAverage, scales: &ChartScales) -> Option<String> {
    if ma.defined_len() < 2 {
        return None;
    }
    let pts = ma.defined().map(|(i, v)| Point::new(scales.x.to_px(i as f64), scales.y.to_px(v)));
    Some(PathData::polyline(pts).into_string())
}

/// Bars from the zero baseline to each scaled addition.
pub fn bar_rects(points: &[SeriesPoint], x: &IndexScale, bars: &BarScale) -> Vec<BarRect> {
    let width = (x.spacing * BAR_WIDTH_RATIO).clamp(1.0, MAX_BAR_WIDTH);
    let half = width * 0.5;
    let base = bars.baseline_px();
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let cx = x.to_px(i as f64);
            let y = bars.to_px(p.added);
            BarRect {
                index: i,
                rect: RectF::from_ltrb(cx - half, y.min(base), cx + half, y.max(base)),
                positive: p.added >= 0.0,
            }
        })
        .collect()
}
