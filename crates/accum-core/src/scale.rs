// File: crates/accum-core/src/scale.rs
// Summary: Index (X), accumulated value (Y) and bar (secondary Y) scale transforms plus chart layout.

use crate::geometry::{clamp, RectF};
use crate::range::ValueRanges;
use crate::types::{Insets, BAR_REGION_GAP, BAR_REGION_RATIO};

/// Logical X coordinate (series index).
pub type Logical = f64;
/// Value Y coordinate (accumulated amount or addition).
pub type Value = f64;

/// Smallest denominator used when an addition range collapses to zero.
pub const MIN_BAR_DENOMINATOR: f64 = 1e-9;

/// Pixel regions of one chart: the primary value chart and the optional bar strip below it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// Full chart box (0,0)..(width,height).
    pub frame: RectF,
    /// Box inside the padding.
    pub inner: RectF,
    pub primary: RectF,
    pub bars: Option<RectF>,
}

impl ChartLayout {
    pub fn new(width: u32, height: u32, insets: &Insets, show_bars: bool) -> Self {
        let frame = RectF::from_ltrb(0.0, 0.0, width as f32, height as f32);
        let inner = RectF::inset_box(width, height, insets);
        if !show_bars {
            return Self { frame, inner, primary: inner, bars: None };
        }
        let bar_h = (inner.height() * BAR_REGION_RATIO).max(0.0);
        let bars = RectF::from_ltrb(inner.left, inner.bottom - bar_h, inner.right, inner.bottom);
        let primary = RectF::from_ltrb(inner.left, inner.top, inner.right, bars.top - BAR_REGION_GAP);
        Self { frame, inner, primary, bars: Some(bars) }
    }

    /// Region where pointer movement resolves to a hover index.
    pub fn plot_region(&self) -> RectF {
        match self.bars {
            Some(b) => self.primary.union(&b),
            None => self.primary,
        }
    }

    /// Whether the layout has room to draw anything.
    pub fn has_plot_area(&self) -> bool {
        self.primary.width() >= 1.0 && self.primary.height() >= 1.0
    }
}

/// Horizontal scale with uniform spacing between consecutive points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexScale {
    pub left_px: f32,
    pub spacing: f32,
}

impl IndexScale {
    /// Spread `n` points over `width` pixels. With fewer than two points the
    /// spacing is the full width.
    pub fn new(left_px: f32, width: f32, n: usize) -> Self {
        let spacing = if n > 1 { width / (n - 1) as f32 } else { width };
        Self { left_px, spacing: spacing.max(f32::EPSILON) }
    }
    #[inline]
    pub fn to_px(&self, x: Logical) -> f32 {
        self.left_px + (x as f32) * self.spacing
    }
    #[inline]
    pub fn from_px(&self, px: f32) -> Logical {
        ((px - self.left_px) / self.spacing) as f64
    }
    /// Index nearest to `px`, clamped to `[0, n-1]`. `None` only for an empty
    /// series or non-finite input; callers check the plotting region first.
    pub fn nearest_index(&self, px: f32, n: usize) -> Option<usize> {
        if n == 0 || !px.is_finite() {
            return None;
        }
        let last = (n - 1) as f64;
        Some(self.from_px(px).round().clamp(0.0, last) as usize)
    }
}

/// Vertical value scale mapping a data range to [top, bottom] pixels (inverted).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    /// Primary axis for `ranges`: padded extents onto the primary region.
    pub fn for_ranges(region: &RectF, ranges: &ValueRanges) -> Self {
        Self::new_linear(region.top, region.bottom, ranges.padded_min(), ranges.padded_max())
    }
    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
    #[inline]
    pub fn from_px(&self, py: f32) -> Value {
        let span = (self.vmax - self.vmin).max(1e-12);
        let h = (self.bottom_px - self.top_px).max(f32::EPSILON);
        self.vmin + ((self.bottom_px - py) / h) as f64 * span
    }
}

/// Secondary scale for additions: zero sits mid-strip, `±max_added` reaches the strip edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub max_added: Value,
}

impl BarScale {
    pub fn new(region: &RectF, max_added: Value) -> Self {
        Self { top_px: region.top, bottom_px: region.bottom, max_added: max_added.abs() }
    }
    #[inline]
    pub fn baseline_px(&self) -> f32 {
        (self.top_px + self.bottom_px) * 0.5
    }
    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        let denom = self.max_added.max(MIN_BAR_DENOMINATOR);
        let half = (self.bottom_px - self.top_px) * 0.5;
        let y = self.baseline_px() - (v / denom) as f32 * half;
        clamp(y, self.top_px, self.bottom_px)
    }
}

/// All maps for one render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScales {
    pub x: IndexScale,
    pub y: ValueScale,
    pub bars: Option<BarScale>,
}

impl ChartScales {
    pub fn new(layout: &ChartLayout, ranges: &ValueRanges, n: usize) -> Self {
        Self {
            x: IndexScale::new(layout.primary.left, layout.primary.width(), n),
            y: ValueScale::for_ranges(&layout.primary, ranges),
            bars: layout.bars.map(|r| BarScale::new(&r, ranges.max_added)),
        }
    }
}
