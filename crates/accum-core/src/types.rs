// File: crates/accum-core/src/types.rs
// Summary: Shared types and constants (chart box sizes, paddings, layout ratios).

use serde::{Deserialize, Serialize};

/// Default chart width in pixels.
pub const WIDTH: u32 = 960;
/// Default chart height in pixels.
pub const HEIGHT: u32 = 420;

/// Fraction of the inner height given to the bar sub-region when bars are enabled.
pub const BAR_REGION_RATIO: f32 = 0.22;
/// Vertical gap between the primary chart and the bar sub-region, in pixels.
pub const BAR_REGION_GAP: f32 = 16.0;
/// Fraction of the accumulated range added above and below the data.
pub const VALUE_PADDING_RATIO: f64 = 0.12;

/// Screen margins around the plotting area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(64, 24, 24, 40)
    }
}
