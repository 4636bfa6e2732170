// File: crates/accum-core/src/theme.rs
// Summary: Light/Dark palettes for accumulation chart rendering colors.

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color, backend-agnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
    /// `#rrggbb`; alpha goes into a separate opacity attribute.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
    pub fn alpha_f(&self) -> f32 {
        self.a as f32 / 255.0
    }
}

/// Two-valued theme selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Light => Palette::light(),
            ThemeMode::Dark => Palette::dark(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_label: Rgba,
    pub crosshair: Rgba,
    pub line_stroke: Rgba,
    pub area_fill: Rgba,
    pub bar_positive: Rgba,
    pub bar_negative: Rgba,
    pub target: Rgba,
    pub tooltip_background: Rgba,
    pub tooltip_border: Rgba,
    pub tooltip_text: Rgba,
    pub moving_averages: [Rgba; 3],
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::from_argb(255, 15, 17, 23),
            grid: Rgba::from_argb(255, 38, 42, 52),
            axis_label: Rgba::from_argb(255, 148, 156, 172),
            crosshair: Rgba::from_argb(180, 226, 232, 240),
            line_stroke: Rgba::from_argb(255, 247, 147, 26), // bitcoin orange
            area_fill: Rgba::from_argb(64, 247, 147, 26),
            bar_positive: Rgba::from_argb(255, 52, 199, 123),
            bar_negative: Rgba::from_argb(255, 239, 83, 80),
            target: Rgba::from_argb(255, 96, 165, 250),
            tooltip_background: Rgba::from_argb(240, 24, 27, 36),
            tooltip_border: Rgba::from_argb(255, 55, 60, 74),
            tooltip_text: Rgba::from_argb(255, 236, 239, 244),
            moving_averages: [
                Rgba::from_argb(255, 167, 139, 250),
                Rgba::from_argb(255, 45, 212, 191),
                Rgba::from_argb(255, 250, 204, 21),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::from_argb(255, 255, 255, 255),
            grid: Rgba::from_argb(255, 229, 231, 235),
            axis_label: Rgba::from_argb(255, 100, 108, 122),
            crosshair: Rgba::from_argb(160, 55, 65, 81),
            line_stroke: Rgba::from_argb(255, 234, 128, 12),
            area_fill: Rgba::from_argb(48, 234, 128, 12),
            bar_positive: Rgba::from_argb(255, 22, 163, 74),
            bar_negative: Rgba::from_argb(255, 220, 38, 38),
            target: Rgba::from_argb(255, 37, 99, 235),
            tooltip_background: Rgba::from_argb(245, 255, 255, 255),
            tooltip_border: Rgba::from_argb(255, 209, 213, 219),
            tooltip_text: Rgba::from_argb(255, 17, 24, 39),
            moving_averages: [
                Rgba::from_argb(255, 124, 58, 237),
                Rgba::from_argb(255, 13, 148, 136),
                Rgba::from_argb(255, 202, 138, 4),
            ],
        }
    }

    /// Color for the moving average in `slot`, cycling through the table.
    pub fn moving_average(&self, slot: usize) -> Rgba {
        self.moving_averages[slot % self.moving_averages.len()]
    }
}
