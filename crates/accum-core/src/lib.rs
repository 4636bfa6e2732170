// File: crates/accum-core/src/lib.rs
// Summary: Core library entry point; exports the accumulation chart API (data model, scales, paths, interaction, SVG).

pub mod chart;
pub mod config;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod interaction;
pub mod layers;
pub mod mount;
pub mod moving_average;
pub mod path;
pub mod range;
pub mod scale;
pub mod series;
pub mod svg;
pub mod theme;
pub mod types;

pub use chart::{AccumulationChart, ChartFrame};
pub use config::ChartConfig;
pub use error::{ChartError, ChartResult};
pub use format::ValueFormatter;
pub use geometry::{Point, RectF};
pub use interaction::{HoverDetail, HoverState};
pub use layers::{Layer, VisibleLayers};
pub use mount::MountGate;
pub use moving_average::{LineStyle, MovingAverage};
pub use range::ValueRanges;
pub use scale::{ChartLayout, ChartScales};
pub use series::SeriesPoint;
pub use theme::{Palette, Rgba, ThemeMode};
pub use types::Insets;
