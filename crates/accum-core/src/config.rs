// File: crates/accum-core/src/config.rs
// Summary: Chart input contract (dimensions, toggles, periods, target, unit, formatter, theme) with validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::format::{FormatFn, ValueFormatter};
use crate::scale::ChartLayout;
use crate::theme::ThemeMode;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Default moving-average windows.
pub const DEFAULT_PERIODS: [usize; 2] = [7, 30];

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    /// Reserve the addition strip below the primary chart.
    pub show_bars: bool,
    /// Compute and draw moving-average overlays.
    pub show_moving_averages: bool,
    pub moving_average_periods: Vec<usize>,
    /// Chart-wide target; per-point targets take precedence in the detail panel.
    pub target: Option<f64>,
    pub unit: String,
    pub theme: ThemeMode,
    #[serde(skip)]
    pub formatter: Option<FormatFn>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            show_bars: true,
            show_moving_averages: true,
            moving_average_periods: DEFAULT_PERIODS.to_vec(),
            target: None,
            unit: "BTC".to_string(),
            theme: ThemeMode::default(),
            formatter: None,
        }
    }
}

impl fmt::Debug for ChartConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartConfig")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("insets", &self.insets)
            .field("show_bars", &self.show_bars)
            .field("show_moving_averages", &self.show_moving_averages)
            .field("moving_average_periods", &self.moving_average_periods)
            .field("target", &self.target)
            .field("unit", &self.unit)
            .field("theme", &self.theme)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

impl ChartConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    pub fn with_bars(mut self, show: bool) -> Self {
        self.show_bars = show;
        self
    }

    pub fn with_moving_averages(mut self, show: bool) -> Self {
        self.show_moving_averages = show;
        self
    }

    pub fn with_periods(mut self, periods: impl Into<Vec<usize>>) -> Self {
        self.moving_average_periods = periods.into();
        self
    }

    pub fn with_target(mut self, target: f64) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_formatter<F>(mut self, f: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(std::sync::Arc::new(f));
        self
    }

    /// Periods that actually produce overlays.
    pub fn active_periods(&self) -> &[usize] {
        if self.show_moving_averages { self.moving_average_periods.as_slice() } else { &[] }
    }

    pub fn layout(&self) -> ChartLayout {
        ChartLayout::new(self.width, self.height, &self.insets, self.show_bars)
    }

    pub fn value_formatter(&self) -> ValueFormatter {
        ValueFormatter::new(self.unit.clone(), self.formatter.clone())
    }

    /// Reject configurations no render pass can satisfy.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.layout().has_plot_area() {
            return Err(ChartError::NoPlotArea { width: self.width, height: self.height });
        }
        if let Some(slot) = self.moving_average_periods.iter().position(|&p| p == 0) {
            return Err(ChartError::ZeroPeriod { slot });
        }
        if let Some(t) = self.target {
            if !t.is_finite() || t <= 0.0 {
                return Err(ChartError::InvalidTarget(t));
            }
        }
        Ok(())
    }
}
