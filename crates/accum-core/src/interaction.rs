// File: crates/accum-core/src/interaction.rs
// Summary: Hover state machine (idle / hovering), pointer-to-index resolution, detail panel and tooltip placement.

use crate::format::{format_percent, ValueFormatter};
use crate::geometry::{clamp, Point, RectF};
use crate::layers::{Layer, VisibleLayers};
use crate::moving_average::MovingAverage;
use crate::scale::{ChartLayout, ChartScales};
use crate::series::SeriesPoint;

/// Gap between the crosshair and the tooltip box, in pixels.
pub const TOOLTIP_OFFSET: f32 = 12.0;
pub const TOOLTIP_WIDTH: f32 = 188.0;
pub const TOOLTIP_ROW_HEIGHT: f32 = 18.0;
pub const TOOLTIP_PADDING: f32 = 10.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum HoverState {
    #[default]
    Idle,
    /// Pointer resolved to `index`; the crosshair is snapped onto that point.
    Hovering { index: usize, crosshair: Point },
}

impl HoverState {
    pub fn index(&self) -> Option<usize> {
        match *self {
            HoverState::Idle => None,
            HoverState::Hovering { index, .. } => Some(index),
        }
    }

    pub fn crosshair(&self) -> Option<Point> {
        match *self {
            HoverState::Idle => None,
            HoverState::Hovering { crosshair, .. } => Some(crosshair),
        }
    }

    /// Apply a pointer move. Leaves the state alone when the pointer is outside the
    /// plotting region or the series is empty. Returns whether it changed.
    pub fn pointer_move(
        &mut self,
        pointer: Point,
        layout: &ChartLayout,
        scales: &ChartScales,
        points: &[SeriesPoint],
    ) -> bool {
        let Some(next) = resolve(pointer, layout, scales, points) else {
            return false;
        };
        if *self == next {
            return false;
        }
        *self = next;
        true
    }

    /// Pointer left the chart. Returns whether it changed.
    pub fn pointer_leave(&mut self) -> bool {
        let changed = *self != HoverState::Idle;
        *self = HoverState::Idle;
        changed
    }
}

/// Hover state for `pointer`, or `None` when the move must be ignored.
pub fn resolve(
    pointer: Point,
    layout: &ChartLayout,
    scales: &ChartScales,
    points: &[SeriesPoint],
) -> Option<HoverState> {
    if !pointer.x.is_finite() || !pointer.y.is_finite() {
        return None;
    }
    if !layout.plot_region().contains(pointer) {
        return None;
    }
    let index = scales.x.nearest_index(pointer.x, points.len())?;
    let p = points.get(index)?;
    let crosshair = Point::new(scales.x.to_px(index as f64), scales.y.to_px(p.accumulated));
    Some(HoverState::Hovering { index, crosshair })
}

/// A moving-average reading at the hovered index.
#[derive(Clone, Debug, PartialEq)]
pub struct MovingAverageReading {
    pub slot: usize,
    pub period: usize,
    /// `None` while the window is not yet full.
    pub value: Option<f64>,
}

/// Everything the detail panel shows for one hovered point.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverDetail {
    pub index: usize,
    pub date: String,
    pub accumulated: f64,
    pub added: f64,
    pub target: Option<f64>,
    pub percent_of_target: Option<f64>,
    pub moving_averages: Vec<MovingAverageReading>,
}

impl HoverDetail {
    /// Read `points[index]` and the cached moving averages; nothing is recomputed.
    pub fn build(
        points: &[SeriesPoint],
        index: usize,
        global_target: Option<f64>,
        moving_averages: &[MovingAverage],
        visible: &VisibleLayers,
    ) -> Option<Self> {
        let p = points.get(index)?;
        let readings = moving_averages
            .iter()
            .enumerate()
            .filter(|(slot, _)| visible.is_visible(Layer::MovingAverage(*slot)))
            .map(|(slot, ma)| MovingAverageReading { slot, period: ma.period, value: ma.at(index) })
            .collect();
        Some(Self {
            index,
            date: p.date.clone(),
            accumulated: p.accumulated,
            added: p.added,
            target: p.effective_target(global_target),
            percent_of_target: p.percent_of_target(global_target),
            moving_averages: readings,
        })
    }

    /// Text rows in display order: date, value, addition, target share, averages.
    pub fn rows(&self, fmt: &ValueFormatter) -> Vec<String> {
        let mut rows = Vec::with_capacity(4 + self.moving_averages.len());
        rows.push(self.date.clone());
        rows.push(format!("Total: {}", fmt.value(self.accumulated)));
        rows.push(format!("Added: {}", fmt.signed(self.added)));
        if let Some(pct) = self.percent_of_target {
            rows.push(format!("Target: {}", format_percent(pct)));
        }
        for r in &self.moving_averages {
            let v = r.value.map(|v| fmt.value(v)).unwrap_or_else(|| "-".to_string());
            rows.push(format!("MA{}: {v}", r.period));
        }
        rows
    }
}

/// Tooltip box for `rows` text rows: right of the crosshair, flipped left when it
/// would leave `bounds`, and clamped vertically into `bounds`.
pub fn tooltip_rect(crosshair: Point, rows: usize, bounds: &RectF) -> RectF {
    let h = TOOLTIP_PADDING * 2.0 + TOOLTIP_ROW_HEIGHT * rows as f32;
    let mut left = crosshair.x + TOOLTIP_OFFSET;
    if left + TOOLTIP_WIDTH > bounds.right {
        left = crosshair.x - TOOLTIP_OFFSET - TOOLTIP_WIDTH;
    }
    let left = left.max(bounds.left);
    let top = clamp(crosshair.y - h * 0.5, bounds.top, (bounds.bottom - h).max(bounds.top));
    RectF::from_ltwh(left, top, TOOLTIP_WIDTH, h)
}
