// File: crates/accum-core/src/chart.rs
// Summary: AccumulationChart (series + config + UI state) and the per-render ChartFrame geometry pipeline.

use tracing::{debug, trace};

use crate::config::ChartConfig;
use crate::error::{ChartError, ChartResult};
use crate::format::short_date;
use crate::geometry::{Point, RectF};
use crate::grid::{label_indices, linspace, MAX_X_LABELS, VALUE_TICKS};
use crate::interaction::{tooltip_rect, HoverDetail, HoverState};
use crate::layers::{Layer, VisibleLayers};
use crate::moving_average::{self, LineStyle, MovingAverage};
use crate::mount::{MountGate, DEFAULT_MOUNT_DELAY};
use crate::path::{self, BarRect};
use crate::range::ValueRanges;
use crate::scale::{ChartLayout, ChartScales};
use crate::series::{self, SeriesPoint};
use crate::theme::{Palette, Rgba};

/// Approximate advance of one legend glyph, in pixels.
const LEGEND_CHAR_WIDTH: f32 = 7.0;
const LEGEND_SWATCH: f32 = 10.0;
const LEGEND_GAP: f32 = 16.0;
const LEGEND_HEIGHT: f32 = 16.0;

/// A path layer with its render opacity (hidden layers keep their geometry).
#[derive(Clone, Debug, PartialEq)]
pub struct LayerPath {
    pub d: String,
    pub opacity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MovingAveragePath {
    pub slot: usize,
    pub period: usize,
    pub d: String,
    pub style: LineStyle,
    pub color: Rgba,
    pub opacity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarLayer {
    pub bars: Vec<BarRect>,
    pub baseline_y: f32,
    pub region: RectF,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetLine {
    pub value: f64,
    pub y: f32,
    pub left: f32,
    pub right: f32,
    pub opacity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridLine {
    pub y: f32,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub x: f32,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    pub layer: Layer,
    pub label: String,
    pub color: Rgba,
    pub visible: bool,
    /// Click target.
    pub rect: RectF,
}

/// Vertical and horizontal guide lines through the hovered point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crosshair {
    pub index: usize,
    pub at: Point,
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub rect: RectF,
    pub rows: Vec<String>,
    pub detail: HoverDetail,
}

/// Everything needed to draw one render pass. Built from scratch by [`AccumulationChart::frame`].
///
/// An empty series yields a frame with no paths, bars, labels or tooltip; the
/// chart box, grid-less background and legend are still present.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartFrame {
    pub width: u32,
    pub height: u32,
    pub layout: ChartLayout,
    pub palette: Palette,
    pub mounted: bool,
    pub points: Vec<Point>,
    pub area: Option<LayerPath>,
    pub line: Option<String>,
    pub moving_averages: Vec<MovingAveragePath>,
    pub bars: Option<BarLayer>,
    pub target: Option<TargetLine>,
    pub target_markers: Vec<Point>,
    pub target_markers_opacity: f32,
    pub grid: Vec<GridLine>,
    pub x_labels: Vec<AxisLabel>,
    pub legend: Vec<LegendItem>,
    pub crosshair: Option<Crosshair>,
    pub tooltip: Option<Tooltip>,
}

impl ChartFrame {
    /// Layer whose legend entry contains `(x, y)`.
    pub fn legend_hit(&self, x: f32, y: f32) -> Option<Layer> {
        let p = Point::new(x, y);
        self.legend.iter().find(|item| item.rect.contains(p)).map(|item| item.layer)
    }
}

/// Values derived from series + config, refreshed whenever either changes.
#[derive(Clone, Debug, Default)]
struct Derived {
    ranges: Option<ValueRanges>,
    scales: Option<ChartScales>,
    moving_averages: Vec<MovingAverage>,
}

impl Derived {
    fn compute(config: &ChartConfig, layout: &ChartLayout, points: &[SeriesPoint]) -> Self {
        let ranges = ValueRanges::from_points(points);
        let scales = ranges.as_ref().map(|r| ChartScales::new(layout, r, points.len()));
        let moving_averages = moving_average::compute_all(points, config.active_periods());
        Self { ranges, scales, moving_averages }
    }
}

/// The accumulation chart component: props, local UI state and derived data.
pub struct AccumulationChart {
    config: ChartConfig,
    layout: ChartLayout,
    series: Vec<SeriesPoint>,
    derived: Derived,
    visible: VisibleLayers,
    hover: HoverState,
    mount: MountGate,
}

impl AccumulationChart {
    /// Validate `config` and start the entry-animation timer.
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let layout = config.layout();
        let visible = VisibleLayers::new(config.active_periods().len());
        Ok(Self {
            config,
            layout,
            series: Vec::new(),
            derived: Derived::default(),
            visible,
            hover: HoverState::Idle,
            mount: MountGate::schedule(DEFAULT_MOUNT_DELAY),
        })
    }

    /// Replace the mount gate (e.g. [`MountGate::mounted_now`] for static renders).
    pub fn with_mount_gate(mut self, gate: MountGate) -> Self {
        self.mount = gate;
        self
    }

    /// Replace the series. Non-finite values and unscalable ranges are rejected; hover is cleared.
    pub fn set_series(&mut self, points: Vec<SeriesPoint>) -> ChartResult<()> {
        series::check_finite(&points)?;
        if let Some(r) = ValueRanges::from_points(&points).filter(|r| !r.is_scalable()) {
            return Err(ChartError::RangeOverflow { min: r.min_accumulated, max: r.max_accumulated });
        }
        if !series::is_non_decreasing(&points) {
            debug!(points = points.len(), "accumulated values decrease somewhere in the series");
        }
        self.series = points;
        self.refresh();
        debug!(points = self.series.len(), "series replaced");
        Ok(())
    }

    /// Replace the configuration. Layer flags survive for slots that still exist.
    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.layout = config.layout();
        self.visible.resize_moving_averages(config.active_periods().len());
        self.config = config;
        self.refresh();
        Ok(())
    }

    fn refresh(&mut self) {
        self.derived = Derived::compute(&self.config, &self.layout, &self.series);
        self.hover = HoverState::Idle;
    }

    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn series(&self) -> &[SeriesPoint] { &self.series }
    pub fn layout(&self) -> &ChartLayout { &self.layout }
    pub fn ranges(&self) -> Option<&ValueRanges> { self.derived.ranges.as_ref() }
    pub fn scales(&self) -> Option<&ChartScales> { self.derived.scales.as_ref() }
    pub fn moving_averages(&self) -> &[MovingAverage] { &self.derived.moving_averages }
    pub fn visible_layers(&self) -> &VisibleLayers { &self.visible }
    pub fn hover(&self) -> HoverState { self.hover }
    pub fn is_mounted(&self) -> bool { self.mount.is_mounted() }

    /// Flip a layer; returns its new visibility.
    pub fn toggle_layer(&mut self, layer: Layer) -> bool {
        let visible = self.visible.toggle(layer);
        trace!(?layer, visible, "layer toggled");
        visible
    }

    /// Toggle the layer whose legend entry is under `(x, y)`.
    pub fn click(&mut self, x: f32, y: f32) -> Option<Layer> {
        let layer = self.frame().legend_hit(x, y)?;
        self.toggle_layer(layer);
        Some(layer)
    }

    /// Pointer moved to `(x, y)` in chart pixels. Returns whether the hover state changed.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        let Some(scales) = self.derived.scales.as_ref() else {
            return false;
        };
        let changed = self.hover.pointer_move(Point::new(x, y), &self.layout, scales, &self.series);
        if changed {
            trace!(index = ?self.hover.index(), "hover moved");
        }
        changed
    }

    /// Pointer left the chart.
    pub fn pointer_leave(&mut self) -> bool {
        self.hover.pointer_leave()
    }

    /// Detail panel contents for the hovered point.
    pub fn hover_detail(&self) -> Option<HoverDetail> {
        let index = self.hover.index()?;
        HoverDetail::build(
            &self.series,
            index,
            self.config.target,
            &self.derived.moving_averages,
            &self.visible,
        )
    }

    /// Assemble all geometry for the current state.
    pub fn frame(&self) -> ChartFrame {
        let palette = self.config.theme.palette();
        let mut frame = ChartFrame {
            width: self.config.width,
            height: self.config.height,
            layout: self.layout,
            palette,
            mounted: self.mount.is_mounted(),
            points: Vec::new(),
            area: None,
            line: None,
            moving_averages: Vec::new(),
            bars: None,
            target: None,
            target_markers: Vec::new(),
            target_markers_opacity: self.visible.opacity(Layer::Target),
            grid: Vec::new(),
            x_labels: Vec::new(),
            legend: self.legend(&palette),
            crosshair: None,
            tooltip: None,
        };
        let (Some(ranges), Some(scales)) = (self.derived.ranges, self.derived.scales) else {
            trace!("empty series; frame carries no geometry");
            return frame;
        };

        let primary = self.layout.primary;
        frame.points = path::scaled_points(&self.series, &scales);
        frame.area = path::area_path(&frame.points, primary.bottom)
            .map(|d| LayerPath { d, opacity: self.visible.opacity(Layer::Area) });
        frame.line = path::line_path(&frame.points);

        let periods = self.config.active_periods();
        frame.moving_averages = self
            .derived
            .moving_averages
            .iter()
            .enumerate()
            .filter_map(|(slot, ma)| {
                let d = path::moving_average_path(ma, &scales)?;
                Some(MovingAveragePath {
                    slot,
                    period: ma.period,
                    d,
                    style: moving_average::style_for(periods, slot),
                    color: palette.moving_average(slot),
                    opacity: self.visible.opacity(Layer::MovingAverage(slot)),
                })
            })
            .collect();

        if let (Some(bar_scale), Some(region)) = (scales.bars, self.layout.bars) {
            frame.bars = Some(BarLayer {
                bars: path::bar_rects(&self.series, &scales.x, &bar_scale),
                baseline_y: bar_scale.baseline_px(),
                region,
                opacity: self.visible.opacity(Layer::Bars),
            });
        }

        frame.target = self
            .config
            .target
            .filter(|t| ranges.contains(*t))
            .map(|value| TargetLine {
                value,
                y: scales.y.to_px(value),
                left: primary.left,
                right: primary.right,
                opacity: self.visible.opacity(Layer::Target),
            });
        frame.target_markers = self
            .series
            .iter()
            .enumerate()
            .filter_map(|(i, p)| {
                let t = p.target.filter(|t| ranges.contains(*t))?;
                Some(Point::new(scales.x.to_px(i as f64), scales.y.to_px(t)))
            })
            .collect();

        let fmt = self.config.value_formatter();
        frame.grid = linspace(ranges.padded_min(), ranges.padded_max(), VALUE_TICKS)
            .into_iter()
            .map(|v| GridLine { y: scales.y.to_px(v), label: fmt.number(v) })
            .collect();
        frame.x_labels = label_indices(self.series.len(), MAX_X_LABELS)
            .into_iter()
            .map(|i| AxisLabel { x: scales.x.to_px(i as f64), text: short_date(&self.series[i].date) })
            .collect();

        if let (HoverState::Hovering { index, crosshair }, Some(detail)) = (self.hover, self.hover_detail()) {
            let region = self.layout.plot_region();
            frame.crosshair = Some(Crosshair {
                index,
                at: crosshair,
                top: region.top,
                bottom: region.bottom,
                left: primary.left,
                right: primary.right,
            });
            let rows = detail.rows(&fmt);
            frame.tooltip = Some(Tooltip {
                rect: tooltip_rect(crosshair, rows.len(), &self.layout.inner),
                rows,
                detail,
            });
        }

        debug!(
            points = frame.points.len(),
            moving_averages = frame.moving_averages.len(),
            hovering = frame.crosshair.is_some(),
            "frame assembled"
        );
        frame
    }

    /// Standalone SVG document for the current state.
    pub fn render_svg(&self) -> String {
        crate::svg::render_document(&self.frame())
    }

    fn legend(&self, palette: &Palette) -> Vec<LegendItem> {
        let mut entries: Vec<(Layer, String, Rgba)> = vec![(Layer::Area, "Accumulated".to_string(), palette.line_stroke)];
        if self.config.show_bars {
            entries.push((Layer::Bars, "Added".to_string(), palette.bar_positive));
        }
        for (slot, period) in self.config.active_periods().iter().enumerate() {
            entries.push((Layer::MovingAverage(slot), format!("MA{period}"), palette.moving_average(slot)));
        }
        if self.config.target.is_some() || self.series.iter().any(|p| p.target.is_some()) {
            entries.push((Layer::Target, "Target".to_string(), palette.target));
        }

        let top = (self.layout.inner.top - LEGEND_HEIGHT - 4.0).max(0.0);
        let mut x = self.layout.inner.left;
        entries
            .into_iter()
            .map(|(layer, label, color)| {
                let w = LEGEND_SWATCH + 6.0 + label.chars().count() as f32 * LEGEND_CHAR_WIDTH;
                let rect = RectF::from_ltwh(x, top, w, LEGEND_HEIGHT);
                x += w + LEGEND_GAP;
                LegendItem { layer, visible: self.visible.is_visible(layer), label, color, rect }
            })
            .collect()
    }
}
