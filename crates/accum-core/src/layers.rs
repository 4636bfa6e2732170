// File: crates/accum-core/src/layers.rs
// Summary: Visible-layer record keyed by a closed layer enum; toggled by legend clicks.

/// Toggleable chart layers. `MovingAverage` carries the slot of the configured period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Area,
    Bars,
    MovingAverage(usize),
    Target,
}

/// Visibility of every layer. All layers start visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibleLayers {
    area: bool,
    bars: bool,
    target: bool,
    moving_averages: Vec<bool>,
}

impl VisibleLayers {
    /// Record for a chart with `ma_slots` configured periods.
    pub fn new(ma_slots: usize) -> Self {
        Self { area: true, bars: true, target: true, moving_averages: vec![true; ma_slots] }
    }

    pub fn is_visible(&self, layer: Layer) -> bool {
        match layer {
            Layer::Area => self.area,
            Layer::Bars => self.bars,
            Layer::Target => self.target,
            Layer::MovingAverage(slot) => self.moving_averages.get(slot).copied().unwrap_or(false),
        }
    }

    /// Flip a layer. Returns the new visibility; unknown moving-average slots stay hidden.
    pub fn toggle(&mut self, layer: Layer) -> bool {
        let flag = match layer {
            Layer::Area => &mut self.area,
            Layer::Bars => &mut self.bars,
            Layer::Target => &mut self.target,
            Layer::MovingAverage(slot) => match self.moving_averages.get_mut(slot) {
                Some(f) => f,
                None => return false,
            },
        };
        *flag = !*flag;
        *flag
    }

    /// Opacity to render a layer with; hidden layers stay in the output for transitions.
    pub fn opacity(&self, layer: Layer) -> f32 {
        if self.is_visible(layer) { 1.0 } else { 0.0 }
    }

    /// Resize the moving-average slots, keeping existing flags and showing new slots.
    pub fn resize_moving_averages(&mut self, ma_slots: usize) {
        self.moving_averages.resize(ma_slots, true);
    }

    pub fn moving_average_slots(&self) -> usize {
        self.moving_averages.len()
    }
}
