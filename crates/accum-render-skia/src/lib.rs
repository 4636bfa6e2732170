// File: crates/accum-render-skia/src/lib.rs
// Summary: Skia CPU raster backend; draws an accumulation ChartFrame and encodes PNG.

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::debug;

use accum_core::chart::{BarLayer, ChartFrame, Crosshair, Tooltip};
use accum_core::interaction::{TOOLTIP_PADDING, TOOLTIP_ROW_HEIGHT};
use accum_core::moving_average::LineStyle;
use accum_core::{Palette, RectF, Rgba};

pub struct RenderOptions {
    /// Draw axis labels, legend text and tooltip rows. Off gives font-independent output.
    pub draw_labels: bool,
    pub font_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { draw_labels: true, font_size: 11.0 }
    }
}

pub struct SkiaRenderer {
    opts: RenderOptions,
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts }
    }

    /// Rasterize `frame` and return PNG bytes.
    pub fn render_to_png_bytes(&self, frame: &ChartFrame) -> Result<Vec<u8>> {
        let w = i32::try_from(frame.width).context("chart width exceeds raster limits")?;
        let h = i32::try_from(frame.height).context("chart height exceeds raster limits")?;
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        self.draw(canvas, frame);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        debug!(width = w, height = h, bytes = data.len(), "png encoded");
        Ok(data.as_bytes().to_vec())
    }

    /// Rasterize `frame` into a PNG file at `output_png_path`.
    pub fn render_to_png(&self, frame: &ChartFrame, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(frame)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, frame: &ChartFrame) {
        let pal = &frame.palette;
        canvas.clear(color(pal.background));

        draw_grid(canvas, frame);
        if frame.mounted {
            draw_plot(canvas, frame);
        }
        if self.opts.draw_labels {
            self.draw_labels(canvas, frame);
        }
        if let Some(c) = &frame.crosshair {
            draw_crosshair(canvas, c, pal);
        }
        if let Some(t) = &frame.tooltip {
            self.draw_tooltip(canvas, t, pal);
        }
    }

    fn font(&self) -> skia::Font {
        let mut font = skia::Font::default();
        font.set_size(self.opts.font_size);
        font
    }

    fn draw_labels(&self, canvas: &skia::Canvas, frame: &ChartFrame) {
        let font = self.font();
        let text = fill(frame.palette.axis_label, 1.0);
        let left = frame.layout.primary.left;
        for g in &frame.grid {
            let (width, _) = font.measure_str(&g.label, Some(&text));
            canvas.draw_str(&g.label, (left - 8.0 - width, g.y + 4.0), &font, &text);
        }
        let y = frame.layout.inner.bottom + 18.0;
        for l in &frame.x_labels {
            let (width, _) = font.measure_str(&l.text, Some(&text));
            canvas.draw_str(&l.text, (l.x - width * 0.5, y), &font, &text);
        }
        for item in &frame.legend {
            let alpha = if item.visible { 1.0 } else { 0.35 };
            let mid = item.rect.top + item.rect.height() * 0.5;
            let swatch = skia::Rect::from_xywh(item.rect.left, mid - 5.0, 10.0, 10.0);
            canvas.draw_round_rect(swatch, 2.0, 2.0, &fill(item.color, alpha));
            canvas.draw_str(&item.label, (item.rect.left + 16.0, mid + 4.0), &font, &fill(frame.palette.axis_label, alpha));
        }
    }

    fn draw_tooltip(&self, canvas: &skia::Canvas, t: &Tooltip, pal: &Palette) {
        let rect = to_skia(&t.rect);
        canvas.draw_round_rect(rect, 6.0, 6.0, &fill(pal.tooltip_background, 1.0));
        canvas.draw_round_rect(rect, 6.0, 6.0, &stroke(pal.tooltip_border, 1.0, 1.0));
        if !self.opts.draw_labels {
            return;
        }
        let font = self.font();
        let text = fill(pal.tooltip_text, 1.0);
        for (i, row) in t.rows.iter().enumerate() {
            let y = t.rect.top + TOOLTIP_PADDING + TOOLTIP_ROW_HEIGHT * (i as f32 + 0.5) + 4.0;
            canvas.draw_str(row, (t.rect.left + TOOLTIP_PADDING, y), &font, &text);
        }
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

// ---- helpers ----------------------------------------------------------------

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_skia(r: &RectF) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

fn fill(c: Rgba, opacity: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color(c));
    paint.set_alpha_f(c.alpha_f() * opacity);
    paint
}

fn stroke(c: Rgba, width: f32, opacity: f32) -> skia::Paint {
    let mut paint = fill(c, opacity);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn dashed(mut paint: skia::Paint, on: f32, off: f32) -> skia::Paint {
    paint.set_path_effect(skia::PathEffect::dash(&[on, off], 0.0));
    paint
}

fn draw_grid(canvas: &skia::Canvas, frame: &ChartFrame) {
    let paint = stroke(frame.palette.grid, 1.0, 1.0);
    let p = frame.layout.primary;
    for g in &frame.grid {
        canvas.draw_line((p.left, g.y), (p.right, g.y), &paint);
    }
}

fn draw_plot(canvas: &skia::Canvas, frame: &ChartFrame) {
    let pal = &frame.palette;

    if let Some(area) = frame.area.as_ref().filter(|a| a.opacity > 0.0) {
        if let Some(path) = skia::Path::from_svg(&area.d) {
            canvas.draw_path(&path, &fill(pal.area_fill, area.opacity));
        }
    }
    if let Some(bars) = frame.bars.as_ref().filter(|b| b.opacity > 0.0) {
        draw_bars(canvas, bars, pal);
    }
    if let Some(t) = frame.target.as_ref().filter(|t| t.opacity > 0.0) {
        let paint = dashed(stroke(pal.target, 1.5, t.opacity), 8.0, 4.0);
        canvas.draw_line((t.left, t.y), (t.right, t.y), &paint);
    }
    if frame.target_markers_opacity > 0.0 {
        let paint = fill(pal.target, frame.target_markers_opacity);
        for m in &frame.target_markers {
            canvas.draw_circle((m.x, m.y), 2.5, &paint);
        }
    }
    if let Some(path) = frame.line.as_deref().and_then(|d| skia::Path::from_svg(d)) {
        let mut paint = stroke(pal.line_stroke, 2.0, 1.0);
        paint.set_stroke_join(skia::paint::Join::Round);
        paint.set_stroke_cap(skia::paint::Cap::Round);
        canvas.draw_path(&path, &paint);
    }
    for ma in frame.moving_averages.iter().filter(|m| m.opacity > 0.0) {
        let Some(path) = skia::Path::from_svg(&ma.d) else { continue };
        let paint = stroke(ma.color, 1.5, ma.opacity);
        let paint = match ma.style {
            LineStyle::Solid => paint,
            LineStyle::Dashed => dashed(paint, 6.0, 4.0),
        };
        canvas.draw_path(&path, &paint);
    }
}

fn draw_bars(canvas: &skia::Canvas, bars: &BarLayer, pal: &Palette) {
    let base = stroke(pal.grid, 1.0, bars.opacity);
    canvas.draw_line((bars.region.left, bars.baseline_y), (bars.region.right, bars.baseline_y), &base);
    let up = fill(pal.bar_positive, bars.opacity);
    let down = fill(pal.bar_negative, bars.opacity);
    for bar in &bars.bars {
        let rect = to_skia(&bar.rect);
        canvas.draw_rect(rect, if bar.positive { &up } else { &down });
    }
}

fn draw_crosshair(canvas: &skia::Canvas, c: &Crosshair, pal: &Palette) {
    let paint = dashed(stroke(pal.crosshair, 1.0, 1.0), 3.0, 3.0);
    canvas.draw_line((c.at.x, c.top), (c.at.x, c.bottom), &paint);
    canvas.draw_line((c.left, c.at.y), (c.right, c.at.y), &paint);
    canvas.draw_circle((c.at.x, c.at.y), 4.0, &fill(pal.line_stroke, 1.0));
    canvas.draw_circle((c.at.x, c.at.y), 4.0, &stroke(pal.background, 2.0, 1.0));
}
