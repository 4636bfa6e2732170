// File: crates/accum-core/src/svg.rs
// Summary: Serialize a ChartFrame into a standalone SVG document.
// Notes:
// - Hidden layers are written with opacity 0 instead of being dropped, so a
//   host toggling them sees the CSS opacity transition.
// - Until the mount gate opens, the plot group is written at opacity 0.

use std::fmt::Write as _;

use crate::chart::{ChartFrame, LegendItem};
use crate::interaction::{TOOLTIP_PADDING, TOOLTIP_ROW_HEIGHT};
use crate::layers::Layer;
use crate::moving_average::LineStyle;
use crate::theme::Rgba;

const AREA_GRADIENT_ID: &str = "accum-area-fill";
const FONT: &str = "font-family=\"Inter, Segoe UI, Helvetica, Arial, sans-serif\"";

/// Render `frame` as SVG markup.
pub fn render_document(frame: &ChartFrame) -> String {
    let mut out = String::with_capacity(8 * 1024);
    // Writing into a String cannot fail.
    let _ = write_document(&mut out, frame);
    out
}

fn write_document(out: &mut String, frame: &ChartFrame) -> std::fmt::Result {
    let pal = &frame.palette;
    let (w, h) = (frame.width, frame.height);
    writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" data-theme=\"{}\">",
        pal.name
    )?;
    writeln!(out, "<style>.layer{{transition:opacity 0.3s ease}}.plot{{transition:opacity 0.6s ease}}.legend-item{{cursor:pointer}}</style>")?;
    writeln!(out, "<defs><linearGradient id=\"{AREA_GRADIENT_ID}\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"1\">")?;
    writeln!(out, "<stop offset=\"0%\" stop-color=\"{}\" stop-opacity=\"{:.2}\"/>", pal.area_fill.hex(), pal.area_fill.alpha_f())?;
    writeln!(out, "<stop offset=\"100%\" stop-color=\"{}\" stop-opacity=\"0\"/>", pal.area_fill.hex())?;
    writeln!(out, "</linearGradient></defs>")?;
    writeln!(out, "<rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"{}\"/>", pal.background.hex())?;

    write_grid(out, frame)?;
    write_plot(out, frame)?;
    write_x_labels(out, frame)?;
    write_legend(out, frame)?;
    write_hover(out, frame)?;

    writeln!(out, "</svg>")
}

fn write_grid(out: &mut String, frame: &ChartFrame) -> std::fmt::Result {
    let pal = &frame.palette;
    let primary = frame.layout.primary;
    writeln!(out, "<g class=\"grid\">")?;
    for line in &frame.grid {
        writeln!(
            out,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"1\"/>",
            primary.left, line.y, primary.right, line.y, pal.grid.hex()
        )?;
        writeln!(
            out,
            "<text x=\"{:.2}\" y=\"{:.2}\" fill=\"{}\" font-size=\"11\" text-anchor=\"end\" dominant-baseline=\"middle\" {FONT}>{}</text>",
            primary.left - 8.0, line.y, pal.axis_label.hex(), escape(&line.label)
        )?;
    }
    writeln!(out, "</g>")
}

fn write_plot(out: &mut String, frame: &ChartFrame) -> std::fmt::Result {
    let pal = &frame.palette;
    let plot_opacity = if frame.mounted { 1 } else { 0 };
    writeln!(out, "<g class=\"plot\" opacity=\"{plot_opacity}\">")?;

    if let Some(area) = &frame.area {
        writeln!(
            out,
            "<path class=\"layer\" data-layer=\"{}\" d=\"{}\" fill=\"url(#{AREA_GRADIENT_ID})\" stroke=\"none\" opacity=\"{}\"/>",
            layer_key(Layer::Area), area.d, area.opacity
        )?;
    }

    if let Some(bars) = &frame.bars {
        writeln!(out, "<g class=\"layer\" data-layer=\"{}\" opacity=\"{}\">", layer_key(Layer::Bars), bars.opacity)?;
        writeln!(
            out,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"1\"/>",
            bars.region.left, bars.baseline_y, bars.region.right, bars.baseline_y, pal.grid.hex()
        )?;
        for bar in &bars.bars {
            let color = if bar.positive { pal.bar_positive } else { pal.bar_negative };
            writeln!(
                out,
                "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"1\" fill=\"{}\"/>",
                bar.rect.left, bar.rect.top, bar.rect.width(), bar.rect.height(), color.hex()
            )?;
        }
        writeln!(out, "</g>")?;
    }

    if let Some(t) = &frame.target {
        writeln!(
            out,
            "<line class=\"layer\" data-layer=\"{}\" x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"1.5\" stroke-dasharray=\"8 4\" opacity=\"{}\"/>",
            layer_key(Layer::Target), t.left, t.y, t.right, t.y, pal.target.hex(), t.opacity
        )?;
    }
    if !frame.target_markers.is_empty() {
        writeln!(out, "<g class=\"layer\" data-layer=\"{}-points\" opacity=\"{}\">", layer_key(Layer::Target), frame.target_markers_opacity)?;
        for p in &frame.target_markers {
            writeln!(out, "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"2.5\" fill=\"{}\"/>", p.x, p.y, pal.target.hex())?;
        }
        writeln!(out, "</g>")?;
    }

    if let Some(d) = &frame.line {
        writeln!(
            out,
            "<path d=\"{d}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\" stroke-linejoin=\"round\" stroke-linecap=\"round\"/>",
            pal.line_stroke.hex()
        )?;
    }

    for ma in &frame.moving_averages {
        let dash = match ma.style {
            LineStyle::Solid => "",
            LineStyle::Dashed => " stroke-dasharray=\"6 4\"",
        };
        writeln!(
            out,
            "<path class=\"layer\" data-layer=\"{}\" data-period=\"{}\" d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1.5\"{dash} opacity=\"{}\"/>",
            layer_key(Layer::MovingAverage(ma.slot)), ma.period, ma.d, ma.color.hex(), ma.opacity
        )?;
    }

    writeln!(out, "</g>")
}

fn write_x_labels(out: &mut String, frame: &ChartFrame) -> std::fmt::Result {
    let y = frame.layout.inner.bottom + 18.0;
    writeln!(out, "<g class=\"x-labels\">")?;
    for label in &frame.x_labels {
        writeln!(
            out,
            "<text x=\"{:.2}\" y=\"{y:.2}\" fill=\"{}\" font-size=\"11\" text-anchor=\"middle\" {FONT}>{}</text>",
            label.x, frame.palette.axis_label.hex(), escape(&label.text)
        )?;
    }
    writeln!(out, "</g>")
}

fn write_legend(out: &mut String, frame: &ChartFrame) -> std::fmt::Result {
    writeln!(out, "<g class=\"legend\">")?;
    for item in &frame.legend {
        write_legend_item(out, item, frame.palette.axis_label)?;
    }
    writeln!(out, "</g>")
}

fn write_legend_item(out: &mut String, item: &LegendItem, text: Rgba) -> std::fmt::Result {
    let r = item.rect;
    let opacity = if item.visible { 1.0 } else { 0.35 };
    let mid = r.top + r.height() * 0.5;
    writeln!(
        out,
        "<g class=\"legend-item\" data-layer=\"{}\" data-visible=\"{}\" opacity=\"{opacity}\">",
        layer_key(item.layer), item.visible
    )?;
    writeln!(
        out,
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"10\" height=\"10\" rx=\"2\" fill=\"{}\"/>",
        r.left, mid - 5.0, item.color.hex()
    )?;
    writeln!(
        out,
        "<text x=\"{:.2}\" y=\"{mid:.2}\" fill=\"{}\" font-size=\"11\" dominant-baseline=\"middle\" {FONT}>{}</text>",
        r.left + 16.0, text.hex(), escape(&item.label)
    )?;
    writeln!(out, "</g>")
}

fn write_hover(out: &mut String, frame: &ChartFrame) -> std::fmt::Result {
    let pal = &frame.palette;
    if let Some(c) = &frame.crosshair {
        writeln!(out, "<g class=\"crosshair\" data-index=\"{}\">", c.index)?;
        writeln!(
            out,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-opacity=\"{:.2}\" stroke-dasharray=\"3 3\"/>",
            c.at.x, c.top, c.at.x, c.bottom, pal.crosshair.hex(), pal.crosshair.alpha_f()
        )?;
        writeln!(
            out,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-opacity=\"{:.2}\" stroke-dasharray=\"3 3\"/>",
            c.left, c.at.y, c.right, c.at.y, pal.crosshair.hex(), pal.crosshair.alpha_f()
        )?;
        writeln!(
            out,
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"4\" fill=\"{}\" stroke=\"{}\" stroke-width=\"2\"/>",
            c.at.x, c.at.y, pal.line_stroke.hex(), pal.background.hex()
        )?;
        writeln!(out, "</g>")?;
    }
    if let Some(t) = &frame.tooltip {
        let r = t.rect;
        writeln!(out, "<g class=\"tooltip\">")?;
        writeln!(
            out,
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"6\" fill=\"{}\" fill-opacity=\"{:.2}\" stroke=\"{}\"/>",
            r.left, r.top, r.width(), r.height(), pal.tooltip_background.hex(), pal.tooltip_background.alpha_f(), pal.tooltip_border.hex()
        )?;
        for (i, row) in t.rows.iter().enumerate() {
            let y = r.top + TOOLTIP_PADDING + TOOLTIP_ROW_HEIGHT * (i as f32 + 0.5);
            let weight = if i == 0 { " font-weight=\"600\"" } else { "" };
            writeln!(
                out,
                "<text x=\"{:.2}\" y=\"{y:.2}\" fill=\"{}\" font-size=\"12\" dominant-baseline=\"middle\"{weight} {FONT}>{}</text>",
                r.left + TOOLTIP_PADDING, pal.tooltip_text.hex(), escape(row)
            )?;
        }
        writeln!(out, "</g>")?;
    }
    Ok(())
}

/// Stable identifier used in `data-layer` attributes.
pub fn layer_key(layer: Layer) -> String {
    match layer {
        Layer::Area => "area".to_string(),
        Layer::Bars => "bars".to_string(),
        Layer::MovingAverage(slot) => format!("ma-{slot}"),
        Layer::Target => "target".to_string(),
    }
}

/// Escape text content for XML.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
