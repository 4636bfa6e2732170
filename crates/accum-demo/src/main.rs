// File: crates/accum-demo/src/main.rs
// Summary: Demo loads an accumulation CSV (+ optional JSON config) and writes SVG/PNG renders.

use accum_core::{AccumulationChart, ChartConfig, MountGate};
use accum_render_skia::SkiaRenderer;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod series_csv;

use series_csv::load_series_csv;

const DEFAULT_CSV: &str = "crates/accum-demo/data/sample.csv";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Usage: accum-demo [series.csv] [config.json]
    let mut args = std::env::args().skip(1);
    let csv_path = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_CSV.to_string()));
    let config = match args.next() {
        Some(p) => load_config(Path::new(&p))?,
        None => ChartConfig::default(),
    };
    info!(?config, "configuration");

    let points = load_series_csv(&csv_path)
        .with_context(|| format!("failed to load CSV '{}'", csv_path.display()))?;
    info!(rows = points.len(), path = %csv_path.display(), "series loaded");
    if points.is_empty() {
        anyhow::bail!("no rows loaded; expected headers date,accumulated,added[,target]");
    }

    // Static renders skip the mount delay.
    let mut chart = AccumulationChart::new(config)?.with_mount_gate(MountGate::mounted_now());
    chart.set_series(points)?;
    if let Some(r) = chart.ranges() {
        info!(min = r.min_accumulated, max = r.max_accumulated, max_added = r.max_added, "value ranges");
    }

    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    let stem = csv_path.file_stem().and_then(|s| s.to_str()).unwrap_or("accumulation");
    let renderer = SkiaRenderer::default();

    // 1) Resting state
    write_outputs(&chart, &renderer, &out_dir.join(format!("{stem}.png")))?;

    // 2) Hover over the middle point
    let mid = chart.series().len() / 2;
    if let Some(scales) = chart.scales().copied() {
        let region = chart.layout().plot_region();
        chart.pointer_move(scales.x.to_px(mid as f64), region.top + region.height() * 0.5);
        if let Some(detail) = chart.hover_detail() {
            for row in detail.rows(&chart.config().value_formatter()) {
                info!(%row, "hover");
            }
        }
        write_outputs(&chart, &renderer, &out_dir.join(format!("{stem}_hover.png")))?;
        chart.pointer_leave();
    }

    Ok(())
}

fn write_outputs(chart: &AccumulationChart, renderer: &SkiaRenderer, png: &Path) -> Result<()> {
    let frame = chart.frame();
    renderer.render_to_png(&frame, png)?;
    let svg = png.with_extension("svg");
    std::fs::write(&svg, accum_core::svg::render_document(&frame))
        .with_context(|| format!("writing {}", svg.display()))?;
    info!(png = %png.display(), svg = %svg.display(), "wrote");
    Ok(())
}

fn load_config(path: &Path) -> Result<ChartConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: ChartConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}
