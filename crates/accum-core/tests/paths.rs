// File: crates/accum-core/tests/paths.rs
// Purpose: Validate area/line/moving-average path data and bar rectangles.

use accum_core::moving_average::MovingAverage;
use accum_core::path::{area_path, bar_rects, line_path, moving_average_path, scaled_points, PathData};
use accum_core::range::ValueRanges;
use accum_core::scale::{ChartLayout, ChartScales};
use accum_core::{Insets, Point, SeriesPoint};

fn series(n: usize) -> Vec<SeriesPoint> {
    (0..n)
        .map(|i| {
            let added = if i % 3 == 2 { -1.5 } else { 2.0 + i as f64 };
            SeriesPoint::new(format!("2024-02-{:02}", i + 1), 100.0 + (i * i) as f64, added)
        })
        .collect()
}

fn scales_for(points: &[SeriesPoint]) -> (ChartLayout, ChartScales) {
    let layout = ChartLayout::new(960, 420, &Insets::default(), true);
    let ranges = ValueRanges::from_points(points).expect("non-empty");
    (layout, ChartScales::new(&layout, &ranges, points.len()))
}

#[test]
fn path_data_formats_commands_with_two_decimals() {
    let mut p = PathData::new();
    p.move_to(Point::new(1.0, 2.5)).line_to(Point::new(3.333, 4.0)).close();
    assert_eq!(p.as_str(), "M1.00,2.50 L3.33,4.00 Z");
}

#[test]
fn area_closes_on_the_same_baseline_for_any_length() {
    for n in 1..=7 {
        let data = series(n);
        let (layout, scales) = scales_for(&data);
        let pts = scaled_points(&data, &scales);
        let base = layout.primary.bottom;
        let d = area_path(&pts, base).expect("area path");
        let first = pts[0];
        let last = pts[n - 1];
        let tail = format!("L{:.2},{:.2} L{:.2},{:.2} Z", last.x, base, first.x, base);
        assert!(d.ends_with(&tail), "n={n}: {d}");
        assert!(d.starts_with(&format!("M{:.2},{:.2}", first.x, first.y)));
        assert_eq!(d.matches('L').count(), n - 1 + 2);
    }
}

#[test]
fn line_passes_through_every_point_in_order() {
    let data = series(4);
    let (_, scales) = scales_for(&data);
    let pts = scaled_points(&data, &scales);
    let d = line_path(&pts).expect("line");
    let expected = pts
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}{:.2},{:.2}", if i == 0 { 'M' } else { 'L' }, p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(d, expected);
    assert!(!d.contains('Z'));
}

#[test]
fn empty_input_emits_no_paths() {
    assert_eq!(area_path(&[], 100.0), None);
    assert_eq!(line_path(&[]), None);
}

#[test]
fn moving_average_path_skips_undefined_prefix() {
    let data = series(6);
    let (_, scales) = scales_for(&data);
    let ma = MovingAverage::compute(&data, 3);
    let d = moving_average_path(&ma, &scales).expect("ma path");
    assert_eq!(d.matches('M').count(), 1);
    assert_eq!(d.matches('L').count(), 3);
    let x2 = scales.x.to_px(2.0);
    assert!(d.starts_with(&format!("M{:.2},", x2)), "{d}");
}

#[test]
fn moving_average_path_needs_two_defined_points() {
    let data = series(3);
    let (_, scales) = scales_for(&data);
    assert_eq!(moving_average_path(&MovingAverage::compute(&data, 3), &scales), None);
    assert_eq!(moving_average_path(&MovingAverage::compute(&data, 30), &scales), None);
    assert!(moving_average_path(&MovingAverage::compute(&data, 2), &scales).is_some());
}

#[test]
fn bars_grow_from_the_zero_baseline() {
    let data = series(5);
    let (layout, scales) = scales_for(&data);
    let bar_scale = scales.bars.expect("bars enabled");
    let bars = bar_rects(&data, &scales.x, &bar_scale);
    let base = bar_scale.baseline_px();
    assert_eq!(bars.len(), 5);
    let region = layout.bars.unwrap();
    for b in &bars {
        let p = &data[b.index];
        assert_eq!(b.positive, p.added >= 0.0);
        if b.positive {
            assert_eq!(b.rect.bottom, base);
        } else {
            assert_eq!(b.rect.top, base);
        }
        assert!(b.rect.top >= region.top && b.rect.bottom <= region.bottom);
        assert!(b.rect.width() <= 28.0 && b.rect.width() >= 1.0);
        assert!((b.rect.left + b.rect.width() * 0.5 - scales.x.to_px(b.index as f64)).abs() < 1e-3);
    }
    // Largest |added| (6.0 at index 4) spans the full half strip.
    assert!((bars[4].rect.top - region.top).abs() < 1e-3);
}

#[test]
fn zero_additions_collapse_bars() {
    let data = (0..3).map(|i| SeriesPoint::new(format!("d{i}"), i as f64, 0.0)).collect::<Vec<_>>();
    let (_, scales) = scales_for(&data);
    let bar_scale = scales.bars.unwrap();
    for b in bar_rects(&data, &scales.x, &bar_scale) {
        assert_eq!(b.rect.height(), 0.0);
        assert!(b.rect.top.is_finite());
    }
}
