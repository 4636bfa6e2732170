// File: crates/accum-core/tests/interaction.rs
// Purpose: Validate hover resolution, the idle/hovering state machine, detail panel and tooltip placement.

use accum_core::format::format_percent;
use accum_core::interaction::{tooltip_rect, HoverDetail, TOOLTIP_WIDTH};
use accum_core::{
    AccumulationChart, ChartConfig, HoverState, Layer, MountGate, Point, RectF, SeriesPoint,
    ValueFormatter, VisibleLayers,
};

fn five_points() -> Vec<SeriesPoint> {
    vec![
        SeriesPoint::new("2024-05-01", 10.0, 10.0),
        SeriesPoint::new("2024-05-02", 12.5, 2.5),
        SeriesPoint::new("2024-05-03", 14.25, 1.75).with_target(20.0),
        SeriesPoint::new("2024-05-04", 13.0, -1.25),
        SeriesPoint::new("2024-05-05", 16.0, 3.0),
    ]
}

fn chart(config: ChartConfig, points: Vec<SeriesPoint>) -> AccumulationChart {
    let mut c = AccumulationChart::new(config)
        .expect("valid config")
        .with_mount_gate(MountGate::mounted_now());
    c.set_series(points).expect("finite series");
    c
}

#[test]
fn hover_at_index_two_snaps_crosshair_and_reads_point() {
    let mut c = chart(ChartConfig::default().with_periods(vec![2, 3]), five_points());
    let scales = *c.scales().unwrap();
    let x2 = scales.x.to_px(2.0);
    assert!(c.pointer_move(x2 + 20.0, 120.0));

    let HoverState::Hovering { index, crosshair } = c.hover() else {
        panic!("expected hovering, got {:?}", c.hover());
    };
    assert_eq!(index, 2);
    assert_eq!(crosshair.x, x2);
    assert_eq!(crosshair.y, scales.y.to_px(14.25));

    let detail = c.hover_detail().expect("detail");
    assert_eq!(detail.date, "2024-05-03");
    assert_eq!(detail.accumulated, 14.25);
    assert_eq!(detail.added, 1.75);
    assert_eq!(detail.target, Some(20.0));
    let pct = detail.percent_of_target.unwrap();
    assert!((pct - 71.25).abs() < 1e-9);
    assert_eq!(detail.moving_averages.len(), 2);
    assert_eq!(detail.moving_averages[0].period, 2);
    assert_eq!(detail.moving_averages[0].value, Some((12.5 + 14.25) / 2.0));
    assert_eq!(detail.moving_averages[1].value, Some((10.0 + 12.5 + 14.25) / 3.0));

    let frame = c.frame();
    let cross = frame.crosshair.expect("crosshair");
    assert_eq!(cross.index, 2);
    assert_eq!(cross.at.x, x2);
    assert_eq!(frame.tooltip.expect("tooltip").detail, detail);
}

#[test]
fn resolved_index_is_the_closest_point() {
    let mut c = chart(ChartConfig::default(), five_points());
    let scales = *c.scales().unwrap();
    let region = c.layout().plot_region();
    let mut x = region.left;
    while x <= region.right {
        c.pointer_move(x, region.top + 10.0);
        let idx = c.hover().index().expect("inside the region always resolves");
        assert!(idx < 5);
        let dists = (0..5).map(|i| (scales.x.to_px(i as f64) - x).abs()).collect::<Vec<_>>();
        let best = dists.iter().cloned().fold(f32::INFINITY, f32::min);
        if (dists[idx] - best).abs() > 1e-3 {
            panic!("pointer {x}: resolved {idx} at distance {}, best {best}", dists[idx]);
        }
        x += 1.3;
    }
}

#[test]
fn moves_outside_the_region_leave_state_alone() {
    let mut c = chart(ChartConfig::default(), five_points());
    assert!(!c.pointer_move(5.0, 100.0));
    assert_eq!(c.hover(), HoverState::Idle);

    let x1 = c.scales().unwrap().x.to_px(1.0);
    assert!(c.pointer_move(x1, 100.0));
    assert!(!c.pointer_move(x1 + 1.0, 100.0), "same index and crosshair is not a change");
    assert!(!c.pointer_move(x1, 2.0), "above the plot region");
    assert!(!c.pointer_move(f32::NAN, 100.0));
    assert_eq!(c.hover().index(), Some(1));

    assert!(c.pointer_leave());
    assert_eq!(c.hover(), HoverState::Idle);
    assert!(!c.pointer_leave());
    assert!(c.hover_detail().is_none());
}

#[test]
fn empty_series_never_hovers() {
    let mut c = chart(ChartConfig::default(), Vec::new());
    assert!(!c.pointer_move(400.0, 100.0));
    assert!(c.frame().crosshair.is_none());
}

#[test]
fn single_point_hovers_across_the_whole_width() {
    let mut c = chart(ChartConfig::default(), vec![SeriesPoint::new("2024-01", 5.0, 5.0)]);
    let region = c.layout().plot_region();
    assert_eq!(c.scales().unwrap().x.spacing, c.layout().primary.width());
    let y = region.top + 5.0;
    for frac in [0.0, 0.25, 0.5, 0.75, 0.999] {
        c.pointer_leave();
        let x = region.left + region.width() * frac;
        assert!(c.pointer_move(x, y), "pointer at {frac} of the width");
        assert_eq!(c.hover().index(), Some(0));
    }
    assert_eq!(c.hover().crosshair().map(|p| p.x), Some(region.left));
}

#[test]
fn series_change_clears_hover() {
    let mut c = chart(ChartConfig::default(), five_points());
    let x = c.scales().unwrap().x.to_px(3.0);
    c.pointer_move(x, 100.0);
    assert_eq!(c.hover().index(), Some(3));
    c.set_series(five_points()).unwrap();
    assert_eq!(c.hover(), HoverState::Idle);
}

#[test]
fn detail_uses_global_target_and_hides_toggled_averages() {
    let points = five_points();
    let mas = accum_core::moving_average::compute_all(&points, &[2, 4]);
    let mut visible = VisibleLayers::new(2);
    visible.toggle(Layer::MovingAverage(0));

    let d = HoverDetail::build(&points, 1, Some(50.0), &mas, &visible).unwrap();
    assert_eq!(d.target, Some(50.0));
    assert!((d.percent_of_target.unwrap() - 25.0).abs() < 1e-9);
    assert_eq!(d.moving_averages.len(), 1);
    assert_eq!(d.moving_averages[0].period, 4);
    assert_eq!(d.moving_averages[0].value, None);

    let none = HoverDetail::build(&points, 0, None, &mas, &visible).unwrap();
    assert_eq!(none.percent_of_target, None);
    assert!(HoverDetail::build(&points, 9, None, &mas, &visible).is_none());
}

#[test]
fn detail_rows_sign_the_addition() {
    let points = five_points();
    let visible = VisibleLayers::new(0);
    let d = HoverDetail::build(&points, 3, None, &[], &visible).unwrap();
    let rows = d.rows(&ValueFormatter::new("BTC", None));
    assert_eq!(rows, vec!["2024-05-04", "Total: 13.00 BTC", "Added: -1.25 BTC"]);

    let d = HoverDetail::build(&points, 2, None, &[], &visible).unwrap();
    let rows = d.rows(&ValueFormatter::new("BTC", None));
    assert_eq!(rows[2], "Added: +1.75 BTC");
    assert_eq!(rows[3], format!("Target: {}", format_percent(d.percent_of_target.unwrap())));
}

#[test]
fn tooltip_flips_left_near_the_right_edge() {
    let bounds = RectF::from_ltrb(64.0, 24.0, 936.0, 380.0);
    let right = tooltip_rect(Point::new(200.0, 100.0), 4, &bounds);
    assert_eq!(right.left, 212.0);
    assert_eq!(right.width(), TOOLTIP_WIDTH);

    let flipped = tooltip_rect(Point::new(900.0, 100.0), 4, &bounds);
    assert_eq!(flipped.left, 900.0 - 12.0 - TOOLTIP_WIDTH);

    let low = tooltip_rect(Point::new(200.0, 379.0), 6, &bounds);
    assert!(low.bottom <= bounds.bottom + 1e-3);
    let high = tooltip_rect(Point::new(200.0, 25.0), 6, &bounds);
    assert_eq!(high.top, bounds.top);
}
