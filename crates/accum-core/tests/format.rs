// File: crates/accum-core/tests/format.rs
// Purpose: Validate default number formatting, signed additions, custom formatters and date labels.

use std::sync::Arc;

use accum_core::format::{format_number, format_percent, short_date};
use accum_core::ValueFormatter;

#[test]
fn default_numbers_group_thousands() {
    assert_eq!(format_number(0.0), "0.00");
    assert_eq!(format_number(12.5), "12.50");
    assert_eq!(format_number(1234.567), "1,234.57");
    assert_eq!(format_number(-9876543.21), "-9,876,543.21");
    assert_eq!(format_number(0.00421), "0.0042");
    assert_eq!(format_number(f64::NAN), "-");
}

#[test]
fn values_carry_unit_and_sign() {
    let f = ValueFormatter::new("BTC", None);
    assert_eq!(f.value(21.0), "21.00 BTC");
    assert_eq!(f.signed(0.5), "+0.5000 BTC");
    assert_eq!(f.signed(-3.0), "-3.00 BTC");
    assert_eq!(f.signed(0.0), "+0.00 BTC");

    let bare = ValueFormatter::new("", None);
    assert_eq!(bare.value(2.0), "2.00");
}

#[test]
fn custom_formatter_replaces_number_formatting() {
    let f = ValueFormatter::new("EH/s", Some(Arc::new(|v: f64| format!("{v:.1}"))));
    assert_eq!(f.value(612.345), "612.3 EH/s");
    assert_eq!(f.signed(-1.26), "-1.3 EH/s");
    assert_eq!(f.number(3.0), "3.0");
}

#[test]
fn percent_has_one_decimal() {
    assert_eq!(format_percent(87.34), "87.3%");
    assert_eq!(format_percent(100.0), "100.0%");
}

#[test]
fn dates_shorten_when_they_parse() {
    assert_eq!(short_date("2024-03-05"), "Mar 05");
    assert_eq!(short_date("2024-11"), "Nov 2024");
    assert_eq!(short_date(" Week 12 "), "Week 12");
}

#[test]
fn large_magnitudes_stay_grouped() {
    assert_eq!(format_number(12_345_678_901_234.5), "12,345,678,901,234.50");
    assert_eq!(format_number(-1_000.0), "-1,000.00");
    assert_eq!(format_number(999.999), "1,000.00");

    let huge = format_number(1e30);
    let int_part = huge.split('.').next().unwrap();
    assert_eq!(int_part.matches(',').count(), 10);
    assert!(int_part.split(',').skip(1).all(|g| g.len() == 3));
}
