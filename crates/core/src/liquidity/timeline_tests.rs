use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::liquidity_model::{ClassifiedAsset, LiquidityReason, LiquidityStatus};
use super::timeline::TimelineBuilder;
use crate::assets::Asset;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn today() -> NaiveDate {
    d(2024, 1, 15)
}

fn liquid(value: Decimal) -> ClassifiedAsset {
    ClassifiedAsset {
        asset: Asset::default(),
        status: LiquidityStatus {
            liquidity_date: Some(today()),
            is_liquid_now: true,
            reason: LiquidityReason::CheckingAccount,
        },
        value_in_ils: value,
        converted: true,
    }
}

fn maturing(value: Decimal, date: NaiveDate) -> ClassifiedAsset {
    ClassifiedAsset {
        asset: Asset::default(),
        status: LiquidityStatus {
            liquidity_date: Some(date),
            is_liquid_now: false,
            reason: LiquidityReason::MaturityDate,
        },
        value_in_ils: value,
        converted: true,
    }
}

#[test]
fn empty_input_yields_empty_series() {
    let points = TimelineBuilder::default().build(&[], today());
    assert!(points.is_empty());
}

#[test]
fn only_liquid_assets_yield_a_single_current_point() {
    let assets = vec![liquid(dec!(1000)), liquid(dec!(500))];
    let points = TimelineBuilder::default().build(&assets, today());

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].month, d(2024, 1, 1));
    assert_eq!(points[0].cumulative_liquid_value, dec!(1500));
}

#[test]
fn future_events_accumulate() {
    let assets = vec![
        liquid(dec!(1000)),
        maturing(dec!(200), d(2024, 3, 10)),
        maturing(dec!(300), d(2024, 7, 1)),
    ];
    let points = TimelineBuilder::default().build(&assets, today());

    assert_eq!(points.len(), 3);
    assert_eq!(points[0].cumulative_liquid_value, dec!(1000));
    assert_eq!(points[1].month, d(2024, 3, 1));
    assert_eq!(points[1].cumulative_liquid_value, dec!(1200));
    assert_eq!(points[2].month, d(2024, 7, 1));
    assert_eq!(points[2].cumulative_liquid_value, dec!(1500));
}

#[test]
fn same_month_events_merge_into_one_point() {
    let assets = vec![
        maturing(dec!(200), d(2024, 5, 2)),
        maturing(dec!(300), d(2024, 5, 28)),
    ];
    let points = TimelineBuilder::default().build(&assets, today());

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].month, d(2024, 5, 1));
    assert_eq!(points[0].cumulative_liquid_value, dec!(500));
}

#[test]
fn flat_months_are_collapsed() {
    let assets = vec![liquid(dec!(100)), maturing(dec!(50), d(2025, 12, 1))];
    let points = TimelineBuilder::default().build(&assets, today());

    // Seed plus the one month where something changes; 22 flat months emit nothing
    assert_eq!(points.len(), 2);
    assert_eq!(points[1].month, d(2025, 12, 1));
}

#[test]
fn events_beyond_the_horizon_are_dropped() {
    let assets = vec![
        liquid(dec!(100)),
        maturing(dec!(50), d(2026, 2, 1)), // 25 months out
    ];
    let points = TimelineBuilder::default().build(&assets, today());

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].cumulative_liquid_value, dec!(100));
}

#[test]
fn horizon_is_configurable() {
    let assets = vec![maturing(dec!(50), d(2024, 4, 1))];

    let short = TimelineBuilder::with_horizon(2).build(&assets, today());
    assert!(short.is_empty());

    let long = TimelineBuilder::with_horizon(3).build(&assets, today());
    assert_eq!(long.len(), 1);
}

#[test]
fn undated_and_unconverted_assets_contribute_nothing() {
    let mut undated = maturing(dec!(50), d(2024, 4, 1));
    undated.status.liquidity_date = None;

    let mut unconverted = maturing(dec!(0), d(2024, 6, 1));
    unconverted.converted = false;

    let points = TimelineBuilder::default().build(&[undated, unconverted], today());
    assert!(points.is_empty());
}

#[test]
fn cumulative_value_is_monotonic() {
    let assets = vec![
        liquid(dec!(10)),
        maturing(dec!(5), d(2024, 2, 1)),
        maturing(dec!(7), d(2024, 9, 13)),
        maturing(dec!(3), d(2025, 6, 30)),
    ];
    let points = TimelineBuilder::default().build(&assets, today());

    for pair in points.windows(2) {
        assert!(pair[1].cumulative_liquid_value >= pair[0].cumulative_liquid_value);
        assert!(pair[1].month > pair[0].month);
    }
}
