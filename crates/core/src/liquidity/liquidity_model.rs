//! Liquidity domain models - pure projections of assets, rates, and "today".

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::assets::Asset;

/// Which classification branch produced a liquidity status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LiquidityReason {
    CheckingAccount,
    ScheduledRelease,
    LiquidInstrument,
    ImmediatelyLiquid,
    NoReleaseDate,
    RealEstate,
    MaturityDate,
    ExitStationPassed,
    FutureExitStation,
    LockEnd,
    NoClearDate,
    SixYearsFromOpening,
    ManualRelease,
    NoOpeningDate,
    Unclassified,
}

impl fmt::Display for LiquidityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            LiquidityReason::CheckingAccount => "Checking account",
            LiquidityReason::ScheduledRelease => "Defined release date",
            LiquidityReason::LiquidInstrument => "Liquid financial instrument",
            LiquidityReason::ImmediatelyLiquid => "Immediately liquid",
            LiquidityReason::NoReleaseDate => "No release date defined",
            LiquidityReason::RealEstate => "Real estate holding",
            LiquidityReason::MaturityDate => "Defined maturity date",
            LiquidityReason::ExitStationPassed => "Exit station passed",
            LiquidityReason::FutureExitStation => "Future exit station",
            LiquidityReason::LockEnd => "Lock-up release",
            LiquidityReason::NoClearDate => "No clear liquidity date",
            LiquidityReason::SixYearsFromOpening => "Six years from opening",
            LiquidityReason::ManualRelease => "Manual release date",
            LiquidityReason::NoOpeningDate => "No opening or release date",
            LiquidityReason::Unclassified => "Not currently liquid",
        };
        f.write_str(text)
    }
}

/// Result of classifying one asset at a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityStatus {
    /// When the asset becomes (or became) accessible cash, if determinable.
    pub liquidity_date: Option<NaiveDate>,
    pub is_liquid_now: bool,
    pub reason: LiquidityReason,
}

impl LiquidityStatus {
    /// Liquid as of `date`; used by rules whose match point is a known date.
    pub fn dated(date: NaiveDate, today: NaiveDate, reason: LiquidityReason) -> Self {
        Self {
            liquidity_date: Some(date),
            is_liquid_now: date <= today,
            reason,
        }
    }

    /// Not liquid and no date can be determined.
    pub fn undetermined(reason: LiquidityReason) -> Self {
        Self {
            liquidity_date: None,
            is_liquid_now: false,
            reason,
        }
    }
}

/// An asset joined with its liquidity status and ILS valuation.
///
/// Created fresh on every computation pass; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedAsset {
    pub asset: Asset,
    #[serde(flatten)]
    pub status: LiquidityStatus,
    #[serde(rename = "valueInILS")]
    pub value_in_ils: Decimal,
    pub converted: bool,
}

/// One point of the cumulative liquidity series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    /// First day of the month the point belongs to.
    pub month: NaiveDate,
    pub cumulative_liquid_value: Decimal,
}

impl TimelinePoint {
    /// Chart axis label, e.g. "Jun 26".
    pub fn label(&self) -> String {
        self.month.format("%b %y").to_string()
    }
}

/// Everything the liquidity page renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityOverview {
    /// Assets liquid today, soonest liquidity date first.
    pub liquid_now: Vec<ClassifiedAsset>,
    /// Assets with a known future liquidity date, soonest first.
    pub upcoming: Vec<ClassifiedAsset>,
    pub total_liquid_value: Decimal,
    pub timeline: Vec<TimelinePoint>,
}

/// Coarse countdown to a future liquidity date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUntilLiquidity {
    Days(i64),
    Months(i64),
    Years(i64),
}

impl fmt::Display for TimeUntilLiquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeUntilLiquidity::Days(n) => write!(f, "{} days", n),
            TimeUntilLiquidity::Months(n) => write!(f, "{} months", n),
            TimeUntilLiquidity::Years(n) => write!(f, "{} years", n),
        }
    }
}

/// Buckets the distance to a future liquidity date the way the asset rows
/// display it: days up to a month out, then whole months, then whole years.
/// Returns `None` for past or same-day dates.
pub fn time_until(date: NaiveDate, today: NaiveDate) -> Option<TimeUntilLiquidity> {
    let days = (date - today).num_days();
    if days <= 0 {
        return None;
    }
    if days <= 31 {
        return Some(TimeUntilLiquidity::Days(days));
    }
    let months = whole_months_between(today, date);
    if months > 12 {
        Some(TimeUntilLiquidity::Years(months / 12))
    } else {
        Some(TimeUntilLiquidity::Months(months))
    }
}

/// Whole calendar months from `from` to `to` (`to` >= `from`).
fn whole_months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    let mut months =
        (to.year() as i64 - from.year() as i64) * 12 + (to.month() as i64 - from.month() as i64);
    if to.day() < from.day() {
        months -= 1;
    }
    months.max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn time_until_buckets() {
        let today = d(2024, 1, 15);
        assert_eq!(time_until(d(2024, 1, 20), today), Some(TimeUntilLiquidity::Days(5)));
        assert_eq!(time_until(d(2024, 4, 15), today), Some(TimeUntilLiquidity::Months(3)));
        assert_eq!(time_until(d(2026, 6, 15), today), Some(TimeUntilLiquidity::Years(2)));
        assert_eq!(time_until(d(2024, 1, 15), today), None);
        assert_eq!(time_until(d(2023, 12, 1), today), None);
    }

    #[test]
    fn whole_months_ignore_partial_months() {
        assert_eq!(whole_months_between(d(2024, 1, 15), d(2024, 3, 14)), 1);
        assert_eq!(whole_months_between(d(2024, 1, 15), d(2024, 3, 15)), 2);
    }

    #[test]
    fn timeline_point_label_format() {
        let point = TimelinePoint {
            month: d(2026, 6, 1),
            cumulative_liquid_value: Decimal::ZERO,
        };
        assert_eq!(point.label(), "Jun 26");
    }
}
