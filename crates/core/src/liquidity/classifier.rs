//! Liquidity-date classification.
//!
//! A rule-ordered decision procedure: rules are tried in a fixed priority
//! order and the first match wins. Each rule owns one category/type block;
//! once a block matches, evaluation descends only within it and never falls
//! back to a later rule. Malformed dates behave as absent, so classification
//! cannot fail.

use chrono::{Datelike, NaiveDate};

use super::liquidity_model::{LiquidityReason, LiquidityStatus};
use crate::assets::{asset_type_keys, Asset, AssetCategory};
use crate::constants::STUDY_FUND_VESTING_YEARS;

type Rule = fn(&Asset, NaiveDate) -> Option<LiquidityStatus>;

/// Priority-ordered rule table. Order is behavior: a checking account inside
/// `savings_deposits` must hit the checking rule, not the deposit rules.
const RULES: &[Rule] = &[
    checking_account,
    financial_instruments,
    alternative_assets,
    real_estate,
    deposit_products,
    study_funds,
];

/// Classifies one asset at `today`. Total over any input shape; the trailing
/// default covers everything the table leaves unmatched (e.g. pension rows).
pub fn classify(asset: &Asset, today: NaiveDate) -> LiquidityStatus {
    RULES
        .iter()
        .find_map(|rule| rule(asset, today))
        .unwrap_or_else(|| LiquidityStatus::undetermined(LiquidityReason::Unclassified))
}

/// Rule 1: checking accounts are always liquid.
fn checking_account(asset: &Asset, today: NaiveDate) -> Option<LiquidityStatus> {
    (asset.asset_type_key == asset_type_keys::CHECKING).then(|| LiquidityStatus {
        liquidity_date: Some(today),
        is_liquid_now: true,
        reason: LiquidityReason::CheckingAccount,
    })
}

/// Rule 2: financial instruments default to liquid unless a release date
/// says otherwise.
fn financial_instruments(asset: &Asset, today: NaiveDate) -> Option<LiquidityStatus> {
    if asset.category != AssetCategory::FinancialInstruments {
        return None;
    }
    if let Some(status) = scheduled_release(asset, today) {
        return Some(status);
    }
    Some(LiquidityStatus {
        liquidity_date: Some(today),
        is_liquid_now: true,
        reason: LiquidityReason::LiquidInstrument,
    })
}

/// Rule 3: alternative assets default to illiquid; an explicit immediate-liquid
/// flag or a release date overrides.
fn alternative_assets(asset: &Asset, today: NaiveDate) -> Option<LiquidityStatus> {
    if asset.category != AssetCategory::AlternativeAssets {
        return None;
    }
    if let Some(status) = scheduled_release(asset, today) {
        return Some(status);
    }
    let immediately_liquid = asset
        .liquidity_data
        .as_ref()
        .and_then(|l| l.is_immediately_liquid)
        .unwrap_or(false);
    Some(LiquidityStatus {
        liquidity_date: None,
        is_liquid_now: immediately_liquid,
        reason: if immediately_liquid {
            LiquidityReason::ImmediatelyLiquid
        } else {
            LiquidityReason::NoReleaseDate
        },
    })
}

/// Rule 4: real estate is never counted as liquid.
fn real_estate(asset: &Asset, _today: NaiveDate) -> Option<LiquidityStatus> {
    (asset.category == AssetCategory::RealEstate)
        .then(|| LiquidityStatus::undetermined(LiquidityReason::RealEstate))
}

/// Rule 5: deposit products (fixed deposits, savings plans, child savings).
/// Precedence within the block: end date, then first exit station, then lock
/// end. Only the first exit station is evaluated; recurring stations are a
/// documented gap (DESIGN.md).
fn deposit_products(asset: &Asset, today: NaiveDate) -> Option<LiquidityStatus> {
    if !asset_type_keys::DEPOSIT_KEYS.contains(&asset.asset_type_key.as_str()) {
        return None;
    }
    if let Some(end) = asset.end_date() {
        return Some(LiquidityStatus::dated(end, today, LiquidityReason::MaturityDate));
    }
    if let Some(station) = asset.first_exit_station_date() {
        let reason = if station <= today {
            LiquidityReason::ExitStationPassed
        } else {
            LiquidityReason::FutureExitStation
        };
        return Some(LiquidityStatus::dated(station, today, reason));
    }
    if let Some(lock_end) = asset.lock_end_date() {
        return Some(LiquidityStatus::dated(lock_end, today, LiquidityReason::LockEnd));
    }
    Some(LiquidityStatus::undetermined(LiquidityReason::NoClearDate))
}

/// Rule 6: study funds vest six years from opening; a manual end date
/// overrides the automatic calculation.
fn study_funds(asset: &Asset, today: NaiveDate) -> Option<LiquidityStatus> {
    if asset.category != AssetCategory::StudyFunds
        || asset.asset_type_key != asset_type_keys::STUDY_FUND_GENERAL
    {
        return None;
    }
    if let Some(end) = asset.end_date() {
        return Some(LiquidityStatus::dated(end, today, LiquidityReason::ManualRelease));
    }
    if let Some(opened) = asset.open_date() {
        let vested = add_years(opened, STUDY_FUND_VESTING_YEARS);
        return Some(LiquidityStatus::dated(
            vested,
            today,
            LiquidityReason::SixYearsFromOpening,
        ));
    }
    Some(LiquidityStatus::undetermined(LiquidityReason::NoOpeningDate))
}

/// Shared branch for the explicit liquidity override: liquid flagged off and
/// a parseable release date present.
fn scheduled_release(asset: &Asset, today: NaiveDate) -> Option<LiquidityStatus> {
    let data = asset.liquidity_data.as_ref()?;
    if data.is_immediately_liquid != Some(false) {
        return None;
    }
    let release = asset.release_date()?;
    Some(LiquidityStatus::dated(
        release,
        today,
        LiquidityReason::ScheduledRelease,
    ))
}

/// Calendar-year addition; Feb 29 openings clamp to Feb 28 in non-leap years.
fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(date)
}
