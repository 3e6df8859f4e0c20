//! Liquidity page pipeline: fetch, classify, convert, partition, chart.

use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;

use super::classifier::classify;
use super::liquidity_model::{ClassifiedAsset, LiquidityOverview};
use super::timeline::TimelineBuilder;
use crate::assets::AssetRepositoryTrait;
use crate::constants::{BASE_CURRENCY, DECIMAL_PRECISION};
use crate::economic_data::RatesServiceTrait;
use crate::errors::Result;
use crate::fx::convert;

/// Trait defining the contract for the liquidity service.
#[async_trait]
pub trait LiquidityServiceTrait: Send + Sync {
    /// Runs the full pipeline for the given date. Idempotent and cheap;
    /// callers simply rerun it whenever assets or rates refresh.
    async fn get_liquidity_overview(&self, today: NaiveDate) -> Result<LiquidityOverview>;
}

/// Service computing the liquidity overview from an immutable snapshot of
/// the asset list and system rates.
pub struct LiquidityService {
    asset_repository: Arc<dyn AssetRepositoryTrait>,
    rates_service: Arc<dyn RatesServiceTrait>,
    timeline_builder: TimelineBuilder,
}

impl LiquidityService {
    pub fn new(
        asset_repository: Arc<dyn AssetRepositoryTrait>,
        rates_service: Arc<dyn RatesServiceTrait>,
        timeline_builder: TimelineBuilder,
    ) -> Self {
        Self {
            asset_repository,
            rates_service,
            timeline_builder,
        }
    }
}

#[async_trait]
impl LiquidityServiceTrait for LiquidityService {
    async fn get_liquidity_overview(&self, today: NaiveDate) -> Result<LiquidityOverview> {
        let (assets, rates) = futures::try_join!(
            self.asset_repository.list(),
            self.rates_service.get_system_rates()
        )?;

        debug!(
            "Classifying {} assets against {} system rates",
            assets.len(),
            rates.len()
        );

        let mut classified: Vec<ClassifiedAsset> = assets
            .into_iter()
            .map(|asset| {
                let status = classify(&asset, today);
                let conversion = convert(&asset, &rates);
                if !conversion.converted && asset.currency != BASE_CURRENCY {
                    warn!(
                        "No rate for {} asset {}; excluded from ILS totals",
                        asset.currency, asset.id
                    );
                }
                ClassifiedAsset {
                    status,
                    value_in_ils: conversion.value_in_ils,
                    converted: conversion.converted,
                    asset,
                }
            })
            .collect();

        // Dated assets first, soonest date first; undated keep their order.
        classified.sort_by(|a, b| match (a.status.liquidity_date, b.status.liquidity_date) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        let timeline = self.timeline_builder.build(&classified, today);

        let (liquid_now, rest): (Vec<_>, Vec<_>) =
            classified.into_iter().partition(|a| a.status.is_liquid_now);

        let upcoming: Vec<ClassifiedAsset> = rest
            .into_iter()
            .filter(|a| a.status.liquidity_date.is_some_and(|d| d > today))
            .collect();

        let total_liquid_value: Decimal = liquid_now.iter().map(|a| a.value_in_ils).sum();

        Ok(LiquidityOverview {
            liquid_now,
            upcoming,
            total_liquid_value: total_liquid_value.round_dp(DECIMAL_PRECISION),
            timeline,
        })
    }
}
