//! Service building the dashboard's multi-currency portfolio summary.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;

use super::summary_model::{CategorySummary, ConvertedAsset, PortfolioSummary};
use crate::assets::{AssetCategory, AssetRepositoryTrait};
use crate::constants::{BASE_CURRENCY, DECIMAL_PRECISION};
use crate::economic_data::RatesServiceTrait;
use crate::errors::Result;
use crate::fx::convert;

/// Trait defining the contract for the portfolio summary service.
#[async_trait]
pub trait SummaryServiceTrait: Send + Sync {
    /// Aggregates all convertible assets into per-category ILS totals.
    /// Assets with no usable rate are excluded from totals entirely; they
    /// remain visible in their native currency elsewhere.
    async fn get_portfolio_summary(&self) -> Result<PortfolioSummary>;
}

pub struct SummaryService {
    asset_repository: Arc<dyn AssetRepositoryTrait>,
    rates_service: Arc<dyn RatesServiceTrait>,
}

impl SummaryService {
    pub fn new(
        asset_repository: Arc<dyn AssetRepositoryTrait>,
        rates_service: Arc<dyn RatesServiceTrait>,
    ) -> Self {
        Self {
            asset_repository,
            rates_service,
        }
    }
}

#[async_trait]
impl SummaryServiceTrait for SummaryService {
    async fn get_portfolio_summary(&self) -> Result<PortfolioSummary> {
        let (assets, rates) = futures::try_join!(
            self.asset_repository.list(),
            self.rates_service.get_system_rates()
        )?;

        let mut total_net_worth = Decimal::ZERO;
        let mut by_category: HashMap<AssetCategory, CategorySummary> = HashMap::new();

        for asset in assets {
            let conversion = convert(&asset, &rates);
            if !conversion.converted {
                warn!(
                    "No rate for {} asset {}; excluded from summary totals",
                    asset.currency, asset.id
                );
                continue;
            }

            let entry = by_category
                .entry(asset.category)
                .or_insert_with(|| CategorySummary {
                    category: asset.category,
                    total_value: Decimal::ZERO,
                    count: 0,
                    assets: Vec::new(),
                });

            entry.total_value += conversion.value_in_ils;
            entry.count += 1;
            entry.assets.push(ConvertedAsset {
                description: asset.description,
                original_value: asset.current_value,
                currency: asset.currency,
                exchange_rate: conversion.rate,
                value_in_ils: conversion.value_in_ils,
            });
            total_net_worth += conversion.value_in_ils;
        }

        let mut categories: Vec<CategorySummary> = by_category
            .into_values()
            .map(|mut c| {
                c.total_value = c.total_value.round_dp(DECIMAL_PRECISION);
                c
            })
            .collect();
        categories.sort_by(|a, b| b.total_value.cmp(&a.total_value));

        debug!(
            "Portfolio summary: {} categories, net worth {}",
            categories.len(),
            total_net_worth
        );

        Ok(PortfolioSummary {
            total_net_worth: total_net_worth.round_dp(DECIMAL_PRECISION),
            currency: BASE_CURRENCY.to_string(),
            categories,
        })
    }
}
