//! Portfolio summary models - the dashboard's aggregated view.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::AssetCategory;
use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// One asset's contribution to a category total, with the conversion that
/// produced it. Unconvertible assets never reach this struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertedAsset {
    pub description: String,
    pub original_value: Decimal,
    pub currency: String,
    /// Rate actually applied; `None` for ILS-denominated assets.
    pub exchange_rate: Option<Decimal>,
    #[serde(rename = "valueInILS")]
    pub value_in_ils: Decimal,
}

/// Aggregated position of one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: AssetCategory,
    pub total_value: Decimal,
    pub count: usize,
    pub assets: Vec<ConvertedAsset>,
}

/// A pie-chart slice for the allocation view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    pub category: AssetCategory,
    pub value: Decimal,
    /// Share of total net worth, 0-100 with one decimal place.
    pub percent: Decimal,
}

/// The whole-portfolio aggregation in ILS.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_net_worth: Decimal,
    /// Reporting currency the totals are denominated in.
    pub currency: String,
    /// Category summaries, largest total first.
    pub categories: Vec<CategorySummary>,
}

impl PortfolioSummary {
    /// Derives allocation slices for categories with positive value,
    /// largest first. Empty when the portfolio has no convertible value.
    pub fn allocation(&self) -> Vec<AllocationSlice> {
        if self.total_net_worth <= Decimal::ZERO {
            return Vec::new();
        }
        self.categories
            .iter()
            .filter(|c| c.total_value > Decimal::ZERO)
            .map(|c| AllocationSlice {
                category: c.category,
                value: c.total_value,
                percent: (c.total_value / self.total_net_worth * Decimal::ONE_HUNDRED)
                    .round_dp(1),
            })
            .collect()
    }

    /// Total rounded for display.
    pub fn display_total(&self) -> Decimal {
        self.total_net_worth.round_dp(DISPLAY_DECIMAL_PRECISION)
    }
}
