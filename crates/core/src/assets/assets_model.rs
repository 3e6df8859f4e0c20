//! Asset domain models.
//!
//! `Asset` mirrors the record shape of the remote entity store: field names
//! are snake_case and all date fields arrive as strings, since the store
//! enforces no schema. Parsing is lenient throughout; a malformed date
//! behaves exactly like an absent one.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Well-known `asset_type_key` values that carry liquidity semantics.
/// Other keys exist in the store but only matter for display.
pub mod asset_type_keys {
    pub const CHECKING: &str = "checking";
    pub const FIXED_DEPOSIT: &str = "fixed_deposit";
    pub const SAVINGS_PLAN: &str = "savings_plan";
    pub const CHILD_SAVINGS: &str = "child_savings";
    pub const STUDY_FUND_GENERAL: &str = "study_fund_general";

    /// Deposit-style products that share the end-date/exit-station/lock rules.
    pub const DEPOSIT_KEYS: &[&str] = &[FIXED_DEPOSIT, SAVINGS_PLAN, CHILD_SAVINGS];
}

/// Top-level holding category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    FinancialInstruments,
    SavingsDeposits,
    PensionInsurance,
    StudyFunds,
    AlternativeAssets,
    RealEstate,
    #[default]
    #[serde(other)]
    Other,
}

impl AssetCategory {
    /// Stable key string, as stored by the remote store.
    pub fn key(&self) -> &'static str {
        match self {
            AssetCategory::FinancialInstruments => "financial_instruments",
            AssetCategory::SavingsDeposits => "savings_deposits",
            AssetCategory::PensionInsurance => "pension_insurance",
            AssetCategory::StudyFunds => "study_funds",
            AssetCategory::AlternativeAssets => "alternative_assets",
            AssetCategory::RealEstate => "real_estate",
            AssetCategory::Other => "other",
        }
    }

    /// Display name for breakdowns and chart legends.
    pub fn display_name(&self) -> &'static str {
        match self {
            AssetCategory::FinancialInstruments => "Financial Instruments",
            AssetCategory::SavingsDeposits => "Savings & Deposits",
            AssetCategory::PensionInsurance => "Pension & Insurance",
            AssetCategory::StudyFunds => "Study Funds",
            AssetCategory::AlternativeAssets => "Alternative Assets",
            AssetCategory::RealEstate => "Real Estate",
            AssetCategory::Other => "Other",
        }
    }

    /// All categories, in canonical display order.
    pub fn all() -> &'static [AssetCategory] {
        &[
            AssetCategory::FinancialInstruments,
            AssetCategory::SavingsDeposits,
            AssetCategory::PensionInsurance,
            AssetCategory::StudyFunds,
            AssetCategory::AlternativeAssets,
            AssetCategory::RealEstate,
        ]
    }
}

/// Optional liquidity overrides captured by the financial-instrument,
/// alternative-asset, and real-estate forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LiquidityData {
    pub is_immediately_liquid: Option<bool>,
    pub release_date: Option<String>,
    /// Real-estate only flag (rent flows into a liquid account).
    /// Carried for the store round-trip; never affects classification.
    pub rent_to_liquid_account: Option<bool>,
}

/// A holding record, consumed read-only by the core.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Asset {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: AssetCategory,
    #[serde(default)]
    pub asset_type_key: String,
    /// Value denominated in `currency`.
    #[serde(default)]
    pub current_value: Decimal,
    #[serde(default)]
    pub currency: String,
    /// Manually supplied rate to ILS; wins over the system rate when positive.
    pub exchange_rate: Option<Decimal>,
    pub exchange_rate_date: Option<String>,
    pub liquidity_data: Option<LiquidityData>,
    pub open_date: Option<String>,
    pub end_date: Option<String>,
    pub lock_end_date: Option<String>,
    pub first_exit_station_date: Option<String>,
    /// Recurring exit-station cadence, captured by the savings form.
    /// Classification only evaluates the first station; these fields are
    /// persisted but not consulted (see DESIGN.md).
    pub exit_station_interval_value: Option<i64>,
    pub exit_station_interval_unit: Option<String>,
}

impl Asset {
    pub fn open_date(&self) -> Option<NaiveDate> {
        parse_date(self.open_date.as_deref())
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        parse_date(self.end_date.as_deref())
    }

    pub fn lock_end_date(&self) -> Option<NaiveDate> {
        parse_date(self.lock_end_date.as_deref())
    }

    pub fn first_exit_station_date(&self) -> Option<NaiveDate> {
        parse_date(self.first_exit_station_date.as_deref())
    }

    pub fn release_date(&self) -> Option<NaiveDate> {
        parse_date(
            self.liquidity_data
                .as_ref()
                .and_then(|l| l.release_date.as_deref()),
        )
    }
}

/// Lenient date parsing for store-supplied strings.
///
/// Accepts plain ISO dates (`2024-06-01`) and RFC 3339 timestamps
/// (`2024-06-01T00:00:00Z`). Anything else is treated as absent.
pub fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = value.parse::<NaiveDate>() {
        return Some(date);
    }
    chrono::DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}
