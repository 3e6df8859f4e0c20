//! Economic data point entity, as stored by the remote store.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Currencies the system keeps a store-wide rate for.
pub const SYSTEM_RATE_CURRENCIES: &[&str] = &["USD", "EUR"];

/// Builds the indicator key for a currency's rate into ILS,
/// e.g. `usd_ils_exchange_rate`.
pub fn rate_indicator(currency: &str) -> String {
    format!("{}_ils_exchange_rate", currency.to_lowercase())
}

/// A single indicator reading from the remote store.
///
/// The `data` payload is schemaless JSON; exchange-rate indicators carry the
/// rate under `data.current_value`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicDataPoint {
    pub id: String,
    pub indicator_type: String,
    #[serde(default)]
    pub data: Value,
    pub last_updated: DateTime<Utc>,
}

impl EconomicDataPoint {
    /// Digs `current_value` out of the JSON payload.
    ///
    /// Accepts both numeric and string encodings; anything else reads as
    /// absent rather than erroring, matching the store's loose typing.
    pub fn current_value(&self) -> Option<Decimal> {
        match self.data.get("current_value")? {
            Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
            Value::String(s) => Decimal::from_str(s).ok(),
            _ => None,
        }
    }
}
