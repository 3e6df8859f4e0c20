use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// System-wide latest-known exchange rates into ILS, keyed by currency code.
///
/// Produced from the most recent economic data point per supported currency;
/// only positive rates are admitted, so a present entry is always usable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemRates(HashMap<String, Decimal>);

impl SystemRates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, currency: &str) -> Option<Decimal> {
        self.0.get(currency).copied()
    }

    pub fn insert(&mut self, currency: impl Into<String>, rate: Decimal) {
        self.0.insert(currency.into(), rate);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, Decimal)> for SystemRates {
    fn from_iter<T: IntoIterator<Item = (String, Decimal)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Outcome of converting one asset's value into ILS.
///
/// Conversion never errors; an unconvertible amount is reported as
/// `converted = false` with a zero ILS value, and the asset is then excluded
/// from ILS-denominated totals while staying visible in its own currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    #[serde(rename = "valueInILS")]
    pub value_in_ils: Decimal,
    pub converted: bool,
    /// The rate actually applied; `None` for ILS pass-through and failures.
    pub rate: Option<Decimal>,
}

impl Conversion {
    pub fn failed() -> Self {
        Self {
            value_in_ils: Decimal::ZERO,
            converted: false,
            rate: None,
        }
    }
}
