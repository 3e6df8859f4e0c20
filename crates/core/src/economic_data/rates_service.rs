//! Service producing the system-wide exchange rates consumed by conversion.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;

use super::economic_data_model::{rate_indicator, SYSTEM_RATE_CURRENCIES};
use super::economic_data_traits::EconomicDataRepositoryTrait;
use super::rate_cache::RateCache;
use crate::errors::Result;
use crate::fx::SystemRates;

/// Trait defining the contract for the system-rate service.
#[async_trait]
pub trait RatesServiceTrait: Send + Sync {
    /// Builds the latest-known rates into ILS for the supported currencies.
    /// A currency with no usable reading is simply absent from the result.
    async fn get_system_rates(&self) -> Result<SystemRates>;
}

/// Fetches the newest exchange-rate data point per supported currency,
/// going through the injected TTL cache first.
pub struct RatesService {
    repository: Arc<dyn EconomicDataRepositoryTrait>,
    cache: Arc<RateCache>,
}

impl RatesService {
    pub fn new(repository: Arc<dyn EconomicDataRepositoryTrait>, cache: Arc<RateCache>) -> Self {
        Self { repository, cache }
    }

    async fn fetch_rate(&self, currency: &str) -> Result<Option<Decimal>> {
        if let Some(rate) = self.cache.get(currency) {
            return Ok(Some(rate));
        }

        let indicator = rate_indicator(currency);
        let Some(point) = self.repository.get_latest(&indicator).await? else {
            debug!("No data point for indicator {}", indicator);
            return Ok(None);
        };

        match point.current_value() {
            Some(rate) if rate > Decimal::ZERO => {
                self.cache.insert(currency, rate);
                Ok(Some(rate))
            }
            other => {
                warn!(
                    "Ignoring unusable rate {:?} from indicator {}",
                    other, indicator
                );
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl RatesServiceTrait for RatesService {
    async fn get_system_rates(&self) -> Result<SystemRates> {
        let mut rates = SystemRates::new();
        for currency in SYSTEM_RATE_CURRENCIES {
            if let Some(rate) = self.fetch_rate(currency).await? {
                rates.insert(*currency, rate);
            }
        }
        debug!("System rates resolved for {} currencies", rates.len());
        Ok(rates)
    }
}
