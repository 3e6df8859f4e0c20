//! Economic data module - indicator entities and the system-rate service.

mod economic_data_model;
mod economic_data_traits;
mod rate_cache;
mod rates_service;


// Re-export the public interface
pub use economic_data_model::{
    rate_indicator, EconomicDataPoint, SYSTEM_RATE_CURRENCIES,
};
pub use economic_data_traits::EconomicDataRepositoryTrait;
pub use rate_cache::RateCache;
pub use rates_service::{RatesService, RatesServiceTrait};
