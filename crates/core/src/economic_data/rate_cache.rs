use crate::constants::DEFAULT_RATE_CACHE_TTL_MINUTES;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use rust_decimal::Decimal;

struct CachedRate {
    rate: Decimal,
    fetched_at: DateTime<Utc>,
}

/// Injected TTL cache for system exchange rates.
///
/// Owned by whoever constructs the services and shared via `Arc`; there is no
/// module-level cache state. Expired entries are evicted lazily on read.
pub struct RateCache {
    ttl: Duration,
    entries: DashMap<String, CachedRate>,
}

impl RateCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: DashMap::new(),
        }
    }

    /// Returns the cached rate for a currency if it is still fresh.
    pub fn get(&self, currency: &str) -> Option<Decimal> {
        let entry = self.entries.get(currency)?;
        if Utc::now() - entry.fetched_at < self.ttl {
            return Some(entry.rate);
        }
        drop(entry);
        self.entries.remove(currency);
        None
    }

    pub fn insert(&self, currency: impl Into<String>, rate: Decimal) {
        self.entries.insert(
            currency.into(),
            CachedRate {
                rate,
                fetched_at: Utc::now(),
            },
        );
    }

    /// Drops all cached rates, forcing the next read through to the store.
    pub fn invalidate_all(&self) {
        self.entries.clear();
    }
}

impl Default for RateCache {
    fn default() -> Self {
        Self::new(Duration::minutes(DEFAULT_RATE_CACHE_TTL_MINUTES))
    }
}
