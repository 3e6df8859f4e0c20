use super::economic_data_model::EconomicDataPoint;
use crate::errors::Result;
use async_trait::async_trait;

/// Trait defining the contract for economic-data repository operations.
#[async_trait]
pub trait EconomicDataRepositoryTrait: Send + Sync {
    /// Returns the most recent data point for an indicator, or `None` if the
    /// store holds no reading for it.
    async fn get_latest(&self, indicator_type: &str) -> Result<Option<EconomicDataPoint>>;
}
