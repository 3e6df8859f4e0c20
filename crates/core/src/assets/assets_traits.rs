use super::assets_model::Asset;
use crate::errors::Result;
use async_trait::async_trait;

/// Trait defining the contract for asset repository operations.
///
/// Implemented by the hosting application against the remote entity store.
#[async_trait]
pub trait AssetRepositoryTrait: Send + Sync {
    /// Returns all assets visible to the current user.
    async fn list(&self) -> Result<Vec<Asset>>;
}
