//! Assets module - domain models and repository traits.

mod assets_model;
mod assets_traits;


// Re-export the public interface
pub use assets_model::{parse_date, Asset, AssetCategory, LiquidityData};
pub use assets_model::asset_type_keys;
pub use assets_traits::AssetRepositoryTrait;
