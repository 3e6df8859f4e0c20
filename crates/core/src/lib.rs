//! Hon Core - Domain entities, services, and traits.
//!
//! This crate contains the computational core of the Hon net-worth tracker:
//! multi-currency valuation against the ILS base currency and the liquidity
//! classification/timeline engine. It is store-agnostic and defines traits
//! that are implemented by the hosting application against the remote
//! entity store.

pub mod assets;
pub mod constants;
pub mod economic_data;
pub mod errors;
pub mod fx;
pub mod liquidity;
pub mod portfolio;

// Re-export common types from the asset and liquidity modules
pub use assets::*;
pub use liquidity::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
