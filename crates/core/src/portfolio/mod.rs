//! Portfolio module - summary aggregation over converted asset values.

mod summary_model;
mod summary_service;


// Re-export the public interface
pub use summary_model::{AllocationSlice, CategorySummary, ConvertedAsset, PortfolioSummary};
pub use summary_service::{SummaryService, SummaryServiceTrait};
