//! Liquidity module - classification rules, timeline, and the page pipeline.

mod classifier;
mod liquidity_model;
mod liquidity_service;
mod timeline;

#[cfg(test)]
mod timeline_tests;

// Re-export the public interface
pub use classifier::classify;
pub use liquidity_model::{
    time_until, ClassifiedAsset, LiquidityOverview, LiquidityReason, LiquidityStatus,
    TimeUntilLiquidity, TimelinePoint,
};
pub use liquidity_service::{LiquidityService, LiquidityServiceTrait};
pub use timeline::TimelineBuilder;
