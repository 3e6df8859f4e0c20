/// Reporting currency all portfolio totals are denominated in
pub const BASE_CURRENCY: &str = "ILS";

/// Decimal precision for valuation calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Default number of future months covered by the liquidity timeline
pub const DEFAULT_TIMELINE_HORIZON_MONTHS: u32 = 24;

/// Years until a study fund becomes liquid, counted from its opening date
pub const STUDY_FUND_VESTING_YEARS: i32 = 6;

/// Default time-to-live for cached system exchange rates
pub const DEFAULT_RATE_CACHE_TTL_MINUTES: i64 = 15;
