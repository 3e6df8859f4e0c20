//! Cumulative liquidity timeline.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;

use super::liquidity_model::{ClassifiedAsset, TimelinePoint};
use crate::constants::{DECIMAL_PRECISION, DEFAULT_TIMELINE_HORIZON_MONTHS};

/// Builds the monthly cumulative-liquid-value series for the liquidity chart.
///
/// The horizon is the number of future months walked; events beyond it are
/// not represented. Flat stretches collapse: a month emits a point only when
/// the cumulative value changes, and all assets maturing in the same month
/// fold into that month's single point.
#[derive(Debug, Clone, Copy)]
pub struct TimelineBuilder {
    horizon_months: u32,
}

impl TimelineBuilder {
    pub fn with_horizon(horizon_months: u32) -> Self {
        Self { horizon_months }
    }

    pub fn horizon_months(&self) -> u32 {
        self.horizon_months
    }

    /// Produces the forward-ordered series. Recomputed fresh on every call;
    /// never mutates its input.
    pub fn build(&self, assets: &[ClassifiedAsset], today: NaiveDate) -> Vec<TimelinePoint> {
        let total_liquid: Decimal = assets
            .iter()
            .filter(|a| a.status.is_liquid_now)
            .map(|a| a.value_in_ils)
            .sum();

        let current_month = start_of_month(today);
        let mut points = Vec::new();
        let mut cumulative = Decimal::ZERO;

        // Seed with today's liquid value; this is also the fallback point
        // when no future event lands inside the horizon.
        if total_liquid > Decimal::ZERO {
            cumulative = total_liquid;
            points.push(TimelinePoint {
                month: current_month,
                cumulative_liquid_value: cumulative.round_dp(DECIMAL_PRECISION),
            });
        }

        for offset in 1..=self.horizon_months {
            let month = current_month + Months::new(offset);
            let newly_liquid: Decimal = assets
                .iter()
                .filter(|a| !a.status.is_liquid_now)
                .filter(|a| {
                    a.status
                        .liquidity_date
                        .is_some_and(|d| start_of_month(d) == month)
                })
                .map(|a| a.value_in_ils)
                .sum();

            if !newly_liquid.is_zero() {
                cumulative += newly_liquid;
                points.push(TimelinePoint {
                    month,
                    cumulative_liquid_value: cumulative.round_dp(DECIMAL_PRECISION),
                });
            }
        }

        points
    }
}

impl Default for TimelineBuilder {
    fn default() -> Self {
        Self::with_horizon(DEFAULT_TIMELINE_HORIZON_MONTHS)
    }
}

fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
