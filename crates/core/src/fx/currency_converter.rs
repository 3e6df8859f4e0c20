use super::fx_model::{Conversion, SystemRates};
use crate::assets::Asset;
use crate::constants::BASE_CURRENCY;
use rust_decimal::Decimal;

/// Converts an asset's stated value into ILS.
///
/// Rate precedence:
/// 1. ILS assets pass through unchanged.
/// 2. A per-asset manual `exchange_rate`, when present and positive.
/// 3. The system-wide latest-known rate for the asset's currency.
///
/// When no usable rate exists the conversion fails softly: zero ILS value,
/// `converted = false`. Pure function over its inputs.
pub fn convert(asset: &Asset, system_rates: &SystemRates) -> Conversion {
    if asset.currency == BASE_CURRENCY {
        return Conversion {
            value_in_ils: asset.current_value,
            converted: true,
            rate: None,
        };
    }

    let rate = match asset.exchange_rate {
        Some(manual) if manual > Decimal::ZERO => Some(manual),
        _ => system_rates
            .get(&asset.currency)
            .filter(|r| *r > Decimal::ZERO),
    };

    match rate {
        Some(rate) => Conversion {
            value_in_ils: asset.current_value * rate,
            converted: true,
            rate: Some(rate),
        },
        None => Conversion::failed(),
    }
}
