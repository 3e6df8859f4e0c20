//! FX module - system rates and conversion into the ILS base currency.

mod currency_converter;
mod fx_model;

pub use currency_converter::convert;
pub use fx_model::{Conversion, SystemRates};
