//! Domain types for power prices.

mod currency;
mod price_point;
mod price_table;
mod product;
mod provider;

pub use currency::Currency;
pub use price_point::PricePoint;
pub use price_table::{PriceSummary, PriceTable, PEAK_HOURS};
pub use product::Product;
pub use provider::Provider;
