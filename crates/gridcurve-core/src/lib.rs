//! # gridcurve Core
//!
//! Domain types shared by the gridcurve crates.
//!
//! - **Types**: `PricePoint`, `PriceTable`, `Currency`, `Provider`, `Product`
//! - **Errors**: [`CoreError`] for invalid points, tables and identifiers
//!
//! ## Example
//!
//! ```rust
//! use gridcurve_core::prelude::*;
//!
//! let table = PriceTable::from_pairs([(0.0, 90.0), (1.0, 92.0), (2.0, 94.0)]).unwrap();
//! assert_eq!(table.len(), 3);
//! assert_eq!(table.first().map(|p| p.price), Some(90.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        Currency, PricePoint, PriceSummary, PriceTable, Product, Provider,
    };
}

pub use error::{CoreError, CoreResult};
pub use types::{Currency, PricePoint, PriceSummary, PriceTable, Product, Provider};
