//! Pricing Domain - Tax-Aware Price Arithmetic
//!
//! This crate implements the price value object used across catalog, cart
//! and invoicing flows: one nominal amount plus a tax rate, expanded into a
//! consistent (net, tax, gross) triple in a concrete currency.
//!
//! # Derivation Rules
//!
//! A price is defined on one side of the tax split and derives the other:
//! - Gross-denominated: the tax is extracted with the 4-place coefficient
//!   `rate / (100 + rate)`, the net amount is the remainder
//! - Net-denominated: the tax is `rate` percent added on top
//!
//! All amounts are rounded to the currency scale, with midpoints away from
//! zero.
//!
//! # Mixed Totals
//!
//! Sums over items with different tax rates carry [`TaxRate::Mixed`]: the
//! (net, tax, gross) triple stays exact while no single percentage
//! describes it. Operations that need a concrete rate reject mixed prices.
//!
//! # Example
//!
//! ```rust,ignore
//! use core_kernel::Currency;
//! use domain_pricing::{DiscountType, Price};
//!
//! let unit = Price::new(dec!(249.9), false, dec!(21), Currency::CZK)?;
//! let line = unit.multiply(dec!(3));
//! let discounted = line.discount(dec!(10), DiscountType::Percentage)?;
//!
//! let view = discounted.to_view().with_price_from(true);
//! ```

pub mod error;
pub mod price;
pub mod view;

pub use error::{ErrorKind, PricingError};
pub use price::{DiscountType, Price, TaxRate};
pub use view::PriceView;
