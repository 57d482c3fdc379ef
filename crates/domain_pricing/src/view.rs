//! Read-only price projection for presentation layers

use core_kernel::Currency;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::price::Price;

/// A flattened, read-only snapshot of a price for templates and APIs
///
/// The serialized property set is fixed to the six keys rendering code is
/// allowed to touch: `currency`, `default`, `tax`, `tax_rate`, `with_tax`
/// and `without_tax`. The lower-bound marker `is_price_from` ("from 99 Kč")
/// is a rendering helper and stays out of the serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceView {
    pub currency: Currency,
    pub default: Decimal,
    pub tax: Decimal,
    /// `None` when the underlying price carries a mixed rate
    pub tax_rate: Option<Decimal>,
    pub with_tax: Decimal,
    pub without_tax: Decimal,
    #[serde(skip)]
    pub is_price_from: bool,
}

impl PriceView {
    /// Creates a view over the given price
    pub fn new(price: &Price) -> Self {
        Self {
            currency: price.currency(),
            default: price.default_price(),
            tax: price.tax(),
            tax_rate: price.tax_rate().as_percentage(),
            with_tax: price.with_tax(),
            without_tax: price.without_tax(),
            is_price_from: false,
        }
    }

    /// Marks the view as a lower bound ("from 99 Kč")
    pub fn with_price_from(mut self, is_price_from: bool) -> Self {
        self.is_price_from = is_price_from;
        self
    }
}

impl From<&Price> for PriceView {
    fn from(price: &Price) -> Self {
        Self::new(price)
    }
}

impl fmt::Display for PriceView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.default)
    }
}
