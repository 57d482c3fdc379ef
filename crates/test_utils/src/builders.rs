//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use core_kernel::Currency;
use domain_pricing::Price;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::TaxRateFixtures;

/// Builder for constructing test prices
pub struct TestPriceBuilder {
    amount: Decimal,
    includes_tax: bool,
    tax_rate: Decimal,
    currency: Currency,
}

impl Default for TestPriceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPriceBuilder {
    /// Creates a new builder with default values (100 net at 21% in CZK)
    pub fn new() -> Self {
        Self {
            amount: dec!(100),
            includes_tax: false,
            tax_rate: TaxRateFixtures::standard(),
            currency: Currency::CZK,
        }
    }

    /// Creates a builder denominated with tax included
    pub fn gross() -> Self {
        Self::new().with_includes_tax(true)
    }

    /// Creates a builder denominated without tax
    pub fn net() -> Self {
        Self::new()
    }

    /// Sets the nominal amount
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// Sets whether the nominal amount includes tax
    pub fn with_includes_tax(mut self, includes_tax: bool) -> Self {
        self.includes_tax = includes_tax;
        self
    }

    /// Sets the tax rate
    pub fn with_tax_rate(mut self, tax_rate: Decimal) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    /// Sets the currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Builds the test price
    pub fn build(self) -> Price {
        Price::new(self.amount, self.includes_tax, self.tax_rate, self.currency)
            .expect("Test price parameters must be valid")
    }
}

/// Builder for constructing cart-style price totals
///
/// Each line is a unit price times a quantity; the total is the running
/// sum of all lines, so totals over heterogeneous rates come out mixed
/// exactly as they do in checkout code.
pub struct TestCartBuilder {
    currency: Currency,
    lines: Vec<Price>,
}

impl Default for TestCartBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCartBuilder {
    /// Creates a new empty cart in CZK
    pub fn new() -> Self {
        Self {
            currency: Currency::CZK,
            lines: Vec::new(),
        }
    }

    /// Sets the cart currency (affects lines added afterwards)
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Adds a line of `quantity` units at a net unit amount
    pub fn with_line(mut self, unit_amount: Decimal, tax_rate: Decimal, quantity: Decimal) -> Self {
        let unit = Price::new(unit_amount, false, tax_rate, self.currency)
            .expect("Cart line parameters must be valid");
        self.lines.push(unit.multiply(quantity));
        self
    }

    /// Adds a line of `quantity` units at a gross unit amount
    pub fn with_gross_line(
        mut self,
        unit_amount: Decimal,
        tax_rate: Decimal,
        quantity: Decimal,
    ) -> Self {
        let unit = Price::new(unit_amount, true, tax_rate, self.currency)
            .expect("Cart line parameters must be valid");
        self.lines.push(unit.multiply(quantity));
        self
    }

    /// Returns the line prices
    pub fn lines(&self) -> &[Price] {
        &self.lines
    }

    /// Sums all lines into a total price
    pub fn total(&self) -> Price {
        self.lines
            .iter()
            .fold(Price::zero(self.currency), |total, line| {
                total
                    .checked_add(line)
                    .expect("Cart lines share one currency")
            })
    }
}
