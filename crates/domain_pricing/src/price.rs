//! Tax-aware price arithmetic
//!
//! This module provides the central Price value object: a tax-exclusive
//! amount, a tax amount and a tax-inclusive amount kept together, derived
//! once from a nominal amount, a tax rate and a currency. Prices are
//! immutable; every operation returns a new value.

use core_kernel::Currency;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::PricingError;
use crate::view::PriceView;

/// Decimal places kept when deriving the tax coefficient from a rate
const VAT_COEF_PRECISION: u32 = 4;

/// The portion of a gross amount that is tax, for a given percentage rate
fn tax_coefficient(rate: Decimal) -> Decimal {
    (rate / (dec!(100) + rate))
        .round_dp_with_strategy(VAT_COEF_PRECISION, RoundingStrategy::MidpointAwayFromZero)
}

/// The tax rate attached to a price
///
/// A price built from a single catalog item carries a fixed percentage.
/// A total summed over items with different rates has no single percentage
/// and carries `Mixed` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaxRate {
    /// A concrete percentage, e.g. 21 for 21% VAT
    Fixed(Decimal),
    /// The rate of a sum over heterogeneous rates
    Mixed,
}

impl TaxRate {
    /// Returns the percentage for a fixed rate, `None` for a mixed one
    pub fn as_percentage(&self) -> Option<Decimal> {
        match self {
            TaxRate::Fixed(rate) => Some(*rate),
            TaxRate::Mixed => None,
        }
    }

    /// Returns true if this is the rate of a heterogeneous sum
    pub fn is_mixed(&self) -> bool {
        matches!(self, TaxRate::Mixed)
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxRate::Fixed(rate) => write!(f, "{}%", rate),
            TaxRate::Mixed => write!(f, "mixed"),
        }
    }
}

/// Types of discounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountType {
    /// Percentage discount
    Percentage,
    /// Fixed amount discount
    FixedAmount,
}

/// A tax-aware price in a single currency
///
/// Price keeps the tax-exclusive amount, the tax and the tax-inclusive
/// amount together, derived at construction from a nominal amount and a tax
/// rate. The nominal ("default") amount and its denomination are retained,
/// so a price list keeps quoting the side it was defined on even after the
/// price has been scaled, combined or converted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Price {
    without_tax: Decimal,
    tax: Decimal,
    with_tax: Decimal,
    tax_rate: TaxRate,
    currency: Currency,
    default_price: Decimal,
    default_price_includes_tax: bool,
}

impl Price {
    /// Creates a price by deriving the tax split from a nominal amount
    ///
    /// The nominal amount is rounded to the currency scale first. When
    /// `includes_tax` is set it is taken as gross and the tax is extracted
    /// with the coefficient `rate / (100 + rate)` rounded to four places;
    /// otherwise it is taken as net and the tax is added on top. A negative
    /// tax rate is rejected.
    pub fn new(
        amount: Decimal,
        includes_tax: bool,
        tax_rate: Decimal,
        currency: Currency,
    ) -> Result<Self, PricingError> {
        if tax_rate < Decimal::ZERO {
            return Err(PricingError::NegativeTaxRate(tax_rate));
        }
        Ok(Self::derive(amount, includes_tax, tax_rate, currency))
    }

    /// Creates a zero price denominated without tax
    pub fn zero(currency: Currency) -> Self {
        Self::derive(Decimal::ZERO, false, Decimal::ZERO, currency)
    }

    /// Creates a price directly from a known gross amount and its tax portion
    ///
    /// No derivation or rounding takes place and the tax rate is recorded as
    /// mixed. This is the constructor for totals aggregated over items with
    /// heterogeneous tax rates.
    pub fn from_gross_and_tax(
        with_tax: Decimal,
        tax: Decimal,
        currency: Currency,
        includes_tax: bool,
    ) -> Self {
        let without_tax = with_tax - tax;
        Self {
            without_tax,
            tax,
            with_tax,
            tax_rate: TaxRate::Mixed,
            currency,
            default_price: if includes_tax { with_tax } else { without_tax },
            default_price_includes_tax: includes_tax,
        }
    }

    fn derive(amount: Decimal, includes_tax: bool, tax_rate: Decimal, currency: Currency) -> Self {
        let default_price = currency.round(amount);
        if includes_tax {
            let with_tax = default_price;
            let tax = currency.round(with_tax * tax_coefficient(tax_rate));
            Self {
                without_tax: with_tax - tax,
                tax,
                with_tax,
                tax_rate: TaxRate::Fixed(tax_rate),
                currency,
                default_price,
                default_price_includes_tax: includes_tax,
            }
        } else {
            let without_tax = default_price;
            let tax = currency.round(without_tax * tax_rate / dec!(100));
            Self {
                without_tax,
                tax,
                with_tax: without_tax + tax,
                tax_rate: TaxRate::Fixed(tax_rate),
                currency,
                default_price,
                default_price_includes_tax: includes_tax,
            }
        }
    }

    /// Returns the tax-exclusive amount
    pub fn without_tax(&self) -> Decimal {
        self.without_tax
    }

    /// Returns the tax amount
    pub fn tax(&self) -> Decimal {
        self.tax
    }

    /// Returns the tax-inclusive amount
    pub fn with_tax(&self) -> Decimal {
        self.with_tax
    }

    /// Returns the gross or the net amount depending on the flag
    pub fn with_or_without_tax(&self, with_tax: bool) -> Decimal {
        if with_tax {
            self.with_tax
        } else {
            self.without_tax
        }
    }

    /// Returns the tax rate
    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the nominal amount the price was defined with
    pub fn default_price(&self) -> Decimal {
        self.default_price
    }

    /// Returns true if the nominal amount is the tax-inclusive one
    pub fn default_price_includes_tax(&self) -> bool {
        self.default_price_includes_tax
    }

    /// Returns true if all four amounts are zero
    pub fn is_zero(&self) -> bool {
        self.default_price.is_zero()
            && self.without_tax.is_zero()
            && self.with_tax.is_zero()
            && self.tax.is_zero()
    }

    /// Compares the nominal amounts of two same-currency prices
    pub fn is_higher_than(&self, other: &Price) -> Result<bool, PricingError> {
        self.assert_same_currency(other)?;
        Ok(self.default_price > other.default_price)
    }

    /// Scales every amount by a factor, rounding each to the currency scale
    ///
    /// A factor of one returns the price unchanged, leaving amounts that
    /// were never rounded (aggregated totals, minor-unit prices) intact.
    pub fn multiply(&self, factor: Decimal) -> Self {
        if factor == Decimal::ONE {
            return *self;
        }
        Self {
            without_tax: self.currency.round(self.without_tax * factor),
            tax: self.currency.round(self.tax * factor),
            with_tax: self.currency.round(self.with_tax * factor),
            default_price: self.currency.round(self.default_price * factor),
            ..*self
        }
    }

    /// Divides every amount by a strictly positive coefficient
    pub fn divide(&self, divisor: Decimal) -> Result<Self, PricingError> {
        if divisor <= Decimal::ZERO {
            return Err(PricingError::InvalidDivisionCoefficient(divisor));
        }
        Ok(self.multiply(Decimal::ONE / divisor))
    }

    /// Checked addition that validates currency and denomination compatibility
    ///
    /// The receiver's tax rate survives unless the operands disagree: adding
    /// a price with a different rate yields a mixed-rate total, and adding to
    /// a zero price adopts the operand's rate and denomination.
    pub fn checked_add(&self, other: &Price) -> Result<Price, PricingError> {
        self.assert_same_currency(other)?;
        self.assert_same_denomination(other)?;

        let (tax_rate, default_price_includes_tax) = self.merged_rate_and_denomination(other);
        Ok(Self {
            without_tax: self.without_tax + other.without_tax,
            tax: self.tax + other.tax,
            with_tax: self.with_tax + other.with_tax,
            tax_rate,
            currency: self.currency,
            default_price: self.default_price + other.default_price,
            default_price_includes_tax,
        })
    }

    /// Checked subtraction that validates currency and denomination compatibility
    ///
    /// The same rate-merge rules as `checked_add` apply. The four resulting
    /// amounts are re-rounded to the currency scale, so a chain of
    /// subtractions cannot drift off it.
    pub fn checked_sub(&self, other: &Price) -> Result<Price, PricingError> {
        self.assert_same_currency(other)?;
        self.assert_same_denomination(other)?;

        let (tax_rate, default_price_includes_tax) = self.merged_rate_and_denomination(other);
        Ok(Self {
            without_tax: self.currency.round(self.without_tax - other.without_tax),
            tax: self.currency.round(self.tax - other.tax),
            with_tax: self.currency.round(self.with_tax - other.with_tax),
            tax_rate,
            currency: self.currency,
            default_price: self.currency.round(self.default_price - other.default_price),
            default_price_includes_tax,
        })
    }

    /// Applies a discount and returns the discounted price
    ///
    /// A percentage discount scales every amount down. A fixed-amount
    /// discount subtracts a price of `amount` derived at the receiver's
    /// effective tax rate; for a mixed-rate total that rate is recovered
    /// from the tax/gross ratio, which requires a non-zero gross amount.
    pub fn discount(
        &self,
        amount: Decimal,
        discount_type: DiscountType,
    ) -> Result<Price, PricingError> {
        if amount < Decimal::ZERO {
            return Err(PricingError::NegativeDiscountAmount(amount));
        }

        match discount_type {
            DiscountType::Percentage => Ok(self.multiply(Decimal::ONE - amount / dec!(100))),
            DiscountType::FixedAmount => {
                let tax_rate = match self.tax_rate {
                    TaxRate::Fixed(rate) => rate,
                    TaxRate::Mixed => {
                        if self.with_tax.is_zero() {
                            return Err(PricingError::MixedTaxRate);
                        }
                        self.tax / self.with_tax * dec!(100)
                    }
                };
                let deduction = Self::new(
                    amount,
                    self.default_price_includes_tax,
                    tax_rate,
                    self.currency,
                )?;
                self.checked_sub(&deduction)
            }
        }
    }

    /// Returns a zero price preserving the currency and denomination
    ///
    /// A mixed rate falls back to a fixed zero rate.
    pub fn zeroed(&self) -> Self {
        let tax_rate = self.tax_rate.as_percentage().unwrap_or(Decimal::ZERO);
        Self::derive(
            Decimal::ZERO,
            self.default_price_includes_tax,
            tax_rate,
            self.currency,
        )
    }

    /// Rebuilds the price with a new nominal amount
    ///
    /// The current tax rate is reused unless a new one is given; a
    /// mixed-rate price must always be given one.
    pub fn reprice(
        &self,
        amount: Decimal,
        tax_rate: Option<Decimal>,
    ) -> Result<Price, PricingError> {
        let tax_rate = match tax_rate {
            Some(rate) => rate,
            None => self
                .tax_rate
                .as_percentage()
                .ok_or(PricingError::MixedTaxRate)?,
        };
        Self::new(
            amount,
            self.default_price_includes_tax,
            tax_rate,
            self.currency,
        )
    }

    /// Converts the price into another currency
    ///
    /// The exchange rate is expressed in units of the current currency per
    /// unit of the target currency. Converting to the same currency only
    /// admits a rate of exactly 1 and returns a copy. A real conversion
    /// rebuilds the price from the converted nominal amount, so the tax
    /// split is re-derived at the target currency's scale; that needs a
    /// fixed tax rate.
    pub fn convert_to(
        &self,
        currency: Currency,
        exchange_rate: Decimal,
    ) -> Result<Price, PricingError> {
        if currency == self.currency {
            if exchange_rate != Decimal::ONE {
                return Err(PricingError::ConversionMismatch {
                    currency,
                    exchange_rate,
                });
            }
            return Ok(*self);
        }

        let tax_rate = self
            .tax_rate
            .as_percentage()
            .ok_or(PricingError::MixedTaxRate)?;
        if exchange_rate <= Decimal::ZERO {
            return Err(PricingError::InvalidExchangeRate(exchange_rate));
        }
        Self::new(
            self.default_price / exchange_rate,
            self.default_price_includes_tax,
            tax_rate,
            currency,
        )
    }

    /// Converts all amounts to the currency's minor units (e.g. cents)
    ///
    /// Unlike `multiply` this never rounds; a fractional count of minor
    /// units is preserved as-is.
    pub fn to_minor_units(&self) -> Self {
        let factor = Decimal::from(self.currency.minor_unit_factor());
        Self {
            without_tax: self.without_tax * factor,
            tax: self.tax * factor,
            with_tax: self.with_tax * factor,
            default_price: self.default_price * factor,
            ..*self
        }
    }

    /// Returns a copy denominated on the other side of the tax split
    ///
    /// Only the nominal side changes: `default_price` is re-picked from the
    /// existing gross/net amounts, without recomputing the tax.
    pub fn with_default_price_includes_tax(&self, includes_tax: bool) -> Self {
        Self {
            default_price: if includes_tax {
                self.with_tax
            } else {
                self.without_tax
            },
            default_price_includes_tax: includes_tax,
            ..*self
        }
    }

    /// Returns the read-only projection for presentation layers
    pub fn to_view(&self) -> PriceView {
        PriceView::new(self)
    }

    /// Rate and denomination of a combination result: a zero receiver adopts
    /// the operand's, and disagreeing non-zero rates collapse to mixed
    fn merged_rate_and_denomination(&self, other: &Price) -> (TaxRate, bool) {
        if self.is_zero() {
            (other.tax_rate, other.default_price_includes_tax)
        } else if !other.is_zero() && self.tax_rate != other.tax_rate {
            (TaxRate::Mixed, self.default_price_includes_tax)
        } else {
            (self.tax_rate, self.default_price_includes_tax)
        }
    }

    fn assert_same_currency(&self, other: &Price) -> Result<(), PricingError> {
        if self.currency != other.currency {
            return Err(PricingError::CurrencyMismatch {
                expected: self.currency,
                actual: other.currency,
            });
        }
        Ok(())
    }

    fn assert_same_denomination(&self, other: &Price) -> Result<(), PricingError> {
        if !self.is_zero()
            && !other.is_zero()
            && self.default_price_includes_tax != other.default_price_includes_tax
        {
            return Err(PricingError::TaxModeMismatch);
        }
        Ok(())
    }
}

/// Value equality over the tax-exclusive amount, tax rate, tax-inclusive
/// amount and currency; the nominal-side bookkeeping does not participate
impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.without_tax == other.without_tax
            && self.tax_rate == other.tax_rate
            && self.with_tax == other.with_tax
            && self.currency == other.currency
    }
}

impl Eq for Price {}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.default_price)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(&other)
            .expect("Incompatible prices in Price::add")
    }
}

impl Sub for Price {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(&other)
            .expect("Incompatible prices in Price::sub")
    }
}

impl Neg for Price {
    type Output = Self;

    fn neg(self) -> Self {
        self.multiply(dec!(-1))
    }
}

impl Mul<Decimal> for Price {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        self.multiply(factor)
    }
}

impl Div<Decimal> for Price {
    type Output = Self;

    fn div(self, divisor: Decimal) -> Self {
        self.divide(divisor)
            .expect("Non-positive divisor in Price::div")
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_currency() -> impl Strategy<Value = Currency> {
        prop_oneof![
            Just(Currency::CZK),
            Just(Currency::EUR),
            Just(Currency::USD),
            Just(Currency::JPY),
        ]
    }

    fn any_amount() -> impl Strategy<Value = Decimal> {
        (-1_000_000_000i64..1_000_000_000i64, 0u32..=4u32)
            .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
    }

    fn any_tax_rate() -> impl Strategy<Value = Decimal> {
        (0i64..=6000i64).prop_map(|hundredths| Decimal::new(hundredths, 2))
    }

    proptest! {
        #[test]
        fn tax_split_is_consistent_after_construction(
            amount in any_amount(),
            includes_tax in any::<bool>(),
            rate in any_tax_rate(),
            currency in any_currency(),
        ) {
            let price = Price::new(amount, includes_tax, rate, currency).unwrap();
            prop_assert_eq!(price.with_tax(), price.without_tax() + price.tax());
        }

        #[test]
        fn multiplying_by_one_is_identity(
            amount in any_amount(),
            rate in any_tax_rate(),
            currency in any_currency(),
        ) {
            let price = Price::new(amount, false, rate, currency).unwrap();
            let scaled = price.multiply(Decimal::ONE);

            prop_assert_eq!(scaled, price);
            prop_assert_eq!(scaled.default_price(), price.default_price());
        }

        #[test]
        fn adding_zero_is_identity(
            amount in 1i64..1_000_000_000i64,
            rate in any_tax_rate(),
            currency in any_currency(),
        ) {
            let price = Price::new(Decimal::from(amount), false, rate, currency).unwrap();
            let sum = price.checked_add(&Price::zero(currency)).unwrap();

            prop_assert_eq!(sum, price);
        }

        #[test]
        fn zero_percent_discount_is_identity(
            amount in any_amount(),
            rate in any_tax_rate(),
            currency in any_currency(),
        ) {
            let price = Price::new(amount, true, rate, currency).unwrap();
            let discounted = price.discount(Decimal::ZERO, DiscountType::Percentage).unwrap();

            prop_assert_eq!(discounted, price);
        }

        #[test]
        fn scaled_split_stays_within_one_minor_unit(
            amount in any_amount(),
            rate in any_tax_rate(),
            currency in any_currency(),
            factor in (1i64..100_000i64, 0u32..=3u32).prop_map(|(m, s)| Decimal::new(m, s)),
        ) {
            let price = Price::new(amount, true, rate, currency).unwrap().multiply(factor);
            let drift = (price.with_tax() - price.without_tax() - price.tax()).abs();

            prop_assert!(drift <= Decimal::new(1, currency.decimal_places()));
        }
    }
}
