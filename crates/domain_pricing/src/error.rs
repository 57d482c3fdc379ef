//! Pricing domain errors

use core_kernel::Currency;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the pricing domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Tax rate below zero
    #[error("Tax rate cannot be negative: {0}")]
    NegativeTaxRate(Decimal),

    /// Discount amount below zero
    #[error("Discount amount cannot be negative: {0}")]
    NegativeDiscountAmount(Decimal),

    /// Division coefficient must be strictly positive
    #[error("Division coefficient must be greater than zero: {0}")]
    InvalidDivisionCoefficient(Decimal),

    /// Exchange rate must be strictly positive
    #[error("Exchange rate must be greater than zero: {0}")]
    InvalidExchangeRate(Decimal),

    /// The operation needs a single tax rate, but the price carries a mixed one
    #[error("Cannot perform the operation on a price with a mixed tax rate")]
    MixedTaxRate,

    /// One price is denominated with tax included, the other without
    #[error("Incompatible prices: one is denominated with tax, the other without")]
    TaxModeMismatch,

    /// Prices in two different currencies cannot be combined
    #[error("Currency mismatch: cannot operate on {expected} and {actual}")]
    CurrencyMismatch {
        expected: Currency,
        actual: Currency,
    },

    /// Conversion to the same currency only admits the identity rate
    #[error("Cannot convert {currency} to itself with exchange rate {exchange_rate}")]
    ConversionMismatch {
        currency: Currency,
        exchange_rate: Decimal,
    },
}

/// Broad classification of pricing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A caller-supplied value is outside the accepted domain
    InvalidArgument,
    /// The operands are individually valid but cannot be combined
    Logic,
    /// A currency conversion was requested under contradictory terms
    ConversionMismatch,
}

impl PricingError {
    /// Returns the broad classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PricingError::NegativeTaxRate(_)
            | PricingError::NegativeDiscountAmount(_)
            | PricingError::InvalidDivisionCoefficient(_)
            | PricingError::InvalidExchangeRate(_) => ErrorKind::InvalidArgument,
            PricingError::MixedTaxRate
            | PricingError::TaxModeMismatch
            | PricingError::CurrencyMismatch { .. } => ErrorKind::Logic,
            PricingError::ConversionMismatch { .. } => ErrorKind::ConversionMismatch,
        }
    }
}
