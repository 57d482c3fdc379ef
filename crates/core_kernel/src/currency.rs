//! Currency descriptors and currency-specific rounding
//!
//! Every monetary amount in the system is a `rust_decimal::Decimal` tagged
//! with a `Currency`. The currency decides how many decimal places an amount
//! carries, what the minor-unit factor is (100 haléře per koruna, 1 for
//! zero-decimal currencies), and how amounts are rounded.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    CZK,
    EUR,
    USD,
    GBP,
    PLN,
    HUF,
    CHF,
    JPY,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    ///
    /// HUF counts as zero-decimal: fillér coins are withdrawn and amounts
    /// are kept in whole forints.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::HUF | Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Returns the number of minor units per major unit (e.g. 100 for cents)
    pub fn minor_unit_factor(&self) -> u32 {
        10u32.pow(self.decimal_places())
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::CZK => "Kč",
            Currency::EUR => "€",
            Currency::USD => "$",
            Currency::GBP => "£",
            Currency::PLN => "zł",
            Currency::HUF => "Ft",
            Currency::CHF => "CHF",
            Currency::JPY => "¥",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::CZK => "CZK",
            Currency::EUR => "EUR",
            Currency::USD => "USD",
            Currency::GBP => "GBP",
            Currency::PLN => "PLN",
            Currency::HUF => "HUF",
            Currency::CHF => "CHF",
            Currency::JPY => "JPY",
        }
    }

    /// Rounds an amount to this currency's decimal places
    ///
    /// Midpoints round away from zero (17.355 becomes 17.36, -17.355 becomes
    /// -17.36). A zero result is normalized to plain zero so that a rounded
    /// amount can never be a sign-carrying negative zero.
    pub fn round(&self, amount: Decimal) -> Decimal {
        let rounded = amount.round_dp_with_strategy(
            self.decimal_places(),
            RoundingStrategy::MidpointAwayFromZero,
        );
        if rounded.is_zero() {
            Decimal::ZERO
        } else {
            rounded
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CZK" => Ok(Currency::CZK),
            "EUR" => Ok(Currency::EUR),
            "USD" => Ok(Currency::USD),
            "GBP" => Ok(Currency::GBP),
            "PLN" => Ok(Currency::PLN),
            "HUF" => Ok(Currency::HUF),
            "CHF" => Ok(Currency::CHF),
            "JPY" => Ok(Currency::JPY),
            other => Err(CurrencyError::UnknownCode(other.to_string())),
        }
    }
}

/// Errors that can occur when resolving a currency
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurrencyError {
    #[error("Unknown currency code: {0}")]
    UnknownCode(String),
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn any_currency() -> impl Strategy<Value = Currency> {
        prop_oneof![
            Just(Currency::CZK),
            Just(Currency::EUR),
            Just(Currency::USD),
            Just(Currency::GBP),
            Just(Currency::PLN),
            Just(Currency::HUF),
            Just(Currency::CHF),
            Just(Currency::JPY),
        ]
    }

    fn any_amount() -> impl Strategy<Value = Decimal> {
        (-1_000_000_000i64..1_000_000_000i64, 0u32..=4u32)
            .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
    }

    proptest! {
        #[test]
        fn rounding_is_idempotent(currency in any_currency(), amount in any_amount()) {
            let once = currency.round(amount);
            prop_assert_eq!(currency.round(once), once);
        }

        #[test]
        fn rounding_error_is_at_most_half_a_minor_unit(
            currency in any_currency(),
            amount in any_amount(),
        ) {
            let half_step = Decimal::new(5, currency.decimal_places() + 1);
            let diff = (currency.round(amount) - amount).abs();
            prop_assert!(diff <= half_step);
        }

        #[test]
        fn rounded_zero_is_never_sign_negative(currency in any_currency(), amount in any_amount()) {
            let rounded = currency.round(amount);
            if rounded.is_zero() {
                prop_assert!(!rounded.is_sign_negative());
            }
            prop_assert_eq!(currency.round(dec!(0)), Decimal::ZERO);
        }
    }
}
