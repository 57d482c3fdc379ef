//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::Currency;
use domain_pricing::Price;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
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

/// Strategy for generating currencies with two decimal places
pub fn two_decimal_currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::CZK),
        Just(Currency::EUR),
        Just(Currency::USD),
        Just(Currency::GBP),
        Just(Currency::PLN),
        Just(Currency::CHF),
    ]
}

/// Strategy for generating amounts of any sign (up to 4 decimal places)
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64, 0u32..=4u32)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Strategy for generating amounts of at least one whole unit
///
/// Whole-unit amounts stay non-zero after rounding in every currency,
/// including the zero-decimal ones.
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(Decimal::from)
}

/// Strategy for generating tax rates (0% to 60%)
pub fn tax_rate_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=6000i64).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

/// Strategy for generating the statutory VAT rates
pub fn statutory_tax_rate_strategy() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(Decimal::ZERO),
        Just(Decimal::from(10)),
        Just(Decimal::from(15)),
        Just(Decimal::from(21)),
    ]
}

/// Strategy for generating discount percentages (0% to 100%)
pub fn discount_percentage_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=10000i64).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

/// Strategy for generating strictly positive exchange rates (0.01 to 100)
pub fn exchange_rate_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..=10000i64).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

/// Strategy for generating cart quantities (1 to 1000, up to 3 decimals)
pub fn quantity_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64, 0u32..=3u32).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Strategy for generating valid prices of any sign and denomination
pub fn price_strategy() -> impl Strategy<Value = Price> {
    (
        amount_strategy(),
        any::<bool>(),
        tax_rate_strategy(),
        currency_strategy(),
    )
        .prop_map(|(amount, includes_tax, tax_rate, currency)| {
            Price::new(amount, includes_tax, tax_rate, currency)
                .expect("Generated invalid price")
        })
}

/// Strategy for generating non-zero net-denominated prices
pub fn positive_price_strategy() -> impl Strategy<Value = Price> {
    (
        positive_amount_strategy(),
        tax_rate_strategy(),
        currency_strategy(),
    )
        .prop_map(|(amount, tax_rate, currency)| {
            Price::new(amount, false, tax_rate, currency).expect("Generated invalid price")
        })
}

/// Strategy for generating same-currency price pairs
pub fn price_pair_strategy() -> impl Strategy<Value = (Price, Price)> {
    (
        positive_amount_strategy(),
        positive_amount_strategy(),
        tax_rate_strategy(),
        tax_rate_strategy(),
        currency_strategy(),
    )
        .prop_map(|(a, b, rate_a, rate_b, currency)| {
            (
                Price::new(a, false, rate_a, currency).expect("Generated invalid price"),
                Price::new(b, false, rate_b, currency).expect("Generated invalid price"),
            )
        })
}

/// Strategy for generating mixed-rate totals
pub fn mixed_price_strategy() -> impl Strategy<Value = Price> {
    (
        1_00i64..1_000_000_00i64,
        currency_strategy(),
        any::<bool>(),
    )
        .prop_flat_map(|(gross_minor, currency, includes_tax)| {
            (0i64..gross_minor).prop_map(move |tax_minor| {
                Price::from_gross_and_tax(
                    Decimal::new(gross_minor, 2),
                    Decimal::new(tax_minor, 2),
                    currency,
                    includes_tax,
                )
            })
        })
}
