//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use domain_pricing::{Price, TaxRate};
use rust_decimal::Decimal;

/// Asserts that two prices are approximately equal within a tolerance
///
/// # Arguments
///
/// * `actual` - The actual price
/// * `expected` - The expected price
/// * `tolerance` - The allowed difference per amount field
///
/// # Panics
///
/// Panics if the currencies don't match or any of the net, tax or gross
/// amounts differ by more than tolerance
pub fn assert_price_approx_eq(actual: &Price, expected: &Price, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    for (field, a, e) in [
        ("without_tax", actual.without_tax(), expected.without_tax()),
        ("tax", actual.tax(), expected.tax()),
        ("with_tax", actual.with_tax(), expected.with_tax()),
    ] {
        let diff = (a - e).abs();
        assert!(
            diff <= tolerance,
            "Price {} amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
            field,
            a,
            e,
            diff,
            tolerance
        );
    }
}

/// Asserts that a price is zero in all amount fields
pub fn assert_price_zero(price: &Price) {
    assert!(
        price.is_zero(),
        "Expected zero price, got {} {} ({} net, {} tax)",
        price.default_price(),
        price.currency(),
        price.without_tax(),
        price.tax()
    );
}

/// Asserts that a price's nominal amount is strictly positive
pub fn assert_price_positive(price: &Price) {
    assert!(
        price.default_price() > Decimal::ZERO,
        "Expected positive price, got {} {}",
        price.default_price(),
        price.currency()
    );
}

/// Asserts that a price's gross amount equals net plus tax exactly
pub fn assert_tax_split_consistent(price: &Price) {
    assert_eq!(
        price.with_tax(),
        price.without_tax() + price.tax(),
        "Tax split is inconsistent: {} net + {} tax != {} gross",
        price.without_tax(),
        price.tax(),
        price.with_tax()
    );
}

/// Asserts that a price's gross amount is within tolerance of net plus tax
///
/// Scaling rounds the three amounts independently, so the split may drift
/// by up to one minor unit.
pub fn assert_tax_split_within(price: &Price, tolerance: Decimal) {
    let drift = (price.with_tax() - price.without_tax() - price.tax()).abs();
    assert!(
        drift <= tolerance,
        "Tax split drifted by more than tolerance: {} net + {} tax vs {} gross, drift={}, tolerance={}",
        price.without_tax(),
        price.tax(),
        price.with_tax(),
        drift,
        tolerance
    );
}

/// Asserts that a price carries the given fixed tax rate
pub fn assert_fixed_rate(price: &Price, expected_rate: Decimal) {
    assert_eq!(
        price.tax_rate(),
        TaxRate::Fixed(expected_rate),
        "Expected fixed rate {}%, got {}",
        expected_rate,
        price.tax_rate()
    );
}

/// Asserts that a price carries a mixed tax rate
pub fn assert_mixed_rate(price: &Price) {
    assert!(
        price.tax_rate().is_mixed(),
        "Expected mixed rate, got {}",
        price.tax_rate()
    );
}

/// Asserts that a decimal value is within a range
pub fn assert_decimal_in_range(value: Decimal, min: Decimal, max: Decimal) {
    assert!(
        value >= min && value <= max,
        "Decimal {} is not in range [{}, {}]",
        value,
        min,
        max
    );
}

/// Asserts that a decimal value is approximately equal to another
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Decimals differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that a result is Err and returns the error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => e,
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => panic!("{}: got Ok({:?})", $msg, value),
            Err(e) => e,
        }
    };
}

/// Asserts that an error matches a specific variant
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!(
                "Expected Err matching {}, got Ok({:?})",
                stringify!($pattern),
                value
            ),
            Err(e) => {
                assert!(
                    matches!(&e, $pattern),
                    "Error {:?} does not match pattern {}",
                    e,
                    stringify!($pattern)
                );
                e
            }
        }
    };
}
