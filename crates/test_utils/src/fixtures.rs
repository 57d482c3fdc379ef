//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common prices across the pricing system.
//! These fixtures are designed to be consistent and predictable for unit tests.

use core_kernel::Currency;
use domain_pricing::Price;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for Price test data
pub struct PriceFixtures;

impl PriceFixtures {
    /// Creates a standard net-denominated CZK price (100 net at 21%)
    pub fn czk_100_net() -> Price {
        Price::new(dec!(100), false, dec!(21), Currency::CZK)
            .expect("Fixture price parameters are valid")
    }

    /// Creates a standard gross-denominated CZK price (100 gross at 21%)
    pub fn czk_100_gross() -> Price {
        Price::new(dec!(100), true, dec!(21), Currency::CZK)
            .expect("Fixture price parameters are valid")
    }

    /// Creates a reduced-rate CZK price (100 net at 15%)
    pub fn czk_100_reduced() -> Price {
        Price::new(dec!(100), false, dec!(15), Currency::CZK)
            .expect("Fixture price parameters are valid")
    }

    /// Creates a zero CZK price
    pub fn czk_zero() -> Price {
        Price::zero(Currency::CZK)
    }

    /// Creates a mixed-rate CZK total (236 gross carrying 36 of tax)
    pub fn czk_mixed_total() -> Price {
        Price::from_gross_and_tax(dec!(236), dec!(36), Currency::CZK, false)
    }

    /// Creates a EUR price for currency mismatch tests
    pub fn eur_100_net() -> Price {
        Price::new(dec!(100), false, dec!(21), Currency::EUR)
            .expect("Fixture price parameters are valid")
    }

    /// Creates a JPY price (zero decimal places)
    pub fn jpy_10000_net() -> Price {
        Price::new(dec!(10000), false, dec!(10), Currency::JPY)
            .expect("Fixture price parameters are valid")
    }

    /// Creates a negative CZK price for refund scenarios
    pub fn czk_refund() -> Price {
        Price::new(dec!(-50), false, dec!(21), Currency::CZK)
            .expect("Fixture price parameters are valid")
    }
}

/// Fixture for tax rate test data
pub struct TaxRateFixtures;

impl TaxRateFixtures {
    /// Standard VAT rate (21%)
    pub fn standard() -> Decimal {
        dec!(21)
    }

    /// Reduced VAT rate (15%)
    pub fn reduced() -> Decimal {
        dec!(15)
    }

    /// Second reduced VAT rate (10%)
    pub fn second_reduced() -> Decimal {
        dec!(10)
    }

    /// Zero VAT rate
    pub fn zero() -> Decimal {
        Decimal::ZERO
    }
}

/// Fixture for decimal test data
pub struct DecimalFixtures;

impl DecimalFixtures {
    /// Standard CZK per EUR exchange rate
    pub fn czk_per_eur() -> Decimal {
        dec!(25)
    }

    /// Standard CZK per USD exchange rate
    pub fn czk_per_usd() -> Decimal {
        dec!(23.10)
    }

    /// Standard quantity for cart line tests
    pub fn quantity() -> Decimal {
        dec!(3)
    }

    /// Zero for comparison tests
    pub fn zero() -> Decimal {
        Decimal::ZERO
    }

    /// One minor unit of a two-decimal currency
    pub fn minor_unit() -> Decimal {
        dec!(0.01)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_fixtures_currencies_match() {
        let czk = PriceFixtures::czk_100_net();
        assert_eq!(czk.currency(), Currency::CZK);

        let eur = PriceFixtures::eur_100_net();
        assert_eq!(eur.currency(), Currency::EUR);
    }

    #[test]
    fn test_mixed_total_has_mixed_rate() {
        let total = PriceFixtures::czk_mixed_total();
        assert!(total.tax_rate().is_mixed());
        assert_eq!(total.without_tax(), dec!(200));
    }

    #[test]
    fn test_fixtures_are_deterministic() {
        assert_eq!(PriceFixtures::czk_100_net(), PriceFixtures::czk_100_net());
        assert_eq!(TaxRateFixtures::standard(), dec!(21));
    }
}
