//! Comprehensive unit tests for the Currency module
//!
//! Tests cover currency codes, decimal places, minor-unit factors,
//! rounding behavior, parsing, and serialization.

use core_kernel::{Currency, CurrencyError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod codes {
    use super::*;

    #[test]
    fn test_code_matches_iso_4217() {
        assert_eq!(Currency::CZK.code(), "CZK");
        assert_eq!(Currency::EUR.code(), "EUR");
        assert_eq!(Currency::USD.code(), "USD");
        assert_eq!(Currency::GBP.code(), "GBP");
        assert_eq!(Currency::PLN.code(), "PLN");
        assert_eq!(Currency::HUF.code(), "HUF");
        assert_eq!(Currency::CHF.code(), "CHF");
        assert_eq!(Currency::JPY.code(), "JPY");
    }

    #[test]
    fn test_symbol_for_major_currencies() {
        assert_eq!(Currency::CZK.symbol(), "Kč");
        assert_eq!(Currency::EUR.symbol(), "€");
        assert_eq!(Currency::USD.symbol(), "$");
        assert_eq!(Currency::JPY.symbol(), "¥");
    }
}

mod scale {
    use super::*;

    #[test]
    fn test_two_decimal_currencies() {
        assert_eq!(Currency::CZK.decimal_places(), 2);
        assert_eq!(Currency::EUR.decimal_places(), 2);
        assert_eq!(Currency::USD.decimal_places(), 2);
        assert_eq!(Currency::GBP.decimal_places(), 2);
        assert_eq!(Currency::PLN.decimal_places(), 2);
        assert_eq!(Currency::CHF.decimal_places(), 2);
    }

    #[test]
    fn test_zero_decimal_currencies() {
        assert_eq!(Currency::HUF.decimal_places(), 0);
        assert_eq!(Currency::JPY.decimal_places(), 0);
    }

    #[test]
    fn test_minor_unit_factor_follows_decimal_places() {
        assert_eq!(Currency::CZK.minor_unit_factor(), 100);
        assert_eq!(Currency::HUF.minor_unit_factor(), 1);
        assert_eq!(Currency::JPY.minor_unit_factor(), 1);
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_rounds_to_decimal_places() {
        assert_eq!(Currency::CZK.round(dec!(82.6446)), dec!(82.64));
        assert_eq!(Currency::EUR.round(dec!(3.305785)), dec!(3.31));
        assert_eq!(Currency::HUF.round(dec!(1234.49)), dec!(1234));
    }

    #[test]
    fn test_midpoints_round_away_from_zero() {
        assert_eq!(Currency::USD.round(dec!(2.125)), dec!(2.13));
        assert_eq!(Currency::USD.round(dec!(2.135)), dec!(2.14));
        assert_eq!(Currency::USD.round(dec!(-2.125)), dec!(-2.13));
        assert_eq!(Currency::JPY.round(dec!(0.5)), dec!(1));
        assert_eq!(Currency::JPY.round(dec!(-0.5)), dec!(-1));
    }

    #[test]
    fn test_already_rounded_amounts_are_unchanged() {
        assert_eq!(Currency::CZK.round(dec!(100.00)), dec!(100.00));
        assert_eq!(Currency::JPY.round(dec!(100)), dec!(100));
    }

    #[test]
    fn test_negative_zero_normalizes_to_zero() {
        let rounded = Currency::CZK.round(dec!(-0.0049));
        assert_eq!(rounded, Decimal::ZERO);
        assert!(!rounded.is_sign_negative());
    }
}

mod parsing {
    use super::*;

    #[test]
    fn test_from_str_accepts_known_codes() {
        assert_eq!("CZK".parse::<Currency>().unwrap(), Currency::CZK);
        assert_eq!("EUR".parse::<Currency>().unwrap(), Currency::EUR);
        assert_eq!("JPY".parse::<Currency>().unwrap(), Currency::JPY);
    }

    #[test]
    fn test_from_str_rejects_unknown_code() {
        let err = "BTC".parse::<Currency>().unwrap_err();
        assert_eq!(err, CurrencyError::UnknownCode("BTC".to_string()));
        assert_eq!(err.to_string(), "Unknown currency code: BTC");
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!("czk".parse::<Currency>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_from_str() {
        let currencies = [
            Currency::CZK,
            Currency::EUR,
            Currency::USD,
            Currency::GBP,
            Currency::PLN,
            Currency::HUF,
            Currency::CHF,
            Currency::JPY,
        ];

        for currency in currencies {
            let parsed: Currency = currency.to_string().parse().unwrap();
            assert_eq!(parsed, currency);
        }
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_serializes_to_uppercase_code() {
        let json = serde_json::to_string(&Currency::CZK).unwrap();
        assert_eq!(json, "\"CZK\"");
    }

    #[test]
    fn test_deserializes_from_uppercase_code() {
        let currency: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(currency, Currency::EUR);
    }

    #[test]
    fn test_deserialization_rejects_unknown_code() {
        let result: Result<Currency, _> = serde_json::from_str("\"XTS\"");
        assert!(result.is_err());
    }
}
