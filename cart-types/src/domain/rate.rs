//! BCV exchange rate (Bs. per USD).

use std::fmt;

use super::money::{Currency, Money};
use crate::error::DomainError;

/// Exchange rate used to display cart totals in bolívares.
///
/// Fetched from the shop settings at startup; when the live value cannot be
/// obtained or parsed, [`BcvRate::FALLBACK`] takes its place. USD stays the
/// authoritative currency either way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BcvRate(f64);

impl BcvRate {
    /// Hardcoded rate used whenever the live rate cannot be fetched.
    pub const FALLBACK: BcvRate = BcvRate(36.5);

    /// Parses a setting value into a usable rate.
    ///
    /// The value must be a finite decimal greater than zero; anything else
    /// (empty string, text, zero, negative, infinity) is rejected so the
    /// caller can fall back.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidRate(raw.to_string()))?;
        if !value.is_finite() || value <= 0.0 {
            return Err(DomainError::InvalidRate(raw.to_string()));
        }
        Ok(Self(value))
    }

    /// Returns the raw Bs./USD factor.
    pub fn as_f64(&self) -> f64 {
        self.0
    }

    /// Converts a USD amount into bolívares, rounding to the nearest céntimo.
    pub fn convert(&self, usd: Money) -> Result<Money, DomainError> {
        if usd.currency() != Currency::Usd {
            return Err(DomainError::CurrencyMismatch {
                expected: Currency::Usd,
                got: usd.currency(),
            });
        }
        let centimos = (usd.amount() as f64 * self.0).round() as i64;
        Ok(Money::from_cents(centimos, Currency::Ves))
    }
}

impl fmt::Display for BcvRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        let rate = BcvRate::parse("36.5").unwrap();
        assert_eq!(rate.as_f64(), 36.5);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(BcvRate::parse(" 40.25 ").is_ok());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            BcvRate::parse("not a number"),
            Err(DomainError::InvalidRate(_))
        ));
        assert!(BcvRate::parse("").is_err());
        assert!(BcvRate::parse("0").is_err());
        assert!(BcvRate::parse("-3.5").is_err());
        assert!(BcvRate::parse("inf").is_err());
    }

    #[test]
    fn test_convert_usd_to_ves() {
        let rate = BcvRate::FALLBACK;
        let total = Money::new(4200, Currency::Usd).unwrap();
        let ves = rate.convert(total).unwrap();
        assert_eq!(ves.amount(), 153_300);
        assert_eq!(ves.currency(), Currency::Ves);
    }

    #[test]
    fn test_convert_rejects_non_usd() {
        let rate = BcvRate::FALLBACK;
        let ves = Money::new(100, Currency::Ves).unwrap();
        assert!(matches!(
            rate.convert(ves),
            Err(DomainError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_convert_rounds_to_nearest_centimo() {
        let rate = BcvRate::parse("36.333").unwrap();
        let usd = Money::new(1, Currency::Usd).unwrap();
        assert_eq!(rate.convert(usd).unwrap().amount(), 36);
    }
}
