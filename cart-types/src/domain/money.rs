//! Type-safe monetary value with embedded currency.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Currencies the cart displays.
///
/// USD is the authoritative pricing currency; VES totals are a convenience
/// display derived from the BCV exchange rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Ves,
}

impl Currency {
    /// Returns the currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Ves => "Bs.",
        }
    }

    /// Returns the ISO-style code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Ves => "VES",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Type-safe money representation with embedded currency.
///
/// Amount is stored in the smallest unit of the currency (cents, céntimos)
/// to avoid floating-point precision issues. The upstream API speaks decimal
/// dollars; [`Money::from_decimal`] converts once at that boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value.
    pub fn new(amount: i64, currency: Currency) -> Result<Self, DomainError> {
        if amount < 0 {
            return Err(DomainError::NegativeAmount);
        }
        Ok(Self { amount, currency })
    }

    /// Creates Money from a known-non-negative amount in minor units.
    ///
    /// Panics when `amount` is negative; callers pass sums or products of
    /// already-validated non-negative amounts.
    pub const fn from_cents(amount: i64, currency: Currency) -> Self {
        assert!(amount >= 0, "Money amount must be non-negative");
        Self { amount, currency }
    }

    /// Creates a zero-value Money for the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: 0,
            currency,
        }
    }

    /// Converts a decimal major-unit value (e.g. an API price of `12.5`)
    /// into minor units, rounding to the nearest cent.
    pub fn from_decimal(value: f64, currency: Currency) -> Result<Self, DomainError> {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::NegativeAmount);
        }
        Ok(Self {
            amount: (value * 100.0).round() as i64,
            currency,
        })
    }

    /// Returns the amount in smallest currency unit.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Returns the amount as a decimal major-unit value.
    pub fn to_decimal(&self) -> f64 {
        self.amount as f64 / 100.0
    }

    /// Returns the currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true when the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Saturating same-currency addition.
    ///
    /// Panics when the currencies differ; cart line items are USD-only by
    /// construction, so aggregate sums always satisfy this.
    pub fn plus(&self, other: Money) -> Money {
        assert_eq!(
            self.currency, other.currency,
            "Cannot add Money with different currencies"
        );
        Money {
            amount: self.amount.saturating_add(other.amount),
            currency: self.currency,
        }
    }

    /// Multiplies by a unit count, saturating on overflow.
    pub fn times(&self, quantity: u32) -> Money {
        Money {
            amount: self.amount.saturating_mul(i64::from(quantity)),
            currency: self.currency,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let major = self.amount / 100;
        let minor = (self.amount % 100).abs();
        write!(f, "{}{}.{:02}", self.currency.symbol(), major, minor)
    }
}
