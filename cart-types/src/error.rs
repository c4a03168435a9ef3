//! Error types for the cart.

use crate::domain::Currency;
use crate::ports::{CatalogError, StoreError};

/// Domain-level errors (business rule violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: Currency, got: Currency },

    #[error("Quantity must be at least 1, got {0}")]
    InvalidQuantity(i64),

    #[error("Not a usable exchange rate: {0:?}")]
    InvalidRate(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Errors surfaced by cart operations.
///
/// Nothing here is fatal to the session: lookup and storage failures leave
/// the in-memory cart in a consistent state, and the caller decides whether
/// to retry or move on.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Product lookup failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Cart storage failed: {0}")]
    Store(#[from] StoreError),

    #[error("Cart serialization failed: {0}")]
    Encode(#[from] serde_json::Error),
}
