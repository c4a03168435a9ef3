//! # Cart Types
//!
//! Domain types and port traits for the flower shop cart.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Money, Product, LineItem, Cart)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for the upstream REST API
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{BcvRate, Cart, Currency, LineItem, Money, Product, ProductId, SHIPPING_FEE};
pub use dto::{ApiEnvelope, ProductPayload, SettingPayload};
pub use error::{CartError, DomainError};
pub use ports::{
    CartStore, CatalogError, Notifier, ProductCatalog, SettingError, SettingSource, SilentNotifier,
    StoreError,
};
