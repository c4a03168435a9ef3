//! Product lookup port.
//!
//! This trait defines the interface for the shop's product catalog.
//! Implementations can be HTTP clients, in-memory fixtures, etc.

use crate::domain::{Product, ProductId};

/// Error type for catalog lookups.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Catalog unreachable: {0}")]
    Transport(String),

    #[error("Malformed catalog response: {0}")]
    Malformed(String),
}

/// Port trait for product lookups.
#[async_trait::async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Fetches the current catalog snapshot for a product.
    async fn product(&self, id: ProductId) -> Result<Product, CatalogError>;
}
