//! Product catalog domain model.

use serde::{Deserialize, Serialize};

use super::money::{Currency, Money};
use crate::error::DomainError;

/// Image path shown when a catalog row carries no image of its own.
pub const PLACEHOLDER_IMAGE: &str = "/img/placeholder-flower.png";

/// Unique identifier for a Product, as assigned by the shop backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Creates a ProductId from a backend integer key.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying integer key.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A catalog row at the moment it was looked up.
///
/// The cart captures this snapshot at add-time; prices are deliberately not
/// re-fetched on later renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Backend identifier
    pub id: ProductId,
    /// Display name
    pub name: String,
    /// Unit price in USD
    pub unit_price: Money,
    /// Optional image path
    pub image_url: Option<String>,
}

impl Product {
    /// Creates a product snapshot, normalizing catalog data once at the
    /// boundary.
    ///
    /// # Validation
    /// - Name cannot be empty
    /// - Price must be in USD
    pub fn new(
        id: ProductId,
        name: String,
        unit_price: Money,
        image_url: Option<String>,
    ) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Product name cannot be empty".into(),
            ));
        }
        if unit_price.currency() != Currency::Usd {
            return Err(DomainError::CurrencyMismatch {
                expected: Currency::Usd,
                got: unit_price.currency(),
            });
        }

        Ok(Self {
            id,
            name,
            unit_price,
            image_url: image_url.filter(|url| !url.trim().is_empty()),
        })
    }

    /// Returns the image path, falling back to the storefront placeholder.
    pub fn image_url_or_placeholder(&self) -> &str {
        self.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(cents: i64) -> Money {
        Money::new(cents, Currency::Usd).unwrap()
    }

    #[test]
    fn test_product_creation() {
        let product = Product::new(
            ProductId::new(7),
            "Red Roses".to_string(),
            price(2500),
            Some("/img/roses.jpg".to_string()),
        )
        .unwrap();
        assert_eq!(product.id.value(), 7);
        assert_eq!(product.image_url_or_placeholder(), "/img/roses.jpg");
    }

    #[test]
    fn test_empty_name_fails() {
        let result = Product::new(ProductId::new(1), "  ".to_string(), price(100), None);
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn test_non_usd_price_fails() {
        let bs = Money::new(100, Currency::Ves).unwrap();
        let result = Product::new(ProductId::new(1), "Tulips".to_string(), bs, None);
        assert!(matches!(result, Err(DomainError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_missing_image_falls_back_to_placeholder() {
        let product = Product::new(ProductId::new(1), "Tulips".to_string(), price(100), None)
            .unwrap();
        assert_eq!(product.image_url_or_placeholder(), PLACEHOLDER_IMAGE);

        let blank = Product::new(
            ProductId::new(2),
            "Lilies".to_string(),
            price(100),
            Some("   ".to_string()),
        )
        .unwrap();
        assert_eq!(blank.image_url_or_placeholder(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_product_id_parse() {
        let id: ProductId = "42".parse().unwrap();
        assert_eq!(id, ProductId::new(42));
        assert!("abc".parse::<ProductId>().is_err());
    }
}
