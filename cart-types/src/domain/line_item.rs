//! Cart line item domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::money::Money;
use super::product::{PLACEHOLDER_IMAGE, Product, ProductId};
use crate::error::DomainError;

/// One product's presence in the cart.
///
/// Name, price, and image are captured at add-time and survive reloads
/// through persistence; they are a deliberate snapshot, not a live view of
/// the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identifier, unique within the cart
    pub product_id: ProductId,
    /// Display name at add-time
    pub name: String,
    /// Unit price in USD at add-time
    pub unit_price: Money,
    /// Units of this product; always >= 1
    pub quantity: u32,
    /// Optional image path at add-time
    pub image_url: Option<String>,
    /// When the product was first added
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a line item from a catalog snapshot.
    ///
    /// # Validation
    /// - Quantity must be at least 1
    pub fn new(product: Product, quantity: u32) -> Result<Self, DomainError> {
        if quantity == 0 {
            return Err(DomainError::InvalidQuantity(0));
        }

        Ok(Self {
            product_id: product.id,
            name: product.name,
            unit_price: product.unit_price,
            quantity,
            image_url: product.image_url,
            added_at: Utc::now(),
        })
    }

    /// Returns `unit_price * quantity`.
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }

    /// Returns the image path, falling back to the storefront placeholder.
    pub fn image_url_or_placeholder(&self) -> &str {
        self.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Currency;

    fn product(id: i64, cents: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {id}"),
            Money::new(cents, Currency::Usd).unwrap(),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_line_item_creation() {
        let item = LineItem::new(product(1, 1000), 2).unwrap();
        assert_eq!(item.product_id, ProductId::new(1));
        assert_eq!(item.quantity, 2);
        assert_eq!(item.line_total().amount(), 2000);
    }

    #[test]
    fn test_zero_quantity_fails() {
        let result = LineItem::new(product(1, 1000), 0);
        assert!(matches!(result, Err(DomainError::InvalidQuantity(0))));
    }

    #[test]
    fn test_image_falls_back_to_placeholder() {
        let item = LineItem::new(product(2, 800), 1).unwrap();
        assert_eq!(
            item.image_url_or_placeholder(),
            crate::domain::product::PLACEHOLDER_IMAGE
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let item = LineItem::new(product(3, 1250), 4).unwrap();
        let raw = serde_json::to_string(&item).unwrap();
        let back: LineItem = serde_json::from_str(&raw).unwrap();
        assert_eq!(back.product_id, item.product_id);
        assert_eq!(back.quantity, 4);
        assert_eq!(back.unit_price, item.unit_price);
    }
}
