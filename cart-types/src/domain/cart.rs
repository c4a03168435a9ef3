//! Cart aggregate: an ordered list of line items, unique by product.

use super::line_item::LineItem;
use super::money::{Currency, Money};
use super::product::{Product, ProductId};
use crate::error::DomainError;

/// Flat shipping fee, charged only when the cart has a non-zero subtotal.
pub const SHIPPING_FEE: Money = Money::from_cents(700, Currency::Usd);

/// The cart aggregate.
///
/// Pure state and arithmetic; persistence, catalog lookups, and change
/// notification live in the state manager on top of this.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstructs a cart from persisted line items.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    /// Returns the line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the line item for a product, if present.
    pub fn item(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.product_id == id)
    }

    /// Number of line items (distinct products).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Increments the quantity of an existing line item.
    ///
    /// Returns false when the product is not in the cart.
    pub fn increment(&mut self, id: ProductId, by: u32) -> bool {
        match self.items.iter_mut().find(|item| item.product_id == id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(by);
                true
            }
            None => false,
        }
    }

    /// Adds a product snapshot to the cart.
    ///
    /// A repeated add increments the existing line item's quantity instead of
    /// creating a duplicate row.
    pub fn add(&mut self, product: Product, quantity: u32) -> Result<(), DomainError> {
        if quantity == 0 {
            return Err(DomainError::InvalidQuantity(0));
        }
        if self.increment(product.id, quantity) {
            return Ok(());
        }
        self.items.push(LineItem::new(product, quantity)?);
        Ok(())
    }

    /// Removes the line item for a product.
    ///
    /// Returns false when the product was not in the cart; absence is not an
    /// error.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.product_id != id);
        self.items.len() != before
    }

    /// Sets a line item's quantity to an exact value.
    ///
    /// A value of zero or less removes the item. Returns whether the cart
    /// actually changed (unknown products and same-value sets are no-ops).
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.items.iter_mut().find(|item| item.product_id == id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum over items of `unit_price * quantity`.
    pub fn subtotal(&self) -> Money {
        let cents = self
            .items
            .iter()
            .map(|item| item.line_total().amount())
            .fold(0i64, i64::saturating_add);
        Money::from_cents(cents, Currency::Usd)
    }

    /// Subtotal plus shipping, or zero for an empty cart.
    ///
    /// Shipping is not charged when there is nothing to ship, which also
    /// keeps the empty-cart total at exactly zero.
    pub fn final_total_usd(&self) -> Money {
        let subtotal = self.subtotal();
        if subtotal.is_zero() {
            Money::zero(Currency::Usd)
        } else {
            subtotal.plus(SHIPPING_FEE)
        }
    }

    /// Total units across all line items; the UI badge number.
    pub fn unit_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_repeated_add_merges_into_one_line() {
        let mut cart = Cart::new();
        cart.add(product(1, 1000), 1).unwrap();
        cart.add(product(1, 1000), 1).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item(ProductId::new(1)).unwrap().quantity, 2);
    }

    #[test]
    fn test_add_zero_quantity_fails() {
        let mut cart = Cart::new();
        let result = cart.add(product(1, 1000), 0);
        assert!(matches!(result, Err(DomainError::InvalidQuantity(0))));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_product_is_noop() {
        let mut cart = Cart::new();
        cart.add(product(1, 1000), 1).unwrap();
        assert!(!cart.remove(ProductId::new(99)));
        assert_eq!(cart.len(), 1);
        assert!(cart.remove(ProductId::new(1)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_floor_removes() {
        let mut cart = Cart::new();
        cart.add(product(1, 1000), 3).unwrap();

        assert!(cart.set_quantity(ProductId::new(1), 0));
        assert!(cart.is_empty());

        cart.add(product(1, 1000), 3).unwrap();
        assert!(cart.set_quantity(ProductId::new(1), -5));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_is_absolute() {
        let mut cart = Cart::new();
        cart.add(product(1, 1000), 3).unwrap();
        assert!(cart.set_quantity(ProductId::new(1), 7));
        assert_eq!(cart.item(ProductId::new(1)).unwrap().quantity, 7);
    }

    #[test]
    fn test_set_quantity_same_value_is_noop() {
        let mut cart = Cart::new();
        cart.add(product(1, 1000), 3).unwrap();
        assert!(!cart.set_quantity(ProductId::new(1), 3));
        assert!(!cart.set_quantity(ProductId::new(99), 5));
    }

    #[test]
    fn test_subtotal() {
        let mut cart = Cart::new();
        cart.add(product(1, 1000), 2).unwrap();
        cart.add(product(2, 500), 3).unwrap();
        assert_eq!(cart.subtotal().amount(), 3500);
    }

    #[test]
    fn test_shipping_gating() {
        let mut cart = Cart::new();
        assert_eq!(cart.final_total_usd().amount(), 0);

        cart.add(product(1, 1000), 2).unwrap();
        cart.add(product(2, 500), 3).unwrap();
        assert_eq!(cart.final_total_usd().amount(), 4200);
    }

    #[test]
    fn test_unit_count_vs_line_count() {
        let mut cart = Cart::new();
        cart.add(product(1, 1000), 2).unwrap();
        cart.add(product(2, 500), 3).unwrap();
        assert_eq!(cart.unit_count(), 5);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(product(1, 1000), 2).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.final_total_usd().amount(), 0);
    }
}
