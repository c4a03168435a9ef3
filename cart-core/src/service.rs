//! Cart State Manager
//!
//! Orchestrates cart mutations through the store and catalog ports.
//! Contains NO rendering or transport logic - pure state orchestration.

use std::panic::{AssertUnwindSafe, catch_unwind};

use cart_types::{
    BcvRate, Cart, CartError, CartStore, Currency, DomainError, LineItem, Money, Notifier,
    ProductCatalog, ProductId, SettingSource,
};

/// Fixed key the serialized item list lives under in the persistent store.
pub const STORAGE_KEY: &str = "cart";

type ChangeListener = Box<dyn Fn(&[LineItem]) + Send + Sync>;

/// The cart state manager.
///
/// Generic over the store, catalog, and notifier ports - adapters are
/// injected at construction. One instance owns one user's cart for the
/// duration of a session; all mutations go through its methods, and every
/// mutation persists the full item list before listeners run, so state that
/// was acknowledged is never lost to a crash.
pub struct CartManager<S, C, N>
where
    S: CartStore,
    C: ProductCatalog,
    N: Notifier,
{
    store: S,
    catalog: C,
    notifier: N,
    cart: Cart,
    rate: Option<BcvRate>,
    listeners: Vec<ChangeListener>,
}

impl<S, C, N> CartManager<S, C, N>
where
    S: CartStore,
    C: ProductCatalog,
    N: Notifier,
{
    /// Opens a cart over the given adapters, hydrating items from the store.
    ///
    /// A missing, unreadable, or unparseable persisted value degrades to an
    /// empty cart; corruption is never fatal.
    pub fn open(store: S, catalog: C, notifier: N) -> Self {
        let cart = match store.get(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<LineItem>>(&raw) {
                Ok(items) => Cart::from_items(items),
                Err(e) => {
                    tracing::warn!(error = %e, "persisted cart is unreadable, starting empty");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "cart store unavailable on load, starting empty");
                Cart::new()
            }
        };

        Self {
            store,
            catalog,
            notifier,
            cart,
            rate: None,
            listeners: Vec::new(),
        }
    }

    /// Resolves the BCV exchange rate from the shop settings.
    ///
    /// Any failure - transport, missing setting, unparseable or non-positive
    /// value - falls back to [`BcvRate::FALLBACK`]. Item operations never
    /// wait on this; only the bolívar total depends on it.
    pub async fn refresh_rate<R: SettingSource>(&mut self, source: &R, key: &str) -> BcvRate {
        let rate = match source.setting(key).await {
            Ok(raw) => match BcvRate::parse(&raw) {
                Ok(rate) => rate,
                Err(e) => {
                    tracing::debug!(key, error = %e, "unusable rate setting, using fallback");
                    BcvRate::FALLBACK
                }
            },
            Err(e) => {
                tracing::debug!(key, error = %e, "rate fetch failed, using fallback");
                BcvRate::FALLBACK
            }
        };
        self.rate = Some(rate);
        rate
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Adds `quantity` units of a product to the cart.
    ///
    /// A product already in the cart has its quantity incremented without
    /// touching the catalog; a new product is looked up first and captured as
    /// a snapshot. On lookup failure nothing is mutated and the failure is
    /// surfaced through the notifier as well as the returned error.
    pub async fn add_item(&mut self, id: ProductId, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(DomainError::InvalidQuantity(0).into());
        }

        let existing = self.cart.item(id).map(|item| item.name.clone());
        let name = match existing {
            Some(name) => {
                self.cart.increment(id, quantity);
                name
            }
            None => {
                let product = match self.catalog.product(id).await {
                    Ok(product) => product,
                    Err(e) => {
                        tracing::warn!(product = %id, error = %e, "product lookup failed");
                        self.notifier.error(&format!("Could not add product to cart: {e}"));
                        return Err(e.into());
                    }
                };
                let name = product.name.clone();
                self.cart.add(product, quantity)?;
                name
            }
        };

        self.commit()?;
        self.notifier.success(&format!("{name} added to cart"));
        Ok(())
    }

    /// Removes a product's line item. Absence is not an error; the cart is
    /// persisted and listeners notified either way.
    pub fn remove_item(&mut self, id: ProductId) -> Result<(), CartError> {
        self.cart.remove(id);
        self.commit()
    }

    /// Sets a line item's quantity to an exact value.
    ///
    /// Zero or negative removes the item. Unknown products are a no-op, and
    /// no-ops skip persistence and notification.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> Result<(), CartError> {
        if self.cart.set_quantity(id, quantity) {
            self.commit()?;
        }
        Ok(())
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.cart.clear();
        self.commit()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Derived queries
    // ─────────────────────────────────────────────────────────────────────────────

    /// Current line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Sum over items of `unit_price * quantity`.
    pub fn subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    /// Subtotal plus shipping, or zero for an empty cart.
    pub fn final_total_usd(&self) -> Money {
        self.cart.final_total_usd()
    }

    /// USD total converted at the resolved BCV rate; zero while the rate is
    /// still unresolved.
    pub fn final_total_ves(&self) -> Money {
        match self.rate {
            Some(rate) => rate
                .convert(self.cart.final_total_usd())
                .unwrap_or_else(|_| Money::zero(Currency::Ves)),
            None => Money::zero(Currency::Ves),
        }
    }

    /// Total units across all line items; the UI badge number.
    pub fn unit_count(&self) -> u64 {
        self.cart.unit_count()
    }

    /// Number of distinct line items.
    pub fn line_count(&self) -> usize {
        self.cart.len()
    }

    /// Returns true when the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// The resolved exchange rate, if [`refresh_rate`](Self::refresh_rate)
    /// has completed.
    pub fn rate(&self) -> Option<BcvRate> {
        self.rate
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Change notification
    // ─────────────────────────────────────────────────────────────────────────────

    /// Registers a callback invoked with the item snapshot after every
    /// mutation, in registration order.
    pub fn on_change(&mut self, listener: impl Fn(&[LineItem]) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Persists the full item list, then notifies listeners.
    ///
    /// Listeners run even when the write failed: the in-memory cart is the
    /// source of truth for the running session, and the UI must reflect it.
    /// The write error still reaches the caller.
    fn commit(&mut self) -> Result<(), CartError> {
        let result = self.persist();
        self.notify_listeners();
        result
    }

    fn persist(&self) -> Result<(), CartError> {
        let raw = serde_json::to_string(self.cart.items())?;
        self.store.set(STORAGE_KEY, &raw)?;
        Ok(())
    }

    fn notify_listeners(&self) {
        let items = self.cart.items();
        for listener in &self.listeners {
            // A panicking listener must not starve its siblings or abort the
            // mutation that triggered it.
            if catch_unwind(AssertUnwindSafe(|| listener(items))).is_err() {
                tracing::warn!("cart change listener panicked, continuing with the rest");
            }
        }
    }
}
