//! # Cart Core
//!
//! The cart state manager: single source of truth for what is in the cart,
//! how much it costs, and keeping any interested UI in sync across reloads.
//!
//! The manager is generic over the `CartStore`, `ProductCatalog`, and
//! `Notifier` ports, so adapters (file store, HTTP catalog, terminal
//! notifier, test doubles) are injected at compile time. Rendering stays
//! entirely outside this crate; the UI observes changes through the
//! `on_change` callback contract.

pub mod service;


pub use service::{CartManager, STORAGE_KEY};
