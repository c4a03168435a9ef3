//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The state manager depends on these traits, not concrete implementations.

mod catalog;
mod notify;
mod settings;
mod store;

pub use catalog::{CatalogError, ProductCatalog};
pub use notify::{Notifier, SilentNotifier};
pub use settings::{SettingError, SettingSource};
pub use store::{CartStore, StoreError};
