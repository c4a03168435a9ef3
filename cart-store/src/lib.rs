//! # Cart Store
//!
//! Concrete store adapters for the cart.
//! This crate provides implementations of the `CartStore` port:
//!
//! - [`FileStore`] - one file per key under a data directory; the durable
//!   store used by the CLI, surviving process restarts the way browser
//!   storage survives reloads
//! - [`MemoryStore`] - shared in-memory map for tests and ephemeral sessions

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;
