//! Persistent key-value store port.
//!
//! The cart mirrors its full item list into this store on every mutation,
//! as a whole-value overwrite under a fixed key. The contract is the
//! browser-storage one: synchronous string get/set scoped to the user.

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage IO failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Port trait for durable client-side storage.
///
/// Writes are whole-value overwrites, so implementations need no
/// transactional discipline.
pub trait CartStore: Send + Sync {
    /// Reads the serialized value under `key`, or None when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrites the value under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
