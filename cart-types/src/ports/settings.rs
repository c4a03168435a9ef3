//! Shop settings port.
//!
//! The cart reads exactly one setting through this trait: the BCV exchange
//! rate. The value arrives as text and is parsed by the caller, which owns
//! the fallback policy.

/// Error type for setting reads.
#[derive(Debug, thiserror::Error)]
pub enum SettingError {
    #[error("Setting not found: {0}")]
    Missing(String),

    #[error("Settings service unreachable: {0}")]
    Transport(String),
}

/// Port trait for shop-wide settings.
#[async_trait::async_trait]
pub trait SettingSource: Send + Sync {
    /// Fetches the raw value of a setting by key.
    async fn setting(&self, key: &str) -> Result<String, SettingError>;
}
