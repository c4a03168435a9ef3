//! # Cart Client
//!
//! A typed Rust client for the flower shop REST API.
//!
//! The cart consumes two endpoints, both wrapped in the shop's
//! `{ success, data }` envelope:
//!
//! - `GET /api/products/{id}` - catalog row for add-to-cart snapshots
//! - `GET /api/settings/{key}` - shop settings, e.g. the BCV exchange rate
//!
//! [`ShopClient`] implements the `ProductCatalog` and `SettingSource` ports,
//! so the state manager never sees HTTP.

use reqwest::Client;
use serde::de::DeserializeOwned;

use cart_types::{
    ApiEnvelope, CatalogError, Product, ProductCatalog, ProductId, ProductPayload, SettingError,
    SettingPayload, SettingSource,
};

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Malformed payload: {0}")]
    Payload(#[from] cart_types::DomainError),
}

/// Flower shop API client.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct ShopClient {
    base_url: String,
    http: Client,
}

impl ShopClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Fetches a product's catalog snapshot.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ClientError> {
        let payload: ProductPayload = self.get_envelope(&format!("/api/products/{id}")).await?;
        Ok(payload.into_domain(id)?)
    }

    /// Fetches a raw setting value.
    pub async fn get_setting(&self, key: &str) -> Result<String, ClientError> {
        let payload: SettingPayload = self.get_envelope(&format!("/api/settings/{key}")).await?;
        Ok(payload.setting_value)
    }

    async fn get_envelope<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ApiEnvelope<T> = resp.json().await?;
        match envelope.data {
            Some(data) if envelope.success => Ok(data),
            _ => Err(ClientError::Api {
                status: status.as_u16(),
                message: "response envelope reported failure".to_string(),
            }),
        }
    }
}

#[async_trait::async_trait]
impl ProductCatalog for ShopClient {
    async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.get_product(id).await.map_err(|e| match e {
            ClientError::Api { status: 404, .. } => CatalogError::NotFound(id),
            ClientError::Payload(inner) => CatalogError::Malformed(inner.to_string()),
            ClientError::Http(inner) if inner.is_decode() => {
                CatalogError::Malformed(inner.to_string())
            }
            other => CatalogError::Transport(other.to_string()),
        })
    }
}

#[async_trait::async_trait]
impl SettingSource for ShopClient {
    async fn setting(&self, key: &str) -> Result<String, SettingError> {
        self.get_setting(key).await.map_err(|e| match e {
            ClientError::Api { status: 404, .. } => SettingError::Missing(key.to_string()),
            other => SettingError::Transport(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ShopClient::new("http://localhost:3000");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = ShopClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }
}
