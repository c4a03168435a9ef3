//! Data Transfer Objects for the upstream REST API.
//!
//! Every shop endpoint wraps its payload in a `{ success, data }` envelope.

use serde::{Deserialize, Serialize};

use crate::domain::{Currency, Money, Product, ProductId};
use crate::error::DomainError;

/// The shop API response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the backend considered the request successful
    pub success: bool,
    /// Payload; absent on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Payload of `GET /api/products/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPayload {
    /// Display name
    pub name: String,
    /// Unit price in decimal USD
    pub price: f64,
    /// Optional image path
    #[serde(default)]
    pub image: Option<String>,
}

impl ProductPayload {
    /// Converts the loosely-shaped API row into a validated domain snapshot.
    pub fn into_domain(self, id: ProductId) -> Result<Product, DomainError> {
        let unit_price = Money::from_decimal(self.price, Currency::Usd)?;
        Product::new(id, self.name, unit_price, self.image)
    }
}

/// Payload of `GET /api/settings/{key}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingPayload {
    /// Raw setting value; numeric settings arrive as text
    pub setting_value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_decodes_product() {
        let raw = r#"{"success":true,"data":{"name":"Red Roses","price":25.0,"image":"/img/roses.jpg"}}"#;
        let env: ApiEnvelope<ProductPayload> = serde_json::from_str(raw).unwrap();
        assert!(env.success);
        let product = env
            .data
            .unwrap()
            .into_domain(ProductId::new(1))
            .unwrap();
        assert_eq!(product.unit_price.amount(), 2500);
    }

    #[test]
    fn test_envelope_tolerates_missing_image() {
        let raw = r#"{"success":true,"data":{"name":"Tulips","price":9.99}}"#;
        let env: ApiEnvelope<ProductPayload> = serde_json::from_str(raw).unwrap();
        let product = env
            .data
            .unwrap()
            .into_domain(ProductId::new(2))
            .unwrap();
        assert_eq!(product.unit_price.amount(), 999);
        assert!(product.image_url.is_none());
    }

    #[test]
    fn test_negative_price_rejected() {
        let payload = ProductPayload {
            name: "Broken".to_string(),
            price: -1.0,
            image: None,
        };
        assert!(payload.into_domain(ProductId::new(3)).is_err());
    }

    #[test]
    fn test_setting_payload_decodes() {
        let raw = r#"{"success":true,"data":{"setting_value":"36.5"}}"#;
        let env: ApiEnvelope<SettingPayload> = serde_json::from_str(raw).unwrap();
        assert_eq!(env.data.unwrap().setting_value, "36.5");
    }
}
