//! Thin HTTP client for the Paystack transaction API.
//!
//! The client performs exactly one round trip per call and hands the raw
//! reply back to the caller; deciding what a reply means is the mapper's job.

use std::time::Duration;

use reqwest::{Client, Method};
use serde_json::Value;
use tracing::debug;

use crate::config::PaystackConfig;

/// Raw upstream reply: HTTP status plus the decoded JSON body.
#[derive(Debug, Clone)]
pub struct GatewayReply {
    pub status: u16,
    pub body: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The secret key is absent from configuration. Raised before any
    /// network I/O is attempted.
    #[error("Paystack secret key not configured")]
    MissingCredential,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Authenticated Paystack client, built once at startup and shared across
/// requests.
pub struct PaystackGateway {
    client: Client,
    secret_key: Option<String>,
    base_url: String,
}

impl PaystackGateway {
    pub fn new(config: &PaystackConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            secret_key: config.secret_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a transaction. `payload` must already carry the minor-unit
    /// amount and currency code.
    pub async fn initialize_transaction(
        &self,
        payload: &Value,
    ) -> Result<GatewayReply, GatewayError> {
        self.request(Method::POST, "/transaction/initialize", Some(payload))
            .await
    }

    /// Fetches a transaction by its reference.
    pub async fn verify_transaction(&self, reference: &str) -> Result<GatewayReply, GatewayError> {
        self.request(
            Method::GET,
            &format!("/transaction/verify/{reference}"),
            None,
        )
        .await
    }

    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<GatewayReply, GatewayError> {
        let secret_key = self
            .secret_key
            .as_deref()
            .ok_or(GatewayError::MissingCredential)?;

        let url = format!("{}{}", self.base_url, endpoint);
        let mut request = self
            .client
            .request(method, &url)
            .header("Authorization", format!("Bearer {secret_key}"))
            .header("Content-Type", "application/json");

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        let body = serde_json::from_str(&text)?;
        debug!(status, endpoint, "Paystack replied");

        Ok(GatewayReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway_without_key() -> PaystackGateway {
        PaystackGateway::new(&PaystackConfig {
            secret_key: None,
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn missing_credential_fails_before_any_io() {
        let gateway = gateway_without_key();
        let err = gateway.verify_transaction("ref").await.unwrap_err();
        assert!(matches!(err, GatewayError::MissingCredential));

        let err = gateway
            .initialize_transaction(&serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::MissingCredential));
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let gateway = PaystackGateway::new(&PaystackConfig {
            secret_key: Some("sk".to_string()),
            base_url: "https://api.paystack.co/".to_string(),
            timeout_secs: 1,
        })
        .unwrap();
        assert_eq!(gateway.base_url, "https://api.paystack.co");
    }
}
