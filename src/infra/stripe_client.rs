use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashMap};

use crate::application::ports::payment_provider::{ProviderError, ProviderResult};

pub const STRIPE_API_BASE: &str = "https://api.stripe.com/v1";

pub struct StripeClient {
    client: Client,
    secret_key: SecretString,
    api_base: String,
}

impl StripeClient {
    pub fn new(client: Client, secret_key: SecretString, api_base: &str) -> Self {
        Self {
            client,
            secret_key,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    fn auth_header(&self) -> String {
        use base64::Engine;
        let encoded = base64::engine::general_purpose::STANDARD
            .encode(format!("{}:", self.secret_key.expose_secret()));
        format!("Basic {}", encoded)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path)
    }

    // ========================================================================
    // Customers
    // ========================================================================

    pub async fn create_customer(
        &self,
        email: &str,
        name: &str,
        metadata: &HashMap<String, String>,
    ) -> ProviderResult<StripeCustomer> {
        let mut params: Vec<(String, String)> = vec![
            ("email".to_string(), email.to_string()),
            ("name".to_string(), name.to_string()),
        ];
        push_metadata(&mut params, "metadata", metadata);

        self.post_form("customers", &params).await
    }

    // ========================================================================
    // Checkout Sessions
    // ========================================================================

    /// Creates a subscription-mode session and returns Stripe's object untouched.
    pub async fn create_checkout_session(
        &self,
        customer_id: &str,
        price_id: &str,
        success_url: &str,
        cancel_url: &str,
        metadata: &HashMap<String, String>,
    ) -> ProviderResult<serde_json::Value> {
        let mut params: Vec<(String, String)> = vec![
            ("customer".to_string(), customer_id.to_string()),
            ("mode".to_string(), "subscription".to_string()),
            ("line_items[0][price]".to_string(), price_id.to_string()),
            ("line_items[0][quantity]".to_string(), "1".to_string()),
            ("success_url".to_string(), success_url.to_string()),
            ("cancel_url".to_string(), cancel_url.to_string()),
        ];
        push_metadata(&mut params, "metadata", metadata);

        self.post_form("checkout/sessions", &params).await
    }

    // ========================================================================
    // Customer Portal
    // ========================================================================

    pub async fn create_portal_session(
        &self,
        customer_id: &str,
        return_url: &str,
    ) -> ProviderResult<serde_json::Value> {
        let params = vec![
            ("customer".to_string(), customer_id.to_string()),
            ("return_url".to_string(), return_url.to_string()),
        ];

        self.post_form("billing_portal/sessions", &params).await
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> ProviderResult<T> {
        let response = self
            .client
            .post(self.url(path))
            .header("Authorization", self.auth_header())
            .form(params)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ProviderResult<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            tracing::error!(status = %status, body = %body, "Stripe API error");

            let message = match serde_json::from_str::<StripeErrorResponse>(&body) {
                Ok(StripeErrorResponse { error }) => {
                    tracing::warn!(
                        error_type = %error.error_type,
                        code = error.code.as_deref().unwrap_or("none"),
                        "Stripe rejected the request"
                    );
                    error.message.unwrap_or(error.error_type)
                }
                Err(_) => body,
            };
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(body = %body, error = %e, "Failed to parse Stripe response");
            ProviderError::Decode(e.to_string())
        })
    }
}

/// Flattens metadata into Stripe's bracketed form keys, in key order.
fn push_metadata(
    params: &mut Vec<(String, String)>,
    prefix: &str,
    metadata: &HashMap<String, String>,
) {
    let sorted: BTreeMap<&String, &String> = metadata.iter().collect();
    for (key, value) in sorted {
        params.push((format!("{}[{}]", prefix, key), value.clone()));
    }
}

// ============================================================================
// Stripe Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct StripeCustomer {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StripeErrorResponse {
    pub error: StripeError,
}

#[derive(Debug, Deserialize)]
pub struct StripeError {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: Option<String>,
    pub code: Option<String>,
}
