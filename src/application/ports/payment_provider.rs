use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

use crate::domain::entities::checkout::CheckoutUrls;

// ============================================================================
// Port Types - Provider-agnostic domain types
// ============================================================================

/// Unique identifier for a customer in a payment provider
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomerId(pub String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything needed to open a subscription-mode checkout session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSessionParams {
    pub customer: CustomerId,
    pub price_id: String,
    pub urls: CheckoutUrls,
    /// Opaque key/value pairs stored on the session
    pub metadata: HashMap<String, String>,
}

/// A customer to be created in the payment provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub email: String,
    pub name: String,
    pub metadata: HashMap<String, String>,
}

/// Failure talking to the payment provider.
///
/// The variants only matter for logs: callers receive the same
/// server error whatever the cause.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("request to payment provider failed: {0}")]
    Transport(String),

    #[error("payment provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("could not decode payment provider response: {0}")]
    Decode(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

// ============================================================================
// Payment Provider Port
// ============================================================================

/// Payment provider port - the only way the gateway reaches the external platform.
///
/// Every call creates billable state on the provider side; nothing is
/// retried or reconciled here.
#[async_trait]
pub trait PaymentProviderPort: Send + Sync {
    /// Create a subscription checkout session. Returns the provider's raw session object.
    async fn create_checkout_session(
        &self,
        params: &CheckoutSessionParams,
    ) -> ProviderResult<serde_json::Value>;

    /// Create a billing portal session. Returns the provider's raw session object.
    async fn create_billing_portal_session(
        &self,
        customer: &CustomerId,
        return_url: &str,
    ) -> ProviderResult<serde_json::Value>;

    /// Create a customer and return its provider id.
    async fn create_customer(&self, customer: &NewCustomer) -> ProviderResult<CustomerId>;
}
