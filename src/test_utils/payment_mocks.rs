//! In-memory mock implementation of the payment provider port.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Mutex;

use crate::application::ports::payment_provider::{
    CheckoutSessionParams, CustomerId, NewCustomer, PaymentProviderPort, ProviderError,
    ProviderResult,
};

/// A call received by `InMemoryPaymentProvider`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    CheckoutSession(CheckoutSessionParams),
    BillingPortalSession {
        customer: CustomerId,
        return_url: String,
    },
    Customer(NewCustomer),
}

/// Records every call and answers with objects shaped like Stripe's,
/// built from the call's input. `failing()` makes every call error out.
#[derive(Default)]
pub struct InMemoryPaymentProvider {
    calls: Mutex<Vec<ProviderCall>>,
    fail: bool,
}

impl InMemoryPaymentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Get all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<ProviderCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Records the call, then returns how many calls of the same kind were made.
    fn record(&self, call: ProviderCall) -> ProviderResult<usize> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(call.clone());

        if self.fail {
            return Err(ProviderError::Api {
                status: 400,
                message: "No such customer: 'cus_test_123'".to_string(),
            });
        }

        Ok(calls
            .iter()
            .filter(|c| std::mem::discriminant(*c) == std::mem::discriminant(&call))
            .count())
    }
}

#[async_trait]
impl PaymentProviderPort for InMemoryPaymentProvider {
    async fn create_checkout_session(
        &self,
        params: &CheckoutSessionParams,
    ) -> ProviderResult<serde_json::Value> {
        let n = self.record(ProviderCall::CheckoutSession(params.clone()))?;

        Ok(json!({
            "id": format!("cs_test_{n}"),
            "object": "checkout.session",
            "mode": "subscription",
            "customer": params.customer.as_str(),
            "line_items": [{ "price": params.price_id, "quantity": 1 }],
            "success_url": params.urls.success_url,
            "cancel_url": params.urls.cancel_url,
            "metadata": params.metadata,
            "url": format!("https://checkout.stripe.com/c/pay/cs_test_{n}"),
        }))
    }

    async fn create_billing_portal_session(
        &self,
        customer: &CustomerId,
        return_url: &str,
    ) -> ProviderResult<serde_json::Value> {
        let n = self.record(ProviderCall::BillingPortalSession {
            customer: customer.clone(),
            return_url: return_url.to_string(),
        })?;

        Ok(json!({
            "id": format!("bps_test_{n}"),
            "object": "billing_portal.session",
            "customer": customer.as_str(),
            "return_url": return_url,
            "url": format!("https://billing.stripe.com/p/session/test_{n}"),
        }))
    }

    async fn create_customer(&self, customer: &NewCustomer) -> ProviderResult<CustomerId> {
        let n = self.record(ProviderCall::Customer(customer.clone()))?;
        Ok(CustomerId::new(format!("cus_test_{n}")))
    }
}
