//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! backed by an in-memory payment provider unless another one is supplied.

use std::sync::Arc;

use crate::{
    adapters::http::app_state::AppState,
    application::{
        ports::payment_provider::PaymentProviderPort, use_cases::billing::BillingUseCases,
    },
    test_utils::InMemoryPaymentProvider,
};

/// Builder for creating `AppState` with test dependencies.
///
/// # Example
///
/// ```ignore
/// let (app_state, provider) = TestAppStateBuilder::new().build_with_provider_mock();
/// // ... drive requests ...
/// assert_eq!(provider.calls().len(), 1);
/// ```
#[derive(Default)]
pub struct TestAppStateBuilder {
    provider: Option<Arc<dyn PaymentProviderPort>>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific payment provider (e.g. a failing mock or the Stripe echo adapter).
    pub fn with_provider(mut self, provider: Arc<dyn PaymentProviderPort>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Create app state with an in-memory provider.
    /// Returns the provider too, for asserting on recorded calls.
    pub fn build_with_provider_mock(self) -> (AppState, Arc<InMemoryPaymentProvider>) {
        let provider = Arc::new(InMemoryPaymentProvider::new());
        let app_state = self.with_provider(provider.clone()).build();
        (app_state, provider)
    }

    pub fn build(self) -> AppState {
        let provider = self
            .provider
            .unwrap_or_else(|| Arc::new(InMemoryPaymentProvider::new()));

        AppState {
            billing_use_cases: Arc::new(BillingUseCases::new(provider)),
        }
    }
}
