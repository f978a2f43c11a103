use async_trait::async_trait;

use crate::{
    application::ports::payment_provider::{
        CheckoutSessionParams, CustomerId, NewCustomer, PaymentProviderPort, ProviderResult,
    },
    infra::stripe_client::StripeClient,
};

/// Adapter that wraps StripeClient to implement PaymentProviderPort.
pub struct StripePaymentAdapter {
    client: StripeClient,
}

impl StripePaymentAdapter {
    pub fn new(client: StripeClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PaymentProviderPort for StripePaymentAdapter {
    async fn create_checkout_session(
        &self,
        params: &CheckoutSessionParams,
    ) -> ProviderResult<serde_json::Value> {
        self.client
            .create_checkout_session(
                params.customer.as_str(),
                &params.price_id,
                &params.urls.success_url,
                &params.urls.cancel_url,
                &params.metadata,
            )
            .await
    }

    async fn create_billing_portal_session(
        &self,
        customer: &CustomerId,
        return_url: &str,
    ) -> ProviderResult<serde_json::Value> {
        self.client
            .create_portal_session(customer.as_str(), return_url)
            .await
    }

    async fn create_customer(&self, customer: &NewCustomer) -> ProviderResult<CustomerId> {
        let created = self
            .client
            .create_customer(&customer.email, &customer.name, &customer.metadata)
            .await?;
        Ok(CustomerId::new(created.id))
    }
}
