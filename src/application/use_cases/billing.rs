use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::payment_provider::{
        CheckoutSessionParams, CustomerId, NewCustomer, PaymentProviderPort,
    },
    domain::entities::{
        billing_portal::BillingPortalRequest, checkout::CheckoutRequest,
        customer::CreateCustomerRequest,
    },
};

/// Metadata key carrying the caller's user id.
pub const USER_ID_METADATA_KEY: &str = "userId";
/// Metadata key carrying the subscribed price id on checkout sessions.
pub const PRICE_ID_METADATA_KEY: &str = "priceId";

/// Forwards validated billing requests to the payment provider.
#[derive(Clone)]
pub struct BillingUseCases {
    provider: Arc<dyn PaymentProviderPort>,
}

impl BillingUseCases {
    pub fn new(provider: Arc<dyn PaymentProviderPort>) -> Self {
        Self { provider }
    }

    pub async fn create_checkout_session(
        &self,
        request: CheckoutRequest,
    ) -> AppResult<serde_json::Value> {
        let params = CheckoutSessionParams {
            urls: request.redirect_urls(),
            customer: CustomerId::new(request.customer_external_id),
            metadata: HashMap::from([
                (USER_ID_METADATA_KEY.to_string(), request.user_id),
                (PRICE_ID_METADATA_KEY.to_string(), request.price_id.clone()),
            ]),
            price_id: request.price_id,
        };

        let session = self
            .provider
            .create_checkout_session(&params)
            .await
            .map_err(AppError::CheckoutSessionFailed)?;

        tracing::info!(
            customer_id = %params.customer,
            price_id = %params.price_id,
            session_id = ?session.get("id"),
            "Created checkout session"
        );
        Ok(session)
    }

    pub async fn create_billing_portal_session(
        &self,
        request: BillingPortalRequest,
    ) -> AppResult<serde_json::Value> {
        let customer = CustomerId::new(request.customer_external_id);

        let session = self
            .provider
            .create_billing_portal_session(&customer, &request.return_url)
            .await
            .map_err(AppError::BillingPortalSessionFailed)?;

        tracing::info!(
            customer_id = %customer,
            session_id = ?session.get("id"),
            "Created billing portal session"
        );
        Ok(session)
    }

    pub async fn create_customer(&self, request: CreateCustomerRequest) -> AppResult<CustomerId> {
        let customer = NewCustomer {
            email: request.email,
            name: request.name,
            metadata: HashMap::from([(USER_ID_METADATA_KEY.to_string(), request.user_id)]),
        };

        let customer_id = self
            .provider
            .create_customer(&customer)
            .await
            .map_err(AppError::CustomerCreationFailed)?;

        tracing::info!(customer_id = %customer_id, "Created customer");
        Ok(customer_id)
    }
}
