//! Billing routes: checkout sessions, billing portal sessions, customers.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::post};
use serde::Serialize;

use crate::{
    adapters::http::{app_state::AppState, extract::ValidatedJson},
    app_error::AppResult,
    domain::entities::{
        billing_portal::BillingPortalRequest, checkout::CheckoutRequest,
        customer::CreateCustomerRequest,
    },
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateCustomerResponse {
    customer_id: String,
}

/// POST /create-checkout-session
/// Creates a subscription checkout session and returns Stripe's session object
async fn create_checkout_session(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CheckoutRequest>,
) -> AppResult<impl IntoResponse> {
    let session = app_state
        .billing_use_cases
        .create_checkout_session(payload)
        .await?;

    Ok(Json(session))
}

/// POST /create-billing-portal-session
/// Creates a billing portal session and returns Stripe's session object
async fn create_billing_portal_session(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BillingPortalRequest>,
) -> AppResult<impl IntoResponse> {
    let session = app_state
        .billing_use_cases
        .create_billing_portal_session(payload)
        .await?;

    Ok(Json(session))
}

/// POST /create-stripe-user
/// Creates a Stripe customer and returns only its id
async fn create_stripe_user(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCustomerRequest>,
) -> AppResult<impl IntoResponse> {
    let customer_id = app_state
        .billing_use_cases
        .create_customer(payload)
        .await?;

    Ok(Json(CreateCustomerResponse {
        customer_id: customer_id.0,
    }))
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/create-checkout-session", post(create_checkout_session))
        .route(
            "/create-billing-portal-session",
            post(create_billing_portal_session),
        )
        .route("/create-stripe-user", post(create_stripe_user))
}
