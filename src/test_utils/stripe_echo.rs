//! In-process stand-in for the Stripe REST API.
//!
//! Each endpoint echoes the submitted form fields back as a flat JSON object,
//! keyed exactly as sent (e.g. `metadata[userId]`), next to `id`, `object`
//! and the received `authorization` header.

use std::sync::Arc;

use axum::{
    Form, Json, Router,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use secrecy::SecretString;
use serde_json::{Map, Value, json};

use crate::{
    application::ports::payment_provider::PaymentProviderPort,
    infra::{
        http_client::try_build_client, stripe_client::StripeClient,
        stripe_payment_adapter::StripePaymentAdapter,
    },
};

/// Customer creation with this email is declined with a Stripe error envelope.
pub const DECLINED_EMAIL: &str = "declined@example.com";

type FormFields = Form<Vec<(String, String)>>;

fn echo(id: &str, object: &str, headers: &HeaderMap, fields: Vec<(String, String)>) -> Value {
    let mut body = Map::new();
    for (key, value) in fields {
        body.insert(key, Value::String(value));
    }
    body.insert("id".to_string(), json!(id));
    body.insert("object".to_string(), json!(object));
    body.insert("livemode".to_string(), json!(false));
    if let Some(auth) = headers.get("authorization").and_then(|v| v.to_str().ok()) {
        body.insert("authorization".to_string(), json!(auth));
    }
    Value::Object(body)
}

async fn checkout_sessions(headers: HeaderMap, Form(fields): FormFields) -> Json<Value> {
    Json(echo("cs_test_echo", "checkout.session", &headers, fields))
}

async fn billing_portal_sessions(headers: HeaderMap, Form(fields): FormFields) -> Json<Value> {
    Json(echo("bps_test_echo", "billing_portal.session", &headers, fields))
}

async fn customers(headers: HeaderMap, Form(fields): FormFields) -> Response {
    let declined = fields
        .iter()
        .any(|(key, value)| key == "email" && value == DECLINED_EMAIL);
    if declined {
        let body = json!({
            "error": {
                "type": "card_error",
                "code": "card_declined",
                "message": "Your card was declined."
            }
        });
        return (StatusCode::PAYMENT_REQUIRED, Json(body)).into_response();
    }

    Json(echo("cus_test_echo", "customer", &headers, fields)).into_response()
}

/// Serves the echo API on an ephemeral port and returns its `/v1` base URL.
pub async fn spawn_stripe_echo() -> String {
    let app = Router::new()
        .route("/v1/checkout/sessions", post(checkout_sessions))
        .route("/v1/billing_portal/sessions", post(billing_portal_sessions))
        .route("/v1/customers", post(customers));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/v1", addr)
}

/// A real Stripe adapter pointed at a freshly spawned echo server.
pub async fn stripe_echo_provider() -> Arc<dyn PaymentProviderPort> {
    let base = spawn_stripe_echo().await;
    Arc::new(StripePaymentAdapter::new(StripeClient::new(
        try_build_client().unwrap(),
        SecretString::new("sk_test_echo".into()),
        &base,
    )))
}
