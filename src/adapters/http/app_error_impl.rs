use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // The cause is logged here and never leaves the process.
        match &self {
            AppError::InvalidRequest(cause) => {
                tracing::warn!(code = self.code().as_str(), cause = %cause, "Rejected request body");
            }
            AppError::CheckoutSessionFailed(cause)
            | AppError::BillingPortalSessionFailed(cause)
            | AppError::CustomerCreationFailed(cause) => {
                tracing::error!(code = self.code().as_str(), error = %self, cause = %cause, "Payment provider call failed");
            }
        }

        let status = match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::CheckoutSessionFailed(_)
            | AppError::BillingPortalSessionFailed(_)
            | AppError::CustomerCreationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error_resp(status, &self.to_string())
    }
}

fn error_resp(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
