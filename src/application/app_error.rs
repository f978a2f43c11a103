use thiserror::Error;

use crate::application::{ports::payment_provider::ProviderError, validators::ValidationError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request data")]
    InvalidRequest(#[source] ValidationError),

    #[error("Failed to create checkout session")]
    CheckoutSessionFailed(#[source] ProviderError),

    #[error("Failed to create billing portal session")]
    BillingPortalSessionFailed(#[source] ProviderError),

    #[error("Failed to create Stripe user")]
    CustomerCreationFailed(#[source] ProviderError),
}

#[derive(Clone, Copy, Debug)]
pub enum ErrorCode {
    InvalidRequest,
    UpstreamError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidRequest => "INVALID_REQUEST",
            ErrorCode::UpstreamError => "UPSTREAM_ERROR",
        }
    }
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidRequest(_) => ErrorCode::InvalidRequest,
            AppError::CheckoutSessionFailed(_)
            | AppError::BillingPortalSessionFailed(_)
            | AppError::CustomerCreationFailed(_) => ErrorCode::UpstreamError,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::InvalidRequest(e)
    }
}

pub type AppResult<T> = Result<T, AppError>;
