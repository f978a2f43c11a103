use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};

use crate::{
    app_error::AppError,
    application::validators::{RequestShape, ValidationError},
};

/// JSON body extractor that validates the body against a request shape.
///
/// Unlike `axum::Json` it ignores `Content-Type`, and every rejection
/// (unreadable body, bad JSON, missing or non-string fields) becomes
/// `AppError::InvalidRequest`.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: RequestShape + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ValidationError::UnreadableBody(e.body_text()))?;

        Ok(Self(T::from_json_slice(&body)?))
    }
}
