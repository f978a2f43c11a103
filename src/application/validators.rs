//! Structural validation of inbound JSON bodies.
//!
//! Every request shape is a flat object of required, non-empty string fields.
//! Validation reads all fields before failing so the logged error names every
//! offending field at once.
//!
//! Bodies are walked as an untyped `serde_json::Value` rather than through
//! `#[derive(Deserialize)]`, which stops at the first bad field.

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::entities::{
    billing_portal::BillingPortalRequest, checkout::CheckoutRequest,
    customer::CreateCustomerRequest,
};

/// What is wrong with a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    Missing,
    NotAString,
    Empty,
}

impl FieldIssue {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldIssue::Missing => "missing",
            FieldIssue::NotAString => "not a string",
            FieldIssue::Empty => "empty",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub issue: FieldIssue,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.field, self.issue.as_str())
    }
}

/// Why a body was rejected. Logged only; callers see a generic message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("body could not be read: {0}")]
    UnreadableBody(String),

    #[error("body is not valid JSON: {0}")]
    MalformedJson(String),

    #[error("body is not a JSON object")]
    NotAnObject,

    #[error("invalid fields: {}", join_fields(.0))]
    Fields(Vec<FieldError>),
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Collects required string fields from a JSON object, recording every failure.
pub struct FieldReader<'a> {
    body: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
    pub fn new(body: &'a Map<String, Value>) -> Self {
        Self {
            body,
            errors: Vec::new(),
        }
    }

    /// Returns the field's value, or an empty string after recording the issue.
    pub fn required(&mut self, field: &'static str) -> String {
        let issue = match self.body.get(field) {
            None | Some(Value::Null) => FieldIssue::Missing,
            Some(Value::String(s)) if s.is_empty() => FieldIssue::Empty,
            Some(Value::String(s)) => return s.clone(),
            Some(_) => FieldIssue::NotAString,
        };
        self.errors.push(FieldError { field, issue });
        String::new()
    }

    pub fn finish<T>(self, shape: T) -> Result<T, ValidationError> {
        if self.errors.is_empty() {
            Ok(shape)
        } else {
            Err(ValidationError::Fields(self.errors))
        }
    }
}

/// A request body made of required string fields.
pub trait RequestShape: Sized {
    fn read(fields: &mut FieldReader<'_>) -> Self;

    fn from_json_slice(body: &[u8]) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| ValidationError::MalformedJson(e.to_string()))?;
        let Value::Object(map) = value else {
            return Err(ValidationError::NotAnObject);
        };

        let mut fields = FieldReader::new(&map);
        let shape = Self::read(&mut fields);
        fields.finish(shape)
    }
}

impl RequestShape for CheckoutRequest {
    fn read(fields: &mut FieldReader<'_>) -> Self {
        Self {
            price_id: fields.required("priceId"),
            customer_external_id: fields.required("customerExternalId"),
            user_id: fields.required("userId"),
            base_url: fields.required("baseUrl"),
        }
    }
}

impl RequestShape for BillingPortalRequest {
    fn read(fields: &mut FieldReader<'_>) -> Self {
        Self {
            customer_external_id: fields.required("customerExternalId"),
            return_url: fields.required("returnUrl"),
        }
    }
}

impl RequestShape for CreateCustomerRequest {
    fn read(fields: &mut FieldReader<'_>) -> Self {
        Self {
            email: fields.required("email"),
            name: fields.required("name"),
            user_id: fields.required("userId"),
        }
    }
}
