//! # Request Payload
//!
//! Lenient JSON body extractor. Any JSON object is accepted verbatim; an
//! empty body or a JSON value that is not an object yields an empty
//! payload. Only bytes that do not parse as JSON are rejected; bodies that
//! cannot be read at all keep the status axum assigns them.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::Value;

use super::errors::RestError;
use crate::store::Record;

/// Record fields supplied by the caller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload(pub Record);

impl Payload {
    /// Parse raw body bytes
    pub fn from_bytes(body: &[u8]) -> Result<Self, RestError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let value: Value =
            serde_json::from_slice(body).map_err(|e| RestError::InvalidBody(e.to_string()))?;
        Ok(Self(Record::from_value(value)))
    }

    pub fn into_record(self) -> Record {
        self.0
    }
}

#[async_trait]
impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await?;
        Self::from_bytes(&body)
    }
}
