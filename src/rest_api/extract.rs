//! # Route Extractors
//!
//! `Path` and `Query` wrappers whose rejections are [`RestError`]s, so a
//! malformed URL gets the same `{"error": ...}` body as every other failure.

use axum::async_trait;
use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::errors::RestError;

/// Path parameters
#[derive(Debug, Clone)]
pub struct RoutePath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for RoutePath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

/// Query string parameters
#[derive(Debug, Clone)]
pub struct RouteQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for RouteQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}
