//! # REST API HTTP Server
//!
//! Axum routes for the `/tables` endpoints.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::errors::RestError;
use super::extract::{RoutePath, RouteQuery};
use super::handler::RestHandler;
use super::parser::ListParams;
use super::payload::Payload;
use super::response::ListResponse;
use crate::store::Record;

/// REST API server state
pub struct RestServer<H: RestHandler> {
    handler: Arc<H>,
}

impl<H: RestHandler + 'static> RestServer<H> {
    pub fn new(handler: H) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        let state = Arc::new(self);

        Router::new()
            .route("/tables/:table", get(list_handler::<H>).post(insert_handler::<H>))
            .route(
                "/tables/:table/:id",
                get(get_handler::<H>)
                    .put(replace_handler::<H>)
                    .patch(merge_handler::<H>)
                    .delete(delete_handler::<H>),
            )
            .with_state(state)
    }
}

/// Shared state type
type ServerState<H> = Arc<RestServer<H>>;

/// List records handler
async fn list_handler<H: RestHandler + 'static>(
    State(server): State<ServerState<H>>,
    RoutePath(table): RoutePath<String>,
    RouteQuery(query): RouteQuery<HashMap<String, String>>,
) -> Result<Json<ListResponse<Record>>, RestError> {
    let params = ListParams::parse(&query);

    let result = server.handler.list(&table, params)?;
    Ok(Json(result))
}

/// Get single record handler
async fn get_handler<H: RestHandler + 'static>(
    State(server): State<ServerState<H>>,
    RoutePath((table, id)): RoutePath<(String, String)>,
) -> Result<Json<Record>, RestError> {
    let result = server.handler.get(&table, &id)?;
    Ok(Json(result))
}

/// Insert record handler
async fn insert_handler<H: RestHandler + 'static>(
    State(server): State<ServerState<H>>,
    RoutePath(table): RoutePath<String>,
    payload: Payload,
) -> Result<(StatusCode, Json<Record>), RestError> {
    let result = server.handler.insert(&table, payload.into_record())?;
    Ok((StatusCode::CREATED, Json(result)))
}

/// Full update handler (PUT)
async fn replace_handler<H: RestHandler + 'static>(
    State(server): State<ServerState<H>>,
    RoutePath((table, id)): RoutePath<(String, String)>,
    payload: Payload,
) -> Result<Json<Record>, RestError> {
    let result = server.handler.replace(&table, &id, payload.into_record())?;
    Ok(Json(result))
}

/// Partial update handler (PATCH)
async fn merge_handler<H: RestHandler + 'static>(
    State(server): State<ServerState<H>>,
    RoutePath((table, id)): RoutePath<(String, String)>,
    payload: Payload,
) -> Result<Json<Record>, RestError> {
    let result = server.handler.merge(&table, &id, payload.into_record())?;
    Ok(Json(result))
}

/// Delete record handler
async fn delete_handler<H: RestHandler + 'static>(
    State(server): State<ServerState<H>>,
    RoutePath((table, id)): RoutePath<(String, String)>,
) -> Result<StatusCode, RestError> {
    server.handler.delete(&table, &id)?;
    Ok(StatusCode::NO_CONTENT)
}
