//! # chatproxy_api
//!
//! HTTP/GraphQL surface for ChatProxy.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod schema;

use std::sync::Arc;

use axum::Router;
use axum::routing::post;

use chatproxy_core::chat::ChatProxy;

use crate::schema::{ProxySchema, build_schema};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Executable GraphQL schema holding the chat proxy.
    pub schema: ProxySchema,
}

impl AppState {
    pub fn new(proxy: ChatProxy) -> Self {
        Self {
            schema: build_schema(Arc::new(proxy)),
        }
    }
}

/// Builds the Axum router with all routes and shared state.
///
/// The CORS middleware wraps the whole router, so `OPTIONS` preflights
/// are answered before route matching.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/graphql", post(handlers::graphql::graphql_handler))
        .layer(axum::middleware::from_fn(middleware::cors::permissive_cors))
        .with_state(state)
}
