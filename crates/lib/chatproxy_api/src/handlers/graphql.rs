//! GraphQL endpoint handler.

use async_graphql_axum::{GraphQLRequest, GraphQLResponse, rejection::GraphQLRejection};
use axum::extract::State;
use tracing::debug;

use crate::AppState;
use crate::error::{AppError, AppResult};

/// `POST /graphql` — execute a GraphQL request against the schema.
///
/// Malformed request bodies map to the JSON error envelope instead of the
/// extractor's default rejection.
pub async fn graphql_handler(
    State(state): State<AppState>,
    request: Result<GraphQLRequest, GraphQLRejection>,
) -> AppResult<GraphQLResponse> {
    let request =
        request.map_err(|e| AppError::Validation(format!("invalid GraphQL request: {}", e.0)))?;

    let response = state.schema.execute(request.into_inner()).await;
    if !response.errors.is_empty() {
        debug!(errors = response.errors.len(), "GraphQL request finished with errors");
    }
    Ok(response.into())
}
