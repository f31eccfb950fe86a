//! Sports event handlers.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{ListEventsRequest, ListEventsResponse};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /list-events` — List sports events with optional filter and order.
///
/// # Errors
///
/// Returns [`GatewayError`] if the query fails.
#[utoipa::path(
    post,
    path = "/api/v1/list-events",
    tag = "Sports",
    summary = "List sports events",
    description = "Returns every sports event matching the optional filter (id set, name substring, type, location, visibility), ordered by the optional order parameter.",
    request_body = ListEventsRequest,
    responses(
        (status = 200, description = "Matching events", body = ListEventsResponse),
        (status = 500, description = "Query failed", body = ErrorResponse),
    )
)]
pub async fn list_events(
    State(state): State<AppState>,
    Json(req): Json<ListEventsRequest>,
) -> Result<Json<ListEventsResponse>, GatewayError> {
    let events = state
        .sports_service
        .list_events(req.filter.as_ref(), req.order.as_ref())
        .await?;
    Ok(Json(ListEventsResponse { events }))
}

/// Sports routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/list-events", post(list_events))
}
