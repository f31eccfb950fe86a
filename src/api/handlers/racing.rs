//! Race handlers: list and get.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{ListRacesRequest, ListRacesResponse};
use crate::app_state::AppState;
use crate::domain::Race;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /list-races` — List races with optional filter and order.
///
/// # Errors
///
/// Returns [`GatewayError`] if the query fails.
#[utoipa::path(
    post,
    path = "/api/v1/list-races",
    tag = "Racing",
    summary = "List races",
    description = "Returns every race matching the optional filter, ordered by the optional order parameter (advertised start time by default). An order field outside the whitelist disables ordering instead of failing.",
    request_body = ListRacesRequest,
    responses(
        (status = 200, description = "Matching races", body = ListRacesResponse),
        (status = 500, description = "Query failed", body = ErrorResponse),
    )
)]
pub async fn list_races(
    State(state): State<AppState>,
    Json(req): Json<ListRacesRequest>,
) -> Result<Json<ListRacesResponse>, GatewayError> {
    let races = state
        .racing_service
        .list_races(req.filter.as_ref(), req.order.as_ref())
        .await?;
    Ok(Json(ListRacesResponse { races }))
}

/// `GET /races/:id` — Get a single race.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] for a non-positive id and
/// [`GatewayError::NotFound`] if the race does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/races/{id}",
    tag = "Racing",
    summary = "Get race",
    description = "Returns one race with its derived status.",
    params(
        ("id" = i64, Path, description = "Race id (positive)"),
    ),
    responses(
        (status = 200, description = "Race details", body = Race),
        (status = 400, description = "Id is not positive", body = ErrorResponse),
        (status = 404, description = "Race not found", body = ErrorResponse),
    )
)]
pub async fn get_race(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Race>, GatewayError> {
    let race = state.racing_service.get_race(id).await?;
    Ok(Json(race))
}

/// Racing routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/list-races", post(list_races))
        .route("/races/{id}", get(get_race))
}
