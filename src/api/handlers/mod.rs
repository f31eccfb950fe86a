//! REST endpoint handlers organized by resource.

pub mod racing;
pub mod sports;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(racing::routes())
        .merge(sports::routes())
}
