//! REST API routes.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::{alerts, flights, request_id};
use crate::state::AppState;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/flights/list", get(flights::list_flights))
        .route("/flights/get", get(flights::get_flight))
        .route("/alerts/list", get(alerts::list_alerts))
        .route("/update-flights", post(flights::update_flights))
        .layer(middleware::from_fn(request_id::ensure_request_id))
}
