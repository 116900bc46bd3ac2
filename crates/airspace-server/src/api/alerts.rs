//! Anomaly alert endpoints.

use airspace_core::{Anomaly, DEFAULT_ALERT_LIMIT};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AlertsQuery {
    pub limit: Option<usize>,
}

/// GET /alerts/list
///
/// First-found findings in snapshot order, not ranked by severity.
pub async fn list_alerts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AlertsQuery>,
) -> Json<Vec<Anomaly>> {
    let snapshot = state.load_snapshot().await;
    let limit = query.limit.unwrap_or(DEFAULT_ALERT_LIMIT);
    Json(state.detector.detect(&snapshot, limit))
}
