//! Flight listing, lookup and snapshot replacement.

use airspace_core::{
    lookup, FlightState, SnapshotDocument, UpdateFlightsResponse, DEFAULT_LIST_LIMIT,
};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListFlightsQuery {
    /// Region name; unknown names list unfiltered
    pub region: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct GetFlightQuery {
    /// Callsign or ICAO24
    pub callsign: String,
}

/// GET /flights/list
pub async fn list_flights(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListFlightsQuery>,
) -> Json<Vec<FlightState>> {
    let snapshot = state.load_snapshot().await;
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    let region = query.region.as_deref().filter(|r| !r.is_empty());

    let flights: Vec<FlightState> = state
        .regions
        .filter(&snapshot, region, limit)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(region = ?region, limit, returned = flights.len(), "Listed flights");
    Json(flights)
}

/// GET /flights/get
pub async fn get_flight(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GetFlightQuery>,
) -> Result<Json<FlightState>, ApiError> {
    let snapshot = state.load_snapshot().await;
    lookup::find(&snapshot, &query.callsign)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// POST /update-flights
///
/// Accepts a flight array or a raw state-vector container and replaces the
/// live snapshot with it.
pub async fn update_flights(
    State(state): State<Arc<AppState>>,
    Json(document): Json<SnapshotDocument>,
) -> Result<Json<UpdateFlightsResponse>, ApiError> {
    let snapshot = document.into_snapshot().map_err(|err| {
        tracing::warn!("Rejected snapshot update: {}", err);
        ApiError::BadRequest(err.to_string())
    })?;

    match state.replace_snapshot(snapshot).await {
        Ok(count) => Ok(Json(UpdateFlightsResponse {
            success: true,
            count,
        })),
        Err(err) => {
            tracing::error!("Failed to replace snapshot: {}", err);
            Err(ApiError::Internal(err.to_string()))
        }
    }
}
