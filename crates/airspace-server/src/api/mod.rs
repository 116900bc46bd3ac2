//! API routes for the airspace server.

pub mod alerts;
pub mod error;
pub mod flights;
pub mod request_id;
mod routes;

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    routes::create_router()
}
