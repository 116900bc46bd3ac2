//! Airspace SDK - client library for the airspace snapshot service
//!
//! Thin typed wrapper over the HTTP operations. All filtering and anomaly
//! rules live in the server; this crate only moves JSON.

pub mod client;

pub use airspace_core::{Anomaly, FlightState, Severity, Snapshot, UpdateFlightsResponse};
pub use client::{AirspaceClient, ClientError};
