pub mod anomaly;
pub mod lookup;
pub mod models;
pub mod regions;
pub mod state_vector;

pub use anomaly::{AnomalyDetector, AnomalyRules, DEFAULT_ALERT_LIMIT};
pub use models::{Anomaly, FlightState, Severity, Snapshot, UpdateFlightsResponse};
pub use regions::{BoundingBox, Region, RegionCatalog, DEFAULT_LIST_LIMIT};
pub use state_vector::{FormatError, SnapshotDocument, StateVectorResponse};
