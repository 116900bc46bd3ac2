//! Core data models for the airspace service.

use serde::{Deserialize, Serialize};

/// State of one tracked aircraft within a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    /// Transponder address, unique within a snapshot
    pub icao24: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callsign: Option<String>,
    pub origin_country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_position: Option<i64>,
    pub last_contact: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Barometric altitude in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baro_altitude: Option<f64>,
    pub on_ground: bool,
    /// Ground speed in m/s
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub true_track: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensors: Option<Vec<i64>>,
    /// Geometric altitude in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo_altitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub squawk: Option<String>,
    pub spi: bool,
    pub position_source: i64,
}

impl FlightState {
    /// Position as `(lat, lon)` when both coordinates are usable.
    ///
    /// A coordinate of exactly zero counts as missing, the same as an
    /// absent one.
    pub fn position(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat != 0.0 && lon != 0.0 => Some((lat, lon)),
            _ => None,
        }
    }

    /// Callsign trimmed and upper-cased, empty when absent.
    pub fn normalized_callsign(&self) -> String {
        self.callsign
            .as_deref()
            .map(|c| c.trim().to_uppercase())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    High,
    Medium,
}

/// Rule-derived finding about a single flight. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub icao24: String,
    pub callsign: Option<String>,
    pub description: String,
    pub severity: Severity,
}

impl Anomaly {
    pub fn for_flight(flight: &FlightState, severity: Severity, description: String) -> Self {
        Self {
            icao24: flight.icao24.clone(),
            callsign: flight.callsign.clone(),
            description,
            severity,
        }
    }
}

/// Reply to a snapshot replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFlightsResponse {
    pub success: bool,
    pub count: usize,
}

/// The complete set of currently known flights, in stored order.
///
/// Serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    flights: Vec<FlightState>,
}

impl Snapshot {
    pub fn new(flights: Vec<FlightState>) -> Self {
        Self { flights }
    }

    pub fn flights(&self) -> &[FlightState] {
        &self.flights
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlightState> {
        self.flights.iter()
    }

    pub fn into_flights(self) -> Vec<FlightState> {
        self.flights
    }
}

impl From<Vec<FlightState>> for Snapshot {
    fn from(flights: Vec<FlightState>) -> Self {
        Self::new(flights)
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a FlightState;
    type IntoIter = std::slice::Iter<'a, FlightState>;

    fn into_iter(self) -> Self::IntoIter {
        self.flights.iter()
    }
}
