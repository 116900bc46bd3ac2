//! Threshold-based anomaly detection over a snapshot.
//!
//! Findings are produced in scan order (stored flight order, then rule
//! order within a flight) and truncated at the requested limit. The
//! output is first-found, not ranked by severity: a HIGH finding late in
//! the snapshot can be cut off by an earlier MEDIUM one.

use serde::{Deserialize, Serialize};

use crate::models::{Anomaly, FlightState, Severity, Snapshot};

/// Default number of findings returned by an alert listing.
pub const DEFAULT_ALERT_LIMIT: usize = 1;

/// Thresholds for the anomaly rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyRules {
    /// Barometric altitude above which low speed is suspicious (meters)
    pub high_altitude_m: f64,
    /// Speed below which a flight at high altitude is flagged (m/s)
    pub min_cruise_speed_mps: f64,
    /// Speed below which an airborne flight counts as stationary (m/s)
    pub hover_speed_mps: f64,
}

impl Default for AnomalyRules {
    fn default() -> Self {
        Self {
            high_altitude_m: 10_000.0,
            min_cruise_speed_mps: 100.0,
            hover_speed_mps: 10.0,
        }
    }
}

/// Applies [`AnomalyRules`] to snapshots.
#[derive(Debug, Clone, Default)]
pub struct AnomalyDetector {
    pub rules: AnomalyRules,
}

impl AnomalyDetector {
    pub fn new(rules: AnomalyRules) -> Self {
        Self { rules }
    }

    /// Collect at most `limit` findings, stopping the scan once reached.
    pub fn detect(&self, snapshot: &Snapshot, limit: usize) -> Vec<Anomaly> {
        let mut anomalies = Vec::new();

        for flight in snapshot {
            for finding in [self.low_speed_at_altitude(flight), self.stationary_in_air(flight)]
                .into_iter()
                .flatten()
            {
                if anomalies.len() >= limit {
                    return anomalies;
                }
                anomalies.push(finding);
            }
            if anomalies.len() >= limit {
                break;
            }
        }

        anomalies
    }

    /// HIGH: present altitude and speed, above the altitude threshold and
    /// below cruise speed.
    fn low_speed_at_altitude(&self, flight: &FlightState) -> Option<Anomaly> {
        let (altitude, velocity) = (flight.baro_altitude?, flight.velocity?);
        if altitude > self.rules.high_altitude_m && velocity < self.rules.min_cruise_speed_mps {
            return Some(Anomaly::for_flight(
                flight,
                Severity::High,
                format!("Low speed ({velocity:?} m/s) at high altitude ({altitude:?} m)"),
            ));
        }
        None
    }

    /// MEDIUM: airborne with a present speed below the hover threshold.
    /// Zero speed counts.
    fn stationary_in_air(&self, flight: &FlightState) -> Option<Anomaly> {
        let velocity = flight.velocity?;
        if !flight.on_ground && velocity < self.rules.hover_speed_mps {
            return Some(Anomaly::for_flight(
                flight,
                Severity::Medium,
                format!("Stationary/Hovering in air ({velocity:?} m/s)"),
            ));
        }
        None
    }
}
