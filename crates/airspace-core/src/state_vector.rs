//! Positional state-vector wire format.
//!
//! Raw feeds deliver `{"time": ..., "states": [[...], ...]}` where each
//! state is an array in a fixed field order. Ingestion may hand us that
//! container instead of the normalised flight array, so both document
//! shapes are accepted and the container is converted record by record.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::{FlightState, Snapshot};

/// Number of positional fields every state must carry. Feeds may append
/// more (aircraft category); those are ignored.
pub const STATE_FIELDS: usize = 17;

#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("state {index} has {len} fields, expected at least {STATE_FIELDS}")]
    TooShort { index: usize, len: usize },
    #[error("state {index}: field `{field}` has an unexpected type")]
    BadField { index: usize, field: &'static str },
}

/// Raw container as published by the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateVectorResponse {
    #[serde(default)]
    pub time: Option<i64>,
    /// Required key, nullable value; an object without it is not a response.
    #[serde(deserialize_with = "Option::deserialize")]
    pub states: Option<Vec<Vec<Value>>>,
}

impl StateVectorResponse {
    /// Convert every state, rejecting the whole response on the first bad one.
    pub fn into_snapshot(self) -> Result<Snapshot, FormatError> {
        let flights = self
            .states
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(index, state)| from_state_vector(index, state))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Snapshot::new(flights))
    }
}

/// Either document shape a snapshot may arrive in.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SnapshotDocument {
    Flights(Snapshot),
    StateVectors(StateVectorResponse),
}

impl SnapshotDocument {
    pub fn into_snapshot(self) -> Result<Snapshot, FormatError> {
        match self {
            SnapshotDocument::Flights(snapshot) => Ok(snapshot),
            SnapshotDocument::StateVectors(response) => response.into_snapshot(),
        }
    }
}

/// Convert one positional state into a [`FlightState`].
pub fn from_state_vector(index: usize, state: &[Value]) -> Result<FlightState, FormatError> {
    if state.len() < STATE_FIELDS {
        return Err(FormatError::TooShort {
            index,
            len: state.len(),
        });
    }
    let fields = Fields { index, state };

    Ok(FlightState {
        icao24: fields.string(0, "icao24")?,
        callsign: fields.opt_string(1, "callsign")?,
        origin_country: fields.string(2, "origin_country")?,
        time_position: fields.opt_int(3, "time_position")?,
        last_contact: fields.int(4, "last_contact")?,
        longitude: fields.opt_float(5, "longitude")?,
        latitude: fields.opt_float(6, "latitude")?,
        baro_altitude: fields.opt_float(7, "baro_altitude")?,
        on_ground: fields.bool(8, "on_ground")?,
        velocity: fields.opt_float(9, "velocity")?,
        true_track: fields.opt_float(10, "true_track")?,
        vertical_rate: fields.opt_float(11, "vertical_rate")?,
        sensors: fields.opt_sensors(12, "sensors")?,
        geo_altitude: fields.opt_float(13, "geo_altitude")?,
        squawk: fields.opt_string(14, "squawk")?,
        spi: fields.bool(15, "spi")?,
        position_source: fields.int(16, "position_source")?,
    })
}

struct Fields<'a> {
    index: usize,
    state: &'a [Value],
}

impl Fields<'_> {
    fn bad(&self, field: &'static str) -> FormatError {
        FormatError::BadField {
            index: self.index,
            field,
        }
    }

    fn present(&self, pos: usize) -> Option<&Value> {
        self.state.get(pos).filter(|v| !v.is_null())
    }

    fn opt_string(&self, pos: usize, field: &'static str) -> Result<Option<String>, FormatError> {
        self.present(pos)
            .map(|v| v.as_str().map(str::to_string).ok_or_else(|| self.bad(field)))
            .transpose()
    }

    fn string(&self, pos: usize, field: &'static str) -> Result<String, FormatError> {
        self.opt_string(pos, field)?.ok_or_else(|| self.bad(field))
    }

    fn opt_int(&self, pos: usize, field: &'static str) -> Result<Option<i64>, FormatError> {
        self.present(pos)
            .map(|v| v.as_i64().ok_or_else(|| self.bad(field)))
            .transpose()
    }

    fn int(&self, pos: usize, field: &'static str) -> Result<i64, FormatError> {
        self.opt_int(pos, field)?.ok_or_else(|| self.bad(field))
    }

    fn opt_float(&self, pos: usize, field: &'static str) -> Result<Option<f64>, FormatError> {
        self.present(pos)
            .map(|v| v.as_f64().ok_or_else(|| self.bad(field)))
            .transpose()
    }

    fn bool(&self, pos: usize, field: &'static str) -> Result<bool, FormatError> {
        self.present(pos)
            .and_then(Value::as_bool)
            .ok_or_else(|| self.bad(field))
    }

    fn opt_sensors(
        &self,
        pos: usize,
        field: &'static str,
    ) -> Result<Option<Vec<i64>>, FormatError> {
        self.present(pos)
            .map(|v| {
                v.as_array()
                    .and_then(|ids| ids.iter().map(Value::as_i64).collect::<Option<Vec<_>>>())
                    .ok_or_else(|| self.bad(field))
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_state() -> Value {
        json!([
            "4ba9c1", "THY4KZ  ", "Turkey", 1700000000, 1700000005,
            28.9, 41.2, 10972.8, false, 231.5, 87.2, 0.0,
            null, 11277.6, "2000", false, 0, 1
        ])
    }

    #[test]
    fn test_state_vector_converts_field_by_field() {
        let state = raw_state();
        let flight = from_state_vector(0, state.as_array().unwrap()).unwrap();

        assert_eq!(flight.icao24, "4ba9c1");
        assert_eq!(flight.callsign.as_deref(), Some("THY4KZ  "));
        assert_eq!(flight.time_position, Some(1_700_000_000));
        assert_eq!(flight.last_contact, 1_700_000_005);
        assert_eq!(flight.longitude, Some(28.9));
        assert_eq!(flight.latitude, Some(41.2));
        assert_eq!(flight.velocity, Some(231.5));
        assert_eq!(flight.vertical_rate, Some(0.0));
        assert!(flight.sensors.is_none());
        assert_eq!(flight.squawk.as_deref(), Some("2000"));
        assert_eq!(flight.position_source, 0);
    }

    #[test]
    fn test_short_state_is_rejected() {
        let err = from_state_vector(3, &[json!("4ba9c1"), json!("THY4KZ")]).unwrap_err();
        assert_eq!(err, FormatError::TooShort { index: 3, len: 2 });
    }

    #[test]
    fn test_wrong_typed_required_field_is_rejected() {
        let mut state = raw_state();
        state[8] = json!("no");
        let err = from_state_vector(0, state.as_array().unwrap()).unwrap_err();
        assert_eq!(
            err,
            FormatError::BadField {
                index: 0,
                field: "on_ground"
            }
        );
    }

    #[test]
    fn test_document_accepts_both_shapes() {
        let container: SnapshotDocument =
            serde_json::from_value(json!({ "time": 1700000010, "states": [raw_state()] })).unwrap();
        let from_container = container.into_snapshot().unwrap();
        assert_eq!(from_container.len(), 1);

        let array = serde_json::to_value(&from_container).unwrap();
        let flights: SnapshotDocument = serde_json::from_value(array).unwrap();
        assert_eq!(flights.into_snapshot().unwrap(), from_container);
    }

    #[test]
    fn test_null_states_is_empty() {
        let doc: SnapshotDocument =
            serde_json::from_value(json!({ "time": 1700000010, "states": null })).unwrap();
        assert!(doc.into_snapshot().unwrap().is_empty());
    }

    #[test]
    fn test_unrelated_object_is_not_a_document() {
        assert!(serde_json::from_value::<SnapshotDocument>(json!({ "flights": [] })).is_err());
    }
}
