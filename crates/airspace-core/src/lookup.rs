//! Identifier lookup over a snapshot.

use crate::models::{FlightState, Snapshot};

/// Normalize a caller-supplied callsign or ICAO24 for matching.
pub fn normalize_identifier(identifier: &str) -> String {
    identifier.trim().to_uppercase()
}

/// Find the first flight whose callsign or ICAO24 matches `identifier`.
///
/// Matching ignores case and surrounding whitespace. Records are scanned
/// in stored order, so a duplicated callsign resolves to its first
/// occurrence. A missing callsign normalizes to `""`, so a blank
/// identifier resolves to the first flight without one.
pub fn find<'a>(snapshot: &'a Snapshot, identifier: &str) -> Option<&'a FlightState> {
    let wanted = normalize_identifier(identifier);

    snapshot.iter().find(|flight| {
        flight.normalized_callsign() == wanted || flight.icao24.to_uppercase() == wanted
    })
}
