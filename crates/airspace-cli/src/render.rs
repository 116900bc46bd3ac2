//! Plain-text tables for terminal output.

use airspace_core::{Anomaly, FlightState, Severity};
use chrono::{TimeZone, Utc};

fn opt<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn opt_f1(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.1}")).unwrap_or_else(|| "-".to_string())
}

/// Unix seconds as `HH:MM:SSZ`, or the raw number when out of range.
pub fn contact_time(seconds: i64) -> String {
    Utc.timestamp_opt(seconds, 0)
        .single()
        .map(|t| t.format("%H:%M:%SZ").to_string())
        .unwrap_or_else(|| seconds.to_string())
}

pub fn flight_table(flights: &[FlightState]) -> String {
    if flights.is_empty() {
        return "No flights.\n".to_string();
    }

    let mut out = format!(
        "{:<8} {:<9} {:<16} {:>9} {:>10} {:>9} {:>7} {:<6} {:<9}\n",
        "ICAO24", "CALLSIGN", "COUNTRY", "LAT", "LON", "ALT(m)", "SPD", "GND", "CONTACT"
    );
    for f in flights {
        out.push_str(&format!(
            "{:<8} {:<9} {:<16} {:>9} {:>10} {:>9} {:>7} {:<6} {:<9}\n",
            f.icao24,
            f.callsign.as_deref().map(str::trim).unwrap_or("-"),
            f.origin_country,
            opt(f.latitude),
            opt(f.longitude),
            opt_f1(f.baro_altitude),
            opt_f1(f.velocity),
            f.on_ground,
            contact_time(f.last_contact),
        ));
    }
    out
}

pub fn alert_table(alerts: &[Anomaly]) -> String {
    if alerts.is_empty() {
        return "No active alerts.\n".to_string();
    }

    let mut out = String::new();
    for a in alerts {
        let marker = match a.severity {
            Severity::High => "HIGH  ",
            Severity::Medium => "MEDIUM",
        };
        out.push_str(&format!(
            "[{}] {} ({}): {}\n",
            marker,
            a.icao24,
            a.callsign.as_deref().map(str::trim).unwrap_or("-"),
            a.description
        ));
    }
    out
}
