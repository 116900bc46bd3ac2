//! Built-in traffic scenarios.

use airspace_core::{FlightState, Snapshot};

struct Track {
    icao24: &'static str,
    callsign: Option<&'static str>,
    country: &'static str,
    lat: f64,
    lon: f64,
    altitude_m: Option<f64>,
    speed_mps: Option<f64>,
    track_deg: f64,
    on_ground: bool,
}

impl Track {
    fn into_state(self, now: i64) -> FlightState {
        FlightState {
            icao24: self.icao24.to_string(),
            // feeds pad callsigns to eight characters
            callsign: self.callsign.map(|c| format!("{c:<8}")),
            origin_country: self.country.to_string(),
            time_position: Some(now - 1),
            last_contact: now,
            longitude: Some(self.lon),
            latitude: Some(self.lat),
            baro_altitude: self.altitude_m,
            on_ground: self.on_ground,
            velocity: self.speed_mps,
            true_track: Some(self.track_deg),
            vertical_rate: Some(0.0),
            sensors: None,
            geo_altitude: self.altitude_m.map(|a| a + 150.0),
            squawk: None,
            spi: false,
            position_source: 0,
        }
    }
}

/// Mixed traffic across both regions: normal cruise, one slow flight at
/// altitude, one hovering flight, one aircraft on the ground and one
/// flight outside every region.
pub fn demo_snapshot_at(now: i64) -> Snapshot {
    let tracks = [
        Track {
            icao24: "3c6444",
            callsign: Some("DLH9LF"),
            country: "Germany",
            lat: 48.35,
            lon: 8.9,
            altitude_m: Some(11_277.6),
            speed_mps: Some(236.4),
            track_deg: 265.0,
            on_ground: false,
        },
        Track {
            icao24: "4ba9c1",
            callsign: Some("THY4KZ"),
            country: "Turkey",
            lat: 45.1,
            lon: 2.3,
            altitude_m: Some(10_972.8),
            speed_mps: Some(72.0),
            track_deg: 301.5,
            on_ground: false,
        },
        Track {
            icao24: "a1b2c3",
            callsign: Some("AAL100"),
            country: "United States",
            lat: 35.2,
            lon: -101.7,
            altitude_m: Some(10_668.0),
            speed_mps: Some(228.9),
            track_deg: 88.0,
            on_ground: false,
        },
        Track {
            icao24: "a0f1e2",
            callsign: Some("N512HX"),
            country: "United States",
            lat: 40.71,
            lon: -74.0,
            altitude_m: Some(152.4),
            speed_mps: Some(0.0),
            track_deg: 0.0,
            on_ground: false,
        },
        Track {
            icao24: "3950c4",
            callsign: Some("AFR1144"),
            country: "France",
            lat: 49.01,
            lon: 2.55,
            altitude_m: None,
            speed_mps: Some(0.0),
            track_deg: 180.0,
            on_ground: true,
        },
        Track {
            icao24: "896475",
            callsign: None,
            country: "United Arab Emirates",
            lat: 25.25,
            lon: 55.36,
            altitude_m: Some(9_144.0),
            speed_mps: Some(240.2),
            track_deg: 120.0,
            on_ground: false,
        },
    ];

    Snapshot::new(tracks.into_iter().map(|t| t.into_state(now)).collect())
}

/// [`demo_snapshot_at`] stamped with the current time.
pub fn demo_snapshot() -> Snapshot {
    demo_snapshot_at(chrono::Utc::now().timestamp())
}
