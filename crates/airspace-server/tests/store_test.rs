//! Snapshot store behaviour through the public library surface.

use airspace_core::{lookup, AnomalyDetector, RegionCatalog, Snapshot};
use airspace_server::config::{DataMode, ModeSelector};
use airspace_server::state::SnapshotStore;
use serde_json::json;
use std::path::PathBuf;

fn temp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("airspace-it-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn snapshot(icao24: &str, callsign: &str) -> Snapshot {
    serde_json::from_value(json!([{
        "icao24": icao24,
        "callsign": callsign,
        "origin_country": "Germany",
        "last_contact": 1700000000,
        "latitude": 48.0,
        "longitude": 8.0,
        "baro_altitude": 300.0,
        "velocity": 0.0,
        "on_ground": false,
        "spi": false,
        "position_source": 0
    }]))
    .expect("snapshot")
}

#[test]
fn test_mode_flag_is_consulted_on_every_load() {
    let dir = temp_dir();
    let flag = "AIRSPACE_IT_DEMO_FLAG";
    let store = SnapshotStore::new(
        dir.join("flights.json"),
        dir.join("flights_demo.json"),
        ModeSelector::Env(flag.to_string()),
    );

    std::env::set_var(flag, "false");
    store.replace(&snapshot("live01", "LIVE1")).unwrap();
    std::fs::write(
        dir.join("flights_demo.json"),
        serde_json::to_string(&snapshot("demo01", "DEMO1")).unwrap(),
    )
    .unwrap();

    assert_eq!(store.mode(), DataMode::Live);
    assert_eq!(store.load().unwrap().flights()[0].icao24, "live01");

    std::env::set_var(flag, "true");
    assert_eq!(store.mode(), DataMode::Demo);
    assert_eq!(store.load().unwrap().flights()[0].icao24, "demo01");

    // writes go live regardless of mode
    store.replace(&snapshot("live02", "LIVE2")).unwrap();
    assert_eq!(store.load().unwrap().flights()[0].icao24, "demo01");

    std::env::set_var(flag, "false");
    assert_eq!(store.load().unwrap().flights()[0].icao24, "live02");
    std::env::remove_var(flag);
}

#[test]
fn test_loaded_snapshot_feeds_every_query() {
    let dir = temp_dir();
    let store = SnapshotStore::new(
        dir.join("flights.json"),
        dir.join("flights_demo.json"),
        ModeSelector::Fixed(DataMode::Live),
    );
    store.replace(&snapshot("3c6444", "DLH9LF  ")).unwrap();

    let loaded = store.load_or_empty();
    assert_eq!(loaded, store.load_or_empty());

    assert_eq!(lookup::find(&loaded, "dlh9lf").unwrap().icao24, "3c6444");
    assert_eq!(RegionCatalog::default().filter(&loaded, Some("Region A"), 2).len(), 1);
    assert!(RegionCatalog::default().filter(&loaded, Some("Region B"), 2).is_empty());

    let alerts = AnomalyDetector::default().detect(&loaded, 1);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].description, "Stationary/Hovering in air (0.0 m/s)");
}
