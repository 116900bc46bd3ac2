//! Live server integration tests.
//!
//! Run with: cargo test --test live_server_test -- --ignored
//!
//! Note: Requires a running airspace server at http://localhost:8000
//! or set AIRSPACE_TEST_URL environment variable. The tests overwrite the
//! server's live snapshot.

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

fn base_url() -> String {
    std::env::var("AIRSPACE_TEST_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

#[tokio::test]
#[ignore] // Run only when server is running
async fn test_update_and_lookup() {
    let client = Client::new();
    let base = base_url();

    let body = json!([{
        "icao24": "4ba9c1",
        "callsign": "THY4KZ  ",
        "origin_country": "Turkey",
        "last_contact": 1700000000,
        "latitude": 45.0,
        "longitude": 2.0,
        "on_ground": false,
        "velocity": 230.0,
        "baro_altitude": 11000.0,
        "spi": false,
        "position_source": 0
    }]);
    let resp = client
        .post(format!("{}/update-flights", base))
        .json(&body)
        .send()
        .await
        .expect("Failed to update flights");
    assert!(resp.status().is_success(), "Update should succeed");
    let reply: Value = resp.json().await.unwrap();
    assert_eq!(reply["count"], 1);

    let resp = client
        .get(format!("{}/flights/get", base))
        .query(&[("callsign", " thy4kz ")])
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success(), "Lookup should find the flight");

    let resp = client
        .get(format!("{}/flights/get", base))
        .query(&[("callsign", "NOPE123")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_region_listing_respects_limit() {
    let client = Client::new();
    let resp = client
        .get(format!("{}/flights/list", base_url()))
        .query(&[("region", "Region A"), ("limit", "1")])
        .send()
        .await
        .unwrap();

    let flights: Vec<Value> = resp.json().await.unwrap();
    assert!(flights.len() <= 1);
}
