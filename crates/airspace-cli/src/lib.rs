//! Airspace CLI - command line tools for the airspace snapshot service.
//!
//! - `airspace push <file>`: replace the live snapshot from a JSON file
//! - `airspace flights`, `airspace get`, `airspace alerts`: query tables
//! - `airspace scenario`: push a built-in mixed-traffic snapshot

pub mod render;
pub mod scenarios;

pub use scenarios::demo_snapshot;
