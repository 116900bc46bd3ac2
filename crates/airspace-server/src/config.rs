//! Server configuration from environment.

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

/// Environment variable consulted on every load when the mode is not pinned.
pub const DEMO_FLAG_VAR: &str = "USE_DEMO_DATA";

/// Which backing snapshot file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataMode {
    Live,
    Demo,
}

impl DataMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "live" => Some(Self::Live),
            "demo" => Some(Self::Demo),
            _ => None,
        }
    }

    /// `"true"` (any case) selects demo, anything else live.
    pub fn from_demo_flag(flag: &str) -> Self {
        if flag.trim().eq_ignore_ascii_case("true") {
            Self::Demo
        } else {
            Self::Live
        }
    }
}

/// How the store decides between live and demo data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeSelector {
    /// Fixed when the store is built.
    Fixed(DataMode),
    /// Read from the named environment variable on each load. A flip can
    /// race with in-flight reads; either mode may be observed until it
    /// settles.
    Env(String),
}

impl ModeSelector {
    pub fn resolve(&self) -> DataMode {
        match self {
            ModeSelector::Fixed(mode) => *mode,
            ModeSelector::Env(var) => env::var(var)
                .map(|flag| DataMode::from_demo_flag(&flag))
                .unwrap_or(DataMode::Live),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub server_port: u16,
    pub live_path: PathBuf,
    pub demo_path: PathBuf,
    pub mode: ModeSelector,
    /// Emit JSON log lines instead of human-readable ones
    pub json_logs: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let data_dir =
            PathBuf::from(env::var("AIRSPACE_DATA_DIR").unwrap_or_else(|_| "data".to_string()));

        Self {
            bind_addr: env::var("AIRSPACE_BIND")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(IpAddr::from([0, 0, 0, 0])),
            server_port: env::var("AIRSPACE_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8000),
            live_path: data_dir.join(
                env::var("AIRSPACE_LIVE_FILE").unwrap_or_else(|_| "flights.json".to_string()),
            ),
            demo_path: data_dir.join(
                env::var("AIRSPACE_DEMO_FILE").unwrap_or_else(|_| "flights_demo.json".to_string()),
            ),
            mode: env::var("AIRSPACE_MODE")
                .ok()
                .and_then(|s| DataMode::parse(&s))
                .map(ModeSelector::Fixed)
                .unwrap_or_else(|| ModeSelector::Env(DEMO_FLAG_VAR.to_string())),
            json_logs: env::var("AIRSPACE_LOG_FORMAT")
                .map(|f| f.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }
}
