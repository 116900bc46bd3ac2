//! Shared application state.

pub mod store;

use airspace_core::{AnomalyDetector, RegionCatalog, Snapshot};

use crate::config::Config;
pub use store::{SnapshotStore, StoreError};

/// Everything a request handler needs. Snapshots are not cached; every
/// request loads through the store.
pub struct AppState {
    pub store: SnapshotStore,
    pub regions: RegionCatalog,
    pub detector: AnomalyDetector,
}

impl AppState {
    pub fn new(store: SnapshotStore) -> Self {
        Self {
            store,
            regions: RegionCatalog::default(),
            detector: AnomalyDetector::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(SnapshotStore::from_config(config))
    }

    /// Load the current snapshot on the blocking pool; failures read as empty.
    pub async fn load_snapshot(&self) -> Snapshot {
        let store = self.store.clone();
        match tokio::task::spawn_blocking(move || store.load_or_empty()).await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::error!("Snapshot load task failed: {}", err);
                Snapshot::default()
            }
        }
    }

    /// Replace the live snapshot on the blocking pool.
    pub async fn replace_snapshot(&self, snapshot: Snapshot) -> Result<usize, StoreError> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.replace(&snapshot))
            .await
            .unwrap_or_else(|err| {
                Err(StoreError::Unwritable {
                    path: self.store.live_path().to_path_buf(),
                    source: std::io::Error::other(err),
                })
            })
    }
}
