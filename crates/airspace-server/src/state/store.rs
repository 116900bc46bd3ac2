//! File-backed snapshot store.
//!
//! Two JSON files hold the live and demo snapshots. Reads pick one per
//! call through the configured [`ModeSelector`]; writes always target the
//! live file and replace it with an atomic rename, so a concurrent reader
//! sees either the old or the new snapshot, never a partial one.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use airspace_core::{FormatError, Snapshot, SnapshotDocument};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{Config, DataMode, ModeSelector};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("snapshot {path} is unreadable: {reason}")]
    Unreadable { path: PathBuf, reason: String },
    #[error("snapshot {path} is in an unsupported format: {source}")]
    UnsupportedFormat {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
    #[error("failed to write snapshot {path}: {source}")]
    Unwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct SnapshotStore {
    live_path: PathBuf,
    demo_path: PathBuf,
    mode: ModeSelector,
}

impl SnapshotStore {
    pub fn new(
        live_path: impl Into<PathBuf>,
        demo_path: impl Into<PathBuf>,
        mode: ModeSelector,
    ) -> Self {
        Self {
            live_path: live_path.into(),
            demo_path: demo_path.into(),
            mode,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.live_path, &config.demo_path, config.mode.clone())
    }

    pub fn mode(&self) -> DataMode {
        self.mode.resolve()
    }

    /// Backing file for the mode in effect right now.
    pub fn active_path(&self) -> &Path {
        match self.mode() {
            DataMode::Live => &self.live_path,
            DataMode::Demo => &self.demo_path,
        }
    }

    pub fn live_path(&self) -> &Path {
        &self.live_path
    }

    /// Load the snapshot for the current mode.
    ///
    /// A missing file is an empty snapshot. Unparseable content is an error
    /// so callers can tell "no data" from "bad data".
    pub fn load(&self) -> Result<Snapshot, StoreError> {
        let path = self.active_path();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No snapshot at {}, treating as empty", path.display());
                return Ok(Snapshot::default());
            }
            Err(err) => {
                return Err(StoreError::Unreadable {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                })
            }
        };

        let document: SnapshotDocument =
            serde_json::from_slice(&bytes).map_err(|err| StoreError::Unreadable {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })?;

        document
            .into_snapshot()
            .map_err(|source| StoreError::UnsupportedFormat {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Load for the query paths: any failure is logged and reads as empty.
    pub fn load_or_empty(&self) -> Snapshot {
        self.load().unwrap_or_else(|err| {
            warn!("Error loading snapshot: {}", err);
            Snapshot::default()
        })
    }

    /// Overwrite the live snapshot, returning the number of records written.
    pub fn replace(&self, snapshot: &Snapshot) -> Result<usize, StoreError> {
        let unwritable = |source| StoreError::Unwritable {
            path: self.live_path.clone(),
            source,
        };

        if let Some(parent) = self.live_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(unwritable)?;
        }

        let tmp_path = temp_path_for(&self.live_path);
        let written = write_pretty(&tmp_path, snapshot)
            .and_then(|()| fs::rename(&tmp_path, &self.live_path));
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(unwritable(err));
        }

        info!("Replaced live snapshot with {} flights", snapshot.len());
        Ok(snapshot.len())
    }
}

/// Sibling of `path` unique to one write, so overlapping writers never
/// share a temp file.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(format!(".{}.tmp", uuid::Uuid::new_v4()));
    path.with_file_name(name)
}

fn write_pretty(path: &Path, snapshot: &Snapshot) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, snapshot)?;
    writer.flush()?;
    writer.get_ref().sync_all()
}
