use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

use crate::core::stats::{CatalogStats, StatsError};
use crate::models::Offer;

/// Errors that can occur when reading or writing a statistics snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Backing store for the statistics snapshot
///
/// Injected into [`ModelCache`] so tests can run against isolated
/// stores instead of a process-wide file path.
pub trait SnapshotStore: Send + Sync {
    /// Read the persisted snapshot, `Ok(None)` when none exists.
    fn read(&self) -> Result<Option<CatalogStats>, SnapshotError>;

    /// Persist the snapshot, replacing any previous one.
    fn write(&self, stats: &CatalogStats) -> Result<(), SnapshotError>;
}

/// JSON file snapshot store
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn read(&self) -> Result<Option<CatalogStats>, SnapshotError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn write(&self, stats: &CatalogStats) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, serde_json::to_string_pretty(stats)?)?;
        Ok(())
    }
}

/// Memoization layer for the catalog statistics snapshot
///
/// A snapshot is computed once per catalog version: a persisted snapshot
/// is returned as-is without touching the catalog, otherwise one is
/// built and persisted. There is no partial invalidation; after catalog
/// edits the persisted snapshot must be deleted externally.
pub struct ModelCache {
    store: Box<dyn SnapshotStore>,
    // Serializes build-then-persist so concurrent misses cannot
    // interleave writes.
    build_lock: Mutex<()>,
}

impl ModelCache {
    pub fn new(store: impl SnapshotStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            build_lock: Mutex::new(()),
        }
    }

    /// Load the snapshot for this catalog, building it on a cache miss.
    ///
    /// An unreadable or corrupt persisted snapshot counts as a miss and
    /// triggers a rebuild; a failed persist is logged and the freshly
    /// built snapshot is served anyway. The only hard failure is an
    /// empty catalog on a miss.
    pub fn load(&self, offers: &[Offer]) -> Result<CatalogStats, StatsError> {
        let _guard = self
            .build_lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        match self.store.read() {
            Ok(Some(stats)) => {
                tracing::trace!("Statistics snapshot cache hit");
                return Ok(stats);
            }
            Ok(None) => {
                tracing::debug!("No cached statistics snapshot, building from catalog");
            }
            Err(e) => {
                tracing::warn!("Failed to read cached snapshot, rebuilding: {}", e);
            }
        }

        let stats = CatalogStats::from_catalog(offers)?;

        if let Err(e) = self.store.write(&stats) {
            tracing::warn!("Failed to persist statistics snapshot: {}", e);
        }

        Ok(stats)
    }
}
