// Service exports
pub mod catalog;
pub mod snapshot;

pub use catalog::{CatalogError, CatalogStore};
pub use snapshot::{FileSnapshotStore, ModelCache, SnapshotError, SnapshotStore};
