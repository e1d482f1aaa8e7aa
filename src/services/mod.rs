// Service exports
pub mod snapshot;

pub use snapshot::{ProfileSnapshot, SnapshotError, SNAPSHOT_VERSION};
