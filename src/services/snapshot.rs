use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::PreferenceProfile;

/// Snapshot format written by [`ProfileSnapshot::save`]
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors that can occur while saving or loading a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),
}

/// Serializable point-in-time copy of a client's preferences
///
/// Storage is left to the caller; this type only defines the JSON document
/// that is handed over for saving and read back on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub version: u32,
    #[serde(rename = "savedAt")]
    pub saved_at: DateTime<Utc>,
    pub profile: PreferenceProfile,
}

impl ProfileSnapshot {
    pub fn new(profile: PreferenceProfile) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            profile,
        }
    }

    /// Serialize a profile into a snapshot document
    pub fn save(profile: &PreferenceProfile) -> Result<String, SnapshotError> {
        let snapshot = Self::new(profile.clone());
        let json = serde_json::to_string_pretty(&snapshot)?;
        tracing::debug!("Saved snapshot for client {}", profile.client_id);
        Ok(json)
    }

    /// Parse a snapshot document, rejecting versions this build cannot read
    pub fn parse(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(snapshot.version));
        }
        Ok(snapshot)
    }

    /// Parse a snapshot document and return the profile it holds
    pub fn load(json: &str) -> Result<PreferenceProfile, SnapshotError> {
        Self::parse(json).map(|snapshot| snapshot.profile)
    }
}
