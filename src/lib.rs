//! Property Fit - fit scoring for real-estate property comparison
//!
//! This library scores property candidates against a client's preferences:
//! block scores per category, weights from importance ranks, a weighted fit,
//! and a 50-centred index, optionally relative to the client's current home.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{
    aggregate, normalize_higher_better, normalize_lower_better, resolve_weights,
    score_label_block, score_location, score_management, score_price, score_size_layout,
    to_absolute_index, to_relative_index, Comparator, RankResult,
};
pub use models::{
    BaselineResidence, Category, CategoryMap, Importance, ParkingKind, PreferenceProfile,
    PropertyCandidate, ScoreResult, WishLabel,
};
pub use services::{ProfileSnapshot, SnapshotError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        assert_eq!(normalize_higher_better(5.0, 0.0, 10.0), 0.5);
        assert_eq!(to_absolute_index(0.5), 75.0);
    }
}
