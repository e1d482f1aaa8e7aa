use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{BaselineResidence, Importance, PreferenceProfile, PropertyCandidate};

/// Request to resolve importance ranks into weights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightsRequest {
    #[serde(default)]
    pub importance: Importance,
}

/// Request to score a single candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub profile: PreferenceProfile,
    pub candidate: PropertyCandidate,
    #[serde(default)]
    pub baseline: Option<BaselineResidence>,
}

/// Request to score and rank a batch of candidates
///
/// At most 500 candidates per request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    pub profile: PreferenceProfile,
    #[validate(length(min = 1, max = 500))]
    pub candidates: Vec<PropertyCandidate>,
    #[serde(default)]
    pub baseline: Option<BaselineResidence>,
    #[serde(default)]
    pub limit: Option<u16>,
}
