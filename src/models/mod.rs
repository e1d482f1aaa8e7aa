// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BaselineResidence, Category, CategoryMap, CategoryWeights, FeatureLabels, Importance,
    LabelMap, ParkingKind, PreferenceProfile, PresenceMap, PropertyCandidate, ScoreResult,
    WishLabel,
};
pub use requests::{RankRequest, ScoreRequest, WeightsRequest};
pub use responses::{ErrorResponse, HealthResponse, RankResponse, WeightsResponse};
