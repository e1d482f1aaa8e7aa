use serde::{Deserialize, Serialize};
use crate::models::domain::{CategoryWeights, ScoreResult};

/// Response for the weights endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightsResponse {
    pub weights: CategoryWeights,
}

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    pub results: Vec<ScoreResult>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "baselineFit")]
    pub baseline_fit: Option<f64>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_response_uses_camel_case() {
        let response = RankResponse {
            results: vec![],
            total_candidates: 4,
            baseline_fit: Some(0.5),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["totalCandidates"], 4);
        assert_eq!(json["baselineFit"], 0.5);
        assert!(json.get("total_candidates").is_none());
    }
}
