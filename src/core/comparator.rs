use crate::core::{
    aggregate::{aggregate, to_absolute_index, to_relative_index},
    scoring::{
        management_block, score_label_block, score_location, score_price, score_size_layout,
        LabelBlockScore,
    },
    weights::resolve_weights,
};
use crate::models::{
    BaselineResidence, CategoryMap, CategoryWeights, PreferenceProfile, PropertyCandidate,
    ScoreResult,
};

/// Result of ranking a batch of candidates
#[derive(Debug)]
pub struct RankResult {
    pub results: Vec<ScoreResult>,
    pub total_candidates: usize,
    pub baseline_fit: Option<f64>,
}

/// Scores candidates for one client
///
/// # Pipeline Stages
/// 1. Block scores per category
/// 2. Weighted fit using the client's resolved weights
/// 3. Absolute index, and relative index when a baseline is set
///
/// Weights and the baseline fit are computed once at construction, so a
/// comparator is a read-only snapshot of the profile it was built from.
#[derive(Debug, Clone)]
pub struct Comparator {
    profile: PreferenceProfile,
    weights: CategoryWeights,
    baseline_fit: Option<f64>,
}

impl Comparator {
    pub fn new(profile: PreferenceProfile) -> Self {
        let weights = resolve_weights(&profile.importance);
        Self {
            profile,
            weights,
            baseline_fit: None,
        }
    }

    /// Score candidates relative to the client's current home
    pub fn with_baseline(mut self, baseline: &BaselineResidence) -> Self {
        let (scores, _, _) = self.block_scores(baseline);
        let fit = aggregate(&scores, &self.weights);
        tracing::debug!(
            "Baseline {} fit {:.4} for client {}",
            baseline.id,
            fit,
            self.profile.client_id
        );
        self.baseline_fit = Some(fit);
        self
    }

    /// Run the full pipeline for a single candidate
    pub fn score(&self, candidate: &PropertyCandidate) -> ScoreResult {
        let (categories, spec, management) = self.block_scores(candidate);
        let fit = aggregate(&categories, &self.weights);

        // a feature can be a must in both label sets; report it once
        let mut unmet_musts = spec.unmet_musts;
        for feature in management.unmet_musts {
            if !unmet_musts.contains(&feature) {
                unmet_musts.push(feature);
            }
        }

        ScoreResult {
            candidate_id: candidate.id.clone(),
            name: candidate.name.clone(),
            price: candidate.price,
            categories,
            fit,
            index: to_absolute_index(fit),
            relative_index: self.baseline_fit.map(|base| to_relative_index(fit, base)),
            spec_breakdown: spec.features,
            management_breakdown: management.features,
            unmet_musts,
        }
    }

    /// Score every candidate and return the best `limit`
    ///
    /// Sorted by ranking index (descending), then by price (ascending).
    pub fn rank(&self, candidates: &[PropertyCandidate], limit: usize) -> RankResult {
        let total_candidates = candidates.len();

        let mut results: Vec<ScoreResult> = candidates.iter().map(|c| self.score(c)).collect();

        results.sort_by(|a, b| {
            b.ranking_index()
                .partial_cmp(&a.ranking_index())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    a.price
                        .partial_cmp(&b.price)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
        });

        results.truncate(limit);

        tracing::debug!(
            "Ranked {} candidates for client {}, kept {}",
            total_candidates,
            self.profile.client_id,
            results.len()
        );

        RankResult {
            results,
            total_candidates,
            baseline_fit: self.baseline_fit,
        }
    }

    fn block_scores(
        &self,
        candidate: &PropertyCandidate,
    ) -> (CategoryMap<f64>, LabelBlockScore, LabelBlockScore) {
        let profile = &self.profile;
        let presence = candidate.feature_presence();

        let spec = score_label_block(&presence, &profile.feature_labels.spec);
        let management = management_block(
            &presence,
            &profile.feature_labels.management,
            candidate.parking,
            profile.parking_required,
        );

        let categories = CategoryMap {
            price: score_price(candidate.price, profile.budget_limit),
            location: score_location(
                candidate.station_minutes,
                candidate.longest_commute(),
                candidate.redevelopment,
            ),
            size_layout: score_size_layout(
                candidate.area_sqm,
                &candidate.layout_note,
                &profile.layout_wish,
            ),
            spec: spec.score,
            management: management.score,
        };

        (categories, spec, management)
    }
}
