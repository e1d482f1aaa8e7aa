use crate::models::{Category, CategoryMap, CategoryWeights};

/// Index value of an "average" candidate
pub const INDEX_CENTER: f64 = 50.0;
/// Index points per unit of fit
pub const INDEX_SPAN: f64 = 50.0;

/// Weighted sum of the five category scores
///
/// Weights are expected to already sum to 1 (see `resolve_weights`), which
/// keeps the result in [0, 1] when every score is.
pub fn aggregate(scores: &CategoryMap<f64>, weights: &CategoryWeights) -> f64 {
    Category::ALL
        .iter()
        .map(|&category| scores[category] * weights[category])
        .sum()
}

/// Absolute index in [50, 100], used when there is no baseline
#[inline]
pub fn to_absolute_index(fit: f64) -> f64 {
    INDEX_CENTER + INDEX_SPAN * fit.clamp(0.0, 1.0)
}

/// Index of a candidate relative to the baseline, which sits at 50
///
/// Unbounded: a candidate far worse than the current home can fall below 50.
#[inline]
pub fn to_relative_index(fit_candidate: f64, fit_baseline: f64) -> f64 {
    INDEX_CENTER + INDEX_SPAN * (fit_candidate - fit_baseline)
}
