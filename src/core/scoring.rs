use std::collections::BTreeMap;

use crate::core::normalize::{normalize_higher_better, normalize_lower_better, NEUTRAL_SCORE};
use crate::models::{LabelMap, ParkingKind, PresenceMap, WishLabel};

/// Prices up to 40% over budget still earn a nonzero score
pub const BUDGET_OVERSHOOT: f64 = 1.4;

/// Walk to station at or beyond this many minutes scores zero
pub const STATION_MINUTES_CAP: f64 = 20.0;
/// Commute at or beyond this many minutes scores zero
pub const COMMUTE_MINUTES_CAP: f64 = 90.0;
pub const STATION_SHARE: f64 = 0.6;
pub const COMMUTE_SHARE: f64 = 0.4;
pub const REDEVELOPMENT_MULTIPLIER: f64 = 1.2;

pub const AREA_FLOOR_SQM: f64 = 40.0;
pub const AREA_CEILING_SQM: f64 = 90.0;
pub const LAYOUT_WISH_BONUS: f64 = 0.05;

/// Multiplier applied when any "must" feature is missing
pub const UNMET_MUST_PENALTY: f64 = 0.6;
/// Multiplier applied when the required parking is not available
pub const UNMET_PARKING_PENALTY: f64 = 0.6;

/// Price block: lower is better, scaled against the stretched budget
///
/// Without a budget the block is neutral.
pub fn score_price(price: f64, budget_limit: Option<f64>) -> f64 {
    match budget_limit {
        Some(budget) => normalize_lower_better(price, 0.0, budget * BUDGET_OVERSHOOT),
        None => NEUTRAL_SCORE,
    }
}

/// Location block: station walk blended with the commute
///
/// A missing commute contributes a neutral term. Redevelopment areas get a
/// multiplier, capped at 1.
pub fn score_location(
    station_minutes: f64,
    commute_minutes: Option<f64>,
    redevelopment: bool,
) -> f64 {
    let station = normalize_lower_better(station_minutes, 0.0, STATION_MINUTES_CAP);
    let commute = commute_minutes
        .map(|m| normalize_lower_better(m, 0.0, COMMUTE_MINUTES_CAP))
        .unwrap_or(NEUTRAL_SCORE);

    let blended = STATION_SHARE * station + COMMUTE_SHARE * commute;

    if redevelopment {
        (blended * REDEVELOPMENT_MULTIPLIER).min(1.0)
    } else {
        blended
    }
}

/// Size/layout block: floor area plus a small bonus for a layout wish hit
pub fn score_size_layout(area_sqm: f64, layout_note: &str, layout_wish: &str) -> f64 {
    let base = normalize_higher_better(area_sqm, AREA_FLOOR_SQM, AREA_CEILING_SQM);

    if layout_wish_matches(layout_note, layout_wish) {
        (base + LAYOUT_WISH_BONUS).min(1.0)
    } else {
        base
    }
}

/// True when any token of the free-text wish appears in the layout note
///
/// Tokens are split on commas (ASCII and Japanese), slashes and whitespace;
/// matching ignores case (Unicode lowercase folding).
fn layout_wish_matches(layout_note: &str, layout_wish: &str) -> bool {
    let note = layout_note.to_lowercase();
    if note.is_empty() {
        return false;
    }

    layout_wish
        .split(|c: char| matches!(c, ',' | '、' | '，' | '/') || c.is_whitespace())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .any(|token| note.contains(&token.to_lowercase()))
}

/// Outcome of matching a property's features against wish labels
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabelBlockScore {
    /// Block score in [0, 1], penalties applied
    pub score: f64,
    /// Score of each labelled feature before averaging
    pub features: BTreeMap<String, f64>,
    /// "Must" features the property lacks
    pub unmet_musts: Vec<String>,
}

/// Score of one feature given its label and whether the property has it
#[inline]
pub fn feature_score(label: WishLabel, present: bool) -> f64 {
    match (label, present) {
        (WishLabel::Must | WishLabel::Want, true) => 1.0,
        (WishLabel::Must | WishLabel::Want, false) => 0.0,
        (WishLabel::Neutral, _) => 0.6,
        (WishLabel::NoNeed, false) => 0.7,
        (WishLabel::NoNeed, true) => 0.4,
    }
}

/// Label-matching block used for spec and management
///
/// The block is the mean of the labelled features. A single missing "must"
/// multiplies the mean by [`UNMET_MUST_PENALTY`]. No labels means neutral.
pub fn score_label_block(presence: &PresenceMap, labels: &LabelMap) -> LabelBlockScore {
    if labels.is_empty() {
        return LabelBlockScore {
            score: NEUTRAL_SCORE,
            ..LabelBlockScore::default()
        };
    }

    let mut features = BTreeMap::new();
    let mut unmet_musts = Vec::new();

    for (feature, &label) in labels {
        let present = presence.get(feature).copied().unwrap_or(false);
        if label == WishLabel::Must && !present {
            unmet_musts.push(feature.clone());
        }
        features.insert(feature.clone(), feature_score(label, present));
    }

    let mean = features.values().sum::<f64>() / features.len() as f64;
    let score = if unmet_musts.is_empty() {
        mean
    } else {
        mean * UNMET_MUST_PENALTY
    };

    LabelBlockScore {
        score,
        features,
        unmet_musts,
    }
}

/// Management block with its feature breakdown
///
/// Label matching as in [`score_label_block`], then a further penalty when
/// the client's parking requirement is not met.
pub fn management_block(
    presence: &PresenceMap,
    labels: &LabelMap,
    parking: ParkingKind,
    parking_required: Option<ParkingKind>,
) -> LabelBlockScore {
    let mut block = score_label_block(presence, labels);

    if let Some(required) = parking_required {
        if !parking.satisfies(required) {
            block.score *= UNMET_PARKING_PENALTY;
        }
    }

    block
}

/// Management block score
pub fn score_management(
    presence: &PresenceMap,
    labels: &LabelMap,
    parking: ParkingKind,
    parking_required: Option<ParkingKind>,
) -> f64 {
    management_block(presence, labels, parking, parking_required).score
}
