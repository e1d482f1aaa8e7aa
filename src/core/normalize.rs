/// Score returned whenever an input cannot be placed on a scale
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Map `value` onto [0, 1] where larger values score higher
///
/// `value` is clamped to `[lo, hi]` first. A degenerate range (`hi <= lo`)
/// or a NaN input yields [`NEUTRAL_SCORE`].
#[inline]
pub fn normalize_higher_better(value: f64, lo: f64, hi: f64) -> f64 {
    match unit_position(value, lo, hi) {
        Some(position) => position,
        None => NEUTRAL_SCORE,
    }
}

/// Map `value` onto [0, 1] where smaller values score higher
///
/// Mirror image of [`normalize_higher_better`]: for any in-range value the
/// two results sum to 1.
#[inline]
pub fn normalize_lower_better(value: f64, lo: f64, hi: f64) -> f64 {
    match unit_position(value, lo, hi) {
        Some(position) => 1.0 - position,
        None => NEUTRAL_SCORE,
    }
}

/// Position of the clamped value within the range, or `None` if undefined
#[inline]
fn unit_position(value: f64, lo: f64, hi: f64) -> Option<f64> {
    // `!(hi > lo)` also rejects NaN bounds
    if !(hi > lo) || value.is_nan() {
        return None;
    }

    let clamped = value.clamp(lo, hi);
    Some((clamped - lo) / (hi - lo))
}
