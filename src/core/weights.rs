use crate::models::{Category, CategoryMap, CategoryWeights, Importance};

/// Raw weight for a rank: rank 1 -> 5, rank 5 -> 1
#[inline]
fn raw_weight(rank: u8) -> f64 {
    f64::from(6 - rank.clamp(1, 5))
}

/// Convert importance ranks into category weights that sum to 1
///
/// Unranked categories count as rank 3. Every rank contributes at least 1 to
/// the denominator, so the sum is never zero.
pub fn resolve_weights(importance: &Importance) -> CategoryWeights {
    let raw = CategoryMap::from_fn(|c| raw_weight(importance.rank(c)));
    let total: f64 = Category::ALL.iter().map(|&c| raw[c]).sum();

    CategoryMap::from_fn(|c| raw[c] / total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_default_importance_is_uniform() {
        let weights = resolve_weights(&Importance::new());
        for (_, w) in weights.iter() {
            assert_close(*w, 0.2);
        }
    }

    #[test]
    fn test_descending_ranks() {
        let importance = Importance::new()
            .with(Category::Price, 1)
            .with(Category::Location, 2)
            .with(Category::SizeLayout, 3)
            .with(Category::Spec, 4)
            .with(Category::Management, 5);

        let weights = resolve_weights(&importance);

        assert_close(weights.price, 0.333);
        assert_close(weights.location, 0.267);
        assert_close(weights.size_layout, 0.200);
        assert_close(weights.spec, 0.133);
        assert_close(weights.management, 0.067);
    }

    #[test]
    fn test_weights_sum_to_one() {
        for rank in 1..=5 {
            let importance = Importance::new()
                .with(Category::Price, rank)
                .with(Category::Spec, 6 - rank);
            let sum: f64 = resolve_weights(&importance).iter().map(|(_, w)| *w).sum();
            assert!((sum - 1.0).abs() < 1e-9);
        }
    }
}
