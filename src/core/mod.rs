// Core scoring exports
pub mod aggregate;
pub mod comparator;
pub mod normalize;
pub mod scoring;
pub mod weights;

pub use aggregate::{aggregate, to_absolute_index, to_relative_index};
pub use comparator::{Comparator, RankResult};
pub use normalize::{normalize_higher_better, normalize_lower_better, NEUTRAL_SCORE};
pub use scoring::{
    score_label_block, score_location, score_management, score_price, score_size_layout,
    LabelBlockScore,
};
pub use weights::resolve_weights;
