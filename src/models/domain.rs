use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

/// Rank used for any category the client has not ranked
pub const DEFAULT_RANK: u8 = 3;

/// The five fixed scoring categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Price,
    Location,
    SizeLayout,
    Spec,
    Management,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Price,
        Category::Location,
        Category::SizeLayout,
        Category::Spec,
        Category::Management,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Price => "price",
            Category::Location => "location",
            Category::SizeLayout => "size_layout",
            Category::Spec => "spec",
            Category::Management => "management",
        }
    }
}

/// One value per category
///
/// Fixed fields instead of a string-keyed map, so every category is always
/// present and a new category is a compile error at each use site.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryMap<T> {
    pub price: T,
    pub location: T,
    #[serde(rename = "sizeLayout", alias = "size_layout")]
    pub size_layout: T,
    pub spec: T,
    pub management: T,
}

impl<T> CategoryMap<T> {
    /// Build a map by evaluating `f` once per category
    pub fn from_fn(mut f: impl FnMut(Category) -> T) -> Self {
        Self {
            price: f(Category::Price),
            location: f(Category::Location),
            size_layout: f(Category::SizeLayout),
            spec: f(Category::Spec),
            management: f(Category::Management),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ALL.into_iter().map(move |c| (c, &self[c]))
    }
}

impl<T> Index<Category> for CategoryMap<T> {
    type Output = T;

    fn index(&self, category: Category) -> &T {
        match category {
            Category::Price => &self.price,
            Category::Location => &self.location,
            Category::SizeLayout => &self.size_layout,
            Category::Spec => &self.spec,
            Category::Management => &self.management,
        }
    }
}

impl<T> IndexMut<Category> for CategoryMap<T> {
    fn index_mut(&mut self, category: Category) -> &mut T {
        match category {
            Category::Price => &mut self.price,
            Category::Location => &mut self.location,
            Category::SizeLayout => &mut self.size_layout,
            Category::Spec => &mut self.spec,
            Category::Management => &mut self.management,
        }
    }
}

/// Category weights produced by the weight resolver; they sum to 1
pub type CategoryWeights = CategoryMap<f64>;

/// Four-level wish label for a named feature (◎/○/△/×)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WishLabel {
    #[serde(rename = "must", alias = "◎")]
    Must,
    #[serde(rename = "want", alias = "○")]
    Want,
    #[serde(rename = "neutral", alias = "△")]
    Neutral,
    #[serde(rename = "no_need", alias = "×")]
    NoNeed,
}

impl WishLabel {
    pub fn symbol(&self) -> &'static str {
        match self {
            WishLabel::Must => "◎",
            WishLabel::Want => "○",
            WishLabel::Neutral => "△",
            WishLabel::NoNeed => "×",
        }
    }
}

/// Parking offered by a property, or required by a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParkingKind {
    #[default]
    None,
    Flat,
    Mechanical,
    Offsite,
}

impl ParkingKind {
    /// Whether parking of this kind meets `required`
    ///
    /// `Offsite` as a requirement means "any parking at all".
    pub fn satisfies(self, required: ParkingKind) -> bool {
        match required {
            ParkingKind::None => true,
            ParkingKind::Offsite => self != ParkingKind::None,
            kind => self == kind,
        }
    }
}

/// Importance rank per category, 1 = most important, 5 = least
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Importance {
    ranks: BTreeMap<Category, i64>,
}

impl Importance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with `category` set to `rank`
    pub fn with(mut self, category: Category, rank: impl Into<i64>) -> Self {
        self.ranks.insert(category, rank.into());
        self
    }

    /// Effective rank for a category, clamped to 1..=5, default 3
    pub fn rank(&self, category: Category) -> u8 {
        self.ranks
            .get(&category)
            .copied()
            .map(|rank| rank.clamp(1, 5) as u8)
            .unwrap_or(DEFAULT_RANK)
    }
}

impl FromIterator<(Category, i64)> for Importance {
    fn from_iter<I: IntoIterator<Item = (Category, i64)>>(iter: I) -> Self {
        Self {
            ranks: iter.into_iter().collect(),
        }
    }
}

/// Feature key to wish label
pub type LabelMap = BTreeMap<String, WishLabel>;

/// Feature key to presence on a property
pub type PresenceMap = BTreeMap<String, bool>;

/// Wish labels split by the block that consumes them
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureLabels {
    #[serde(default)]
    pub spec: LabelMap,
    #[serde(default)]
    pub management: LabelMap,
}

/// A client's preferences, the input that shapes every score
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PreferenceProfile {
    #[serde(rename = "clientId", alias = "client_id", default)]
    pub client_id: String,
    #[serde(default)]
    pub importance: Importance,
    #[serde(rename = "featureLabels", alias = "feature_labels", default)]
    pub feature_labels: FeatureLabels,
    #[serde(rename = "budgetLimit", alias = "budget_limit", default)]
    pub budget_limit: Option<f64>,
    #[serde(rename = "layoutWish", alias = "layout_wish", default)]
    pub layout_wish: String,
    #[serde(rename = "parkingRequired", alias = "parking_required", default)]
    pub parking_required: Option<ParkingKind>,
}

impl PreferenceProfile {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            ..Self::default()
        }
    }

    pub fn with_importance(mut self, importance: Importance) -> Self {
        self.importance = importance;
        self
    }

    pub fn with_budget(mut self, budget_limit: f64) -> Self {
        self.budget_limit = Some(budget_limit);
        self
    }

    pub fn with_spec_label(mut self, feature: impl Into<String>, label: WishLabel) -> Self {
        self.feature_labels.spec.insert(feature.into(), label);
        self
    }

    pub fn with_management_label(mut self, feature: impl Into<String>, label: WishLabel) -> Self {
        self.feature_labels.management.insert(feature.into(), label);
        self
    }

    pub fn with_layout_wish(mut self, wish: impl Into<String>) -> Self {
        self.layout_wish = wish.into();
        self
    }

    pub fn with_parking_required(mut self, kind: ParkingKind) -> Self {
        self.parking_required = Some(kind);
        self
    }
}

/// A property put forward for comparison
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PropertyCandidate {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub price: f64,
    #[serde(rename = "stationMinutes", alias = "station_minutes")]
    pub station_minutes: f64,
    #[serde(rename = "commuteMinutes", alias = "commute_minutes", default)]
    pub commute_minutes: Vec<f64>,
    #[serde(rename = "areaSqm", alias = "area_sqm")]
    pub area_sqm: f64,
    #[serde(default)]
    pub floor: i16,
    #[serde(rename = "cornerUnit", alias = "corner_unit", default)]
    pub corner_unit: bool,
    #[serde(default)]
    pub features: PresenceMap,
    #[serde(default)]
    pub parking: ParkingKind,
    #[serde(rename = "layoutNote", alias = "layout_note", default)]
    pub layout_note: String,
    #[serde(default)]
    pub redevelopment: bool,
}

/// Feature key under which the corner-unit flag takes part in label matching
pub const CORNER_UNIT_FEATURE: &str = "corner_unit";

impl PropertyCandidate {
    /// Presence map used for label matching
    ///
    /// The corner-unit flag is folded in unless `features` already has an
    /// explicit entry for it.
    pub fn feature_presence(&self) -> PresenceMap {
        let mut presence = self.features.clone();
        presence
            .entry(CORNER_UNIT_FEATURE.to_string())
            .or_insert(self.corner_unit);
        presence
    }

    /// The longest household commute, if any were given
    pub fn longest_commute(&self) -> Option<f64> {
        self.commute_minutes
            .iter()
            .copied()
            .filter(|m| !m.is_nan())
            .reduce(f64::max)
    }
}

/// The client's current home, scored like any candidate
pub type BaselineResidence = PropertyCandidate;

/// Scored candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    pub name: String,
    pub price: f64,
    pub categories: CategoryMap<f64>,
    pub fit: f64,
    pub index: f64,
    #[serde(rename = "relativeIndex")]
    pub relative_index: Option<f64>,
    #[serde(rename = "specBreakdown")]
    pub spec_breakdown: BTreeMap<String, f64>,
    #[serde(rename = "managementBreakdown")]
    pub management_breakdown: BTreeMap<String, f64>,
    #[serde(rename = "unmetMusts")]
    pub unmet_musts: Vec<String>,
}

impl ScoreResult {
    /// The index candidates are ranked by: relative when a baseline was used
    pub fn ranking_index(&self) -> f64 {
        self.relative_index.unwrap_or(self.index)
    }
}
