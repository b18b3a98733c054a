use serde::Serialize;

/// A parlay of several picks across matches, in canonical shape
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CombinedBet {
    /// Source id, or `comb-<n>` when the source has none
    pub id: String,

    /// Display name
    pub name: String,

    /// Combined odds of all legs
    pub total_odds: f64,

    /// Estimated probability of every leg winning (0 - 100)
    pub probability: f64,

    /// Risk category, when tagged
    pub category: Option<Category>,

    /// Individual selections
    pub legs: Vec<Leg>,

    /// Settlement, when the source carries one
    pub settlement: Option<Settlement>,

    /// Realized payout
    pub payout: Option<f64>,

    /// Number of legs that were settled as correct
    pub legs_won: Option<u32>,
}

/// One selection inside a combined bet
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Leg {
    /// Match description (e.g. "Real Madrid vs Real Sociedad")
    pub match_label: String,

    /// Selected outcome
    pub selection: String,

    /// Odds for this leg
    pub odds: f64,

    /// Model confidence for this leg (0 - 100)
    pub confidence: f64,
}

/// Risk tier assigned by the combinada generator
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Value,
    Medium,
    MediumHigh,
    High,
    UltraHigh,
}

impl Category {
    /// Parse a category tag; `safe` is the generator's name for the value tier
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "value" | "safe" => Some(Category::Value),
            "medium" => Some(Category::Medium),
            "medium-high" => Some(Category::MediumHigh),
            "high" => Some(Category::High),
            "ultra-high" => Some(Category::UltraHigh),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Value => "value",
            Category::Medium => "medium",
            Category::MediumHigh => "medium-high",
            Category::High => "high",
            Category::UltraHigh => "ultra-high",
        }
    }
}

/// Canonical settlement state of a combined bet
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Settlement {
    /// Every leg won
    Acertada,
    /// At least one leg lost
    Fallada,
    /// Not settled yet
    Pendiente,
}

impl Settlement {
    /// Map a modern `estado` value; anything unrecognized is pending
    pub fn from_state(state: &str) -> Self {
        match state {
            "acertada" => Settlement::Acertada,
            "fallada" => Settlement::Fallada,
            _ => Settlement::Pendiente,
        }
    }

    /// Map a legacy `resultado` value; anything unrecognized is pending
    pub fn from_legacy_result(result: &str) -> Self {
        match result {
            "cumplida" => Settlement::Acertada,
            "no_cumplida" => Settlement::Fallada,
            _ => Settlement::Pendiente,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Settlement::Acertada => "acertada",
            Settlement::Fallada => "fallada",
            Settlement::Pendiente => "pendiente",
        }
    }
}
