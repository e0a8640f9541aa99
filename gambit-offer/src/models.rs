use gambit_shared::Offer;
use serde::{Deserialize, Serialize};
use crate::tier::PriorityTier;

/// Per-component scores, each rounded to an integer in 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub value_ratio_score: u8,
    pub bonus_amount_score: u8,
    pub offer_type_score: u8,
    pub accessibility_score: u8,
}

/// An offer together with everything the scoring pass derived from it.
///
/// Recomputed on every pass against the current working set; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredOffer {
    #[serde(flatten)]
    pub offer: Offer,
    /// Weighted score in 0..=100, one decimal place
    pub priority_score: f64,
    /// Bonus over deposit; 3 for a bonus that needs no deposit
    pub value_ratio: f64,
    pub score_breakdown: ScoreBreakdown,
    pub insights: Vec<String>,
}

impl ScoredOffer {
    pub fn tier(&self) -> PriorityTier {
        PriorityTier::from_score(self.priority_score)
    }
}
