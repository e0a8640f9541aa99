pub mod models;
pub mod scoring;
pub mod insights;
pub mod ranking;
pub mod tier;

pub use models::{ScoreBreakdown, ScoredOffer};
pub use scoring::{prioritize_offers, score_offer, WorkingSetMaxima};
pub use ranking::{sort_offers, SortOption};
pub use tier::PriorityTier;
