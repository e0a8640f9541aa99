pub mod distribution;
pub mod models;
pub mod analyzer;
pub mod gaps;
pub mod cross;
pub mod by_state;
pub mod research;

pub use distribution::Distribution;
pub use models::{CasinoCount, CoverageGap, CoverageStats, CrossCoverageGap, GapData, GapType, OfferTypeShare, Severity};
pub use analyzer::analyze_coverage;
pub use cross::find_cross_coverage_gaps;
pub use by_state::find_offer_type_gaps_by_state;
pub use research::{research_priorities, ResearchBrief};

#[cfg(test)]
pub(crate) mod test_support {
    use gambit_shared::{Offer, OfferType, StateRef};

    pub fn offer(casino: &str, state: &str, offer_type: &str, bonus: f64) -> Offer {
        Offer {
            id: format!("{casino}-{state}-{bonus}"),
            casino_source_id: 1,
            offer_name: "Test".to_string(),
            offer_type: OfferType::from(offer_type),
            expected_deposit: 100.0,
            expected_bonus: bonus,
            casino_name: casino.to_string(),
            state_id: 1,
            state: StateRef::new(state, &state[..2].to_uppercase()),
        }
    }
}
