use gambit_shared::Offer;
use crate::distribution::Distribution;
use crate::gaps::identify_gaps;
use crate::models::{CasinoCount, CoverageStats};

const TOP_CASINO_LIMIT: usize = 10;

/// Aggregate the working set and derive its coverage gaps.
///
/// `offers` should already be narrowed to the states of interest.
pub fn analyze_coverage(offers: &[Offer]) -> CoverageStats {
    let mut state_distribution: Distribution<usize> = Distribution::new();
    let mut casino_distribution: Distribution<usize> = Distribution::new();
    let mut offer_type_distribution: Distribution<usize> = Distribution::new();
    let mut bonus_by_state: Distribution<Vec<f64>> = Distribution::new();

    for offer in offers {
        state_distribution.increment(&offer.state.name);
        casino_distribution.increment(&offer.casino_name);
        offer_type_distribution.increment(offer.offer_type.as_str());
        bonus_by_state
            .get_or_insert_with(&offer.state.name, Vec::new)
            .push(offer.expected_bonus);
    }

    let mut average_bonus_by_state: Distribution<f64> = Distribution::new();
    for (state, bonuses) in bonus_by_state.iter() {
        // every list holds at least the offer that created it
        let mean = bonuses.iter().sum::<f64>() / bonuses.len() as f64;
        average_bonus_by_state.insert(state, mean);
    }

    let mut top_casinos: Vec<CasinoCount> = casino_distribution
        .iter()
        .map(|(name, &offer_count)| CasinoCount { name: name.to_string(), offer_count })
        .collect();
    top_casinos.sort_by(|a, b| b.offer_count.cmp(&a.offer_count));
    top_casinos.truncate(TOP_CASINO_LIMIT);

    let gaps = identify_gaps(
        offers,
        &state_distribution,
        &casino_distribution,
        &offer_type_distribution,
        &average_bonus_by_state,
    );

    tracing::debug!(
        offers = offers.len(),
        states = state_distribution.len(),
        casinos = casino_distribution.len(),
        gaps = gaps.len(),
        "analyzed coverage"
    );

    CoverageStats {
        total_offers: offers.len(),
        state_distribution,
        casino_distribution,
        offer_type_distribution,
        average_bonus_by_state,
        top_casinos,
        gaps,
    }
}
