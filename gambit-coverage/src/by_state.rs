use gambit_shared::Offer;
use crate::distribution::Distribution;
use crate::models::OfferTypeShare;

/// Offer-type mix of every state, most common type first
pub fn find_offer_type_gaps_by_state(offers: &[Offer]) -> Distribution<Vec<OfferTypeShare>> {
    let mut counts: Distribution<Distribution<usize>> = Distribution::new();
    for offer in offers {
        counts
            .get_or_insert_with(&offer.state.name, Distribution::new)
            .increment(offer.offer_type.as_str());
    }

    let mut result = Distribution::new();
    for (state, types) in counts.iter() {
        let state_total = types.total() as f64;
        let mut shares: Vec<OfferTypeShare> = types
            .iter()
            .map(|(offer_type, &count)| OfferTypeShare {
                offer_type: offer_type.to_string(),
                count,
                percentage: count as f64 / state_total * 100.0,
            })
            .collect();
        shares.sort_by(|a, b| b.count.cmp(&a.count));
        result.insert(state, shares);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::offer;

    #[test]
    fn test_mix_per_state() {
        let offers = vec![
            offer("BetMGM", "New Jersey", "Lossback", 100.0),
            offer("FanDuel", "New Jersey", "Deposit (Cashable)", 100.0),
            offer("Bet365", "New Jersey", "Deposit (Cashable)", 100.0),
            offer("Betly", "West Virginia", "Free Spins", 100.0),
        ];
        let mix = find_offer_type_gaps_by_state(&offers);

        let states: Vec<&str> = mix.keys().collect();
        assert_eq!(states, vec!["New Jersey", "West Virginia"]);

        let nj = mix.get("New Jersey").unwrap();
        assert_eq!(nj[0].offer_type, "Deposit (Cashable)");
        assert_eq!(nj[0].count, 2);
        assert_eq!(nj[1].offer_type, "Lossback");
        assert!((nj[1].percentage - 100.0 / 3.0).abs() < 1e-9);

        let wv = mix.get("West Virginia").unwrap();
        assert_eq!(wv.len(), 1);
        assert_eq!(wv[0].percentage, 100.0);
    }
}
