use gambit_shared::Offer;
use crate::distribution::Distribution;
use crate::models::CrossCoverageGap;

/// Distinct states each casino appears in, both in first-seen order
pub(crate) fn states_by_casino(offers: &[Offer]) -> Distribution<Vec<String>> {
    let mut presence: Distribution<Vec<String>> = Distribution::new();
    for offer in offers {
        let states = presence.get_or_insert_with(&offer.casino_name, Vec::new);
        if !states.contains(&offer.state.name) {
            states.push(offer.state.name.clone());
        }
    }
    presence
}

/// Casinos found in several, but not all, of the observed states.
///
/// Meant to run on the full store rather than a filtered view. Casinos in a
/// single state or in every state are left out. Sorted by how many states a
/// casino covers, widest first, ties in encounter order.
pub fn find_cross_coverage_gaps(offers: &[Offer]) -> Vec<CrossCoverageGap> {
    let mut all_states: Vec<&str> = Vec::new();
    for offer in offers {
        if !all_states.contains(&offer.state.name.as_str()) {
            all_states.push(&offer.state.name);
        }
    }

    let mut gaps: Vec<CrossCoverageGap> = states_by_casino(offers)
        .iter()
        .filter(|(_, present)| present.len() > 1 && present.len() < all_states.len())
        .map(|(casino, present)| CrossCoverageGap {
            casino: casino.to_string(),
            present_in: present.clone(),
            missing_in: all_states
                .iter()
                .filter(|s| !present.iter().any(|p| p == *s))
                .map(|s| s.to_string())
                .collect(),
        })
        .collect();

    gaps.sort_by(|a, b| b.present_in.len().cmp(&a.present_in.len()));
    tracing::debug!(states = all_states.len(), candidates = gaps.len(), "cross-coverage diff");
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::offer;

    fn four_state_fixture() -> Vec<Offer> {
        vec![
            offer("BetMGM", "New Jersey", "Lossback", 1000.0),
            offer("BetMGM", "Michigan", "Lossback", 1000.0),
            offer("BetMGM", "Pennsylvania", "Lossback", 1000.0),
            offer("BetMGM", "West Virginia", "Lossback", 1000.0),
            offer("Stardust", "New Jersey", "Lossback", 100.0),
            offer("Stardust", "Pennsylvania", "Lossback", 100.0),
            offer("Firekeepers", "Michigan", "Lossback", 100.0),
            offer("Firekeepers", "Michigan", "Lossback", 50.0),
            offer("Golden Nugget", "West Virginia", "Lossback", 1000.0),
            offer("Golden Nugget", "Pennsylvania", "Lossback", 1000.0),
            offer("Golden Nugget", "Michigan", "Lossback", 1000.0),
        ]
    }

    #[test]
    fn test_partial_presence_reported() {
        let gaps = find_cross_coverage_gaps(&four_state_fixture());
        let stardust = gaps.iter().find(|g| g.casino == "Stardust").unwrap();
        assert_eq!(stardust.present_in, vec!["New Jersey", "Pennsylvania"]);
        assert_eq!(stardust.missing_in, vec!["Michigan", "West Virginia"]);
    }

    #[test]
    fn test_everywhere_and_single_state_excluded() {
        let gaps = find_cross_coverage_gaps(&four_state_fixture());
        assert!(gaps.iter().all(|g| g.casino != "BetMGM"));
        assert!(gaps.iter().all(|g| g.casino != "Firekeepers"));
    }

    #[test]
    fn test_sorted_by_presence_descending() {
        let gaps = find_cross_coverage_gaps(&four_state_fixture());
        let casinos: Vec<&str> = gaps.iter().map(|g| g.casino.as_str()).collect();
        assert_eq!(casinos, vec!["Golden Nugget", "Stardust"]);
        assert_eq!(gaps[0].missing_in, vec!["New Jersey"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(find_cross_coverage_gaps(&[]).is_empty());
    }
}
