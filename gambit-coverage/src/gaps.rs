use gambit_shared::{Offer, OfferType};
use crate::cross::states_by_casino;
use crate::distribution::Distribution;
use crate::models::{CoverageGap, GapData, GapType, Severity};

/// A state is thin when it holds fewer offers than this share of the mean
const LOW_STATE_COUNT_RATIO: f64 = 0.7;
/// Single-state casinos need more offers than this to be worth chasing
const SINGLE_STATE_MIN_OFFERS: usize = 2;
const LOSSBACK_MIN_SHARE_PCT: f64 = 20.0;
const LOW_STATE_VALUE_RATIO: f64 = 0.75;

/// Major operators every tracked market should normally carry:
/// display name and the lowercase fragment searched for in casino names.
pub const MAJOR_CASINOS: [(&str, &str); 5] = [
    ("BetMGM", "betmgm"),
    ("DraftKings", "draftkings"),
    ("FanDuel", "fanduel"),
    ("Caesars", "caesars"),
    ("BetRivers", "rivers"),
];

/// Run every gap rule and order the result by severity.
///
/// The sort is stable, so gaps of equal severity keep rule order.
pub fn identify_gaps(
    offers: &[Offer],
    state_distribution: &Distribution<usize>,
    casino_distribution: &Distribution<usize>,
    offer_type_distribution: &Distribution<usize>,
    average_bonus_by_state: &Distribution<f64>,
) -> Vec<CoverageGap> {
    let mut gaps = Vec::new();

    low_state_counts(state_distribution, &mut gaps);
    single_state_casinos(offers, state_distribution, casino_distribution, &mut gaps);
    lossback_share(offers.len(), offer_type_distribution, &mut gaps);
    low_state_values(average_bonus_by_state, &mut gaps);
    missing_major_casinos(offers, &mut gaps);

    gaps.sort_by_key(|g| g.severity.rank());
    gaps
}

fn low_state_counts(state_distribution: &Distribution<usize>, gaps: &mut Vec<CoverageGap>) {
    if state_distribution.is_empty() {
        return;
    }
    let average = state_distribution.total() as f64 / state_distribution.len() as f64;

    for (state, &offer_count) in state_distribution.iter() {
        if (offer_count as f64) < average * LOW_STATE_COUNT_RATIO {
            let pct_of_average = (offer_count as f64 / average * 100.0).round();
            gaps.push(CoverageGap {
                gap_type: GapType::State,
                severity: Severity::High,
                description: format!(
                    "{state} has only {offer_count} offers ({pct_of_average:.0}% of average)"
                ),
                recommendation: format!(
                    "Research more casinos operating in {state} or check for missing promotions from existing casinos."
                ),
                data: GapData::LowStateCount {
                    state: state.to_string(),
                    offer_count,
                    average,
                },
            });
        }
    }
}

fn single_state_casinos(
    offers: &[Offer],
    state_distribution: &Distribution<usize>,
    casino_distribution: &Distribution<usize>,
    gaps: &mut Vec<CoverageGap>,
) {
    for (casino, states) in states_by_casino(offers).iter() {
        let [current_state] = states.as_slice() else { continue };
        let offer_count = casino_distribution.get(casino).copied().unwrap_or(0);
        if offer_count <= SINGLE_STATE_MIN_OFFERS {
            continue;
        }

        let missing_states: Vec<String> = state_distribution
            .keys()
            .filter(|s| *s != current_state.as_str())
            .map(str::to_string)
            .collect();

        gaps.push(CoverageGap {
            gap_type: GapType::Casino,
            severity: Severity::Medium,
            description: format!(
                "{casino} only operates in {current_state} but has {offer_count} offers there"
            ),
            recommendation: format!(
                "Check if {casino} operates in {}. Multi-state casinos often have similar offers.",
                missing_states.join(", ")
            ),
            data: GapData::SingleStateCasino {
                casino: casino.to_string(),
                current_state: current_state.clone(),
                missing_states,
            },
        });
    }
}

fn lossback_share(
    total_offers: usize,
    offer_type_distribution: &Distribution<usize>,
    gaps: &mut Vec<CoverageGap>,
) {
    if total_offers == 0 {
        return;
    }
    let lossback = OfferType::Lossback;
    let count = offer_type_distribution.get(lossback.as_str()).copied().unwrap_or(0);
    let percentage = count as f64 / total_offers as f64 * 100.0;
    if percentage >= LOSSBACK_MIN_SHARE_PCT {
        return;
    }

    let shown = (percentage * 10.0).round() / 10.0;
    gaps.push(CoverageGap {
        gap_type: GapType::OfferType,
        severity: Severity::Medium,
        description: format!("Only {count} Lossback offers ({shown:.1}% of total)"),
        recommendation: "Lossback offers are valuable risk-free options. Search for casinos offering 'money back', 'insurance', or 'risk-free' promotions.".to_string(),
        data: GapData::OfferTypeShare {
            offer_type: lossback.to_string(),
            count,
            percentage,
        },
    });
}

fn low_state_values(average_bonus_by_state: &Distribution<f64>, gaps: &mut Vec<CoverageGap>) {
    if average_bonus_by_state.is_empty() {
        return;
    }
    // Mean of the per-state means: every state weighs the same however
    // many offers it has.
    let overall_avg =
        average_bonus_by_state.values().sum::<f64>() / average_bonus_by_state.len() as f64;

    for (state, &state_avg) in average_bonus_by_state.iter() {
        if state_avg < overall_avg * LOW_STATE_VALUE_RATIO {
            gaps.push(CoverageGap {
                gap_type: GapType::Value,
                severity: Severity::Medium,
                description: format!(
                    "{state} average bonus (${:.0}) is 25% below overall average (${:.0})",
                    state_avg.round(),
                    overall_avg.round()
                ),
                recommendation: format!(
                    "Look for premium offers in {state} or check if major casinos have higher-tier promotions available."
                ),
                data: GapData::LowStateValue {
                    state: state.to_string(),
                    state_avg,
                    overall_avg,
                },
            });
        }
    }
}

fn missing_major_casinos(offers: &[Offer], gaps: &mut Vec<CoverageGap>) {
    let names: Vec<String> = offers.iter().map(|o| o.casino_name.to_lowercase()).collect();

    for (casino, fragment) in MAJOR_CASINOS {
        if names.iter().any(|n| n.contains(fragment)) {
            continue;
        }
        gaps.push(CoverageGap {
            gap_type: GapType::Casino,
            severity: Severity::High,
            description: format!("Major casino {casino} may be missing from database"),
            recommendation: format!(
                "{casino} is a major operator. Verify if they have offers in your tracked states."
            ),
            data: GapData::MissingCasino { casino: casino.to_string() },
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::analyzer::analyze_coverage;
    use crate::models::{GapData, GapType, Severity};
    use crate::test_support::offer;
    use gambit_shared::Offer;

    /// One offer per major operator so the watchlist stays quiet
    fn majors(state: &str) -> Vec<Offer> {
        ["BetMGM", "DraftKings", "FanDuel", "Caesars Palace Online", "Bet Rivers"]
            .iter()
            .map(|c| offer(c, state, "Lossback", 500.0))
            .collect()
    }

    #[test]
    fn test_missing_draftkings_flagged_once() {
        let offers: Vec<Offer> = majors("New Jersey")
            .into_iter()
            .filter(|o| o.casino_name != "DraftKings")
            .collect();
        let stats = analyze_coverage(&offers);

        let flagged: Vec<_> = stats
            .gaps
            .iter()
            .filter(|g| g.severity == Severity::High && g.description.contains("DraftKings"))
            .collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].gap_type, GapType::Casino);
        assert_eq!(flagged[0].data, GapData::MissingCasino { casino: "DraftKings".to_string() });
    }

    #[test]
    fn test_watchlist_matches_case_insensitive_fragment() {
        let stats = analyze_coverage(&majors("New Jersey"));
        assert!(stats.gaps.iter().all(|g| !g.description.contains("may be missing")));
    }

    #[test]
    fn test_thin_state_flagged() {
        let mut offers = majors("New Jersey");
        offers.extend(majors("Michigan"));
        offers.push(offer("Golden Nugget", "West Virginia", "Lossback", 500.0));

        let stats = analyze_coverage(&offers);
        let state_gaps: Vec<_> = stats.gaps.iter().filter(|g| g.gap_type == GapType::State).collect();
        assert_eq!(state_gaps.len(), 1);
        // 11 offers over 3 states: 1 is 27% of the 3.67 average
        assert_eq!(state_gaps[0].description, "West Virginia has only 1 offers (27% of average)");
        assert_eq!(state_gaps[0].severity, Severity::High);
    }

    #[test]
    fn test_single_state_casino_with_many_offers() {
        let mut offers = majors("New Jersey");
        offers.extend(majors("Michigan"));
        for bonus in [100.0, 200.0, 300.0] {
            offers.push(offer("Firekeepers", "Michigan", "Lossback", bonus));
        }
        offers.push(offer("Four Winds", "Michigan", "Lossback", 500.0));

        let stats = analyze_coverage(&offers);
        let casino_gaps: Vec<_> = stats
            .gaps
            .iter()
            .filter(|g| g.gap_type == GapType::Casino && g.severity == Severity::Medium)
            .collect();
        assert_eq!(casino_gaps.len(), 1);
        assert_eq!(
            casino_gaps[0].description,
            "Firekeepers only operates in Michigan but has 3 offers there"
        );
        assert_eq!(
            casino_gaps[0].recommendation,
            "Check if Firekeepers operates in New Jersey. Multi-state casinos often have similar offers."
        );
    }

    #[test]
    fn test_single_state_casino_flagged_when_only_state_tracked() {
        let offers: Vec<Offer> = [100.0, 200.0, 300.0]
            .into_iter()
            .map(|bonus| offer("Firekeepers", "Michigan", "Lossback", bonus))
            .collect();

        let stats = analyze_coverage(&offers);
        let casino_gaps: Vec<_> = stats
            .gaps
            .iter()
            .filter(|g| g.gap_type == GapType::Casino && g.severity == Severity::Medium)
            .collect();
        assert_eq!(casino_gaps.len(), 1);
        assert_eq!(
            casino_gaps[0].data,
            GapData::SingleStateCasino {
                casino: "Firekeepers".to_string(),
                current_state: "Michigan".to_string(),
                missing_states: vec![],
            }
        );
    }

    #[test]
    fn test_lossback_share_reported_with_one_decimal() {
        let mut offers = majors("New Jersey");
        for o in offers.iter_mut().skip(1) {
            o.offer_type = gambit_shared::OfferType::DepositCashable;
        }
        for _ in 0..2 {
            offers.push(offer("BetMGM", "New Jersey", "Deposit (Cashable)", 500.0));
        }

        let stats = analyze_coverage(&offers);
        let gap = stats
            .gaps
            .iter()
            .find(|g| g.gap_type == GapType::OfferType)
            .expect("lossback gap");
        assert_eq!(gap.description, "Only 1 Lossback offers (14.3% of total)");
    }

    #[test]
    fn test_no_lossback_offers_still_flagged() {
        let offers = vec![offer("BetMGM", "New Jersey", "Deposit (Cashable)", 500.0)];
        let stats = analyze_coverage(&offers);
        let gap = stats.gaps.iter().find(|g| g.gap_type == GapType::OfferType).unwrap();
        assert_eq!(gap.description, "Only 0 Lossback offers (0.0% of total)");
    }

    #[test]
    fn test_low_value_uses_mean_of_state_means() {
        let mut offers = Vec::new();
        // New Jersey: many small offers, Michigan: one large offer
        for _ in 0..8 {
            offers.push(offer("BetMGM", "New Jersey", "Lossback", 100.0));
        }
        offers.push(offer("FanDuel", "Michigan", "Lossback", 1900.0));

        let stats = analyze_coverage(&offers);
        let value_gaps: Vec<_> = stats.gaps.iter().filter(|g| g.gap_type == GapType::Value).collect();
        // overall = (100 + 1900) / 2 = 1000, not the weighted 300
        assert_eq!(value_gaps.len(), 1);
        assert_eq!(
            value_gaps[0].description,
            "New Jersey average bonus ($100) is 25% below overall average ($1000)"
        );
    }

    #[test]
    fn test_gaps_sorted_by_severity_stably() {
        let mut offers = Vec::new();
        for _ in 0..8 {
            offers.push(offer("Firekeepers", "Michigan", "Deposit (Cashable)", 100.0));
        }
        offers.push(offer("Golden Nugget", "West Virginia", "Deposit (Cashable)", 1900.0));

        let stats = analyze_coverage(&offers);
        let ranks: Vec<u8> = stats.gaps.iter().map(|g| g.severity.rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort();
        assert_eq!(ranks, sorted);

        // thin-state rule runs before the watchlist, so it leads the high block
        assert_eq!(stats.gaps[0].gap_type, GapType::State);
        let watchlist: Vec<&str> = stats
            .gaps
            .iter()
            .filter_map(|g| match &g.data {
                GapData::MissingCasino { casino } => Some(casino.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(watchlist, vec!["BetMGM", "DraftKings", "FanDuel", "Caesars", "BetRivers"]);
    }
}
