use serde::Serialize;
use crate::models::{CoverageGap, CoverageStats, Severity};

const MEDIUM_PRIORITY_LIMIT: usize = 3;
const BRIEF_GAP_LIMIT: usize = 5;

/// Research to-do list: every high-severity recommendation, then the
/// first few medium ones.
pub fn research_priorities(gaps: &[CoverageGap]) -> Vec<String> {
    let high = gaps.iter().filter(|g| g.severity == Severity::High);
    let medium = gaps
        .iter()
        .filter(|g| g.severity == Severity::Medium)
        .take(MEDIUM_PRIORITY_LIMIT);

    high.chain(medium).map(|g| g.recommendation.clone()).collect()
}

/// Plain-data summary handed to an external recommendation service.
///
/// Nothing in this workspace calls such a service; the brief only fixes
/// what it would be given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResearchBrief {
    pub total_offers: usize,
    pub state_count: usize,
    pub casino_count: usize,
    pub top_gaps: Vec<CoverageGap>,
}

impl ResearchBrief {
    pub fn from_stats(stats: &CoverageStats) -> Self {
        Self {
            total_offers: stats.total_offers,
            state_count: stats.state_distribution.len(),
            casino_count: stats.casino_distribution.len(),
            top_gaps: stats.gaps.iter().take(BRIEF_GAP_LIMIT).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze_coverage;
    use crate::models::{GapData, GapType};
    use crate::test_support::offer;

    fn gap(severity: Severity, recommendation: &str) -> CoverageGap {
        CoverageGap {
            gap_type: GapType::Casino,
            severity,
            description: String::new(),
            recommendation: recommendation.to_string(),
            data: GapData::MissingCasino { casino: "X".to_string() },
        }
    }

    #[test]
    fn test_priorities_cap_medium() {
        let gaps = vec![
            gap(Severity::High, "h1"),
            gap(Severity::High, "h2"),
            gap(Severity::Medium, "m1"),
            gap(Severity::Medium, "m2"),
            gap(Severity::Medium, "m3"),
            gap(Severity::Medium, "m4"),
            gap(Severity::Low, "l1"),
        ];
        assert_eq!(research_priorities(&gaps), vec!["h1", "h2", "m1", "m2", "m3"]);
    }

    #[test]
    fn test_brief_summarizes_stats() {
        let offers = vec![
            offer("Golden Nugget", "New Jersey", "Deposit (Cashable)", 100.0),
            offer("Golden Nugget", "Michigan", "Deposit (Cashable)", 100.0),
            offer("Stardust", "Michigan", "Deposit (Cashable)", 100.0),
        ];
        let stats = analyze_coverage(&offers);
        let brief = ResearchBrief::from_stats(&stats);

        assert_eq!(brief.total_offers, 3);
        assert_eq!(brief.state_count, 2);
        assert_eq!(brief.casino_count, 2);
        assert_eq!(brief.top_gaps.len(), 5);
        assert_eq!(brief.top_gaps[..], stats.gaps[..5]);
    }
}
