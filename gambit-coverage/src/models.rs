use serde::{Deserialize, Serialize};
use crate::distribution::Distribution;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapType {
    State,
    Casino,
    OfferType,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Sort key: high first
    pub fn rank(&self) -> u8 {
        match self {
            Severity::High => 0,
            Severity::Medium => 1,
            Severity::Low => 2,
        }
    }
}

/// Figures behind a gap, shaped per rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GapData {
    LowStateCount {
        state: String,
        offer_count: usize,
        average: f64,
    },
    SingleStateCasino {
        casino: String,
        current_state: String,
        missing_states: Vec<String>,
    },
    OfferTypeShare {
        offer_type: String,
        count: usize,
        percentage: f64,
    },
    LowStateValue {
        state: String,
        state_avg: f64,
        overall_avg: f64,
    },
    MissingCasino {
        casino: String,
    },
}

/// A weak spot in offer coverage with a suggested follow-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageGap {
    #[serde(rename = "type")]
    pub gap_type: GapType,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
    pub data: GapData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasinoCount {
    pub name: String,
    pub offer_count: usize,
}

/// Snapshot of how the working set is spread out
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageStats {
    pub total_offers: usize,
    pub state_distribution: Distribution<usize>,
    pub casino_distribution: Distribution<usize>,
    pub offer_type_distribution: Distribution<usize>,
    pub average_bonus_by_state: Distribution<f64>,
    pub top_casinos: Vec<CasinoCount>,
    /// High severity first
    pub gaps: Vec<CoverageGap>,
}

/// A multi-state casino that is absent from some tracked states
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossCoverageGap {
    pub casino: String,
    pub present_in: Vec<String>,
    pub missing_in: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferTypeShare {
    pub offer_type: String,
    pub count: usize,
    pub percentage: f64,
}
