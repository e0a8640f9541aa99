use crate::models::ScoredOffer;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Ordering applied to a scored listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortOption {
    /// Highest priority score first
    #[default]
    Priority,
    BonusHigh,
    BonusLow,
    ValueRatio,
    /// Alphabetical by state name
    State,
    /// Alphabetical by casino name
    Casino,
    /// Keep input order; unknown keys land here
    Original,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Priority => "priority",
            SortOption::BonusHigh => "bonus-high",
            SortOption::BonusLow => "bonus-low",
            SortOption::ValueRatio => "value-ratio",
            SortOption::State => "state",
            SortOption::Casino => "casino",
            SortOption::Original => "original",
        }
    }
}

impl From<&str> for SortOption {
    fn from(key: &str) -> Self {
        match key.trim() {
            "priority" => SortOption::Priority,
            "bonus-high" => SortOption::BonusHigh,
            "bonus-low" => SortOption::BonusLow,
            "value-ratio" => SortOption::ValueRatio,
            "state" => SortOption::State,
            "casino" => SortOption::Casino,
            _ => SortOption::Original,
        }
    }
}

impl From<String> for SortOption {
    fn from(key: String) -> Self {
        SortOption::from(key.as_str())
    }
}

impl From<SortOption> for String {
    fn from(option: SortOption) -> Self {
        option.as_str().to_string()
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive first so "betOcean" sorts next to "BetMGM"
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Return a sorted copy of `offers`.
///
/// The sort is stable: offers with equal keys keep their input order.
pub fn sort_offers(offers: &[ScoredOffer], sort_by: SortOption) -> Vec<ScoredOffer> {
    let mut sorted = offers.to_vec();

    match sort_by {
        SortOption::Priority => {
            sorted.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score))
        }
        SortOption::BonusHigh => {
            sorted.sort_by(|a, b| b.offer.expected_bonus.total_cmp(&a.offer.expected_bonus))
        }
        SortOption::BonusLow => {
            sorted.sort_by(|a, b| a.offer.expected_bonus.total_cmp(&b.offer.expected_bonus))
        }
        SortOption::ValueRatio => sorted.sort_by(|a, b| b.value_ratio.total_cmp(&a.value_ratio)),
        SortOption::State => {
            sorted.sort_by(|a, b| compare_names(&a.offer.state.name, &b.offer.state.name))
        }
        SortOption::Casino => {
            sorted.sort_by(|a, b| compare_names(&a.offer.casino_name, &b.offer.casino_name))
        }
        SortOption::Original => {}
    }

    sorted
}
