use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse bucket used to badge offers in listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

impl PriorityTier {
    pub fn from_score(priority_score: f64) -> Self {
        if priority_score >= 75.0 {
            PriorityTier::High
        } else if priority_score >= 50.0 {
            PriorityTier::Medium
        } else {
            PriorityTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriorityTier::High => "High Priority",
            PriorityTier::Medium => "Medium Priority",
            PriorityTier::Low => "Low Priority",
        }
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
