use gambit_shared::{Offer, StateRef};
use serde::{Deserialize, Serialize};

/// Which states are switched on in the dashboard.
///
/// Entries match either a state's name or its abbreviation, ignoring case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSelection {
    all: bool,
    enabled: Vec<String>,
}

impl StateSelection {
    /// Every state is enabled
    pub fn all() -> Self {
        Self { all: true, enabled: Vec::new() }
    }

    pub fn only<I, S>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut enabled: Vec<String> = Vec::new();
        for state in states {
            let key = state.as_ref().trim().to_lowercase();
            if !key.is_empty() && !enabled.contains(&key) {
                enabled.push(key);
            }
        }
        Self { all: false, enabled }
    }

    /// Parse a comma separated list such as `"NJ, Michigan"`
    pub fn parse(raw: &str) -> Self {
        Self::only(raw.split(','))
    }

    pub fn is_all(&self) -> bool {
        self.all
    }

    pub fn is_enabled(&self, state: &StateRef) -> bool {
        if self.all {
            return true;
        }
        let name = state.name.to_lowercase();
        let abbreviation = state.abbreviation.to_lowercase();
        self.enabled.iter().any(|s| *s == name || *s == abbreviation)
    }

    /// Keep the offers of enabled states, preserving order
    pub fn filter(&self, offers: &[Offer]) -> Vec<Offer> {
        let kept: Vec<Offer> = offers
            .iter()
            .filter(|o| self.is_enabled(&o.state))
            .cloned()
            .collect();
        tracing::debug!(total = offers.len(), kept = kept.len(), "applied state selection");
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(name: &str, abbreviation: &str) -> StateRef {
        StateRef::new(name, abbreviation)
    }

    #[test]
    fn test_matches_name_or_abbreviation() {
        let selection = StateSelection::parse("NJ, michigan");
        assert!(selection.is_enabled(&state("New Jersey", "NJ")));
        assert!(selection.is_enabled(&state("Michigan", "MI")));
        assert!(!selection.is_enabled(&state("West Virginia", "WV")));
    }

    #[test]
    fn test_empty_selection_enables_nothing() {
        let selection = StateSelection::parse("");
        assert!(!selection.is_all());
        assert!(!selection.is_enabled(&state("Pennsylvania", "PA")));
    }

    #[test]
    fn test_all_enables_everything() {
        assert!(StateSelection::all().is_enabled(&state("Anywhere", "ZZ")));
    }
}
