use std::sync::Arc;
use gambit_core::{OfferRepository, StateSelection};
use gambit_offer::SortOption;
use gambit_store::app_config::DashboardConfig;

#[derive(Clone)]
pub struct AppState {
    pub offer_repo: Arc<dyn OfferRepository>,
    pub dashboard: DashboardConfig,
}

impl AppState {
    pub fn new(offer_repo: Arc<dyn OfferRepository>, dashboard: DashboardConfig) -> Self {
        Self { offer_repo, dashboard }
    }

    /// `states` from the query string, or the configured default states
    pub fn selection(&self, states: Option<&str>) -> StateSelection {
        match states {
            Some(raw) => StateSelection::parse(raw),
            None => StateSelection::only(&self.dashboard.default_states),
        }
    }

    pub fn default_sort(&self) -> SortOption {
        SortOption::from(self.dashboard.default_sort.as_str())
    }
}
