pub mod app_config;
pub mod fixture_repo;
pub mod memory_repo;

pub use fixture_repo::{FixtureOfferRepository, OfferRecord};
pub use memory_repo::InMemoryOfferRepository;

use gambit_core::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read offer data: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed offer data: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::SourceUnavailable(err.to_string())
    }
}
