pub mod repository;
pub mod selection;

pub use repository::OfferRepository;
pub use selection::StateSelection;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Duplicate offer id: {0}")]
    DuplicateOffer(String),
    #[error("Offer source unavailable: {0}")]
    SourceUnavailable(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
