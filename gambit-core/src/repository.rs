use async_trait::async_trait;
use gambit_shared::Offer;
use crate::selection::StateSelection;
use crate::CoreResult;

/// Repository trait for offer data access.
///
/// Scoring and coverage analysis only ever see the materialized `Vec<Offer>`
/// returned here, so the backing store can be swapped freely.
#[async_trait]
pub trait OfferRepository: Send + Sync {
    async fn list_offers(&self) -> CoreResult<Vec<Offer>>;

    async fn get_offer(&self, id: &str) -> CoreResult<Option<Offer>>;

    /// Offers whose state is enabled in `selection`, in store order
    async fn list_offers_in(&self, selection: &StateSelection) -> CoreResult<Vec<Offer>> {
        let offers = self.list_offers().await?;
        Ok(selection.filter(&offers))
    }
}
