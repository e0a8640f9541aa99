use async_trait::async_trait;
use gambit_core::{CoreError, CoreResult, OfferRepository};
use gambit_shared::Offer;
use tokio::sync::RwLock;

/// Mutable repository keyed by caller-supplied ids
#[derive(Default)]
pub struct InMemoryOfferRepository {
    offers: RwLock<Vec<Offer>>,
}

impl InMemoryOfferRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn from_offers(offers: Vec<Offer>) -> CoreResult<Self> {
        let repo = Self::new();
        for offer in offers {
            repo.insert(offer).await?;
        }
        Ok(repo)
    }

    pub async fn insert(&self, offer: Offer) -> CoreResult<()> {
        if offer.id.trim().is_empty() {
            return Err(CoreError::ValidationError("offer id must not be empty".to_string()));
        }
        let mut offers = self.offers.write().await;
        if offers.iter().any(|o| o.id == offer.id) {
            return Err(CoreError::DuplicateOffer(offer.id));
        }
        offers.push(offer);
        Ok(())
    }

    pub async fn remove(&self, id: &str) -> Option<Offer> {
        let mut offers = self.offers.write().await;
        let pos = offers.iter().position(|o| o.id == id)?;
        Some(offers.remove(pos))
    }
}

#[async_trait]
impl OfferRepository for InMemoryOfferRepository {
    async fn list_offers(&self) -> CoreResult<Vec<Offer>> {
        Ok(self.offers.read().await.clone())
    }

    async fn get_offer(&self, id: &str) -> CoreResult<Option<Offer>> {
        Ok(self.offers.read().await.iter().find(|o| o.id == id).cloned())
    }
}
