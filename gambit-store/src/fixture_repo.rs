use async_trait::async_trait;
use gambit_core::{CoreResult, OfferRepository};
use gambit_shared::{Offer, OfferType, StateRef};
use serde::Deserialize;
use std::path::Path;
use crate::StoreError;

const EMBEDDED_FIXTURE: &str = include_str!("../data/casino_offers.json");

/// One row of the offer fixture, in the export's own field names
#[derive(Debug, Clone, Deserialize)]
pub struct OfferRecord {
    pub casinodb_id: i64,
    #[serde(rename = "Offer_Name")]
    pub offer_name: String,
    pub offer_type: String,
    #[serde(rename = "Expected_Deposit")]
    pub expected_deposit: f64,
    #[serde(rename = "Expected_Bonus")]
    pub expected_bonus: f64,
    #[serde(rename = "Name")]
    pub name: String,
    pub states_id: i64,
    pub state: StateRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StateRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Abbreviation")]
    pub abbreviation: String,
}

impl OfferRecord {
    /// The export repeats `casinodb_id`/`states_id` for multi-day promotions,
    /// so the row position is part of the id. Stable only while the fixture
    /// order is.
    fn into_offer(self, index: usize) -> Offer {
        Offer {
            id: format!("{}-{}-{}", self.casinodb_id, self.states_id, index),
            casino_source_id: self.casinodb_id,
            offer_name: self.offer_name,
            offer_type: OfferType::from(self.offer_type),
            expected_deposit: self.expected_deposit,
            expected_bonus: self.expected_bonus,
            casino_name: self.name,
            state_id: self.states_id,
            state: StateRef::new(self.state.name, self.state.abbreviation),
        }
    }
}

/// Read-only repository over a static JSON export
pub struct FixtureOfferRepository {
    offers: Vec<Offer>,
}

impl FixtureOfferRepository {
    pub fn from_records(records: Vec<OfferRecord>) -> Self {
        let offers: Vec<Offer> = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_offer(index))
            .collect();

        let negative = offers
            .iter()
            .filter(|o| o.expected_deposit < 0.0 || o.expected_bonus < 0.0)
            .count();
        if negative > 0 {
            tracing::warn!(count = negative, "fixture contains negative deposit or bonus amounts");
        }

        Self { offers }
    }

    pub fn from_json(raw: &str) -> Result<Self, StoreError> {
        let records: Vec<OfferRecord> = serde_json::from_str(raw)?;
        Ok(Self::from_records(records))
    }

    /// The fixture compiled into the binary
    pub fn embedded() -> Result<Self, StoreError> {
        Self::from_json(EMBEDDED_FIXTURE)
    }

    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await?;
        let repo = Self::from_json(&raw)?;
        tracing::info!(path = %path.display(), offers = repo.offers.len(), "loaded offer fixture");
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

#[async_trait]
impl OfferRepository for FixtureOfferRepository {
    async fn list_offers(&self) -> CoreResult<Vec<Offer>> {
        Ok(self.offers.clone())
    }

    async fn get_offer(&self, id: &str) -> CoreResult<Option<Offer>> {
        Ok(self.offers.iter().find(|o| o.id == id).cloned())
    }
}
