use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use gambit_offer::{prioritize_offers, sort_offers, PriorityTier, ScoredOffer, SortOption};
use gambit_shared::Offer;
use serde::{Deserialize, Serialize};
use crate::{error::AppError, state::AppState};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListOffersQuery {
    /// Comma separated state names or abbreviations
    pub states: Option<String>,
    pub sort: Option<SortOption>,
    pub page: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct OfferListing {
    #[serde(flatten)]
    pub offer: ScoredOffer,
    pub tier: PriorityTier,
}

#[derive(Debug, Serialize)]
pub struct OfferPageResponse {
    pub offers: Vec<OfferListing>,
    pub sort: SortOption,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/offers", get(list_offers))
        .route("/v1/offers/{id}", get(get_offer))
}

/// GET /v1/offers
/// Score the selected states' offers and return one page of them
async fn list_offers(
    State(state): State<AppState>,
    Query(query): Query<ListOffersQuery>,
) -> Result<Json<OfferPageResponse>, AppError> {
    let selection = state.selection(query.states.as_deref());
    let working_set = state.offer_repo.list_offers_in(&selection).await?;

    let sort = query.sort.unwrap_or_else(|| state.default_sort());
    let sorted = sort_offers(&prioritize_offers(&working_set), sort);

    let page_size = state.dashboard.page_size.max(1);
    let total = sorted.len();
    let total_pages = total.div_ceil(page_size);
    let page = query.page.unwrap_or(1).max(1);

    let offers: Vec<OfferListing> = sorted
        .into_iter()
        .skip((page - 1).saturating_mul(page_size))
        .take(page_size)
        .map(|offer| OfferListing { tier: offer.tier(), offer })
        .collect();

    tracing::debug!(total, page, %sort, "listed offers");

    Ok(Json(OfferPageResponse { offers, sort, total, page, total_pages }))
}

/// GET /v1/offers/{id}
async fn get_offer(
    State(state): State<AppState>,
    Path(offer_id): Path<String>,
) -> Result<Json<Offer>, AppError> {
    state
        .offer_repo
        .get_offer(&offer_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Offer not found: {}", offer_id)))
}
