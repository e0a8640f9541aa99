use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use gambit_coverage::{
    analyze_coverage, find_cross_coverage_gaps, find_offer_type_gaps_by_state, research_priorities,
    CoverageStats, CrossCoverageGap, Distribution, OfferTypeShare, ResearchBrief,
};
use serde::{Deserialize, Serialize};
use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct CoverageQuery {
    pub states: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResearchResponse {
    pub priorities: Vec<String>,
    pub brief: ResearchBrief,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/coverage", get(coverage_stats))
        .route("/v1/coverage/cross", get(cross_coverage))
        .route("/v1/coverage/offer-types", get(offer_type_mix))
        .route("/v1/research", get(research))
}

/// GET /v1/coverage
async fn coverage_stats(
    State(state): State<AppState>,
    Query(query): Query<CoverageQuery>,
) -> Result<Json<CoverageStats>, AppError> {
    let selection = state.selection(query.states.as_deref());
    let offers = state.offer_repo.list_offers_in(&selection).await?;
    Ok(Json(analyze_coverage(&offers)))
}

/// GET /v1/coverage/cross
/// Always over the whole store: expansion candidates ignore the state filter
async fn cross_coverage(
    State(state): State<AppState>,
) -> Result<Json<Vec<CrossCoverageGap>>, AppError> {
    let offers = state.offer_repo.list_offers().await?;
    Ok(Json(find_cross_coverage_gaps(&offers)))
}

/// GET /v1/coverage/offer-types
async fn offer_type_mix(
    State(state): State<AppState>,
    Query(query): Query<CoverageQuery>,
) -> Result<Json<Distribution<Vec<OfferTypeShare>>>, AppError> {
    let selection = state.selection(query.states.as_deref());
    let offers = state.offer_repo.list_offers_in(&selection).await?;
    Ok(Json(find_offer_type_gaps_by_state(&offers)))
}

/// GET /v1/research
async fn research(
    State(state): State<AppState>,
    Query(query): Query<CoverageQuery>,
) -> Result<Json<ResearchResponse>, AppError> {
    let selection = state.selection(query.states.as_deref());
    let offers = state.offer_repo.list_offers_in(&selection).await?;
    let stats = analyze_coverage(&offers);

    Ok(Json(ResearchResponse {
        priorities: research_priorities(&stats.gaps),
        brief: ResearchBrief::from_stats(&stats),
    }))
}
