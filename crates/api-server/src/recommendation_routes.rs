//! Recommendation Routes
//!
//! Aggregates the provider's analyst recommendation trends into a
//! compact per-symbol summary.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use finnhub_client::RecommendationTrend;
use outlook_core::RecommendationSummary;
use serde::Serialize;

use crate::{AppError, AppState};

#[derive(Serialize)]
pub struct RecommendationResponse {
    pub symbol: String,
    /// Newest period's record, absent when the provider has none.
    pub latest: Option<LatestRecommendation>,
    pub summary: RecommendationSummary,
}

#[derive(Serialize)]
pub struct LatestRecommendation {
    pub period: Option<String>,
    #[serde(flatten)]
    pub counts: RecommendationSummary,
}

pub fn recommendation_routes() -> Router<AppState> {
    Router::new().route("/api/recommendations/:symbol", get(get_recommendations))
}

async fn get_recommendations(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let trends = state.orchestrator.recommendation_trends(&symbol).await?;
    let symbol = symbol.trim().to_uppercase();

    // Provider returns newest first; the head record is the latest period.
    let latest = trends.first().map(|t| LatestRecommendation {
        period: t.period.clone(),
        counts: summarize(t),
    });
    let summary = latest.as_ref().map(|l| l.counts).unwrap_or_default();

    Ok(Json(RecommendationResponse {
        symbol,
        latest,
        summary,
    }))
}

fn summarize(trend: &RecommendationTrend) -> RecommendationSummary {
    RecommendationSummary {
        buy: trend.buy.unwrap_or(0),
        hold: trend.hold.unwrap_or(0),
        sell: trend.sell.unwrap_or(0),
        strong_buy: trend.strong_buy.unwrap_or(0),
        strong_sell: trend.strong_sell.unwrap_or(0),
    }
}
