//! Outlook Routes
//!
//! The per-symbol outlook endpoint plus its hint and health companions.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use outlook_core::OutlookReport;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{AppError, AppState};

#[derive(Deserialize)]
pub struct OutlookRequest {
    #[serde(default)]
    pub symbol: String,
    /// Raw texts to classify when the news window has no headlines.
    #[serde(default)]
    pub texts: Vec<String>,
}

pub fn outlook_routes() -> Router<AppState> {
    Router::new()
        .route("/api/outlook", post(get_outlook).get(outlook_hint))
        .route("/healthz", get(healthz))
}

async fn get_outlook(
    State(state): State<AppState>,
    Json(request): Json<OutlookRequest>,
) -> Result<Json<OutlookReport>, AppError> {
    let report = state
        .orchestrator
        .outlook(&request.symbol, &request.texts)
        .await?;
    Ok(Json(report))
}

/// Static hint for GET probes against the POST endpoint.
async fn outlook_hint() -> Json<Value> {
    Json(json!({ "ok": true, "hint": "POST JSON: { symbol: 'AAPL', texts?: [] }" }))
}

async fn healthz() -> &'static str {
    "ok"
}
