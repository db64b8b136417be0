//! HTTP transport for the outlook pipeline.
//!
//! Thin by design: request parsing, CORS, and status mapping live here;
//! every decision with real logic sits behind the orchestrator.

pub mod outlook_routes;
pub mod recommendation_routes;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use finnhub_client::FinnhubClient;
use outlook_core::OutlookError;
use outlook_orchestrator::OutlookOrchestrator;
use sentiment_client::SentimentClient;
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Budget for one sentiment collaborator call.
const SENTIMENT_TIMEOUT: Duration = Duration::from_secs(10);

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub finnhub_api_key: String,
    pub sentiment_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let finnhub_api_key = std::env::var("FINNHUB_API_KEY")
            .map_err(|_| anyhow::anyhow!("FINNHUB_API_KEY not set"))?;
        let sentiment_url = std::env::var("SENTIMENT_URL")
            .unwrap_or_else(|_| "http://localhost:8003".to_string());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080);

        Ok(Self {
            finnhub_api_key,
            sentiment_url,
            port,
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<OutlookOrchestrator>,
}

/// A pipeline error mapped onto a status code, serialized as
/// `{"error": "..."}` for every variant.
pub struct AppError(pub OutlookError);

impl From<OutlookError> for AppError {
    fn from(err: OutlookError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            OutlookError::Validation(_) => StatusCode::BAD_REQUEST,
            OutlookError::Upstream(_) => StatusCode::BAD_GATEWAY,
            OutlookError::Collaborator(_) | OutlookError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(outlook_routes::outlook_routes())
        .merge(recommendation_routes::recommendation_routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let market_data = FinnhubClient::new(config.finnhub_api_key.clone());
    let sentiment = SentimentClient::new(config.sentiment_url.clone(), SENTIMENT_TIMEOUT);
    let state = AppState {
        orchestrator: Arc::new(OutlookOrchestrator::new(market_data, Arc::new(sentiment))),
    };

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
