use chrono::{DateTime, Duration, Utc};
use outlook_core::{CandleSeries, NewsItem, OutlookError, Quote};
use reqwest::Client;
use serde::{Deserialize, Serialize};

const BASE_URL: &str = "https://finnhub.io/api/v1";

/// Per-request budget for every market-data read. No retries.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(12);

const CANDLE_LOOKBACK_DAYS: i64 = 400;
const NEWS_WINDOW_DAYS: i64 = 7;

#[derive(Clone)]
pub struct FinnhubClient {
    api_key: String,
    client: Client,
}

impl FinnhubClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { api_key, client }
    }

    /// GET a Finnhub path with the token appended, decoding the JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, OutlookError> {
        let url = format!("{}/{}", BASE_URL, path);
        tracing::debug!(%url, "fetching from provider");

        let response = self
            .client
            .get(&url)
            .query(query)
            .query(&[("token", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| OutlookError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            return Err(OutlookError::Upstream(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| OutlookError::Upstream(e.to_string()))
    }

    /// Get the real-time quote for a symbol
    pub async fn get_quote(&self, symbol: &str) -> Result<Quote, OutlookError> {
        let raw: QuoteResponse = self
            .get_json("quote", &[("symbol", symbol.to_string())])
            .await?;

        Ok(Quote {
            current: raw.c,
            prev_close: raw.pc,
            high: raw.h,
            low: raw.l,
            open: raw.o,
        })
    }

    /// Get closing prices covering the trailing 400 days
    pub async fn get_candles(
        &self,
        symbol: &str,
        resolution: &str,
    ) -> Result<CandleSeries, OutlookError> {
        let to = Utc::now().timestamp();
        let from = to - CANDLE_LOOKBACK_DAYS * 24 * 3600;

        let raw: CandleResponse = self
            .get_json(
                "stock/candle",
                &[
                    ("symbol", symbol.to_string()),
                    ("resolution", resolution.to_string()),
                    ("from", from.to_string()),
                    ("to", to.to_string()),
                ],
            )
            .await?;

        // Status "no_data" arrives with the price arrays missing entirely.
        Ok(CandleSeries {
            closes: raw.c.unwrap_or_default(),
        })
    }

    /// Get company news for the trailing 7 days, newest first as the
    /// provider returns them.
    pub async fn get_news(&self, symbol: &str) -> Result<Vec<NewsItem>, OutlookError> {
        let to = Utc::now();
        let from = to - Duration::days(NEWS_WINDOW_DAYS);

        let raw: Vec<NewsResponse> = self
            .get_json(
                "company-news",
                &[
                    ("symbol", symbol.to_string()),
                    ("from", from.format("%Y-%m-%d").to_string()),
                    ("to", to.format("%Y-%m-%d").to_string()),
                ],
            )
            .await?;

        Ok(raw
            .into_iter()
            .map(|r| NewsItem {
                headline: r.headline.unwrap_or_default(),
                published: DateTime::from_timestamp(r.datetime.unwrap_or(0), 0)
                    .unwrap_or_else(Utc::now),
                source: r.source,
                url: r.url,
            })
            .collect())
    }

    /// Get analyst recommendation trends, newest period first
    pub async fn get_recommendation_trends(
        &self,
        symbol: &str,
    ) -> Result<Vec<RecommendationTrend>, OutlookError> {
        self.get_json("stock/recommendation", &[("symbol", symbol.to_string())])
            .await
    }
}

// Response structures

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    #[serde(default)]
    c: Option<f64>, // current price
    #[serde(default)]
    pc: Option<f64>, // previous close
    #[serde(default)]
    h: Option<f64>, // day high
    #[serde(default)]
    l: Option<f64>, // day low
    #[serde(default)]
    o: Option<f64>, // day open
}

#[derive(Debug, Deserialize)]
struct CandleResponse {
    #[serde(default)]
    c: Option<Vec<f64>>, // closes, ascending by time
    #[serde(default)]
    #[allow(dead_code)]
    s: Option<String>, // "ok" | "no_data"
}

#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    headline: Option<String>,
    #[serde(default)]
    datetime: Option<i64>, // unix seconds
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationTrend {
    #[serde(default)]
    pub period: Option<String>, // e.g. "2025-09-30"
    #[serde(default)]
    pub buy: Option<i32>,
    #[serde(default)]
    pub hold: Option<i32>,
    #[serde(default)]
    pub sell: Option<i32>,
    #[serde(default, rename = "strongBuy")]
    pub strong_buy: Option<i32>,
    #[serde(default, rename = "strongSell")]
    pub strong_sell: Option<i32>,
}
