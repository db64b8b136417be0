use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Real-time quote snapshot.
///
/// Providers omit fields freely, so every price is optional; consumers
/// treat an absent value as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Quote {
    pub current: Option<f64>,
    pub prev_close: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub open: Option<f64>,
}

/// Daily closing prices, ascending by time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandleSeries {
    pub closes: Vec<f64>,
}

/// News article headline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub headline: String,
    pub published: DateTime<Utc>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Per-class counts from the sentiment collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

/// Momentum/trend verdict. "Not enough data" is a terminal state for
/// short series, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalSignal {
    pub note: String,
    pub rsi: Option<f64>,
}

/// Intraday-volatility verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskSignal {
    pub note: String,
    pub pct_change: f64,
}

/// Qualitative label for the combined sentiment/technical/risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Cautious,
    Neutral,
    #[serde(rename = "Slightly Positive")]
    SlightlyPositive,
}

/// Synthesized verdict for one symbol. Fully derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsensusReport {
    pub symbol: String,
    pub tone: Tone,
    /// Technical note first, risk note second.
    pub highlights: [String; 2],
}

/// Full per-request response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlookReport {
    pub quote: Quote,
    pub technical: TechnicalSignal,
    pub risk: RiskSignal,
    pub consensus: ConsensusReport,
    pub headlines: Vec<NewsItem>,
}

/// Analyst recommendation counts for one reporting period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSummary {
    pub buy: i32,
    pub hold: i32,
    pub sell: i32,
    pub strong_buy: i32,
    pub strong_sell: i32,
}
