pub mod error;

pub use error::{SentimentError, SentimentResult};

use async_trait::async_trait;
use outlook_core::{OutlookError, SentimentProvider, SentimentSummary};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Normalized classification classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

/// One classified text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledText {
    pub label: SentimentLabel,
    pub score: f64,
}

/// Classification outcome for one batch of texts.
#[derive(Debug, Clone)]
pub struct SentimentOutcome {
    pub results: Vec<LabeledText>,
    pub summary: SentimentSummary,
}

/// Map a raw model label onto the three classes. Models disagree on
/// exact spellings ("POSITIVE", "pos", "LABEL_2"); anything that is not
/// recognizably positive or negative counts as neutral.
pub fn normalize_label(raw: &str) -> SentimentLabel {
    let upper = raw.to_uppercase();
    if upper.contains("POS") {
        SentimentLabel::Positive
    } else if upper.contains("NEG") {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Per-class counts over normalized labels.
pub fn summarize(results: &[LabeledText]) -> SentimentSummary {
    let mut summary = SentimentSummary::default();
    for r in results {
        match r.label {
            SentimentLabel::Positive => summary.positive += 1,
            SentimentLabel::Neutral => summary.neutral += 1,
            SentimentLabel::Negative => summary.negative += 1,
        }
    }
    summary
}

#[derive(Debug, Clone, Serialize)]
struct AnalyzeRequest<'a> {
    texts: &'a [String],
}

#[derive(Debug, Clone, Deserialize)]
struct RawResult {
    #[serde(default)]
    label: String,
    #[serde(default)]
    score: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct RawResponse {
    #[serde(default)]
    results: Vec<RawResult>,
    #[serde(default)]
    summary: Option<SentimentSummary>,
}

#[derive(Clone)]
pub struct SentimentClient {
    client: reqwest::Client,
    base_url: String,
}

impl SentimentClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client, base_url }
    }

    /// Classify a batch of texts. Empty input short-circuits to a zero
    /// summary without calling out.
    pub async fn analyze(&self, texts: &[String]) -> SentimentResult<SentimentOutcome> {
        if texts.is_empty() {
            return Ok(SentimentOutcome {
                results: Vec::new(),
                summary: SentimentSummary::default(),
            });
        }

        let response = self
            .client
            .post(format!("{}/analyze", self.base_url))
            .json(&AnalyzeRequest { texts })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SentimentError::ServiceUnavailable(format!(
                "Status: {}",
                response.status()
            )));
        }

        let raw: RawResponse = response
            .json()
            .await
            .map_err(|e| SentimentError::InvalidResponse(e.to_string()))?;

        let results: Vec<LabeledText> = raw
            .results
            .iter()
            .map(|r| LabeledText {
                label: normalize_label(&r.label),
                score: r.score,
            })
            .collect();

        // A response without a summary still carries one implicitly.
        let summary = raw.summary.unwrap_or_else(|| summarize(&results));

        Ok(SentimentOutcome { results, summary })
    }
}

#[async_trait]
impl SentimentProvider for SentimentClient {
    async fn classify(&self, texts: &[String]) -> Result<SentimentSummary, OutlookError> {
        let outcome = self
            .analyze(texts)
            .await
            .map_err(|e| OutlookError::Collaborator(e.to_string()))?;
        Ok(outcome.summary)
    }
}
