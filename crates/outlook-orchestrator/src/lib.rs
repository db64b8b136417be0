use std::sync::Arc;

use finnhub_client::{FinnhubClient, RecommendationTrend};
use outlook_core::{
    NewsItem, OutlookError, OutlookReport, SentimentProvider, SentimentSummary,
};
use risk_analysis::RiskAnalysisEngine;
use technical_analysis::TechnicalAnalysisEngine;

pub mod cache;
pub mod reader;
pub mod synthesize;

pub use cache::TtlCache;
pub use reader::MarketDataReader;
pub use synthesize::synthesize;

/// At most this many headlines feed the sentiment collaborator.
const SENTIMENT_TEXT_CAP: usize = 25;
/// How many headlines the response surfaces.
const HEADLINE_CAP: usize = 5;

pub struct OutlookOrchestrator {
    reader: MarketDataReader,
    sentiment: Arc<dyn SentimentProvider>,
    technical: TechnicalAnalysisEngine,
    risk: RiskAnalysisEngine,
}

impl OutlookOrchestrator {
    pub fn new(market_data: FinnhubClient, sentiment: Arc<dyn SentimentProvider>) -> Self {
        Self {
            reader: MarketDataReader::new(market_data),
            sentiment,
            technical: TechnicalAnalysisEngine::new(),
            risk: RiskAnalysisEngine::new(),
        }
    }

    /// Build the full outlook for one symbol.
    ///
    /// Market-data failures abort the request; a failing sentiment
    /// collaborator degrades to a zero-filled summary instead.
    pub async fn outlook(
        &self,
        symbol: &str,
        texts: &[String],
    ) -> Result<OutlookReport, OutlookError> {
        let symbol = normalize_symbol(symbol)?;
        tracing::info!(%symbol, "building outlook");

        // Independent reads with no ordering dependency between them.
        let (quote, candles, news) = tokio::join!(
            self.reader.quote(&symbol),
            self.reader.candles(&symbol),
            self.reader.news(&symbol),
        );
        let (quote, candles, mut news) = (quote?, candles?, news?);

        let sentiment = self.sentiment_or_zero(&symbol, &news, texts).await;

        let technical = self.technical.analyze(&candles.closes);
        let risk = self.risk.analyze(&quote);
        let consensus = synthesize(&symbol, &sentiment, &technical, &risk);

        news.truncate(HEADLINE_CAP);
        Ok(OutlookReport {
            quote,
            technical,
            risk,
            consensus,
            headlines: news,
        })
    }

    /// Headlines feed the collaborator; caller-supplied texts are the
    /// fallback when the news window came back empty. Any collaborator
    /// failure degrades to the zero summary — never fatal.
    async fn sentiment_or_zero(
        &self,
        symbol: &str,
        news: &[NewsItem],
        texts: &[String],
    ) -> SentimentSummary {
        let headlines: Vec<String> = news
            .iter()
            .map(|n| n.headline.trim())
            .filter(|h| !h.is_empty())
            .take(SENTIMENT_TEXT_CAP)
            .map(str::to_string)
            .collect();

        let batch: &[String] = if headlines.is_empty() { texts } else { &headlines };

        match self.sentiment.classify(batch).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!(%symbol, error = %e, "sentiment collaborator unavailable, using zero summary");
                SentimentSummary::default()
            }
        }
    }

    /// Latest analyst recommendation trends, delegated straight to the
    /// provider.
    pub async fn recommendation_trends(
        &self,
        symbol: &str,
    ) -> Result<Vec<RecommendationTrend>, OutlookError> {
        let symbol = normalize_symbol(symbol)?;
        self.reader.recommendation_trends(&symbol).await
    }

    /// Drop all cached market data.
    pub fn reset_caches(&self) {
        self.reader.reset();
    }
}

/// Uppercase, trimmed; empty after trimming is a validation failure.
fn normalize_symbol(raw: &str) -> Result<String, OutlookError> {
    let symbol = raw.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(OutlookError::Validation("Missing symbol".to_string()));
    }
    Ok(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    #[test]
    fn symbol_is_trimmed_and_uppercased() {
        assert_eq!(normalize_symbol("  aapl ").unwrap(), "AAPL");
        assert_eq!(normalize_symbol("msft").unwrap(), "MSFT");
    }

    #[test]
    fn blank_symbol_is_rejected() {
        assert!(matches!(
            normalize_symbol("   "),
            Err(OutlookError::Validation(_))
        ));
        assert!(matches!(
            normalize_symbol(""),
            Err(OutlookError::Validation(_))
        ));
    }

    struct FailingProvider;

    #[async_trait]
    impl SentimentProvider for FailingProvider {
        async fn classify(&self, _texts: &[String]) -> Result<SentimentSummary, OutlookError> {
            Err(OutlookError::Collaborator("connection refused".to_string()))
        }
    }

    struct CapturingProvider {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SentimentProvider for CapturingProvider {
        async fn classify(&self, texts: &[String]) -> Result<SentimentSummary, OutlookError> {
            *self.seen.lock().unwrap() = texts.to_vec();
            Ok(SentimentSummary {
                positive: 2,
                neutral: 0,
                negative: 1,
            })
        }
    }

    fn orchestrator(provider: Arc<dyn SentimentProvider>) -> OutlookOrchestrator {
        OutlookOrchestrator::new(FinnhubClient::new("test-key".to_string()), provider)
    }

    fn news_item(headline: &str) -> NewsItem {
        NewsItem {
            headline: headline.to_string(),
            published: Utc::now(),
            source: None,
            url: None,
        }
    }

    #[tokio::test]
    async fn collaborator_failure_degrades_to_zero_summary() {
        let orch = orchestrator(Arc::new(FailingProvider));
        let news = vec![news_item("Shares rally on earnings beat")];

        let summary = orch.sentiment_or_zero("AAPL", &news, &[]).await;
        assert_eq!(summary, SentimentSummary::default());
    }

    #[tokio::test]
    async fn headlines_are_capped_at_twenty_five() {
        let provider = Arc::new(CapturingProvider {
            seen: Mutex::new(Vec::new()),
        });
        let orch = orchestrator(provider.clone());

        let news: Vec<NewsItem> = (0..30).map(|i| news_item(&format!("story {}", i))).collect();
        let summary = orch.sentiment_or_zero("AAPL", &news, &[]).await;

        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 25);
        assert_eq!(seen[0], "story 0");
        assert_eq!(summary.positive, 2);
    }

    #[tokio::test]
    async fn caller_texts_back_up_an_empty_news_window() {
        let provider = Arc::new(CapturingProvider {
            seen: Mutex::new(Vec::new()),
        });
        let orch = orchestrator(provider.clone());

        // Blank headlines do not count as usable texts.
        let news = vec![news_item(""), news_item("   ")];
        let texts = vec!["raw caller text".to_string()];
        orch.sentiment_or_zero("AAPL", &news, &texts).await;

        let seen = provider.seen.lock().unwrap();
        assert_eq!(*seen, texts);
    }
}
