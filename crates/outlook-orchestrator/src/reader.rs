use finnhub_client::{FinnhubClient, RecommendationTrend};
use outlook_core::{CandleSeries, NewsItem, OutlookError, Quote};
use tokio::time::Duration;

use crate::cache::{TtlCache, DEFAULT_MAX_ENTRIES};

/// Quotes move intraday; candles and the news window do not.
const QUOTE_TTL: Duration = Duration::from_secs(15);
const CANDLES_TTL: Duration = Duration::from_secs(600);
const NEWS_TTL: Duration = Duration::from_secs(600);

const CANDLE_RESOLUTION: &str = "D";
const NEWS_CAP: usize = 30;

/// Cached reads over the market-data provider.
///
/// Each read has its own validity window; a miss delegates to the
/// provider and fails the whole read on any non-success response.
pub struct MarketDataReader {
    client: FinnhubClient,
    quotes: TtlCache<Quote>,
    candles: TtlCache<CandleSeries>,
    news: TtlCache<Vec<NewsItem>>,
}

impl MarketDataReader {
    pub fn new(client: FinnhubClient) -> Self {
        Self {
            client,
            quotes: TtlCache::new(DEFAULT_MAX_ENTRIES),
            candles: TtlCache::new(DEFAULT_MAX_ENTRIES),
            news: TtlCache::new(DEFAULT_MAX_ENTRIES),
        }
    }

    pub async fn quote(&self, symbol: &str) -> Result<Quote, OutlookError> {
        let key = format!("q:{}", symbol);
        if let Some(quote) = self.quotes.get(&key) {
            return Ok(quote);
        }

        let quote = self.client.get_quote(symbol).await?;
        self.quotes.insert(key, quote.clone(), QUOTE_TTL);
        Ok(quote)
    }

    pub async fn candles(&self, symbol: &str) -> Result<CandleSeries, OutlookError> {
        let key = format!("c:{}:{}", symbol, CANDLE_RESOLUTION);
        if let Some(series) = self.candles.get(&key) {
            return Ok(series);
        }

        let series = self.client.get_candles(symbol, CANDLE_RESOLUTION).await?;
        self.candles.insert(key, series.clone(), CANDLES_TTL);
        Ok(series)
    }

    /// Recent news in provider order, capped at 30 items.
    pub async fn news(&self, symbol: &str) -> Result<Vec<NewsItem>, OutlookError> {
        let key = format!("n:{}", symbol);
        if let Some(items) = self.news.get(&key) {
            return Ok(items);
        }

        let mut items = self.client.get_news(symbol).await?;
        items.truncate(NEWS_CAP);
        self.news.insert(key, items.clone(), NEWS_TTL);
        Ok(items)
    }

    /// Uncached pass-through; trends move on an analyst cadence, not
    /// intraday.
    pub async fn recommendation_trends(
        &self,
        symbol: &str,
    ) -> Result<Vec<RecommendationTrend>, OutlookError> {
        self.client.get_recommendation_trends(symbol).await
    }

    /// Drop every cached read.
    pub fn reset(&self) {
        self.quotes.clear();
        self.candles.clear();
        self.news.clear();
    }
}
