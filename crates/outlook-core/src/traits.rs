use crate::{OutlookError, SentimentSummary};
use async_trait::async_trait;

/// Seam for the external sentiment collaborator.
///
/// Implementations carry their own timeout budget; callers decide whether
/// a failure is fatal.
#[async_trait]
pub trait SentimentProvider: Send + Sync {
    async fn classify(&self, texts: &[String]) -> Result<SentimentSummary, OutlookError>;
}
