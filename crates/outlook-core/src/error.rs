use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutlookError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Market data error: {0}")]
    Upstream(String),

    #[error("Sentiment service error: {0}")]
    Collaborator(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
