use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrendingError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Failed to open {url}: {reason}")]
    Open { url: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for TrendingError {
    fn from(err: reqwest::Error) -> Self {
        TrendingError::Fetch(err.to_string())
    }
}

impl From<serde_json::Error> for TrendingError {
    fn from(err: serde_json::Error) -> Self {
        TrendingError::Fetch(format!("malformed payload: {}", err))
    }
}

impl From<url::ParseError> for TrendingError {
    fn from(err: url::ParseError) -> Self {
        TrendingError::Config(format!("invalid URL: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, TrendingError>;
