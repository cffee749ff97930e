use thiserror::Error;

#[derive(Error, Debug)]
pub enum FavoriteError {
    #[error("GitHub API error: unexpected status {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("Rate limit exhausted")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, FavoriteError>;
