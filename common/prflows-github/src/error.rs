//! Errors returned by GitHub API calls

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("GitHub resource not found: {url}")]
    NotFound { url: String },

    #[error("GitHub API error ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("GitHub token is required for {operation}. Set GITHUB_TOKEN environment variable.")]
    MissingToken { operation: &'static str },

    #[error("Invalid repository '{input}', expected 'owner/repo' or a GitHub URL")]
    InvalidRepository { input: String },

    #[error("Invalid GitHub API URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode GitHub response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the error means the requested resource does not exist (or is hidden)
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}
