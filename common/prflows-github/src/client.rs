//! GitHub client implementation

use crate::error::{ApiError, Result};
use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};

/// Public GitHub REST endpoint
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("prflows/", env!("CARGO_PKG_VERSION"));
const API_VERSION: &str = "2022-11-28";

/// GitHub API client for making authenticated requests
pub struct GitHubClient {
    pub(crate) client: reqwest::Client,
    pub(crate) token: Option<String>,
    pub(crate) api_base: String,
}

impl GitHubClient {
    /// Create a new GitHub client with an optional token
    /// If no token is provided, will try to read from GITHUB_TOKEN environment variable
    pub fn new(token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.or_else(|| std::env::var("GITHUB_TOKEN").ok()),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Point the client at another API root (GitHub Enterprise, or a mock server in tests)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Build an endpoint URL from path segments, percent-encoding each one
    pub(crate) fn endpoint<I, S>(&self, segments: I) -> Result<Url>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut url =
            Url::parse(&self.api_base).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.api_base.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut request = self
            .client
            .request(method, url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION);

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }

        request
    }

    pub(crate) fn require_token(&self, operation: &'static str) -> Result<()> {
        if self.token.is_none() {
            return Err(ApiError::MissingToken { operation });
        }
        Ok(())
    }

    /// Turn a non-success response into an [`ApiError`]
    pub(crate) async fn check(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound { url });
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN if self.token.is_none() => {
                format!(
                    "Access forbidden. This may be a private repository. \
                     Set GITHUB_TOKEN environment variable. {}",
                    error_text
                )
            }
            StatusCode::FORBIDDEN => format!(
                "Access forbidden. Check your GITHUB_TOKEN permissions or repository access. {}",
                error_text
            ),
            _ => error_text,
        };

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new(None)
    }
}
