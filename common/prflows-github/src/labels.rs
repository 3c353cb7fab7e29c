//! Issue label operations
//!
//! Pull requests share the issue label endpoints, so the number passed here
//! is the pull request number.

use crate::client::GitHubClient;
use crate::error::{ApiError, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub name: String,
}

#[derive(Serialize)]
struct AddLabelsPayload<'a> {
    labels: &'a [String],
}

impl GitHubClient {
    /// Add labels to an issue or pull request
    ///
    /// Labels that are already present are accepted by GitHub without error.
    /// Returns the full label set after the call.
    pub async fn add_labels(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        labels: &[String],
    ) -> Result<Vec<Label>> {
        self.require_token("adding labels")?;
        if labels.is_empty() {
            return Ok(Vec::new());
        }

        let number = number.to_string();
        let url = self.endpoint(["repos", owner, repo, "issues", number.as_str(), "labels"])?;
        let response = self
            .request(Method::POST, url)
            .json(&AddLabelsPayload { labels })
            .send()
            .await?;
        let response = self.check(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("labels of #{}: {}", number, e)))
    }

    /// Remove a single label
    ///
    /// Returns `false` when the label was not present, which callers treat as success.
    pub async fn remove_label(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        label: &str,
    ) -> Result<bool> {
        self.require_token("removing labels")?;

        let url = self.endpoint([
            "repos",
            owner,
            repo,
            "issues",
            number.to_string().as_str(),
            "labels",
            label,
        ])?;
        let response = self.request(Method::DELETE, url).send().await?;

        match self.check(response).await {
            Ok(_) => Ok(true),
            Err(ApiError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
