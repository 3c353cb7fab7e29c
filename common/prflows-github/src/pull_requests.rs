//! Pull request operations

use crate::client::GitHubClient;
use crate::error::{ApiError, Result};
use crate::labels::Label;
use reqwest::Method;
use serde::Deserialize;

/// Files are listed 100 at a time; GitHub stops at 3000 files per pull request
const FILES_PER_PAGE: usize = 100;
const MAX_FILE_PAGES: usize = 30;

#[derive(Deserialize, Debug, Clone)]
pub struct BranchRef {
    #[serde(rename = "ref")]
    pub ref_name: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PullRequest {
    pub number: u64,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub labels: Vec<Label>,
    pub head: BranchRef,
    pub base: BranchRef,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PullRequestFile {
    pub filename: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub previous_filename: Option<String>,
}

impl GitHubClient {
    /// Get a pull request by number
    pub async fn get_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequest> {
        let url = self.endpoint(["repos", owner, repo, "pulls", number.to_string().as_str()])?;
        let response = self.request(Method::GET, url).send().await?;
        let response = self.check(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("pull request #{}: {}", number, e)))
    }

    /// List every file changed by a pull request, following pagination
    pub async fn list_pull_request_files(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<PullRequestFile>> {
        let mut files = Vec::new();

        let number = number.to_string();
        for page in 1..=MAX_FILE_PAGES {
            let mut url = self.endpoint(["repos", owner, repo, "pulls", number.as_str(), "files"])?;
            url.query_pairs_mut()
                .append_pair("per_page", &FILES_PER_PAGE.to_string())
                .append_pair("page", &page.to_string());

            let response = self.request(Method::GET, url).send().await?;
            let response = self.check(response).await?;
            let batch: Vec<PullRequestFile> = response.json().await.map_err(|e| {
                ApiError::Decode(format!("files of pull request #{}: {}", number, e))
            })?;

            let last_page = batch.len() < FILES_PER_PAGE;
            files.extend(batch);
            if last_page {
                break;
            }
        }

        Ok(files)
    }
}
