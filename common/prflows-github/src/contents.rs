//! Raw repository contents

use crate::client::GitHubClient;
use crate::error::{ApiError, Result};
use reqwest::Method;

impl GitHubClient {
    /// Fetch a file's raw text from a repository, optionally at a given ref
    ///
    /// A missing repository, path or ref (or one the token cannot see) is
    /// reported as [`ApiError::NotFound`].
    pub async fn get_file_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        git_ref: Option<&str>,
    ) -> Result<String> {
        let segments = ["repos", owner, repo, "contents"]
            .into_iter()
            .chain(path.split('/').filter(|s| !s.is_empty()));
        let mut url = self.endpoint(segments)?;
        if let Some(git_ref) = git_ref.filter(|r| !r.is_empty()) {
            url.query_pairs_mut().append_pair("ref", git_ref);
        }

        let response = self
            .request(Method::GET, url)
            .header("Accept", "application/vnd.github.raw")
            .send()
            .await?;
        let response = self.check(response).await?;

        response
            .text()
            .await
            .map_err(|e| ApiError::Decode(format!("{}/{}:{}: {}", owner, repo, path, e)))
    }
}
