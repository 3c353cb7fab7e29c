//! Hosting platform seam
//!
//! The labeler only needs three things from the platform: the pull request
//! state, a way to add labels and a way to remove one. Keeping that behind a
//! trait lets the reconciliation flow run against an in-memory fake.

use super::ChangedFileSet;
use crate::Result;
use async_trait::async_trait;
use prflows_github::GitHubClient;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Pull request state the labeler works from
#[derive(Debug, Clone, Default)]
pub struct PullRequestContext {
    pub number: u64,
    pub changed_files: ChangedFileSet,
    pub applied_labels: BTreeSet<String>,
    pub head_branch: Option<String>,
    pub base_branch: Option<String>,
}

#[async_trait]
pub trait LabelPlatform: Send + Sync {
    async fn pull_request(&self, number: u64) -> Result<PullRequestContext>;

    /// Adding a label that is already present must succeed
    async fn add_labels(&self, number: u64, labels: &[String]) -> Result<()>;

    /// Returns `false` when the label was not present
    async fn remove_label(&self, number: u64, label: &str) -> Result<bool>;
}

/// [`LabelPlatform`] backed by the GitHub REST API
pub struct GitHubPlatform {
    client: Arc<GitHubClient>,
    owner: String,
    repo: String,
}

impl GitHubPlatform {
    pub fn new(
        client: Arc<GitHubClient>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        Self {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn repository(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

#[async_trait]
impl LabelPlatform for GitHubPlatform {
    async fn pull_request(&self, number: u64) -> Result<PullRequestContext> {
        let pr = self
            .client
            .get_pull_request(&self.owner, &self.repo, number)
            .await?;
        let files = self
            .client
            .list_pull_request_files(&self.owner, &self.repo, number)
            .await?;

        Ok(PullRequestContext {
            number: pr.number,
            changed_files: files.into_iter().map(|f| f.filename).collect(),
            applied_labels: pr.labels.into_iter().map(|l| l.name).collect(),
            head_branch: Some(pr.head.ref_name),
            base_branch: Some(pr.base.ref_name),
        })
    }

    async fn add_labels(&self, number: u64, labels: &[String]) -> Result<()> {
        self.client
            .add_labels(&self.owner, &self.repo, number, labels)
            .await?;
        Ok(())
    }

    async fn remove_label(&self, number: u64, label: &str) -> Result<bool> {
        Ok(self
            .client
            .remove_label(&self.owner, &self.repo, number, label)
            .await?)
    }
}
