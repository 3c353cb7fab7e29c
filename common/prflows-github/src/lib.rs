//! GitHub API client library
//!
//! This library provides the slice of the GitHub REST API that the pull
//! request pipelines need: reading a pull request and its changed files,
//! mutating issue labels and fetching raw repository contents.
//!
//! ## Modules
//!
//! - [`client`]: Core GitHub client implementation
//! - [`contents`]: Raw file retrieval through the contents API
//! - [`error`]: Error type shared by every API call
//! - [`labels`]: Issue label mutation
//! - [`pull_requests`]: Pull request details and changed files
//! - [`util`]: Utility functions for GitHub operations

mod client;
mod contents;
mod error;
mod labels;
mod pull_requests;
mod util;

// Re-export public API
pub use client::{DEFAULT_API_BASE, GitHubClient};
pub use error::{ApiError, Result};
pub use labels::Label;
pub use pull_requests::{BranchRef, PullRequest, PullRequestFile};
pub use util::parse_repository;
