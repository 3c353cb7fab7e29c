//! Utility functions for GitHub operations

use crate::error::{ApiError, Result};

/// Parse a repository reference into owner and repository name
///
/// Supports various formats:
/// - Slug: `owner/repo`
/// - SSH: `git@github.com:owner/repo.git`
/// - HTTPS: `https://github.com/owner/repo.git`
/// - Legacy: `github.com/owner/repo`
///
/// # Errors
/// Returns [`ApiError::InvalidRepository`] if the format is not recognized
pub fn parse_repository(input: &str) -> Result<(String, String)> {
    let url = input.trim().trim_end_matches('/').trim_end_matches(".git");
    let invalid = || ApiError::InvalidRepository {
        input: input.to_string(),
    };

    // Handle SSH URLs: git@github.com:owner/repo or git@github-enterprise:owner/repo
    if url.starts_with("git@") {
        let (_, after_colon) = url.split_once(':').ok_or_else(invalid)?;
        return split_pair(after_colon).ok_or_else(invalid);
    }

    // Handle HTTPS URLs: https://github.com/owner/repo or https://github-enterprise/owner/repo
    if url.starts_with("https://") || url.starts_with("http://") {
        let without_protocol = url
            .trim_start_matches("https://")
            .trim_start_matches("http://");
        let parts: Vec<&str> = without_protocol.split('/').collect();
        if parts.len() >= 3 && !parts[1].is_empty() && !parts[2].is_empty() {
            return Ok((parts[1].to_string(), parts[2].to_string()));
        }
        return Err(invalid());
    }

    // Legacy support: github.com/owner/repo
    if let Some(rest) = url.strip_prefix("github.com/") {
        return split_pair(rest).ok_or_else(invalid);
    }

    split_pair(url).ok_or_else(invalid)
}

fn split_pair(value: &str) -> Option<(String, String)> {
    let (owner, repo) = value.split_once('/')?;
    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return None;
    }
    Some((owner.to_string(), repo.to_string()))
}
