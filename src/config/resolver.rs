//! Rule file resolution
//!
//! Rules come from the checked-out repository by default. When a config
//! repository is named, the file is fetched from it through the contents API
//! instead, so one rule file can serve many repositories.

use super::rules::RuleSet;
use crate::error::ConfigError;
use async_trait::async_trait;
use prflows_github::{ApiError, GitHubClient, parse_repository};
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Source of remote file contents
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        git_ref: Option<&str>,
    ) -> Result<String, ApiError>;
}

#[async_trait]
impl ContentFetcher for GitHubClient {
    async fn fetch(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        git_ref: Option<&str>,
    ) -> Result<String, ApiError> {
        self.get_file_contents(owner, repo, path, git_ref).await
    }
}

/// Where the rule file lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    Local {
        root: PathBuf,
        path: String,
    },
    Remote {
        owner: String,
        repo: String,
        path: String,
        git_ref: Option<String>,
    },
}

impl ConfigLocation {
    /// Build a location from workflow-style inputs; an empty `config_repo` means local
    pub fn from_inputs(
        checkout: &Path,
        config_repo: &str,
        config_path: &str,
        config_ref: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let path = config_path.trim();
        if path.is_empty() {
            return Err(ConfigError::Invalid {
                reason: "config-path must not be empty".to_string(),
            });
        }

        let config_repo = config_repo.trim();
        if config_repo.is_empty() {
            return Ok(ConfigLocation::Local {
                root: checkout.to_path_buf(),
                path: path.to_string(),
            });
        }

        let (owner, repo) = parse_repository(config_repo).map_err(|e| ConfigError::Invalid {
            reason: e.to_string(),
        })?;

        Ok(ConfigLocation::Remote {
            owner,
            repo,
            path: path.trim_start_matches('/').to_string(),
            git_ref: config_ref
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_string),
        })
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ConfigLocation::Remote { .. })
    }
}

impl fmt::Display for ConfigLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigLocation::Local { root, path } => write!(f, "{}", root.join(path).display()),
            ConfigLocation::Remote {
                owner,
                repo,
                path,
                git_ref,
            } => match git_ref {
                Some(git_ref) => write!(f, "{}/{}:{}@{}", owner, repo, path, git_ref),
                None => write!(f, "{}/{}:{}", owner, repo, path),
            },
        }
    }
}

/// Load and parse the rule file
///
/// Any failure here happens before the pull request is touched.
pub async fn resolve_rules(
    location: &ConfigLocation,
    fetcher: &dyn ContentFetcher,
) -> Result<RuleSet, ConfigError> {
    let source_desc = location.to_string();

    let content = match location {
        ConfigLocation::Local { root, path } => {
            let full_path = root.join(path);
            std::fs::read_to_string(&full_path).map_err(|e| {
                let reason = match e.kind() {
                    ErrorKind::NotFound => "no such file".to_string(),
                    ErrorKind::PermissionDenied => "permission denied".to_string(),
                    _ if full_path.is_dir() => "is a directory".to_string(),
                    _ => e.to_string(),
                };
                ConfigError::NotFound {
                    source_desc: source_desc.clone(),
                    reason,
                }
            })?
        }
        ConfigLocation::Remote {
            owner,
            repo,
            path,
            git_ref,
        } => fetcher
            .fetch(owner, repo, path, git_ref.as_deref())
            .await
            .map_err(|e| {
                let reason = if e.is_not_found() {
                    "repository, path or ref does not exist or is not accessible \
                     with the provided token"
                        .to_string()
                } else {
                    e.to_string()
                };
                ConfigError::NotFound {
                    source_desc: source_desc.clone(),
                    reason,
                }
            })?,
    };

    RuleSet::parse(&content, &source_desc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_repo_is_local() {
        let location =
            ConfigLocation::from_inputs(Path::new("/work"), "", ".github/labeler.yml", None)
                .unwrap();
        assert_eq!(
            location,
            ConfigLocation::Local {
                root: PathBuf::from("/work"),
                path: ".github/labeler.yml".to_string()
            }
        );
        assert!(!location.is_remote());
    }

    #[test]
    fn test_remote_location() {
        let location = ConfigLocation::from_inputs(
            Path::new("."),
            "acme/ci-config",
            "labeler/mobile.yml",
            Some("v2"),
        )
        .unwrap();
        assert_eq!(location.to_string(), "acme/ci-config:labeler/mobile.yml@v2");
        assert!(location.is_remote());
    }

    #[test]
    fn test_blank_ref_is_ignored() {
        let location =
            ConfigLocation::from_inputs(Path::new("."), "acme/ci-config", "labeler.yml", Some(" "))
                .unwrap();
        assert_eq!(location.to_string(), "acme/ci-config:labeler.yml");
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            ConfigLocation::from_inputs(Path::new("."), "", "  ", None),
            Err(ConfigError::Invalid { .. })
        ));
        assert!(matches!(
            ConfigLocation::from_inputs(Path::new("."), "not-a-repo", "labeler.yml", None),
            Err(ConfigError::Invalid { .. })
        ));
    }
}
