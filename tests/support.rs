//! Common test support utilities and fixtures
//!
//! In-memory stand-ins for the hosting platform and remote contents, plus a
//! helper for running the CLI.

#![allow(dead_code)]

use async_trait::async_trait;
use prflows::config::ContentFetcher;
use prflows::labeler::{LabelPlatform, PullRequestContext};
use prflows_github::ApiError;
use std::collections::{BTreeSet, HashMap};
use std::process::Command;
use std::sync::Mutex;

/// Result of running a CLI command
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run the prflows CLI with given arguments and a scrubbed GitHub environment
pub fn run_cli(args: &[&str], env: &[(&str, &str)]) -> CliOutput {
    let mut cmd = Command::new("cargo");
    cmd.args(["run", "--quiet", "--"]);
    cmd.args(args);
    for var in [
        "GITHUB_TOKEN",
        "GITHUB_REPOSITORY",
        "GITHUB_EVENT_PATH",
        "GITHUB_OUTPUT",
        "GITHUB_ACTIONS",
        "PRFLOWS_CONFIG_REPO",
        "PRFLOWS_CONFIG_PATH",
    ] {
        cmd.env_remove(var);
    }
    for (key, value) in env {
        cmd.env(key, value);
    }

    let output = cmd.output().expect("Failed to execute cargo run");
    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// In-memory pull request that records every mutation
pub struct FakePlatform {
    pr: Mutex<PullRequestContext>,
    calls: Mutex<Vec<String>>,
    fail_adds: bool,
}

impl FakePlatform {
    pub fn new(files: &[&str], labels: &[&str]) -> Self {
        Self {
            pr: Mutex::new(PullRequestContext {
                number: 7,
                changed_files: files.iter().copied().collect(),
                applied_labels: labels.iter().map(|l| l.to_string()).collect(),
                head_branch: Some("feature/login".to_string()),
                base_branch: Some("main".to_string()),
            }),
            calls: Mutex::new(Vec::new()),
            fail_adds: false,
        }
    }

    pub fn with_branches(self, head: &str, base: &str) -> Self {
        {
            let mut pr = self.pr.lock().unwrap();
            pr.head_branch = Some(head.to_string());
            pr.base_branch = Some(base.to_string());
        }
        self
    }

    pub fn failing_adds(mut self) -> Self {
        self.fail_adds = true;
        self
    }

    pub fn labels(&self) -> BTreeSet<String> {
        self.pr.lock().unwrap().applied_labels.clone()
    }

    /// Mutations and reads in call order, e.g. `add:documentation`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn mutations(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with("add:") || c.starts_with("remove:"))
            .collect()
    }
}

#[async_trait]
impl LabelPlatform for FakePlatform {
    async fn pull_request(&self, _number: u64) -> prflows::Result<PullRequestContext> {
        self.calls.lock().unwrap().push("read".to_string());
        Ok(self.pr.lock().unwrap().clone())
    }

    async fn add_labels(&self, _number: u64, labels: &[String]) -> prflows::Result<()> {
        if self.fail_adds {
            return Err(ApiError::Status {
                status: 403,
                message: "Resource not accessible by integration".to_string(),
            }
            .into());
        }
        let mut pr = self.pr.lock().unwrap();
        for label in labels {
            self.calls.lock().unwrap().push(format!("add:{}", label));
            pr.applied_labels.insert(label.clone());
        }
        Ok(())
    }

    async fn remove_label(&self, _number: u64, label: &str) -> prflows::Result<bool> {
        self.calls.lock().unwrap().push(format!("remove:{}", label));
        Ok(self.pr.lock().unwrap().applied_labels.remove(label))
    }
}

/// Remote contents keyed by `owner/repo:path`
#[derive(Default)]
pub struct FakeFetcher {
    files: HashMap<String, String>,
    pub requests: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn with_file(mut self, repo: &str, path: &str, content: &str) -> Self {
        self.files.insert(format!("{}:{}", repo, path), content.to_string());
        self
    }
}

#[async_trait]
impl ContentFetcher for FakeFetcher {
    async fn fetch(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        git_ref: Option<&str>,
    ) -> Result<String, ApiError> {
        let key = format!("{}/{}:{}", owner, repo, path);
        self.requests
            .lock()
            .unwrap()
            .push(format!("{}@{}", key, git_ref.unwrap_or("")));
        self.files
            .get(&key)
            .cloned()
            .ok_or(ApiError::NotFound { url: key })
    }
}

pub const MOBILE_RULES: &str = r#"
documentation:
  - changed-files:
      - any-glob-to-any-file: '**/*.md'
"platform: android":
  - changed-files:
      - any-glob-to-any-file: 'android/**/*'
"platform: ios":
  - changed-files:
      - any-glob-to-any-file: 'ios/**/*'
"#;
