//! Triggering event payload
//!
//! Both `pull_request` and `pull_request_target` events carry the pull
//! request number at the top level and inside `pull_request`.

use crate::constants::github::ENV_EVENT_PATH;
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPullRequest {
    pub number: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub pull_request: Option<EventPullRequest>,
}

impl EventPayload {
    pub fn pull_request_number(&self) -> Option<u64> {
        self.pull_request.as_ref().map(|pr| pr.number).or(self.number)
    }
}

pub fn load_event(path: &Path) -> Result<EventPayload, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::NotFound {
        source_desc: path.display().to_string(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
        source_desc: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Pull request number of the event named by `GITHUB_EVENT_PATH`
///
/// `Ok(None)` when no event file is set or the event has no pull request.
/// An unreadable or malformed event file is an error.
pub fn event_pull_request_number() -> Result<Option<u64>, ConfigError> {
    let Some(path) = std::env::var_os(ENV_EVENT_PATH).filter(|p| !p.is_empty()) else {
        return Ok(None);
    };
    Ok(load_event(Path::new(&path))?.pull_request_number())
}
