//! Pull request labeler
//!
//! - [`matcher`]: evaluates label rules against a pull request
//! - [`reconciler`]: turns matches and the applied labels into decisions
//! - [`platform`]: the hosting platform seam and its GitHub implementation
//! - [`apply`]: sends decisions to the platform

pub mod apply;
pub mod matcher;
pub mod platform;
pub mod reconciler;

use std::collections::BTreeSet;
use std::fmt;

pub use apply::apply_plan;
pub use matcher::{MatchInput, Matcher};
pub use platform::{GitHubPlatform, LabelPlatform, PullRequestContext};
pub use reconciler::{LabelPlan, ReconcileOptions, reconcile};

/// Paths changed by a pull request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangedFileSet {
    paths: BTreeSet<String>,
}

impl ChangedFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>) -> bool {
        self.paths.insert(path.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ChangedFileSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LabelAction {
    Add,
    Remove,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelDecision {
    pub label: String,
    pub action: LabelAction,
}

impl LabelDecision {
    pub fn add(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: LabelAction::Add,
        }
    }

    pub fn remove(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: LabelAction::Remove,
        }
    }
}

impl fmt::Display for LabelDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            LabelAction::Add => write!(f, "+ {}", self.label),
            LabelAction::Remove => write!(f, "- {}", self.label),
        }
    }
}
