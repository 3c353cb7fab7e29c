//! Localization freshness check
//!
//! Regenerates localization artifacts from the ARB sources and compares the
//! result with what is committed.
//!
//! - [`checker`]: the check itself, driven as a small state machine
//! - [`generator`]: runs the generation command
//! - [`compare`]: detects files the generator changed
//! - [`toolchain`]: optional Flutter version preflight

pub mod checker;
pub mod compare;
pub mod generator;
pub mod toolchain;

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

pub use checker::{CheckState, L10nChecker};
pub use compare::{CompareMode, Comparator, GitStatusComparator, SnapshotComparator};
pub use generator::{Generator, GeneratorOutput, ShellGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum L10nStatus {
    UpToDate,
    Outdated,
}

impl L10nStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            L10nStatus::UpToDate => "up-to-date",
            L10nStatus::Outdated => "outdated",
        }
    }
}

impl fmt::Display for L10nStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for L10nStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up-to-date" => Ok(L10nStatus::UpToDate),
            "outdated" => Ok(L10nStatus::Outdated),
            other => Err(format!("unknown l10n status '{}'", other)),
        }
    }
}

/// Result of a completed check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct L10nReport {
    pub status: L10nStatus,
    /// Files that differ from the committed state, sorted
    pub changed_files: Vec<String>,
}

impl L10nReport {
    pub fn from_changes(mut changed_files: Vec<String>) -> Self {
        changed_files.sort();
        changed_files.dedup();
        let status = if changed_files.is_empty() {
            L10nStatus::UpToDate
        } else {
            L10nStatus::Outdated
        };
        Self {
            status,
            changed_files,
        }
    }

    /// Apply the `fail-on-changes` gate
    pub fn enforce(&self, fail_on_changes: bool) -> crate::Result<()> {
        if fail_on_changes && self.status == L10nStatus::Outdated {
            return Err(Error::ContentMismatch {
                files: self.changed_files.clone(),
            });
        }
        Ok(())
    }
}
