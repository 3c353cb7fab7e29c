//! prflows - pull request pipelines for CI runners
//!
//! Two independent pipelines live here: a rule-driven pull request labeler
//! and a Flutter localization freshness check.

pub mod actions;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod git;
pub mod l10n;
pub mod labeler;
pub mod utils;

pub type Result<T> = std::result::Result<T, Error>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::{LabelRule, RuleSet};
pub use error::{ConfigError, Error};
pub use l10n::L10nStatus;
pub use labeler::{ChangedFileSet, LabelAction, LabelDecision};
