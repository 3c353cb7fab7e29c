//! Command implementations
//!
//! - [`LabelCommand`]: reconcile pull request labels with the rule file
//! - [`L10nCommand`]: check that generated localization files are current

pub mod base;
pub mod l10n;
pub mod label;
pub mod validators;

pub use base::{Command, CommandContext};
pub use l10n::{L10nCommand, L10nOptions};
pub use label::{LabelCommand, LabelOptions};
