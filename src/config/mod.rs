//! Label rule configuration
//!
//! - [`rules`]: the rule model and rule file parsing
//! - [`resolver`]: locating the rule file, locally or in another repository

pub mod resolver;
pub mod rules;

pub use resolver::{ConfigLocation, ContentFetcher, resolve_rules};
pub use rules::{LabelRule, RuleSet};
