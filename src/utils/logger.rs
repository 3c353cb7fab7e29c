//! Console logging with consistent formatting
//!
//! Every line is prefixed with the pipeline name in cyan/bold. On a GitHub
//! Actions runner, warnings and errors are additionally emitted as workflow
//! commands so they show up as annotations on the run.

use crate::constants::github::ENV_ACTIONS;
use colored::*;

/// Logger for pipeline steps
///
/// ## Example
///
/// ```rust,no_run
/// use prflows::utils::Logger;
///
/// let logger = Logger::new("label");
/// logger.info("Resolving rules");
/// logger.success("Labels up to date");
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    scope: String,
    annotate: bool,
}

impl Logger {
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            annotate: std::env::var(ENV_ACTIONS).is_ok_and(|v| v == "true"),
        }
    }

    /// Force workflow-command annotations on or off
    pub fn with_annotations(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }

    pub fn info(&self, msg: &str) {
        println!("{} | {}", self.scope.cyan().bold(), msg);
    }

    pub fn success(&self, msg: &str) {
        println!("{} | {}", self.scope.cyan().bold(), msg.green());
    }

    pub fn warn(&self, msg: &str) {
        println!("{} | {}", self.scope.cyan().bold(), msg.yellow());
        if self.annotate {
            println!("::warning title={}::{}", self.scope, escape_annotation(msg));
        }
    }

    pub fn error(&self, msg: &str) {
        eprintln!("{} | {}", self.scope.cyan().bold(), msg.red());
        if self.annotate {
            println!("::error title={}::{}", self.scope, escape_annotation(msg));
        }
    }
}

/// Workflow commands end at the first newline, so multi-line text is escaped
fn escape_annotation(msg: &str) -> String {
    msg.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
