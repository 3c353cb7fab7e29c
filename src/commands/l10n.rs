//! L10n command implementation

use super::{Command, CommandContext};
use crate::Result;
use crate::git;
use crate::l10n::toolchain::{ToolchainCheck, check_toolchain};
use crate::l10n::{CompareMode, L10nChecker, L10nStatus, ShellGenerator};
use crate::utils::Logger;
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct L10nOptions {
    pub working_dir: PathBuf,
    pub command: String,
    pub compare: CompareMode,
    pub fail_on_changes: bool,
    pub flutter_version: Option<String>,
    pub flutter_channel: Option<String>,
}

/// Regenerate localization files and fail when the committed ones are stale
pub struct L10nCommand {
    pub options: L10nOptions,
}

impl L10nCommand {
    pub fn new(options: L10nOptions) -> Self {
        Self { options }
    }

    fn preflight(&self, logger: &Logger) {
        let Some(version) = self.options.flutter_version.as_deref() else {
            return;
        };

        match check_toolchain(Some(version), self.options.flutter_channel.as_deref()) {
            ToolchainCheck::Matches(found) => logger.info(&format!(
                "Flutter {} ({})",
                found.framework_version, found.channel
            )),
            ToolchainCheck::Mismatch {
                found,
                expected_version,
                expected_channel,
            } => logger.warn(&format!(
                "Flutter {} ({}) does not match requested {} ({})",
                found.framework_version,
                found.channel,
                expected_version.as_deref().unwrap_or("any"),
                expected_channel.as_deref().unwrap_or("any")
            )),
            ToolchainCheck::Unavailable(reason) => {
                logger.warn(&format!("Could not verify Flutter toolchain: {}", reason))
            }
        }
    }
}

#[async_trait]
impl Command for L10nCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let logger = Logger::new("l10n");
        self.preflight(&logger);

        let mut checker = L10nChecker::new(
            ShellGenerator::new(&self.options.command),
            self.options.compare.comparator(),
            &self.options.working_dir,
        )
        .with_logger(logger.clone());
        let report = checker.run()?;

        match report.status {
            L10nStatus::UpToDate => logger.success("Localization files are up to date"),
            L10nStatus::Outdated => {
                logger.warn(&format!(
                    "{} generated file(s) differ from the committed state",
                    report.changed_files.len()
                ));
                for file in &report.changed_files {
                    logger.info(&format!("  {}", file));
                }
                if self.options.compare == CompareMode::Git {
                    if let Ok(stat) = git::diff_stat(&self.options.working_dir) {
                        for line in stat.lines() {
                            logger.info(line);
                        }
                    }
                }
            }
        }

        logger.info(&format!("l10n-status={}", report.status));
        context.outputs.set("l10n-status", report.status.as_str())?;
        context
            .outputs
            .set("changed-files", &report.changed_files.join(","))?;

        if let Err(e) = report.enforce(self.options.fail_on_changes) {
            logger.error("Run the generator locally and commit the result");
            return Err(e);
        }
        if report.status == L10nStatus::Outdated {
            logger.warn("Continuing because fail-on-changes is disabled");
        }

        Ok(())
    }
}
