//! Localization freshness checker
//!
//! `Idle -> Generating -> Comparing -> Finished(UpToDate | Outdated)`.
//! A generator failure leaves the checker in `Failed`, which is distinct from
//! an outdated result.

use super::compare::Comparator;
use super::generator::Generator;
use super::{L10nReport, L10nStatus};
use crate::utils::Logger;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Idle,
    Generating,
    Comparing,
    Finished(L10nStatus),
    Failed,
}

pub struct L10nChecker<G, C> {
    generator: G,
    comparator: C,
    working_dir: PathBuf,
    state: CheckState,
    logger: Logger,
}

impl<G: Generator, C: Comparator> L10nChecker<G, C> {
    pub fn new(generator: G, comparator: C, working_dir: impl AsRef<Path>) -> Self {
        Self {
            generator,
            comparator,
            working_dir: working_dir.as_ref().to_path_buf(),
            state: CheckState::Idle,
            logger: Logger::new("l10n"),
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn state(&self) -> CheckState {
        self.state
    }

    /// Run generation and comparison
    ///
    /// Returns the report for both outcomes; gating is left to
    /// [`L10nReport::enforce`] so the status can be published first.
    pub fn run(&mut self) -> crate::Result<L10nReport> {
        self.state = CheckState::Idle;

        if let Err(e) = self.comparator.prepare(&self.working_dir) {
            self.state = CheckState::Failed;
            return Err(e);
        }

        self.state = CheckState::Generating;
        self.logger.info(&format!(
            "Running '{}' in {}",
            self.generator.describe(),
            self.working_dir.display()
        ));
        match self.generator.generate(&self.working_dir) {
            Ok(output) => {
                for line in output.stdout.lines().filter(|l| !l.trim().is_empty()) {
                    self.logger.info(line);
                }
                for line in output.stderr.lines().filter(|l| !l.trim().is_empty()) {
                    self.logger.warn(line);
                }
            }
            Err(e) => {
                self.state = CheckState::Failed;
                self.logger.error(&e.to_string());
                return Err(e);
            }
        }

        self.state = CheckState::Comparing;
        let changed = match self.comparator.changed_files(&self.working_dir) {
            Ok(changed) => changed,
            Err(e) => {
                self.state = CheckState::Failed;
                return Err(e);
            }
        };

        let report = L10nReport::from_changes(changed);
        self.state = CheckState::Finished(report.status);
        Ok(report)
    }
}
