//! Label command implementation

use super::{Command, CommandContext};
use crate::Result;
use crate::config::{ConfigLocation, ContentFetcher, resolve_rules};
use crate::labeler::{LabelPlatform, MatchInput, ReconcileOptions, apply_plan, reconcile};
use crate::utils::Logger;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct LabelOptions {
    pub location: ConfigLocation,
    pub pr_number: u64,
    pub reconcile: ReconcileOptions,
}

/// Reconcile the labels of one pull request with the rule file
pub struct LabelCommand {
    pub options: LabelOptions,
    pub platform: Arc<dyn LabelPlatform>,
    pub fetcher: Arc<dyn ContentFetcher>,
}

impl LabelCommand {
    pub fn new(
        options: LabelOptions,
        platform: Arc<dyn LabelPlatform>,
        fetcher: Arc<dyn ContentFetcher>,
    ) -> Self {
        Self {
            options,
            platform,
            fetcher,
        }
    }
}

#[async_trait]
impl Command for LabelCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let logger = Logger::new("label");
        let number = self.options.pr_number;

        logger.info(&format!("Loading rules from {}", self.options.location));
        let rules = match resolve_rules(&self.options.location, self.fetcher.as_ref()).await {
            Ok(rules) => rules,
            Err(e) => {
                logger.error(&e.to_string());
                return Err(e.into());
            }
        };
        logger.info(&format!(
            "Loaded {} rule(s) for: {}",
            rules.len(),
            rules.labels().join(", ")
        ));

        let pr = self.platform.pull_request(number).await?;
        logger.info(&format!(
            "Pull request #{} changes {} file(s) and carries {} label(s)",
            pr.number,
            pr.changed_files.len(),
            pr.applied_labels.len()
        ));

        let input = MatchInput {
            files: &pr.changed_files,
            head_branch: pr.head_branch.as_deref(),
            base_branch: pr.base_branch.as_deref(),
        };
        let plan = reconcile(&rules, &input, &pr.applied_labels, &self.options.reconcile);

        for label in &plan.dropped {
            logger.warn(&format!(
                "Not adding '{}': pull request would exceed {} labels",
                label, self.options.reconcile.max_labels
            ));
        }

        if plan.is_noop() {
            logger.success("Labels already up to date");
        } else {
            for decision in &plan.decisions {
                logger.info(&decision.to_string());
            }
            if context.dry_run {
                logger.warn("Dry run, no labels changed");
            } else {
                apply_plan(self.platform.as_ref(), number, &plan, &logger).await?;
                logger.success(&format!("Labels reconciled for #{}", number));
            }
        }

        let new_labels = plan.adds().join(",");
        let all_labels = plan
            .final_labels
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",");
        logger.info(&format!("new-labels={}", new_labels));
        logger.info(&format!("all-labels={}", all_labels));
        context.outputs.set("new-labels", &new_labels)?;
        context.outputs.set("all-labels", &all_labels)?;

        Ok(())
    }
}
