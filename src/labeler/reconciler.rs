//! Label reconciliation
//!
//! Decides which labels to add and remove so that, after application, the
//! configured labels on the pull request are exactly the ones whose rules
//! match. Labels no rule names are left alone. With sync disabled nothing is
//! ever removed.

use super::matcher::{MatchInput, Matcher};
use super::{LabelAction, LabelDecision};
use crate::config::RuleSet;
use crate::constants::labeler::MAX_LABELS_PER_ISSUE;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy)]
pub struct ReconcileOptions {
    /// Remove configured labels whose rules no longer match
    pub sync: bool,
    /// Let globs match dotfiles
    pub dot: bool,
    /// Upper bound on labels carried by one pull request
    pub max_labels: usize,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            sync: true,
            dot: true,
            max_labels: MAX_LABELS_PER_ISSUE,
        }
    }
}

/// Outcome of reconciliation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelPlan {
    /// Removals first, then additions
    pub decisions: Vec<LabelDecision>,
    /// Every label whose rule matched, in rule order
    pub matched: Vec<String>,
    /// Additions skipped because the label limit was reached
    pub dropped: Vec<String>,
    /// Labels on the pull request once the decisions are applied
    pub final_labels: BTreeSet<String>,
}

impl LabelPlan {
    pub fn adds(&self) -> Vec<&str> {
        self.with_action(LabelAction::Add)
    }

    pub fn removes(&self) -> Vec<&str> {
        self.with_action(LabelAction::Remove)
    }

    pub fn is_noop(&self) -> bool {
        self.decisions.is_empty()
    }

    fn with_action(&self, action: LabelAction) -> Vec<&str> {
        self.decisions
            .iter()
            .filter(|d| d.action == action)
            .map(|d| d.label.as_str())
            .collect()
    }
}

/// Labels whose rules match, deduplicated, in rule order
pub fn matching_labels(rules: &RuleSet, input: &MatchInput<'_>, dot: bool) -> Vec<String> {
    let matcher = Matcher::new(dot);
    let mut matched: Vec<String> = Vec::new();

    for rule in &rules.rules {
        if matched.contains(&rule.label) {
            continue;
        }
        if matcher.rule_matches(rule, input) {
            matched.push(rule.label.clone());
        }
    }

    matched
}

/// Compute the minimal decisions that bring `applied` in line with `rules`
pub fn reconcile(
    rules: &RuleSet,
    input: &MatchInput<'_>,
    applied: &BTreeSet<String>,
    options: &ReconcileOptions,
) -> LabelPlan {
    let matched = matching_labels(rules, input, options.dot);
    let mut decisions = Vec::new();
    let mut final_labels = applied.clone();

    if options.sync {
        for label in applied {
            if rules.configures(label) && !matched.contains(label) {
                decisions.push(LabelDecision::remove(label.as_str()));
                final_labels.remove(label);
            }
        }
    }

    let mut dropped = Vec::new();
    for label in &matched {
        if final_labels.contains(label) {
            continue;
        }
        if final_labels.len() >= options.max_labels {
            dropped.push(label.clone());
            continue;
        }
        decisions.push(LabelDecision::add(label.clone()));
        final_labels.insert(label.clone());
    }

    LabelPlan {
        decisions,
        matched,
        dropped,
        final_labels,
    }
}
