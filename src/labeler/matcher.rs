//! Rule evaluation
//!
//! Glob semantics come from the `glob` crate: `*` stays inside one path
//! segment, `**` spans segments, and dotfiles match unless `dot` is off.
//! Brace alternation and `!` negation are resolved when rules are parsed.

use super::ChangedFileSet;
use crate::config::rules::{
    BlockMode, Condition, FileMatchKind, FileMatcher, LabelRule, MatchBlock, RuleGlob,
};
use glob::MatchOptions;
use regex::Regex;

/// What a rule is evaluated against
#[derive(Debug, Clone, Copy)]
pub struct MatchInput<'a> {
    pub files: &'a ChangedFileSet,
    pub head_branch: Option<&'a str>,
    pub base_branch: Option<&'a str>,
}

impl<'a> MatchInput<'a> {
    pub fn files(files: &'a ChangedFileSet) -> Self {
        Self {
            files,
            head_branch: None,
            base_branch: None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    options: MatchOptions,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Matcher {
    pub fn new(dot: bool) -> Self {
        Self {
            options: MatchOptions {
                case_sensitive: true,
                require_literal_separator: true,
                require_literal_leading_dot: !dot,
            },
        }
    }

    /// A rule matches when any of its blocks matches
    pub fn rule_matches(&self, rule: &LabelRule, input: &MatchInput<'_>) -> bool {
        rule.blocks.iter().any(|block| self.block_matches(block, input))
    }

    fn block_matches(&self, block: &MatchBlock, input: &MatchInput<'_>) -> bool {
        let mut conditions = block.conditions.iter();
        match block.mode {
            BlockMode::Any => conditions.any(|c| self.condition_matches(c, input)),
            BlockMode::All => {
                !block.conditions.is_empty() && conditions.all(|c| self.condition_matches(c, input))
            }
        }
    }

    fn condition_matches(&self, condition: &Condition, input: &MatchInput<'_>) -> bool {
        match condition {
            Condition::ChangedFiles(matcher) => self.files_match(matcher, input.files),
            Condition::HeadBranch(patterns) => branch_matches(patterns, input.head_branch),
            Condition::BaseBranch(patterns) => branch_matches(patterns, input.base_branch),
        }
    }

    fn files_match(&self, matcher: &FileMatcher, files: &ChangedFileSet) -> bool {
        let globs = &matcher.globs;
        match matcher.kind {
            FileMatchKind::AnyGlobToAnyFile => {
                files.iter().any(|f| globs.iter().any(|g| self.glob(g, f)))
            }
            FileMatchKind::AnyGlobToAllFiles => {
                !files.is_empty() && files.iter().all(|f| globs.iter().any(|g| self.glob(g, f)))
            }
            FileMatchKind::AllGlobsToAnyFile => {
                files.iter().any(|f| globs.iter().all(|g| self.glob(g, f)))
            }
            FileMatchKind::AllGlobsToAllFiles => {
                !files.is_empty() && files.iter().all(|f| globs.iter().all(|g| self.glob(g, f)))
            }
        }
    }

    fn glob(&self, glob: &RuleGlob, path: &str) -> bool {
        glob.matches_with(path, self.options)
    }
}

fn branch_matches(patterns: &[Regex], branch: Option<&str>) -> bool {
    match branch {
        Some(branch) => patterns.iter().any(|re| re.is_match(branch)),
        None => false,
    }
}
