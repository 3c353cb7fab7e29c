//! Label rule definitions and rule file parsing
//!
//! A rule file maps each label to a list of blocks. A label applies when any
//! of its blocks matches. Blocks are either plain (`changed-files`,
//! `head-branch`, `base-branch` keys, combined with OR) or wrapped in an
//! explicit `any:` / `all:` list.

use crate::error::ConfigError;
use glob::{MatchOptions, Pattern};
use regex::Regex;
use serde_yaml::{Mapping, Value};

const KEY_CHANGED_FILES: &str = "changed-files";
const KEY_HEAD_BRANCH: &str = "head-branch";
const KEY_BASE_BRANCH: &str = "base-branch";
const KEY_ANY: &str = "any";
const KEY_ALL: &str = "all";

/// How the globs of a changed-files entry are applied to the file set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMatchKind {
    /// Some glob matches some file
    AnyGlobToAnyFile,
    /// Every file matches some glob
    AnyGlobToAllFiles,
    /// Some file matches every glob
    AllGlobsToAnyFile,
    /// Every file matches every glob
    AllGlobsToAllFiles,
}

impl FileMatchKind {
    pub fn key(&self) -> &'static str {
        match self {
            FileMatchKind::AnyGlobToAnyFile => "any-glob-to-any-file",
            FileMatchKind::AnyGlobToAllFiles => "any-glob-to-all-files",
            FileMatchKind::AllGlobsToAnyFile => "all-globs-to-any-file",
            FileMatchKind::AllGlobsToAllFiles => "all-globs-to-all-files",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        [
            FileMatchKind::AnyGlobToAnyFile,
            FileMatchKind::AnyGlobToAllFiles,
            FileMatchKind::AllGlobsToAnyFile,
            FileMatchKind::AllGlobsToAllFiles,
        ]
        .into_iter()
        .find(|kind| kind.key() == key)
    }
}

/// One configured glob
///
/// `{a,b}` alternation is expanded into separate patterns. A leading `!`
/// negates the glob, so `!docs/**` matches every path outside `docs/`.
#[derive(Debug, Clone)]
pub struct RuleGlob {
    alternatives: Vec<Pattern>,
    negated: bool,
}

impl RuleGlob {
    pub fn matches_with(&self, path: &str, options: MatchOptions) -> bool {
        let matched = self
            .alternatives
            .iter()
            .any(|pattern| pattern.matches_with(path, options));
        matched != self.negated
    }
}

#[derive(Debug, Clone)]
pub struct FileMatcher {
    pub kind: FileMatchKind,
    pub globs: Vec<RuleGlob>,
}

#[derive(Debug, Clone)]
pub enum Condition {
    ChangedFiles(FileMatcher),
    HeadBranch(Vec<Regex>),
    BaseBranch(Vec<Regex>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMode {
    Any,
    All,
}

#[derive(Debug, Clone)]
pub struct MatchBlock {
    pub mode: BlockMode,
    pub conditions: Vec<Condition>,
}

/// A label and the blocks that decide whether it applies
#[derive(Debug, Clone)]
pub struct LabelRule {
    pub label: String,
    pub blocks: Vec<MatchBlock>,
}

impl LabelRule {
    /// Build the common rule shape: one `any-glob-to-any-file` matcher over `patterns`
    pub fn new<S: AsRef<str>>(label: &str, patterns: &[S]) -> Result<Self, ConfigError> {
        let globs = patterns
            .iter()
            .map(|p| compile_glob(p.as_ref(), label))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|reason| ConfigError::Parse {
                source_desc: format!("rule '{}'", label),
                reason,
            })?;

        Ok(Self {
            label: label.to_string(),
            blocks: vec![MatchBlock {
                mode: BlockMode::Any,
                conditions: vec![Condition::ChangedFiles(FileMatcher {
                    kind: FileMatchKind::AnyGlobToAnyFile,
                    globs,
                })],
            }],
        })
    }
}

/// Every rule from one rule file, in file order
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    pub rules: Vec<LabelRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<LabelRule>) -> Self {
        Self { rules }
    }

    /// Parse a rule file. `source_desc` names the file in error messages.
    pub fn parse(content: &str, source_desc: &str) -> Result<Self, ConfigError> {
        let parse_err = |reason: String| ConfigError::Parse {
            source_desc: source_desc.to_string(),
            reason,
        };

        let document: Value =
            serde_yaml::from_str(content).map_err(|e| parse_err(e.to_string()))?;

        let mapping = match document {
            Value::Mapping(mapping) => mapping,
            Value::Null => {
                return Err(parse_err(
                    "expected a mapping of label names to rule lists, found an empty document"
                        .to_string(),
                ));
            }
            other => {
                return Err(parse_err(format!(
                    "expected a mapping of label names to rule lists, found {}",
                    describe(&other)
                )));
            }
        };

        let mut rules = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let label = scalar_string(&key).ok_or_else(|| {
                parse_err(format!("label names must be strings, found {}", describe(&key)))
            })?;
            let blocks = parse_label_blocks(&label, value).map_err(parse_err)?;
            rules.push(LabelRule { label, blocks });
        }

        Ok(Self { rules })
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Labels named by any rule, in file order and without duplicates
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for rule in &self.rules {
            if !labels.contains(&rule.label.as_str()) {
                labels.push(&rule.label);
            }
        }
        labels
    }

    /// Whether some rule owns `label`
    pub fn configures(&self, label: &str) -> bool {
        self.rules.iter().any(|rule| rule.label == label)
    }
}

fn parse_label_blocks(label: &str, value: Value) -> Result<Vec<MatchBlock>, String> {
    let entries = match value {
        Value::Sequence(entries) => entries,
        other => {
            return Err(format!(
                "label '{}' must map to a list of rule blocks, found {}",
                label,
                describe(&other)
            ));
        }
    };

    if entries.is_empty() {
        return Err(format!("label '{}' has no rule blocks", label));
    }

    let mut blocks = Vec::new();
    for entry in entries {
        let entry = match entry {
            Value::Mapping(entry) => entry,
            other => {
                return Err(format!(
                    "rule blocks of label '{}' must be mappings, found {}",
                    label,
                    describe(&other)
                ));
            }
        };
        if entry.is_empty() {
            return Err(format!("label '{}' has an empty rule block", label));
        }

        let mut plain = Mapping::new();
        for (key, value) in entry {
            match key.as_str() {
                Some(KEY_ANY) => blocks.push(parse_grouped(label, BlockMode::Any, value)?),
                Some(KEY_ALL) => blocks.push(parse_grouped(label, BlockMode::All, value)?),
                _ => {
                    plain.insert(key, value);
                }
            }
        }

        if !plain.is_empty() {
            blocks.push(MatchBlock {
                mode: BlockMode::Any,
                conditions: parse_conditions(label, plain)?,
            });
        }
    }

    Ok(blocks)
}

fn parse_grouped(label: &str, mode: BlockMode, value: Value) -> Result<MatchBlock, String> {
    let key = if mode == BlockMode::Any { KEY_ANY } else { KEY_ALL };
    let items = match value {
        Value::Sequence(items) => items,
        other => {
            return Err(format!(
                "'{}' under label '{}' must be a list, found {}",
                key,
                label,
                describe(&other)
            ));
        }
    };

    let mut conditions = Vec::new();
    for item in items {
        let item = match item {
            Value::Mapping(item) => item,
            other => {
                return Err(format!(
                    "entries of '{}' under label '{}' must be mappings, found {}",
                    key,
                    label,
                    describe(&other)
                ));
            }
        };
        conditions.extend(parse_conditions(label, item)?);
    }

    if conditions.is_empty() {
        return Err(format!("'{}' under label '{}' is empty", key, label));
    }

    Ok(MatchBlock { mode, conditions })
}

fn parse_conditions(label: &str, mapping: Mapping) -> Result<Vec<Condition>, String> {
    let mut conditions = Vec::new();

    for (key, value) in mapping {
        match key.as_str() {
            Some(KEY_CHANGED_FILES) => {
                let matchers = match value {
                    Value::Sequence(matchers) => matchers,
                    other => {
                        return Err(format!(
                            "'{}' under label '{}' must be a list, found {}",
                            KEY_CHANGED_FILES,
                            label,
                            describe(&other)
                        ));
                    }
                };
                if matchers.is_empty() {
                    return Err(format!(
                        "'{}' under label '{}' is empty",
                        KEY_CHANGED_FILES, label
                    ));
                }
                for matcher in matchers {
                    for file_matcher in parse_file_matchers(label, matcher)? {
                        conditions.push(Condition::ChangedFiles(file_matcher));
                    }
                }
            }
            Some(KEY_HEAD_BRANCH) => {
                conditions.push(Condition::HeadBranch(parse_regexes(
                    label,
                    KEY_HEAD_BRANCH,
                    value,
                )?));
            }
            Some(KEY_BASE_BRANCH) => {
                conditions.push(Condition::BaseBranch(parse_regexes(
                    label,
                    KEY_BASE_BRANCH,
                    value,
                )?));
            }
            Some(other) => {
                return Err(format!(
                    "unknown key '{}' under label '{}' (expected {}, {}, {}, {} or {})",
                    other,
                    label,
                    KEY_CHANGED_FILES,
                    KEY_HEAD_BRANCH,
                    KEY_BASE_BRANCH,
                    KEY_ANY,
                    KEY_ALL
                ));
            }
            None => {
                return Err(format!(
                    "rule keys under label '{}' must be strings, found {}",
                    label,
                    describe(&key)
                ));
            }
        }
    }

    Ok(conditions)
}

fn parse_file_matchers(label: &str, value: Value) -> Result<Vec<FileMatcher>, String> {
    let mapping = match value {
        Value::Mapping(mapping) => mapping,
        other => {
            return Err(format!(
                "'{}' entries under label '{}' must be mappings such as \
                 'any-glob-to-any-file: <glob>', found {}",
                KEY_CHANGED_FILES,
                label,
                describe(&other)
            ));
        }
    };

    let mut matchers = Vec::new();
    for (key, value) in mapping {
        let kind = key
            .as_str()
            .and_then(FileMatchKind::from_key)
            .ok_or_else(|| {
                format!(
                    "unknown '{}' matcher {} under label '{}'",
                    KEY_CHANGED_FILES,
                    scalar_string(&key).unwrap_or_else(|| describe(&key).to_string()),
                    label
                )
            })?;

        let globs = string_list(value)
            .ok_or_else(|| {
                format!(
                    "'{}' under label '{}' must be a glob or a list of globs",
                    kind.key(),
                    label
                )
            })?
            .iter()
            .map(|g| compile_glob(g, label))
            .collect::<Result<Vec<_>, _>>()?;

        if globs.is_empty() {
            return Err(format!("'{}' under label '{}' is empty", kind.key(), label));
        }

        matchers.push(FileMatcher { kind, globs });
    }

    Ok(matchers)
}

fn parse_regexes(label: &str, key: &str, value: Value) -> Result<Vec<Regex>, String> {
    let patterns = string_list(value).ok_or_else(|| {
        format!(
            "'{}' under label '{}' must be a pattern or a list of patterns",
            key, label
        )
    })?;
    if patterns.is_empty() {
        return Err(format!("'{}' under label '{}' is empty", key, label));
    }

    patterns
        .iter()
        .map(|p| {
            Regex::new(p).map_err(|e| {
                format!(
                    "invalid '{}' pattern '{}' under label '{}': {}",
                    key, p, label, e
                )
            })
        })
        .collect()
}

fn compile_glob(pattern: &str, label: &str) -> Result<RuleGlob, String> {
    let body = pattern.trim_start_matches('!');
    let negated = (pattern.len() - body.len()) % 2 == 1;
    if body.is_empty() {
        return Err(format!("empty glob '{}' under label '{}'", pattern, label));
    }

    let alternatives = expand_braces(body)
        .iter()
        .map(|expanded| {
            Pattern::new(expanded).map_err(|e| {
                format!("invalid glob '{}' under label '{}': {}", pattern, label, e)
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RuleGlob {
        alternatives,
        negated,
    })
}

/// Expand `{a,b}` groups into one pattern per alternative
///
/// Groups nest. A group without a top-level comma is kept as literal text.
fn expand_braces(pattern: &str) -> Vec<String> {
    let Some((open, close)) = find_brace_group(pattern) else {
        return vec![pattern.to_string()];
    };

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];
    split_alternatives(&pattern[open + 1..close])
        .into_iter()
        .flat_map(|alternative| expand_braces(&format!("{}{}{}", prefix, alternative, suffix)))
        .collect()
}

/// Byte offsets of the first balanced `{...}` holding a top-level comma
fn find_brace_group(pattern: &str) -> Option<(usize, usize)> {
    let bytes = pattern.as_bytes();

    for (open, _) in pattern.match_indices('{') {
        let mut depth = 0usize;
        let mut has_comma = false;
        for (offset, byte) in bytes[open..].iter().enumerate() {
            match byte {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        if has_comma {
                            return Some((open, open + offset));
                        }
                        break;
                    }
                }
                b',' if depth == 1 => has_comma = true,
                _ => {}
            }
        }
    }

    None
}

fn split_alternatives(group: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (index, byte) in group.bytes().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                parts.push(&group[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&group[start..]);
    parts
}

/// A single string or a list of strings
fn string_list(value: Value) -> Option<Vec<String>> {
    match value {
        Value::Sequence(items) => items.iter().map(scalar_string).collect(),
        other => scalar_string(&other).map(|s| vec![s]),
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
