//! Rule file error scenario tests

mod support;

use prflows::ConfigError;
use prflows::config::{ConfigLocation, resolve_rules};
use std::fs;
use std::path::Path;
use support::{FakeFetcher, MOBILE_RULES};
use tempfile::TempDir;

const RULES_PATH: &str = ".github/labeler.yml";

fn write_rules(content: &str) -> (TempDir, ConfigLocation) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    fs::create_dir_all(dir.path().join(".github")).unwrap();
    fs::write(dir.path().join(".github/labeler.yml"), content).unwrap();
    let location = ConfigLocation::from_inputs(dir.path(), "", RULES_PATH, None).unwrap();
    (dir, location)
}

async fn parse_error(content: &str) -> String {
    let (_dir, location) = write_rules(content);
    match resolve_rules(&location, &FakeFetcher::default()).await {
        Err(ConfigError::Parse { reason, .. }) => reason,
        other => panic!("expected a parse error, got {:?}", other.map(|r| r.len())),
    }
}

#[tokio::test]
async fn test_local_file_not_found() {
    let dir = TempDir::new().unwrap();
    let location = ConfigLocation::from_inputs(dir.path(), "", RULES_PATH, None).unwrap();

    let err = resolve_rules(&location, &FakeFetcher::default()).await.unwrap_err();

    assert!(matches!(err, ConfigError::NotFound { .. }));
    assert!(err.to_string().contains("no such file"));
}

#[tokio::test]
async fn test_config_path_is_a_directory() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join(".github/labeler.yml")).unwrap();
    let location = ConfigLocation::from_inputs(dir.path(), "", RULES_PATH, None).unwrap();

    let err = resolve_rules(&location, &FakeFetcher::default()).await.unwrap_err();

    assert!(matches!(err, ConfigError::NotFound { .. }));
}

#[tokio::test]
async fn test_remote_repository_not_found() {
    let location = ConfigLocation::from_inputs(Path::new("."), "acme/missing", RULES_PATH, None);
    let location = location.unwrap();

    let err = resolve_rules(&location, &FakeFetcher::default()).await.unwrap_err();

    assert!(matches!(err, ConfigError::NotFound { .. }));
    assert!(err.to_string().contains("acme/missing:.github/labeler.yml"));
}

#[tokio::test]
async fn test_remote_rules_parse() {
    let location =
        ConfigLocation::from_inputs(Path::new("."), "acme/ci-config", "/labeler.yml", None);
    let location = location.unwrap();
    let fetcher = FakeFetcher::default().with_file("acme/ci-config", "labeler.yml", MOBILE_RULES);

    let rules = resolve_rules(&location, &fetcher).await.unwrap();

    assert_eq!(rules.labels(), vec!["documentation", "platform: android", "platform: ios"]);
}

#[test]
fn test_invalid_config_repo() {
    let err =
        ConfigLocation::from_inputs(Path::new("."), "not a repo", "labeler.yml", None).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));

    let err = ConfigLocation::from_inputs(Path::new("."), "", "  ", None).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
}

#[tokio::test]
async fn test_invalid_yaml() {
    let reason = parse_error("documentation: [unclosed").await;
    assert!(!reason.is_empty());
}

#[tokio::test]
async fn test_top_level_list() {
    let reason = parse_error("- changed-files:\n    - any-glob-to-any-file: '*.md'\n").await;
    assert!(reason.contains("mapping"), "{}", reason);
}

#[tokio::test]
async fn test_label_value_not_a_list() {
    let reason = parse_error("documentation: '**/*.md'\n").await;
    assert!(reason.contains("documentation"), "{}", reason);
}

#[tokio::test]
async fn test_unknown_block_key() {
    let rules = "documentation:\n  - changed-file:\n      - any-glob-to-any-file: '*.md'\n";
    let reason = parse_error(rules).await;
    assert!(reason.contains("unknown key 'changed-file'"), "{}", reason);
}

#[tokio::test]
async fn test_unknown_matcher() {
    let reason =
        parse_error("documentation:\n  - changed-files:\n      - some-glob: '*.md'\n").await;
    assert!(reason.contains("some-glob"), "{}", reason);
}

#[tokio::test]
async fn test_empty_pattern_list() {
    let reason =
        parse_error("documentation:\n  - changed-files:\n      - any-glob-to-any-file: []\n").await;
    assert!(reason.contains("is empty"), "{}", reason);
}

#[tokio::test]
async fn test_invalid_glob() {
    let rules = "documentation:\n  - changed-files:\n      - any-glob-to-any-file: 'docs/[.md'\n";
    let reason = parse_error(rules).await;
    assert!(reason.contains("invalid glob"), "{}", reason);
}

#[tokio::test]
async fn test_invalid_branch_regex() {
    let reason = parse_error("feature:\n  - head-branch: '^feature/(unclosed'\n").await;
    assert!(reason.contains("head-branch"), "{}", reason);
}
