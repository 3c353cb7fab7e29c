//! Localization freshness check against real directories and commands

use prflows::actions::OutputWriter;
use prflows::commands::{Command, CommandContext, L10nCommand, L10nOptions};
use prflows::l10n::{
    CheckState, CompareMode, GitStatusComparator, L10nChecker, L10nStatus, ShellGenerator,
    SnapshotComparator,
};
use prflows::{Error, git};
use std::fs;
use std::path::Path;
use std::process::Command as Process;
use tempfile::TempDir;

const GENERATED: &str = "lib/l10n/app_localizations.dart";

/// A Flutter-like project with one committed generated file
fn project(generated: &str) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp directory");
    fs::create_dir_all(dir.path().join("lib/l10n")).unwrap();
    fs::write(dir.path().join("lib/l10n/app_en.arb"), r#"{"hello": "Hello"}"#).unwrap();
    fs::write(dir.path().join(GENERATED), generated).unwrap();
    dir
}

/// Generator command that writes `content` to the generated file
fn generate(content: &str) -> String {
    format!("printf '%s' '{}' > {}", content, GENERATED)
}

fn options(dir: &Path, command: String, fail_on_changes: bool) -> L10nOptions {
    L10nOptions {
        working_dir: dir.to_path_buf(),
        command,
        compare: CompareMode::Snapshot,
        fail_on_changes,
        flutter_version: None,
        flutter_channel: None,
    }
}

async fn run_command(dir: &Path, options: L10nOptions) -> (prflows::Result<()>, String) {
    let output_file = dir.join("github_output");
    let context = CommandContext {
        outputs: OutputWriter::to_file(&output_file),
        dry_run: false,
    };
    let result = L10nCommand::new(options).execute(&context).await;
    let outputs = fs::read_to_string(&output_file).unwrap_or_default();
    (result, outputs)
}

fn run_git(dir: &Path, args: &[&str]) {
    let status = Process::new("git")
        .args(["-c", "user.name=prflows", "-c", "user.email=prflows@example.com"])
        .args(args)
        .current_dir(dir)
        .status()
        .expect("Failed to run git");
    assert!(status.success(), "git {:?} failed", args);
}

#[test]
fn test_equal_bytes_are_up_to_date() {
    let dir = project("class AppLocalizations {}");
    let mut checker = L10nChecker::new(
        ShellGenerator::new(generate("class AppLocalizations {}")),
        SnapshotComparator::default(),
        dir.path(),
    );

    let report = checker.run().unwrap();

    assert_eq!(report.status, L10nStatus::UpToDate);
    assert!(report.changed_files.is_empty());
    assert_eq!(checker.state(), CheckState::Finished(L10nStatus::UpToDate));
    assert!(report.enforce(true).is_ok());
    assert!(report.enforce(false).is_ok());
}

#[test]
fn test_generator_exit_127_is_tool_error() {
    let dir = project("");
    let mut checker = L10nChecker::new(
        ShellGenerator::new("prflows-no-such-generator gen-l10n"),
        SnapshotComparator::default(),
        dir.path(),
    );

    let err = checker.run().unwrap_err();

    match err {
        Error::Tool {
            exit_code,
            description,
            ..
        } => {
            assert_eq!(exit_code, 127);
            assert_eq!(description, "command not found");
        }
        other => panic!("expected a tool error, got {}", other),
    }
    assert_eq!(checker.state(), CheckState::Failed);
}

#[tokio::test]
async fn test_up_to_date_command_writes_status() {
    let dir = project("same");
    let (result, outputs) =
        run_command(dir.path(), options(dir.path(), generate("same"), true)).await;

    assert!(result.is_ok());
    assert_eq!(outputs, "l10n-status=up-to-date\nchanged-files=\n");
}

#[tokio::test]
async fn test_outdated_with_gating_fails_after_writing_status() {
    let dir = project("old");
    let (result, outputs) =
        run_command(dir.path(), options(dir.path(), generate("new"), true)).await;

    match result {
        Err(Error::ContentMismatch { files }) => assert_eq!(files, vec![GENERATED]),
        other => panic!("expected a content mismatch, got {:?}", other.err()),
    }
    assert_eq!(
        outputs,
        format!("l10n-status=outdated\nchanged-files={}\n", GENERATED)
    );
}

#[tokio::test]
async fn test_outdated_without_gating_succeeds() {
    let dir = project("old");
    let (result, outputs) =
        run_command(dir.path(), options(dir.path(), generate("new"), false)).await;

    assert!(result.is_ok());
    assert!(outputs.starts_with("l10n-status=outdated\n"));
}

#[tokio::test]
async fn test_generator_failure_writes_no_status() {
    let dir = project("old");
    let (result, outputs) =
        run_command(dir.path(), options(dir.path(), "exit 3".to_string(), false)).await;

    assert!(matches!(result, Err(Error::Tool { exit_code: 3, .. })));
    assert!(outputs.is_empty());
}

#[tokio::test]
async fn test_generator_diagnostics_reach_the_error() {
    let dir = project("old");
    let command = "echo 'app_en.arb: unexpected token at line 3' >&2; exit 1".to_string();
    let (result, _) = run_command(dir.path(), options(dir.path(), command, true)).await;

    let err = result.unwrap_err();
    assert!(matches!(err, Error::Tool { exit_code: 1, .. }));
    assert!(err.to_string().contains("app_en.arb: unexpected token at line 3"));
}

#[test]
fn test_git_comparator_reports_modified_and_new_files() {
    let dir = project("old");
    run_git(dir.path(), &["init", "--quiet"]);
    run_git(dir.path(), &["add", "."]);
    run_git(dir.path(), &["commit", "--quiet", "-m", "initial"]);
    assert!(!git::has_changes(dir.path()).unwrap());

    let command = format!(
        "{} && printf 'de' > lib/l10n/app_localizations_de.dart",
        generate("new")
    );
    let mut checker = L10nChecker::new(
        ShellGenerator::new(command),
        GitStatusComparator,
        dir.path(),
    );

    let report = checker.run().unwrap();

    assert_eq!(report.status, L10nStatus::Outdated);
    assert_eq!(
        report.changed_files,
        vec![GENERATED, "lib/l10n/app_localizations_de.dart"]
    );
    assert!(git::diff_stat(dir.path()).unwrap().contains(GENERATED));
}

#[test]
fn test_git_comparator_outside_repository_fails() {
    let dir = project("old");
    let mut checker =
        L10nChecker::new(ShellGenerator::new("true"), GitStatusComparator, dir.path());

    assert!(checker.run().is_err());
    assert_eq!(checker.state(), CheckState::Failed);
}
