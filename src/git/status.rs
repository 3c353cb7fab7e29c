//! Working tree status

use crate::error::Error;
use crate::utils::describe_status;
use std::path::Path;
use std::process::{Command, Output};

fn run_git(dir: &Path, args: &[&str]) -> crate::Result<Output> {
    let output = Command::new("git").args(args).current_dir(dir).output()?;

    if !output.status.success() {
        let (exit_code, description) = describe_status(&output.status);
        return Err(Error::Tool {
            command: format!("git {}", args.join(" ")),
            exit_code,
            description: description.to_string(),
            output: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(output)
}

/// Paths under `dir` that are modified, added, deleted or untracked
///
/// Uses NUL-separated porcelain output so unusual file names survive intact.
/// Renames report the new path.
pub fn changed_paths(dir: &Path) -> crate::Result<Vec<String>> {
    let output = run_git(
        dir,
        &["status", "--porcelain=v1", "-z", "--untracked-files=all", "--", "."],
    )?;

    Ok(parse_porcelain_z(&String::from_utf8_lossy(&output.stdout)))
}

/// Check if the working tree under `dir` differs from the committed state
pub fn has_changes(dir: &Path) -> crate::Result<bool> {
    Ok(!changed_paths(dir)?.is_empty())
}

/// `git diff --stat` for tracked files under `dir`
pub fn diff_stat(dir: &Path) -> crate::Result<String> {
    let output = run_git(dir, &["diff", "--stat", "--", "."])?;
    Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
}

fn parse_porcelain_z(raw: &str) -> Vec<String> {
    let mut paths = Vec::new();
    let mut entries = raw.split('\0').filter(|e| !e.is_empty());

    while let Some(entry) = entries.next() {
        if entry.len() < 4 {
            continue;
        }
        let (code, path) = entry.split_at(3);
        paths.push(path.to_string());

        // Renames and copies are followed by the original path
        if code.starts_with('R') || code.starts_with('C') {
            entries.next();
        }
    }

    paths
}
