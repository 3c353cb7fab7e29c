//! Flutter toolchain preflight
//!
//! Installing Flutter is the runner's job. This only checks that the
//! toolchain on `PATH` is the one the workflow asked for, so a mismatch
//! shows up in the log before its generated output is blamed.

use serde::Deserialize;
use std::process::Command;

/// Subset of `flutter --version --machine`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FlutterVersion {
    pub framework_version: String,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub dart_sdk_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolchainCheck {
    Matches(FlutterVersion),
    Mismatch {
        found: FlutterVersion,
        expected_version: Option<String>,
        expected_channel: Option<String>,
    },
    Unavailable(String),
}

pub fn parse_machine_version(json: &str) -> Result<FlutterVersion, serde_json::Error> {
    serde_json::from_str(json)
}

/// Whether `found` satisfies `expected`
///
/// `expected` may be shorter than `found` and may use `x` or `*` as a
/// wildcard component: `3.24`, `3.24.x` and `3.x` all accept `3.24.5`.
pub fn version_matches(expected: &str, found: &str) -> bool {
    let expected: Vec<&str> = expected.trim().split('.').collect();
    let found: Vec<&str> = found.trim().split('.').collect();

    if expected.len() > found.len() {
        return false;
    }

    expected
        .iter()
        .zip(found.iter())
        .all(|(e, f)| *e == "x" || *e == "*" || e == f)
}

pub fn evaluate(
    found: FlutterVersion,
    expected_version: Option<&str>,
    expected_channel: Option<&str>,
) -> ToolchainCheck {
    let version_ok = expected_version
        .map(|v| version_matches(v, &found.framework_version))
        .unwrap_or(true);
    let channel_ok = expected_channel
        .map(|c| found.channel.is_empty() || c.eq_ignore_ascii_case(&found.channel))
        .unwrap_or(true);

    if version_ok && channel_ok {
        ToolchainCheck::Matches(found)
    } else {
        ToolchainCheck::Mismatch {
            found,
            expected_version: expected_version.map(str::to_string),
            expected_channel: expected_channel.map(str::to_string),
        }
    }
}

/// Ask the installed `flutter` for its version and compare
pub fn check_toolchain(
    expected_version: Option<&str>,
    expected_channel: Option<&str>,
) -> ToolchainCheck {
    let output = match Command::new("flutter").args(["--version", "--machine"]).output() {
        Ok(output) => output,
        Err(e) => return ToolchainCheck::Unavailable(format!("failed to run flutter: {}", e)),
    };

    if !output.status.success() {
        return ToolchainCheck::Unavailable(format!(
            "flutter --version exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }

    // flutter may print upgrade banners before the JSON document
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json = stdout.find('{').map(|start| &stdout[start..]).unwrap_or(stdout.as_ref());

    match parse_machine_version(json) {
        Ok(found) => evaluate(found, expected_version, expected_channel),
        Err(e) => ToolchainCheck::Unavailable(format!("unreadable flutter version output: {}", e)),
    }
}
