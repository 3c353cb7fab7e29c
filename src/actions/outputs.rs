//! Step outputs
//!
//! On a runner, outputs are appended to the file named by `GITHUB_OUTPUT`.
//! Elsewhere they are only logged by the caller.

use crate::constants::github::ENV_OUTPUT;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

const MULTILINE_DELIMITER: &str = "PRFLOWS_EOF";

#[derive(Debug, Clone, Default)]
pub struct OutputWriter {
    path: Option<PathBuf>,
}

impl OutputWriter {
    pub fn from_env() -> Self {
        Self {
            path: std::env::var_os(ENV_OUTPUT)
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn to_file(path: impl AsRef<Path>) -> Self {
        Self {
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    pub fn disabled() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Append `key=value`; values spanning lines use the delimiter form
    pub fn set(&self, key: &str, value: &str) -> std::io::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        if value.contains('\n') {
            writeln!(file, "{}<<{}", key, MULTILINE_DELIMITER)?;
            writeln!(file, "{}", value)?;
            writeln!(file, "{}", MULTILINE_DELIMITER)?;
        } else {
            writeln!(file, "{}={}", key, value)?;
        }
        Ok(())
    }
}
