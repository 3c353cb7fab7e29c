//! Generation command execution

use crate::error::Error;
use crate::utils::describe_status;
use std::path::Path;
use std::process::Command;

/// Output captured from a successful generation run
#[derive(Debug, Clone, Default)]
pub struct GeneratorOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Something that regenerates artifacts inside a working directory
pub trait Generator {
    /// A non-zero exit is reported as [`Error::Tool`]
    fn generate(&self, working_dir: &Path) -> crate::Result<GeneratorOutput>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

/// Runs a command line through `sh -c`
#[derive(Debug, Clone)]
pub struct ShellGenerator {
    command: String,
}

impl ShellGenerator {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Generator for ShellGenerator {
    fn generate(&self, working_dir: &Path) -> crate::Result<GeneratorOutput> {
        let output = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .current_dir(working_dir)
            .output()?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            let (exit_code, description) = describe_status(&output.status);
            // flutter prints some diagnostics to stdout only
            let printed = match stderr.trim() {
                "" => stdout.trim(),
                stderr => stderr,
            };
            return Err(Error::Tool {
                command: self.command.clone(),
                exit_code,
                description: description.to_string(),
                output: printed.to_string(),
            });
        }

        Ok(GeneratorOutput { stdout, stderr })
    }

    fn describe(&self) -> String {
        self.command.clone()
    }
}
