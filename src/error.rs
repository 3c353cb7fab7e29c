//! Error taxonomy shared by both pipelines

use thiserror::Error;

/// Rule file and input problems. These always abort the run.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found at {source_desc}: {reason}")]
    NotFound { source_desc: String, reason: String },

    #[error("Invalid configuration in {source_desc}: {reason}")]
    Parse { source_desc: String, reason: String },

    #[error("Invalid input: {reason}")]
    Invalid { reason: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error(
        "Command '{command}' failed with exit code {exit_code} ({description}){}",
        tool_output(.output)
    )]
    Tool {
        command: String,
        exit_code: i32,
        description: String,
        /// What the command printed before failing, trimmed
        output: String,
    },

    #[error("Generated files are out of date: {}", files.join(", "))]
    ContentMismatch { files: Vec<String> },

    #[error("GitHub API error: {0}")]
    Api(#[from] prflows_github::ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn tool_output(output: &str) -> String {
    if output.is_empty() {
        String::new()
    } else {
        format!(":\n{}", output)
    }
}

impl Error {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Error::Configuration(ConfigError::Invalid {
            reason: reason.into(),
        })
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }
}
