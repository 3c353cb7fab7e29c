//! Command argument validation utilities
//!
//! Checks that run after clap parsing and before any command touches the
//! network or the filesystem.

use crate::Result;
use crate::error::Error;
use std::path::Path;

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Required argument was not provided
    MissingRequired {
        argument: String,
        alternatives: Vec<String>,
    },
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::MissingRequired {
                argument,
                alternatives,
            } => {
                if alternatives.is_empty() {
                    write!(f, "{} is required", argument)
                } else {
                    write!(
                        f,
                        "Either {} or {} must be provided",
                        argument,
                        alternatives.join(" or ")
                    )
                }
            }
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

impl From<CommandValidationError> for Error {
    fn from(error: CommandValidationError) -> Self {
        Error::invalid_input(error.to_string())
    }
}

/// The pull request number must come from `--pr` or the event payload
pub fn validate_pr_number(number: Option<u64>) -> Result<u64> {
    match number {
        Some(0) => Err(CommandValidationError::InvalidValue {
            argument: "--pr".to_string(),
            value: "0".to_string(),
            reason: "pull request numbers start at 1".to_string(),
        }
        .into()),
        Some(number) => Ok(number),
        None => Err(CommandValidationError::MissingRequired {
            argument: "--pr".to_string(),
            alternatives: vec!["a pull_request event payload".to_string()],
        }
        .into()),
    }
}

pub fn validate_token(token: Option<&str>) -> Result<String> {
    match token.map(str::trim).filter(|t| !t.is_empty()) {
        Some(token) => Ok(token.to_string()),
        None => Err(CommandValidationError::MissingRequired {
            argument: "--token".to_string(),
            alternatives: vec!["GITHUB_TOKEN".to_string()],
        }
        .into()),
    }
}

pub fn validate_repository(repository: Option<&str>) -> Result<(String, String)> {
    let repository = repository.map(str::trim).filter(|r| !r.is_empty()).ok_or_else(|| {
        Error::from(CommandValidationError::MissingRequired {
            argument: "--repo".to_string(),
            alternatives: vec!["GITHUB_REPOSITORY".to_string()],
        })
    })?;

    prflows_github::parse_repository(repository).map_err(|e| {
        CommandValidationError::InvalidValue {
            argument: "--repo".to_string(),
            value: repository.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

pub fn validate_generation_command(command: &str) -> Result<()> {
    if command.trim().is_empty() {
        return Err(CommandValidationError::InvalidValue {
            argument: "--l10n-command".to_string(),
            value: command.to_string(),
            reason: "command cannot be empty".to_string(),
        }
        .into());
    }
    Ok(())
}

pub fn validate_working_directory(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(CommandValidationError::InvalidValue {
            argument: "--working-directory".to_string(),
            value: path.display().to_string(),
            reason: "not an existing directory".to_string(),
        }
        .into());
    }
    Ok(())
}
