//! Base types and traits for the command pattern

use crate::Result;
use crate::actions::OutputWriter;

/// Context passed to all commands
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    /// Destination for step outputs
    pub outputs: OutputWriter,
    /// Compute and report without mutating anything remote
    pub dry_run: bool,
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
