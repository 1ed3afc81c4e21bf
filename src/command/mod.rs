mod commands;
mod context;

use thiserror::Error;

use crate::error::StudioError;

pub use commands::Command;
pub use context::CommandContext;

/// Result type for command operations
pub type CommandResult = Result<(), CommandError>;

/// Errors that can occur during command execution
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command cannot be executed in the current state
    #[error("nothing to {0}")]
    InvalidState(&'static str),
    /// The command parameters are invalid
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
    /// The command failed during execution
    #[error(transparent)]
    ExecutionFailed(#[from] StudioError),
}
