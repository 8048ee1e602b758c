//! Error types for slash-command parsing and grammar construction.

use thiserror::Error;

/// Failures reported when a raw input line cannot become a command payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Command is not known by the registry (strict parsing only).
    #[error("command '/{0}' was not found")]
    UnknownCommand(String),

    /// A required argument slot received no token.
    #[error("missing argument '{parameter}' for command '/{command}'")]
    MissingArgument {
        /// Command name.
        command: String,
        /// Name of the unfilled parameter slot.
        parameter: String,
    },

    /// An argument was supplied but is not acceptable for its slot.
    #[error("invalid value '{value}' for argument '{parameter}' in command '/{command}': {reason}")]
    InvalidArgumentValue {
        /// Command name.
        command: String,
        /// Parameter name.
        parameter: String,
        /// Value as typed by the user.
        value: String,
        /// Validation reason.
        reason: String,
    },
}

impl CommandError {
    /// Returns the command name the failure refers to.
    #[must_use]
    pub fn command(&self) -> &str {
        match self {
            Self::UnknownCommand(command)
            | Self::MissingArgument { command, .. }
            | Self::InvalidArgumentValue { command, .. } => command,
        }
    }

    /// Returns `true` when the command itself was not recognised.
    #[must_use]
    pub const fn is_unknown_command(&self) -> bool {
        matches!(self, Self::UnknownCommand(_))
    }
}

/// Errors raised while building command definitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandDefinitionError {
    /// Command name or alias is empty or contains unsupported characters.
    #[error("invalid command name '{0}'")]
    InvalidCommandName(String),

    /// Wire type is not a three-letter uppercase code.
    #[error("invalid wire type '{0}': expected three uppercase letters")]
    InvalidWireType(String),

    /// Parameter slots are inconsistent.
    #[error("invalid parameter definition for '{parameter}' in command '/{command}': {reason}")]
    InvalidParameter {
        /// Command name.
        command: String,
        /// Parameter name.
        parameter: String,
        /// Validation reason.
        reason: String,
    },
}
