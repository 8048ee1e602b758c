//! Command registry port.
//!
//! The registry port provides command definitions to the parser.

use std::sync::Arc;
use thiserror::Error;

use crate::command::domain::{CommandDefinition, CommandDefinitionError};

/// Result type for registry construction.
pub type CommandRegistryResult<T> = Result<T, CommandRegistryError>;

/// Port for looking up command definitions.
///
/// Implementations must be immutable once built so lookups can run from any
/// thread without coordination.
pub trait CommandRegistry: Send + Sync {
    /// Finds a definition by name or alias, ignoring ASCII case.
    fn lookup(&self, name: &str) -> Option<Arc<CommandDefinition>>;

    /// Lists every definition once, sorted by name.
    fn definitions(&self) -> Vec<Arc<CommandDefinition>>;
}

/// Errors raised while building a registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandRegistryError {
    /// A definition failed schema validation.
    #[error("invalid command definition: {0}")]
    InvalidDefinition(#[from] CommandDefinitionError),

    /// Two definitions claim the same name or alias.
    #[error("duplicate command name '{0}'")]
    DuplicateName(String),

    /// A serialised grammar could not be decoded.
    #[error("malformed command grammar: {0}")]
    Malformed(String),
}
