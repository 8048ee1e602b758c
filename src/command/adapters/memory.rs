//! In-memory command registry adapter.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use super::builtin::builtin_commands;
use crate::command::domain::CommandDefinition;
use crate::command::ports::registry::{
    CommandRegistry, CommandRegistryError, CommandRegistryResult,
};

/// Immutable registry holding command definitions in memory.
#[derive(Debug, Clone)]
pub struct InMemoryCommandRegistry {
    definitions: Vec<Arc<CommandDefinition>>,
    by_name: HashMap<String, Arc<CommandDefinition>>,
}

impl InMemoryCommandRegistry {
    /// Creates a registry with the built-in F-Chat commands.
    #[must_use]
    pub fn new() -> Self {
        let definitions: Vec<_> = builtin_commands()
            .into_iter()
            .map(|definition| {
                debug_assert!(
                    definition.validate_schema().is_ok(),
                    "built-in command definitions must remain valid",
                );
                Arc::new(definition)
            })
            .collect();

        let mut by_name = HashMap::new();
        for definition in &definitions {
            for name in definition.names() {
                let previous = by_name.insert(name.to_string(), Arc::clone(definition));
                debug_assert!(previous.is_none(), "built-in command names must be unique");
            }
        }

        Self::sorted(definitions, by_name)
    }

    /// Creates a registry from supplied definitions.
    ///
    /// # Errors
    ///
    /// Returns [`CommandRegistryError::InvalidDefinition`] when a definition
    /// fails schema validation, or [`CommandRegistryError::DuplicateName`]
    /// when two definitions share a name or alias.
    pub fn with_commands(
        definitions: impl IntoIterator<Item = CommandDefinition>,
    ) -> CommandRegistryResult<Self> {
        let mut registered = Vec::new();
        let mut by_name = HashMap::new();

        for definition in definitions {
            definition.validate_schema()?;
            let shared = Arc::new(definition);
            for name in shared.names() {
                if by_name
                    .insert(name.to_string(), Arc::clone(&shared))
                    .is_some()
                {
                    return Err(CommandRegistryError::DuplicateName(name.to_string()));
                }
            }
            registered.push(shared);
        }

        Ok(Self::sorted(registered, by_name))
    }

    /// Creates a registry from a JSON array of definitions.
    ///
    /// # Errors
    ///
    /// Returns [`CommandRegistryError::Malformed`] when the JSON does not
    /// decode, and the errors of [`Self::with_commands`] otherwise.
    pub fn from_json(json: &str) -> CommandRegistryResult<Self> {
        let definitions: Vec<CommandDefinition> = serde_json::from_str(json)
            .map_err(|error| CommandRegistryError::Malformed(error.to_string()))?;
        Self::with_commands(definitions)
    }

    fn sorted(
        mut definitions: Vec<Arc<CommandDefinition>>,
        by_name: HashMap<String, Arc<CommandDefinition>>,
    ) -> Self {
        definitions.sort_by(|left, right| left.name.cmp(&right.name));
        debug!(
            commands = definitions.len(),
            names = by_name.len(),
            "command registry built"
        );
        Self {
            definitions,
            by_name,
        }
    }
}

impl Default for InMemoryCommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry for InMemoryCommandRegistry {
    fn lookup(&self, name: &str) -> Option<Arc<CommandDefinition>> {
        self.by_name.get(&name.to_ascii_lowercase()).cloned()
    }

    fn definitions(&self) -> Vec<Arc<CommandDefinition>> {
        self.definitions.clone()
    }
}
