//! Validated identifiers used by the command grammar.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::CommandDefinitionError;

/// Length of every F-Chat wire code.
const WIRE_TYPE_LENGTH: usize = 3;

/// Validated, lowercase command identifier without the leading prefix.
///
/// Accepted characters are `[a-z0-9_-]`; input is trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommandName(String);

impl CommandName {
    /// Creates a validated command name.
    ///
    /// # Errors
    ///
    /// Returns [`CommandDefinitionError::InvalidCommandName`] when the value is
    /// empty after trimming or contains characters outside `[a-z0-9_-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, CommandDefinitionError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();

        let is_valid = !normalized.is_empty()
            && normalized
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_'));

        if !is_valid {
            return Err(CommandDefinitionError::InvalidCommandName(raw));
        }

        Ok(Self(normalized))
    }

    /// Wraps a name from the built-in grammar table.
    pub(crate) fn from_static(value: &'static str) -> Self {
        debug_assert!(
            Self::new(value).is_ok_and(|name| name.as_str() == value),
            "built-in command names must already be normalized",
        );
        Self(value.to_owned())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CommandName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CommandName {
    type Error = CommandDefinitionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CommandName> for String {
    fn from(value: CommandName) -> Self {
        value.0
    }
}

/// Three-letter code identifying a command to the chat server (`STA`, `CKU`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WireType(String);

impl WireType {
    /// Creates a validated wire type.
    ///
    /// # Errors
    ///
    /// Returns [`CommandDefinitionError::InvalidWireType`] unless the value is
    /// exactly three ASCII uppercase letters.
    pub fn new(value: impl Into<String>) -> Result<Self, CommandDefinitionError> {
        let raw = value.into();
        let is_valid =
            raw.len() == WIRE_TYPE_LENGTH && raw.chars().all(|c| c.is_ascii_uppercase());

        if !is_valid {
            return Err(CommandDefinitionError::InvalidWireType(raw));
        }

        Ok(Self(raw))
    }

    /// Wraps a code from the built-in grammar table.
    pub(crate) fn from_static(value: &'static str) -> Self {
        debug_assert!(
            Self::new(value).is_ok(),
            "built-in wire types must be three uppercase letters",
        );
        Self(value.to_owned())
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for WireType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for WireType {
    type Error = CommandDefinitionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WireType> for String {
    fn from(value: WireType) -> Self {
        value.0
    }
}
