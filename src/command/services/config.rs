//! Parser configuration.

use serde::{Deserialize, Serialize};

/// How lines naming an unregistered command are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Unknown commands are passed through as chat text.
    #[default]
    Lenient,
    /// Unknown commands are reported as [`crate::command::domain::CommandError::UnknownCommand`].
    Strict,
}

/// Configuration for [`super::CommandParser`].
///
/// # Examples
///
/// ```
/// use fchat_input::command::services::{ParseMode, ParserConfig};
///
/// let config = ParserConfig::default();
/// assert_eq!(config.prefix, '/');
/// assert_eq!(config.mode, ParseMode::Lenient);
///
/// let strict = ParserConfig::strict();
/// assert_eq!(strict.mode, ParseMode::Strict);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Character that introduces a command.
    pub prefix: char,
    /// Mode used by [`super::CommandParser::parse`].
    pub mode: ParseMode,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::lenient()
    }
}

impl ParserConfig {
    /// Unknown commands fall back to chat text.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            prefix: '/',
            mode: ParseMode::Lenient,
        }
    }

    /// Unknown commands are errors.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            prefix: '/',
            mode: ParseMode::Strict,
        }
    }

    /// Replaces the command prefix.
    #[must_use]
    pub const fn with_prefix(mut self, prefix: char) -> Self {
        self.prefix = prefix;
        self
    }
}
