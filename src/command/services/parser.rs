//! Command parser service.

use std::sync::Arc;
use tracing::debug;

use super::config::{ParseMode, ParserConfig};
use crate::command::domain::{
    CHANNEL_FIELD, CommandError, CommandParseResult, FieldValue, ParsedCommand, RawInputLine,
};
use crate::command::ports::registry::CommandRegistry;

/// Service that classifies input lines against a registry.
#[derive(Clone)]
pub struct CommandParser<R>
where
    R: CommandRegistry,
{
    registry: Arc<R>,
    config: ParserConfig,
}

impl<R> CommandParser<R>
where
    R: CommandRegistry,
{
    /// Creates a lenient parser with the `/` prefix.
    #[must_use]
    pub const fn new(registry: Arc<R>) -> Self {
        Self::with_config(registry, ParserConfig::lenient())
    }

    /// Creates a parser with explicit configuration.
    #[must_use]
    pub const fn with_config(registry: Arc<R>, config: ParserConfig) -> Self {
        Self { registry, config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns the registry the parser consults.
    #[must_use]
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Parses `line` typed in `channel` using the configured mode.
    #[must_use]
    pub fn parse(&self, line: &str, channel: &str) -> CommandParseResult {
        self.parse_line(RawInputLine::new(line, channel), self.config.mode)
    }

    /// Parses `line`, passing unknown commands through as chat text.
    #[must_use]
    pub fn parse_lenient(&self, line: &str, channel: &str) -> CommandParseResult {
        self.parse_line(RawInputLine::new(line, channel), ParseMode::Lenient)
    }

    /// Parses `line`, reporting unknown commands as errors.
    #[must_use]
    pub fn parse_strict(&self, line: &str, channel: &str) -> CommandParseResult {
        self.parse_line(RawInputLine::new(line, channel), ParseMode::Strict)
    }

    /// Parses one input line.
    ///
    /// A line is a command candidate only when the prefix is its very first
    /// character and is followed by a non-whitespace character. Anything else
    /// is returned verbatim as [`CommandParseResult::PlainText`].
    #[must_use]
    pub fn parse_line(&self, input: RawInputLine<'_>, mode: ParseMode) -> CommandParseResult {
        let Some((name, arguments)) = split_command(input.text, self.config.prefix) else {
            return CommandParseResult::PlainText(input.text.to_owned());
        };

        let command_name = name.to_ascii_lowercase();
        let Some(definition) = self.registry.lookup(&command_name) else {
            return match mode {
                ParseMode::Lenient => {
                    debug!(command = %command_name, "unknown command passed through as chat");
                    CommandParseResult::PlainText(input.text.to_owned())
                }
                ParseMode::Strict => {
                    CommandParseResult::Invalid(CommandError::UnknownCommand(command_name))
                }
            };
        };

        match definition.bind_arguments(arguments) {
            Ok(mut fields) => {
                if definition.requires_channel {
                    fields.insert(
                        CHANNEL_FIELD.to_owned(),
                        FieldValue::Text(input.channel.to_owned()),
                    );
                }
                CommandParseResult::Command(ParsedCommand::new(
                    definition.wire_type.clone(),
                    fields,
                ))
            }
            Err(error) => {
                debug!(command = %definition.name, %error, "command rejected");
                CommandParseResult::Invalid(error)
            }
        }
    }
}

/// Splits `/name rest of line` into `("name", "rest of line")`.
fn split_command(text: &str, prefix: char) -> Option<(&str, &str)> {
    let body = text.strip_prefix(prefix)?;
    if body.is_empty() || body.starts_with(char::is_whitespace) {
        return None;
    }
    Some(body.split_once(char::is_whitespace).unwrap_or((body, "")))
}
