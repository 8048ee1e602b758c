//! Turns typed lines into outgoing messages.

use crate::command::domain::{CommandError, CommandParseResult};
use crate::command::ports::registry::CommandRegistry;
use crate::command::services::CommandParser;
use crate::markup::auto_link_urls;

use super::outgoing::OutgoingMessage;

/// Composes the command parser with URL auto-linking.
#[derive(Clone)]
pub struct InputProcessor<R>
where
    R: CommandRegistry,
{
    parser: CommandParser<R>,
    auto_link: bool,
}

impl<R> InputProcessor<R>
where
    R: CommandRegistry,
{
    /// Creates a processor that auto-links chat text.
    #[must_use]
    pub const fn new(parser: CommandParser<R>) -> Self {
        Self {
            parser,
            auto_link: true,
        }
    }

    /// Sends chat text without wrapping bare URLs.
    #[must_use]
    pub const fn without_auto_link(mut self) -> Self {
        self.auto_link = false;
        self
    }

    /// Returns the underlying parser.
    #[must_use]
    pub const fn parser(&self) -> &CommandParser<R> {
        &self.parser
    }

    /// Processes one line typed in `channel`.
    ///
    /// Blank lines produce nothing. Commands become
    /// [`OutgoingMessage::Command`]; everything else, including unknown
    /// commands in lenient mode, becomes [`OutgoingMessage::Chat`].
    ///
    /// # Errors
    ///
    /// Returns the [`CommandError`] of a command that could not be accepted.
    pub fn process(
        &self,
        line: &str,
        channel: &str,
    ) -> Result<Option<OutgoingMessage>, CommandError> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        match self.parser.parse(line, channel) {
            CommandParseResult::Command(command) => Ok(Some(OutgoingMessage::Command(command))),
            CommandParseResult::PlainText(text) => {
                let body = if self.auto_link {
                    auto_link_urls(&text)
                } else {
                    text
                };
                Ok(Some(OutgoingMessage::Chat {
                    channel: channel.to_owned(),
                    text: body,
                }))
            }
            CommandParseResult::Invalid(error) => Err(error),
        }
    }
}
