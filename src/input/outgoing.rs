//! Messages handed to the transport.

use serde::Serialize;

use crate::command::domain::ParsedCommand;

/// Wire code of a channel chat message.
pub const CHAT_WIRE_TYPE: &str = "MSG";

/// What one line of user input turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutgoingMessage {
    /// Chat text for a channel, with bare URLs already wrapped.
    Chat {
        /// Channel the text is sent to.
        channel: String,
        /// Message body.
        text: String,
    },
    /// Structured command payload.
    Command(ParsedCommand),
}

#[derive(Serialize)]
struct ChatBody<'a> {
    channel: &'a str,
    message: &'a str,
}

impl OutgoingMessage {
    /// Renders the F-Chat frame (`MSG {"channel":..,"message":..}` for chat).
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the body cannot be serialised.
    pub fn to_frame(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Command(command) => command.to_frame(),
            Self::Chat { channel, text } => {
                let body = serde_json::to_string(&ChatBody {
                    channel,
                    message: text,
                })?;
                Ok(format!("{CHAT_WIRE_TYPE} {body}"))
            }
        }
    }
}
