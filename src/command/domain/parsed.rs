//! Parse inputs and outputs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{CommandError, WireType};

/// Field carrying the wire code in every command payload.
pub const TYPE_FIELD: &str = "type";

/// Field carrying the current channel for channel-scoped commands.
pub const CHANNEL_FIELD: &str = "channel";

/// Value bound to a command field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Single string value.
    Text(String),
    /// Multi-value field.
    List(Vec<String>),
}

impl FieldValue {
    /// Returns the value when this is a [`FieldValue::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::List(_) => None,
        }
    }

    /// Returns the values when this is a [`FieldValue::List`].
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Text(_) => None,
            Self::List(values) => Some(values),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

/// Structured command payload ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommand {
    wire_type: WireType,
    fields: BTreeMap<String, FieldValue>,
}

impl ParsedCommand {
    /// Creates a payload, adding the [`TYPE_FIELD`] entry for `wire_type`.
    #[must_use]
    pub fn new(wire_type: WireType, mut fields: BTreeMap<String, FieldValue>) -> Self {
        fields.insert(
            TYPE_FIELD.to_owned(),
            FieldValue::Text(wire_type.as_str().to_owned()),
        );
        Self { wire_type, fields }
    }

    /// Returns the wire code.
    #[must_use]
    pub const fn wire_type(&self) -> &WireType {
        &self.wire_type
    }

    /// Returns every field, including `type`.
    #[must_use]
    pub const fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }

    /// Looks up one field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Looks up one text field.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(FieldValue::as_text)
    }

    /// Renders the F-Chat frame: the wire code, then the JSON body without
    /// the `type` field. Commands with no other fields render as the bare code.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the body cannot be serialised.
    pub fn to_frame(&self) -> Result<String, serde_json::Error> {
        let body: BTreeMap<&str, &FieldValue> = self
            .fields
            .iter()
            .filter(|(name, _)| name.as_str() != TYPE_FIELD)
            .map(|(name, value)| (name.as_str(), value))
            .collect();

        if body.is_empty() {
            return Ok(self.wire_type.as_str().to_owned());
        }
        Ok(format!("{} {}", self.wire_type, serde_json::to_string(&body)?))
    }
}

/// Caller-supplied line together with the channel it was typed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawInputLine<'a> {
    /// Raw text as typed.
    pub text: &'a str,
    /// Opaque identifier of the current channel.
    pub channel: &'a str,
}

impl<'a> RawInputLine<'a> {
    /// Creates an input line.
    #[must_use]
    pub const fn new(text: &'a str, channel: &'a str) -> Self {
        Self { text, channel }
    }
}

/// Classification of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseResult {
    /// Not a command; the text to send as chat.
    PlainText(String),
    /// Recognised command with validated arguments.
    Command(ParsedCommand),
    /// The line was a command but could not be accepted.
    Invalid(CommandError),
}

impl CommandParseResult {
    /// Returns the command payload, if any.
    #[must_use]
    pub const fn as_command(&self) -> Option<&ParsedCommand> {
        match self {
            Self::Command(command) => Some(command),
            Self::PlainText(_) | Self::Invalid(_) => None,
        }
    }

    /// Converts into a `Result`, treating plain text as `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns the [`CommandError`] carried by [`CommandParseResult::Invalid`].
    pub fn into_command(self) -> Result<Option<ParsedCommand>, CommandError> {
        match self {
            Self::PlainText(_) => Ok(None),
            Self::Command(command) => Ok(Some(command)),
            Self::Invalid(error) => Err(error),
        }
    }
}
