//! Slash-command definition and argument binding.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

use super::{
    CHANNEL_FIELD, CommandDefinitionError, CommandError, CommandName, FieldValue, TYPE_FIELD,
    WireType,
};

/// Semantic kind of an argument slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// Free-form text.
    Text,
    /// One literal from a closed, case-insensitive option set.
    Choice,
    /// Channel identifier or title.
    Channel,
    /// Character name.
    Character,
    /// Remainder of the line split on whitespace into a list.
    List,
}

/// Specification of one positional argument slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Field name the bound value is stored under. Always lowercase.
    #[serde(deserialize_with = "lowercase_name")]
    pub name: String,
    /// Slot kind.
    pub kind: ParameterKind,
    /// Whether the slot must be filled.
    #[serde(default = "required_by_default")]
    pub required: bool,
    /// Whether the slot consumes the remainder of the line unsplit.
    #[serde(default)]
    pub rest: bool,
    /// Legal literals for [`ParameterKind::Choice`] slots.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Value emitted when an optional slot is left empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

const fn required_by_default() -> bool {
    true
}

fn lowercase_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|name| name.to_ascii_lowercase())
}

fn lowercase_keys<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    BTreeMap::<String, String>::deserialize(deserializer).map(|fields| {
        fields
            .into_iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value))
            .collect()
    })
}

fn has_uppercase(name: &str) -> bool {
    name.bytes().any(|byte| byte.is_ascii_uppercase())
}

impl ParameterSpec {
    /// Creates a required single-token slot.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            kind,
            required: true,
            rest: false,
            options: Vec::new(),
            default: None,
        }
    }

    /// Free-text slot.
    #[must_use]
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::Text)
    }

    /// Choice slot accepting one of `options`.
    #[must_use]
    pub fn choice(
        name: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(name, ParameterKind::Choice).with_options(options)
    }

    /// Character-name slot.
    #[must_use]
    pub fn character(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::Character)
    }

    /// Channel slot.
    #[must_use]
    pub fn channel(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::Channel)
    }

    /// List slot.
    #[must_use]
    pub fn list(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::List)
    }

    /// Marks the slot optional.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Makes the slot consume the rest of the line.
    #[must_use]
    pub const fn rest(mut self) -> Self {
        self.rest = true;
        self
    }

    /// Sets the allowed options for choice slots.
    #[must_use]
    pub fn with_options(mut self, options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value emitted when the optional slot is absent.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Whether the slot swallows everything after the previous slot.
    #[must_use]
    pub fn consumes_rest(&self) -> bool {
        self.rest || self.kind == ParameterKind::List
    }

    fn bind(&self, command: &str, raw: &str) -> Result<FieldValue, CommandError> {
        match self.kind {
            ParameterKind::Text | ParameterKind::Channel | ParameterKind::Character => {
                Ok(FieldValue::Text(raw.to_owned()))
            }
            ParameterKind::List => Ok(FieldValue::List(
                raw.split_whitespace().map(str::to_owned).collect(),
            )),
            ParameterKind::Choice => self
                .options
                .iter()
                .find(|option| option.eq_ignore_ascii_case(raw))
                .map(|option| FieldValue::Text(option.clone()))
                .ok_or_else(|| CommandError::InvalidArgumentValue {
                    command: command.to_owned(),
                    parameter: self.name.clone(),
                    value: raw.to_owned(),
                    reason: format!("expected one of [{}]", self.options.join(", ")),
                }),
        }
    }
}

/// Slash-command definition held by registries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDefinition {
    /// Command name without the prefix.
    pub name: CommandName,
    /// Code sent to the server.
    pub wire_type: WireType,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Alternate names resolving to this definition.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<CommandName>,
    /// Positional argument slots.
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
    /// Whether the current channel is added as the `channel` field.
    #[serde(default)]
    pub requires_channel: bool,
    /// Constant fields added to every payload.
    #[serde(
        default,
        deserialize_with = "lowercase_keys",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub fixed_fields: BTreeMap<String, String>,
}

impl CommandDefinition {
    /// Creates a definition with no arguments.
    ///
    /// # Errors
    ///
    /// Returns [`CommandDefinitionError`] when the name or wire type is
    /// malformed.
    pub fn new(
        name: impl Into<String>,
        wire_type: impl Into<String>,
    ) -> Result<Self, CommandDefinitionError> {
        Ok(Self {
            name: CommandName::new(name)?,
            wire_type: WireType::new(wire_type)?,
            description: String::new(),
            aliases: Vec::new(),
            parameters: Vec::new(),
            requires_channel: false,
            fixed_fields: BTreeMap::new(),
        })
    }

    /// Creates a definition from the built-in grammar table.
    pub(crate) fn builtin(name: &'static str, wire_type: &'static str) -> Self {
        Self {
            name: CommandName::from_static(name),
            wire_type: WireType::from_static(wire_type),
            description: String::new(),
            aliases: Vec::new(),
            parameters: Vec::new(),
            requires_channel: false,
            fixed_fields: BTreeMap::new(),
        }
    }

    /// Adds a built-in alias.
    pub(crate) fn alias(mut self, alias: &'static str) -> Self {
        self.aliases.push(CommandName::from_static(alias));
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds an alternate name.
    ///
    /// # Errors
    ///
    /// Returns [`CommandDefinitionError::InvalidCommandName`] for a malformed
    /// alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Result<Self, CommandDefinitionError> {
        self.aliases.push(CommandName::new(alias)?);
        Ok(self)
    }

    /// Appends an argument slot.
    #[must_use]
    pub fn with_parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Adds a constant field.
    #[must_use]
    pub fn with_fixed_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fixed_fields
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Scopes the command to the current channel.
    #[must_use]
    pub const fn in_channel(mut self) -> Self {
        self.requires_channel = true;
        self
    }

    /// Returns the name followed by every alias.
    pub fn names(&self) -> impl Iterator<Item = &CommandName> {
        std::iter::once(&self.name).chain(self.aliases.iter())
    }

    /// Number of slots that must be filled.
    #[must_use]
    pub fn min_arguments(&self) -> usize {
        self.parameters
            .iter()
            .filter(|parameter| parameter.required)
            .count()
    }

    /// Largest number of slots the command accepts, or `None` when the final
    /// slot takes the rest of the line.
    #[must_use]
    pub fn max_arguments(&self) -> Option<usize> {
        match self.parameters.last() {
            Some(last) if last.consumes_rest() => None,
            _ => Some(self.parameters.len()),
        }
    }

    /// Renders a usage line such as `/status <status> [statusmsg...]`.
    #[must_use]
    pub fn usage(&self) -> String {
        let mut usage = format!("/{}", self.name);
        for parameter in &self.parameters {
            let ellipsis = if parameter.consumes_rest() { "..." } else { "" };
            let slot = if parameter.required {
                format!(" <{}{ellipsis}>", parameter.name)
            } else {
                format!(" [{}{ellipsis}]", parameter.name)
            };
            usage.push_str(&slot);
        }
        usage
    }

    /// Checks the slot layout and reserved field names.
    ///
    /// # Errors
    ///
    /// Returns [`CommandDefinitionError::InvalidParameter`] describing the
    /// first inconsistency found.
    pub fn validate_schema(&self) -> Result<(), CommandDefinitionError> {
        let mut names = HashSet::new();
        let mut seen_optional = false;
        let last_index = self.parameters.len().saturating_sub(1);

        for (index, parameter) in self.parameters.iter().enumerate() {
            let invalid = |reason: &str| CommandDefinitionError::InvalidParameter {
                command: self.name.to_string(),
                parameter: parameter.name.clone(),
                reason: reason.to_owned(),
            };

            if parameter.name.is_empty() {
                return Err(invalid("parameter name cannot be empty"));
            }
            if has_uppercase(&parameter.name) {
                return Err(invalid("parameter names must be lowercase"));
            }
            if self.is_reserved_field(&parameter.name) {
                return Err(invalid("field name is reserved"));
            }
            if !names.insert(parameter.name.as_str()) {
                return Err(invalid("duplicate parameter definition"));
            }
            if parameter.kind == ParameterKind::Choice && parameter.options.is_empty() {
                return Err(invalid("choice parameters must provide options"));
            }
            if parameter.kind != ParameterKind::Choice && !parameter.options.is_empty() {
                return Err(invalid("options only apply to choice parameters"));
            }
            if parameter.kind == ParameterKind::Choice
                && parameter
                    .default
                    .as_ref()
                    .is_some_and(|default| !parameter.options.contains(default))
            {
                return Err(invalid("choice default must be one of the options"));
            }
            if parameter.consumes_rest() && index != last_index {
                return Err(invalid("only the final parameter may take the rest of the line"));
            }
            if parameter.required && seen_optional {
                return Err(invalid("required parameters cannot follow optional ones"));
            }
            seen_optional |= !parameter.required;
        }

        for field in self.fixed_fields.keys() {
            let reason = if has_uppercase(field) {
                "fixed field names must be lowercase"
            } else if self.is_reserved_field(field) || names.contains(field.as_str()) {
                "fixed field collides with another field"
            } else {
                continue;
            };
            return Err(CommandDefinitionError::InvalidParameter {
                command: self.name.to_string(),
                parameter: field.clone(),
                reason: reason.to_owned(),
            });
        }
        Ok(())
    }

    fn is_reserved_field(&self, name: &str) -> bool {
        name == TYPE_FIELD || (self.requires_channel && name == CHANNEL_FIELD)
    }

    /// Binds the text after the command name to the argument slots.
    ///
    /// Single-token slots take one whitespace-delimited token each; a rest
    /// slot takes the trimmed remainder. Fixed fields are added to the result.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::MissingArgument`] when a required slot is
    /// empty, or [`CommandError::InvalidArgumentValue`] when a choice slot
    /// receives an unknown literal.
    pub fn bind_arguments(
        &self,
        arguments: &str,
    ) -> Result<BTreeMap<String, FieldValue>, CommandError> {
        let mut fields = BTreeMap::new();
        let mut remaining = arguments.trim();

        for parameter in &self.parameters {
            let (raw, tail) = take_argument(parameter, remaining);
            remaining = tail;
            match raw {
                Some(value) => {
                    let bound = parameter.bind(self.name.as_str(), value)?;
                    fields.insert(parameter.name.clone(), bound);
                }
                None if parameter.required => {
                    return Err(CommandError::MissingArgument {
                        command: self.name.to_string(),
                        parameter: parameter.name.clone(),
                    });
                }
                None => {
                    if let Some(default) = &parameter.default {
                        fields.insert(parameter.name.clone(), FieldValue::Text(default.clone()));
                    }
                }
            }
        }

        if !remaining.is_empty() {
            debug!(command = %self.name, surplus = remaining, "ignoring surplus arguments");
        }

        for (name, value) in &self.fixed_fields {
            fields.insert(name.clone(), FieldValue::Text(value.clone()));
        }
        Ok(fields)
    }
}

fn take_argument<'a>(parameter: &ParameterSpec, input: &'a str) -> (Option<&'a str>, &'a str) {
    if input.is_empty() {
        return (None, input);
    }
    if parameter.consumes_rest() {
        return (Some(input), "");
    }
    input
        .split_once(char::is_whitespace)
        .map_or((Some(input), ""), |(token, tail)| {
            (Some(token), tail.trim_start())
        })
}
