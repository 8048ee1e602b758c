//! Domain types for the command grammar.
//!
//! Pure types with no infrastructure dependencies: definitions describe the
//! grammar, parse results describe what one input line turned into.

mod definition;
mod error;
mod name;
mod parsed;

pub use definition::{CommandDefinition, ParameterKind, ParameterSpec};
pub use error::{CommandDefinitionError, CommandError};
pub use name::{CommandName, WireType};
pub use parsed::{
    CHANNEL_FIELD, CommandParseResult, FieldValue, ParsedCommand, RawInputLine, TYPE_FIELD,
};
