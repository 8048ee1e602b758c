//! Slash-command grammar and parser.
//!
//! # Architecture
//!
//! - **Domain**: definitions, parse results and errors ([`domain::CommandDefinition`],
//!   [`domain::ParsedCommand`], [`domain::CommandError`])
//! - **Ports**: the [`ports::CommandRegistry`] lookup interface
//! - **Adapters**: [`adapters::InMemoryCommandRegistry`] with the built-in
//!   F-Chat grammar
//! - **Services**: [`services::CommandParser`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use fchat_input::command::{
//!     adapters::InMemoryCommandRegistry, domain::CommandParseResult,
//!     services::CommandParser,
//! };
//!
//! let parser = CommandParser::new(Arc::new(InMemoryCommandRegistry::new()));
//! let CommandParseResult::Command(command) = parser.parse("/kick Derper", "Frontpage") else {
//!     panic!("expected a command");
//! };
//! assert_eq!(command.wire_type().as_str(), "CKU");
//! assert_eq!(command.text("character"), Some("Derper"));
//! assert_eq!(command.text("channel"), Some("Frontpage"));
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
