//! Chat-input core for an F-Chat client.
//!
//! Turns a line typed into a channel into what the client sends: a
//! structured command payload, or chat text with bare URLs wrapped in
//! `[url]` markup.
//!
//! # Architecture
//!
//! The command side follows hexagonal architecture principles:
//!
//! - **Domain**: command grammar, parse results and errors
//! - **Ports**: the registry interface the parser looks commands up through
//! - **Adapters**: the in-memory registry carrying the built-in grammar
//! - **Services**: the parser itself
//!
//! # Modules
//!
//! - [`command`]: slash-command grammar, registry and parser
//! - [`markup`]: BBCode-style tag scanning and URL auto-linking
//! - [`input`]: composition of the two into outgoing messages

pub mod command;
pub mod input;
pub mod markup;
