//! Application services for the command subsystem.
//!
//! The parser combines a registry port with the domain's argument binding to
//! classify raw input lines.

mod config;
mod parser;

pub use config::{ParseMode, ParserConfig};
pub use parser::CommandParser;
