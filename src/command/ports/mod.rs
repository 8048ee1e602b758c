//! Port trait definitions for the command subsystem.
//!
//! The parser depends on these interfaces rather than on a concrete grammar
//! table, so hosts can supply their own registry.

pub mod registry;

pub use registry::{CommandRegistry, CommandRegistryError, CommandRegistryResult};
