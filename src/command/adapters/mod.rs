//! Registry adapters for the command subsystem.
//!
//! - [`memory::InMemoryCommandRegistry`]: immutable in-memory grammar,
//!   seeded with [`builtin::builtin_commands`] or built from caller-supplied
//!   definitions (including JSON).

pub mod builtin;
pub mod memory;

pub use builtin::builtin_commands;
pub use memory::InMemoryCommandRegistry;
