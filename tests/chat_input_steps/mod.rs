//! Step definitions for chat input behaviour scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
