//! Input processing: from a typed line to the message a transport sends.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use fchat_input::command::{adapters::InMemoryCommandRegistry, services::CommandParser};
//! use fchat_input::input::{InputProcessor, OutgoingMessage};
//!
//! let processor =
//!     InputProcessor::new(CommandParser::new(Arc::new(InMemoryCommandRegistry::new())));
//!
//! let message = processor
//!     .process("see http://www.f-list.net", "Frontpage")
//!     .expect("chat text is always accepted");
//! assert_eq!(
//!     message,
//!     Some(OutgoingMessage::Chat {
//!         channel: "Frontpage".to_owned(),
//!         text: "see [url=http://www.f-list.net]f-list.net[/url]".to_owned(),
//!     })
//! );
//! ```

mod outgoing;
mod processor;

pub use outgoing::{CHAT_WIRE_TYPE, OutgoingMessage};
pub use processor::InputProcessor;
