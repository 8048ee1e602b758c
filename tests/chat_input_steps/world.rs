//! Shared world state for chat input BDD scenarios.

use std::sync::Arc;

use fchat_input::{
    command::{
        adapters::InMemoryCommandRegistry,
        domain::CommandError,
        services::{CommandParser, ParserConfig},
    },
    input::{InputProcessor, OutgoingMessage},
};
use rstest::fixture;

/// Processor type used by the BDD world.
pub type TestProcessor = InputProcessor<InMemoryCommandRegistry>;

/// Scenario world for chat input behaviour tests.
#[derive(Default)]
pub struct ChatInputWorld {
    /// The processor under test.
    pub processor: Option<TestProcessor>,
    /// Result of the last processed line.
    pub last_result: Option<Result<Option<OutgoingMessage>, CommandError>>,
}

impl ChatInputWorld {
    /// Installs a processor over the built-in command registry.
    pub fn install(&mut self, config: ParserConfig) {
        let parser =
            CommandParser::with_config(Arc::new(InMemoryCommandRegistry::new()), config);
        self.processor = Some(InputProcessor::new(parser));
        self.last_result = None;
    }

    /// Returns the message produced by the last line, failing if there was none.
    pub fn last_message(&self) -> Result<&OutgoingMessage, eyre::Report> {
        match self.last_result.as_ref() {
            Some(Ok(Some(message))) => Ok(message),
            Some(Ok(None)) => Err(eyre::eyre!("the last line produced no message")),
            Some(Err(error)) => Err(eyre::eyre!("the last line failed: {error}")),
            None => Err(eyre::eyre!("no line has been processed")),
        }
    }

    /// Returns the error produced by the last line, failing if it succeeded.
    pub fn last_error(&self) -> Result<&CommandError, eyre::Report> {
        match self.last_result.as_ref() {
            Some(Err(error)) => Ok(error),
            Some(Ok(outcome)) => Err(eyre::eyre!("expected an error, got {outcome:?}")),
            None => Err(eyre::eyre!("no line has been processed")),
        }
    }
}

/// Fixture providing an empty scenario world.
#[fixture]
pub fn world() -> ChatInputWorld {
    ChatInputWorld::default()
}
