//! Unit tests for the command parser service.

use std::sync::Arc;

use mockall::{mock, predicate::eq};
use rstest::{fixture, rstest};

use crate::command::{
    adapters::InMemoryCommandRegistry,
    domain::{
        CommandDefinition, CommandError, CommandParseResult, FieldValue, ParameterSpec,
        ParsedCommand, RawInputLine,
    },
    ports::CommandRegistry,
    services::{CommandParser, ParseMode, ParserConfig},
};

mock! {
    Registry {}

    impl CommandRegistry for Registry {
        fn lookup(&self, name: &str) -> Option<Arc<CommandDefinition>>;
        fn definitions(&self) -> Vec<Arc<CommandDefinition>>;
    }
}

#[fixture]
fn parser() -> CommandParser<InMemoryCommandRegistry> {
    CommandParser::new(Arc::new(InMemoryCommandRegistry::new()))
}

fn expect_command(result: CommandParseResult) -> ParsedCommand {
    match result {
        CommandParseResult::Command(command) => command,
        other => panic!("expected a command, got {other:?}"),
    }
}

#[rstest]
fn status_command_binds_status_and_message(parser: CommandParser<InMemoryCommandRegistry>) {
    let command = expect_command(parser.parse("/status away Dinner!", "ch1"));

    assert_eq!(command.wire_type().as_str(), "STA");
    assert_eq!(command.text("type"), Some("STA"));
    assert_eq!(command.text("status"), Some("away"));
    assert_eq!(command.text("statusmsg"), Some("Dinner!"));
    assert_eq!(command.field("channel"), None);
}

#[rstest]
fn kick_command_carries_current_channel(parser: CommandParser<InMemoryCommandRegistry>) {
    let command = expect_command(parser.parse("/kick Derper", "TestingChannel"));

    assert_eq!(command.text("type"), Some("CKU"));
    assert_eq!(command.text("channel"), Some("TestingChannel"));
    assert_eq!(command.text("character"), Some("Derper"));
    assert_eq!(command.fields().len(), 3);
}

#[rstest]
fn character_names_with_spaces_are_kept_whole(parser: CommandParser<InMemoryCommandRegistry>) {
    let command = expect_command(parser.parse("/ban Some Long Name", "ADH-1234"));
    assert_eq!(command.text("character"), Some("Some Long Name"));
}

#[rstest]
fn invalid_status_value_is_rejected(parser: CommandParser<InMemoryCommandRegistry>) {
    let result = parser.parse("/status erp derp", "ch1");

    assert!(matches!(
        result,
        CommandParseResult::Invalid(CommandError::InvalidArgumentValue { ref parameter, ref value, .. })
            if parameter == "status" && value == "erp"
    ));
}

#[rstest]
fn missing_argument_is_rejected(parser: CommandParser<InMemoryCommandRegistry>) {
    assert_eq!(
        parser.parse("/kick", "ch1"),
        CommandParseResult::Invalid(CommandError::MissingArgument {
            command: "kick".to_owned(),
            parameter: "character".to_owned(),
        })
    );
}

#[rstest]
fn unknown_command_depends_on_mode(parser: CommandParser<InMemoryCommandRegistry>) {
    assert_eq!(
        parser.parse_strict("/arrgsh nnnmo", "ch1"),
        CommandParseResult::Invalid(CommandError::UnknownCommand("arrgsh".to_owned()))
    );
    assert_eq!(
        parser.parse_lenient("/arrgsh nnnmo", "ch1"),
        CommandParseResult::PlainText("/arrgsh nnnmo".to_owned())
    );
    assert_eq!(
        parser.parse("/arrgsh nnnmo", "ch1"),
        CommandParseResult::PlainText("/arrgsh nnnmo".to_owned())
    );
}

#[rstest]
#[case("this is a test of a command later /status away don't parse this")]
#[case(" /status away")]
#[case("/ status away")]
#[case("/")]
#[case("")]
#[case("/me waves")]
fn non_commands_pass_through_verbatim(
    parser: CommandParser<InMemoryCommandRegistry>,
    #[case] line: &str,
) {
    assert_eq!(
        parser.parse(line, "ch1"),
        CommandParseResult::PlainText(line.to_owned())
    );
}

#[rstest]
fn command_names_are_case_insensitive(parser: CommandParser<InMemoryCommandRegistry>) {
    let command = expect_command(parser.parse("/STATUS Busy", "ch1"));
    assert_eq!(command.text("status"), Some("busy"));
    assert_eq!(command.text("statusmsg"), Some(""));
}

#[rstest]
fn fixed_fields_and_aliases_are_applied(parser: CommandParser<InMemoryCommandRegistry>) {
    let open = expect_command(parser.parse("/openroom", "ADH-1"));
    assert_eq!(open.text("type"), Some("RST"));
    assert_eq!(open.text("status"), Some("public"));
    assert_eq!(open.text("channel"), Some("ADH-1"));

    let leave = expect_command(parser.parse("/close", "ADH-1"));
    assert_eq!(leave.text("type"), Some("LCH"));
    assert_eq!(leave.text("channel"), Some("ADH-1"));
}

#[rstest]
fn timeout_takes_length_then_character(parser: CommandParser<InMemoryCommandRegistry>) {
    let command = expect_command(parser.parse("/timeout 30 Some Body", "ADH-1"));
    assert_eq!(command.text("length"), Some("30"));
    assert_eq!(command.text("character"), Some("Some Body"));
}

#[rstest]
fn strict_configuration_changes_default_mode() {
    let parser = CommandParser::with_config(
        Arc::new(InMemoryCommandRegistry::new()),
        ParserConfig::strict(),
    );

    assert!(matches!(
        parser.parse("/arrgsh", "ch1"),
        CommandParseResult::Invalid(CommandError::UnknownCommand(_))
    ));
}

#[rstest]
fn custom_prefix_is_honoured() {
    let parser = CommandParser::with_config(
        Arc::new(InMemoryCommandRegistry::new()),
        ParserConfig::lenient().with_prefix('!'),
    );

    let command = expect_command(parser.parse("!roll 1d20", "ch1"));
    assert_eq!(command.text("dice"), Some("1d20"));
    assert_eq!(
        parser.parse("/roll 1d20", "ch1"),
        CommandParseResult::PlainText("/roll 1d20".to_owned())
    );
}

#[rstest]
fn parser_looks_up_lowercased_name_once() {
    let definition = CommandDefinition::new("watch", "AWC")
        .expect("valid definition")
        .with_parameter(ParameterSpec::list("characters"));
    let shared = Arc::new(definition);

    let mut registry = MockRegistry::new();
    registry
        .expect_lookup()
        .with(eq("watch"))
        .times(1)
        .returning(move |_| Some(Arc::clone(&shared)));

    let parser = CommandParser::new(Arc::new(registry));
    let command = expect_command(parser.parse_line(
        RawInputLine::new("/WATCH Alpha Beta", "ch1"),
        ParseMode::Strict,
    ));

    assert_eq!(
        command.field("characters"),
        Some(&FieldValue::List(vec!["Alpha".to_owned(), "Beta".to_owned()]))
    );
}

#[rstest]
fn plain_text_never_reaches_the_registry() {
    let mut registry = MockRegistry::new();
    registry.expect_lookup().never();

    let parser = CommandParser::new(Arc::new(registry));
    assert_eq!(
        parser.parse("hello there", "ch1"),
        CommandParseResult::PlainText("hello there".to_owned())
    );
}

#[rstest]
fn parse_results_convert_into_results(parser: CommandParser<InMemoryCommandRegistry>) {
    assert_eq!(parser.parse("hi", "ch1").into_command(), Ok(None));
    assert!(parser.parse("/uptime", "ch1").into_command().is_ok_and(|c| c.is_some()));
    assert!(parser.parse("/kick", "ch1").into_command().is_err());
}
