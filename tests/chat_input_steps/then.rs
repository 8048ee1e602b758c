//! Then steps for chat input BDD scenarios.

use fchat_input::{command::domain::CommandError, input::OutgoingMessage};
use rstest_bdd_macros::then;

use super::world::ChatInputWorld;

#[then(r#"a "{code}" command is produced"#)]
fn command_produced(world: &ChatInputWorld, code: String) -> Result<(), eyre::Report> {
    let OutgoingMessage::Command(command) = world.last_message()? else {
        return Err(eyre::eyre!("expected a command message"));
    };
    if command.wire_type().as_str() != code {
        return Err(eyre::eyre!(
            "expected wire type {code}, found {}",
            command.wire_type()
        ));
    }
    Ok(())
}

#[then(r#"the command targets character "{character}" in channel "{channel}""#)]
fn command_targets_character(
    world: &ChatInputWorld,
    character: String,
    channel: String,
) -> Result<(), eyre::Report> {
    let OutgoingMessage::Command(command) = world.last_message()? else {
        return Err(eyre::eyre!("expected a command message"));
    };
    assert_eq!(command.text("character"), Some(character.as_str()));
    assert_eq!(command.text("channel"), Some(channel.as_str()));
    Ok(())
}

#[then(r#"the command sets status "{status}" with message "{message}""#)]
fn command_sets_status(
    world: &ChatInputWorld,
    status: String,
    message: String,
) -> Result<(), eyre::Report> {
    let OutgoingMessage::Command(command) = world.last_message()? else {
        return Err(eyre::eyre!("expected a command message"));
    };
    assert_eq!(command.text("status"), Some(status.as_str()));
    assert_eq!(command.text("statusmsg"), Some(message.as_str()));
    Ok(())
}

#[then(r#"the chat message "{text}" is sent to "{channel}""#)]
fn chat_message_sent(
    world: &ChatInputWorld,
    text: String,
    channel: String,
) -> Result<(), eyre::Report> {
    let message = world.last_message()?;
    assert_eq!(message, &OutgoingMessage::Chat { channel, text });
    Ok(())
}

#[then("nothing is sent")]
fn nothing_sent(world: &ChatInputWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(None)) => Ok(()),
        other => Err(eyre::eyre!("expected no message, got {other:?}")),
    }
}

#[then(r#"the input fails with unknown command "{name}""#)]
fn unknown_command_failure(world: &ChatInputWorld, name: String) -> Result<(), eyre::Report> {
    assert_eq!(world.last_error()?, &CommandError::UnknownCommand(name));
    Ok(())
}

#[then(r#"the input fails with missing argument "{parameter}" for command "{command}""#)]
fn missing_argument_failure(
    world: &ChatInputWorld,
    parameter: String,
    command: String,
) -> Result<(), eyre::Report> {
    assert_eq!(
        world.last_error()?,
        &CommandError::MissingArgument { command, parameter }
    );
    Ok(())
}
