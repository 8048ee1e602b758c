//! Built-in F-Chat command grammar.

use crate::command::domain::{CommandDefinition, ParameterSpec};

/// Status values accepted by `/status`.
pub const STATUS_VALUES: [&str; 6] = ["online", "busy", "dnd", "looking", "away", "idle"];

/// Room modes accepted by `/setmode`.
pub const ROOM_MODES: [&str; 3] = ["chat", "ads", "both"];

/// Returns the commands an F-Chat client understands out of the box.
///
/// Character names may contain spaces, so a character slot that ends a
/// command takes the rest of the line.
#[must_use]
pub fn builtin_commands() -> Vec<CommandDefinition> {
    let mut commands = vec![
        CommandDefinition::builtin("status", "STA")
            .with_description("Set your status and status message")
            .with_parameter(ParameterSpec::choice("status", STATUS_VALUES))
            .with_parameter(
                ParameterSpec::text("statusmsg")
                    .optional()
                    .rest()
                    .with_default(""),
            ),
        CommandDefinition::builtin("join", "JCH")
            .with_description("Join a channel")
            .with_parameter(ParameterSpec::channel("channel").rest()),
        CommandDefinition::builtin("leave", "LCH")
            .alias("close")
            .alias("part")
            .with_description("Leave the current channel")
            .in_channel(),
        CommandDefinition::builtin("makeroom", "CCR")
            .with_description("Create a private room")
            .with_parameter(ParameterSpec::text("channel").rest()),
        CommandDefinition::builtin("setdescription", "CDS")
            .with_description("Change the current channel's description")
            .with_parameter(ParameterSpec::text("description").rest())
            .in_channel(),
        CommandDefinition::builtin("openroom", "RST")
            .with_description("Make the current room public")
            .with_fixed_field("status", "public")
            .in_channel(),
        CommandDefinition::builtin("closeroom", "RST")
            .with_description("Make the current room invite-only")
            .with_fixed_field("status", "private")
            .in_channel(),
        CommandDefinition::builtin("setmode", "RMO")
            .with_description("Choose whether the room allows chat, ads, or both")
            .with_parameter(ParameterSpec::choice("mode", ROOM_MODES))
            .in_channel(),
        CommandDefinition::builtin("timeout", "CTU")
            .with_description("Time a character out of the current channel")
            .with_parameter(ParameterSpec::text("length"))
            .with_parameter(ParameterSpec::character("character").rest())
            .in_channel(),
        CommandDefinition::builtin("roll", "RLL")
            .with_description("Roll dice in the current channel")
            .with_parameter(ParameterSpec::text("dice").rest())
            .in_channel(),
        CommandDefinition::builtin("bottle", "RLL")
            .with_description("Spin the bottle in the current channel")
            .with_fixed_field("dice", "bottle")
            .in_channel(),
        CommandDefinition::builtin("ad", "LRP")
            .alias("lfrp")
            .with_description("Post a roleplay ad")
            .with_parameter(ParameterSpec::text("message").rest())
            .in_channel(),
        CommandDefinition::builtin("ignore", "IGN")
            .with_description("Ignore a character")
            .with_parameter(ParameterSpec::character("character").rest())
            .with_fixed_field("action", "add"),
        CommandDefinition::builtin("unignore", "IGN")
            .with_description("Stop ignoring a character")
            .with_parameter(ParameterSpec::character("character").rest())
            .with_fixed_field("action", "delete"),
        CommandDefinition::builtin("ignorelist", "IGN")
            .with_description("Request the ignore list")
            .with_fixed_field("action", "list"),
        CommandDefinition::builtin("report", "SFC")
            .with_description("Alert chat moderators")
            .with_parameter(ParameterSpec::character("character"))
            .with_parameter(ParameterSpec::text("report").rest())
            .with_fixed_field("action", "report"),
        CommandDefinition::builtin("uptime", "UPT").with_description("Request server uptime"),
        CommandDefinition::builtin("channels", "CHA")
            .with_description("List official channels"),
        CommandDefinition::builtin("rooms", "ORS").with_description("List open private rooms"),
    ];

    commands.extend(channel_moderation_commands());
    commands.extend(chat_operator_commands());
    commands
}

fn channel_moderation_commands() -> Vec<CommandDefinition> {
    [
        ("kick", "CKU", "Kick a character from the current channel"),
        ("ban", "CBU", "Ban a character from the current channel"),
        ("unban", "CUB", "Lift a channel ban"),
        ("invite", "CIU", "Invite a character to the current room"),
        ("promote", "COA", "Make a character a channel moderator"),
        ("demote", "COR", "Remove a channel moderator"),
        ("setowner", "CSO", "Hand channel ownership to a character"),
    ]
    .into_iter()
    .map(|(name, wire_type, description)| {
        let definition = CommandDefinition::builtin(name, wire_type)
            .with_description(description)
            .with_parameter(ParameterSpec::character("character").rest())
            .in_channel();
        match name {
            "promote" => definition.alias("op"),
            "demote" => definition.alias("deop"),
            _ => definition,
        }
    })
    .collect()
}

fn chat_operator_commands() -> Vec<CommandDefinition> {
    let character_commands = [
        ("gkick", "KIK", "Kick a character from the server"),
        ("accountban", "ACB", "Ban a character's account"),
        ("ipban", "IPB", "Ban a character's address"),
        ("gunban", "UNB", "Lift a server ban"),
        ("chatop", "AOP", "Promote a character to chat operator"),
        ("chatdeop", "DOP", "Demote a chat operator"),
        ("reward", "RWD", "Reward a character"),
    ]
    .into_iter()
    .map(|(name, wire_type, description)| {
        CommandDefinition::builtin(name, wire_type)
            .with_description(description)
            .with_parameter(ParameterSpec::character("character").rest())
    });

    let channel_commands = [
        ("createchannel", "CRC", "Create an official channel"),
        ("killchannel", "KIC", "Delete an official channel"),
    ]
    .into_iter()
    .map(|(name, wire_type, description)| {
        CommandDefinition::builtin(name, wire_type)
            .with_description(description)
            .with_parameter(ParameterSpec::channel("channel").rest())
    });

    character_commands
        .chain(channel_commands)
        .chain(std::iter::once(
            CommandDefinition::builtin("broadcast", "BRO")
                .with_description("Send a message to every connected character")
                .with_parameter(ParameterSpec::text("message").rest()),
        ))
        .collect()
}
