//! When steps for chat input BDD scenarios.

use rstest_bdd_macros::when;

use super::world::ChatInputWorld;

#[when(r#"I type "{line}" in channel "{channel}""#)]
fn type_line(world: &mut ChatInputWorld, line: String, channel: String) -> Result<(), eyre::Report> {
    let processor = world
        .processor
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no processor in scenario world"))?;
    world.last_result = Some(processor.process(&line, &channel));
    Ok(())
}

#[when(r#"I type a blank line in channel "{channel}""#)]
fn type_blank_line(world: &mut ChatInputWorld, channel: String) -> Result<(), eyre::Report> {
    let processor = world
        .processor
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no processor in scenario world"))?;
    world.last_result = Some(processor.process("   ", &channel));
    Ok(())
}
