//! Given steps for chat input BDD scenarios.

use fchat_input::command::services::ParserConfig;
use rstest_bdd_macros::given;

use super::world::ChatInputWorld;

#[given("a processor with built-in commands")]
fn lenient_processor(world: &mut ChatInputWorld) {
    world.install(ParserConfig::lenient());
}

#[given("a strict processor with built-in commands")]
fn strict_processor(world: &mut ChatInputWorld) {
    world.install(ParserConfig::strict());
}
