//! How to register a bot
//!
//! 1) Implement `TrucoBot` for your type in its module.
//! 2) Add a `BotFactory` entry to the static list with a stable `name` and `version`.
//! 3) Keep ordering stable; constructors must not have side effects.

use super::config::BotConfig;
use super::guru::TrucoGuru;
use super::trait_def::TrucoBot;

/// Factory definition for constructing bot implementations.
pub struct BotFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(config: BotConfig) -> Box<dyn TrucoBot + Send + Sync>,
}

static BOT_FACTORIES: &[BotFactory] = &[BotFactory {
    name: TrucoGuru::NAME,
    version: TrucoGuru::VERSION,
    make: make_truco_guru,
}];

/// Returns the statically registered bot factories.
pub fn registered_bots() -> &'static [BotFactory] {
    BOT_FACTORIES
}

/// Finds a registered bot factory by its name.
pub fn by_name(name: &str) -> Option<&'static BotFactory> {
    registered_bots().iter().find(|factory| factory.name == name)
}

fn make_truco_guru(config: BotConfig) -> Box<dyn TrucoBot + Send + Sync> {
    Box::new(TrucoGuru::new(config))
}
