//! Bot module - Truco decision making.
//!
//! This module provides:
//! - `TrucoBot` trait, the seam hosts call through
//! - `TrucoGuru`: rule-table bot driven by `BotConfig` thresholds
//! - Static registry of bot factories

mod config;
mod decision;
mod guru;
pub mod registry;
pub mod rules;
mod trait_def;

#[cfg(test)]
mod tests_props_guru;

pub use config::BotConfig;
pub use decision::{CardToPlay, RaiseResponse};
pub use guru::TrucoGuru;
pub use registry::{by_name, registered_bots, BotFactory};
use serde_json::Value as JsonValue;
pub use trait_def::{BotError, TrucoBot};

/// Create a bot from its registered name and optional JSON config.
///
/// Returns None if the name is unrecognized. A malformed config falls back
/// to the defaults (see [`BotConfig::from_json`]).
pub fn create_bot(name: &str, config: Option<&JsonValue>) -> Option<Box<dyn TrucoBot + Send + Sync>> {
    by_name(name).map(|factory| (factory.make)(BotConfig::from_json(config)))
}
