#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Truco bot decision engine.
//!
//! Hosts build a [`GameSnapshot`] for each decision point and ask a
//! [`TrucoBot`] for a raise intent, a raise response, a mão de onze answer or
//! the card to play. Bots are stateless; everything they use is in the
//! snapshot and their [`BotConfig`].

pub mod ai;
pub mod domain;
pub mod errors;

// Re-exports for public API
pub use ai::{create_bot, BotConfig, BotError, CardToPlay, RaiseResponse, TrucoBot, TrucoGuru};
pub use domain::{Card, CardRanking, GameSnapshot, Rank, RoundResult, Suit};
pub use errors::{DomainError, ValidationKind};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    bot_test_support::logging::init();
}
