//! Bot trait definition.

use thiserror::Error;

use super::decision::{CardToPlay, RaiseResponse};
use crate::domain::GameSnapshot;

/// Errors that can occur during bot decision-making.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BotError {
    /// Asked to play with no cards in hand
    #[error("bot has no card to play")]
    EmptyHand,
    /// Bot encountered an internal error
    #[error("bot internal error: {0}")]
    Internal(String),
}

/// Trait for Truco bots.
///
/// Implementations receive the snapshot visible to the bot and return a
/// decision. They keep no state between calls, so the same snapshot always
/// yields the same answer.
pub trait TrucoBot: Send + Sync {
    /// Whether to call truco (or raise the stake again) on the bot's turn.
    fn decide_if_raises(&self, snapshot: &GameSnapshot) -> bool;

    /// Answer an opponent's raise to `snapshot.hand_points`.
    fn raise_response(&self, snapshot: &GameSnapshot) -> RaiseResponse;

    /// Play or refuse a mão de onze. Only meaningful when the bot is at 11.
    fn mao_de_onze_response(&self, snapshot: &GameSnapshot) -> bool;

    /// Choose the card to play this round.
    fn choose_card(&self, snapshot: &GameSnapshot) -> Result<CardToPlay, BotError>;
}
