//! Values returned by a bot decision.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Card;

/// Answer to an opponent's raise.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RaiseResponse {
    Decline,
    Accept,
    RaiseAgain,
}

impl RaiseResponse {
    /// Integer form used by hosts: -1 decline, 0 accept, 1 raise again.
    pub fn as_i32(self) -> i32 {
        match self {
            RaiseResponse::Decline => -1,
            RaiseResponse::Accept => 0,
            RaiseResponse::RaiseAgain => 1,
        }
    }

    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            -1 => Some(RaiseResponse::Decline),
            0 => Some(RaiseResponse::Accept),
            1 => Some(RaiseResponse::RaiseAgain),
            _ => None,
        }
    }
}

/// A card to play, face up or face down.
///
/// A discarded card is played face down: it counts as the weakest card on
/// the table and its [`value`](CardToPlay::value) is hidden.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CardToPlay {
    card: Card,
    discard: bool,
}

impl CardToPlay {
    pub fn of(card: Card) -> Self {
        Self {
            card,
            discard: false,
        }
    }

    pub fn discard(card: Card) -> Self {
        Self {
            card,
            discard: true,
        }
    }

    /// The card leaving the hand, whether played or discarded.
    pub fn content(&self) -> Card {
        self.card
    }

    pub fn is_discard(&self) -> bool {
        self.discard
    }

    /// What the opponent sees: `None` for a face-down card.
    pub fn value(&self) -> Option<Card> {
        (!self.discard).then_some(self.card)
    }
}

impl fmt::Display for CardToPlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.discard {
            write!(f, "{} (face down)", self.card)
        } else {
            write!(f, "{}", self.card)
        }
    }
}
