//! What the bot can see at a decision point.
//!
//! The host engine assembles a [`GameSnapshot`] for every call. Nothing in
//! it is mutated afterwards and nothing survives the call, so two identical
//! snapshots always produce the same decision.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::cards_logic::CardRanking;
use super::cards_types::Card;
use crate::errors::domain::{DomainError, ValidationKind};

/// Points at which the mão de onze applies and ordinary raises stop.
pub const MAO_DE_ONZE_SCORE: u8 = 11;

/// Scores live in `0..MAX_SCORE`; reaching 12 ends the game.
pub const MAX_SCORE: u8 = 12;

/// A hand has at most three rounds, so at most two are complete when a
/// decision is still pending.
pub const MAX_COMPLETED_ROUNDS: usize = 2;

pub const MAX_HAND_SIZE: usize = 3;

/// Outcome of a completed round, from the bot's side.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundResult {
    Won,
    Lost,
    Drawn,
}

/// Information visible to the bot at a decision point.
///
/// Build it with [`GameSnapshot::builder`] so the invariants below hold:
///
/// - scores are below [`MAX_SCORE`]
/// - at most [`MAX_COMPLETED_ROUNDS`] round results
/// - hand of at most [`MAX_HAND_SIZE`] distinct cards, none of them the vira
/// - the opponent's card, when present, is not in the hand
/// - hand points are at least 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Completed rounds of the current hand, oldest first
    pub round_results: Vec<RoundResult>,

    /// Cards revealed so far this hand (the vira and played cards)
    pub open_cards: Vec<Card>,

    /// Card that fixes the manilha rank for this hand
    pub vira: Card,

    /// Current stake of the hand (1, 3, 6, 9 or 12 in a standard game)
    pub hand_points: u8,

    /// Cards still held by the bot
    pub hand: Vec<Card>,

    pub score: u8,

    pub opponent_score: u8,

    /// Card the opponent already played this round, if the bot answers it
    pub opponent_card: Option<Card>,
}

impl GameSnapshot {
    pub fn builder() -> SnapshotBuilder {
        SnapshotBuilder::default()
    }

    /// Decode and validate a snapshot sent by the host as JSON.
    ///
    /// ```json
    /// {
    ///   "round_results": ["WON"],
    ///   "open_cards": ["KS"],
    ///   "vira": "KS",
    ///   "hand_points": 1,
    ///   "hand": ["AS", "2C"],
    ///   "score": 0,
    ///   "opponent_score": 0
    /// }
    /// ```
    pub fn from_json(json: &JsonValue) -> Result<Self, DomainError> {
        let raw: RawSnapshot = serde_json::from_value(json.clone()).map_err(|e| {
            DomainError::validation(ValidationKind::MalformedSnapshot, e.to_string())
        })?;
        let mut builder = Self::builder()
            .game_info(raw.round_results, raw.open_cards, raw.vira, raw.hand_points)
            .bot_info(raw.hand, raw.score)
            .opponent_score(raw.opponent_score);
        if let Some(card) = raw.opponent_card {
            builder = builder.opponent_card(card);
        }
        builder.build()
    }

    /// 1-based number of the round being played.
    pub fn round_number(&self) -> usize {
        self.round_results.len() + 1
    }

    pub fn last_result(&self) -> Option<RoundResult> {
        self.round_results.last().copied()
    }

    pub fn first_result(&self) -> Option<RoundResult> {
        self.round_results.first().copied()
    }

    /// Own score minus the opponent's score.
    pub fn margin(&self) -> i16 {
        i16::from(self.score) - i16::from(self.opponent_score)
    }

    pub fn anyone_at_eleven(&self) -> bool {
        self.score == MAO_DE_ONZE_SCORE || self.opponent_score == MAO_DE_ONZE_SCORE
    }

    /// A round was already lost or drawn, so the round in play decides the hand.
    pub fn must_win_round(&self) -> bool {
        self.round_results
            .iter()
            .any(|r| matches!(r, RoundResult::Lost | RoundResult::Drawn))
    }

    pub fn ranking(&self) -> CardRanking {
        CardRanking::new(self.vira)
    }
}

#[derive(Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    round_results: Vec<RoundResult>,
    #[serde(default)]
    open_cards: Vec<Card>,
    vira: Card,
    hand_points: u8,
    #[serde(default)]
    hand: Vec<Card>,
    score: u8,
    opponent_score: u8,
    #[serde(default)]
    opponent_card: Option<Card>,
}

/// Step-style builder for [`GameSnapshot`]; `build` checks the invariants.
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    round_results: Vec<RoundResult>,
    open_cards: Vec<Card>,
    vira: Option<Card>,
    hand_points: u8,
    hand: Vec<Card>,
    score: u8,
    opponent_score: u8,
    opponent_card: Option<Card>,
}

impl SnapshotBuilder {
    pub fn game_info(
        mut self,
        round_results: Vec<RoundResult>,
        open_cards: Vec<Card>,
        vira: Card,
        hand_points: u8,
    ) -> Self {
        self.round_results = round_results;
        self.open_cards = open_cards;
        self.vira = Some(vira);
        self.hand_points = hand_points;
        self
    }

    pub fn bot_info(mut self, hand: Vec<Card>, score: u8) -> Self {
        self.hand = hand;
        self.score = score;
        self
    }

    pub fn opponent_score(mut self, score: u8) -> Self {
        self.opponent_score = score;
        self
    }

    pub fn opponent_card(mut self, card: Card) -> Self {
        self.opponent_card = Some(card);
        self
    }

    pub fn build(self) -> Result<GameSnapshot, DomainError> {
        let vira = self.vira.ok_or_else(|| {
            DomainError::validation(ValidationKind::MalformedSnapshot, "game info (vira) not set")
        })?;
        for (who, score) in [("bot", self.score), ("opponent", self.opponent_score)] {
            if score >= MAX_SCORE {
                return Err(DomainError::validation(
                    ValidationKind::ScoreOutOfRange,
                    format!("{who} score {score} must be below {MAX_SCORE}"),
                ));
            }
        }
        if self.hand_points == 0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidHandPoints,
                "hand points must be at least 1",
            ));
        }
        if self.round_results.len() > MAX_COMPLETED_ROUNDS {
            return Err(DomainError::validation(
                ValidationKind::TooManyRoundResults,
                format!("{} round results", self.round_results.len()),
            ));
        }
        if self.hand.len() > MAX_HAND_SIZE {
            return Err(DomainError::validation(
                ValidationKind::HandTooLarge,
                format!("{} cards in hand", self.hand.len()),
            ));
        }
        for (i, card) in self.hand.iter().enumerate() {
            if self.hand[..i].contains(card) {
                return Err(DomainError::validation(
                    ValidationKind::DuplicateCard,
                    format!("{card} held twice"),
                ));
            }
        }
        if self.hand.contains(&vira) {
            return Err(DomainError::validation(
                ValidationKind::ViraInHand,
                format!("vira {vira} is in the hand"),
            ));
        }
        if let Some(card) = self.opponent_card.filter(|c| self.hand.contains(c)) {
            return Err(DomainError::validation(
                ValidationKind::OpponentCardInHand,
                format!("opponent card {card} is in the hand"),
            ));
        }

        Ok(GameSnapshot {
            round_results: self.round_results,
            open_cards: self.open_cards,
            vira,
            hand_points: self.hand_points,
            hand: self.hand,
            score: self.score,
            opponent_score: self.opponent_score,
            opponent_card: self.opponent_card,
        })
    }
}
