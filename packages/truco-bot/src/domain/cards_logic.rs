//! Card strength relative to the vira.
//!
//! Every comparison in the decision engine goes through a [`CardRanking`]
//! built from the hand's vira. There is no global card order: the same two
//! cards can compare differently under two viras.

use std::cmp::Ordering;

use super::cards_types::{Card, Rank, Suit};

/// Relative value of the strongest possible card (the Clubs manilha).
pub const TOP_VALUE: u8 = 14;

/// Comparator for one hand, fixed by its vira.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CardRanking {
    vira: Card,
    manilha_rank: Rank,
}

impl CardRanking {
    pub fn new(vira: Card) -> Self {
        Self {
            vira,
            manilha_rank: vira.rank.next(),
        }
    }

    pub fn vira(&self) -> Card {
        self.vira
    }

    pub fn manilha_rank(&self) -> Rank {
        self.manilha_rank
    }

    pub fn is_manilha(&self, card: Card) -> bool {
        card.rank == self.manilha_rank
    }

    pub fn is_zap(&self, card: Card) -> bool {
        self.is_manilha(card) && card.suit == Suit::Clubs
    }

    pub fn is_copas(&self, card: Card) -> bool {
        self.is_manilha(card) && card.suit == Suit::Hearts
    }

    pub fn is_espadilha(&self, card: Card) -> bool {
        self.is_manilha(card) && card.suit == Suit::Spades
    }

    pub fn is_ouros(&self, card: Card) -> bool {
        self.is_manilha(card) && card.suit == Suit::Diamonds
    }

    /// Non-manilhas score their rank strength (1..=10) whatever the suit;
    /// manilhas score 11 (Diamonds) up to 14 (Clubs).
    pub fn relative_value(&self, card: Card) -> u8 {
        if self.is_manilha(card) {
            Rank::Three.strength() + 1 + card.suit as u8
        } else {
            card.rank.strength()
        }
    }

    /// Steps below the Clubs manilha: zap 0, copas 1, espadilha 2, ouros 3,
    /// a plain Three 4, and so on down.
    pub fn distance_from_top(&self, card: Card) -> u8 {
        TOP_VALUE - self.relative_value(card)
    }

    pub fn compare(&self, a: Card, b: Card) -> Ordering {
        self.relative_value(a).cmp(&self.relative_value(b))
    }

    pub fn beats(&self, a: Card, b: Card) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    /// Same-rank non-manilhas tie; manilhas never do.
    pub fn ties(&self, a: Card, b: Card) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    /// True when no card in `others` beats `card`.
    pub fn is_strongest(&self, card: Card, others: &[Card]) -> bool {
        others.iter().all(|&other| !self.beats(other, card))
    }

    pub fn strongest(&self, cards: &[Card]) -> Option<Card> {
        cards
            .iter()
            .copied()
            .max_by(|&a, &b| self.compare(a, b).then_with(|| a.cmp(&b)))
    }

    pub fn weakest(&self, cards: &[Card]) -> Option<Card> {
        cards
            .iter()
            .copied()
            .min_by(|&a, &b| self.compare(a, b).then_with(|| a.cmp(&b)))
    }

    /// Cards ordered weakest first; equal-strength cards keep a stable order.
    pub fn sorted(&self, cards: &[Card]) -> Vec<Card> {
        let mut sorted = cards.to_vec();
        sorted.sort_by(|&a, &b| self.compare(a, b).then_with(|| a.cmp(&b)));
        sorted
    }
}
