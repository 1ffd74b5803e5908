//! Card parsing from string representations (e.g., "AS", "2C")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

impl Rank {
    pub fn symbol(self) -> char {
        match self {
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Queen => 'Q',
            Rank::Jack => 'J',
            Rank::King => 'K',
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Rank> {
        Rank::ALL.into_iter().find(|r| r.symbol() == ch)
    }

    /// Upper-case name used by the JSON boundary and config ("ACE", "THREE").
    pub fn name(self) -> &'static str {
        match self {
            Rank::Four => "FOUR",
            Rank::Five => "FIVE",
            Rank::Six => "SIX",
            Rank::Seven => "SEVEN",
            Rank::Queen => "QUEEN",
            Rank::Jack => "JACK",
            Rank::King => "KING",
            Rank::Ace => "ACE",
            Rank::Two => "TWO",
            Rank::Three => "THREE",
        }
    }
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Suit> {
        Suit::ALL.into_iter().find(|s| s.symbol() == ch)
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Diamonds => "DIAMONDS",
            Suit::Spades => "SPADES",
            Suit::Hearts => "HEARTS",
            Suit::Clubs => "CLUBS",
        }
    }
}

impl FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| DomainError::validation(ValidationKind::ParseRank, format!("Invalid rank: {s}")))
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| DomainError::validation(ValidationKind::ParseSuit, format!("Invalid suit: {s}")))
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid =
            || DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"));

        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(invalid());
        };
        // 8, 9 and T are not part of the Truco deck
        let rank = Rank::from_symbol(rank_ch).ok_or_else(invalid)?;
        let suit = Suit::from_symbol(suit_ch).ok_or_else(invalid)?;
        Ok(Card { rank, suit })
    }
}

/// Non-panicking helper to parse card tokens (e.g., "AS", "2C") into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
