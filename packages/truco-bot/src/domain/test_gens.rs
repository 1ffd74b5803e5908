// Proptest generators for domain types.
// Cards drawn together are always distinct, so generated snapshots pass the builder.

use proptest::prelude::*;
use proptest::sample::{select, subsequence};

use crate::domain::{Card, GameSnapshot, Rank, RoundResult, Suit};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    select(Suit::ALL.to_vec())
}

/// Generate a random Rank
pub fn rank() -> impl Strategy<Value = Rank> {
    select(Rank::ALL.to_vec())
}

pub fn card() -> impl Strategy<Value = Card> {
    (rank(), suit()).prop_map(|(rank, suit)| Card::of(rank, suit))
}

/// Generate `count` distinct cards in random order.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    subsequence(Card::deck(), count).prop_shuffle()
}

pub fn round_result() -> impl Strategy<Value = RoundResult> {
    prop_oneof![
        Just(RoundResult::Won),
        Just(RoundResult::Lost),
        Just(RoundResult::Drawn),
    ]
}

/// Stakes a standard game can reach.
pub fn hand_points() -> impl Strategy<Value = u8> {
    select(vec![1u8, 3, 6, 9, 12])
}

/// Valid snapshot: a vira, 0..=3 held cards, maybe an opponent card on the
/// table, 0..=2 completed rounds and scores below 12.
pub fn snapshot() -> impl Strategy<Value = GameSnapshot> {
    (
        unique_cards(5),
        0usize..=3,
        any::<bool>(),
        prop::collection::vec(round_result(), 0..=2),
        hand_points(),
        0u8..12,
        0u8..12,
    )
        .prop_map(|(cards, hand_len, with_opp, results, stake, score, opp)| {
            let vira = cards[0];
            let hand = cards[1..=hand_len].to_vec();
            let mut open_cards = vec![vira];
            let mut builder = GameSnapshot::builder();
            if with_opp {
                builder = builder.opponent_card(cards[4]);
                open_cards.push(cards[4]);
            }
            builder
                .game_info(results, open_cards, vira, stake)
                .bot_info(hand, score)
                .opponent_score(opp)
                .build()
                .expect("generated snapshot satisfies builder invariants")
        })
}

/// Like [`snapshot`] but the bot always holds at least one card.
pub fn snapshot_with_hand() -> impl Strategy<Value = GameSnapshot> {
    snapshot().prop_filter("bot holds a card", |s| !s.hand.is_empty())
}
