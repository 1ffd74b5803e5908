//! Named hand patterns.
//!
//! Each classifier looks only at the held cards and the hand's
//! [`CardRanking`]; thresholds come in as ranks so callers decide how
//! demanding "strong" is.

use super::cards_logic::CardRanking;
use super::cards_types::{Card, Rank};

/// Coarse hand quality used when answering a raise or a mão de onze.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HandStrength {
    Strong,
    Average,
    Weak,
}

fn holds(hand: &[Card], ranking: &CardRanking, pred: fn(&CardRanking, Card) -> bool) -> bool {
    hand.iter().any(|&c| pred(ranking, c))
}

/// Zap and copas together.
pub fn has_casal_maior(hand: &[Card], ranking: &CardRanking) -> bool {
    holds(hand, ranking, CardRanking::is_zap) && holds(hand, ranking, CardRanking::is_copas)
}

/// Espadilha and ouros together.
pub fn has_casal_menor(hand: &[Card], ranking: &CardRanking) -> bool {
    holds(hand, ranking, CardRanking::is_espadilha) && holds(hand, ranking, CardRanking::is_ouros)
}

/// Zap and espadilha together.
pub fn has_casal_preto(hand: &[Card], ranking: &CardRanking) -> bool {
    holds(hand, ranking, CardRanking::is_zap) && holds(hand, ranking, CardRanking::is_espadilha)
}

/// Copas and ouros together.
pub fn has_casal_vermelho(hand: &[Card], ranking: &CardRanking) -> bool {
    holds(hand, ranking, CardRanking::is_copas) && holds(hand, ranking, CardRanking::is_ouros)
}

pub fn count_manilhas(hand: &[Card], ranking: &CardRanking) -> usize {
    hand.iter().filter(|&&c| ranking.is_manilha(c)).count()
}

pub fn has_double_manilha(hand: &[Card], ranking: &CardRanking) -> bool {
    count_manilhas(hand, ranking) >= 2
}

/// Two held cards of the same rank, that rank at least `pair_rank`.
///
/// Manilha status is ignored: a pair of aces counts under any vira.
pub fn has_cama_de_gato(hand: &[Card], pair_rank: Rank) -> bool {
    hand.iter().enumerate().any(|(i, a)| {
        a.rank >= pair_rank && hand[i + 1..].iter().any(|b| b.rank == a.rank)
    })
}

/// True when `card` is at least as strong as a plain card of `rank`.
/// Manilhas always qualify.
pub fn reaches(card: Card, rank: Rank, ranking: &CardRanking) -> bool {
    ranking.relative_value(card) >= rank.strength()
}

/// Some held card reaches `attack_rank`.
pub fn has_attack_card(hand: &[Card], attack_rank: Rank, ranking: &CardRanking) -> bool {
    hand.iter().any(|&c| reaches(c, attack_rank, ranking))
}

/// A manilha backed by at least one other card reaching `support_rank`.
pub fn is_strong_hand(hand: &[Card], support_rank: Rank, ranking: &CardRanking) -> bool {
    hand.iter().enumerate().any(|(i, &manilha)| {
        ranking.is_manilha(manilha)
            && hand
                .iter()
                .enumerate()
                .any(|(j, &other)| i != j && reaches(other, support_rank, ranking))
    })
}

/// Not strong, and at most one card reaching `support_rank`.
pub fn is_weak_hand(hand: &[Card], support_rank: Rank, ranking: &CardRanking) -> bool {
    let supporting = hand
        .iter()
        .filter(|&&c| reaches(c, support_rank, ranking))
        .count();
    supporting < 2 && !is_strong_hand(hand, support_rank, ranking)
}

pub fn classify_hand(hand: &[Card], support_rank: Rank, ranking: &CardRanking) -> HandStrength {
    if is_strong_hand(hand, support_rank, ranking) {
        HandStrength::Strong
    } else if is_weak_hand(hand, support_rank, ranking) {
        HandStrength::Weak
    } else {
        HandStrength::Average
    }
}
