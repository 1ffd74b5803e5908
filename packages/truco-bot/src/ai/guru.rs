//! TrucoGuru: the rule-table bot.
//!
//! Each decision is a static [`RuleSet`]. Predicates and card pickers are
//! small named functions over a [`RuleContext`]; thresholds come from the
//! bot's [`BotConfig`].
//!
//! Raising: never at 11 or in the first round; raise after winning a round
//! while holding an attack card, or when trailing with a cama de gato.
//!
//! Answering a raise: accept at the ceiling; raise again with a casal; accept
//! against an opponent at 11 or when holding the top card after a won round;
//! then by hand strength.
//!
//! Mão de onze: play with a casal or two manilhas, with an attack card when
//! far ahead, or with a strong hand in a close game.
//!
//! Card play: answer the opponent cheaply, draw when the first round was not lost,
//! discard when beaten, and spend the best card only when the round decides
//! the hand.

use tracing::warn;

use super::config::BotConfig;
use super::decision::{CardToPlay, RaiseResponse};
use super::rules::{Outcome, Rule, RuleContext, RuleSet};
use super::trait_def::{BotError, TrucoBot};
use crate::domain::hand_patterns::{
    classify_hand, has_attack_card, has_cama_de_gato, has_casal_maior, has_casal_menor,
    has_double_manilha, HandStrength,
};
use crate::domain::snapshot::MAO_DE_ONZE_SCORE;
use crate::domain::{Card, GameSnapshot, RoundResult};

#[derive(Debug, Clone, Default)]
pub struct TrucoGuru {
    config: BotConfig,
}

impl TrucoGuru {
    pub const NAME: &'static str = "TrucoGuru";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(config: BotConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    fn context<'a>(&'a self, snapshot: &'a GameSnapshot) -> RuleContext<'a> {
        RuleContext::new(snapshot, &self.config)
    }
}

impl TrucoBot for TrucoGuru {
    fn decide_if_raises(&self, snapshot: &GameSnapshot) -> bool {
        RAISE_RULES
            .evaluate(&self.context(snapshot))
            .unwrap_or(false)
    }

    fn raise_response(&self, snapshot: &GameSnapshot) -> RaiseResponse {
        RESPONSE_RULES
            .evaluate(&self.context(snapshot))
            .unwrap_or(RaiseResponse::Accept)
    }

    fn mao_de_onze_response(&self, snapshot: &GameSnapshot) -> bool {
        if snapshot.score != MAO_DE_ONZE_SCORE {
            warn!(
                score = snapshot.score,
                opponent_score = snapshot.opponent_score,
                "mão de onze asked while not at eleven"
            );
        }
        MAO_DE_ONZE_RULES
            .evaluate(&self.context(snapshot))
            .unwrap_or(false)
    }

    fn choose_card(&self, snapshot: &GameSnapshot) -> Result<CardToPlay, BotError> {
        if snapshot.hand.is_empty() {
            return Err(BotError::EmptyHand);
        }
        CARD_RULES
            .evaluate(&self.context(snapshot))
            .ok_or_else(|| BotError::Internal("no card selected".into()))
    }
}

// ---------- Predicates ----------

fn anyone_at_eleven(cx: &RuleContext<'_>) -> bool {
    cx.snapshot.anyone_at_eleven()
}

fn opponent_at_eleven(cx: &RuleContext<'_>) -> bool {
    cx.snapshot.opponent_score == MAO_DE_ONZE_SCORE
}

fn first_round(cx: &RuleContext<'_>) -> bool {
    cx.snapshot.round_number() == 1
}

fn holds_attack_card(cx: &RuleContext<'_>) -> bool {
    has_attack_card(cx.hand(), cx.config.attack_rank, &cx.ranking)
}

fn won_last_with_attack_card(cx: &RuleContext<'_>) -> bool {
    cx.snapshot.last_result() == Some(RoundResult::Won) && holds_attack_card(cx)
}

/// High pair held after a round was lost or drawn.
fn trailing_with_cama_de_gato(cx: &RuleContext<'_>) -> bool {
    cx.snapshot.must_win_round() && has_cama_de_gato(cx.hand(), cx.config.support_rank)
}

fn any_casal(cx: &RuleContext<'_>) -> bool {
    has_casal_maior(cx.hand(), &cx.ranking) || has_casal_menor(cx.hand(), &cx.ranking)
}

fn double_manilha(cx: &RuleContext<'_>) -> bool {
    has_double_manilha(cx.hand(), &cx.ranking)
}

fn at_raise_ceiling(cx: &RuleContext<'_>) -> bool {
    cx.snapshot.hand_points >= cx.config.raise_ceiling
}

/// The first or the latest round was won, and the best held card has no
/// better among the held and open cards.
fn holds_top_card_after_win(cx: &RuleContext<'_>) -> bool {
    let won = |r: Option<RoundResult>| r == Some(RoundResult::Won);
    if !(won(cx.snapshot.first_result()) || won(cx.snapshot.last_result())) {
        return false;
    }
    if !holds_attack_card(cx) {
        return false;
    }
    let Some(best) = cx.ranking.strongest(cx.hand()) else {
        return false;
    };
    let seen: Vec<Card> = cx
        .hand()
        .iter()
        .chain(&cx.snapshot.open_cards)
        .copied()
        .collect();
    cx.ranking.is_strongest(best, &seen)
}

fn strength(cx: &RuleContext<'_>) -> HandStrength {
    classify_hand(cx.hand(), cx.config.support_rank, &cx.ranking)
}

fn strong_hand(cx: &RuleContext<'_>) -> bool {
    strength(cx) == HandStrength::Strong
}

fn weak_hand(cx: &RuleContext<'_>) -> bool {
    strength(cx) == HandStrength::Weak
}

fn wide_lead_with_attack_card(cx: &RuleContext<'_>) -> bool {
    cx.snapshot.margin() >= cx.config.wide_margin && holds_attack_card(cx)
}

fn close_game_with_strong_hand(cx: &RuleContext<'_>) -> bool {
    let margin = cx.snapshot.margin();
    (cx.config.narrow_margin_floor..=cx.config.narrow_margin).contains(&margin) && strong_hand(cx)
}

fn round_one_with_casal_maior(cx: &RuleContext<'_>) -> bool {
    first_round(cx) && has_casal_maior(cx.hand(), &cx.ranking)
}

fn answering(cx: &RuleContext<'_>) -> bool {
    cx.snapshot.opponent_card.is_some()
}

/// A draw now either closes a hand whose first round was won, or carries a
/// drawn hand into the next round.
fn draw_keeps_hand(cx: &RuleContext<'_>) -> bool {
    answering(cx)
        && matches!(
            cx.snapshot.first_result(),
            Some(RoundResult::Won | RoundResult::Drawn)
        )
}

fn beaten_after_first_round(cx: &RuleContext<'_>) -> bool {
    !first_round(cx) && answering(cx) && cheapest_winner(cx).is_none()
}

fn leading_a_deciding_round(cx: &RuleContext<'_>) -> bool {
    !answering(cx) && cx.snapshot.must_win_round()
}

// ---------- Card pickers ----------

fn cheapest_winner(cx: &RuleContext<'_>) -> Option<Card> {
    let opponent = cx.snapshot.opponent_card?;
    let winners: Vec<Card> = cx
        .hand()
        .iter()
        .copied()
        .filter(|&c| cx.ranking.beats(c, opponent))
        .collect();
    cx.ranking.weakest(&winners)
}

fn play_cheapest_winner(cx: &RuleContext<'_>) -> Option<CardToPlay> {
    cheapest_winner(cx).map(CardToPlay::of)
}

fn play_tying_card(cx: &RuleContext<'_>) -> Option<CardToPlay> {
    let opponent = cx.snapshot.opponent_card?;
    cx.hand()
        .iter()
        .copied()
        .find(|&c| cx.ranking.ties(c, opponent))
        .map(CardToPlay::of)
}

/// Weakest card that is neither zap nor copas.
fn play_weakest_outside_casal(cx: &RuleContext<'_>) -> Option<CardToPlay> {
    let spare: Vec<Card> = cx
        .hand()
        .iter()
        .copied()
        .filter(|&c| !cx.ranking.is_zap(c) && !cx.ranking.is_copas(c))
        .collect();
    cx.ranking.weakest(&spare).map(CardToPlay::of)
}

fn discard_weakest(cx: &RuleContext<'_>) -> Option<CardToPlay> {
    cx.ranking.weakest(cx.hand()).map(CardToPlay::discard)
}

fn play_strongest(cx: &RuleContext<'_>) -> Option<CardToPlay> {
    cx.ranking.strongest(cx.hand()).map(CardToPlay::of)
}

fn play_weakest(cx: &RuleContext<'_>) -> Option<CardToPlay> {
    cx.ranking.weakest(cx.hand()).map(CardToPlay::of)
}

// ---------- Rule tables ----------

pub(crate) static RAISE_RULES: RuleSet<bool> = RuleSet {
    decision: "decide_if_raises",
    rules: &[
        Rule {
            name: "score_at_eleven",
            when: anyone_at_eleven,
            then: Outcome::Always(false),
        },
        Rule {
            name: "first_round",
            when: first_round,
            then: Outcome::Always(false),
        },
        Rule {
            name: "won_last_with_attack_card",
            when: won_last_with_attack_card,
            then: Outcome::Always(true),
        },
        Rule {
            name: "trailing_with_cama_de_gato",
            when: trailing_with_cama_de_gato,
            then: Outcome::Always(true),
        },
    ],
    fallback: Outcome::Always(false),
};

pub(crate) static RESPONSE_RULES: RuleSet<RaiseResponse> = RuleSet {
    decision: "raise_response",
    rules: &[
        Rule {
            name: "at_raise_ceiling",
            when: at_raise_ceiling,
            then: Outcome::Always(RaiseResponse::Accept),
        },
        Rule {
            name: "casal",
            when: any_casal,
            then: Outcome::Always(RaiseResponse::RaiseAgain),
        },
        Rule {
            name: "opponent_at_eleven",
            when: opponent_at_eleven,
            then: Outcome::Always(RaiseResponse::Accept),
        },
        Rule {
            name: "top_card_after_win",
            when: holds_top_card_after_win,
            then: Outcome::Always(RaiseResponse::Accept),
        },
        Rule {
            name: "strong_hand",
            when: strong_hand,
            then: Outcome::Always(RaiseResponse::RaiseAgain),
        },
        Rule {
            name: "weak_hand",
            when: weak_hand,
            then: Outcome::Always(RaiseResponse::Decline),
        },
    ],
    fallback: Outcome::Always(RaiseResponse::Accept),
};

pub(crate) static MAO_DE_ONZE_RULES: RuleSet<bool> = RuleSet {
    decision: "mao_de_onze_response",
    rules: &[
        Rule {
            name: "casal",
            when: any_casal,
            then: Outcome::Always(true),
        },
        Rule {
            name: "double_manilha",
            when: double_manilha,
            then: Outcome::Always(true),
        },
        Rule {
            name: "wide_lead_with_attack_card",
            when: wide_lead_with_attack_card,
            then: Outcome::Always(true),
        },
        Rule {
            name: "close_game_with_strong_hand",
            when: close_game_with_strong_hand,
            then: Outcome::Always(true),
        },
    ],
    fallback: Outcome::Always(false),
};

pub(crate) static CARD_RULES: RuleSet<CardToPlay> = RuleSet {
    decision: "choose_card",
    rules: &[
        Rule {
            name: "save_casal_maior",
            when: round_one_with_casal_maior,
            then: Outcome::Derive(play_weakest_outside_casal),
        },
        Rule {
            name: "beat_opponent",
            when: answering,
            then: Outcome::Derive(play_cheapest_winner),
        },
        Rule {
            name: "draw_to_keep_hand",
            when: draw_keeps_hand,
            then: Outcome::Derive(play_tying_card),
        },
        Rule {
            name: "discard_when_beaten",
            when: beaten_after_first_round,
            then: Outcome::Derive(discard_weakest),
        },
        Rule {
            name: "lead_deciding_round",
            when: leading_a_deciding_round,
            then: Outcome::Derive(play_strongest),
        },
    ],
    fallback: Outcome::Derive(play_weakest),
};
