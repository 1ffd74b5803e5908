use proptest::prelude::*;

use super::{RaiseResponse, TrucoBot, TrucoGuru};
use crate::domain::snapshot::MAO_DE_ONZE_SCORE;
use crate::domain::test_gens;

fn config() -> ProptestConfig {
    bot_test_support::proptest_prelude::config()
}

proptest! {
    #![proptest_config(config())]

    /// Property: no raise when either side is at eleven or in the first round.
    #[test]
    fn prop_no_raise_at_eleven_or_first_round(snapshot in test_gens::snapshot()) {
        let guru = TrucoGuru::default();
        if snapshot.anyone_at_eleven() || snapshot.round_number() == 1 {
            prop_assert!(!guru.decide_if_raises(&snapshot));
        }
    }

    /// Property: identical snapshots give identical decisions.
    #[test]
    fn prop_decisions_are_idempotent(snapshot in test_gens::snapshot()) {
        let a = TrucoGuru::default();
        let b = TrucoGuru::default();
        let copy = snapshot.clone();

        prop_assert_eq!(a.decide_if_raises(&snapshot), b.decide_if_raises(&copy));
        prop_assert_eq!(a.raise_response(&snapshot), b.raise_response(&copy));
        prop_assert_eq!(a.mao_de_onze_response(&snapshot), b.mao_de_onze_response(&copy));
        prop_assert_eq!(a.choose_card(&snapshot), b.choose_card(&copy));
    }

    /// Property: the chosen card always comes from the hand, and only a
    /// later round may play it face down.
    #[test]
    fn prop_chosen_card_is_held(snapshot in test_gens::snapshot_with_hand()) {
        let chosen = TrucoGuru::default().choose_card(&snapshot);
        prop_assert!(chosen.is_ok());
        let chosen = chosen.unwrap();
        prop_assert!(snapshot.hand.contains(&chosen.content()));
        if chosen.is_discard() {
            prop_assert!(snapshot.round_number() > 1);
            prop_assert!(snapshot.opponent_card.is_some());
        }
    }

    /// Property: a stake at the ceiling is always accepted.
    #[test]
    fn prop_ceiling_stake_is_accepted(snapshot in test_gens::snapshot()) {
        let guru = TrucoGuru::default();
        if snapshot.hand_points >= guru.config().raise_ceiling {
            prop_assert_eq!(guru.raise_response(&snapshot), RaiseResponse::Accept);
        }
    }

    /// Property: a response's integer form is always -1, 0 or 1.
    #[test]
    fn prop_response_in_range(snapshot in test_gens::snapshot()) {
        let value = TrucoGuru::default().raise_response(&snapshot).as_i32();
        prop_assert!((-1..=1).contains(&value));
    }

    /// Property: without any manilha, the mão de onze is played only from
    /// a wide lead holding a plain Three.
    #[test]
    fn prop_mao_de_onze_without_manilha(snapshot in test_gens::snapshot()) {
        let ranking = snapshot.ranking();
        let no_manilha = snapshot.hand.iter().all(|&c| !ranking.is_manilha(c));
        if snapshot.score == MAO_DE_ONZE_SCORE && no_manilha {
            let accepts = TrucoGuru::default().mao_de_onze_response(&snapshot);
            let plain_three = snapshot
                .hand
                .iter()
                .any(|c| c.rank == crate::domain::Rank::Three);
            prop_assert_eq!(accepts, snapshot.margin() >= 7 && plain_three);
        }
    }
}
