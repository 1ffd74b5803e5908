use proptest::prelude::*;

use crate::domain::test_gens;
use crate::domain::{Card, CardRanking, Rank, Suit, TOP_VALUE};

fn config() -> ProptestConfig {
    bot_test_support::proptest_prelude::config()
}

proptest! {
    #![proptest_config(config())]

    /// Property: the Clubs manilha beats every other card under its vira.
    #[test]
    fn prop_zap_beats_everything(vira in test_gens::card()) {
        let ranking = CardRanking::new(vira);
        let zap = Card::of(ranking.manilha_rank(), Suit::Clubs);
        prop_assert_eq!(ranking.relative_value(zap), TOP_VALUE);
        for other in Card::deck().into_iter().filter(|&c| c != zap) {
            prop_assert!(ranking.beats(zap, other), "{} should beat {} (vira {})", zap, other, vira);
        }
    }

    /// Property: every manilha beats every non-manilha, and manilhas never tie.
    #[test]
    fn prop_manilhas_dominate(vira in test_gens::card(), pair in test_gens::unique_cards(2)) {
        let ranking = CardRanking::new(vira);
        let (a, b) = (pair[0], pair[1]);
        match (ranking.is_manilha(a), ranking.is_manilha(b)) {
            (true, false) => prop_assert!(ranking.beats(a, b)),
            (false, true) => prop_assert!(ranking.beats(b, a)),
            (true, true) => prop_assert!(!ranking.ties(a, b)),
            (false, false) => prop_assert_eq!(ranking.ties(a, b), a.rank == b.rank),
        }
    }

    /// Property: the comparison is antisymmetric and agrees with relative values.
    #[test]
    fn prop_compare_is_consistent(vira in test_gens::card(), a in test_gens::card(), b in test_gens::card()) {
        let ranking = CardRanking::new(vira);
        prop_assert_eq!(ranking.compare(a, b), ranking.compare(b, a).reverse());
        prop_assert_eq!(ranking.beats(a, b), ranking.relative_value(a) > ranking.relative_value(b));
        prop_assert!(ranking.distance_from_top(a) < TOP_VALUE);
    }

    /// Property: strongest is never beaten and weakest never beats anything in the set.
    #[test]
    fn prop_strongest_and_weakest(vira in test_gens::card(), cards in test_gens::unique_cards(3)) {
        let ranking = CardRanking::new(vira);
        let top = ranking.strongest(&cards).expect("non-empty");
        let bottom = ranking.weakest(&cards).expect("non-empty");
        prop_assert!(ranking.is_strongest(top, &cards));
        for &c in &cards {
            prop_assert!(!ranking.beats(bottom, c));
        }
        let sorted = ranking.sorted(&cards);
        prop_assert_eq!(sorted.first().copied(), Some(bottom));
        prop_assert_eq!(sorted.last().copied(), Some(top));
    }

    /// Property: plain card values equal the base rank strength.
    #[test]
    fn prop_plain_value_is_rank_strength(vira in test_gens::card(), rank in test_gens::rank(), suit in test_gens::suit()) {
        let ranking = CardRanking::new(vira);
        let card = Card::of(rank, suit);
        if !ranking.is_manilha(card) {
            prop_assert_eq!(ranking.relative_value(card), rank.strength());
            prop_assert!(ranking.relative_value(card) <= Rank::Three.strength());
        }
    }
}
