//! Property tests for the game model invariants.

use proptest::prelude::*;
use rustc_hash::FxHashMap;

use concentration::cards::CardId;
use concentration::game::{ChooseOutcome, Concentration, Selection};

fn identifier_counts(game: &Concentration) -> FxHashMap<CardId, usize> {
    let mut counts = FxHashMap::default();
    for card in game.cards() {
        *counts.entry(card.identifier).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn deal_has_two_of_each_identifier(pairs in 0usize..40, seed in any::<u64>()) {
        let game = Concentration::with_seed(pairs, seed);

        prop_assert_eq!(game.len(), pairs * 2);
        let counts = identifier_counts(&game);
        prop_assert_eq!(counts.len(), pairs);
        prop_assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn choices_preserve_invariants(
        pairs in 1usize..10,
        seed in any::<u64>(),
        taps in prop::collection::vec(any::<prop::sample::Index>(), 0..200),
    ) {
        let mut game = Concentration::with_seed(pairs, seed);
        let initial_ids: Vec<CardId> = {
            let mut ids: Vec<_> = game.cards().iter().map(|c| c.identifier).collect();
            ids.sort_unstable();
            ids
        };
        let mut ever_matched = vec![false; game.len()];

        for tap in taps {
            let index = tap.index(game.len());
            let before = game.clone();
            let outcome = game.choose_card(index).unwrap();

            // Matched cards and the selected card are inert
            if before.cards()[index].is_matched {
                prop_assert_eq!(outcome, ChooseOutcome::Inert);
                prop_assert_eq!(&game, &before);
            } else if before.selection() == Selection::SingleFaceUp(index) {
                prop_assert_eq!(outcome, ChooseOutcome::AlreadyFaceUp);
                prop_assert_eq!(&game, &before);
            }

            // Matched is monotonic
            for (i, card) in game.cards().iter().enumerate() {
                prop_assert!(card.is_matched || !ever_matched[i]);
                ever_matched[i] |= card.is_matched;
            }

            // Length and identifier multiset never change
            let mut ids: Vec<_> = game.cards().iter().map(|c| c.identifier).collect();
            ids.sort_unstable();
            prop_assert_eq!(&ids, &initial_ids);

            // A selection always points at a face-up, unmatched card
            if let Some(selected) = game.face_up_index() {
                prop_assert!(game.cards()[selected].is_face_up);
                prop_assert!(!game.cards()[selected].is_matched);
            }

            // Matched cards come in pairs
            let matched_ids: Vec<_> = game.cards().iter().filter(|c| c.is_matched).map(|c| c.identifier).collect();
            for id in &matched_ids {
                prop_assert_eq!(matched_ids.iter().filter(|m| *m == id).count(), 2);
            }
        }
    }

    #[test]
    fn out_of_range_never_mutates(pairs in 0usize..10, seed in any::<u64>(), extra in 0usize..100) {
        let mut game = Concentration::with_seed(pairs, seed);
        let before = game.clone();

        prop_assert!(game.choose_card(game.len() + extra).is_err());
        prop_assert_eq!(game, before);
    }
}
