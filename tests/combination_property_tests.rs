//! Property tests for enumeration and distribution.

use proptest::prelude::*;

use ccg_mana::effects::{distribute_mana, ScriptedResponder};
use ccg_mana::mana::{combination_count, possible_combinations, ColorSet, Mana, ManaColor};

/// Non-wildcard color sets: 1-4 distinct colors in any order.
fn explicit_colors() -> impl Strategy<Value = ColorSet> {
    Just(ManaColor::ALL.to_vec())
        .prop_shuffle()
        .prop_flat_map(|colors| (1..=4usize).prop_map(move |n| colors[..n].to_vec()))
        .prop_map(|colors| ColorSet::new(colors).unwrap())
}

/// All five colors, shuffled.
fn five_colors() -> impl Strategy<Value = Vec<ManaColor>> {
    Just(ManaColor::ALL.to_vec()).prop_shuffle()
}

/// Any valid color set, wildcard included.
fn any_colors() -> impl Strategy<Value = ColorSet> {
    prop_oneof![
        explicit_colors(),
        five_colors().prop_map(|colors| ColorSet::new(colors).unwrap()),
    ]
}

proptest! {
    #[test]
    fn enumeration_size_is_stars_and_bars(amount in 1u32..=6, colors in explicit_colors()) {
        let combos = possible_combinations(amount, &colors);
        prop_assert_eq!(Some(combos.len() as u64), combination_count(amount, colors.len()));
    }

    #[test]
    fn enumeration_vectors_sum_to_amount(amount in 1u32..=6, colors in explicit_colors()) {
        for mana in possible_combinations(amount, &colors) {
            prop_assert_eq!(mana.count(), amount);
            prop_assert_eq!(mana.any_count(), 0);
            prop_assert!(ManaColor::ALL
                .into_iter()
                .all(|c| colors.contains(c) || mana.get(c) == 0));
        }
    }

    #[test]
    fn enumeration_is_deterministic(amount in 0u32..=5, colors in explicit_colors()) {
        prop_assert_eq!(
            possible_combinations(amount, &colors),
            possible_combinations(amount, &colors)
        );
    }

    #[test]
    fn any_color_is_one_vector(amount in 1u32..=50, colors in five_colors()) {
        let set = ColorSet::new(colors).unwrap();
        prop_assert!(set.is_any_color());
        prop_assert_eq!(possible_combinations(amount, &set), vec![Mana::any(amount)]);
    }

    #[test]
    fn five_colors_are_offered_in_given_order(total in 1u32..=8, colors in five_colors()) {
        let set = ColorSet::new(colors.clone()).unwrap();
        let mut responder = ScriptedResponder::new([total]);
        let mana = distribute_mana(total, &set, &mut responder);

        let first = &responder.prompts()[0];
        prop_assert!(first.contains(colors[0].name()), "{first}");
        prop_assert_eq!(mana, Mana::zero().with_color(colors[0], total));
    }

    #[test]
    fn distribution_never_overshoots(
        total in 0u32..=8,
        colors in any_colors(),
        answers in prop::collection::vec(0u32..=10, 0..12),
    ) {
        let mut responder = ScriptedResponder::new(answers);
        let mana = distribute_mana(total, &colors, &mut responder);
        prop_assert!(mana.count() <= total);
        prop_assert_eq!(mana.any_count(), 0);
    }

    #[test]
    fn distribution_completes_while_responsive(total in 0u32..=8, colors in any_colors()) {
        // Always answering 1 assigns one mana per question.
        let mut responder = ScriptedResponder::new(std::iter::repeat(1).take(total as usize));
        let mana = distribute_mana(total, &colors, &mut responder);
        prop_assert_eq!(mana.count(), total);
        prop_assert_eq!(mana.any_count(), 0);
        prop_assert_eq!(responder.remaining(), 0);
    }
}
