//! Property-based tests for the rope operations.

mod common;

use proptest::prelude::*;
use ropetree::{Rope, SplitStrategy};

// =============================================================================
// Strategies
// =============================================================================

/// Arbitrary tree shapes with short ASCII fragments, empty ones included.
fn arbitrary_rope() -> impl Strategy<Value = Rope> {
    let leaf = "[a-z]{0,4}".prop_map(|text| Rope::new(&text));
    leaf.prop_recursive(6, 48, 2, |inner| {
        (
            "[a-z]{0,4}",
            proptest::option::of(inner.clone()),
            proptest::option::of(inner),
        )
            .prop_map(|(text, left, right)| Rope::with_children(text, left, right))
    })
}

fn position_in(rope: &Rope, pct: f64) -> usize {
    let len = rope.total_size();
    ((pct * len as f64) as usize).min(len)
}

// =============================================================================
// Split and concatenation
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn split_halves_rejoin_to_original(rope in arbitrary_rope(), pct in 0.0..=1.0f64) {
        common::init();
        let text = rope.to_string();
        let position = position_in(&rope, pct);

        let (head, tail) = rope.split_at(position).unwrap();
        prop_assert_eq!(head.total_size(), position);
        prop_assert_eq!(head.to_string() + &tail.to_string(), text);
    }

    #[test]
    fn structural_split_agrees_with_flattening(rope in arbitrary_rope(), pct in 0.0..=1.0f64) {
        let position = position_in(&rope, pct);
        let (flat_head, flat_tail) = rope.split_at_flattening(position).unwrap();
        let (head, tail) = rope.clone().split_at(position).unwrap();

        prop_assert_eq!(head.to_string(), flat_head.to_string());
        prop_assert_eq!(tail.to_string(), flat_tail.to_string());
    }

    #[test]
    fn structural_split_never_deepens(rope in arbitrary_rope(), pct in 0.0..=1.0f64) {
        let depth = rope.depth();
        let position = position_in(&rope, pct);
        let (head, tail) = rope.split_at(position).unwrap();

        prop_assert!(head.depth() <= depth);
        prop_assert!(tail.depth() <= depth);
    }

    #[test]
    fn split_past_end_fails_without_change(rope in arbitrary_rope(), extra in 1usize..10) {
        let mut copy = rope.clone();
        let position = rope.total_size() + extra;

        prop_assert!(copy.split_off(position).is_err());
        prop_assert_eq!(copy, rope);
    }

    #[test]
    fn concat_is_associative_on_text(
        a in arbitrary_rope(),
        b in arbitrary_rope(),
        c in arbitrary_rope(),
    ) {
        let left = Rope::concat(Rope::concat(a.clone(), b.clone()), c.clone());
        let right = Rope::concat(a, Rope::concat(b, c));
        prop_assert_eq!(left.to_string(), right.to_string());
    }
}

// =============================================================================
// Growing at either end
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prepend_puts_text_first(rope in arbitrary_rope(), text in "[A-Z]{0,5}") {
        let original = rope.to_string();
        let mut grown = rope;
        grown.prepend(&text);
        prop_assert_eq!(grown.to_string(), text + &original);
    }

    #[test]
    fn append_puts_text_last(rope in arbitrary_rope(), text in "[A-Z]{0,5}") {
        let original = rope.to_string();
        let mut grown = rope;
        grown.append(&text);
        prop_assert_eq!(grown.to_string(), original + &text);
    }

    #[test]
    fn concat_right_joins_in_order(a in arbitrary_rope(), b in arbitrary_rope()) {
        let expected = a.to_string() + &b.to_string();
        let total = a.total_size() + b.total_size();
        let mut joined = a;
        joined.concat_right(b);
        prop_assert_eq!(joined.total_size(), total);
        prop_assert_eq!(joined.to_string(), expected);
    }
}

// =============================================================================
// Insertion and deletion
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn delete_undoes_insert(
        rope in arbitrary_rope(),
        text in "[A-Z]{0,6}",
        pct in 0.0..=1.0f64,
        flatten in any::<bool>(),
    ) {
        let strategy = if flatten { SplitStrategy::Flatten } else { SplitStrategy::Structural };
        let original = rope.to_string();
        let location = position_in(&rope, pct);

        let mut edited = rope;
        edited.insert_with(location, &text, strategy).unwrap();
        prop_assert_eq!(
            edited.to_string(),
            format!("{}{}{}", &original[..location], text, &original[location..])
        );

        let removed = edited
            .delete_range_with(location, location + text.len(), strategy)
            .unwrap();
        prop_assert_eq!(removed.to_string(), text);
        prop_assert_eq!(edited.to_string(), original);
    }

    #[test]
    fn delete_range_matches_string_removal(
        rope in arbitrary_rope(),
        a in 0.0..=1.0f64,
        b in 0.0..=1.0f64,
    ) {
        let original = rope.to_string();
        let (start, end) = {
            let (x, y) = (position_in(&rope, a), position_in(&rope, b));
            (x.min(y), x.max(y))
        };

        let mut edited = rope;
        edited.delete_range(start, end).unwrap();
        prop_assert_eq!(
            edited.to_string(),
            format!("{}{}", &original[..start], &original[end..])
        );
    }
}

// =============================================================================
// Rebalancing and mapping
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn rebalance_balances_and_keeps_text(rope in arbitrary_rope()) {
        let text = rope.to_string();
        let mut balanced = rope;
        balanced.rebalance();

        prop_assert!(balanced.is_balanced());
        prop_assert_eq!(balanced.to_string(), text);
    }

    #[test]
    fn rebalance_is_idempotent(rope in arbitrary_rope()) {
        let mut once = rope;
        once.rebalance();
        let mut twice = once.clone();
        twice.rebalance();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn rebalance_after_appends(texts in prop::collection::vec("[a-z]{1,3}", 1..40)) {
        let mut rope = Rope::default();
        for text in &texts {
            rope.append(text);
        }
        rope.rebalance();

        prop_assert!(rope.is_balanced());
        prop_assert_eq!(rope.to_string(), texts.concat());
    }

    #[test]
    fn length_preserving_map_keeps_shape(rope in arbitrary_rope()) {
        let mapped = rope.fmap(str::to_ascii_uppercase);

        prop_assert_eq!(mapped.depth(), rope.depth());
        prop_assert_eq!(mapped.total_size(), rope.total_size());
        prop_assert_eq!(mapped.to_string(), rope.to_string().to_ascii_uppercase());
    }
}
