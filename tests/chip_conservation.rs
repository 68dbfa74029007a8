//! Chip conservation property tests for the layered pot.
//!
//! These tests verify the accounting invariants over arbitrary
//! contribution sequences:
//! - splitting redistributes chips but never creates or destroys them
//! - no layer ever stores a negative amount
//! - per-player contributions add up to the pot total
//! - the open layer stays uniform after every operation
//! - rejected contributions leave the pot untouched

use proptest::prelude::*;
use sidepot::{Chips, Pot, PotError, SeatIndex};

/// Strategy: one contribution event from a 6-seat table.
fn contribution_strategy() -> impl Strategy<Value = (SeatIndex, Chips)> {
    (0usize..6, 0i64..=500)
}

/// Strategy: a short betting history.
fn history_strategy() -> impl Strategy<Value = Vec<(SeatIndex, Chips)>> {
    prop::collection::vec(contribution_strategy(), 1..40)
}

/// Apply a whole history to a fresh pot.
fn pot_from_history(history: &[(SeatIndex, Chips)]) -> Pot<SeatIndex> {
    let mut pot: Pot<SeatIndex> = Pot::default();
    for &(seat, amount) in history {
        pot.add_chips(seat, amount).unwrap();
    }
    pot
}

proptest! {
    /// Every accepted contribution grows the total by exactly its amount.
    #[test]
    fn test_total_equals_sum_of_accepted_amounts(history in history_strategy()) {
        let pot = pot_from_history(&history);
        let wagered: Chips = history.iter().map(|&(_, amount)| amount).sum();
        prop_assert_eq!(pot.get_total(), wagered);
    }

    /// No layer, settled or open, ever stores a negative amount.
    #[test]
    fn test_layers_never_hold_negative_chips(history in history_strategy()) {
        let pot = pot_from_history(&history);
        for side_pot in pot.side_pots() {
            for &chips in side_pot.values() {
                prop_assert!(chips >= 0, "settled layer holds {chips}");
            }
        }
        for &chips in pot.open_layer().values() {
            prop_assert!(chips >= 0, "open layer holds {chips}");
        }
    }

    /// Summing each seat's recorded contribution recovers the total.
    #[test]
    fn test_player_contributions_sum_to_total(history in history_strategy()) {
        let pot = pot_from_history(&history);
        let per_seat: Chips = (0..6).map(|seat| pot.get_contribution(&seat)).sum();
        prop_assert_eq!(per_seat, pot.get_total());
    }

    /// The open layer is uniform after every operation: archiving leaves a
    /// single member, joining matches the level, splitting gives every
    /// carrier the same leftover.
    #[test]
    fn test_open_layer_stays_uniform(history in history_strategy()) {
        let mut pot: Pot<SeatIndex> = Pot::default();
        for (seat, amount) in history {
            pot.add_chips(seat, amount).unwrap();
            let mut levels = pot.open_layer().values();
            if let Some(&first) = levels.next() {
                prop_assert!(levels.all(|&chips| chips == first));
            }
        }
    }

    /// A pot never settles more side pots than contributions it accepted.
    #[test]
    fn test_side_pot_count_bounded_by_history(history in history_strategy()) {
        let pot = pot_from_history(&history);
        prop_assert!(pot.get_num_side_pots() <= history.len());
    }

    /// A negative contribution errors and leaves the pot exactly as it was.
    #[test]
    fn test_rejected_contribution_is_a_no_op(
        history in history_strategy(),
        seat in 0usize..6,
        amount in 1i64..=500,
    ) {
        let mut pot = pot_from_history(&history);
        let total = pot.get_total();
        let num_side_pots = pot.get_num_side_pots();
        let open = pot.open_layer().clone();

        let err = pot.add_chips(seat, -amount).unwrap_err();
        prop_assert_eq!(err, PotError::InvalidAmount(-amount));
        prop_assert_eq!(pot.get_total(), total);
        prop_assert_eq!(pot.get_num_side_pots(), num_side_pots);
        prop_assert_eq!(pot.open_layer(), &open);
    }

    /// Reset always zeroes the pot and never disturbs its id.
    #[test]
    fn test_reset_zeroes_total_and_keeps_id(history in history_strategy()) {
        let mut pot = pot_from_history(&history);
        let id = pot.id();
        pot.reset();
        prop_assert!(pot.is_empty());
        prop_assert_eq!(pot.get_num_side_pots(), 0);
        prop_assert_eq!(pot.id(), id);
    }
}
