/// Property-based tests for board movement using proptest
///
/// These tests verify the bounce-back movement rule across the full range of
/// positions and rolls.
use proptest::prelude::*;
use rogue_goose::game::{DIE_SIDES, FINAL_SQUARE, resolve_move};

proptest! {
    #[test]
    fn test_plain_move_adds_the_roll(position in 0u8..=FINAL_SQUARE, roll in 1u8..=DIE_SIDES) {
        prop_assume!(position + roll <= FINAL_SQUARE);
        prop_assert_eq!(resolve_move(position, roll), position + roll);
    }

    #[test]
    fn test_overshoot_reflects_from_the_end(position in 58u8..=62, roll in 1u8..=DIE_SIDES) {
        prop_assume!(position + roll > FINAL_SQUARE);
        let overshoot = position + roll - FINAL_SQUARE;
        prop_assert_eq!(resolve_move(position, roll), FINAL_SQUARE - overshoot);
    }

    #[test]
    fn test_result_always_on_track(position in 0u8..=FINAL_SQUARE, roll in 1u8..=DIE_SIDES) {
        prop_assert!(resolve_move(position, roll) <= FINAL_SQUARE);
    }

    #[test]
    fn test_bounce_never_reflects_past_zero(position in 0u8..=FINAL_SQUARE, roll in 1u8..=DIE_SIDES) {
        // The largest overshoot on a six-sided die is 6, so no bounce can
        // land below 57, let alone reflect a second time off square 0.
        if position + roll > FINAL_SQUARE {
            prop_assert!(resolve_move(position, roll) >= FINAL_SQUARE - DIE_SIDES);
        }
    }

    #[test]
    fn test_only_exact_landing_reaches_the_end(position in 0u8..=62, roll in 1u8..=DIE_SIDES) {
        let result = resolve_move(position, roll);
        if position + roll != FINAL_SQUARE {
            prop_assert!(result < FINAL_SQUARE);
        } else {
            prop_assert_eq!(result, FINAL_SQUARE);
        }
    }
}
