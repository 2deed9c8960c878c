//! Board math for the 63-square goose track.

use rand::Rng;

/// Terminal square; landing exactly here wins the game
pub const FINAL_SQUARE: u8 = 63;

/// Number of sides on the die
pub const DIE_SIDES: u8 = 6;

/// Roll the die, uniform in `[1, 6]`
pub fn roll_die<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.random_range(1..=DIE_SIDES)
}

/// Resolve a move from `position` with `roll`.
///
/// Overshooting the terminal square bounces back by the overshoot: 61 + 6 =
/// 67 lands on 63 - 4 = 59. A second reflection below zero is unreachable
/// from positions in `[0, 63]`: the largest overshoot on a six-sided die is
/// 6, so the lowest bounce target is 57.
pub fn resolve_move(position: u8, roll: u8) -> u8 {
    debug_assert!(position <= FINAL_SQUARE);
    debug_assert!((1..=DIE_SIDES).contains(&roll));
    let sum = position + roll;
    if sum > FINAL_SQUARE {
        FINAL_SQUARE - (sum - FINAL_SQUARE)
    } else {
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_moves_add_the_roll() {
        assert_eq!(resolve_move(0, 1), 1);
        assert_eq!(resolve_move(30, 6), 36);
        assert_eq!(resolve_move(57, 6), 63);
        assert_eq!(resolve_move(62, 1), 63);
    }

    #[test]
    fn test_overshoot_bounces_back() {
        assert_eq!(resolve_move(60, 6), 60); // 66 -> 63 - 3
        assert_eq!(resolve_move(61, 6), 59); // 67 -> 63 - 4
        assert_eq!(resolve_move(62, 6), 58);
        assert_eq!(resolve_move(59, 5), 62);
    }

    #[test]
    fn test_lowest_reachable_bounce_target() {
        // Worst case overshoot: one short of the end, maximum roll.
        assert_eq!(resolve_move(62, 6), 58);
        for roll in 1..=DIE_SIDES {
            for position in 0..=FINAL_SQUARE {
                let result = resolve_move(position, roll);
                assert!(result <= FINAL_SQUARE);
            }
        }
    }

    #[test]
    fn test_roll_die_stays_in_range() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let roll = roll_die(&mut rng);
            assert!((1..=DIE_SIDES).contains(&roll));
        }
    }
}
