//! Turn engine - board math and turn resolution.
//!
//! This module provides:
//! - Board math for the 63-square track with bounce-back on overshoot
//! - The turn engine: start, per-turn resolution, restart
//! - The lobby status state machine (`waiting`/`in-progress`/`finished`)
//!
//! Turn order is cyclic over the caller-supplied player list; the store holds
//! no canonical turn sequence.

pub mod board;
pub mod engine;
pub mod errors;

pub use board::{DIE_SIDES, FINAL_SQUARE, resolve_move, roll_die};
pub use engine::{TurnEngine, TurnOutcome};
pub use errors::{GameError, GameResult};
