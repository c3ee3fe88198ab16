//! # Quordle Daily
//!
//! Deterministic generator for Quordle's four daily secret words.
//!
//! The web game schedules its puzzles by seeding an MT19937 Mersenne
//! Twister with the number of days since 2022-01-24 and rejection-sampling
//! four distinct, non-excluded words from its answer list. This crate
//! reproduces that draw bit for bit, so any date maps to the same quartet
//! here as it does in the game.

pub mod daily;
pub mod draw;
pub mod rng;

pub use draw::{DrawError, QuartetDrawer};
pub use rng::MersenneTwister;

use std::collections::HashSet;

/// Word length for the puzzle
pub const WORD_LENGTH: usize = 5;

/// Words withheld from the daily draw.
///
/// They stay in the answer list, since removing them would renumber every
/// later index and so change every historical puzzle. The drawer rejects
/// any quartet containing one instead.
pub const EXCLUDED_WORDS: [&str; 6] = ["gypsy", "gipsy", "mammy", "agora", "slave", "hussy"];

/// Load the answer list from the embedded file
pub fn load_word_list() -> Vec<String> {
    include_str!("../dictionary/answers.txt")
        .lines()
        .filter(|line| !line.is_empty())
        .map(|s| s.to_lowercase())
        .collect()
}

/// The exclusion set in the form [`QuartetDrawer`] consumes
pub fn excluded_words() -> HashSet<String> {
    EXCLUDED_WORDS.iter().map(|s| s.to_string()).collect()
}
