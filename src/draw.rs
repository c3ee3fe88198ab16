//! Constrained quartet drawing.
//!
//! Turns the raw generator stream into the day's four secret words:
//! warm up the generator, sample four indices against the answer list,
//! and redraw until the words are pairwise distinct and none of them is
//! on the exclusion list.

use std::collections::HashSet;
use std::ops::Range;

use rayon::prelude::*;
use thiserror::Error;

use crate::rng::MersenneTwister;

/// Number of initial 31-bit draws discarded before sampling begins.
pub const WARMUP_DRAWS: usize = 4;

/// Redraw ceiling before a draw is declared exhausted.
///
/// With at least five usable words the acceptance chance per candidate is
/// at worst a few percent, so the cap only ever triggers for inputs that
/// can never satisfy the constraints.
pub const MAX_ATTEMPTS: u32 = 10_000;

/// Errors produced while drawing a quartet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// The word list has no entries, so there is nothing to index into.
    #[error("word list is empty")]
    EmptyWordList,
    /// No candidate passed the constraints within [`MAX_ATTEMPTS`] redraws.
    #[error("no valid quartet within {attempts} attempts; the word list is too small or over-excluded")]
    Exhausted { attempts: u32 },
}

/// Acceptance predicate for a candidate quartet: all four words pairwise
/// distinct and none of them excluded.
pub fn is_valid_quartet(candidate: &[&str; 4], exclusions: &HashSet<String>) -> bool {
    let distinct = (0..4).all(|i| (i + 1..4).all(|j| candidate[i] != candidate[j]));
    distinct && candidate.iter().all(|word| !exclusions.contains(*word))
}

/// Draws daily word quartets from an ordered answer list.
///
/// The list order is semantically meaningful: sampled indices point into
/// it, so reordering or removing entries changes every puzzle.
#[derive(Debug, Clone)]
pub struct QuartetDrawer {
    words: Vec<String>,
    exclusions: HashSet<String>,
}

impl QuartetDrawer {
    pub fn new(words: Vec<String>, exclusions: HashSet<String>) -> Result<Self, DrawError> {
        if words.is_empty() {
            return Err(DrawError::EmptyWordList);
        }

        log::debug!(
            "drawer ready: {} words, {} excluded",
            words.len(),
            exclusions.len()
        );
        Ok(Self { words, exclusions })
    }

    /// Draws one quartet from `rng`, warm-up included.
    ///
    /// The generator is consumed statefully: rejected candidates advance
    /// the stream just like accepted ones. Use a fresh generator per draw
    /// (see [`draw_for_seed`](Self::draw_for_seed)); reusing one would
    /// splice two puzzles into the same stream.
    pub fn draw(&self, rng: &mut MersenneTwister) -> Result<[String; 4], DrawError> {
        self.draw_counted(rng).map(|(quartet, _)| quartet)
    }

    /// Like [`draw`](Self::draw), also reporting the 1-based attempt on
    /// which the quartet was accepted.
    pub fn draw_counted(
        &self,
        rng: &mut MersenneTwister,
    ) -> Result<([String; 4], u32), DrawError> {
        for _ in 0..WARMUP_DRAWS {
            rng.next_u31();
        }

        for attempt in 1..=MAX_ATTEMPTS {
            let candidate = [
                self.pick(rng),
                self.pick(rng),
                self.pick(rng),
                self.pick(rng),
            ];
            if is_valid_quartet(&candidate, &self.exclusions) {
                log::trace!("quartet accepted on attempt {attempt}");
                return Ok((candidate.map(str::to_owned), attempt));
            }
        }

        log::debug!("draw exhausted after {MAX_ATTEMPTS} attempts");
        Err(DrawError::Exhausted {
            attempts: MAX_ATTEMPTS,
        })
    }

    /// Constructs a fresh generator for `seed` and draws its quartet.
    pub fn draw_for_seed(&self, seed: u32) -> Result<[String; 4], DrawError> {
        let mut rng = MersenneTwister::new(seed);
        self.draw(&mut rng)
    }

    fn pick(&self, rng: &mut MersenneTwister) -> &str {
        &self.words[rng.next_u31() as usize % self.words.len()]
    }

    /// Average number of candidate quartets consumed per accepted draw
    /// across a range of seeds.
    pub fn benchmark_average_attempts(&self, seeds: Range<u32>) -> Result<f64, DrawError> {
        let seed_count = seeds.len();
        let total = seeds
            .into_par_iter()
            .map(|seed| {
                let mut rng = MersenneTwister::new(seed);
                self.draw_counted(&mut rng)
                    .map(|(_, attempts)| u64::from(attempts))
            })
            .sum::<Result<u64, DrawError>>()?;

        Ok(total as f64 / seed_count as f64)
    }

    /// Distribution of accepted-attempt numbers across a range of seeds.
    pub fn benchmark_attempt_distribution(
        &self,
        seeds: Range<u32>,
    ) -> Result<Vec<(u32, usize)>, DrawError> {
        let attempt_counts: Vec<u32> = seeds
            .into_par_iter()
            .map(|seed| {
                let mut rng = MersenneTwister::new(seed);
                self.draw_counted(&mut rng).map(|(_, attempts)| attempts)
            })
            .collect::<Result<_, _>>()?;

        let max_attempts = attempt_counts.iter().copied().max().unwrap_or(0);
        let mut distribution = vec![0usize; max_attempts as usize + 1];

        for count in attempt_counts {
            distribution[count as usize] += 1;
        }

        Ok(distribution
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .map(|(attempts, count)| (attempts as u32, count))
            .collect())
    }
}
