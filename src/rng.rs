//! 32-bit MT19937 Mersenne Twister.
//!
//! The daily schedule is reproducible only if this generator matches the
//! Matsumoto/Nishimura reference (`mt19937ar.c`) bit for bit, so every
//! recurrence below wraps at 32 bits exactly. A single dropped mask would
//! diverge the entire downstream word sequence.

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// XOR table for the low bit of the mixed word, as in the reference twist.
const MAG: [u32; 2] = [0, MATRIX_A];

/// The reference generator's fallback seed when none was supplied.
const DEFAULT_SEED: u32 = 5489;

/// Deterministic 32-bit generator with the classic 624-word state.
///
/// An instance is meant to be owned by exactly one draw: construct it from
/// the day seed, consume it, drop it. Sharing one across draws would
/// interleave their streams and break reproducibility.
#[derive(Debug, Clone)]
pub struct MersenneTwister {
    state: [u32; N],
    cursor: usize,
}

impl MersenneTwister {
    /// Seeds the generator from a single 32-bit value (`init_genrand`).
    pub fn new(seed: u32) -> Self {
        let mut state = [0u32; N];
        state[0] = seed;
        for i in 1..N {
            let prev = state[i - 1] ^ (state[i - 1] >> 30);
            state[i] = 1_812_433_253u32
                .wrapping_mul(prev)
                .wrapping_add(i as u32);
        }

        // cursor at N forces a twist before the first value is read
        Self { state, cursor: N }
    }

    /// Seeds the generator from a key of arbitrary length (`init_by_array`).
    ///
    /// The day pipeline only ever uses single-integer seeds; this path
    /// exists for parity with the reference engine and its test vectors.
    ///
    /// # Panics
    ///
    /// Panics if `key` is empty. An empty key has no defined seeding
    /// semantics, so it fails fast instead of mis-seeding silently.
    pub fn from_seed_array(key: &[u32]) -> Self {
        assert!(!key.is_empty(), "seed array must not be empty");

        let mut rng = Self::new(19_650_218);
        let mut i = 1usize;
        let mut j = 0usize;

        for _ in 0..N.max(key.len()) {
            let prev = rng.state[i - 1] ^ (rng.state[i - 1] >> 30);
            rng.state[i] = (rng.state[i] ^ prev.wrapping_mul(1_664_525))
                .wrapping_add(key[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= N {
                rng.state[0] = rng.state[N - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }

        for _ in 0..N - 1 {
            let prev = rng.state[i - 1] ^ (rng.state[i - 1] >> 30);
            rng.state[i] = (rng.state[i] ^ prev.wrapping_mul(1_566_083_941))
                .wrapping_sub(i as u32);
            i += 1;
            if i >= N {
                rng.state[0] = rng.state[N - 1];
                i = 1;
            }
        }

        rng.state[0] = 0x8000_0000;
        rng
    }

    /// Returns the next 32-bit value of the stream (`genrand_int32`).
    pub fn next_u32(&mut self) -> u32 {
        if self.cursor >= N {
            self.twist();
        }

        let mut y = self.state[self.cursor];
        self.cursor += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^= y >> 18;
        y
    }

    /// Returns the next value with the top bit dropped, in `[0, 2^31)`
    /// (`genrand_int31`).
    pub fn next_u31(&mut self) -> u32 {
        self.next_u32() >> 1
    }

    /// Regenerates the whole state block in place and rewinds the cursor.
    fn twist(&mut self) {
        for n in 0..N - M {
            let y = (self.state[n] & UPPER_MASK) | (self.state[n + 1] & LOWER_MASK);
            self.state[n] = self.state[n + M] ^ (y >> 1) ^ MAG[(y & 1) as usize];
        }
        for n in N - M..N - 1 {
            let y = (self.state[n] & UPPER_MASK) | (self.state[n + 1] & LOWER_MASK);
            self.state[n] = self.state[n + M - N] ^ (y >> 1) ^ MAG[(y & 1) as usize];
        }
        let y = (self.state[N - 1] & UPPER_MASK) | (self.state[0] & LOWER_MASK);
        self.state[N - 1] = self.state[M - 1] ^ (y >> 1) ^ MAG[(y & 1) as usize];

        self.cursor = 0;
    }
}

impl Default for MersenneTwister {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
