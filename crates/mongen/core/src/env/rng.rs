//! RNG oracle for deterministic random number generation.
//!
//! Generation consumes uniform integer draws through a trait so the whole
//! pipeline is reproducible given a seed. How draws are produced is the
//! oracle's business; this module only fixes how they are consumed.
//!
//! # Determinism
//!
//! All RNG implementations must be deterministic: given the same seed,
//! they must produce the same sequence of random numbers. Game balance
//! tests and replay both depend on it.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. Fast, small, and passes the
/// usual statistical batteries, which is all monster generation needs.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the PCG state by one LCG step.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Mix a game seed with a draw cursor and context into a per-draw seed.
///
/// Constants are SplitMix64/FxHash multipliers; the final avalanche spreads
/// low-entropy cursors across the whole output range.
pub fn compute_seed(game_seed: u64, cursor: u64, context: u32) -> u64 {
    let mut hash = game_seed;

    hash ^= cursor.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x517cc1b727220a95);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Sequential draw stream over an [`RngOracle`].
///
/// Generation routines take many ordered draws (three part selections, a
/// dozen demon stat rolls). The stream owns the cursor so every draw gets a
/// fresh per-draw seed while the caller keeps a single game seed.
pub struct RngStream<'a> {
    rng: &'a dyn RngOracle,
    seed: u64,
    context: u32,
    cursor: u64,
}

impl<'a> RngStream<'a> {
    pub fn new(rng: &'a dyn RngOracle, seed: u64, context: u32) -> Self {
        Self {
            rng,
            seed,
            context,
            cursor: 0,
        }
    }

    /// Next raw 32-bit draw. Advances the cursor.
    pub fn draw(&mut self) -> u32 {
        let per_draw = compute_seed(self.seed, self.cursor, self.context);
        self.cursor += 1;
        self.rng.next_u32(per_draw)
    }

    /// Uniform value in `[0, bound)`. `bound` of 0 yields 0.
    pub fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.draw() % bound
    }

    /// Uniform value in `[min, max]` inclusive.
    pub fn range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (max - min + 1) as u32;
        min + self.below(span) as i32
    }

    /// Roll a die with N sides (1-N inclusive).
    pub fn roll_die(&mut self, sides: u32) -> i32 {
        (self.below(sides.max(1)) + 1) as i32
    }

    /// Sum of `count` rolls of a `sides`-sided die.
    pub fn roll_dice(&mut self, count: u32, sides: u32) -> i32 {
        (0..count).map(|_| self.roll_die(sides)).sum()
    }

    /// True once in `n` on average.
    pub fn one_chance_in(&mut self, n: u32) -> bool {
        self.below(n.max(1)) == 0
    }

    /// Fair coin.
    pub fn coinflip(&mut self) -> bool {
        self.one_chance_in(2)
    }
}
