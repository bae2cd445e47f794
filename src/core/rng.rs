//! Random sources consumed by participants and rounds.
//!
//! ## Key Features
//!
//! - **Injected**: Rounds never own a generator; callers pass `&mut dyn RandomSource`
//! - **Deterministic**: Same seed produces an identical tournament
//! - **Serializable**: O(1) state capture and restore via `GameRngState`
//! - **Scriptable**: `ScriptedSource` replays fixed draws for tests
//!
//! ## Usage
//!
//! ```
//! use rust_rounds::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let p = rng.next_probability();
//! assert!((0.0..1.0).contains(&p));
//!
//! let ability = rng.next_ability();
//! assert!(ability <= 100);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Default inclusive ability range.
pub const DEFAULT_ABILITY_RANGE: (u32, u32) = (0, 100);

/// A uniform probability source plus a bounded ability source.
///
/// Everything random in a tournament goes through this trait, so wiring one
/// instance through all rounds gives a single shared stream.
pub trait RandomSource {
    /// Next value in `[0, 1)`.
    fn next_probability(&mut self) -> f64;

    /// Next ability value inside the source's inclusive range.
    fn next_ability(&mut self) -> u32;

    /// Fair coin: `true` when the next probability is below 0.5.
    fn coin_flip(&mut self) -> bool {
        self.next_probability() < 0.5
    }

    /// Uniform index in `0..n`, derived from one probability draw.
    ///
    /// Returns 0 when `n` is 0.
    fn pick_below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        let idx = (self.next_probability() * f64::from(n)) as u32;
        idx.min(n - 1)
    }
}

/// Seeded production random source.
///
/// Uses ChaCha8 for speed while keeping a reproducible sequence per seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    ability_min: u32,
    ability_max: u32,
}

impl GameRng {
    /// Create a new RNG with the given seed and the default ability range.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_ability_range(seed, DEFAULT_ABILITY_RANGE.0, DEFAULT_ABILITY_RANGE.1)
    }

    /// Create a new RNG with a custom inclusive ability range.
    ///
    /// A reversed range is normalized so `min <= max`, and both ends are
    /// capped at the default maximum.
    #[must_use]
    pub fn with_ability_range(seed: u64, min: u32, max: u32) -> Self {
        let cap = DEFAULT_ABILITY_RANGE.1;
        let (min, max) = (min.min(cap), max.min(cap));
        let (ability_min, ability_max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            ability_min,
            ability_max,
        }
    }

    /// Seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Inclusive ability range.
    #[must_use]
    pub fn ability_range(&self) -> (u32, u32) {
        (self.ability_min, self.ability_max)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            ability_min: self.ability_min,
            ability_max: self.ability_max,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut rng = Self::with_ability_range(state.seed, state.ability_min, state.ability_max);
        rng.inner.set_word_pos(state.word_pos);
        rng
    }
}

impl RandomSource for GameRng {
    fn next_probability(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    fn next_ability(&mut self) -> u32 {
        self.inner.gen_range(self.ability_min..=self.ability_max)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Lowest ability value
    pub ability_min: u32,
    /// Highest ability value
    pub ability_max: u32,
}

/// Deterministic source that cycles through fixed draws.
///
/// Probabilities are clamped into `[0, 1)`. An empty list yields 0.0 (or 0
/// for abilities) forever.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    probabilities: Vec<f64>,
    abilities: Vec<u32>,
    next_p: usize,
    next_a: usize,
}

impl ScriptedSource {
    /// Create a source that replays `probabilities` in a loop.
    pub fn new(probabilities: impl Into<Vec<f64>>) -> Self {
        Self {
            probabilities: probabilities.into(),
            ..Self::default()
        }
    }

    /// Set the ability values replayed by `next_ability`.
    #[must_use]
    pub fn with_abilities(mut self, abilities: impl Into<Vec<u32>>) -> Self {
        self.abilities = abilities.into();
        self
    }

    /// Number of probability draws consumed so far.
    #[must_use]
    pub fn probability_draws(&self) -> usize {
        self.next_p
    }
}

impl RandomSource for ScriptedSource {
    fn next_probability(&mut self) -> f64 {
        if self.probabilities.is_empty() {
            return 0.0;
        }
        let p = self.probabilities[self.next_p % self.probabilities.len()];
        self.next_p += 1;
        p.clamp(0.0, 1.0 - f64::EPSILON)
    }

    fn next_ability(&mut self) -> u32 {
        if self.abilities.is_empty() {
            return 0;
        }
        let a = self.abilities[self.next_a % self.abilities.len()];
        self.next_a += 1;
        a
    }
}
