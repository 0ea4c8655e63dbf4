//! Random number generation behind a single seam.
//!
//! The engine owns exactly one [`RandomSource`]; damage jitter, wander
//! rolls, special-attack triggers and spawn tables all draw from it. Swap in
//! [`ScriptedRng`] (or a seeded [`PcgRng`]) to reproduce a scenario.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::state::Direction;

/// Stateful generator consumed by combat, AI and spawning.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[min, max]`; returns `min` if the range is empty.
    fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max.abs_diff(min)) + 1;
        let offset = u64::from(self.next_u32()) % span;
        (i64::from(min) + offset as i64) as i32
    }

    /// Damage jitter in `{-1, 0, 1}`.
    fn jitter(&mut self) -> i32 {
        self.range_inclusive(-1, 1)
    }

    fn coin_flip(&mut self) -> bool {
        self.next_u32() % 2 == 0
    }

    /// True with probability `percent / 100`.
    fn chance(&mut self, percent: u32) -> bool {
        self.next_u32() % 100 < percent
    }

    /// Uniformly chosen cardinal direction.
    fn cardinal(&mut self) -> Direction {
        Direction::CARDINALS[self.pick_index(Direction::CARDINALS.len())]
    }

    /// Uniform index into a collection of `len` elements (`0` if empty).
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.next_u32() as usize % len
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 64-bit LCG state, 32-bit output through an xorshift and a
/// state-dependent rotation. Same seed, same sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
    seed: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: 0, seed };
        rng.state = Self::pcg_step(rng.state.wrapping_add(seed));
        rng.state = Self::pcg_step(rng.state);
        rng
    }

    /// Seeds once from the wall clock.
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// `state' = state × multiplier + increment (mod 2^64)`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RandomSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

/// Replays a fixed cycle of raw values; for tests and recorded replays.
///
/// Value `v` maps through the trait's default methods, e.g. `jitter()`
/// yields `v % 3 - 1` and `cardinal()` yields `CARDINALS[v % 4]`
/// (up, down, left, right).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedRng {
    values: Vec<u32>,
    cursor: usize,
    draws: usize,
}

impl ScriptedRng {
    /// An empty script behaves as an endless stream of zeros.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            cursor: 0,
            draws: 0,
        }
    }

    /// Total values handed out so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}
