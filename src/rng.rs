//! Random draws consumed by the battle formulas.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of every random outcome the formulas need.
pub trait RandomSource {
    /// Uniform integer in `min..=max`.
    fn int_within(&mut self, min: u32, max: u32) -> u32;

    /// Uniform integer in `0..=max`.
    fn int(&mut self, max: u32) -> u32 {
        self.int_within(0, max)
    }

    /// `true` with probability `probability`, clamped to `0.0..=1.0`.
    fn boolean_with_probability(&mut self, probability: f64) -> bool;

    /// `true` with probability `numerator / denominator`.
    fn boolean_with_fraction(&mut self, numerator: u32, denominator: u32) -> bool;

    /// Uniform float in `min..max`.
    fn within_float(&mut self, min: f64, max: f64) -> f64;

    /// Uniformly chosen element, `None` for an empty slice.
    fn pick_one<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let index = self.int_within(0, items.len() as u32 - 1) as usize;
        items.get(index)
    }
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

/// Reproducible source for simulations and replays.
pub type SeededRandom = RngSource<StdRng>;

/// Source drawing from the thread-local generator.
pub type ThreadRandom = RngSource<ThreadRng>;

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn int_within(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    fn boolean_with_probability(&mut self, probability: f64) -> bool {
        if probability.is_nan() {
            return false;
        }
        self.rng.random_bool(probability.clamp(0.0, 1.0))
    }

    fn boolean_with_fraction(&mut self, numerator: u32, denominator: u32) -> bool {
        if denominator == 0 {
            return false;
        }
        if numerator >= denominator {
            return true;
        }
        self.rng.random_ratio(numerator, denominator)
    }

    fn within_float(&mut self, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..max)
    }
}

/// Replays queued outcomes in order. Running out of a queue is a bug in the
/// caller's script and panics with the draw that asked for it.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    ints: VecDeque<u32>,
    bools: VecDeque<bool>,
    floats: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ints(mut self, ints: impl IntoIterator<Item = u32>) -> Self {
        self.ints.extend(ints);
        self
    }

    pub fn with_bools(mut self, bools: impl IntoIterator<Item = bool>) -> Self {
        self.bools.extend(bools);
        self
    }

    pub fn with_floats(mut self, floats: impl IntoIterator<Item = f64>) -> Self {
        self.floats.extend(floats);
        self
    }

    /// True once every queued outcome has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.ints.is_empty() && self.bools.is_empty() && self.floats.is_empty()
    }

    fn next<T: std::fmt::Debug>(queue: &mut VecDeque<T>, reason: &str) -> T {
        match queue.pop_front() {
            Some(outcome) => {
                tracing::trace!(?outcome, reason, "scripted draw");
                outcome
            }
            None => panic!(
                "ScriptedRandom exhausted! Tried to get a value for: '{}'. Need more scripted values.",
                reason
            ),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn int_within(&mut self, _min: u32, _max: u32) -> u32 {
        Self::next(&mut self.ints, "int")
    }

    fn boolean_with_probability(&mut self, _probability: f64) -> bool {
        Self::next(&mut self.bools, "boolean")
    }

    fn boolean_with_fraction(&mut self, _numerator: u32, _denominator: u32) -> bool {
        Self::next(&mut self.bools, "boolean fraction")
    }

    fn within_float(&mut self, _min: f64, _max: f64) -> f64 {
        Self::next(&mut self.floats, "float")
    }
}
