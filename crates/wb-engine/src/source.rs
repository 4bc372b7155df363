//! Sources of random die faces.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A capability producing uniformly distributed die faces.
///
/// Each drawn value is independent and uniform in `[1, sides]`. The
/// engine draws everything it needs through this trait, so a host can
/// substitute a seeded or scripted source and replay any evaluation.
pub trait RandomSource {
    /// Draw `count` independent faces of a `sides`-sided die.
    fn draw(&mut self, count: usize, sides: u32) -> Vec<u32>;
}

/// A random source backed by any [`rand::Rng`].
#[derive(Debug)]
pub struct RngSource<R> {
    rng: R,
}

/// The source hosts use unless they bring their own RNG.
pub type DefaultSource = RngSource<StdRng>;

impl<R: Rng> RngSource<R> {
    /// Wrap an existing RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl DefaultSource {
    /// Deterministic source for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn draw(&mut self, count: usize, sides: u32) -> Vec<u32> {
        (0..count).map(|_| self.rng.random_range(1..=sides)).collect()
    }
}

/// A source replaying a fixed sequence of faces.
///
/// Used by tests to pin down exact outcomes and by hosts to replay a
/// logged evaluation. Draws ignore the requested side count and panic
/// when the script runs out.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    faces: VecDeque<u32>,
}

impl ScriptedSource {
    /// Replay the given faces in order.
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
        }
    }

    /// Faces not yet consumed.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl RandomSource for ScriptedSource {
    fn draw(&mut self, count: usize, _sides: u32) -> Vec<u32> {
        (0..count)
            .map(|_| self.faces.pop_front().expect("scripted source exhausted"))
            .collect()
    }
}
