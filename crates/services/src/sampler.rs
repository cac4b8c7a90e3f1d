use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A simple random-index abstraction for deterministic sampling in services
/// and tests.
#[derive(Debug, Clone, Default)]
pub enum Sampler {
    /// Thread-local OS-seeded randomness.
    #[default]
    Default,
    /// Reproducible randomness from a fixed seed.
    Seeded(StdRng),
    /// A fixed sequence of indices, consumed front to back. Out-of-range
    /// entries are taken modulo the collection length.
    Scripted(VecDeque<usize>),
}

impl Sampler {
    /// Returns a sampler backed by the thread-local generator.
    #[must_use]
    pub fn default_sampler() -> Self {
        Self::Default
    }

    /// Returns a reproducible sampler seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(StdRng::seed_from_u64(seed))
    }

    /// Returns a sampler that yields the given indices in order.
    #[must_use]
    pub fn scripted(indices: impl IntoIterator<Item = usize>) -> Self {
        Self::Scripted(indices.into_iter().collect())
    }

    /// Picks a uniform index in `0..len`.
    ///
    /// Returns `None` when `len` is zero, or when a scripted sequence is
    /// exhausted.
    pub fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        match self {
            Self::Default => Some(rand::rng().random_range(0..len)),
            Self::Seeded(rng) => Some(rng.random_range(0..len)),
            Self::Scripted(indices) => indices.pop_front().map(|index| index % len),
        }
    }

    /// Returns true if this sampler uses real randomness.
    #[must_use]
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    /// Returns true if this sampler replays a fixed index sequence.
    #[must_use]
    pub fn is_scripted(&self) -> bool {
        matches!(self, Self::Scripted(_))
    }
}
