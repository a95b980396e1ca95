use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The single source of randomness for the Easy and Medium tiers.
pub trait RandomSource {
    /// A uniformly chosen index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// [`RandomSource`] backed by a seedable standard RNG.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded from the operating system.
    pub fn from_entropy() -> Self {
        SeededRandom {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Choose one element of `items` through `rng`, `None` when empty.
pub fn choose<T: Copy>(items: &[T], rng: &mut dyn RandomSource) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.pick(items.len()) % items.len()).copied()
}

/// Replays a fixed list of picks, cycling when exhausted.
#[cfg(test)]
pub(crate) struct ScriptedRandom {
    picks: Vec<usize>,
    next: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(picks: Vec<usize>) -> Self {
        ScriptedRandom { picks, next: 0 }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn pick(&mut self, len: usize) -> usize {
        let value = self.picks.get(self.next % self.picks.len().max(1)).copied().unwrap_or(0);
        self.next += 1;
        value % len
    }
}
