use nanorand::{Rng, WyRand};

pub trait RandomSource {
    /// Uniform integer in `min..=max`.
    fn range(&mut self, min: u32, max: u32) -> u32;

    /// Bernoulli draw succeeding with `percent` probability.
    fn chance(&mut self, percent: u32) -> bool {
        self.range(0, 99) < percent
    }
}

pub struct Random {
    generator: WyRand,
}

impl Random {
    pub fn new() -> Self {
        Self {
            generator: WyRand::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            generator: WyRand::new_seed(seed),
        }
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for Random {
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.generator.generate_range(min..=max)
    }
}
