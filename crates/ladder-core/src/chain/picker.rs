use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses one of `n` candidates.
pub trait Picker {
    /// Index in `0..n`. Never called with `n == 0`.
    fn pick(&mut self, n: usize) -> usize;
}

/// Uniform choice driven by any `rand` generator.
pub struct RandomPicker<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<StdRng> {
    /// Reproducible picker: the same seed and vocabulary give the same ladder.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Picker for RandomPicker<R> {
    fn pick(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }
}

/// Always takes the first candidate.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstPicker;

impl Picker for FirstPicker {
    fn pick(&mut self, _n: usize) -> usize {
        0
    }
}
