use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng, rng};

/// Source of the "simulated" numbers the mock endpoints report.
///
/// Handlers only ever see this trait, so tests can pin every processing time,
/// threat roll and OCR pick.
pub trait MockRandom: Send + Sync {
    /// A float in `[0, 1)`.
    fn unit(&self) -> f64;

    /// An index in `[0, len)`. `len` must be non-zero.
    fn index(&self, len: usize) -> usize;

    /// A float in `[low, high)`.
    fn uniform(&self, low: f64, high: f64) -> f64 {
        low + self.unit() * (high - low)
    }
}

/// Draws from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl MockRandom for ThreadRandom {
    fn unit(&self) -> f64 {
        rng().random::<f64>()
    }

    fn index(&self, len: usize) -> usize {
        rng().random_range(0..len)
    }
}

/// Reproducible sequence for demos started with `--seed`.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl MockRandom for SeededRandom {
    fn unit(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.random::<f64>()
    }

    fn index(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.random_range(0..len)
    }
}

/// Picks from a slice through a trait object.
pub fn pick<'a, T>(random: &dyn MockRandom, items: &'a [T]) -> &'a T {
    &items[random.index(items.len())]
}


#[cfg(test)]
mod tests {
    use super::testing::FixedRandom;
    use super::*;

    #[test]
    fn test_uniform_stays_in_range() {
        let random = ThreadRandom;
        for _ in 0..1000 {
            let value = random.uniform(1.5, 3.0);
            assert!((1.5..3.0).contains(&value));
        }
    }

    #[test]
    fn test_uniform_maps_unit_linearly() {
        let random = FixedRandom { unit: 0.5, index: 0 };
        assert_eq!(random.uniform(3.0, 8.0), 5.5);
    }

    #[test]
    fn test_seeded_sequences_repeat() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        for _ in 0..10 {
            assert_eq!(a.unit(), b.unit());
            assert_eq!(a.index(4), b.index(4));
        }
    }

    #[test]
    fn test_pick_through_trait_object() {
        let random = FixedRandom { unit: 0.0, index: 2 };
        let items = ["a", "b", "c"];
        assert_eq!(*pick(&random, &items), "c");
    }
}
