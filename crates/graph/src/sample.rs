//! Bernoulli record sampling
//!
//! Bounds graph size for the BFS strategy by keeping each record with a
//! fixed probability before accumulation. The generator is always
//! explicitly seeded so runs are reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded Bernoulli filter applied per record
#[derive(Debug)]
pub struct Sampler {
    rng: StdRng,
    probability: f64,
}

impl Sampler {
    /// Create a sampler with the given keep-probability and seed
    pub fn new(probability: f64, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            probability,
        }
    }

    /// Decide whether to keep the next record
    pub fn keep(&mut self) -> bool {
        self.rng.gen::<f64>() < self.probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_decisions() {
        let mut a = Sampler::new(0.5, 42);
        let mut b = Sampler::new(0.5, 42);
        let decisions_a: Vec<bool> = (0..100).map(|_| a.keep()).collect();
        let decisions_b: Vec<bool> = (0..100).map(|_| b.keep()).collect();
        assert_eq!(decisions_a, decisions_b);
    }

    #[test]
    fn test_probability_extremes() {
        let mut none = Sampler::new(0.0, 1);
        assert!((0..100).all(|_| !none.keep()));

        let mut all = Sampler::new(1.0, 1);
        assert!((0..100).all(|_| all.keep()));
    }

    #[test]
    fn test_keep_rate_near_probability() {
        let mut sampler = Sampler::new(0.1, 7);
        let kept = (0..10_000).filter(|_| sampler.keep()).count();
        assert!(kept > 500 && kept < 1500, "kept {} of 10000", kept);
    }
}
