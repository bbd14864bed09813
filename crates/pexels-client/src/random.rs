// SPDX-License-Identifier: GPL-3.0-or-later

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Debug;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Highest page index the random helpers sample from.
pub const MAX_RANDOM_PAGE: u32 = 1000;

/// Source of page indexes for the "random item" helpers.
///
/// Picking a random page of a curated or popular listing is an approximation:
/// it favours whatever the service ranks into the first thousand pages and is
/// not a uniform sample over the catalog.
pub trait PageSampler: Send + Sync + Debug {
    /// Return a page index in `[0, max]`.
    fn sample_page(&self, max: u32) -> u32;
}

/// Default sampler, seeded from the wall clock at construction.
#[derive(Debug)]
pub struct ClockSeededSampler {
    rng: Mutex<StdRng>,
}

impl ClockSeededSampler {
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for ClockSeededSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSampler for ClockSeededSampler {
    fn sample_page(&self, max: u32) -> u32 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_stay_in_range() {
        let sampler = ClockSeededSampler::new();
        for _ in 0..2000 {
            assert!(sampler.sample_page(MAX_RANDOM_PAGE) <= MAX_RANDOM_PAGE);
        }
        assert_eq!(sampler.sample_page(0), 0);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = ClockSeededSampler::with_seed(99);
        let b = ClockSeededSampler::with_seed(99);
        let first: Vec<u32> = (0..16).map(|_| a.sample_page(MAX_RANDOM_PAGE)).collect();
        let second: Vec<u32> = (0..16).map(|_| b.sample_page(MAX_RANDOM_PAGE)).collect();
        assert_eq!(first, second);
    }
}
