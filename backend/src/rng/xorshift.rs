//! xorshift64* random number generator
//!
//! Fast, deterministic PRNG backing the mock data generators. A fixed seed
//! always reproduces the same dashboard datasets, which is what the tests rely
//! on; the interactive demo seeds it from entropy instead.

use super::NumberSource;
use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use sales_dashboard_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next();
/// let orders = rng.range(10, 60); // [10, 60)
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed. A zero seed is replaced by 1
    /// (xorshift never leaves the all-zero state).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create an RNG seeded from the operating system's entropy source.
    ///
    /// Output is not reproducible across calls.
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// Generate next random u64 value
    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate random value in range [min, max)
    ///
    /// # Panics
    /// Panics if min >= max
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = self.next();
        let range_size = (max - min) as u64;
        min + (value % range_size) as i64
    }

    /// Current internal state; `RngManager::new(state)` resumes the sequence.
    pub fn get_state(&self) -> u64 {
        self.state
    }

    /// Generate random f64 in range [0.0, 1.0)
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // 53 significant bits, divided by 2^53
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }
}

impl NumberSource for RngManager {
    fn range(&mut self, min: i64, max: i64) -> i64 {
        RngManager::range(self, min, max)
    }

    fn next_f64(&mut self) -> f64 {
        RngManager::next_f64(self)
    }
}
