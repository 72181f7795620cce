//! Pluggable random number sources
//!
//! Every generator draws its values through the [`NumberSource`] trait so that
//! callers decide between reproducible output (a seeded [`RngManager`]) and
//! demo-style unseeded output ([`RngManager::from_entropy`]).

mod xorshift;

pub use xorshift::RngManager;

/// A source of bounded random numbers.
///
/// # Example
/// ```
/// use sales_dashboard_core_rs::rng::{NumberSource, RngManager};
///
/// let mut rng = RngManager::new(7);
/// let revenue = rng.range(1000, 6000);
/// assert!((1000..6000).contains(&revenue));
/// ```
pub trait NumberSource {
    /// Uniform integer in `[min, max)`.
    ///
    /// # Panics
    /// Implementations may panic if `min >= max`.
    fn range(&mut self, min: i64, max: i64) -> i64;

    /// Uniform float in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;
}

impl<T: NumberSource + ?Sized> NumberSource for Box<T> {
    fn range(&mut self, min: i64, max: i64) -> i64 {
        (**self).range(min, max)
    }

    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Pick one element of a non-empty pool uniformly at random.
///
/// # Panics
/// Panics if `pool` is empty.
pub fn pick<'a, T, R>(rng: &mut R, pool: &'a [T]) -> &'a T
where
    R: NumberSource + ?Sized,
{
    assert!(!pool.is_empty(), "cannot pick from an empty pool");
    let idx = rng.range(0, pool.len() as i64) as usize;
    &pool[idx]
}
