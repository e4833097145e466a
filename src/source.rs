//! Uniform random sources.
//!
//! Draw sequences consume exactly one uniform sample in `[0, 1)` per draw.
//! [`UniformSource`] is that seam:
//! - [`RngSource`] adapts any `rand::Rng` (thread-local by default, or seeded).
//! - [`ScriptedSource`] replays a fixed list of samples, for tests that need to
//!   hit exact cumulative boundaries.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::error::WeightedError;

/// A generator of uniform samples in `[0, 1)`.
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

impl<S: UniformSource + ?Sized> UniformSource for Box<S> {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Adapter from a `rand::Rng` to a [`UniformSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<ThreadRng> {
    /// The process-level default: `rand::rng()`. Not reproducible across runs.
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl Default for RngSource<ThreadRng> {
    fn default() -> Self {
        Self::thread()
    }
}

impl RngSource<StdRng> {
    /// A reproducible source: the same seed yields the same samples.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> UniformSource for RngSource<R> {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of uniform samples, starting over when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
    consumed: usize,
}

impl ScriptedSource {
    /// Fails if `values` is empty or any value lies outside `[0, 1)`.
    pub fn new<I: IntoIterator<Item = f64>>(values: I) -> Result<Self, WeightedError> {
        let values: Vec<f64> = values.into_iter().collect();
        if values.is_empty() {
            return Err(WeightedError::EmptyScript);
        }
        if let Some(&bad) = values.iter().find(|&&u| !(0.0..1.0).contains(&u)) {
            return Err(WeightedError::InvalidUniform(bad));
        }
        Ok(Self {
            values,
            cursor: 0,
            consumed: 0,
        })
    }

    /// A source that returns `value` forever.
    pub fn constant(value: f64) -> Result<Self, WeightedError> {
        Self::new([value])
    }

    /// Samples handed out so far (saturating).
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl UniformSource for ScriptedSource {
    fn next_uniform(&mut self) -> f64 {
        let u = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        self.consumed = self.consumed.saturating_add(1);
        u
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn scripted_replays_and_cycles() {
        let mut s = ScriptedSource::new([0.1, 0.5, 0.9]).unwrap();
        let got: Vec<f64> = (0..5).map(|_| s.next_uniform()).collect();
        assert_eq!(got, [0.1, 0.5, 0.9, 0.1, 0.5]);
        assert_eq!(s.consumed(), 5);
    }

    #[test]
    fn scripted_cursor_wraps_within_the_script() {
        let mut s = ScriptedSource::new([0.1, 0.2]).unwrap();
        for _ in 0..7 {
            s.next_uniform();
        }
        assert_eq!(s.cursor, 1);
        assert_eq!(s.consumed(), 7);
        assert_eq!(s.next_uniform(), 0.2);

        s.consumed = usize::MAX;
        assert_eq!(s.next_uniform(), 0.1);
        assert_eq!(s.consumed(), usize::MAX);
        assert_eq!(s.cursor, 1);
    }

    #[test]
    fn scripted_rejects_bad_input() {
        assert_eq!(
            ScriptedSource::new(Vec::<f64>::new()).unwrap_err(),
            WeightedError::EmptyScript
        );
        assert_eq!(
            ScriptedSource::new([0.2, 1.0]).unwrap_err(),
            WeightedError::InvalidUniform(1.0)
        );
        assert!(ScriptedSource::constant(-0.1).is_err());
        assert!(ScriptedSource::constant(f64::NAN).is_err());
    }

    #[test]
    fn rng_source_stays_in_unit_interval() {
        let mut s = RngSource::thread();
        for _ in 0..10_000 {
            let u = s.next_uniform();
            assert!((0.0..1.0).contains(&u), "u={u}");
        }
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.next_uniform(), b.next_uniform());
        }

        let mut c = RngSource::new(ChaCha8Rng::seed_from_u64(7));
        let mut d = RngSource::new(ChaCha8Rng::seed_from_u64(7));
        assert_eq!(c.next_uniform(), d.next_uniform());
    }

    #[test]
    fn borrowed_sources_advance_the_owner() {
        fn draw_once<S: UniformSource>(mut source: S) -> f64 {
            source.next_uniform()
        }

        let mut s = ScriptedSource::new([0.25, 0.75]).unwrap();
        assert_eq!(draw_once(&mut s), 0.25);
        assert_eq!(s.next_uniform(), 0.75);
    }
}
