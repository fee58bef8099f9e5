//! Random parameter draws and rejection sampling.

use rand::Rng;
use tracing::{debug, trace, warn};

/// The number of draws a rejection loop makes before giving up on randomness and using its
/// fallback instance.
pub const MAX_ATTEMPTS: usize = 1000;

/// A uniform draw of an integer in `[min, max]`, optionally excluding zero.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
    pub nonzero: bool,
}

impl IntRange {
    /// An inclusive range `[min, max]`.
    pub const fn new(min: i64, max: i64) -> Self {
        Self {
            min,
            max,
            nonzero: false,
        }
    }

    /// Excludes zero from the range.
    pub const fn nonzero(self) -> Self {
        Self {
            nonzero: true,
            ..self
        }
    }

    /// Draws an integer from the range.
    ///
    /// A nonzero range draws uniformly from its nonzero members, which is the distribution of
    /// redrawing until a nonzero value comes up, without the loop.
    ///
    /// # Panics
    ///
    /// Panics if the range has no members.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        let straddles_zero = self.min <= 0 && 0 <= self.max;
        if self.nonzero && straddles_zero {
            assert!(self.min < self.max, "{:?} has no nonzero members", self);
            let n = rng.gen_range(self.min..self.max);
            if n >= 0 {
                n + 1
            } else {
                n
            }
        } else {
            rng.gen_range(self.min..=self.max)
        }
    }
}

/// Repeatedly draws a candidate until one is accepted, making at most
/// [`MAX_ATTEMPTS`](MAX_ATTEMPTS) draws.
///
/// `draw` returns `None` for a rejected candidate. If every draw is rejected, `None` is returned
/// and the caller substitutes a deterministic instance.
pub fn sample<R, T, D>(rng: &mut R, generator: &'static str, mut draw: D) -> Option<T>
where
    R: Rng + ?Sized,
    D: FnMut(&mut R) -> Option<T>,
{
    for attempt in 1..=MAX_ATTEMPTS {
        match draw(rng) {
            Some(candidate) => {
                debug!(generator, attempt, "accepted draw");
                return Some(candidate);
            }
            None => trace!(generator, attempt, "rejected draw"),
        }
    }
    warn!(
        generator,
        attempts = MAX_ATTEMPTS,
        "rejection sampling exhausted, using fallback instance"
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn draws_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let range = IntRange::new(-3, 2);
        let mut seen = [false; 6];
        for _ in 0..1000 {
            let n = range.draw(&mut rng);
            assert!((-3..=2).contains(&n));
            seen[(n + 3) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "every member is drawn");
    }

    #[test]
    fn nonzero_draws_skip_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let range = IntRange::new(-5, 5).nonzero();
        let mut seen = [false; 11];
        for _ in 0..2000 {
            let n = range.draw(&mut rng);
            assert!(n != 0 && (-5..=5).contains(&n));
            seen[(n + 5) as usize] = true;
        }
        assert_eq!(seen.iter().filter(|&&s| s).count(), 10);
    }

    #[test]
    fn nonzero_draws_of_positive_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let range = IntRange::new(1, 1).nonzero();
        assert_eq!(range.draw(&mut rng), 1);
    }

    #[test]
    fn sample_accepts_first_valid_draw() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let range = IntRange::new(0, 9);
        let even = sample(&mut rng, "test", |rng| {
            let n = range.draw(rng);
            if n % 2 == 0 {
                Some(n)
            } else {
                None
            }
        });
        assert!(matches!(even, Some(n) if n % 2 == 0));
    }

    #[test]
    fn sample_gives_up() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut calls = 0;
        let never: Option<i64> = sample(&mut rng, "test", |_| {
            calls += 1;
            None
        });
        assert_eq!(never, None);
        assert_eq!(calls, MAX_ATTEMPTS);
    }
}
