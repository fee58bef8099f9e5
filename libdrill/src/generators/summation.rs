use super::Exercise;
use crate::draw::IntRange;
use crate::emit::{Emit, EmitFormat};
use crate::math::{Poly, Var};

use rand::Rng;

/// How often the summand is quadratic rather than linear.
const QUADRATIC_PROBABILITY: f64 = 0.15;
const UPPER: IntRange = IntRange::new(3, 7);
const QUADRATIC_LINEAR: IntRange = IntRange::new(-3, 3).nonzero();
const LINEAR: IntRange = IntRange::new(-4, 4).nonzero();
const CONSTANT: IntRange = IntRange::new(-5, 5).nonzero();

/// Evaluating a finite sum `Σ[k=1..n] f(k)` of a linear summand `ak+b` or a quadratic summand
/// `k^2+ak+b`.
///
/// The total comes from the closed forms of the power sums rather than term-by-term addition.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Summation {
    summand: Poly,
    upper: i64,
    total: i64,
}

impl Summation {
    /// Sums `summand(k)` for `k = 1..=upper`.
    ///
    /// ```
    /// use libdrill::generators::Summation;
    /// use libdrill::math::{Poly, Var};
    ///
    /// // Σ[k=1..4] (2k - 1) = 1 + 3 + 5 + 7
    /// let sum = Summation::from_summand(Poly::new(Var::K, vec![2, -1]), 4);
    /// assert_eq!(sum.total(), 16);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the summand has degree greater than 2.
    pub fn from_summand(summand: Poly, upper: i64) -> Self {
        assert!(
            summand.deg() <= 2,
            "no closed form for summands of degree {}",
            summand.deg()
        );
        let total = summand.coeff(2) * sum_of_squares(upper)
            + summand.coeff(1) * sum_of_naturals(upper)
            + summand.coeff(0) * upper;
        Self {
            summand,
            upper,
            total,
        }
    }

    /// Draws a random summation exercise.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let quadratic = rng.gen_bool(QUADRATIC_PROBABILITY);
        let upper = UPPER.draw(rng);
        let summand = if quadratic {
            let a = QUADRATIC_LINEAR.draw(rng);
            let b = CONSTANT.draw(rng);
            Poly::new(Var::K, vec![1, a, b])
        } else {
            let a = LINEAR.draw(rng);
            let b = CONSTANT.draw(rng);
            Poly::new(Var::K, vec![a, b])
        };
        Self::from_summand(summand, upper)
    }

    pub fn summand(&self) -> &Poly {
        &self.summand
    }

    /// The last index of the sum; the first is always 1.
    pub fn upper(&self) -> i64 {
        self.upper
    }

    pub fn total(&self) -> i64 {
        self.total
    }
}

/// `Σ[k=1..n] k = n(n+1)/2`
fn sum_of_naturals(n: i64) -> i64 {
    n * (n + 1) / 2
}

/// `Σ[k=1..n] k^2 = n(n+1)(2n+1)/6`
fn sum_of_squares(n: i64) -> i64 {
    n * (n + 1) * (2 * n + 1) / 6
}

impl Exercise for Summation {
    fn question(&self, form: EmitFormat) -> String {
        let summand = self.summand.emit(form);
        match form {
            EmitFormat::Latex => format!(
                "\\displaystyle \\sum_{{k=1}}^{{{}}} ({})",
                self.upper, summand
            ),
            EmitFormat::Pretty => format!("Σ[k=1..{}] ({})", self.upper, summand),
        }
    }

    fn answer(&self, _form: EmitFormat) -> String {
        self.total.to_string()
    }
}
