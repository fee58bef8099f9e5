use super::Exercise;
use crate::draw::IntRange;
use crate::emit::{Emit, EmitFormat};
use crate::math::{Poly, Var};

use rand::Rng;

const DEGREE: IntRange = IntRange::new(2, 3);
const LEADING: IntRange = IntRange::new(-4, 4).nonzero();
const LINEAR: IntRange = IntRange::new(-5, 5).nonzero();
const CONSTANT: IntRange = IntRange::new(-9, 9).nonzero();

/// Differentiating `y = ax^n + bx + c` for `n ∈ {2, 3}`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Differentiation {
    function: Poly,
    derivative: Poly,
}

impl Differentiation {
    /// Differentiates `ax^n + bx + c`.
    ///
    /// ```
    /// use libdrill::generators::Differentiation;
    /// use libdrill::poly;
    ///
    /// let diff = Differentiation::from_coefficients(3, -2, 4, 1);
    /// assert_eq!(diff.function(), &poly![-2, 0, 4, 1]);
    /// assert_eq!(diff.derivative(), &poly![-6, 0, 4]);
    /// ```
    pub fn from_coefficients(n: u32, a: i64, b: i64, c: i64) -> Self {
        let function = Poly::from_terms(Var::X, &[(a, n), (b, 1), (c, 0)]);
        let derivative = function.derivative();
        Self {
            function,
            derivative,
        }
    }

    /// Draws a random differentiation exercise.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let n = DEGREE.draw(rng) as u32;
        let a = LEADING.draw(rng);
        let b = LINEAR.draw(rng);
        let c = CONSTANT.draw(rng);
        Self::from_coefficients(n, a, b, c)
    }

    pub fn function(&self) -> &Poly {
        &self.function
    }

    pub fn derivative(&self) -> &Poly {
        &self.derivative
    }
}

impl Exercise for Differentiation {
    fn question(&self, form: EmitFormat) -> String {
        format!("y = {}", self.function.emit(form))
    }

    fn answer(&self, form: EmitFormat) -> String {
        format!("y' = {}", self.derivative.emit(form))
    }
}
