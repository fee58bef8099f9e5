use super::Exercise;
use crate::draw::IntRange;
use crate::emit::{Emit, EmitFormat};
use crate::math::{Fraction, Poly};
use crate::poly;

use rand::Rng;

const LOWER: IntRange = IntRange::new(-3, 2);
/// How far past the lower bound the upper bound may lie.
const MAX_WIDTH: i64 = 4;
const QUADRATIC: IntRange = IntRange::new(-3, 3).nonzero();
const LINEAR: IntRange = IntRange::new(-4, 4).nonzero();
const CONSTANT: IntRange = IntRange::new(-5, 5).nonzero();

/// Evaluating a definite integral `∫[lower, upper] (ax^2+bx+c) dx`.
///
/// The value is computed from the antiderivative scaled by 6,
///
/// ```text
/// F*(x) = 2ax^3 + 3bx^2 + 6cx = 6·F(x)
/// ```
///
/// which has integer coefficients, so the integral is exactly `(F*(upper) - F*(lower)) / 6`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Integration {
    integrand: Poly,
    lower: i64,
    upper: i64,
    value: Fraction,
}

impl Integration {
    /// Integrates `ax^2+bx+c` over `[lower, upper]`.
    ///
    /// ```
    /// use libdrill::generators::Integration;
    /// use libdrill::math::Fraction;
    ///
    /// // ∫[0, 1] (x^2 + x + 1) dx = 1/3 + 1/2 + 1
    /// assert_eq!(Integration::from_coefficients(1, 1, 1, 0, 1).value(), Fraction::new(11, 6));
    /// ```
    pub fn from_coefficients(a: i64, b: i64, c: i64, lower: i64, upper: i64) -> Self {
        let integrand = poly![a, b, c];
        let scaled = scaled_antiderivative(&integrand);
        Self {
            integrand,
            lower,
            upper,
            value: Fraction::new(scaled.eval(upper) - scaled.eval(lower), 6),
        }
    }

    /// Draws a random definite integral.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let lower = LOWER.draw(rng);
        let upper = IntRange::new(lower + 1, lower + MAX_WIDTH).draw(rng);
        let a = QUADRATIC.draw(rng);
        let b = LINEAR.draw(rng);
        let c = CONSTANT.draw(rng);
        Self::from_coefficients(a, b, c, lower, upper)
    }

    pub fn integrand(&self) -> &Poly {
        &self.integrand
    }

    /// The bounds of integration, `(lower, upper)`.
    pub fn bounds(&self) -> (i64, i64) {
        (self.lower, self.upper)
    }

    pub fn value(&self) -> Fraction {
        self.value
    }
}

/// `6·F` for the antiderivative `F` of a polynomial of degree at most 2 with `F(0) = 0`.
fn scaled_antiderivative(integrand: &Poly) -> Poly {
    let (a, b, c) = (integrand.coeff(2), integrand.coeff(1), integrand.coeff(0));
    poly![2 * a, 3 * b, 6 * c, 0]
}

impl Exercise for Integration {
    fn question(&self, form: EmitFormat) -> String {
        let integrand = self.integrand.emit(form);
        match form {
            EmitFormat::Latex => format!(
                "\\displaystyle \\int_{{{}}}^{{{}}} ({}) \\, dx",
                self.lower, self.upper, integrand
            ),
            EmitFormat::Pretty => format!(
                "∫[{}, {}] ({}) dx",
                self.lower, self.upper, integrand
            ),
        }
    }

    fn answer(&self, form: EmitFormat) -> String {
        self.value.emit(form)
    }
}
