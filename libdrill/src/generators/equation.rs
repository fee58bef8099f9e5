use super::Exercise;
use crate::draw::{sample, IntRange};
use crate::emit::{Emit, EmitFormat};
use crate::math::{exact_sqrt, gcd, Fraction, Poly, Radical};
use crate::poly;

use rand::Rng;

const ROOT_SCALE: IntRange = IntRange::new(1, 3);
const ROOT_NUMERATOR: IntRange = IntRange::new(-5, 5).nonzero();
const ROOT_DENOMINATOR: IntRange = IntRange::new(1, 2);

const FORMULA_LEADING: IntRange = IntRange::new(1, 4);
const FORMULA_COEFFICIENT: IntRange = IntRange::new(-9, 9).nonzero();

/// The solutions of a quadratic equation with two real roots.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Roots {
    /// Two rational roots. They are equal for a double root.
    Rational(Fraction, Fraction),
    /// The conjugate pair `(center ± coeff·√radicand) / den`, in lowest terms.
    Irrational {
        center: i64,
        coeff: u64,
        radicand: u64,
        den: u64,
    },
}

/// Solving a quadratic equation `ax^2+bx+c = 0`.
///
/// Equations come in two kinds, drawn with equal probability:
///
/// - equations built from two drawn rational roots, solvable by factoring;
/// - equations with drawn coefficients and a positive discriminant, solved by the quadratic
///   formula. Their roots may be irrational.
///
/// In both kinds the coefficients have no common factor.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Equation {
    poly: Poly,
    roots: Roots,
}

impl Equation {
    /// Builds the equation `scale·(den1·x - num1)(den2·x - num2) = 0`, whose roots are
    /// `num1/den1` and `num2/den2`. Returns `None` if the polynomial has a common factor or a
    /// missing coefficient.
    ///
    /// # Panics
    ///
    /// Panics if a denominator is zero.
    pub fn from_roots(scale: i64, root1: (i64, i64), root2: (i64, i64)) -> Option<Self> {
        let (num1, den1) = root1;
        let (num2, den2) = root2;
        let poly = poly![den1, -num1]
            .mul(&poly![den2, -num2])
            .mul_scalar(scale);
        if poly.content() > 1 || (0..=2).any(|pow| poly.coeff(pow) == 0) {
            return None;
        }
        Some(Self {
            poly,
            roots: Roots::Rational(Fraction::new(num1, den1), Fraction::new(num2, den2)),
        })
    }

    /// Solves `ax^2+bx+c = 0` by the quadratic formula. Returns `None` unless `a` is positive,
    /// the discriminant is positive, and the coefficients have no common factor.
    ///
    /// ```
    /// use libdrill::generators::{Equation, Roots};
    /// use libdrill::math::Fraction;
    ///
    /// let eq = Equation::from_coefficients(1, 2, -8).unwrap();
    /// assert_eq!(eq.roots(), Roots::Rational(Fraction::from(2), Fraction::from(-4)));
    ///
    /// let eq = Equation::from_coefficients(2, -2, -1).unwrap();
    /// assert_eq!(
    ///     eq.roots(),
    ///     Roots::Irrational { center: 1, coeff: 1, radicand: 3, den: 2 }
    /// );
    /// ```
    pub fn from_coefficients(a: i64, b: i64, c: i64) -> Option<Self> {
        let poly = poly![a, b, c];
        let discriminant = b * b - 4 * a * c;
        if a <= 0 || discriminant <= 0 || poly.content() > 1 {
            return None;
        }
        let discriminant = discriminant as u64;
        let roots = match exact_sqrt(discriminant) {
            Some(root) => {
                let root = root as i64;
                Roots::Rational(
                    Fraction::new(-b + root, 2 * a),
                    Fraction::new(-b - root, 2 * a),
                )
            }
            None => {
                let Radical { outside, inside } = Radical::simplify(discriminant);
                let den = 2 * a as u64;
                let common = gcd(gcd(b.unsigned_abs(), outside), den);
                Roots::Irrational {
                    center: -b / common as i64,
                    coeff: outside / common,
                    radicand: inside,
                    den: den / common,
                }
            }
        };
        Some(Self { poly, roots })
    }

    /// Draws a random equation, factorable or formula-solved with equal probability.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Self::generate_factorable(rng)
        } else {
            Self::generate_formula(rng)
        }
    }

    /// Draws an equation with rational roots.
    pub fn generate_factorable<R: Rng + ?Sized>(rng: &mut R) -> Self {
        sample(rng, "equation (rational roots)", |rng| {
            let scale = ROOT_SCALE.draw(rng);
            let num1 = ROOT_NUMERATOR.draw(rng);
            let num2 = ROOT_NUMERATOR.draw(rng);
            let den1 = ROOT_DENOMINATOR.draw(rng);
            // A halved root only ever comes first; two whole roots keep a monic equation.
            let den2 = if den1 == 1 {
                1
            } else {
                ROOT_DENOMINATOR.draw(rng)
            };
            Self::from_roots(scale, (num1, den1), (num2, den2))
        })
        .unwrap_or_else(Self::fallback_factorable)
    }

    /// Draws an equation to be solved by the quadratic formula.
    pub fn generate_formula<R: Rng + ?Sized>(rng: &mut R) -> Self {
        sample(rng, "equation (formula)", |rng| {
            let a = FORMULA_LEADING.draw(rng);
            let b = FORMULA_COEFFICIENT.draw(rng);
            let c = FORMULA_COEFFICIENT.draw(rng);
            Self::from_coefficients(a, b, c)
        })
        .unwrap_or_else(Self::fallback_formula)
    }

    /// `x^2-x-6 = 0`, with roots 3 and -2.
    fn fallback_factorable() -> Self {
        Self {
            poly: poly![1, -1, -6],
            roots: Roots::Rational(Fraction::from(3), Fraction::from(-2)),
        }
    }

    /// `x^2-2x-1 = 0`, with roots `1 ± √2`.
    fn fallback_formula() -> Self {
        Self {
            poly: poly![1, -2, -1],
            roots: Roots::Irrational {
                center: 1,
                coeff: 1,
                radicand: 2,
                den: 1,
            },
        }
    }

    /// The polynomial `ax^2+bx+c` set to zero.
    pub fn poly(&self) -> &Poly {
        &self.poly
    }

    pub fn roots(&self) -> Roots {
        self.roots
    }
}

impl Exercise for Equation {
    fn question(&self, form: EmitFormat) -> String {
        format!("{} = 0", self.poly.emit(form))
    }

    fn answer(&self, form: EmitFormat) -> String {
        match self.roots {
            Roots::Rational(r1, r2) => format!(
                "x = {}{}{}",
                r1.emit(form),
                form.list_separator(),
                r2.emit(form)
            ),
            Roots::Irrational {
                center,
                coeff,
                radicand,
                den,
            } => {
                let radical = Radical {
                    outside: coeff,
                    inside: radicand,
                };
                let pair = format!("{} {} {}", center, form.plus_minus(), radical.emit(form));
                match (den, form) {
                    (1, _) => format!("x = {}", pair),
                    (_, EmitFormat::Latex) => format!("x = {}", form.frac(&pair, &den.to_string())),
                    (_, EmitFormat::Pretty) => {
                        format!("x = {}", form.frac(&format!("({})", pair), &den.to_string()))
                    }
                }
            }
        }
    }
}
