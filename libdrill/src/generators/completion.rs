use super::{Exercise, Leading};
use crate::draw::IntRange;
use crate::emit::{Emit, EmitFormat};
use crate::math::{Fraction, Poly};
use crate::poly;

use rand::Rng;

const LEADING: IntRange = IntRange::new(1, 5);
const LINEAR: IntRange = IntRange::new(-10, 10);
const CONSTANT: IntRange = IntRange::new(-9, 9);

/// Completing the square of `ax^2+bx+c` into `a(x+p)^2+q`, where
///
/// ```text
/// p = b / 2a
/// q = (4ac - b^2) / 4a
/// ```
///
/// Any draw is a valid exercise, so there is no rejection loop.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Completion {
    poly: Poly,
    shift: Fraction,
    offset: Fraction,
}

impl Completion {
    /// Completes the square of `ax^2+bx+c`.
    ///
    /// ```
    /// use libdrill::generators::Completion;
    /// use libdrill::math::Fraction;
    ///
    /// // 2x^2 + 3x - 1 = 2(x + 3/4)^2 - 17/8
    /// let comp = Completion::from_coefficients(2, 3, -1);
    /// assert_eq!(comp.shift(), Fraction::new(3, 4));
    /// assert_eq!(comp.offset(), Fraction::new(-17, 8));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `a` is zero.
    pub fn from_coefficients(a: i64, b: i64, c: i64) -> Self {
        Self {
            poly: poly![a, b, c],
            shift: Fraction::new(b, 2 * a),
            offset: Fraction::new(4 * a * c - b * b, 4 * a),
        }
    }

    /// Draws a random square-completion exercise.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, leading: Leading) -> Self {
        let a = leading.draw(rng, LEADING);
        let b = LINEAR.draw(rng);
        let c = CONSTANT.draw(rng);
        Self::from_coefficients(a, b, c)
    }

    /// The polynomial `ax^2+bx+c`.
    pub fn poly(&self) -> &Poly {
        &self.poly
    }

    /// `p` in `a(x+p)^2+q`.
    pub fn shift(&self) -> Fraction {
        self.shift
    }

    /// `q` in `a(x+p)^2+q`.
    pub fn offset(&self) -> Fraction {
        self.offset
    }
}

impl Exercise for Completion {
    fn question(&self, form: EmitFormat) -> String {
        self.poly.emit(form)
    }

    fn answer(&self, form: EmitFormat) -> String {
        let a = self.poly.lc();
        let scale = if a == 1 {
            String::new()
        } else {
            a.to_string()
        };
        // With no shift the square is just x^2.
        let square = if self.shift.is_zero() {
            form.power("x", 2)
        } else {
            form.power(&format!("(x{})", self.shift.emit_signed(form)), 2)
        };
        let offset = if self.offset.is_zero() {
            String::new()
        } else {
            self.offset.emit_signed(form)
        };
        format!("{}{}{}", scale, square, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    type CompletionCase = ((i64, i64, i64), &'static str, &'static str);
    const CASES: [CompletionCase; 7] = [
        ((1, 6, 5), "(x+3)^2-4", "(x+3)²-4"),
        ((1, -4, 4), "(x-2)^2", "(x-2)²"),
        ((1, 3, 1), "(x+\\frac{3}{2})^2-\\frac{5}{4}", "(x+3/2)²-5/4"),
        ((2, 3, -1), "2(x+\\frac{3}{4})^2-\\frac{17}{8}", "2(x+3/4)²-17/8"),
        ((3, -6, 5), "3(x-1)^2+2", "3(x-1)²+2"),
        ((1, 0, -7), "x^2-7", "x²-7"),
        ((4, 0, 0), "4x^2", "4x²"),
    ];

    #[test]
    fn complete_the_square() {
        for ((a, b, c), latex, pretty) in CASES.iter() {
            let comp = Completion::from_coefficients(*a, *b, *c);
            assert_eq!(comp.answer(EmitFormat::Latex), *latex);
            assert_eq!(comp.answer(EmitFormat::Pretty), *pretty);
        }
    }

    #[test]
    fn question_is_the_trinomial() {
        let comp = Completion::from_coefficients(2, -8, 0);
        assert_eq!(comp.question(EmitFormat::Latex), "2x^2-8x");
        assert_eq!(
            comp.problem(EmitFormat::Latex).answer,
            "$$ 2(x-2)^2-8 $$"
        );
    }

    #[test]
    fn generated_completions_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for &leading in &[Leading::Monic, Leading::General] {
            for _ in 0..300 {
                let comp = Completion::generate(&mut rng, leading);
                let (a, b, c) = (comp.poly().coeff(2), comp.poly().coeff(1), comp.poly().coeff(0));
                match leading {
                    Leading::Monic => assert_eq!(a, 1),
                    Leading::General => assert!((1..=5).contains(&a)),
                }
                assert!((-10..=10).contains(&b) && (-9..=9).contains(&c));
                assert_eq!(comp.shift(), Fraction::new(b, 2 * a));
                assert_eq!(comp.offset(), Fraction::new(4 * a * c - b * b, 4 * a));
            }
        }
    }
}
