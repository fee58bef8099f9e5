//! Property-based tests of the generators' exact arithmetic, checked against `num-rational`.

#[cfg(test)]
mod tests {
    use num_rational::Rational64;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::generators::*;
    use crate::math::{gcd3, Fraction, Radical};
    use crate::{Category, EmitFormat};

    fn rational(f: Fraction) -> Rational64 {
        Rational64::new(f.numer(), f.denom())
    }

    fn small_int() -> impl Strategy<Value = i64> {
        -50i64..=50
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-50i64..=-1), (1i64..=50)]
    }

    proptest! {
        #[test]
        fn fractions_are_canonical(num in small_int(), den in non_zero_int()) {
            let f = Fraction::new(num, den);
            prop_assert!(f.denom() > 0);
            prop_assert_eq!(gcd3(f.numer(), f.denom(), 0), 1);
            prop_assert_eq!(rational(f), Rational64::new(num, den));
        }

        #[test]
        fn radicals_are_square_free(n in 0u64..10_000) {
            let Radical { outside, inside } = Radical::simplify(n);
            prop_assert_eq!(outside * outside * inside, n);
            for p in 2..=inside {
                if p * p > inside {
                    break;
                }
                prop_assert_ne!(inside % (p * p), 0, "{} has square factor {}", inside, p * p);
            }
        }

        #[test]
        fn completed_square_is_identical(a in 1i64..=5, b in -10i64..=10, c in -9i64..=9) {
            let comp = Completion::from_coefficients(a, b, c);
            let (p, q) = (rational(comp.shift()), rational(comp.offset()));
            let a = Rational64::from_integer(a);
            // a(x+p)^2+q = ax^2 + 2apx + ap^2+q
            prop_assert_eq!(a * p * Rational64::from_integer(2), Rational64::from_integer(b));
            prop_assert_eq!(a * p * p + q, Rational64::from_integer(c));
        }

        #[test]
        fn integrals_are_exact(
            a in non_zero_int(),
            b in non_zero_int(),
            c in non_zero_int(),
            lower in -3i64..=2,
            width in 1i64..=4,
        ) {
            let upper = lower + width;
            let integral = Integration::from_coefficients(a, b, c, lower, upper);
            let antiderivative = |x: i64| {
                let x = Rational64::from_integer(x);
                Rational64::new(a, 3) * x * x * x
                    + Rational64::new(b, 2) * x * x
                    + Rational64::from_integer(c) * x
            };
            prop_assert_eq!(
                rational(integral.value()),
                antiderivative(upper) - antiderivative(lower)
            );
        }

        #[test]
        fn expansions_multiply_out(
            d in 1i64..=3,
            e in non_zero_int(),
            f in 1i64..=3,
            g in non_zero_int(),
            x in small_int(),
        ) {
            if let Some(expansion) = Expansion::from_factors(d, e, f, g) {
                let [first, second] = expansion.factors();
                prop_assert_eq!(expansion.expanded().eval(x), first.eval(x) * second.eval(x));
                prop_assert_eq!(expansion.expanded().eval(x), (d * x + e) * (f * x + g));
                prop_assert_eq!(expansion.expanded().content(), 1);
            }
        }

        #[test]
        fn rational_roots_solve_their_equation(
            scale in 1i64..=3,
            n1 in non_zero_int(),
            d1 in 1i64..=2,
            n2 in non_zero_int(),
            d2 in 1i64..=2,
        ) {
            if let Some(eq) = Equation::from_roots(scale, (n1, d1), (n2, d2)) {
                match eq.roots() {
                    Roots::Rational(r1, r2) => {
                        prop_assert!(eq.poly().eval_fraction(r1).is_zero());
                        prop_assert!(eq.poly().eval_fraction(r2).is_zero());
                    }
                    Roots::Irrational { .. } => prop_assert!(false, "irrational roots from rationals"),
                }
            }
        }

        #[test]
        fn formula_equations_have_two_real_roots(seed in any::<u64>()) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let eq = Equation::generate_formula(&mut rng);
            let poly = eq.poly();
            let (a, b, c) = (poly.coeff(2), poly.coeff(1), poly.coeff(0));
            prop_assert!(b * b - 4 * a * c > 0);
            prop_assert!(a > 0);
            prop_assert_eq!(gcd3(a, b, c), 1);
        }

        #[test]
        fn sums_match_term_by_term_addition(
            quadratic in any::<bool>(),
            a in non_zero_int(),
            b in non_zero_int(),
            upper in 3i64..=7,
        ) {
            let coeffs = if quadratic { vec![1, a, b] } else { vec![a, b] };
            let summand = crate::math::Poly::new(crate::math::Var::K, coeffs);
            let expected: i64 = (1..=upper).map(|k| summand.eval(k)).sum();
            prop_assert_eq!(Summation::from_summand(summand, upper).total(), expected);
        }

        #[test]
        fn every_category_generates_display_math(seed in any::<u64>()) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for &category in Category::ALL.iter() {
                let problem = category.generate(&mut rng, EmitFormat::Latex);
                prop_assert!(problem.question.starts_with("$$ "));
                prop_assert!(problem.answer.ends_with(" $$"));
            }
        }
    }

    #[test]
    fn worked_scenarios() {
        // (x + 2)(x - 3)
        let expansion = Expansion::from_factors(1, 2, 1, -3).unwrap();
        assert_eq!(
            Factorization(expansion.clone()).problem(EmitFormat::Latex).answer,
            "$$ (x+2)(x-3) $$"
        );
        assert_eq!(
            expansion.problem(EmitFormat::Latex).answer,
            "$$ x^2-x-6 $$"
        );

        // ∫[0, 3] (x^2 - 2x + 1) dx = 3
        let integral = Integration::from_coefficients(1, -2, 1, 0, 3);
        assert_eq!(integral.value(), Fraction::from(3));

        // Σ[k=1..5] (2k + 1) = 35
        let sum = Summation::from_summand(crate::math::Poly::new(crate::math::Var::K, vec![2, 1]), 5);
        assert_eq!(sum.total(), 35);
    }
}
