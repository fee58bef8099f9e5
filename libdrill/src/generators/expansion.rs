use super::{Exercise, Leading};
use crate::draw::{sample, IntRange};
use crate::emit::{Emit, EmitFormat};
use crate::math::Poly;
use crate::poly;

use rand::Rng;

/// Range of the `x` coefficients of both binomials.
const LEADING: IntRange = IntRange::new(1, 3);
/// Range of the constants of both binomials.
const CONSTANT: IntRange = IntRange::new(-5, 5).nonzero();

/// Expanding a product of two binomials, `(dx+e)(fx+g)`, into a trinomial `ax^2+bx+c`.
///
/// The trinomial never has a common integer factor, and its linear and constant coefficients are
/// nonzero, so going back from it to the binomials requires real factorization.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Expansion {
    factors: [Poly; 2],
    expanded: Poly,
}

impl Expansion {
    /// Expands `(dx+e)(fx+g)`. Returns `None` if the expansion has a common factor or is missing
    /// its linear or constant term.
    ///
    /// ```
    /// use libdrill::generators::Expansion;
    /// use libdrill::poly;
    ///
    /// let exp = Expansion::from_factors(1, 2, 1, -3).unwrap();
    /// assert_eq!(exp.expanded(), &poly![1, -1, -6]);
    ///
    /// // 2x^2 + 4x - 6 has the common factor 2.
    /// assert!(Expansion::from_factors(2, -2, 1, 3).is_none());
    /// ```
    pub fn from_factors(d: i64, e: i64, f: i64, g: i64) -> Option<Self> {
        let factors = [poly![d, e], poly![f, g]];
        let expanded = factors[0].mul(&factors[1]);
        if expanded.content() > 1 || expanded.coeff(1) == 0 || expanded.coeff(0) == 0 {
            return None;
        }
        Some(Self { factors, expanded })
    }

    /// Draws a random expansion exercise.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, leading: Leading) -> Self {
        sample(rng, "expansion", |rng| {
            let d = leading.draw(rng, LEADING);
            let e = CONSTANT.draw(rng);
            let f = leading.draw(rng, LEADING);
            let g = CONSTANT.draw(rng);
            Self::from_factors(d, e, f, g)
        })
        .unwrap_or_else(|| Self::fallback(leading))
    }

    /// `(x+2)(x-3)`, or `(2x+1)(x-3)` when the leading coefficient is drawn.
    fn fallback(leading: Leading) -> Self {
        match leading {
            Leading::Monic => Self {
                factors: [poly![1, 2], poly![1, -3]],
                expanded: poly![1, -1, -6],
            },
            Leading::General => Self {
                factors: [poly![2, 1], poly![1, -3]],
                expanded: poly![2, -5, -3],
            },
        }
    }

    /// The binomials `dx+e` and `fx+g`.
    pub fn factors(&self) -> &[Poly; 2] {
        &self.factors
    }

    /// The trinomial `ax^2+bx+c`.
    pub fn expanded(&self) -> &Poly {
        &self.expanded
    }

    fn factored_form(&self, form: EmitFormat) -> String {
        format!(
            "({})({})",
            self.factors[0].emit(form),
            self.factors[1].emit(form)
        )
    }
}

impl Exercise for Expansion {
    fn question(&self, form: EmitFormat) -> String {
        self.factored_form(form)
    }

    fn answer(&self, form: EmitFormat) -> String {
        self.expanded.emit(form)
    }
}

/// Factorizing a trinomial into two binomials; an [Expansion][Expansion] asked in reverse.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Factorization(pub Expansion);

impl Factorization {
    /// Draws a random factorization exercise.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, leading: Leading) -> Self {
        Self(Expansion::generate(rng, leading))
    }
}

impl Exercise for Factorization {
    fn question(&self, form: EmitFormat) -> String {
        self.0.expanded.emit(form)
    }

    fn answer(&self, form: EmitFormat) -> String {
        self.0.factored_form(form)
    }
}
