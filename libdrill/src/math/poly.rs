use super::{gcd, Fraction};

/// The indeterminate a polynomial is written in.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Var {
    /// `x`, used by every polynomial and equation exercise.
    X,
    /// `k`, the index of a summation.
    K,
}

impl Var {
    pub fn symbol(self) -> char {
        match self {
            Self::X => 'x',
            Self::K => 'k',
        }
    }
}

impl Default for Var {
    fn default() -> Self {
        Self::X
    }
}

/// A signed coefficient on a power of a variable, like `-2x^2`.
///
/// A power of 0 is a constant term.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Term {
    pub coeff: i64,
    pub var: Var,
    pub pow: u32,
}

impl Term {
    pub fn new(coeff: i64, var: Var, pow: u32) -> Self {
        Self { coeff, var, pow }
    }
}

/// A dense univariate polynomial with integer coefficients.
///
/// Coefficients are stored leading term first, so `vec![1, -1, -6]` is `x^2 - x - 6`.
#[derive(Default, Clone, Eq, PartialEq, Debug)]
pub struct Poly {
    pub var: Var,
    pub vec: Vec<i64>,
}

/// Creates a new polynomial in `x`.
///
/// # Examples:
///
/// ```
/// use libdrill::poly;
///
/// let p = poly![1, 2, -4]; // x^2 + 2x - 4
/// assert_eq!(p.deg(), 2);
/// assert!(poly![].is_zero());
/// ```
#[macro_export]
macro_rules! poly {
    ($($x:expr),+ $(,)?) => (
        $crate::math::Poly::new($crate::math::Var::X, vec![$($x),+])
    );

    () => {
        $crate::math::Poly::new($crate::math::Var::X, vec![])
    };
}

impl Poly {
    /// Creates a polynomial from coefficients ordered leading term first. Leading zero
    /// coefficients are dropped.
    pub fn new(var: Var, vec: Vec<i64>) -> Self {
        Self { var, vec }.truncate_zeros()
    }

    /// Creates a polynomial from `(coefficient, power)` pairs. Pairs with the same power are
    /// summed.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libdrill::math::{Poly, Var};
    ///
    /// // 2x^3 - x + 5
    /// let p = Poly::from_terms(Var::X, &[(2, 3), (-1, 1), (5, 0)]);
    /// assert_eq!(p.vec, vec![2, 0, -1, 5]);
    /// ```
    pub fn from_terms(var: Var, terms: &[(i64, u32)]) -> Self {
        let deg = terms.iter().map(|&(_, pow)| pow).max().unwrap_or(0) as usize;
        let mut vec = vec![0; deg + 1];
        for &(coeff, pow) in terms {
            vec[deg - pow as usize] += coeff;
        }
        Self::new(var, vec)
    }

    /// Whether every coefficient is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.vec.iter().all(|&n| n == 0)
    }

    /// Gets the degree of the polynomial. The zero polynomial has degree -1.
    #[inline]
    pub fn deg(&self) -> isize {
        self.vec.len() as isize - 1
    }

    /// The leading coefficient.
    #[inline]
    pub fn lc(&self) -> i64 {
        *self.vec.get(0).unwrap_or(&0)
    }

    /// The coefficient of `var^pow`.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libdrill::poly;
    ///
    /// let p = poly![3, 0, -5];
    /// assert_eq!((p.coeff(2), p.coeff(1), p.coeff(0), p.coeff(7)), (3, 0, -5, 0));
    /// ```
    pub fn coeff(&self, pow: u32) -> i64 {
        let pow = pow as isize;
        if pow > self.deg() {
            0
        } else {
            self.vec[(self.deg() - pow) as usize]
        }
    }

    /// The terms of the polynomial, leading term first. Zero terms are included.
    pub fn terms(&self) -> impl Iterator<Item = Term> + '_ {
        let deg = self.deg();
        let var = self.var;
        self.vec
            .iter()
            .enumerate()
            .map(move |(i, &coeff)| Term::new(coeff, var, (deg - i as isize) as u32))
    }

    /// The [content] of the polynomial: the GCD of its coefficients' magnitudes.
    /// A polynomial whose content exceeds 1 has a common integer factor.
    ///
    /// [content]: https://en.wikipedia.org/wiki/Primitive_part_and_content
    pub fn content(&self) -> u64 {
        self.vec
            .iter()
            .fold(0, |content, &coeff| gcd(coeff.unsigned_abs(), content))
    }

    /// Multiplies each term in the polynomial by a scalar.
    pub fn mul_scalar(mut self, c: i64) -> Self {
        for term in self.vec.iter_mut() {
            *term *= c;
        }
        self.truncate_zeros()
    }

    /// Multiplies `self` by `other`.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libdrill::poly;
    ///
    /// // (x + 2)(x - 3) -> x^2 - x - 6
    /// assert_eq!(poly![1, 2].mul(&poly![1, -3]), poly![1, -1, -6]);
    /// ```
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::new(self.var, vec![]);
        }
        let mut vec = vec![0; self.vec.len() + other.vec.len() - 1];
        for (i, a) in self.vec.iter().enumerate() {
            for (j, b) in other.vec.iter().enumerate() {
                vec[i + j] += a * b;
            }
        }
        Self::new(self.var, vec)
    }

    /// Differentiates the polynomial termwise by the power rule, `d/dx[a·x^n] = n·a·x^(n-1)`.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libdrill::poly;
    ///
    /// // 2x^3 - x + 5 -> 6x^2 - 1
    /// assert_eq!(poly![2, 0, -1, 5].derivative(), poly![6, 0, -1]);
    /// ```
    pub fn derivative(&self) -> Self {
        let vec = self
            .terms()
            .filter(|term| term.pow > 0)
            .map(|term| term.coeff * i64::from(term.pow))
            .collect();
        Self::new(self.var, vec)
    }

    /// Evaluates the polynomial at a value `x`.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libdrill::poly;
    ///
    /// // (x^2 - 4)(1) -> -3
    /// assert_eq!(poly![1, 0, -4].eval(1), -3);
    /// ```
    #[inline]
    pub fn eval(&self, x: i64) -> i64 {
        self.vec.iter().fold(0, |res, &n| res * x + n)
    }

    /// Evaluates the polynomial exactly at a rational point `p/q`.
    ///
    /// The value is `Σ cᵢ·pⁱ·q^(deg-i) / q^deg`, which keeps every intermediate an integer.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libdrill::{math::Fraction, poly};
    ///
    /// // 2x^2 - x - 1 at x = -1/2 is 0
    /// assert!(poly![2, -1, -1].eval_fraction(Fraction::new(-1, 2)).is_zero());
    /// ```
    pub fn eval_fraction(&self, x: Fraction) -> Fraction {
        if self.is_zero() {
            return Fraction::from(0);
        }
        let (p, q) = (x.numer(), x.denom());
        let deg = self.deg() as u32;
        let num: i64 = self
            .terms()
            .map(|term| term.coeff * p.pow(term.pow) * q.pow(deg - term.pow))
            .sum();
        Fraction::new(num, q.pow(deg))
    }

    fn truncate_zeros(mut self) -> Self {
        let first_nonzero = self
            .vec
            .iter()
            .position(|&n| n != 0)
            .unwrap_or_else(|| self.vec.len());
        self.vec.drain(..first_nonzero);
        self
    }
}
