use super::gcd;

/// A rational number `num / den` kept in canonical form.
///
/// Every constructed fraction is reduced to lowest terms and carries its sign on the numerator, so
/// the denominator is always positive. Two fractions are equal exactly when their values are.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Fraction {
    num: i64,
    den: i64,
}

impl Fraction {
    /// Creates the canonical form of `num / den`.
    ///
    /// ```
    /// use libdrill::math::Fraction;
    ///
    /// let f = Fraction::new(6, -8);
    /// assert_eq!((f.numer(), f.denom()), (-3, 4));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero, or if moving the sign to the numerator overflows, as for
    /// `i64::MIN / -1`.
    pub fn new(num: i64, den: i64) -> Self {
        assert_ne!(den, 0, "fraction {}/0 has a zero denominator", num);
        let common = gcd(num.unsigned_abs(), den.unsigned_abs()) as i64;
        let (num, den) = (num / common, den / common);
        if den < 0 {
            match (num.checked_neg(), den.checked_neg()) {
                (Some(num), Some(den)) => Self { num, den },
                _ => panic!("fraction {}/{} has no canonical form in i64", num, den),
            }
        } else {
            Self { num, den }
        }
    }

    #[inline]
    pub fn numer(&self) -> i64 {
        self.num
    }

    #[inline]
    pub fn denom(&self) -> i64 {
        self.den
    }

    /// Whether the fraction is a whole number, i.e. renders without a denominator.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.den == 1
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.num < 0
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self { num: n, den: 1 }
    }
}
