/// A radical `outside·√inside` whose radicand is square-free.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Radical {
    pub outside: u64,
    pub inside: u64,
}

impl Radical {
    /// Extracts the largest perfect square from `√n`.
    ///
    /// Trial division runs from `⌊√n⌋` down to 2; the first `i` with `i² | n` is the largest such
    /// square root, and what remains under the radical is square-free.
    ///
    /// ```
    /// use libdrill::math::Radical;
    ///
    /// assert_eq!(Radical::simplify(72), Radical { outside: 6, inside: 2 });
    /// assert_eq!(Radical::simplify(15), Radical { outside: 1, inside: 15 });
    /// ```
    ///
    /// `√0` is represented as `0·√1`.
    pub fn simplify(n: u64) -> Self {
        if n == 0 {
            return Self {
                outside: 0,
                inside: 1,
            };
        }
        let mut i = isqrt(n);
        while i > 1 {
            if n % (i * i) == 0 {
                return Self {
                    outside: i,
                    inside: n / (i * i),
                };
            }
            i -= 1;
        }
        Self {
            outside: 1,
            inside: n,
        }
    }
}

/// The integer square root `⌊√n⌋`, computed without floating-point error.
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    // Newton's iteration from above converges monotonically to ⌊√n⌋.
    let mut x = n;
    let mut y = x / 2 + (x & 1);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// `Some(√n)` when `n` is a perfect square.
pub fn exact_sqrt(n: u64) -> Option<u64> {
    let root = isqrt(n);
    if root * root == n {
        Some(root)
    } else {
        None
    }
}
