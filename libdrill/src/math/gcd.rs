use num_traits::{PrimInt, Unsigned};

/// Calculates the GCD for (u, v) ∈ (N, N), with `gcd(u, 0) = u`.
///
/// The [Euclidean GCD] algorithm is used as an underlying implementation.
///
/// [Euclidean GCD]: https://en.wikipedia.org/wiki/Euclidean_algorithm
pub fn gcd<N: Unsigned + PrimInt>(u: N, v: N) -> N {
    if v.is_zero() {
        u
    } else {
        gcd(v, u % v)
    }
}

/// Calculates the GCD of three signed integers, taken over their magnitudes.
///
/// A trinomial `ax^2 + bx + c` with `gcd3(a, b, c) > 1` has a common integer factor that can be
/// pulled out before anything else is done to it.
///
/// ```
/// use libdrill::math::gcd3;
///
/// assert_eq!(gcd3(2, -4, 6), 2);
/// assert_eq!(gcd3(6, 5, -6), 1);
/// ```
pub fn gcd3(a: i64, b: i64, c: i64) -> u64 {
    gcd(
        a.unsigned_abs(),
        gcd(b.unsigned_abs(), c.unsigned_abs()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASES: [(u32, u32, u32); 9] = [
        (13, 13, 13),
        (37, 600, 1),
        (20, 100, 20),
        (624_129, 2_061_517, 18_913),
        (600, 37, 1),
        (100, 20, 20),
        (2_061_517, 624_129, 18_913),
        (7, 0, 7),
        (0, 7, 7),
    ];

    #[test]
    fn test_gcd() {
        for (u, v, r) in CASES.iter() {
            assert_eq!(gcd(*u, *v), *r);
        }
    }

    const CASES_3: [(i64, i64, i64, u64); 6] = [
        (2, 4, 6, 2),
        (-3, 9, -12, 3),
        (1, -1, -6, 1),
        (6, 5, -6, 1),
        (4, 0, -8, 4),
        (0, 0, 5, 5),
    ];

    #[test]
    fn test_gcd3() {
        for (a, b, c, r) in CASES_3.iter() {
            assert_eq!(gcd3(*a, *b, *c), *r, "gcd3({}, {}, {})", a, b, c);
        }
    }
}
