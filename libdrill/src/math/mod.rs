//! Exact integer and rational arithmetic underlying every generator.
//!
//! Nothing here touches floating point: fractions are kept in lowest terms, radicals are kept
//! square-free, and polynomials have integer coefficients.

mod gcd;
pub use gcd::*;

mod fraction;
pub use fraction::*;

mod radical;
pub use radical::*;

mod poly;
pub use poly::*;
