//! Problem generators, one per category.
//!
//! A generator draws random integer parameters, rejects draws that would make a degenerate or
//! unintentionally easy problem, and computes the exact answer. The result is a typed exercise
//! that renders into a [Problem][crate::Problem] in any [EmitFormat][crate::EmitFormat].
//!
//! Every generator also has a deterministic constructor taking its parameters explicitly, which
//! is what its rejection loop calls with each draw.

use crate::draw::IntRange;
use crate::emit::EmitFormat;
use crate::problem::Problem;

use rand::Rng;

mod completion;
pub use completion::Completion;

mod differentiation;
pub use differentiation::Differentiation;

mod equation;
pub use equation::{Equation, Roots};

mod expansion;
pub use expansion::{Expansion, Factorization};

mod integration;
pub use integration::Integration;

mod summation;
pub use summation::Summation;

mod trig;
pub use trig::{ExactValue, TrigFn, Trigonometric};

/// Whether a generated polynomial's leading coefficient is fixed to 1 or drawn.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Leading {
    /// The leading coefficient is 1.
    Monic,
    /// The leading coefficient is drawn from a small positive range.
    General,
}

impl Leading {
    /// Draws a leading coefficient from `range`, or 1 for a monic polynomial.
    pub fn draw<R: Rng + ?Sized>(self, rng: &mut R, range: IntRange) -> i64 {
        match self {
            Self::Monic => 1,
            Self::General => range.draw(rng),
        }
    }
}

/// A generated exercise with an exact answer.
pub trait Exercise {
    /// The body of the question, without display delimiters.
    fn question(&self, form: EmitFormat) -> String;

    /// The body of the answer, without display delimiters.
    fn answer(&self, form: EmitFormat) -> String;

    /// Renders the exercise as a [Problem][Problem].
    fn problem(&self, form: EmitFormat) -> Problem {
        Problem::display(form, &self.question(form), &self.answer(form))
    }
}
