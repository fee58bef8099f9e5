//! Procedural generation of algebra drill problems with exact answers.
//!
//! Each [Category][Category] of problem has a generator that draws random integer parameters,
//! rejects degenerate draws, and renders a question and its exact answer in an
//! [EmitFormat][EmitFormat]. A [Session][Session] draws a numbered set of problems for a
//! [Course][Course].
//!
//! ```
//! use libdrill::{generate, Category, EmitFormat};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let problem = generate(Category::Expansion, &mut rng, EmitFormat::Latex);
//! assert!(problem.question.starts_with("$$ ("));
//! ```

pub mod math;

#[macro_use]
pub mod emit;
pub use emit::{Emit, EmitFormat};

pub mod draw;
pub mod generators;

mod category;
pub use category::{Category, Generator};

mod error;
pub use error::Error;

mod problem;
pub use problem::Problem;

mod session;
pub use session::{Course, Session, SessionItem};

#[cfg(test)]
mod proptests;

use rand::RngCore;

/// Generates one problem of `category`.
pub fn generate<R: RngCore>(category: Category, rng: &mut R, form: EmitFormat) -> Problem {
    category.generate(rng, form)
}
