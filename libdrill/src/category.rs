use crate::emit::EmitFormat;
use crate::generators::*;
use crate::problem::Problem;
use crate::Error;

use core::fmt;
use rand::{Rng, RngCore};
use std::str::FromStr;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// A kind of problem. Each category maps to exactly one generator.
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Category {
    /// Expand `(dx+e)(fx+g)`.
    Expansion,
    /// Factorize `x^2+bx+c`.
    FactorizationMonic,
    /// Factorize `ax^2+bx+c`.
    FactorizationGeneral,
    /// Complete the square of `x^2+bx+c`.
    CompletionMonic,
    /// Complete the square of `ax^2+bx+c`.
    CompletionGeneral,
    /// Solve a quadratic equation.
    Equation,
    /// Differentiate a polynomial.
    Differentiation,
    /// Evaluate a definite integral of a quadratic.
    Integration,
    /// Evaluate a finite sum.
    Summation,
    /// Find a trigonometric value at a standard angle.
    Trigonometric,
}

/// A generator behind a [Category][Category].
pub type Generator = fn(&mut dyn RngCore, EmitFormat) -> Problem;

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Expansion,
        Category::FactorizationMonic,
        Category::FactorizationGeneral,
        Category::CompletionMonic,
        Category::CompletionGeneral,
        Category::Equation,
        Category::Differentiation,
        Category::Integration,
        Category::Summation,
        Category::Trigonometric,
    ];

    /// The tag naming the category, like `factorization-monic`.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Expansion => "expansion",
            Self::FactorizationMonic => "factorization-monic",
            Self::FactorizationGeneral => "factorization-general",
            Self::CompletionMonic => "completion-monic",
            Self::CompletionGeneral => "completion-general",
            Self::Equation => "equation",
            Self::Differentiation => "differentiation",
            Self::Integration => "integration",
            Self::Summation => "summation",
            Self::Trigonometric => "trigonometric",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Expansion => "Expansion",
            Self::FactorizationMonic => "Factorization (x²)",
            Self::FactorizationGeneral => "Factorization (ax²)",
            Self::CompletionMonic => "Completing the square (x²)",
            Self::CompletionGeneral => "Completing the square (ax²)",
            Self::Equation => "Quadratic equations",
            Self::Differentiation => "Differentiation",
            Self::Integration => "Definite integrals",
            Self::Summation => "Summation",
            Self::Trigonometric => "Trigonometric ratios",
        }
    }

    /// The instruction shown above a question of this category.
    pub fn instruction(self) -> &'static str {
        match self {
            Self::Expansion => "Expand the expression.",
            Self::FactorizationMonic | Self::FactorizationGeneral => "Factorize the expression.",
            Self::CompletionMonic | Self::CompletionGeneral => "Complete the square.",
            Self::Equation => "Solve the equation.",
            Self::Differentiation => "Differentiate the function.",
            Self::Integration => "Evaluate the definite integral.",
            Self::Summation => "Evaluate the sum.",
            Self::Trigonometric => "Find the exact value.",
        }
    }

    /// The generator of this category.
    pub fn generator(self) -> Generator {
        match self {
            Self::Expansion => |rng, form| Expansion::generate(rng, Leading::General).problem(form),
            Self::FactorizationMonic => {
                |rng, form| Factorization::generate(rng, Leading::Monic).problem(form)
            }
            Self::FactorizationGeneral => {
                |rng, form| Factorization::generate(rng, Leading::General).problem(form)
            }
            Self::CompletionMonic => {
                |rng, form| Completion::generate(rng, Leading::Monic).problem(form)
            }
            Self::CompletionGeneral => {
                |rng, form| Completion::generate(rng, Leading::General).problem(form)
            }
            Self::Equation => |rng, form| Equation::generate(rng).problem(form),
            Self::Differentiation => |rng, form| Differentiation::generate(rng).problem(form),
            Self::Integration => |rng, form| Integration::generate(rng).problem(form),
            Self::Summation => |rng, form| Summation::generate(rng).problem(form),
            Self::Trigonometric => |rng, form| Trigonometric::generate(rng).problem(form),
        }
    }

    /// Generates a problem of this category.
    pub fn generate<R: RngCore>(self, rng: &mut R, form: EmitFormat) -> Problem {
        (self.generator())(rng, form)
    }

    /// Picks a category uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.tag() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_owned()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
