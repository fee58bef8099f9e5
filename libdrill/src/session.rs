//! Drill sessions: a set of problems drawn for one course.

use crate::category::Category;
use crate::emit::EmitFormat;
use crate::problem::Problem;
use crate::Error;

use core::fmt;
use rand::RngCore;
use std::str::FromStr;
use tracing::debug;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// What a session draws its problems from.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Course {
    /// Every problem is of one category.
    Single(Category),
    /// Every problem is of a category picked uniformly at random.
    Random,
}

impl Course {
    /// All courses, `random` first.
    pub fn all() -> impl Iterator<Item = Course> {
        std::iter::once(Course::Random).chain(Category::ALL.iter().copied().map(Course::Single))
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Single(category) => category.tag(),
            Self::Random => "random",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Single(category) => category.display_name(),
            Self::Random => "Random (all categories)",
        }
    }

    fn pick<R: RngCore>(self, rng: &mut R) -> Category {
        match self {
            Self::Single(category) => category,
            Self::Random => Category::random(rng),
        }
    }
}

impl Default for Course {
    fn default() -> Self {
        Self::Random
    }
}

impl FromStr for Course {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "random" {
            return Ok(Self::Random);
        }
        s.parse()
            .map(Self::Single)
            .map_err(|_| Error::UnknownCourse(s.to_owned()))
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A problem drawn in a session, with the category it was drawn from.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SessionItem {
    pub category: Category,
    pub instruction: String,
    pub problem: Problem,
}

/// A numbered set of problems for one course.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Session {
    course: Course,
    form: EmitFormat,
    items: Vec<SessionItem>,
}

impl Session {
    /// The number of problems in a session unless asked otherwise.
    pub const DEFAULT_SIZE: usize = 10;

    /// Draws `count` problems for `course`.
    pub fn start<R: RngCore>(course: Course, form: EmitFormat, count: usize, rng: &mut R) -> Self {
        let items = (0..count)
            .map(|i| {
                let category = course.pick(rng);
                debug!(course = course.tag(), category = category.tag(), n = i + 1, "drawing problem");
                SessionItem {
                    category,
                    instruction: category.instruction().to_owned(),
                    problem: category.generate(rng, form),
                }
            })
            .collect();
        Self {
            course,
            form,
            items,
        }
    }

    pub fn course(&self) -> Course {
        self.course
    }

    pub fn form(&self) -> EmitFormat {
        self.form
    }

    pub fn items(&self) -> &[SessionItem] {
        &self.items
    }

    /// The numbered questions, each under its instruction.
    ///
    /// ```text
    /// Q1. Expand the expression.
    ///     $$ (x+2)(x-3) $$
    /// ```
    pub fn question_sheet(&self) -> String {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                format!(
                    "Q{}. {}\n    {}\n",
                    i + 1,
                    item.instruction,
                    item.problem.question
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The numbered questions with their answers.
    ///
    /// ```text
    /// Q1: $$ (x+2)(x-3) $$
    /// A:  $$ x^2-x-6 $$
    /// ```
    pub fn answer_sheet(&self) -> String {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                format!(
                    "Q{}: {}\nA:  {}\n",
                    i + 1,
                    item.problem.question,
                    item.problem.answer
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(feature = "serde-serialize")]
impl Serialize for Session {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Session", 4)?;
        state.serialize_field("course", self.course.tag())?;
        state.serialize_field("course_name", self.course.display_name())?;
        state.serialize_field("format", &self.form)?;
        state.serialize_field("problems", &self.items)?;
        state.end()
    }
}
