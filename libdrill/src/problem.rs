use crate::emit::EmitFormat;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// A rendered question and its answer.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Problem {
    pub question: String,
    pub answer: String,
}

impl Problem {
    /// Creates a problem from a question and answer body, each wrapped as display math.
    pub fn display(form: EmitFormat, question: &str, answer: &str) -> Self {
        Self {
            question: form.display_math(question),
            answer: form.display_math(answer),
        }
    }
}
