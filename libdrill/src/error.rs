use thiserror::Error;

/// Errors raised when reading drill configuration from strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
    #[error("unknown course `{0}`; expected `random` or a category")]
    UnknownCourse(String),
    #[error("unknown emit format `{0}`; expected `latex` or `pretty`")]
    UnknownEmitFormat(String),
}
