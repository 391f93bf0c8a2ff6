use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A statistic (or one half of a quartile split) received no values
    #[error("cannot compute a statistic over an empty sample")]
    Empty,

    /// A divisor came out as zero, e.g. a single value under Bessel's correction
    #[error("division by zero")]
    DivisionByZero,

    /// A value could not be read or ordered as a number
    #[error("expected a number, found `{value}`")]
    TypeMismatch { value: String },

    #[error("paired samples differ in length ({x} x values, {y} y values)")]
    LengthMismatch { x: usize, y: usize },

    #[error("line {line}: expected exactly one x and one y value")]
    MalformedPair { line: usize },

    #[error("unrecognized plot style `{token}`")]
    UnknownStyle { token: String },

    #[error("invalid distribution: {0}")]
    Distribution(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
