//! Error kinds shared across the engine.

use thiserror::Error;

/// Raised when a raw instrument line cannot be decoded.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The line does not satisfy the dialect's validity predicate.
    #[error("line is not a valid {0} record")]
    InvalidLine(&'static str),

    /// A field expected by the dialect is absent from the line.
    #[error("missing {0} field")]
    MissingField(&'static str),

    /// A field was found but does not hold a usable number.
    #[error("bad numeric value for {field}: {value:?}")]
    BadNumber { field: &'static str, value: String },

    /// A sexagesimal angle string does not follow the `D.MMSS` layout.
    #[error("malformed raw angle {0:?}")]
    BadAngle(String),
}

/// Raised when a geometric operation is asked for a direction that does not
/// exist: a zero-length sight or two coincident points. There is no
/// recovery and no default bearing.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("zero-length sight: direction is undefined")]
pub struct DegenerateReading;
