//! Error types for chart calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use zodiac_core::EphemerisError;

/// Errors from house, chart and aspect calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Body id outside the supported set.
    InvalidBody(i32),
    /// Placidus cusps cannot be constructed (polar latitude or no convergence).
    HouseSystemUndefined(&'static str),
    /// Caller-supplied data has the wrong shape or non-finite values.
    MalformedInput(String),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBody(id) => write!(f, "invalid body: {id}"),
            Self::HouseSystemUndefined(msg) => write!(f, "house system undefined: {msg}"),
            Self::MalformedInput(msg) => write!(f, "malformed input: {msg}"),
        }
    }
}

impl Error for ChartError {}

impl From<EphemerisError> for ChartError {
    fn from(e: EphemerisError) -> Self {
        match e {
            EphemerisError::InvalidBody(id) => Self::InvalidBody(id),
            other => Self::MalformedInput(other.to_string()),
        }
    }
}
