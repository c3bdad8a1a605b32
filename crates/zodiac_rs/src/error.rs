//! Host-facing error type and status codes.

use std::error::Error;
use std::fmt::{Display, Formatter};

use zodiac_chart::ChartError;
use zodiac_core::EphemerisError;

/// Errors surfaced across the host boundary.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum HostError {
    InvalidBody(i32),
    HouseSystemUndefined(&'static str),
    MalformedInput(String),
}

impl Display for HostError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBody(id) => write!(f, "invalid body: {id}"),
            Self::HouseSystemUndefined(msg) => write!(f, "house system undefined: {msg}"),
            Self::MalformedInput(msg) => write!(f, "malformed input: {msg}"),
        }
    }
}

impl Error for HostError {}

impl From<ChartError> for HostError {
    fn from(e: ChartError) -> Self {
        match e {
            ChartError::InvalidBody(id) => Self::InvalidBody(id),
            ChartError::HouseSystemUndefined(msg) => Self::HouseSystemUndefined(msg),
            ChartError::MalformedInput(msg) => Self::MalformedInput(msg),
            other => Self::MalformedInput(other.to_string()),
        }
    }
}

impl From<EphemerisError> for HostError {
    fn from(e: EphemerisError) -> Self {
        ChartError::from(e).into()
    }
}

impl From<serde_json::Error> for HostError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedInput(e.to_string())
    }
}

/// Integer status codes for hosts that cannot carry a typed error.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStatus {
    Ok = 0,
    InvalidBody = 1,
    HouseSystemUndefined = 2,
    MalformedInput = 3,
}

impl From<&HostError> for HostStatus {
    fn from(value: &HostError) -> Self {
        match value {
            HostError::InvalidBody(_) => Self::InvalidBody,
            HostError::HouseSystemUndefined(_) => Self::HouseSystemUndefined,
            HostError::MalformedInput(_) => Self::MalformedInput,
        }
    }
}
