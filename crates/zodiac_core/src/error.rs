use std::error::Error;
use std::fmt::{Display, Formatter};

/// Position-service errors.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Body id outside the supported set.
    InvalidBody(i32),
    /// Julian Day is NaN or infinite.
    NonFiniteEpoch(f64),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBody(id) => write!(f, "invalid body: {id}"),
            Self::NonFiniteEpoch(jd) => write!(f, "non-finite epoch: {jd}"),
        }
    }
}

impl Error for EphemerisError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_id() {
        assert_eq!(EphemerisError::InvalidBody(99).to_string(), "invalid body: 99");
    }
}
