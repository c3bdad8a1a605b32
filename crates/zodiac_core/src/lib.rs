//! Analytical ephemeris for the zodiac engine.
//!
//! This crate provides the [`Body`] identifiers, the analytical series
//! evaluator (VSOP87 planets, truncated lunar theory, lunar node) and
//! the position service built on top of it. No data files are read; every
//! coefficient lives in static tables, the VSOP87 ones in the `vsop87`
//! crate.
//!
//! ```rust,ignore
//! use zodiac_core::{Body, position_of};
//! let sun = position_of(2_451_545.0, Body::Sun, true)?;
//! assert!((sun.longitude - 280.37).abs() < 0.02);
//! ```

pub mod body;
pub mod error;
pub mod position;
mod series;
pub mod service;

pub use body::{
    ALL_BODIES, ALL_HELIO_BODIES, Body, DEFAULT_BODIES, EARTH_CODE, HelioBody, PLANETS, body_name,
};
pub use error::EphemerisError;
pub use position::{CalcFlags, EclipticPosition};
pub use series::moon::AU_KM;
pub use series::{ABERRATION_ARCSEC, LIGHT_TIME_DAYS_PER_AU};
pub use service::{
    SPEED_STEP_DAYS, heliocentric_position, heliocentric_position_code, position_of,
    position_of_code, positions_all, positions_batch,
};

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time assertion: results can cross threads.
    #[allow(dead_code)]
    const _: () = {
        fn assert_send_sync<T: Send + Sync>() {}
        fn check() {
            assert_send_sync::<EclipticPosition>();
            assert_send_sync::<EphemerisError>();
            assert_send_sync::<Body>();
        }
    };
}
