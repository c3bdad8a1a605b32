//! Reference-frame helpers for the zodiac engine.
//!
//! Provides nutation and obliquity, precession of ecliptic coordinates
//! between epochs, and Cartesian ⇄ spherical conversion.

pub mod nutation;
pub mod obliquity;
pub mod precession;
pub mod spherical;

pub use nutation::{Nutation, fundamental_arguments, nutation_arcsec};
pub use obliquity::{OBLIQUITY_J2000_ARCSEC, mean_obliquity_deg, true_obliquity_deg};
pub use precession::{ecliptic_date_to_j2000, ecliptic_j2000_to_date, precess_ecliptic};
pub use spherical::Spherical;
