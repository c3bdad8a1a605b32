//! Sidereal time in degrees.
//!
//! Everything here feeds the house solver's right ascension of the
//! meridian (ARMC). Inputs are UT Julian Days; UT1 − UTC is ignored.
//! Rotation angle per IERS Conventions 2010 eq. 5.15, GMST polynomial per
//! Capitaine et al. 2003.

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

/// Earth rotation angle, degrees in [0, 360).
pub fn earth_rotation_angle_deg(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    // Fractional turns; keep the integer day out of the product.
    let turns = 0.779_057_273_264 + 0.002_737_811_911_354_48 * du + du.fract();
    (turns.rem_euclid(1.0)) * 360.0
}

/// Greenwich mean sidereal time, degrees in [0, 360).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = (jd_ut - J2000_JD) / DAYS_PER_CENTURY;
    const POLY_ARCSEC: [f64; 6] = [
        0.014_506,
        4_612.156_534,
        1.391_581_7,
        -0.000_000_44,
        -0.000_029_956,
        -0.000_000_036_8,
    ];
    let arcsec = POLY_ARCSEC.iter().rev().fold(0.0, |acc, &c| acc * t + c);
    (earth_rotation_angle_deg(jd_ut) + arcsec / 3600.0).rem_euclid(360.0)
}

/// Equation of the equinoxes Δψ·cos ε, degrees.
pub fn equation_of_equinoxes_deg(dpsi_deg: f64, true_obliquity_deg: f64) -> f64 {
    dpsi_deg * true_obliquity_deg.to_radians().cos()
}

/// Greenwich apparent sidereal time, degrees in [0, 360).
pub fn gast_deg(jd_ut: f64, dpsi_deg: f64, true_obliquity_deg: f64) -> f64 {
    (gmst_deg(jd_ut) + equation_of_equinoxes_deg(dpsi_deg, true_obliquity_deg)).rem_euclid(360.0)
}

/// Right ascension of the meridian at an east longitude: local apparent
/// sidereal time in degrees, [0, 360).
pub fn armc_deg(jd_ut: f64, dpsi_deg: f64, true_obliquity_deg: f64, east_longitude_deg: f64) -> f64 {
    (gast_deg(jd_ut, dpsi_deg, true_obliquity_deg) + east_longitude_deg).rem_euclid(360.0)
}
