//! Obliquity of the ecliptic.
//!
//! Mean obliquity from the IAU 2006 polynomial (Hilton et al. 2006), true
//! obliquity by adding the IAU 2000B nutation in obliquity.

use crate::nutation::nutation_arcsec;

/// Mean obliquity at J2000.0 in arcseconds (IAU 2006).
pub const OBLIQUITY_J2000_ARCSEC: f64 = 84_381.406;

/// Mean obliquity of the ecliptic in degrees.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    let arcsec = OBLIQUITY_J2000_ARCSEC - 46.836769 * t - 0.0001831 * t2 + 0.00200340 * t3
        - 0.000000576 * t4
        - 0.0000000434 * t5;
    arcsec / 3600.0
}

/// True obliquity (mean + Δε) in degrees.
pub fn true_obliquity_deg(t: f64) -> f64 {
    let (_, deps) = nutation_arcsec(t);
    mean_obliquity_deg(t) + deps / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_at_j2000() {
        let eps = mean_obliquity_deg(0.0);
        assert!((eps - 23.439_279).abs() < 1e-6, "ε0 = {eps}°");
    }

    #[test]
    fn decreasing_over_time() {
        // ~47″ per century.
        let drop = (mean_obliquity_deg(0.0) - mean_obliquity_deg(1.0)) * 3600.0;
        assert!((drop - 46.84).abs() < 0.1, "drop = {drop}″");
    }

    #[test]
    fn true_differs_by_nutation() {
        let t = 0.24;
        let diff = (true_obliquity_deg(t) - mean_obliquity_deg(t)) * 3600.0;
        assert!(diff.abs() < 10.5, "Δε = {diff}″");
        assert!(diff != 0.0);
    }
}
