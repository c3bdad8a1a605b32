//! Heliocentric planet vectors.
//!
//! Mercury through Neptune and the Earth come from the full VSOP87A
//! series (heliocentric rectangular, ecliptic and equinox J2000). Pluto
//! falls back to its mean elements.

use vsop87::{RectangularCoordinates, vsop87a};
use zodiac_time::{DAYS_PER_CENTURY, J2000_JD};

use super::elements::pluto_j2000;

/// Bodies with a heliocentric orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Orbit {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Orbit {
    pub(crate) const ALL: [Orbit; 9] = [
        Orbit::Mercury,
        Orbit::Venus,
        Orbit::Earth,
        Orbit::Mars,
        Orbit::Jupiter,
        Orbit::Saturn,
        Orbit::Uranus,
        Orbit::Neptune,
        Orbit::Pluto,
    ];
}

fn xyz(c: RectangularCoordinates) -> [f64; 3] {
    [c.x, c.y, c.z]
}

/// Heliocentric J2000 ecliptic vector (AU) at `t` Julian centuries of TT.
pub(crate) fn heliocentric_j2000(orbit: Orbit, t: f64) -> [f64; 3] {
    let jde = J2000_JD + t * DAYS_PER_CENTURY;
    match orbit {
        Orbit::Mercury => xyz(vsop87a::mercury(jde)),
        Orbit::Venus => xyz(vsop87a::venus(jde)),
        Orbit::Earth => xyz(vsop87a::earth(jde)),
        Orbit::Mars => xyz(vsop87a::mars(jde)),
        Orbit::Jupiter => xyz(vsop87a::jupiter(jde)),
        Orbit::Saturn => xyz(vsop87a::saturn(jde)),
        Orbit::Uranus => xyz(vsop87a::uranus(jde)),
        Orbit::Neptune => xyz(vsop87a::neptune(jde)),
        Orbit::Pluto => pluto_j2000(t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(v: [f64; 3]) -> f64 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn earth_at_j2000() {
        // VSOP87A Earth, 2000-01-01 12h TT.
        let v = heliocentric_j2000(Orbit::Earth, 0.0);
        assert!((v[0] + 0.1771).abs() < 1e-3, "x = {}", v[0]);
        assert!((v[1] - 0.9672).abs() < 1e-3, "y = {}", v[1]);
        assert!(v[2].abs() < 1e-5, "z = {}", v[2]);
        assert!((norm(v) - 0.983328).abs() < 1e-5, "r = {}", norm(v));
    }

    #[test]
    fn mean_distances() {
        let expected = [0.387, 0.723, 1.0, 1.524, 5.20, 9.55, 19.2, 30.1, 39.5];
        for (orbit, a) in Orbit::ALL.into_iter().zip(expected) {
            let mut t = -0.75;
            while t <= 0.75 {
                let r = norm(heliocentric_j2000(orbit, t));
                assert!((r / a - 1.0).abs() < 0.26, "{orbit:?} r = {r} AU at T={t}");
                t += 0.125;
            }
        }
    }

    #[test]
    fn mars_at_2003_opposition() {
        // Earth and Mars heliocentric longitudes coincide at opposition.
        let t = (2_452_879.5 - J2000_JD) / DAYS_PER_CENTURY;
        let [x, y, _] = heliocentric_j2000(Orbit::Mars, t);
        let lon = y.atan2(x).to_degrees().rem_euclid(360.0);
        assert!((lon - 334.5006).abs() < 1e-3, "Mars heliocentric λ = {lon}°");
    }
}
