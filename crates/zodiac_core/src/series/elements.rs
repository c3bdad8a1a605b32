//! Keplerian mean elements for Pluto.
//!
//! VSOP87 carries no Pluto, so its orbit comes from the JPL "approximate
//! positions of the planets" set (Standish, Table 1, 1800–2050 fit),
//! linear in centuries of TT. Output vectors are heliocentric, in AU,
//! referred to the mean ecliptic and equinox of J2000.

const DEG: f64 = std::f64::consts::PI / 180.0;

/// `[a, ȧ, e, ė, I, İ, L, L̇, ϖ, ϖ̇, Ω, Ω̇]`.
/// a in AU, angles in degrees, rates per Julian century of TT.
#[rustfmt::skip]
static PLUTO: [f64; 12] = [
    39.48211675, -0.00031596, 0.24882730, 0.00005170, 17.14001206, 0.00004818,
    238.92903833, 145.20780515, 224.06891629, -0.04062942, 110.30393684, -0.01183482,
];

/// Kepler iteration cap.
const KEPLER_MAX_ITER: usize = 30;
/// Kepler convergence tolerance (radians).
const KEPLER_TOL: f64 = 1e-12;

/// Elements at an epoch. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct OrbitalElements {
    pub a: f64,
    pub e: f64,
    pub inclination: f64,
    pub mean_longitude: f64,
    pub perihelion: f64,
    pub node: f64,
}

impl OrbitalElements {
    /// Pluto's elements at `t` Julian centuries of TT.
    pub fn pluto(t: f64) -> Self {
        let r = &PLUTO;
        Self {
            a: r[0] + r[1] * t,
            e: r[2] + r[3] * t,
            inclination: r[4] + r[5] * t,
            mean_longitude: r[6] + r[7] * t,
            perihelion: r[8] + r[9] * t,
            node: r[10] + r[11] * t,
        }
    }

    /// Heliocentric J2000 ecliptic vector (AU).
    pub fn vector(&self) -> [f64; 3] {
        let m = (self.mean_longitude - self.perihelion + 180.0).rem_euclid(360.0) - 180.0;
        let e = self.e;
        let ecc_anom = solve_kepler(m * DEG, e);

        let xp = self.a * (ecc_anom.cos() - e);
        let yp = self.a * (1.0 - e * e).sqrt() * ecc_anom.sin();

        let (so, co) = ((self.perihelion - self.node) * DEG).sin_cos();
        let (sn, cn) = (self.node * DEG).sin_cos();
        let (si, ci) = (self.inclination * DEG).sin_cos();

        [
            (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
            (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
            (so * si) * xp + (co * si) * yp,
        ]
    }
}

/// Solve Kepler's equation E − e·sin E = M by Newton iteration.
///
/// `m` in radians. Returns E in radians.
pub(crate) fn solve_kepler(m: f64, e: f64) -> f64 {
    let mut ecc_anom = m + e * m.sin();
    for _ in 0..KEPLER_MAX_ITER {
        let delta = (ecc_anom - e * ecc_anom.sin() - m) / (1.0 - e * ecc_anom.cos());
        ecc_anom -= delta;
        if delta.abs() < KEPLER_TOL {
            break;
        }
    }
    ecc_anom
}

/// Heliocentric J2000 ecliptic vector of Pluto (AU).
pub(crate) fn pluto_j2000(t: f64) -> [f64; 3] {
    OrbitalElements::pluto(t).vector()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kepler_circular_orbit() {
        let e = solve_kepler(1.234, 0.0);
        assert!((e - 1.234).abs() < 1e-15);
    }

    #[test]
    fn kepler_satisfies_equation() {
        for &ecc in &[0.0068, 0.0934, 0.2056, 0.2488] {
            let mut m = -3.1;
            while m < 3.1 {
                let e_anom = solve_kepler(m, ecc);
                let resid = e_anom - ecc * e_anom.sin() - m;
                assert!(resid.abs() < 1e-11, "residual {resid} at M={m}, e={ecc}");
                m += 0.37;
            }
        }
    }

    #[test]
    fn pluto_radius_within_perihelion_aphelion() {
        for &t in &[-0.75, 0.0, 0.24, 0.75] {
            let el = OrbitalElements::pluto(t);
            let [x, y, z] = pluto_j2000(t);
            let r = (x * x + y * y + z * z).sqrt();
            assert!(
                r >= el.a * (1.0 - el.e) - 1e-9 && r <= el.a * (1.0 + el.e) + 1e-9,
                "r = {r} AU at T={t}"
            );
        }
    }
}
