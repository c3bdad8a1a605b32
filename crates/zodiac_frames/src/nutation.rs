//! Lunisolar nutation.
//!
//! The 28 largest lunisolar terms of the IAU 2000B series (IERS
//! Conventions 2010, Table 5.3b). The dropped terms sum to under 0.03″ in
//! longitude, far inside the arc-minute error budget of the series
//! evaluator. Δψ turns mean ecliptic longitudes into apparent ones; Δε gives
//! the true obliquity used by the house solver.

/// Polynomial in `t`, coefficients lowest power first.
fn poly(t: f64, c: &[f64]) -> f64 {
    c.iter().rev().fold(0.0, |acc, &k| acc * t + k)
}

/// Delaunay arguments `[l, l', F, D, Ω]` in radians at `t` Julian
/// centuries of TT (IERS 2010, Table 5.2e, converted to degrees).
///
/// `l` and `l'` are the mean anomalies of the Moon and the Sun, `F` the
/// Moon's argument of latitude, `D` its elongation from the Sun and `Ω`
/// the longitude of its ascending node.
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    const COEFFS: [[f64; 5]; 5] = [
        [134.963_402_51, 477_198.867_560_5, 0.008_855_333, 1.434_306e-5, -6.797_2e-8],
        [357.529_109_18, 35_999.050_291_14, -0.000_153_667, 3.778e-8, -3.192e-9],
        [93.272_090_62, 483_202.017_457_72, -0.003_542, -2.880_6e-7, 1.158e-9],
        [297.850_195_47, 445_267.111_446_94, -0.001_769_611, 1.831_39e-6, -8.803e-9],
        [125.044_555_01, -1_934.136_261_97, 0.002_075_611, 2.139_44e-6, -1.649_7e-8],
    ];
    COEFFS.map(|c| poly(t, &c).rem_euclid(360.0).to_radians())
}

/// One series term: argument multipliers and amplitudes in units of
/// 0.1 mas (1e-4″), each with its per-century rate.
struct Term {
    multipliers: [f64; 5],
    psi: f64,
    psi_rate: f64,
    eps: f64,
    eps_rate: f64,
}

const fn term(m: [i8; 5], psi: f64, psi_rate: f64, eps: f64, eps_rate: f64) -> Term {
    Term {
        multipliers: [m[0] as f64, m[1] as f64, m[2] as f64, m[3] as f64, m[4] as f64],
        psi,
        psi_rate,
        eps,
        eps_rate,
    }
}

#[rustfmt::skip]
const TERMS: [Term; 28] = [
    //     l  l'   F   D   Ω          Δψ       rate          Δε     rate
    term([ 0,  0,  0,  0,  1],  -172064.161, -174.666,  92052.331,   9.086),
    term([ 0,  0,  2, -2,  2],   -13170.906,   -1.675,   5730.336,  -3.015),
    term([ 0,  0,  2,  0,  2],    -2276.413,   -0.234,    978.459,  -0.485),
    term([ 0,  0,  0,  0,  2],     2074.554,    0.207,   -897.492,    0.47),
    term([ 0,  1,  0,  0,  0],     1475.877,   -3.633,     73.871,  -0.184),
    term([ 0,  1,  2, -2,  2],     -516.821,    1.226,    224.386,  -0.677),
    term([ 1,  0,  0,  0,  0],      711.159,    0.073,      -6.75,     0.0),
    term([ 0,  0,  2,  0,  1],     -387.298,   -0.367,    200.728,   0.018),
    term([ 1,  0,  2,  0,  2],     -301.461,   -0.036,    129.025,  -0.063),
    term([ 0, -1,  2, -2,  2],      215.829,   -0.494,    -95.929,   0.299),
    term([ 0,  0,  2, -2,  1],      128.227,    0.137,    -68.982,  -0.009),
    term([-1,  0,  2,  0,  2],      123.457,    0.011,    -53.311,   0.032),
    term([-1,  0,  0,  2,  0],      156.994,     0.01,     -1.235,     0.0),
    term([ 1,  0,  0,  0,  1],        63.11,    0.063,    -33.228,     0.0),
    term([-1,  0,  0,  0,  1],      -57.976,   -0.063,     31.429,     0.0),
    term([-1,  0,  2,  2,  2],      -59.641,   -0.011,     25.543,  -0.011),
    term([ 1,  0,  2,  0,  1],      -51.613,   -0.042,     26.366,     0.0),
    term([-2,  0,  2,  0,  1],       45.893,     0.05,    -24.236,   -0.01),
    term([ 0,  0,  0,  2,  0],       63.384,    0.011,      -1.22,     0.0),
    term([ 0,  0,  2,  2,  2],      -38.571,   -0.001,     16.452,  -0.011),
    term([ 0, -2,  2, -2,  2],       32.481,      0.0,     -13.87,     0.0),
    term([-2,  0,  0,  2,  0],      -47.722,      0.0,      0.477,     0.0),
    term([ 2,  0,  2,  0,  2],      -31.046,   -0.001,     13.238,  -0.011),
    term([ 1,  0,  2, -2,  2],       28.593,      0.0,    -12.338,    0.01),
    term([-1,  0,  2,  0,  1],       20.441,    0.021,    -10.758,     0.0),
    term([ 2,  0,  0,  0,  0],       29.243,      0.0,     -0.609,     0.0),
    term([ 0,  0,  2,  0,  0],       25.887,      0.0,      -0.55,     0.0),
    term([ 0,  0, -2,  2,  0],       21.783,      0.0,     -0.167,     0.0),
];

/// Offsets standing in for the planetary terms, arcseconds.
const PSI_OFFSET: f64 = -0.000_135;
const EPS_OFFSET: f64 = -0.000_388;

/// Nutation in longitude and obliquity `(Δψ, Δε)` in arcseconds at `t`
/// Julian centuries of TT.
pub fn nutation_arcsec(t: f64) -> (f64, f64) {
    let args = fundamental_arguments(t);
    let (psi, eps) = TERMS.iter().fold((0.0, 0.0), |(psi, eps), term| {
        let arg: f64 = term
            .multipliers
            .iter()
            .zip(args)
            .map(|(m, a)| m * a)
            .sum();
        (
            psi + (term.psi + term.psi_rate * t) * arg.sin(),
            eps + (term.eps + term.eps_rate * t) * arg.cos(),
        )
    });
    (psi * 1e-4 + PSI_OFFSET, eps * 1e-4 + EPS_OFFSET)
}

/// Nutation in longitude and obliquity, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    pub dpsi_deg: f64,
    pub deps_deg: f64,
}

impl Nutation {
    pub fn at(t: f64) -> Self {
        let (dpsi, deps) = nutation_arcsec(t);
        Self {
            dpsi_deg: dpsi / 3600.0,
            deps_deg: deps / 3600.0,
        }
    }
}
