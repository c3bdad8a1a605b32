//! Truncated lunar theory.
//!
//! Principal periodic terms of ELP-2000/82 as tabulated by Meeus,
//! _Astronomical Algorithms_ (2nd ed.), ch. 47: 60 terms for longitude and
//! distance, 60 for latitude, the eccentricity factor E on terms in M, and
//! the additive Venus/Jupiter/flattening corrections A1, A2, A3.
//! Output is geocentric, referred to the mean ecliptic and equinox of date.

use std::f64::consts::PI;

/// Kilometres per astronomical unit.
pub const AU_KM: f64 = 149_597_870.7;

const DEG: f64 = PI / 180.0;

/// Longitude and distance terms: `[D, M, M′, F, Σl (1e-6 deg), Σr (1e-3 km)]`.
#[rustfmt::skip]
static LON_DIST_TERMS: [[i32; 6]; 60] = [
    [0,  0,  1,  0, 6288774, -20905355],
    [2,  0, -1,  0, 1274027,  -3699111],
    [2,  0,  0,  0,  658314,  -2955968],
    [0,  0,  2,  0,  213618,   -569925],
    [0,  1,  0,  0, -185116,     48888],
    [0,  0,  0,  2, -114332,     -3149],
    [2,  0, -2,  0,   58793,    246158],
    [2, -1, -1,  0,   57066,   -152138],
    [2,  0,  1,  0,   53322,   -170733],
    [2, -1,  0,  0,   45758,   -204586],
    [0,  1, -1,  0,  -40923,   -129620],
    [1,  0,  0,  0,  -34720,    108743],
    [0,  1,  1,  0,  -30383,    104755],
    [2,  0,  0, -2,   15327,     10321],
    [0,  0,  1,  2,  -12528,         0],
    [0,  0,  1, -2,   10980,     79661],
    [4,  0, -1,  0,   10675,    -34782],
    [0,  0,  3,  0,   10034,    -23210],
    [4,  0, -2,  0,    8548,    -21636],
    [2,  1, -1,  0,   -7888,     24208],
    [2,  1,  0,  0,   -6766,     30824],
    [1,  0, -1,  0,   -5163,     -8379],
    [1,  1,  0,  0,    4987,    -16675],
    [2, -1,  1,  0,    4036,    -12831],
    [2,  0,  2,  0,    3994,    -10445],
    [4,  0,  0,  0,    3861,    -11650],
    [2,  0, -3,  0,    3665,     14403],
    [0,  1, -2,  0,   -2689,     -7003],
    [2,  0, -1,  2,   -2602,         0],
    [2, -1, -2,  0,    2390,     10056],
    [1,  0,  1,  0,   -2348,      6322],
    [2, -2,  0,  0,    2236,     -9884],
    [0,  1,  2,  0,   -2120,      5751],
    [0,  2,  0,  0,   -2069,         0],
    [2, -2, -1,  0,    2048,     -4950],
    [2,  0,  1, -2,   -1773,      4130],
    [2,  0,  0,  2,   -1595,         0],
    [4, -1, -1,  0,    1215,     -3958],
    [0,  0,  2,  2,   -1110,         0],
    [3,  0, -1,  0,    -892,      3258],
    [2,  1,  1,  0,    -810,      2616],
    [4, -1, -2,  0,     759,     -1897],
    [0,  2, -1,  0,    -713,     -2117],
    [2,  2, -1,  0,    -700,      2354],
    [2,  1, -2,  0,     691,         0],
    [2, -1,  0, -2,     596,         0],
    [4,  0,  1,  0,     549,     -1423],
    [0,  0,  4,  0,     537,     -1117],
    [4, -1,  0,  0,     520,     -1571],
    [1,  0, -2,  0,    -487,     -1739],
    [2,  1,  0, -2,    -399,         0],
    [0,  0,  2, -2,    -381,     -4421],
    [1,  1,  1,  0,     351,         0],
    [3,  0, -2,  0,    -340,         0],
    [4,  0, -3,  0,     330,         0],
    [2, -1,  2,  0,     327,         0],
    [0,  2,  1,  0,    -323,      1165],
    [1,  1, -1,  0,     299,         0],
    [2,  0,  3,  0,     294,         0],
    [2,  0, -1, -2,       0,      8752],
];

/// Latitude terms: `[D, M, M′, F, Σb (1e-6 deg)]`.
#[rustfmt::skip]
static LAT_TERMS: [[i32; 5]; 60] = [
    [0,  0,  0,  1, 5128122],
    [0,  0,  1,  1,  280602],
    [0,  0,  1, -1,  277693],
    [2,  0,  0, -1,  173237],
    [2,  0, -1,  1,   55413],
    [2,  0, -1, -1,   46271],
    [2,  0,  0,  1,   32573],
    [0,  0,  2,  1,   17198],
    [2,  0,  1, -1,    9266],
    [0,  0,  2, -1,    8822],
    [2, -1,  0, -1,    8216],
    [2,  0, -2, -1,    4324],
    [2,  0,  1,  1,    4200],
    [2,  1,  0, -1,   -3359],
    [2, -1, -1,  1,    2463],
    [2, -1,  0,  1,    2211],
    [2, -1, -1, -1,    2065],
    [0,  1, -1, -1,   -1870],
    [4,  0, -1, -1,    1828],
    [0,  1,  0,  1,   -1794],
    [0,  0,  0,  3,   -1749],
    [0,  1, -1,  1,   -1565],
    [1,  0,  0,  1,   -1491],
    [0,  1,  1,  1,   -1475],
    [0,  1,  1, -1,   -1410],
    [0,  1,  0, -1,   -1344],
    [1,  0,  0, -1,   -1335],
    [0,  0,  3,  1,    1107],
    [4,  0,  0, -1,    1021],
    [4,  0, -1,  1,     833],
    [0,  0,  1, -3,     777],
    [4,  0, -2,  1,     671],
    [2,  0,  0, -3,     607],
    [2,  0,  2, -1,     596],
    [2, -1,  1, -1,     491],
    [2,  0, -2,  1,    -451],
    [0,  0,  3, -1,     439],
    [2,  0,  2,  1,     422],
    [2,  0, -3, -1,     421],
    [2,  1, -1,  1,    -366],
    [2,  1,  0,  1,    -351],
    [4,  0,  0,  1,     331],
    [2, -1,  1,  1,     315],
    [2, -2,  0, -1,     302],
    [0,  0,  1,  3,    -283],
    [2,  1,  1, -1,    -229],
    [1,  1,  0, -1,     223],
    [1,  1,  0,  1,     223],
    [0,  1, -2, -1,    -220],
    [2,  1, -1, -1,    -220],
    [1,  0,  1,  1,    -185],
    [2, -1, -2, -1,     181],
    [0,  1,  2,  1,    -177],
    [4,  0, -2, -1,     176],
    [4, -1, -1, -1,     166],
    [1,  0,  1, -1,    -164],
    [4,  0,  1, -1,     132],
    [1,  0, -1, -1,    -119],
    [4, -1,  0, -1,     115],
    [2, -2,  0,  1,     107],
];

/// Mean arguments of the lunar theory, degrees in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LunarArguments {
    /// Mean longitude L′.
    pub mean_longitude: f64,
    /// Mean elongation D.
    pub elongation: f64,
    /// Sun's mean anomaly M.
    pub sun_anomaly: f64,
    /// Moon's mean anomaly M′.
    pub moon_anomaly: f64,
    /// Argument of latitude F.
    pub latitude_argument: f64,
}

impl LunarArguments {
    /// `t` = Julian centuries of TT since J2000.0.
    pub fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        Self {
            mean_longitude: (218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0)
                .rem_euclid(360.0),
            elongation: (297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0)
                .rem_euclid(360.0),
            sun_anomaly: (357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0)
                .rem_euclid(360.0),
            moon_anomaly: (134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0)
                .rem_euclid(360.0),
            latitude_argument: (93.2720950 + 483202.0175233 * t - 0.0036539 * t2
                - t3 / 3_526_000.0)
                .rem_euclid(360.0),
        }
    }
}

/// Geocentric Moon, mean ecliptic and equinox of date.
///
/// Returns `(lon_deg, lat_deg, distance_au)`; longitude excludes nutation.
pub(crate) fn moon_of_date(t: f64) -> (f64, f64, f64) {
    let args = LunarArguments::at(t);
    let lp = args.mean_longitude * DEG;
    let d = args.elongation * DEG;
    let m = args.sun_anomaly * DEG;
    let mp = args.moon_anomaly * DEG;
    let f = args.latitude_argument * DEG;

    let a1 = (119.75 + 131.849 * t) * DEG;
    let a2 = (53.09 + 479264.290 * t) * DEG;
    let a3 = (313.45 + 481266.484 * t) * DEG;
    let e = 1.0 - 0.002516 * t - 0.0000074 * t * t;
    let e_factor = |m_coef: i32| match m_coef.abs() {
        0 => 1.0,
        1 => e,
        _ => e * e,
    };

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for row in &LON_DIST_TERMS {
        let arg = row[0] as f64 * d + row[1] as f64 * m + row[2] as f64 * mp + row[3] as f64 * f;
        let ef = e_factor(row[1]);
        sum_l += row[4] as f64 * ef * arg.sin();
        sum_r += row[5] as f64 * ef * arg.cos();
    }

    let mut sum_b = 0.0;
    for row in &LAT_TERMS {
        let arg = row[0] as f64 * d + row[1] as f64 * m + row[2] as f64 * mp + row[3] as f64 * f;
        sum_b += row[4] as f64 * e_factor(row[1]) * arg.sin();
    }

    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lp.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (lp - mp).sin()
        - 115.0 * (lp + mp).sin();

    let lon = (args.mean_longitude + sum_l / 1e6).rem_euclid(360.0);
    let lat = sum_b / 1e6;
    let dist_km = 385_000.56 + sum_r / 1000.0;
    (lon, lat, dist_km / AU_KM)
}
