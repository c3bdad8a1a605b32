//! Placidus house cusps and house placement.
//!
//! The angles (ARMC, MC, ascendant, vertex) come from apparent local
//! sidereal time and the true obliquity of date. Intermediate cusps 11, 12,
//! 2 and 3 trisect the diurnal and nocturnal semi-arcs; each is found by
//! fixed-point iteration on the pole height of the cusp circle, starting
//! from the value the declination of the ARMC offset gives.
//!
//! Sources: Meeus, _Astronomical Algorithms_ ch. 13; Holden, _A History of
//! Horoscopic Astrology_ (Placidus semi-arc definition).

use tracing::{debug, trace, warn};
use zodiac_frames::{Nutation, mean_obliquity_deg};
use zodiac_time::{Epoch, armc_deg};

use crate::error::ChartError;
use crate::sign::{ZodiacSign, sign_of};
use crate::util::{arc_forward, normalize_360};

/// Default iteration cap for each intermediate cusp.
pub const MAX_ITERATIONS: u32 = 100;

/// Default convergence threshold between successive iterates, degrees.
pub const CONVERGENCE_DEG: f64 = 1e-7;

/// Values below this are treated as zero in the oblique ascension.
const VERY_SMALL: f64 = 1e-10;

/// Solver settings for the Placidus iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseConfig {
    pub max_iterations: u32,
    pub tolerance_deg: f64,
}

impl Default for HouseConfig {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
            tolerance_deg: CONVERGENCE_DEG,
        }
    }
}

impl HouseConfig {
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.max_iterations == 0 {
            return Err(ChartError::MalformedInput(
                "max_iterations must be greater than zero".into(),
            ));
        }
        if !self.tolerance_deg.is_finite() || self.tolerance_deg <= 0.0 {
            return Err(ChartError::MalformedInput(format!(
                "tolerance_deg must be positive, got {}",
                self.tolerance_deg
            )));
        }
        Ok(())
    }
}

/// Twelve house cusps plus the chart angles, all in [0, 360).
///
/// `cusps[0]` is the ascendant and `cusps[9]` the MC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseCusps {
    pub cusps: [f64; 12],
    pub ascendant: f64,
    pub mc: f64,
    /// Right ascension of the MC (apparent local sidereal time), degrees.
    pub armc: f64,
    pub vertex: f64,
}

/// One cusp with its sign placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseCusp {
    /// House number, 1-12.
    pub number: u8,
    pub longitude: f64,
    pub sign: ZodiacSign,
    pub sign_degree: f64,
}

impl HouseCusps {
    /// Longitude of cusp `house` (1-12).
    pub fn cusp(&self, house: u8) -> Option<f64> {
        match house {
            1..=12 => Some(self.cusps[usize::from(house - 1)]),
            _ => None,
        }
    }

    /// House (1-12) containing `longitude`.
    pub fn house_of(&self, longitude: f64) -> Result<u8, ChartError> {
        house_of(longitude, &self.cusps)
    }

    /// The cusps with sign data, house 1 first.
    pub fn records(&self) -> [HouseCusp; 12] {
        std::array::from_fn(|i| {
            let longitude = self.cusps[i];
            let pos = sign_of(longitude);
            HouseCusp {
                number: i as u8 + 1,
                longitude,
                sign: pos.sign,
                sign_degree: pos.degree,
            }
        })
    }
}

/// Sine, cosine and tangent of the true obliquity.
#[derive(Debug, Clone, Copy)]
struct Obliquity {
    deg: f64,
    sin: f64,
    cos: f64,
    tan: f64,
}

impl Obliquity {
    fn new(deg: f64) -> Self {
        let r = deg.to_radians();
        Self {
            deg,
            sin: r.sin(),
            cos: r.cos(),
            tan: r.tan(),
        }
    }
}

fn sin_d(x: f64) -> f64 {
    x.to_radians().sin()
}

fn tan_d(x: f64) -> f64 {
    x.to_radians().tan()
}

fn asin_d(x: f64) -> f64 {
    x.asin().to_degrees()
}

fn atan_d(x: f64) -> f64 {
    x.atan().to_degrees()
}

/// Ecliptic longitude rising on a circle of pole height `f` at oblique
/// ascension `x`, for `x` in the first quadrant.
fn oblique_ascension_q1(x: f64, f: f64, eps: &Obliquity) -> f64 {
    let mut denom = -tan_d(f) * eps.sin + eps.cos * x.to_radians().cos();
    if denom.abs() < VERY_SMALL {
        denom = 0.0;
    }
    let mut sx = sin_d(x);
    if sx.abs() < VERY_SMALL {
        sx = 0.0;
    }
    let mut a = if sx == 0.0 {
        if denom < 0.0 { -VERY_SMALL } else { VERY_SMALL }
    } else if denom == 0.0 {
        if sx < 0.0 { -90.0 } else { 90.0 }
    } else {
        atan_d(sx / denom)
    };
    if a < 0.0 {
        a += 180.0;
    }
    a
}

/// [`oblique_ascension_q1`] extended to the full circle by quadrant symmetry.
fn oblique_ascension(x: f64, f: f64, eps: &Obliquity) -> f64 {
    let x = normalize_360(x);
    let lon = if x < 90.0 {
        oblique_ascension_q1(x, f, eps)
    } else if x < 180.0 {
        180.0 - oblique_ascension_q1(180.0 - x, -f, eps)
    } else if x < 270.0 {
        180.0 + oblique_ascension_q1(x - 180.0, -f, eps)
    } else {
        360.0 - oblique_ascension_q1(360.0 - x, f, eps)
    };
    normalize_360(lon)
}

/// Placidus houses with the default solver settings.
pub fn house_cusps(jd_ut: f64, latitude: f64, longitude: f64) -> Result<HouseCusps, ChartError> {
    house_cusps_with(jd_ut, latitude, longitude, &HouseConfig::default())
}

/// Placidus houses for a UT instant and geographic location.
///
/// `longitude` is east-positive and may be given in either [-180, 180] or
/// [0, 360). Fails with [`ChartError::HouseSystemUndefined`] when the
/// latitude lies inside the polar circle of the ecliptic, or when a cusp
/// does not converge within `config.max_iterations`.
pub fn house_cusps_with(
    jd_ut: f64,
    latitude: f64,
    longitude: f64,
    config: &HouseConfig,
) -> Result<HouseCusps, ChartError> {
    config.validate()?;
    if !jd_ut.is_finite() || !latitude.is_finite() || !longitude.is_finite() {
        return Err(ChartError::MalformedInput(format!(
            "non-finite house input: jd={jd_ut}, lat={latitude}, lon={longitude}"
        )));
    }
    if latitude.abs() > 90.0 {
        return Err(ChartError::MalformedInput(format!(
            "latitude {latitude} outside [-90, 90]"
        )));
    }

    let t = Epoch::from_jd_ut(jd_ut).centuries_tt();
    let nut = Nutation::at(t);
    let eps = Obliquity::new(mean_obliquity_deg(t) + nut.deps_deg);
    debug!(jd_ut, latitude, longitude, obliquity = eps.deg, "house_cusps");

    if latitude.abs() >= 90.0 - eps.deg {
        warn!(latitude, "Placidus undefined inside the polar circle");
        return Err(ChartError::HouseSystemUndefined(
            "latitude inside the polar circle",
        ));
    }

    let armc = armc_deg(jd_ut, nut.dpsi_deg, eps.deg, normalize_360(longitude));

    let ascendant = oblique_ascension(armc + 90.0, latitude, &eps);
    let armc_r = armc.to_radians();
    let mc = normalize_360(f64::atan2(armc_r.sin(), armc_r.cos() * eps.cos).to_degrees());
    let colatitude = if latitude >= 0.0 {
        90.0 - latitude
    } else {
        -90.0 - latitude
    };
    let vertex = oblique_ascension(armc - 90.0, colatitude, &eps);

    let solver = PlacidusSolver {
        armc,
        tan_lat: tan_d(latitude),
        eps,
        config,
    };
    let c11 = solver.cusp(11, 30.0, 3.0)?;
    let c12 = solver.cusp(12, 60.0, 1.5)?;
    let c2 = solver.cusp(2, 120.0, 1.5)?;
    let c3 = solver.cusp(3, 150.0, 3.0)?;

    let opp = |x: f64| normalize_360(x + 180.0);
    let cusps = [
        ascendant,
        c2,
        c3,
        opp(mc),
        opp(c11),
        opp(c12),
        opp(ascendant),
        opp(c2),
        opp(c3),
        mc,
        c11,
        c12,
    ];

    Ok(HouseCusps {
        cusps,
        ascendant,
        mc,
        armc,
        vertex,
    })
}

/// Shared state for the four intermediate cusps of one chart.
struct PlacidusSolver<'a> {
    armc: f64,
    tan_lat: f64,
    eps: Obliquity,
    config: &'a HouseConfig,
}

impl PlacidusSolver<'_> {
    /// Pole height of the cusp circle for a point of declination tangent
    /// `tan_dec`, with the semi-arc split by `divisor`.
    fn pole_height(&self, tan_dec: f64, divisor: f64) -> Result<f64, ChartError> {
        let asc_diff = asin_d(self.tan_lat * tan_dec);
        if asc_diff.is_nan() {
            return Err(ChartError::HouseSystemUndefined(
                "semi-arc undefined for circumpolar cusp",
            ));
        }
        Ok(atan_d(sin_d(asc_diff / divisor) / tan_dec))
    }

    /// Cusp `house` at `offset` degrees of right ascension from the ARMC.
    fn cusp(&self, house: u8, offset: f64, divisor: f64) -> Result<f64, ChartError> {
        let ra = normalize_360(self.armc + offset);
        let mut lon = oblique_ascension(ra, self.pole_height(self.eps.tan, divisor)?, &self.eps);

        for iteration in 1..=self.config.max_iterations {
            let tan_dec = tan_d(asin_d(self.eps.sin * sin_d(lon)));
            if tan_dec.abs() < VERY_SMALL {
                // Cusp on the equator: the pole height degenerates to zero.
                trace!(house, iteration, "placidus cusp on the equator");
                return Ok(ra);
            }
            let prev = lon;
            lon = oblique_ascension(ra, self.pole_height(tan_dec, divisor)?, &self.eps);
            let step = (lon - prev + 180.0).rem_euclid(360.0) - 180.0;
            if step.abs() < self.config.tolerance_deg {
                trace!(house, iteration, "placidus cusp converged");
                return Ok(lon);
            }
        }

        warn!(house, max_iterations = self.config.max_iterations, "placidus cusp did not converge");
        Err(ChartError::HouseSystemUndefined(
            "placidus iteration did not converge",
        ))
    }
}

/// House (1-12) containing `longitude`, given 12 cusps in house order.
///
/// Each house owns the half-open arc `[cusp[i], cusp[i+1])`, wrapping from
/// house 12 back to house 1, so a longitude exactly on a cusp belongs to
/// the house that begins there.
pub fn house_of(longitude: f64, cusps: &[f64]) -> Result<u8, ChartError> {
    if cusps.len() != 12 {
        return Err(ChartError::MalformedInput(format!(
            "expected 12 cusps, got {}",
            cusps.len()
        )));
    }
    if let Some(bad) = cusps.iter().find(|c| !c.is_finite()) {
        return Err(ChartError::MalformedInput(format!("non-finite cusp {bad}")));
    }
    if !longitude.is_finite() {
        return Err(ChartError::MalformedInput(format!(
            "non-finite longitude {longitude}"
        )));
    }

    let origin = cusps[0];
    let target = arc_forward(origin, longitude);
    let mut house = 1;
    for (i, &cusp) in cusps.iter().enumerate() {
        if arc_forward(origin, cusp) <= target {
            house = i as u8 + 1;
        }
    }
    Ok(house)
}

#[cfg(test)]
mod tests {
    use super::*;

    const JD_J2000: f64 = 2_451_545.0;
    const EPS: f64 = 1e-9;

    fn equal_cusps(start: f64) -> [f64; 12] {
        std::array::from_fn(|i| normalize_360(start + 30.0 * i as f64))
    }

    #[test]
    fn default_config_valid() {
        assert!(HouseConfig::default().validate().is_ok());
        let bad = HouseConfig {
            max_iterations: 0,
            ..HouseConfig::default()
        };
        assert!(matches!(bad.validate(), Err(ChartError::MalformedInput(_))));
        let bad = HouseConfig {
            tolerance_deg: f64::NAN,
            ..HouseConfig::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn oblique_ascension_on_equator_matches_right_ascension_conversion() {
        // Pole height 0 gives the ecliptic point of the given right ascension.
        let eps = Obliquity::new(23.44);
        for ra in [10.0, 80.0, 100.0, 200.0, 300.0] {
            let lon = oblique_ascension(ra, 0.0, &eps);
            let expected = normalize_360(
                f64::atan2(sin_d(ra), ra.to_radians().cos() * eps.cos).to_degrees(),
            );
            assert!(
                (lon - expected).abs() < 1e-9,
                "ra {ra}: {lon}, expected {expected}"
            );
        }
    }

    #[test]
    fn oblique_ascension_cardinal_points() {
        let eps = Obliquity::new(23.44);
        assert!(oblique_ascension(0.0, 40.0, &eps).abs() < 1e-6);
        assert!((oblique_ascension(180.0, 40.0, &eps) - 180.0).abs() < 1e-6);
    }

    #[test]
    fn cusps_invariants() {
        let h = house_cusps(JD_J2000, 51.5, -0.13).unwrap();
        assert_eq!(h.cusps[0], h.ascendant);
        assert_eq!(h.cusps[9], h.mc);
        for i in 0..6 {
            let d = arc_forward(h.cusps[i], h.cusps[i + 6]);
            assert!((d - 180.0).abs() < EPS, "cusp {} vs {}: {d}", i + 1, i + 7);
        }
        for c in h.cusps {
            assert!((0.0..360.0).contains(&c));
        }
    }

    #[test]
    fn cusps_run_forward_around_the_circle() {
        let h = house_cusps(JD_J2000, 40.0, 10.0).unwrap();
        let total: f64 = (0..12)
            .map(|i| arc_forward(h.cusps[i], h.cusps[(i + 1) % 12]))
            .sum();
        assert!((total - 360.0).abs() < 1e-6, "sum of house widths = {total}");
    }

    #[test]
    fn longitude_conventions_agree() {
        let a = house_cusps(JD_J2000, 35.0, -74.0).unwrap();
        let b = house_cusps(JD_J2000, 35.0, 286.0).unwrap();
        for (x, y) in a.cusps.iter().zip(b.cusps.iter()) {
            assert!((x - y).abs() < 1e-9);
        }
    }

    #[test]
    fn polar_latitude_undefined() {
        for lat in [67.0, -70.0, 89.9] {
            assert!(matches!(
                house_cusps(JD_J2000, lat, 0.0),
                Err(ChartError::HouseSystemUndefined(_))
            ));
        }
        assert!(house_cusps(JD_J2000, 66.0, 0.0).is_ok());
    }

    #[test]
    fn out_of_range_latitude_malformed() {
        assert!(matches!(
            house_cusps(JD_J2000, 91.0, 0.0),
            Err(ChartError::MalformedInput(_))
        ));
        assert!(matches!(
            house_cusps(f64::NAN, 10.0, 0.0),
            Err(ChartError::MalformedInput(_))
        ));
    }

    #[test]
    fn single_iteration_cap_fails() {
        let config = HouseConfig {
            max_iterations: 1,
            tolerance_deg: 1e-15,
        };
        assert!(matches!(
            house_cusps_with(JD_J2000, 51.5, 0.0, &config),
            Err(ChartError::HouseSystemUndefined(_))
        ));
    }

    #[test]
    fn equator_location_converges() {
        let h = house_cusps(JD_J2000, 0.0, 0.0).unwrap();
        assert!(h.cusps.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn house_of_half_open() {
        let cusps = equal_cusps(0.0);
        assert_eq!(house_of(0.0, &cusps).unwrap(), 1);
        assert_eq!(house_of(29.999, &cusps).unwrap(), 1);
        assert_eq!(house_of(30.0, &cusps).unwrap(), 2);
        assert_eq!(house_of(359.99, &cusps).unwrap(), 12);
    }

    #[test]
    fn house_of_wraps_past_aries() {
        let cusps = equal_cusps(345.0);
        assert_eq!(house_of(350.0, &cusps).unwrap(), 1);
        assert_eq!(house_of(10.0, &cusps).unwrap(), 1);
        assert_eq!(house_of(15.0, &cusps).unwrap(), 2);
        assert_eq!(house_of(344.0, &cusps).unwrap(), 12);
        assert_eq!(house_of(-10.0, &cusps).unwrap(), 1);
    }

    #[test]
    fn house_of_every_cusp_starts_its_house() {
        let h = house_cusps(JD_J2000, 48.85, 2.35).unwrap();
        for (i, &c) in h.cusps.iter().enumerate() {
            assert_eq!(h.house_of(c).unwrap(), i as u8 + 1);
        }
    }

    #[test]
    fn house_of_rejects_bad_cusps() {
        assert!(matches!(
            house_of(10.0, &[0.0; 11]),
            Err(ChartError::MalformedInput(_))
        ));
        let mut cusps = equal_cusps(0.0);
        cusps[4] = f64::INFINITY;
        assert!(matches!(
            house_of(10.0, &cusps),
            Err(ChartError::MalformedInput(_))
        ));
    }

    #[test]
    fn records_carry_signs() {
        let h = house_cusps(JD_J2000, 51.5074, -0.1278).unwrap();
        let records = h.records();
        assert_eq!(records[0].number, 1);
        assert_eq!(records[11].number, 12);
        // Ascendant 24.01° Aries, MC 9.49° Capricorn.
        assert_eq!(records[0].sign, ZodiacSign::Aries);
        assert_eq!(records[9].sign, ZodiacSign::Capricorn);
        assert!((records[9].sign_degree - 9.4932).abs() < 0.01);
        assert_eq!(h.cusp(10), Some(h.mc));
        assert_eq!(h.cusp(13), None);
    }
}
