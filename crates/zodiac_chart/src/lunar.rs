//! Moon phase and void-of-course Moon.

use serde::{Deserialize, Serialize};
use tracing::debug;
use zodiac_core::{Body, EclipticPosition, PLANETS, position_of, positions_batch};

use crate::aspect::{AspectType, MAJOR_ASPECTS};
use crate::error::ChartError;
use crate::sign::sign_of;
use crate::util::{normalize_360, signed_arc};

/// The eight phases, each a 45° bin of Moon − Sun elongation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// All phases in elongation order.
pub const ALL_MOON_PHASES: [MoonPhase; 8] = [
    MoonPhase::NewMoon,
    MoonPhase::WaxingCrescent,
    MoonPhase::FirstQuarter,
    MoonPhase::WaxingGibbous,
    MoonPhase::FullMoon,
    MoonPhase::WaningGibbous,
    MoonPhase::LastQuarter,
    MoonPhase::WaningCrescent,
];

impl MoonPhase {
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// Host key (`"new_moon"` .. `"waning_crescent"`).
    pub const fn key(self) -> &'static str {
        match self {
            Self::NewMoon => "new_moon",
            Self::WaxingCrescent => "waxing_crescent",
            Self::FirstQuarter => "first_quarter",
            Self::WaxingGibbous => "waxing_gibbous",
            Self::FullMoon => "full_moon",
            Self::WaningGibbous => "waning_gibbous",
            Self::LastQuarter => "last_quarter",
            Self::WaningCrescent => "waning_crescent",
        }
    }

    pub const fn all() -> &'static [MoonPhase; 8] {
        &ALL_MOON_PHASES
    }

    /// Phase for an elongation Moon − Sun in degrees (any value).
    pub fn from_elongation(elongation: f64) -> Self {
        let e = normalize_360(elongation);
        let bin = ((e / 45.0).floor() as usize).min(7);
        ALL_MOON_PHASES[bin]
    }
}

/// Phase from the Sun and Moon longitudes.
pub fn moon_phase_from_longitudes(sun_longitude: f64, moon_longitude: f64) -> MoonPhase {
    MoonPhase::from_elongation(moon_longitude - sun_longitude)
}

/// Moon phase at a UT Julian Day.
pub fn moon_phase(jd_ut: f64) -> Result<MoonPhase, ChartError> {
    let sun = position_of(jd_ut, Body::Sun, false)?;
    let moon = position_of(jd_ut, Body::Moon, false)?;
    Ok(moon_phase_from_longitudes(sun.longitude, moon.longitude))
}

/// Days from now until the signed elongation `e0`, changing at `rate`
/// degrees per day, first equals `target` (mod 360).
fn days_until(e0: f64, rate: f64, target: f64) -> Option<f64> {
    if rate > 0.0 {
        Some(normalize_360(target - e0) / rate)
    } else if rate < 0.0 {
        Some(normalize_360(e0 - target) / -rate)
    } else if signed_arc(e0, target).abs() < 1e-12 {
        Some(0.0)
    } else {
        None
    }
}

/// Whether the Moon leaves its sign before perfecting any of `aspects`
/// with any of `others`.
///
/// Every body moves linearly at its current speed. The exit window runs
/// from now to the moment the Moon crosses the next sign boundary in its
/// direction of motion; an aspect already exact now counts as perfecting.
/// Orbs play no part: an aspect inside its orb but not exact before the
/// exit does not end the void, so no [`crate::OrbConfig`] is taken.
pub fn void_of_course(
    moon: &EclipticPosition,
    others: &[EclipticPosition],
    aspects: &[AspectType],
) -> bool {
    let speed = moon.speed_longitude;
    if speed == 0.0 {
        return false;
    }
    let degree = sign_of(moon.longitude).degree;
    let remaining = if speed > 0.0 { 30.0 - degree } else { degree };
    let window = remaining / speed.abs();

    let perfects = |other: &EclipticPosition| {
        let e0 = signed_arc(other.longitude, moon.longitude);
        let rate = speed - other.speed_longitude;
        aspects.iter().any(|aspect| {
            let angle = aspect.angle();
            let targets: &[f64] = if angle == 0.0 || angle == 180.0 {
                &[angle]
            } else {
                &[angle, -angle]
            };
            targets
                .iter()
                .filter_map(|&target| days_until(e0, rate, target))
                .any(|t| t <= window)
        })
    };

    !others.iter().any(perfects)
}

/// Void-of-course Moon against the Sun and Mercury..Pluto, major aspects.
pub fn void_of_course_moon(jd_ut: f64) -> Result<bool, ChartError> {
    void_of_course_moon_with(jd_ut, &MAJOR_ASPECTS)
}

/// [`void_of_course_moon`] with a caller-chosen aspect set.
pub fn void_of_course_moon_with(jd_ut: f64, aspects: &[AspectType]) -> Result<bool, ChartError> {
    let codes = PLANETS.map(Body::code);
    let mut positions = positions_batch(jd_ut, &codes, true)?;
    let moon = positions
        .remove(&Body::Moon)
        .ok_or(ChartError::InvalidBody(Body::Moon.code()))?;
    let others: Vec<EclipticPosition> = positions.into_values().collect();
    let void = void_of_course(&moon, &others, aspects);
    debug!(jd_ut, moon = moon.longitude, void, "void_of_course_moon");
    Ok(void)
}
