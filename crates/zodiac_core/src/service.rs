//! Position service: single, batch and full-set queries.
//!
//! Inputs are UT Julian Days. Each query converts to TT once, evaluates
//! the series, and (on request) differentiates numerically with a
//! symmetric step for the speeds.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;
use zodiac_time::Epoch;

use crate::body::{Body, DEFAULT_BODIES, HelioBody};
use crate::error::EphemerisError;
use crate::position::EclipticPosition;
use crate::series::{self, LonLatDist};

/// Half-width of the symmetric difference used for speeds, in days.
pub const SPEED_STEP_DAYS: f64 = 0.005;

fn check_epoch(jd: f64) -> Result<Epoch, EphemerisError> {
    if jd.is_finite() {
        Ok(Epoch::from_jd_ut(jd))
    } else {
        Err(EphemerisError::NonFiniteEpoch(jd))
    }
}

/// Signed shortest difference `b − a` on the circle, degrees.
fn wrapped_diff(a: f64, b: f64) -> f64 {
    (b - a + 180.0).rem_euclid(360.0) - 180.0
}

fn evaluate<F>(eval: F, epoch: Epoch, include_speed: bool) -> EclipticPosition
where
    F: Fn(f64) -> LonLatDist,
{
    let (longitude, latitude, distance) = eval(epoch.centuries_tt());
    let mut pos = EclipticPosition::new(longitude, latitude, distance);
    if include_speed {
        let (l0, b0, r0) = eval(epoch.offset_days(-SPEED_STEP_DAYS).centuries_tt());
        let (l1, b1, r1) = eval(epoch.offset_days(SPEED_STEP_DAYS).centuries_tt());
        let span = 2.0 * SPEED_STEP_DAYS;
        pos.speed_longitude = wrapped_diff(l0, l1) / span;
        pos.speed_latitude = (b1 - b0) / span;
        pos.speed_distance = (r1 - r0) / span;
    }
    pos
}

fn geocentric(body: Body, epoch: Epoch, include_speed: bool) -> EclipticPosition {
    evaluate(|t| series::apparent_geocentric(body, t), epoch, include_speed)
}

/// Apparent geocentric position of one body.
pub fn position_of(
    jd_ut: f64,
    body: Body,
    include_speed: bool,
) -> Result<EclipticPosition, EphemerisError> {
    let epoch = check_epoch(jd_ut)?;
    debug!(jd_ut, body = body.name(), include_speed, "position_of");
    Ok(geocentric(body, epoch, include_speed))
}

/// [`position_of`] addressed by integer id.
pub fn position_of_code(
    jd_ut: f64,
    id: i32,
    include_speed: bool,
) -> Result<EclipticPosition, EphemerisError> {
    let body = Body::from_code(id).ok_or(EphemerisError::InvalidBody(id))?;
    position_of(jd_ut, body, include_speed)
}

/// Positions of the default set (Sun..Pluto, true node).
pub fn positions_all(
    jd_ut: f64,
    include_speed: bool,
) -> Result<BTreeMap<Body, EclipticPosition>, EphemerisError> {
    let epoch = check_epoch(jd_ut)?;
    debug!(jd_ut, include_speed, "positions_all");
    Ok(DEFAULT_BODIES
        .iter()
        .map(|&body| (body, geocentric(body, epoch, include_speed)))
        .collect())
}

/// Positions for a subset of ids.
///
/// Every id is validated before anything is evaluated; the first unknown
/// id fails the whole call. Duplicates collapse to one entry.
pub fn positions_batch(
    jd_ut: f64,
    ids: &[i32],
    include_speed: bool,
) -> Result<BTreeMap<Body, EclipticPosition>, EphemerisError> {
    let bodies = ids
        .iter()
        .map(|&id| Body::from_code(id).ok_or(EphemerisError::InvalidBody(id)))
        .collect::<Result<BTreeSet<Body>, _>>()?;
    let epoch = check_epoch(jd_ut)?;
    debug!(jd_ut, requested = ids.len(), unique = bodies.len(), "positions_batch");
    Ok(bodies
        .into_iter()
        .map(|body| (body, geocentric(body, epoch, include_speed)))
        .collect())
}

/// Heliocentric position of date (no light time, no aberration).
pub fn heliocentric_position(
    jd_ut: f64,
    body: HelioBody,
    include_speed: bool,
) -> Result<EclipticPosition, EphemerisError> {
    let epoch = check_epoch(jd_ut)?;
    debug!(jd_ut, body = body.name(), include_speed, "heliocentric_position");
    Ok(evaluate(|t| series::heliocentric(body, t), epoch, include_speed))
}

/// [`heliocentric_position`] addressed by integer id (planets, Earth = 14).
pub fn heliocentric_position_code(
    jd_ut: f64,
    id: i32,
    include_speed: bool,
) -> Result<EclipticPosition, EphemerisError> {
    let body = HelioBody::from_code(id).ok_or(EphemerisError::InvalidBody(id))?;
    heliocentric_position(jd_ut, body, include_speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const JD: f64 = 2_451_545.0;

    #[test]
    fn unknown_id_rejected() {
        assert_eq!(
            position_of_code(JD, 99, false),
            Err(EphemerisError::InvalidBody(99))
        );
        assert_eq!(
            position_of_code(JD, -1, false),
            Err(EphemerisError::InvalidBody(-1))
        );
    }

    #[test]
    fn batch_fails_fast_on_first_bad_id() {
        let err = positions_batch(JD, &[0, 42, 1, 77], false);
        assert_eq!(err, Err(EphemerisError::InvalidBody(42)));
    }

    #[test]
    fn batch_deduplicates() {
        let map = positions_batch(JD, &[1, 0, 1, 0, 1], false).unwrap();
        assert_eq!(map.len(), 2);
        assert!(map.contains_key(&Body::Sun) && map.contains_key(&Body::Moon));
    }

    #[test]
    fn batch_matches_single() {
        let map = positions_batch(JD, &[4], true).unwrap();
        let single = position_of(JD, Body::Mars, true).unwrap();
        assert_eq!(map[&Body::Mars], single);
    }

    #[test]
    fn all_has_default_set() {
        let map = positions_all(JD, false).unwrap();
        assert_eq!(map.len(), 11);
        assert!(map.contains_key(&Body::TrueNode));
        assert!(!map.contains_key(&Body::MeanNode));
        for pos in map.values() {
            assert!((0.0..360.0).contains(&pos.longitude));
            assert_eq!(pos.speed_longitude, 0.0);
        }
    }

    #[test]
    fn non_finite_epoch_rejected() {
        assert!(matches!(
            position_of(f64::NAN, Body::Sun, false),
            Err(EphemerisError::NonFiniteEpoch(_))
        ));
    }

    #[test]
    fn speeds_at_j2000() {
        let sun = position_of(JD, Body::Sun, true).unwrap();
        assert!(
            (sun.speed_longitude - 1.0194).abs() < 0.001,
            "Sun speed = {}°/d, expected ~1.0194",
            sun.speed_longitude
        );
        let moon = position_of(JD, Body::Moon, true).unwrap();
        assert!(
            (moon.speed_longitude - 12.0212).abs() < 0.01,
            "Moon speed = {}°/d, expected ~12.0212",
            moon.speed_longitude
        );
    }

    #[test]
    fn speed_flag_off_leaves_zero_speeds() {
        let pos = position_of(JD, Body::Venus, false).unwrap();
        assert_eq!(
            (pos.speed_longitude, pos.speed_latitude, pos.speed_distance),
            (0.0, 0.0, 0.0)
        );
    }

    #[test]
    fn heliocentric_rejects_moon() {
        assert_eq!(
            heliocentric_position_code(JD, 1, false),
            Err(EphemerisError::InvalidBody(1))
        );
        let earth = heliocentric_position_code(JD, 14, true).unwrap();
        assert!((earth.distance - 0.9833).abs() < 0.001);
        assert!((earth.speed_longitude - 1.019).abs() < 0.01);
    }

    #[test]
    fn wrapped_diff_crosses_zero() {
        assert!((wrapped_diff(359.9, 0.1) - 0.2).abs() < 1e-12);
        assert!((wrapped_diff(0.1, 359.9) + 0.2).abs() < 1e-12);
    }
}
