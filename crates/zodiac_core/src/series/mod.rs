//! Analytical series evaluator.
//!
//! Every body is a pure function of TT: VSOP87 for the planets and the
//! Earth, mean elements for Pluto, a truncated lunar theory for the Moon,
//! Delaunay arguments for the node. This module chains them into apparent
//! positions of date: one light-time iteration, precession from J2000,
//! annual aberration and nutation in longitude.

pub(crate) mod elements;
pub(crate) mod moon;
pub(crate) mod nodes;
pub(crate) mod planets;

use zodiac_frames::{Spherical, ecliptic_j2000_to_date, nutation_arcsec};

use crate::body::{Body, HelioBody};
use planets::{Orbit, heliocentric_j2000};

/// Light time for one AU, in days.
pub const LIGHT_TIME_DAYS_PER_AU: f64 = 0.005_775_518_3;

/// Constant of aberration, arcseconds.
pub const ABERRATION_ARCSEC: f64 = 20.495_52;

/// Solar aberration at 1 AU, arcseconds.
const SUN_ABERRATION_ARCSEC: f64 = 20.4898;

/// Longitude, latitude (degrees) and distance (AU).
pub(crate) type LonLatDist = (f64, f64, f64);

fn orbit_of(body: Body) -> Option<Orbit> {
    match body {
        Body::Mercury => Some(Orbit::Mercury),
        Body::Venus => Some(Orbit::Venus),
        Body::Mars => Some(Orbit::Mars),
        Body::Jupiter => Some(Orbit::Jupiter),
        Body::Saturn => Some(Orbit::Saturn),
        Body::Uranus => Some(Orbit::Uranus),
        Body::Neptune => Some(Orbit::Neptune),
        Body::Pluto => Some(Orbit::Pluto),
        _ => None,
    }
}

fn helio_orbit_of(body: HelioBody) -> Orbit {
    match body {
        HelioBody::Mercury => Orbit::Mercury,
        HelioBody::Venus => Orbit::Venus,
        HelioBody::Earth => Orbit::Earth,
        HelioBody::Mars => Orbit::Mars,
        HelioBody::Jupiter => Orbit::Jupiter,
        HelioBody::Saturn => Orbit::Saturn,
        HelioBody::Uranus => Orbit::Uranus,
        HelioBody::Neptune => Orbit::Neptune,
        HelioBody::Pluto => Orbit::Pluto,
    }
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn norm(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Heliocentric Earth, J2000 ecliptic (AU).
pub(crate) fn earth_j2000(t: f64) -> [f64; 3] {
    heliocentric_j2000(Orbit::Earth, t)
}

/// Annual aberration in ecliptic coordinates (Meeus 23.2), degrees.
///
/// `sun_lon` is the Sun's geometric longitude of date.
fn annual_aberration(lon: f64, lat: f64, sun_lon: f64, t: f64) -> (f64, f64) {
    let e = 0.016_708_634 - 0.000_042_037 * t;
    let perihelion = (102.937_35 + 1.719_46 * t).to_radians();
    let k = ABERRATION_ARCSEC / 3600.0;
    let l = lon.to_radians();
    let b = lat.to_radians();
    let s = sun_lon.to_radians();
    let dl = (-k * (s - l).cos() + e * k * (perihelion - l).cos()) / b.cos();
    let db = -k * b.sin() * ((s - l).sin() - e * (perihelion - l).sin());
    (dl, db)
}

/// Apparent geocentric position of date for `body` at `t` centuries of TT.
pub(crate) fn apparent_geocentric(body: Body, t: f64) -> LonLatDist {
    let (dpsi_arcsec, _) = nutation_arcsec(t);
    let dpsi = dpsi_arcsec / 3600.0;

    if let Some(orbit) = orbit_of(body) {
        return apparent_planet(orbit, t, dpsi);
    }

    match body {
        Body::Moon => {
            let (lon, lat, dist) = moon::moon_of_date(t);
            ((lon + dpsi).rem_euclid(360.0), lat, dist)
        }
        Body::MeanNode => (nodes::mean_node_deg(t), 0.0, 0.0),
        Body::TrueNode => (nodes::true_node_deg(t), 0.0, 0.0),
        _ => {
            let earth = earth_j2000(t);
            let geo = Spherical::from_cartesian([-earth[0], -earth[1], -earth[2]]);
            let (lon, lat) = ecliptic_j2000_to_date(geo.lon, geo.lat, t);
            let aberration = -SUN_ABERRATION_ARCSEC / 3600.0 / geo.radius;
            ((lon + aberration + dpsi).rem_euclid(360.0), lat, geo.radius)
        }
    }
}

/// Planet seen from the Earth: light time, precession, aberration, nutation.
fn apparent_planet(orbit: Orbit, t: f64, dpsi: f64) -> LonLatDist {
    let earth = earth_j2000(t);
    let first = sub(heliocentric_j2000(orbit, t), earth);
    let tau = norm(first) * LIGHT_TIME_DAYS_PER_AU;
    let retarded = sub(heliocentric_j2000(orbit, t - tau / 36_525.0), earth);
    let geo = Spherical::from_cartesian(retarded);
    let (lon, lat) = ecliptic_j2000_to_date(geo.lon, geo.lat, t);

    let sun = Spherical::from_cartesian([-earth[0], -earth[1], -earth[2]]);
    let (sun_lon, _) = ecliptic_j2000_to_date(sun.lon, 0.0, t);
    let (dl, db) = annual_aberration(lon, lat, sun_lon, t);

    (
        (lon + dl + dpsi).rem_euclid(360.0),
        lat + db,
        geo.radius,
    )
}

/// Heliocentric position of date (precessed, nutation in longitude applied).
pub(crate) fn heliocentric(body: HelioBody, t: f64) -> LonLatDist {
    let (dpsi_arcsec, _) = nutation_arcsec(t);
    let v = heliocentric_j2000(helio_orbit_of(body), t);
    let s = Spherical::from_cartesian(v);
    let (lon, lat) = ecliptic_j2000_to_date(s.lon, s.lat, t);
    ((lon + dpsi_arcsec / 3600.0).rem_euclid(360.0), lat, s.radius)
}
