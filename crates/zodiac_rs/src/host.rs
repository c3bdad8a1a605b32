//! Host entry points: integer body ids, calendar and calc flags in,
//! serializable records out.

use std::collections::BTreeMap;

use tracing::debug;
use zodiac_chart::{
    ChartPoint, OrbConfig, heliocentric_chart as helio_chart, house_cusps, house_of,
    moon_phase as lunar_phase, mundane_aspects as chart_mundane, natal_aspects as chart_natal,
    natal_chart as chart_natal_chart, planetary_hour_ruler, quick_chart, sign_of,
    transit_aspects as chart_transit, void_of_course_moon as voc,
};
use zodiac_core::{
    Body, CalcFlags, DEFAULT_BODIES, PLANETS, body_name, heliocentric_position_code,
    position_of_code, positions_all, positions_batch,
};
use zodiac_time::{Calendar, calendar_date, julian_day};

use crate::error::HostError;
use crate::records::{
    HostAspect, HostBasicChart, HostDate, HostHeliocentricChart, HostHouses, HostNatalChart,
    HostOrbConfig, HostPlanetPosition, HostPosition,
};

/// Calendar from an optional host flag; omitted means Gregorian.
fn calendar(flag: Option<i32>) -> Calendar {
    flag.map(Calendar::from_flag).unwrap_or_default()
}

fn include_speed(flags: Option<i32>) -> bool {
    flags.is_some_and(|f| CalcFlags::from_bits(f).include_speed())
}

/// Julian Day (UT) of a civil date and decimal hour.
pub fn swe_julday(year: i32, month: i32, day: i32, hour: f64, gregflag: Option<i32>) -> f64 {
    julian_day(year, month, day, hour, calendar(gregflag))
}

/// Civil date and decimal hour of a Julian Day.
pub fn swe_revjul(jd: f64, gregflag: Option<i32>) -> HostDate {
    calendar_date(jd, calendar(gregflag)).into()
}

/// Position of body `ipl`; speeds are filled when `iflag` has [`crate::FLG_SPEED`].
pub fn swe_calc_ut(jd_ut: f64, ipl: i32, iflag: Option<i32>) -> Result<HostPosition, HostError> {
    Ok(position_of_code(jd_ut, ipl, include_speed(iflag))?.into())
}

/// Positions for several ids, keyed by id. Fails on the first unknown id.
pub fn swe_calc_ut_batch(
    jd_ut: f64,
    ipls: &[i32],
    iflag: Option<i32>,
) -> Result<BTreeMap<i32, HostPosition>, HostError> {
    Ok(positions_batch(jd_ut, ipls, include_speed(iflag))?
        .into_iter()
        .map(|(body, p)| (body.code(), p.into()))
        .collect())
}

/// Positions of the default set (Sun..Pluto, true node), keyed by id.
pub fn swe_calc_ut_all(
    jd_ut: f64,
    iflag: Option<i32>,
) -> Result<BTreeMap<i32, HostPosition>, HostError> {
    Ok(positions_all(jd_ut, include_speed(iflag))?
        .into_iter()
        .map(|(body, p)| (body.code(), p.into()))
        .collect())
}

/// Heliocentric position of Earth (14) or Mercury..Pluto.
pub fn swe_calc_heliocentric_ut(
    jd_ut: f64,
    ipl: i32,
    iflag: Option<i32>,
) -> Result<HostPosition, HostError> {
    Ok(heliocentric_position_code(jd_ut, ipl, include_speed(iflag))?.into())
}

/// Placidus houses. `hsys` may be omitted or `'P'`.
pub fn swe_houses(
    jd_ut: f64,
    latitude: f64,
    longitude: f64,
    hsys: Option<char>,
) -> Result<HostHouses, HostError> {
    match hsys {
        None | Some('P') | Some('p') => {}
        Some(other) => {
            debug!(%other, "unsupported house system requested");
            return Err(HostError::HouseSystemUndefined("only Placidus is supported"));
        }
    }
    Ok(house_cusps(jd_ut, latitude, longitude)?.into())
}

/// Display name for an id, `"Planet {id}"` when unknown.
pub fn swe_get_planet_name(ipl: i32) -> String {
    body_name(ipl)
}

/// The ten planets with sign data.
pub fn planetary_positions(jd_ut: f64) -> Result<Vec<HostPlanetPosition>, HostError> {
    let codes = PLANETS.map(Body::code);
    Ok(positions_batch(jd_ut, &codes, true)?
        .iter()
        .map(|(body, p)| HostPlanetPosition::new(*body, p))
        .collect())
}

pub fn natal_chart(jd_ut: f64, latitude: f64, longitude: f64) -> Result<HostNatalChart, HostError> {
    let chart = chart_natal_chart(jd_ut, latitude, longitude)?;
    Ok(HostNatalChart::try_from(&chart)?)
}

pub fn heliocentric_chart(jd_ut: f64) -> Result<HostHeliocentricChart, HostError> {
    let chart = helio_chart(jd_ut)?;
    Ok(HostHeliocentricChart {
        planets: chart.planets.iter().map(HostPlanetPosition::from).collect(),
    })
}

/// Sun, Moon and rising sign keys for a Gregorian date.
pub fn basic_chart(
    year: i32,
    month: i32,
    day: i32,
    hour: f64,
    latitude: f64,
    longitude: f64,
) -> Result<HostBasicChart, HostError> {
    Ok(quick_chart(year, month, day, hour, latitude, longitude)?.into())
}

pub fn moon_phase_key(jd_ut: f64) -> Result<&'static str, HostError> {
    Ok(lunar_phase(jd_ut)?.key())
}

pub fn sign_key(longitude: f64) -> &'static str {
    sign_of(longitude).sign.key()
}

pub fn void_of_course_moon(jd_ut: f64) -> Result<bool, HostError> {
    Ok(voc(jd_ut)?)
}

pub fn planetary_hour_ruler_key(
    year: i32,
    month: i32,
    day: i32,
    hour: u32,
) -> Result<&'static str, HostError> {
    Ok(planetary_hour_ruler(year, month, day, hour)?.key())
}

pub fn planet_in_house(longitude: f64, cusps: &[f64]) -> Result<u8, HostError> {
    Ok(house_of(longitude, cusps)?)
}

fn orbs_or_default(orbs: Option<&HostOrbConfig>) -> OrbConfig {
    orbs.copied().unwrap_or_default()
}

fn host_aspects(aspects: &[zodiac_chart::Aspect]) -> Vec<HostAspect> {
    aspects.iter().map(HostAspect::from).collect()
}

pub fn mundane_aspects(
    jd_ut: f64,
    orbs: Option<&HostOrbConfig>,
) -> Result<Vec<HostAspect>, HostError> {
    Ok(host_aspects(&chart_mundane(jd_ut, &orbs_or_default(orbs))?))
}

pub fn natal_aspects(
    jd_ut: f64,
    latitude: f64,
    longitude: f64,
    orbs: Option<&HostOrbConfig>,
) -> Result<Vec<HostAspect>, HostError> {
    Ok(host_aspects(&chart_natal(
        jd_ut,
        latitude,
        longitude,
        &orbs_or_default(orbs),
    )?))
}

/// Transit aspects to supplied natal records. Natal speeds are ignored.
pub fn transit_aspects(
    jd_transit: f64,
    natal: &[HostPlanetPosition],
    orbs: Option<&HostOrbConfig>,
) -> Result<Vec<HostAspect>, HostError> {
    let points = natal
        .iter()
        .map(|p| Ok(ChartPoint::fixed(p.body()?, p.longitude)))
        .collect::<Result<Vec<_>, HostError>>()?;
    Ok(host_aspects(&chart_transit(
        jd_transit,
        &points,
        &orbs_or_default(orbs),
    )?))
}

/// JSON boundary for [`transit_aspects`].
///
/// `natal_json` is an array of planet-position records; `orbs_json`, when
/// given, is an orb record whose missing keys take their defaults. Returns
/// the aspect array as JSON.
pub fn transit_aspects_json(
    jd_transit: f64,
    natal_json: &str,
    orbs_json: Option<&str>,
) -> Result<String, HostError> {
    let natal: Vec<HostPlanetPosition> = serde_json::from_str(natal_json)?;
    let orbs: Option<HostOrbConfig> = orbs_json.map(serde_json::from_str).transpose()?;
    let aspects = transit_aspects(jd_transit, &natal, orbs.as_ref())?;
    Ok(serde_json::to_string(&aspects)?)
}

/// Every default-set body with sign data, keyed by body key.
pub fn positions_by_key(jd_ut: f64) -> Result<BTreeMap<&'static str, HostPlanetPosition>, HostError> {
    let all = positions_all(jd_ut, true)?;
    Ok(DEFAULT_BODIES
        .iter()
        .filter_map(|b| all.get(b).map(|p| (b.key(), HostPlanetPosition::new(*b, p))))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EARTH, FLG_SPEED, GREG_CAL, JUL_CAL, MARS, MOON, SUN};

    const JD_J2000: f64 = 2_451_545.0;

    #[test]
    fn julday_flag_defaults_to_gregorian() {
        let greg = swe_julday(2000, 1, 1, 12.0, None);
        assert_eq!(greg, JD_J2000);
        assert_eq!(swe_julday(2000, 1, 1, 12.0, Some(GREG_CAL)), greg);
        let jul = swe_julday(2000, 1, 1, 12.0, Some(JUL_CAL));
        assert!((jul - greg - 13.0).abs() < 1e-9);
    }

    #[test]
    fn revjul_round_trip() {
        let d = swe_revjul(JD_J2000, None);
        assert_eq!((d.year, d.month, d.day), (2000, 1, 1));
        assert!((d.hour - 12.0).abs() < 1e-9);
    }

    #[test]
    fn calc_respects_speed_flag() {
        let slow = swe_calc_ut(JD_J2000, SUN, None).unwrap();
        assert_eq!(slow.longitude_speed, 0.0);
        let fast = swe_calc_ut(JD_J2000, SUN, Some(FLG_SPEED)).unwrap();
        assert!((fast.longitude_speed - 1.0194).abs() < 0.001);
        assert_eq!(slow.longitude, fast.longitude);
    }

    #[test]
    fn calc_invalid_body() {
        assert_eq!(swe_calc_ut(JD_J2000, 12, None), Err(HostError::InvalidBody(12)));
        assert_eq!(swe_calc_ut(JD_J2000, EARTH, None), Err(HostError::InvalidBody(14)));
    }

    #[test]
    fn batch_keys_by_id() {
        let map = swe_calc_ut_batch(JD_J2000, &[MARS, SUN, MARS], Some(FLG_SPEED)).unwrap();
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![SUN, MARS]);
        assert_eq!(
            swe_calc_ut_batch(JD_J2000, &[SUN, 99], None),
            Err(HostError::InvalidBody(99))
        );
        assert_eq!(swe_calc_ut_all(JD_J2000, None).unwrap().len(), 11);
    }

    #[test]
    fn heliocentric_earth() {
        let earth = swe_calc_heliocentric_ut(JD_J2000, EARTH, None).unwrap();
        assert!((earth.longitude - 100.37).abs() < 0.05, "λ = {}", earth.longitude);
        assert!(swe_calc_heliocentric_ut(JD_J2000, MOON, None).is_err());
    }

    #[test]
    fn houses_only_placidus() {
        let h = swe_houses(JD_J2000, 51.5074, -0.1278, Some('P')).unwrap();
        assert!((h.mc - 279.4932).abs() < 0.01);
        assert!(matches!(
            swe_houses(JD_J2000, 51.5, 0.0, Some('K')),
            Err(HostError::HouseSystemUndefined(_))
        ));
    }

    #[test]
    fn planet_names() {
        assert_eq!(swe_get_planet_name(SUN), "Sun");
        assert_eq!(swe_get_planet_name(11), "True Node");
        assert_eq!(swe_get_planet_name(EARTH), "Earth");
        assert_eq!(swe_get_planet_name(42), "Planet 42");
    }

    #[test]
    fn derived_keys() {
        assert_eq!(sign_key(280.4), "capricorn");
        assert_eq!(planetary_hour_ruler_key(2000, 1, 2, 1).unwrap(), "venus");
        assert!(planetary_hour_ruler_key(2000, 1, 2, 24).is_err());
        let jd = swe_julday(2024, 1, 12, 0.0, None);
        assert_eq!(moon_phase_key(jd).unwrap(), "new_moon");
    }

    #[test]
    fn planet_in_house_validates_length() {
        let cusps: Vec<f64> = (0..12).map(|i| f64::from(i) * 30.0).collect();
        assert_eq!(planet_in_house(45.0, &cusps).unwrap(), 2);
        assert!(matches!(
            planet_in_house(45.0, &cusps[..10]),
            Err(HostError::MalformedInput(_))
        ));
    }

    #[test]
    fn natal_chart_record() {
        let chart = natal_chart(JD_J2000, 51.5074, -0.1278).unwrap();
        assert_eq!(chart.planets.len(), 10);
        assert_eq!(chart.houses.len(), 12);
        assert_eq!(chart.houses[0].house_number, 1);
        assert_eq!(chart.north_node.sign_key, "leo");
        let v = serde_json::to_value(&chart).unwrap();
        assert!(v.get("northNode").is_some());
        assert!(v["houses"][0].get("cuspLongitude").is_some());
    }

    #[test]
    fn heliocentric_chart_never_retrograde() {
        let chart = heliocentric_chart(JD_J2000).unwrap();
        assert_eq!(chart.planets.len(), 9);
        assert!(chart.planets.iter().all(|p| !p.is_retrograde));
        assert!(chart.planets.iter().any(|p| p.planet_key == "earth"));
    }

    #[test]
    fn transit_json_round_trip() {
        let natal = planetary_positions(JD_J2000).unwrap();
        let json = serde_json::to_string(&natal).unwrap();
        let out = transit_aspects_json(JD_J2000, &json, None).unwrap();
        let aspects: Vec<HostAspect> = serde_json::from_str(&out).unwrap();
        let self_conj = aspects
            .iter()
            .filter(|a| a.planet1_key == a.planet2_key && a.aspect_key == "conjunction")
            .count();
        assert_eq!(self_conj, 10);
    }

    #[test]
    fn transit_json_rejects_bad_input() {
        assert!(matches!(
            transit_aspects_json(JD_J2000, "not json", None),
            Err(HostError::MalformedInput(_))
        ));
        let unknown = r#"[{"planetKey":"vulcan","longitude":1.0,"signKey":"aries",
            "signDegree":1.0,"isRetrograde":false,"speed":0.0}]"#;
        assert!(matches!(
            transit_aspects_json(JD_J2000, unknown, None),
            Err(HostError::MalformedInput(_))
        ));
        assert!(matches!(
            transit_aspects_json(JD_J2000, "[]", None),
            Err(HostError::MalformedInput(_))
        ));
    }

    #[test]
    fn transit_json_partial_orbs() {
        let natal = r#"[{"planetKey":"sun","longitude":280.0,"signKey":"capricorn",
            "signDegree":10.0,"isRetrograde":false,"speed":1.0}]"#;
        let tight = transit_aspects_json(JD_J2000, natal, Some(r#"{"conjunction":0.1}"#)).unwrap();
        let aspects: Vec<HostAspect> = serde_json::from_str(&tight).unwrap();
        assert!(
            !aspects
                .iter()
                .any(|a| a.planet1_key == "sun" && a.aspect_key == "conjunction")
        );
        let wide = transit_aspects_json(JD_J2000, natal, None).unwrap();
        let aspects: Vec<HostAspect> = serde_json::from_str(&wide).unwrap();
        let a = aspects
            .iter()
            .find(|a| a.planet1_key == "sun" && a.aspect_key == "conjunction")
            .unwrap();
        // Transit Sun at 280.37° moving forward, away from the natal 280°.
        assert!(!a.is_applying, "delta {}", a.delta);
        assert!((a.delta - 0.37).abs() < 0.05);
    }

    #[test]
    fn mundane_default_and_custom_orbs() {
        let default = mundane_aspects(JD_J2000, None).unwrap();
        let zero = OrbConfig {
            conjunction: 0.0,
            semi_sextile: 0.0,
            semi_square: 0.0,
            sextile: 0.0,
            quintile: 0.0,
            square: 0.0,
            trine: 0.0,
            sesquiquadrate: 0.0,
            quincunx: 0.0,
            opposition: 0.0,
        };
        assert!(mundane_aspects(JD_J2000, Some(&zero)).unwrap().is_empty());
        assert!(!default.is_empty());
        let natal = natal_aspects(JD_J2000, 40.0, -74.0, None).unwrap();
        assert_eq!(natal, default);
    }

    #[test]
    fn positions_by_key_has_node() {
        let map = positions_by_key(JD_J2000).unwrap();
        assert_eq!(map.len(), 11);
        assert!(map.contains_key("true_node"));
    }
}
