//! Serializable host records.
//!
//! Field names are the camelCase names hosts already consume.

use serde::{Deserialize, Serialize};
use zodiac_chart::{
    Aspect, ChartError, HelioPlacement, HouseCusp, HouseCusps, NatalChart, Placement, QuickChart,
    sign_of,
};
use zodiac_core::{Body, EclipticPosition};
use zodiac_time::CalendarDate;

/// Orb record: the camelCase serde form of [`zodiac_chart::OrbConfig`].
pub type HostOrbConfig = zodiac_chart::OrbConfig;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostPosition {
    pub longitude: f64,
    pub latitude: f64,
    pub distance: f64,
    pub longitude_speed: f64,
    pub latitude_speed: f64,
    pub distance_speed: f64,
}

impl From<EclipticPosition> for HostPosition {
    fn from(p: EclipticPosition) -> Self {
        Self {
            longitude: p.longitude,
            latitude: p.latitude,
            distance: p.distance,
            longitude_speed: p.speed_longitude,
            latitude_speed: p.speed_latitude,
            distance_speed: p.speed_distance,
        }
    }
}

/// Calendar date returned by `swe_revjul`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HostDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: f64,
}

impl From<CalendarDate> for HostDate {
    fn from(d: CalendarDate) -> Self {
        Self {
            year: d.year,
            month: d.month,
            day: d.day,
            hour: d.hour,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HostHouses {
    pub cusps: [f64; 12],
    pub ascendant: f64,
    pub mc: f64,
    pub armc: f64,
    pub vertex: f64,
}

impl From<HouseCusps> for HostHouses {
    fn from(h: HouseCusps) -> Self {
        Self {
            cusps: h.cusps,
            ascendant: h.ascendant,
            mc: h.mc,
            armc: h.armc,
            vertex: h.vertex,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostPlanetPosition {
    pub planet_key: String,
    pub longitude: f64,
    pub sign_key: String,
    pub sign_degree: f64,
    pub is_retrograde: bool,
    pub speed: f64,
}

impl HostPlanetPosition {
    /// Record for a geocentric position.
    pub fn new(body: Body, position: &EclipticPosition) -> Self {
        Self::with_key(body.key(), position, position.is_retrograde())
    }

    fn with_key(key: &str, position: &EclipticPosition, is_retrograde: bool) -> Self {
        let sign = sign_of(position.longitude);
        Self {
            planet_key: key.to_owned(),
            longitude: position.longitude,
            sign_key: sign.sign.key().to_owned(),
            sign_degree: sign.degree,
            is_retrograde,
            speed: position.speed_longitude,
        }
    }

    /// The body named by `planet_key`.
    pub fn body(&self) -> Result<Body, ChartError> {
        Body::from_key(&self.planet_key).ok_or_else(|| {
            ChartError::MalformedInput(format!("unknown planetKey {:?}", self.planet_key))
        })
    }
}

impl From<&Placement> for HostPlanetPosition {
    fn from(p: &Placement) -> Self {
        Self::new(p.body, &p.position)
    }
}

impl From<&HelioPlacement> for HostPlanetPosition {
    fn from(p: &HelioPlacement) -> Self {
        // No retrograde motion in the heliocentric frame.
        Self::with_key(p.body.key(), &p.position, false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostHouseCusp {
    pub house_number: u8,
    pub cusp_longitude: f64,
    pub sign_key: String,
    pub sign_degree: f64,
}

impl From<&HouseCusp> for HostHouseCusp {
    fn from(c: &HouseCusp) -> Self {
        Self {
            house_number: c.number,
            cusp_longitude: c.longitude,
            sign_key: c.sign.key().to_owned(),
            sign_degree: c.sign_degree,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostNorthNode {
    pub longitude: f64,
    pub sign_key: String,
    pub sign_degree: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostNatalChart {
    pub planets: Vec<HostPlanetPosition>,
    pub houses: Vec<HostHouseCusp>,
    pub ascendant: f64,
    pub midheaven: f64,
    pub north_node: HostNorthNode,
}

impl TryFrom<&NatalChart> for HostNatalChart {
    type Error = ChartError;

    fn try_from(chart: &NatalChart) -> Result<Self, Self::Error> {
        let node = chart
            .north_node()
            .ok_or(ChartError::InvalidBody(Body::TrueNode.code()))?;
        Ok(Self {
            planets: chart.planets().map(HostPlanetPosition::from).collect(),
            houses: chart.cusps().iter().map(HostHouseCusp::from).collect(),
            ascendant: chart.ascendant(),
            midheaven: chart.midheaven(),
            north_node: HostNorthNode {
                longitude: node.longitude(),
                sign_key: node.sign.key().to_owned(),
                sign_degree: node.sign_degree,
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostHeliocentricChart {
    pub planets: Vec<HostPlanetPosition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostAspect {
    pub planet1_key: String,
    pub planet2_key: String,
    pub aspect_key: String,
    /// Distance from exact, `|delta|`.
    pub orb: f64,
    pub delta: f64,
    pub is_applying: bool,
}

impl From<&Aspect> for HostAspect {
    fn from(a: &Aspect) -> Self {
        Self {
            planet1_key: a.body_a.key().to_owned(),
            planet2_key: a.body_b.key().to_owned(),
            aspect_key: a.aspect_type.key().to_owned(),
            orb: a.delta.abs(),
            delta: a.delta,
            is_applying: a.applying,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostBasicChart {
    pub sun_sign: String,
    pub moon_sign: String,
    pub rising_sign: String,
}

impl From<QuickChart> for HostBasicChart {
    fn from(q: QuickChart) -> Self {
        Self {
            sun_sign: q.sun.key().to_owned(),
            moon_sign: q.moon.key().to_owned(),
            rising_sign: q.rising.key().to_owned(),
        }
    }
}
