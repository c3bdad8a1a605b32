//! Chart assembly: quick sign summary, natal chart, heliocentric chart.

use tracing::debug;
use zodiac_core::{
    ALL_HELIO_BODIES, Body, EclipticPosition, HelioBody, heliocentric_position, positions_all,
};
use zodiac_time::{Calendar, julian_day};

use crate::error::ChartError;
use crate::houses::{HouseCusp, HouseCusps, house_cusps};
use crate::sign::{ZodiacSign, sign_of};

/// Sun, Moon and rising signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickChart {
    pub sun: ZodiacSign,
    pub moon: ZodiacSign,
    pub rising: ZodiacSign,
}

/// A body placed in the zodiac and in a house.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub body: Body,
    pub position: EclipticPosition,
    pub sign: ZodiacSign,
    /// Degrees into the sign, [0, 30).
    pub sign_degree: f64,
    /// House number, 1-12.
    pub house: u8,
}

impl Placement {
    pub fn longitude(&self) -> f64 {
        self.position.longitude
    }

    pub fn is_retrograde(&self) -> bool {
        self.position.is_retrograde()
    }
}

/// Natal chart for one instant and place.
///
/// Holds a placement for every body of the default set (Sun..Pluto and the
/// true node), ordered by body id, and the Placidus houses.
#[derive(Debug, Clone, PartialEq)]
pub struct NatalChart {
    pub jd_ut: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub placements: Vec<Placement>,
    pub houses: HouseCusps,
}

impl NatalChart {
    pub fn placement(&self, body: Body) -> Option<&Placement> {
        self.placements.iter().find(|p| p.body == body)
    }

    /// Placements of the ten planets (nodes excluded).
    pub fn planets(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(|p| !p.body.is_node())
    }

    /// The true lunar node.
    pub fn north_node(&self) -> Option<&Placement> {
        self.placement(Body::TrueNode)
    }

    pub fn ascendant(&self) -> f64 {
        self.houses.ascendant
    }

    pub fn midheaven(&self) -> f64 {
        self.houses.mc
    }

    /// House cusps with sign data, house 1 first.
    pub fn cusps(&self) -> [HouseCusp; 12] {
        self.houses.records()
    }
}

/// A heliocentric position with its sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelioPlacement {
    pub body: HelioBody,
    pub position: EclipticPosition,
    pub sign: ZodiacSign,
    pub sign_degree: f64,
}

/// Heliocentric chart: Earth and Mercury..Pluto, no houses or angles.
#[derive(Debug, Clone, PartialEq)]
pub struct HeliocentricChart {
    pub jd_ut: f64,
    pub planets: Vec<HelioPlacement>,
}

/// Sun, Moon and rising signs for a Gregorian UT date and decimal hour.
pub fn quick_chart(
    year: i32,
    month: i32,
    day: i32,
    hour: f64,
    latitude: f64,
    longitude: f64,
) -> Result<QuickChart, ChartError> {
    let jd = julian_day(year, month, day, hour, Calendar::Gregorian);
    debug!(jd, latitude, longitude, "quick_chart");
    let sun = zodiac_core::position_of(jd, Body::Sun, false)?;
    let moon = zodiac_core::position_of(jd, Body::Moon, false)?;
    let houses = house_cusps(jd, latitude, longitude)?;
    Ok(QuickChart {
        sun: sign_of(sun.longitude).sign,
        moon: sign_of(moon.longitude).sign,
        rising: sign_of(houses.ascendant).sign,
    })
}

/// Natal chart for a UT Julian Day and geographic location.
pub fn natal_chart(jd_ut: f64, latitude: f64, longitude: f64) -> Result<NatalChart, ChartError> {
    debug!(jd_ut, latitude, longitude, "natal_chart");
    let positions = positions_all(jd_ut, true)?;
    let houses = house_cusps(jd_ut, latitude, longitude)?;

    let placements = positions
        .into_iter()
        .map(|(body, position)| {
            let pos = sign_of(position.longitude);
            Ok(Placement {
                body,
                position,
                sign: pos.sign,
                sign_degree: pos.degree,
                house: houses.house_of(position.longitude)?,
            })
        })
        .collect::<Result<Vec<_>, ChartError>>()?;

    Ok(NatalChart {
        jd_ut,
        latitude,
        longitude,
        placements,
        houses,
    })
}

/// Heliocentric positions of Earth and Mercury..Pluto with signs.
pub fn heliocentric_chart(jd_ut: f64) -> Result<HeliocentricChart, ChartError> {
    debug!(jd_ut, "heliocentric_chart");
    let planets = ALL_HELIO_BODIES
        .iter()
        .map(|&body| {
            let position = heliocentric_position(jd_ut, body, true)?;
            let pos = sign_of(position.longitude);
            Ok(HelioPlacement {
                body,
                position,
                sign: pos.sign,
                sign_degree: pos.degree,
            })
        })
        .collect::<Result<Vec<_>, ChartError>>()?;
    Ok(HeliocentricChart { jd_ut, planets })
}
