//! Aspect engine: angular separation, classification with configurable
//! orbs, and mundane, natal and transit aspect sets.
//!
//! Classification tries the aspect types in ascending exact angle and
//! keeps the first one whose orb contains the separation, so every pair
//! yields at most one aspect.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;
use zodiac_core::{Body, PLANETS, positions_batch};

use crate::chart::natal_chart;
use crate::error::ChartError;
use crate::util::{normalize_360, signed_arc};

/// The ten aspect types, in ascending exact angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AspectType {
    #[serde(rename = "conjunction")]
    Conjunction,
    #[serde(rename = "semi-sextile")]
    SemiSextile,
    #[serde(rename = "semi-square")]
    SemiSquare,
    #[serde(rename = "sextile")]
    Sextile,
    #[serde(rename = "quintile")]
    Quintile,
    #[serde(rename = "square")]
    Square,
    #[serde(rename = "trine")]
    Trine,
    #[serde(rename = "sesquiquadrate")]
    Sesquiquadrate,
    #[serde(rename = "quincunx")]
    Quincunx,
    #[serde(rename = "opposition")]
    Opposition,
}

/// All aspect types in ascending exact angle.
pub const ALL_ASPECTS: [AspectType; 10] = [
    AspectType::Conjunction,
    AspectType::SemiSextile,
    AspectType::SemiSquare,
    AspectType::Sextile,
    AspectType::Quintile,
    AspectType::Square,
    AspectType::Trine,
    AspectType::Sesquiquadrate,
    AspectType::Quincunx,
    AspectType::Opposition,
];

/// The Ptolemaic aspects.
pub const MAJOR_ASPECTS: [AspectType; 5] = [
    AspectType::Conjunction,
    AspectType::Sextile,
    AspectType::Square,
    AspectType::Trine,
    AspectType::Opposition,
];

impl AspectType {
    /// Exact angle in degrees.
    pub const fn angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::SemiSextile => 30.0,
            Self::SemiSquare => 45.0,
            Self::Sextile => 60.0,
            Self::Quintile => 72.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Sesquiquadrate => 135.0,
            Self::Quincunx => 150.0,
            Self::Opposition => 180.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::SemiSextile => "Semi-sextile",
            Self::SemiSquare => "Semi-square",
            Self::Sextile => "Sextile",
            Self::Quintile => "Quintile",
            Self::Square => "Square",
            Self::Trine => "Trine",
            Self::Sesquiquadrate => "Sesquiquadrate",
            Self::Quincunx => "Quincunx",
            Self::Opposition => "Opposition",
        }
    }

    /// Host key (`"conjunction"`, `"semi-sextile"`, …).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::SemiSextile => "semi-sextile",
            Self::SemiSquare => "semi-square",
            Self::Sextile => "sextile",
            Self::Quintile => "quintile",
            Self::Square => "square",
            Self::Trine => "trine",
            Self::Sesquiquadrate => "sesquiquadrate",
            Self::Quincunx => "quincunx",
            Self::Opposition => "opposition",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        ALL_ASPECTS.iter().copied().find(|a| a.key() == key)
    }

    pub const fn all() -> &'static [AspectType; 10] {
        &ALL_ASPECTS
    }

    pub const fn is_major(self) -> bool {
        matches!(
            self,
            Self::Conjunction | Self::Sextile | Self::Square | Self::Trine | Self::Opposition
        )
    }
}

/// Orb allowance per aspect type, degrees.
///
/// Deserializes from a camelCase record; missing keys keep their default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrbConfig {
    pub conjunction: f64,
    pub semi_sextile: f64,
    pub semi_square: f64,
    pub sextile: f64,
    pub quintile: f64,
    pub square: f64,
    pub trine: f64,
    pub sesquiquadrate: f64,
    pub quincunx: f64,
    pub opposition: f64,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            conjunction: 8.0,
            semi_sextile: 4.0,
            semi_square: 4.0,
            sextile: 6.0,
            quintile: 4.0,
            square: 8.0,
            trine: 8.0,
            sesquiquadrate: 4.0,
            quincunx: 5.0,
            opposition: 8.0,
        }
    }
}

impl OrbConfig {
    pub fn orb(&self, aspect: AspectType) -> f64 {
        match aspect {
            AspectType::Conjunction => self.conjunction,
            AspectType::SemiSextile => self.semi_sextile,
            AspectType::SemiSquare => self.semi_square,
            AspectType::Sextile => self.sextile,
            AspectType::Quintile => self.quintile,
            AspectType::Square => self.square,
            AspectType::Trine => self.trine,
            AspectType::Sesquiquadrate => self.sesquiquadrate,
            AspectType::Quincunx => self.quincunx,
            AspectType::Opposition => self.opposition,
        }
    }

    /// Copy with one orb replaced.
    pub fn with_orb(mut self, aspect: AspectType, orb: f64) -> Self {
        let slot = match aspect {
            AspectType::Conjunction => &mut self.conjunction,
            AspectType::SemiSextile => &mut self.semi_sextile,
            AspectType::SemiSquare => &mut self.semi_square,
            AspectType::Sextile => &mut self.sextile,
            AspectType::Quintile => &mut self.quintile,
            AspectType::Square => &mut self.square,
            AspectType::Trine => &mut self.trine,
            AspectType::Sesquiquadrate => &mut self.sesquiquadrate,
            AspectType::Quincunx => &mut self.quincunx,
            AspectType::Opposition => &mut self.opposition,
        };
        *slot = orb;
        self
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        for aspect in ALL_ASPECTS {
            let orb = self.orb(aspect);
            if !orb.is_finite() || orb < 0.0 {
                return Err(ChartError::MalformedInput(format!(
                    "{} orb must be a non-negative number, got {orb}",
                    aspect.key()
                )));
            }
        }
        Ok(())
    }
}

/// Result of classifying one separation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectMatch {
    pub aspect_type: AspectType,
    pub exact_angle: f64,
    /// Orb allowance that admitted the match.
    pub orb: f64,
    /// `separation − exact_angle`, signed.
    pub delta: f64,
}

/// An aspect between two bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aspect {
    pub body_a: Body,
    pub body_b: Body,
    pub aspect_type: AspectType,
    pub exact_angle: f64,
    pub orb: f64,
    pub delta: f64,
    /// `|delta|` is shrinking at the current relative speed.
    pub applying: bool,
}

/// A body's longitude and longitudinal speed, the input of the aspect engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub body: Body,
    pub longitude: f64,
    /// Degrees per day.
    pub speed: f64,
}

impl ChartPoint {
    pub fn new(body: Body, longitude: f64, speed: f64) -> Self {
        Self {
            body,
            longitude,
            speed,
        }
    }

    /// The same point with zero speed.
    pub fn fixed(body: Body, longitude: f64) -> Self {
        Self::new(body, longitude, 0.0)
    }
}

/// Shortest angular distance between two longitudes, [0, 180].
pub fn angular_separation(a: f64, b: f64) -> f64 {
    signed_arc(b, a).abs()
}

/// First aspect type, in ascending exact angle, whose orb contains
/// `separation`.
pub fn classify_aspect(separation: f64, orbs: &OrbConfig) -> Option<AspectMatch> {
    ALL_ASPECTS.iter().find_map(|&aspect_type| {
        let exact_angle = aspect_type.angle();
        let orb = orbs.orb(aspect_type);
        let delta = separation - exact_angle;
        (delta.abs() <= orb).then_some(AspectMatch {
            aspect_type,
            exact_angle,
            orb,
            delta,
        })
    })
}

/// Aspect between two points, if any.
pub fn aspect_between(a: &ChartPoint, b: &ChartPoint, orbs: &OrbConfig) -> Option<Aspect> {
    let elongation = signed_arc(b.longitude, a.longitude);
    let separation = elongation.abs();
    let m = classify_aspect(separation, orbs)?;
    // d(separation)/dt = sign(elongation)·(va − vb)
    let separation_rate = elongation.signum() * (a.speed - b.speed);
    let applying = m.delta * separation_rate < 0.0;
    Some(Aspect {
        body_a: a.body,
        body_b: b.body,
        aspect_type: m.aspect_type,
        exact_angle: m.exact_angle,
        orb: m.orb,
        delta: m.delta,
        applying,
    })
}

/// Aspects among all unordered pairs of `points` (i < j).
pub fn aspects_among(points: &[ChartPoint], orbs: &OrbConfig) -> Vec<Aspect> {
    let mut aspects = Vec::new();
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            aspects.extend(aspect_between(a, b, orbs));
        }
    }
    aspects
}

fn planet_points(jd_ut: f64) -> Result<Vec<ChartPoint>, ChartError> {
    let codes = PLANETS.map(Body::code);
    let positions = positions_batch(jd_ut, &codes, true)?;
    Ok(positions
        .into_iter()
        .map(|(body, p)| ChartPoint::new(body, p.longitude, p.speed_longitude))
        .collect())
}

/// Aspects among the ten planets at one instant.
pub fn mundane_aspects(jd_ut: f64, orbs: &OrbConfig) -> Result<Vec<Aspect>, ChartError> {
    orbs.validate()?;
    debug!(jd_ut, "mundane_aspects");
    Ok(aspects_among(&planet_points(jd_ut)?, orbs))
}

/// Aspects among the planets of the natal chart for `(jd_ut, lat, lon)`.
pub fn natal_aspects(
    jd_ut: f64,
    latitude: f64,
    longitude: f64,
    orbs: &OrbConfig,
) -> Result<Vec<Aspect>, ChartError> {
    orbs.validate()?;
    let chart = natal_chart(jd_ut, latitude, longitude)?;
    let points: Vec<ChartPoint> = chart
        .planets()
        .map(|p| ChartPoint::new(p.body, p.longitude(), p.position.speed_longitude))
        .collect();
    Ok(aspects_among(&points, orbs))
}

/// Aspects from each transiting planet at `jd_transit` to each natal point.
///
/// Natal points are held fixed, so only the transit speed decides whether
/// an aspect is applying. `body_a` is the transiting body.
pub fn transit_aspects(
    jd_transit: f64,
    natal: &[ChartPoint],
    orbs: &OrbConfig,
) -> Result<Vec<Aspect>, ChartError> {
    orbs.validate()?;
    validate_points(natal)?;
    debug!(jd_transit, natal = natal.len(), "transit_aspects");

    let transits = planet_points(jd_transit)?;
    let mut aspects = Vec::new();
    for t in &transits {
        for n in natal {
            let fixed = ChartPoint::fixed(n.body, normalize_360(n.longitude));
            aspects.extend(aspect_between(t, &fixed, orbs));
        }
    }
    Ok(aspects)
}

fn validate_points(points: &[ChartPoint]) -> Result<(), ChartError> {
    if points.is_empty() {
        return Err(ChartError::MalformedInput("natal point list is empty".into()));
    }
    let mut seen = BTreeSet::new();
    for p in points {
        if !p.longitude.is_finite() {
            return Err(ChartError::MalformedInput(format!(
                "{} longitude is not finite",
                p.body.key()
            )));
        }
        if !seen.insert(p.body) {
            return Err(ChartError::MalformedInput(format!(
                "duplicate natal body {}",
                p.body.key()
            )));
        }
    }
    Ok(())
}
