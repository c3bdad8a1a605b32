//! Chart layer of the zodiac engine.
//!
//! This crate provides:
//! - Tropical signs and sign placement
//! - Placidus house cusps and house placement
//! - Natal, quick and heliocentric chart assembly
//! - Moon phase, void-of-course Moon and planetary hours
//! - Aspect classification with configurable orbs
//!
//! Every function is a pure computation over the analytical ephemeris in
//! `zodiac_core`; nothing is cached.

pub mod aspect;
pub mod chart;
pub mod error;
pub mod hours;
pub mod houses;
pub mod lunar;
pub mod sign;
pub mod util;

pub use aspect::{
    ALL_ASPECTS, Aspect, AspectMatch, AspectType, ChartPoint, MAJOR_ASPECTS, OrbConfig,
    angular_separation, aspect_between, aspects_among, classify_aspect, mundane_aspects,
    natal_aspects, transit_aspects,
};
pub use chart::{
    HelioPlacement, HeliocentricChart, NatalChart, Placement, QuickChart, heliocentric_chart,
    natal_chart, quick_chart,
};
pub use error::ChartError;
pub use hours::{CHALDEAN_ORDER, DAY_RULERS, day_ruler, planetary_hour_ruler};
pub use houses::{
    CONVERGENCE_DEG, HouseConfig, HouseCusp, HouseCusps, MAX_ITERATIONS, house_cusps,
    house_cusps_with, house_of,
};
pub use lunar::{
    ALL_MOON_PHASES, MoonPhase, moon_phase, moon_phase_from_longitudes, void_of_course,
    void_of_course_moon, void_of_course_moon_with,
};
pub use sign::{ALL_SIGNS, SignPosition, ZodiacSign, sign_of};
pub use util::normalize_360;
