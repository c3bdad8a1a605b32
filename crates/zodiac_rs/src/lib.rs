//! Host-facing facade for the zodiac engine.
//!
//! Hosts address bodies by integer id, pass calendar and calculation flags
//! as integers and read back camelCase records. Every entry point is a pure
//! function; there is no engine handle to initialize.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use zodiac_rs::*;
//!
//! let jd = swe_julday(2000, 1, 1, 12.0, None);
//! let sun = swe_calc_ut(jd, SUN, Some(FLG_SPEED)).unwrap();
//! let houses = swe_houses(jd, 51.5074, -0.1278, Some('P')).unwrap();
//! println!("Sun {:.4}°, MC {:.4}°", sun.longitude, houses.mc);
//! ```

pub mod constants;
pub mod error;
pub mod host;
pub mod records;

pub use constants::*;
pub use error::{HostError, HostStatus};
pub use host::{
    basic_chart, heliocentric_chart, moon_phase_key, mundane_aspects, natal_aspects, natal_chart,
    planet_in_house, planetary_hour_ruler_key, planetary_positions, positions_by_key, sign_key,
    swe_calc_heliocentric_ut, swe_calc_ut, swe_calc_ut_all, swe_calc_ut_batch, swe_get_planet_name,
    swe_houses, swe_julday, swe_revjul, transit_aspects, transit_aspects_json, void_of_course_moon,
};
pub use records::{
    HostAspect, HostBasicChart, HostDate, HostHeliocentricChart, HostHouseCusp, HostHouses,
    HostNatalChart, HostNorthNode, HostOrbConfig, HostPlanetPosition, HostPosition,
};
