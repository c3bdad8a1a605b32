//! Time conversions for the zodiac engine.
//!
//! This crate provides:
//! - Julian Day ⇄ civil calendar conversion (proleptic Gregorian and Julian)
//! - ΔT (TT − UT) from the Espenak–Meeus polynomials
//! - Earth rotation angle, mean and apparent sidereal time
//! - An `Epoch` type pairing a UT instant with its TT counterpart

pub mod delta_t;
pub mod julian;
pub mod sidereal;

pub use delta_t::{SECONDS_PER_DAY, delta_t_days, delta_t_seconds, ut_to_tt};
pub use julian::{
    Calendar, CalendarDate, DAYS_PER_CENTURY, J2000_JD, calendar_date, centuries_since_j2000,
    julian_day, weekday,
};
pub use sidereal::{
    armc_deg, earth_rotation_angle_deg, equation_of_equinoxes_deg, gast_deg, gmst_deg,
};

/// An instant given in UT, carrying its Terrestrial Time counterpart.
///
/// Public entry points accept UT; the analytical series run on TT.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Epoch {
    jd_ut: f64,
    jd_tt: f64,
}

impl Epoch {
    /// Create an epoch from a UT Julian Day.
    pub fn from_jd_ut(jd_ut: f64) -> Self {
        Self {
            jd_ut,
            jd_tt: ut_to_tt(jd_ut),
        }
    }

    /// Create an epoch from a civil UT date and decimal hour.
    pub fn from_calendar(year: i32, month: i32, day: i32, hour: f64, calendar: Calendar) -> Self {
        Self::from_jd_ut(julian_day(year, month, day, hour, calendar))
    }

    /// Julian Day in UT.
    pub fn jd_ut(self) -> f64 {
        self.jd_ut
    }

    /// Julian Day in TT.
    pub fn jd_tt(self) -> f64 {
        self.jd_tt
    }

    /// Julian centuries of TT since J2000.0.
    pub fn centuries_tt(self) -> f64 {
        centuries_since_j2000(self.jd_tt)
    }

    /// Shift by a number of days, keeping ΔT consistent.
    pub fn offset_days(self, days: f64) -> Self {
        Self::from_jd_ut(self.jd_ut + days)
    }
}
