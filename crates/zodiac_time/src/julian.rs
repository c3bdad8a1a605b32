//! Julian Day ⇄ civil calendar conversion.
//!
//! Supports the proleptic Gregorian and Julian calendars. The day count is
//! the classic Fliegel/Van Flandern style integer algorithm evaluated in
//! floating point, so negative (BC, astronomical numbering) years work on
//! both calendars.

use std::fmt::{Display, Formatter};

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Calendar used to interpret civil dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Calendar {
    /// Proleptic Julian calendar (host flag 0).
    Julian,
    /// Proleptic Gregorian calendar (host flag 1).
    #[default]
    Gregorian,
}

impl Calendar {
    /// Host flag value: 1 = Gregorian, 0 = Julian.
    pub const fn flag(self) -> i32 {
        match self {
            Self::Julian => 0,
            Self::Gregorian => 1,
        }
    }

    /// Interpret a host calendar flag. Only `1` selects Gregorian.
    pub const fn from_flag(flag: i32) -> Self {
        if flag == 1 {
            Self::Gregorian
        } else {
            Self::Julian
        }
    }
}

/// Civil date with a fractional hour, as returned by [`calendar_date`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Decimal hour in [0, 24).
    pub hour: f64,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32, hour: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Julian Day of this date on the given calendar.
    pub fn to_jd(&self, calendar: Calendar) -> f64 {
        julian_day(
            self.year,
            self.month as i32,
            self.day as i32,
            self.hour,
            calendar,
        )
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let total_seconds = (self.hour * 3600.0).max(0.0);
        let h = (total_seconds / 3600.0).floor() as u32;
        let m = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let s = total_seconds % 60.0;
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3} UT",
            self.year, self.month, self.day, h, m, s
        )
    }
}

/// Convert a civil date and decimal hour to a Julian Day.
///
/// Out-of-range fields are carried by ordinary calendar arithmetic:
/// month 13 is January of the next year, day 32 spills into the next
/// month, hour 30 is 06:00 of the next day.
pub fn julian_day(year: i32, month: i32, day: i32, hour: f64, calendar: Calendar) -> f64 {
    // Fold the month into 1..=12 first; the day count below is only
    // linear in the month inside that range.
    let year = year + (month - 1).div_euclid(12);
    let month = (month - 1).rem_euclid(12) + 1;

    let mut u = year as f64;
    if month < 3 {
        u -= 1.0;
    }
    let u0 = u + 4712.0;
    let mut u1 = month as f64 + 1.0;
    if u1 < 4.0 {
        u1 += 12.0;
    }

    let mut jd = (u0 * 365.25).floor() + (30.6 * u1 + 0.000_001).floor() + day as f64
        + hour / 24.0
        - 63.5;

    if calendar == Calendar::Gregorian {
        let mut u2 = (u.abs() / 100.0).floor() - (u.abs() / 400.0).floor();
        if u < 0.0 {
            u2 = -u2;
        }
        jd = jd - u2 + 2.0;
        if u < 0.0 && (u / 100.0).fract() == 0.0 && (u / 400.0).fract() != 0.0 {
            jd -= 1.0;
        }
    }

    jd
}

/// Convert a Julian Day back to a civil date on the given calendar.
pub fn calendar_date(jd: f64, calendar: Calendar) -> CalendarDate {
    let mut u0 = jd + 32_082.5;

    if calendar == Calendar::Gregorian {
        let mut u1 = u0 + (u0 / 36_525.0).floor() - (u0 / 146_100.0).floor() - 38.0;
        if jd >= 1_830_691.5 {
            u1 += 1.0;
        }
        u0 = u0 + (u1 / 36_525.0).floor() - (u1 / 146_100.0).floor() - 38.0;
    }

    let u2 = (u0 + 123.0).floor();
    let u3 = ((u2 - 122.2) / 365.25).floor();
    let u4 = ((u2 - (365.25 * u3).floor()) / 30.6001).floor();

    let mut month = (u4 - 1.0) as i32;
    if month > 12 {
        month -= 12;
    }
    let day = (u2 - (365.25 * u3).floor() - (30.6001 * u4).floor()) as i32;
    let year = (u3 + ((u4 - 2.0) / 12.0).floor() - 4800.0) as i32;
    let hour = (jd - (jd + 0.5).floor() + 0.5) * 24.0;

    CalendarDate {
        year,
        month: month as u32,
        day: day as u32,
        hour,
    }
}

/// Julian centuries elapsed since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Day of week for a Julian Day: 0 = Sunday .. 6 = Saturday.
///
/// The civil day is taken to begin at midnight.
pub fn weekday(jd: f64) -> u32 {
    (jd + 1.5).floor().rem_euclid(7.0) as u32
}
