//! Planetary hours.
//!
//! Hours are fixed clock hours counted from local midnight, not the
//! unequal hours between sunrise and sunset. Hour 0 belongs to the ruler
//! of the day; each following hour steps once through the Chaldean order.

use zodiac_core::Body;
use zodiac_time::{Calendar, julian_day, weekday};

use crate::error::ChartError;

/// Slowest to fastest, as seen from the Earth.
pub const CHALDEAN_ORDER: [Body; 7] = [
    Body::Saturn,
    Body::Jupiter,
    Body::Mars,
    Body::Sun,
    Body::Venus,
    Body::Mercury,
    Body::Moon,
];

/// Day rulers, Sunday first.
pub const DAY_RULERS: [Body; 7] = [
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Mercury,
    Body::Jupiter,
    Body::Venus,
    Body::Saturn,
];

/// Ruler of a weekday (0 = Sunday .. 6 = Saturday).
pub fn day_ruler(weekday: u32) -> Body {
    DAY_RULERS[(weekday % 7) as usize]
}

/// Ruler of clock hour `hour` (0-23) on a Gregorian date.
pub fn planetary_hour_ruler(year: i32, month: i32, day: i32, hour: u32) -> Result<Body, ChartError> {
    if hour >= 24 {
        return Err(ChartError::MalformedInput(format!(
            "hour must be in 0..24, got {hour}"
        )));
    }
    let jd = julian_day(year, month, day, 12.0, Calendar::Gregorian);
    let ruler = day_ruler(weekday(jd));
    let start = CHALDEAN_ORDER
        .iter()
        .position(|&b| b == ruler)
        .ok_or(ChartError::InvalidBody(ruler.code()))?;
    Ok(CHALDEAN_ORDER[(start + hour as usize) % 7])
}
