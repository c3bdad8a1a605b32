//! Position records and calculation flags.

use std::ops::BitOr;

/// Apparent geocentric (or heliocentric) ecliptic position of date.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EclipticPosition {
    /// Longitude in degrees, [0, 360).
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Distance in AU (zero for the lunar nodes).
    pub distance: f64,
    /// deg/day; zero when speed was not requested.
    pub speed_longitude: f64,
    /// deg/day.
    pub speed_latitude: f64,
    /// AU/day.
    pub speed_distance: f64,
}

impl EclipticPosition {
    /// Position without speeds.
    pub fn new(longitude: f64, latitude: f64, distance: f64) -> Self {
        Self {
            longitude,
            latitude,
            distance,
            ..Self::default()
        }
    }

    /// Retrograde when longitude speed is negative.
    pub fn is_retrograde(&self) -> bool {
        self.speed_longitude < 0.0
    }
}

/// Calculation flag bit set (host-compatible values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CalcFlags(i32);

impl CalcFlags {
    pub const NONE: Self = Self(0);
    /// Also compute speeds.
    pub const SPEED: Self = Self(256);

    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> i32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn include_speed(self) -> bool {
        self.contains(Self::SPEED)
    }
}

impl BitOr for CalcFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
