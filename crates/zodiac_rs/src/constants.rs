//! Host-compatible integer constants.
//!
//! Body ids, the heliocentric Earth id, calendar flags and the speed flag
//! keep the values hosts already use.

pub const SUN: i32 = 0;
pub const MOON: i32 = 1;
pub const MERCURY: i32 = 2;
pub const VENUS: i32 = 3;
pub const MARS: i32 = 4;
pub const JUPITER: i32 = 5;
pub const SATURN: i32 = 6;
pub const URANUS: i32 = 7;
pub const NEPTUNE: i32 = 8;
pub const PLUTO: i32 = 9;
pub const MEAN_NODE: i32 = 10;
pub const TRUE_NODE: i32 = 11;
/// Heliocentric queries only.
pub const EARTH: i32 = 14;

pub const JUL_CAL: i32 = 0;
pub const GREG_CAL: i32 = 1;

/// Request speeds in position queries.
pub const FLG_SPEED: i32 = 256;
