//! Tropical zodiac signs.
//!
//! The ecliptic is divided into 12 equal signs of 30° starting from the
//! vernal equinox: Aries = [0, 30), Taurus = [30, 60), … Pisces = [330, 360).

use serde::{Deserialize, Serialize};
use zodiac_core::Body;

use crate::util::normalize_360;

/// The 12 tropical signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Lower-case key used in host records (`"aries"` .. `"pisces"`).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Aries => "aries",
            Self::Taurus => "taurus",
            Self::Gemini => "gemini",
            Self::Cancer => "cancer",
            Self::Leo => "leo",
            Self::Virgo => "virgo",
            Self::Libra => "libra",
            Self::Scorpio => "scorpio",
            Self::Sagittarius => "sagittarius",
            Self::Capricorn => "capricorn",
            Self::Aquarius => "aquarius",
            Self::Pisces => "pisces",
        }
    }

    /// Parse a lower-case key.
    pub fn from_key(key: &str) -> Option<Self> {
        ALL_SIGNS.iter().copied().find(|s| s.key() == key)
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sign at a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_SIGNS[(index % 12) as usize]
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }

    /// Longitude where the sign begins.
    pub const fn start_deg(self) -> f64 {
        self.index() as f64 * 30.0
    }

    /// Traditional (seven-planet) ruler.
    pub const fn ruler(self) -> Body {
        match self {
            Self::Aries | Self::Scorpio => Body::Mars,
            Self::Taurus | Self::Libra => Body::Venus,
            Self::Gemini | Self::Virgo => Body::Mercury,
            Self::Cancer => Body::Moon,
            Self::Leo => Body::Sun,
            Self::Sagittarius | Self::Pisces => Body::Jupiter,
            Self::Capricorn | Self::Aquarius => Body::Saturn,
        }
    }
}

/// A longitude expressed as sign plus degree within the sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignPosition {
    pub sign: ZodiacSign,
    /// Degrees into the sign, [0, 30).
    pub degree: f64,
}

/// Sign and degree-in-sign of an ecliptic longitude.
///
/// Any finite longitude is accepted and normalized first. A longitude on a
/// boundary belongs to the sign that begins there.
pub fn sign_of(longitude: f64) -> SignPosition {
    let lon = normalize_360(longitude);
    // Clamp in case of floating point edge just below 360
    let idx = ((lon / 30.0).floor() as u8).min(11);
    let degree = (lon - f64::from(idx) * 30.0).max(0.0);
    SignPosition {
        sign: ALL_SIGNS[idx as usize],
        degree,
    }
}
