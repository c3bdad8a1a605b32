//! Body identifiers.
//!
//! The integer ids are the stable host-facing codes (0 = Sun .. 11 = True
//! Node). `Earth` only exists as a heliocentric target and uses id 14.

/// Bodies the position service can evaluate geocentrically.
///
/// Declaration order equals id order, so `Ord` sorts by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    MeanNode,
    TrueNode,
}

/// All bodies in id order.
pub const ALL_BODIES: [Body; 12] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::MeanNode,
    Body::TrueNode,
];

/// The default chart set: Sun through Pluto plus the true node.
pub const DEFAULT_BODIES: [Body; 11] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::TrueNode,
];

/// The ten planets (luminaries included), the set used for aspects.
pub const PLANETS: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    /// Stable integer id.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Convert an integer id into a [`Body`].
    pub const fn from_code(code: i32) -> Option<Self> {
        if code >= 0 && code < ALL_BODIES.len() as i32 {
            Some(ALL_BODIES[code as usize])
        } else {
            None
        }
    }

    /// All bodies in id order.
    pub const fn all() -> &'static [Body] {
        &ALL_BODIES
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::MeanNode => "Mean Node",
            Self::TrueNode => "True Node",
        }
    }

    /// Lower-case record key (`"sun"`, …, `"true_node"`).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
            Self::MeanNode => "mean_node",
            Self::TrueNode => "true_node",
        }
    }

    /// Inverse of [`Body::key`].
    pub fn from_key(key: &str) -> Option<Self> {
        ALL_BODIES.iter().copied().find(|b| b.key() == key)
    }

    /// True for the lunar nodes, which are computed points rather than bodies.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::MeanNode | Self::TrueNode)
    }
}

/// Display name for a raw id, falling back to `"Planet {id}"`.
pub fn body_name(code: i32) -> String {
    match (Body::from_code(code), HelioBody::from_code(code)) {
        (Some(body), _) => body.name().to_string(),
        (None, Some(helio)) => helio.name().to_string(),
        (None, None) => format!("Planet {code}"),
    }
}

/// Bodies with a heliocentric position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HelioBody {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// Host id of the Earth.
pub const EARTH_CODE: i32 = 14;

/// All heliocentric bodies in orbital order.
pub const ALL_HELIO_BODIES: [HelioBody; 9] = [
    HelioBody::Mercury,
    HelioBody::Venus,
    HelioBody::Earth,
    HelioBody::Mars,
    HelioBody::Jupiter,
    HelioBody::Saturn,
    HelioBody::Uranus,
    HelioBody::Neptune,
    HelioBody::Pluto,
];

impl HelioBody {
    /// Host id: the geocentric id for planets, 14 for the Earth.
    pub const fn code(self) -> i32 {
        match self {
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Earth => EARTH_CODE,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            2 => Some(Self::Mercury),
            3 => Some(Self::Venus),
            EARTH_CODE => Some(Self::Earth),
            4 => Some(Self::Mars),
            5 => Some(Self::Jupiter),
            6 => Some(Self::Saturn),
            7 => Some(Self::Uranus),
            8 => Some(Self::Neptune),
            9 => Some(Self::Pluto),
            _ => None,
        }
    }

    pub const fn all() -> &'static [HelioBody] {
        &ALL_HELIO_BODIES
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Earth => "Earth",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Earth => "earth",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for (i, body) in Body::all().iter().enumerate() {
            assert_eq!(body.code(), i as i32);
            assert_eq!(Body::from_code(i as i32), Some(*body));
        }
        assert_eq!(Body::from_code(12), None);
        assert_eq!(Body::from_code(-1), None);
        assert_eq!(Body::from_code(99), None);
    }

    #[test]
    fn keys_round_trip() {
        for body in Body::all() {
            assert_eq!(Body::from_key(body.key()), Some(*body));
        }
        assert_eq!(Body::from_key("chiron"), None);
    }

    #[test]
    fn ordering_follows_ids() {
        assert!(Body::Sun < Body::Moon);
        assert!(Body::Pluto < Body::TrueNode);
    }

    #[test]
    fn names_with_fallback() {
        assert_eq!(body_name(0), "Sun");
        assert_eq!(body_name(11), "True Node");
        assert_eq!(body_name(14), "Earth");
        assert_eq!(body_name(42), "Planet 42");
    }

    #[test]
    fn helio_codes_round_trip() {
        for helio in HelioBody::all() {
            assert_eq!(HelioBody::from_code(helio.code()), Some(*helio));
        }
        assert_eq!(HelioBody::from_code(0), None);
        assert_eq!(HelioBody::from_code(1), None);
    }

    #[test]
    fn default_set_has_no_mean_node() {
        assert_eq!(DEFAULT_BODIES.len(), 11);
        assert!(!DEFAULT_BODIES.contains(&Body::MeanNode));
        assert!(PLANETS.iter().all(|b| !b.is_node()));
    }
}
