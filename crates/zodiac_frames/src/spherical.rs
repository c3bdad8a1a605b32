//! Ecliptic spherical coordinates and their rectangular form.

/// Longitude and latitude in degrees, radius in the vector's unit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spherical {
    /// [0, 360), counted from +x toward +y.
    pub lon: f64,
    /// [-90, 90].
    pub lat: f64,
    pub radius: f64,
}

impl Spherical {
    pub fn new(lon: f64, lat: f64, radius: f64) -> Self {
        Self { lon, lat, radius }
    }

    /// Spherical form of `[x, y, z]`; the origin maps to all zeros.
    pub fn from_cartesian([x, y, z]: [f64; 3]) -> Self {
        let radius = x.hypot(y).hypot(z);
        if radius == 0.0 {
            return Self::default();
        }
        Self {
            lon: y.atan2(x).to_degrees().rem_euclid(360.0),
            lat: (z / radius).clamp(-1.0, 1.0).asin().to_degrees(),
            radius,
        }
    }

    pub fn to_cartesian(self) -> [f64; 3] {
        let (sl, cl) = self.lon.to_radians().sin_cos();
        let (sb, cb) = self.lat.to_radians().sin_cos();
        let rho = self.radius * cb;
        [rho * cl, rho * sl, self.radius * sb]
    }
}
