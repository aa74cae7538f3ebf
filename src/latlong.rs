//! Points on the Earth's surface.
//!
//! A [`Latlong`] is used two ways: as a point on a sphere (haversine
//! distance, forward azimuth, destination projection), and as a planar
//! `(x = longitude, y = latitude)` point for the line and box math.
//! Formulas follow <http://www.movable-type.co.uk/scripts/latlong.html>.

use std::fmt;

use crate::error::GeoError;

/// Mean Earth radius used by the spherical formulas.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Nautical miles in one kilometre.
pub const NM_PER_KM: f64 = 0.539_957;
/// Feet in one kilometre.
pub const FEET_PER_KM: f64 = 3280.8399;

/// Tolerance for [`Latlong`] equality, in degrees.
pub const LATLONG_EPSILON: f64 = 0.000_000_1;

/// Converts nautical miles to kilometres.
pub fn nm_to_km(nm: f64) -> f64 {
    nm / NM_PER_KM
}

/// A latitude/longitude pair, in degrees.
///
/// No bounds are enforced; values produced by line intersection can land
/// well outside ±90/±180.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct Latlong {
    /// Latitude (planar y).
    pub lat: f64,
    /// Longitude (planar x).
    pub long: f64,
}

impl PartialEq for Latlong {
    /// Equal when both coordinates agree within [`LATLONG_EPSILON`].
    fn eq(&self, other: &Self) -> bool {
        float_equals(self.lat, other.lat) && float_equals(self.long, other.long)
    }
}

fn float_equals(a: f64, b: f64) -> bool {
    (a - b) < LATLONG_EPSILON && (b - a) < LATLONG_EPSILON
}

impl fmt::Display for Latlong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4},{:.4})", self.lat, self.long)
    }
}

impl Latlong {
    /// Creates a point from latitude and longitude.
    pub const fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }

    /// Like [`Latlong::new`], but rejects NaN and infinite coordinates.
    ///
    /// # Errors
    /// [`GeoError::NonFiniteCoordinate`] if either coordinate is not finite.
    pub fn try_new(lat: f64, long: f64) -> Result<Self, GeoError> {
        let value = Self::new(lat, long);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(GeoError::NonFiniteCoordinate { value })
        }
    }

    #[inline]
    pub(crate) fn x(self) -> f64 {
        self.long
    }

    #[inline]
    pub(crate) fn y(self) -> f64 {
        self.lat
    }

    /// True when both coordinates are finite.
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.long.is_finite()
    }

    /// True for the "unset" point near (0,0).
    pub fn is_nil(self) -> bool {
        self.lat.abs() < 0.01 && self.long.abs() < 0.01
    }

    /// Bit-for-bit equality, without the epsilon used by `==`.
    pub fn exactly_equal(self, other: Self) -> bool {
        self.lat == other.lat && self.long == other.long
    }

    /// Squared planar distance in degrees; cheap, for picking the nearest point.
    pub fn latlong_dist_sq(self, to: Self) -> f64 {
        let x = to.long - self.long;
        let y = to.lat - self.lat;
        x * x + y * y
    }

    /// Planar distance in degrees. Only meaningful over small areas.
    pub fn latlong_dist(self, to: Self) -> f64 {
        self.latlong_dist_sq(to).sqrt()
    }

    /// Great-circle distance in kilometres.
    pub fn dist_km(self, to: Self) -> f64 {
        haversine(self, to)
    }

    /// Great-circle distance in nautical miles.
    pub fn dist_nm(self, to: Self) -> f64 {
        self.dist_km(to) * NM_PER_KM
    }

    /// Slant distance in kilometres to a point `altitude_ft` above `to`.
    pub fn dist3_km(self, to: Self, altitude_ft: f64) -> f64 {
        let horiz = self.dist_km(to);
        let vert = altitude_ft / FEET_PER_KM;
        (horiz * horiz + vert * vert).sqrt()
    }

    /// Initial great-circle bearing towards `to`, in degrees within `[0,360)`.
    pub fn bearing_towards(self, to: Self) -> f64 {
        forward_azimuth(self, to)
    }

    /// The point reached by travelling `distance_km` on the given heading.
    pub fn move_km(self, heading: f64, distance_km: f64) -> Self {
        destination(self, heading, distance_km)
    }

    /// The point reached by travelling `distance_nm` on the given heading.
    pub fn move_nm(self, heading: f64, distance_nm: f64) -> Self {
        self.move_km(heading, nm_to_km(distance_nm))
    }

    /// Linear interpolation towards `to`; `ratio` 0 gives `self`, 1 gives `to`.
    pub fn interpolate_to(self, to: Self, ratio: f64) -> Self {
        let lerp = |from: f64, to: f64| from + (to - from) * ratio;
        Self::new(lerp(self.lat, to.lat), lerp(self.long, to.long))
    }
}

fn haversine(from: Latlong, to: Latlong) -> f64 {
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_long = (to.long - from.long).to_radians();
    let a = (delta_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (delta_long / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

fn forward_azimuth(from: Latlong, to: Latlong) -> f64 {
    let (lat1, long1) = (from.lat.to_radians(), from.long.to_radians());
    let (lat2, long2) = (to.lat.to_radians(), to.long.to_radians());

    let y = (long2 - long1).sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * (long2 - long1).cos();

    let bearing = y.atan2(x).to_degrees();
    (bearing + 360.0) % 360.0
}

fn destination(from: Latlong, heading: f64, distance_km: f64) -> Latlong {
    let angular = distance_km / EARTH_RADIUS_KM;
    let theta = heading.to_radians();
    let (lat1, long1) = (from.lat.to_radians(), from.long.to_radians());

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * theta.cos()).asin();
    let long2 = long1
        + (theta.sin() * angular.sin() * lat1.cos()).atan2(angular.cos() - lat1.sin() * lat2.sin());

    Latlong::new(lat2.to_degrees(), long2.to_degrees())
}

/// A point that carries a name, typically a waypoint or fix.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NamedLatlong {
    /// Name of the point; may be empty.
    pub name: String,
    /// Where it is.
    pub pos: Latlong,
}

impl NamedLatlong {
    /// Creates a named point.
    pub fn new(name: impl Into<String>, pos: Latlong) -> Self {
        Self {
            name: name.into(),
            pos,
        }
    }

    /// The name if there is one, otherwise the coordinates.
    pub fn short_string(&self) -> String {
        if self.name.is_empty() {
            self.pos.to_string()
        } else {
            self.name.clone()
        }
    }

    /// Unnamed and sitting on the nil point.
    pub fn is_nil(&self) -> bool {
        self.name.is_empty() && self.pos.is_nil()
    }
}

impl fmt::Display for NamedLatlong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.pos, self.name)
    }
}
