//! Geographic coordinates and great-circle distance.

use super::DomainError;

/// Mean Earth radius used for all geographic lengths, in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A point on the Earth's surface, stored in radians.
///
/// # Examples
///
/// ```
/// use transit_router::domain::{Coordinates, distance};
///
/// let a = Coordinates::from_degrees(55.611087, 37.20829).unwrap();
/// let b = Coordinates::from_degrees(55.595884, 37.209755).unwrap();
/// assert!((distance(&a, &b) - 1693.0).abs() < 0.01);
///
/// // Out-of-range latitude is rejected
/// assert!(Coordinates::from_degrees(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    lat: f64,
    lon: f64,
}

impl Coordinates {
    /// Creates coordinates from a latitude and longitude in degrees.
    ///
    /// Latitude must lie in [-90, 90] and longitude in [-180, 180].
    pub fn from_degrees(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }

        Ok(Self {
            lat: latitude.to_radians(),
            lon: longitude.to_radians(),
        })
    }

    /// Latitude in radians.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in radians.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// Great-circle distance between two points in meters.
///
/// Uses the spherical law of cosines on a sphere of radius
/// [`EARTH_RADIUS_M`].
pub fn distance(from: &Coordinates, to: &Coordinates) -> f64 {
    let cos_angle = from.lat.sin() * to.lat.sin()
        + from.lat.cos() * to.lat.cos() * (from.lon - to.lon).abs().cos();

    // Rounding can push identical points just past 1.0
    cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_M
}
