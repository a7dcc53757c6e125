use crate::codec::constants::{LATITUDE_MAX, LONGITUDE_MAX};
use geo_types::Point;

/// Trait for types that can provide longitude/latitude coordinates.
///
/// Implemented for `(f64, f64)` tuples, read as `(longitude, latitude)`, and
/// `geo_types::Point<f64>`. This allows functions to accept either type.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

/// Clips a latitude into the range -90 to 90.
pub fn clip_latitude(latitude: f64) -> f64 {
    latitude.clamp(-(LATITUDE_MAX as f64), LATITUDE_MAX as f64)
}

/// Normalizes a longitude into the range -180 to 180, not including 180.
pub fn normalize_longitude(longitude: f64) -> f64 {
    let circle = 2.0 * LONGITUDE_MAX as f64;
    (((longitude + LONGITUDE_MAX as f64) % circle + circle) % circle) - LONGITUDE_MAX as f64
}
