use crate::codec::constants::{LATITUDE_MAX, LONGITUDE_MAX};
use crate::coord::Coordinate;
use crate::geom::{polygon_to_geojson, polygon_to_wkt};
use geo::Intersects;
use geo_types::{Point, Polygon, Rect, coord};
use serde::Serialize;

/// The area covered by a decoded Plus Code.
///
/// Holds the south-west and north-east corners of the cell in degrees and the
/// number of significant digits that were decoded. Only produced by
/// [`decode`](crate::decode).
///
/// # Example
///
/// ```
/// use olc_rs::decode;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let area = decode("8FVC2222+22")?;
/// println!("Center: ({}, {})", area.latitude_center(), area.longitude_center());
///
/// // The cell as a rectangle polygon for GIS work
/// let polygon = area.to_polygon();
/// assert_eq!(polygon.exterior().coords().count(), 5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CodeArea {
    latitude_lo: f64,
    longitude_lo: f64,
    latitude_hi: f64,
    longitude_hi: f64,
    code_length: usize,
}

impl CodeArea {
    pub(crate) fn new(
        latitude_lo: f64,
        longitude_lo: f64,
        latitude_hi: f64,
        longitude_hi: f64,
        code_length: usize,
    ) -> Self {
        Self {
            latitude_lo,
            longitude_lo,
            latitude_hi,
            longitude_hi,
            code_length,
        }
    }

    /// Latitude of the south-west corner in degrees.
    pub fn latitude_lo(&self) -> f64 {
        self.latitude_lo
    }

    /// Longitude of the south-west corner in degrees.
    pub fn longitude_lo(&self) -> f64 {
        self.longitude_lo
    }

    /// Latitude of the north-east corner in degrees.
    pub fn latitude_hi(&self) -> f64 {
        self.latitude_hi
    }

    /// Longitude of the north-east corner in degrees.
    pub fn longitude_hi(&self) -> f64 {
        self.longitude_hi
    }

    /// Number of significant digits decoded, at most 15.
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// Latitude of the center, never above 90.
    pub fn latitude_center(&self) -> f64 {
        (self.latitude_lo + (self.latitude_hi - self.latitude_lo) / 2.0).min(LATITUDE_MAX as f64)
    }

    /// Longitude of the center, never above 180.
    pub fn longitude_center(&self) -> f64 {
        (self.longitude_lo + (self.longitude_hi - self.longitude_lo) / 2.0)
            .min(LONGITUDE_MAX as f64)
    }

    /// Returns the center as a point (x = longitude, y = latitude).
    pub fn center(&self) -> Point<f64> {
        Point::new(self.longitude_center(), self.latitude_center())
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.longitude_lo, y: self.latitude_lo },
            coord! { x: self.longitude_hi, y: self.latitude_hi },
        )
    }

    /// Converts this area to a rectangular polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }

    /// Whether the location falls inside the area, edges included.
    pub fn contains(&self, location: &impl Coordinate) -> bool {
        self.to_rect()
            .intersects(&coord! { x: location.x(), y: location.y() })
    }

    /// Returns the area as a WKT polygon string.
    pub fn to_wkt(&self) -> String {
        polygon_to_wkt(&self.to_polygon())
    }

    /// Returns the area as a GeoJSON geometry string.
    pub fn to_geojson(&self) -> String {
        polygon_to_geojson(&self.to_polygon())
    }
}
