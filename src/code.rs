use crate::area::CodeArea;
use crate::codec::{decode, encode};
use crate::coord::Coordinate;
use crate::error::OlcError;
use crate::shorten::{recover_nearest, shorten};
use geo_types::{Point, Polygon};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A full Plus Code together with the area it decodes to.
///
/// The code is always held in canonical upper-case form.
///
/// # Example
///
/// ```
/// use olc_rs::PlusCode;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// // Create from WGS84 (lon/lat) coordinates
/// let code = PlusCode::from_wgs84(&(8.0000625, 47.0000625), 10)?;
/// assert_eq!(code.code(), "8FVC2222+22");
///
/// // Shorten it relative to somewhere nearby
/// let short = code.shorten(&(8.01, 47.01))?;
/// assert_eq!(short, "22+22");
///
/// // And get it back
/// let recovered = PlusCode::recover(&short, &(8.01, 47.01))?;
/// assert_eq!(recovered, code);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlusCode {
    code: String,
    area: CodeArea,
}

impl PlusCode {
    /// Create a PlusCode from WGS84 (lon/lat) coordinates
    ///
    /// # Example
    /// ```
    /// use olc_rs::PlusCode;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), olc_rs::OlcError> {
    /// // From tuple
    /// let code = PlusCode::from_wgs84(&(2.775, 20.375), 6)?;
    /// // From Point
    /// let code = PlusCode::from_wgs84(&Point::new(2.775, 20.375), 6)?;
    /// assert_eq!(code.to_string(), "7FG49Q00+");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84(coord: &impl Coordinate, code_length: usize) -> Result<Self, OlcError> {
        let code = encode(coord.y(), coord.x(), code_length)?;
        let area = decode(&code)?;
        Ok(Self { code, area })
    }

    /// Create a PlusCode from a full code string, in any case.
    pub fn from_code(code: &str) -> Result<Self, OlcError> {
        let area = decode(code)?;
        Ok(Self {
            code: code.to_ascii_uppercase(),
            area,
        })
    }

    /// Recover the full code nearest to `reference` from a short code.
    pub fn recover(short_code: &str, reference: &impl Coordinate) -> Result<Self, OlcError> {
        let code = recover_nearest(short_code, reference.y(), reference.x())?;
        Self::from_code(&code)
    }

    /// Shortens this code as far as it can be relative to `reference`.
    pub fn shorten(&self, reference: &impl Coordinate) -> Result<String, OlcError> {
        shorten(&self.code, reference.y(), reference.x())
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn area(&self) -> &CodeArea {
        &self.area
    }

    /// Number of significant digits, at most 15.
    pub fn code_length(&self) -> usize {
        self.area.code_length()
    }

    /// Returns the center of the cell (x = longitude, y = latitude).
    pub fn center(&self) -> Point<f64> {
        self.area.center()
    }

    /// Converts this cell to a rectangular polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.area.to_polygon()
    }
}

impl fmt::Display for PlusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for PlusCode {
    type Err = OlcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}
