use crate::area::CodeArea;
use crate::code::PlusCode;
use crate::codec::decode;
use crate::coord::Coordinate;
use crate::error::OlcError;
use geo_types::Polygon;
use log::trace;
use rayon::prelude::*;

/// Trait for encoding collections of coordinates in parallel.
///
/// Implemented for slices (and so `Vec`s) of any [`Coordinate`].
pub trait CoordinatesToPlusCodes {
    /// Encodes every coordinate at `code_length`, keeping input order.
    ///
    /// Fails on the first coordinate that cannot be encoded.
    fn to_plus_codes(&self, code_length: usize) -> Result<Vec<PlusCode>, OlcError>;
}

impl<C: Coordinate + Sync> CoordinatesToPlusCodes for [C] {
    fn to_plus_codes(&self, code_length: usize) -> Result<Vec<PlusCode>, OlcError> {
        trace!("encoding {} coordinates at length {code_length}", self.len());
        self.par_iter()
            .map(|coord| PlusCode::from_wgs84(coord, code_length))
            .collect()
    }
}

/// Trait for converting collections of [`PlusCode`]s to geometries.
pub trait PlusCodesToPolygons {
    /// Converts each code's cell to a polygon, keeping input order.
    fn to_polygons(&self) -> Vec<Polygon<f64>>;
}

impl PlusCodesToPolygons for [PlusCode] {
    fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.par_iter().map(|code| code.to_polygon()).collect()
    }
}

/// Decodes many codes in parallel, one result per input.
///
/// # Example
/// ```
/// use olc_rs::decode_all;
///
/// let results = decode_all(&["8FVC2222+22", "2222+22"]);
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// ```
pub fn decode_all<S: AsRef<str> + Sync>(codes: &[S]) -> Vec<Result<CodeArea, OlcError>> {
    trace!("decoding {} codes", codes.len());
    codes.par_iter().map(|code| decode(code.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::Point;

    #[test]
    fn test_to_plus_codes_keeps_order() -> Result<(), OlcError> {
        let coords = vec![
            (8.0000625, 47.0000625),
            (174.7859375, -41.2730625),
            (2.7821875, 20.3700625),
        ];
        let codes = coords.to_plus_codes(10)?;

        let ids: Vec<&str> = codes.iter().map(|c| c.code()).collect();
        assert_eq!(ids, vec!["8FVC2222+22", "4VCPPQGP+Q9", "7FG49QCJ+2V"]);
        Ok(())
    }

    #[test]
    fn test_to_plus_codes_with_points() -> Result<(), OlcError> {
        let points = vec![Point::new(8.0000625, 47.0000625), Point::new(1.0, 1.0)];
        let codes = points.to_plus_codes(11)?;
        assert_eq!(codes.len(), 2);
        assert_eq!(codes[1].code(), "6FH32222+222");
        Ok(())
    }

    #[test]
    fn test_to_plus_codes_fails_wholesale() {
        let coords = vec![(8.0, 47.0), (f64::NAN, 1.0)];
        assert!(coords.to_plus_codes(10).is_err());
        assert!(coords.to_plus_codes(7).is_err());
    }

    #[test]
    fn test_to_polygons() -> Result<(), OlcError> {
        let codes = vec![(8.0, 47.0), (9.0, 48.0)].to_plus_codes(4)?;
        let polygons = codes.to_polygons();

        assert_eq!(polygons.len(), 2);
        for polygon in &polygons {
            assert_eq!(polygon.exterior().coords().count(), 5);
        }
        Ok(())
    }

    #[test]
    fn test_decode_all() {
        let codes = vec!["7FG49Q00+".to_string(), "nonsense".to_string()];
        let results = decode_all(&codes);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().map(|a| a.code_length()), Ok(6));
        assert_eq!(
            results[1],
            Err(OlcError::NotFullCode("nonsense".to_string()))
        );
    }
}
