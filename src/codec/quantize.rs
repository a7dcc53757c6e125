use crate::codec::constants::{
    FINAL_LAT_PRECISION, FINAL_LNG_PRECISION, LATITUDE_MAX, LONGITUDE_MAX,
};

/// Converts a latitude/longitude location into non-negative integer cell counts.
///
/// Latitude is clamped into `0 <= lat < 180 * FINAL_LAT_PRECISION`, so 90 degrees
/// lands one unit below the top edge and still decodes. Longitude wraps into
/// `0 <= lng < 360 * FINAL_LNG_PRECISION`.
///
/// The arithmetic is done on whole-valued `f64`s, which are exact well past
/// the ranges involved here, so the result is bit-identical to other
/// implementations of the format.
///
/// # Example
/// ```
/// use olc_rs::location_to_integers;
///
/// let (lat, lng) = location_to_integers(47.0000625, 8.0000625);
/// assert_eq!((lat, lng), (3425001562, 1540096512));
/// ```
pub fn location_to_integers(latitude: f64, longitude: f64) -> (u64, u64) {
    let lat_range = 2 * LATITUDE_MAX * FINAL_LAT_PRECISION;
    let mut lat_val = (latitude * FINAL_LAT_PRECISION as f64).floor();
    lat_val += (LATITUDE_MAX * FINAL_LAT_PRECISION) as f64;
    let lat_int = if lat_val < 0.0 {
        0
    } else if lat_val >= lat_range as f64 {
        lat_range - 1
    } else {
        lat_val as u64
    };

    let lng_range = (2 * LONGITUDE_MAX * FINAL_LNG_PRECISION) as f64;
    let mut lng_val = (longitude * FINAL_LNG_PRECISION as f64).floor();
    lng_val += (LONGITUDE_MAX * FINAL_LNG_PRECISION) as f64;
    let lng_int = lng_val.rem_euclid(lng_range) as u64;

    (lat_int, lng_int)
}
