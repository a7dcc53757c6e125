use crate::area::CodeArea;
use crate::codec::constants::{
    ENCODING_BASE, FINAL_LAT_PRECISION, FINAL_LNG_PRECISION, GRID_COLUMNS,
    GRID_LAT_FIRST_PLACE_VALUE, GRID_LNG_FIRST_PLACE_VALUE, GRID_ROWS, LATITUDE_MAX,
    LONGITUDE_MAX, MAX_DIGIT_COUNT, PADDING_CHARACTER, PAIR_CODE_LENGTH, PAIR_FIRST_PLACE_VALUE,
    PAIR_PRECISION, SEPARATOR,
};
use crate::codec::digit_value;
use crate::codec::validity::is_full;
use crate::error::OlcError;

/// Decodes a full Plus Code into the area it covers.
///
/// The pair and grid sections are accumulated separately as integers and only
/// converted to degrees at the end, so the bounds are as exact as `f64` allows.
/// Digits past the fifteenth are ignored.
///
/// # Example
/// ```
/// use olc_rs::decode;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let area = decode("7FG49Q00+")?;
/// assert_eq!(area.code_length(), 6);
/// assert!((area.latitude_lo() - 20.35).abs() < 1e-10);
/// assert!((area.longitude_hi() - 2.8).abs() < 1e-10);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`OlcError::NotFullCode`] - the input is short, malformed, or out of range.
///   Short codes must go through [`recover_nearest`](crate::recover_nearest) first.
pub fn decode(code: &str) -> Result<CodeArea, OlcError> {
    if !is_full(code) {
        return Err(OlcError::NotFullCode(code.to_string()));
    }

    let values = code
        .bytes()
        .filter(|&b| b != SEPARATOR as u8 && b != PADDING_CHARACTER as u8)
        .map(digit_value)
        .collect::<Option<Vec<u64>>>()
        .ok_or_else(|| OlcError::NotFullCode(code.to_string()))?;

    let mut normal_lat = -((LATITUDE_MAX * PAIR_PRECISION) as i64);
    let mut normal_lng = -((LONGITUDE_MAX * PAIR_PRECISION) as i64);
    let mut grid_lat: u64 = 0;
    let mut grid_lng: u64 = 0;

    let pair_digits = &values[..values.len().min(PAIR_CODE_LENGTH)];
    let pair_count = pair_digits.len() / 2;
    let mut place_value = PAIR_FIRST_PLACE_VALUE;
    for (i, pair) in pair_digits.chunks_exact(2).enumerate() {
        normal_lat += (pair[0] * place_value) as i64;
        normal_lng += (pair[1] * place_value) as i64;
        if i + 1 < pair_count {
            place_value /= ENCODING_BASE;
        }
    }
    let mut lat_precision = place_value as f64 / PAIR_PRECISION as f64;
    let mut lng_precision = place_value as f64 / PAIR_PRECISION as f64;

    if values.len() > PAIR_CODE_LENGTH {
        let grid_digits = &values[PAIR_CODE_LENGTH..values.len().min(MAX_DIGIT_COUNT)];
        let mut row_place_value = GRID_LAT_FIRST_PLACE_VALUE;
        let mut col_place_value = GRID_LNG_FIRST_PLACE_VALUE;
        for (k, &value) in grid_digits.iter().enumerate() {
            grid_lat += (value / GRID_COLUMNS) * row_place_value;
            grid_lng += (value % GRID_COLUMNS) * col_place_value;
            if k + 1 < grid_digits.len() {
                row_place_value /= GRID_ROWS;
                col_place_value /= GRID_COLUMNS;
            }
        }
        lat_precision = row_place_value as f64 / FINAL_LAT_PRECISION as f64;
        lng_precision = col_place_value as f64 / FINAL_LNG_PRECISION as f64;
    }

    let lat = normal_lat as f64 / PAIR_PRECISION as f64 + grid_lat as f64 / FINAL_LAT_PRECISION as f64;
    let lng = normal_lng as f64 / PAIR_PRECISION as f64 + grid_lng as f64 / FINAL_LNG_PRECISION as f64;

    Ok(CodeArea::new(
        lat,
        lng,
        lat + lat_precision,
        lng + lng_precision,
        values.len().min(MAX_DIGIT_COUNT),
    ))
}
