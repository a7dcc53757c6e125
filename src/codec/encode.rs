use crate::codec::constants::{
    ALPHABET_BYTES, CODE_PRECISION_NORMAL, ENCODING_BASE, GRID_CODE_LENGTH, GRID_COLUMNS,
    GRID_ROWS, MAX_DIGIT_COUNT, MIN_DIGIT_COUNT, PADDING_CHARACTER, PAIR_CODE_LENGTH, SEPARATOR,
    SEPARATOR_POSITION,
};
use crate::codec::quantize::location_to_integers;
use crate::error::{OlcError, check_finite};

/// Encodes a location into a Plus Code.
///
/// Latitude is clipped to the range -90 to 90 and longitude is wrapped into
/// -180 to 180. `code_length` counts significant digits (not the separator or
/// padding) and is capped at 15. Use [`CODE_PRECISION_NORMAL`] for ~14m cells
/// or [`CODE_PRECISION_EXTRA`](crate::CODE_PRECISION_EXTRA) for ~3m cells.
///
/// # Example
/// ```
/// use olc_rs::{encode, CODE_PRECISION_NORMAL};
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let code = encode(47.0000625, 8.0000625, CODE_PRECISION_NORMAL)?;
/// assert_eq!(code, "8FVC2222+22");
///
/// let padded = encode(20.375, 2.775, 6)?;
/// assert_eq!(padded, "7FG49Q00+");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`OlcError::NonFiniteCoordinate`] - latitude or longitude is NaN or infinite
/// - [`OlcError::InvalidCodeLength`] - length below 2, or odd and below 10
pub fn encode(latitude: f64, longitude: f64, code_length: usize) -> Result<String, OlcError> {
    check_finite(latitude, longitude)?;
    let (lat_int, lng_int) = location_to_integers(latitude, longitude);
    encode_integers(lat_int, lng_int, code_length)
}

/// Encodes a location at [`CODE_PRECISION_NORMAL`].
pub fn encode_default(latitude: f64, longitude: f64) -> Result<String, OlcError> {
    encode(latitude, longitude, CODE_PRECISION_NORMAL)
}

/// Encodes an already quantized location (see [`location_to_integers`]).
///
/// # Process
///
/// 1. Grid digits (positions 11-15) are peeled off the least significant end,
///    or the unused grid resolution is divided away for short lengths
/// 2. The pair straight after the separator is emitted
/// 3. The remaining four pairs are emitted from position 7 back to 0
/// 4. The requested prefix is returned, padded out to the separator if shorter than 8
pub fn encode_integers(
    lat_int: u64,
    lng_int: u64,
    code_length: usize,
) -> Result<String, OlcError> {
    let code_length = code_length.min(MAX_DIGIT_COUNT);
    if code_length < MIN_DIGIT_COUNT || (code_length < PAIR_CODE_LENGTH && code_length % 2 == 1) {
        return Err(OlcError::InvalidCodeLength(code_length));
    }

    let mut lat = lat_int;
    let mut lng = lng_int;
    let mut code = [0u8; MAX_DIGIT_COUNT + 1];
    code[SEPARATOR_POSITION] = SEPARATOR as u8;

    if code_length > PAIR_CODE_LENGTH {
        for i in (1..=GRID_CODE_LENGTH).rev() {
            let lat_digit = lat % GRID_ROWS;
            let lng_digit = lng % GRID_COLUMNS;
            code[SEPARATOR_POSITION + 2 + i] =
                ALPHABET_BYTES[(lat_digit * GRID_COLUMNS + lng_digit) as usize];
            lat /= GRID_ROWS;
            lng /= GRID_COLUMNS;
        }
    } else {
        lat /= GRID_ROWS.pow(GRID_CODE_LENGTH as u32);
        lng /= GRID_COLUMNS.pow(GRID_CODE_LENGTH as u32);
    }

    code[SEPARATOR_POSITION + 1] = ALPHABET_BYTES[(lat % ENCODING_BASE) as usize];
    code[SEPARATOR_POSITION + 2] = ALPHABET_BYTES[(lng % ENCODING_BASE) as usize];
    lat /= ENCODING_BASE;
    lng /= ENCODING_BASE;

    for j in (0..SEPARATOR_POSITION).step_by(2).rev() {
        code[j] = ALPHABET_BYTES[(lat % ENCODING_BASE) as usize];
        code[j + 1] = ALPHABET_BYTES[(lng % ENCODING_BASE) as usize];
        lat /= ENCODING_BASE;
        lng /= ENCODING_BASE;
    }

    if code_length >= SEPARATOR_POSITION {
        return Ok(code[..=code_length].iter().map(|&b| b as char).collect());
    }

    let mut padded: String = code[..code_length].iter().map(|&b| b as char).collect();
    padded.extend(std::iter::repeat_n(
        PADDING_CHARACTER,
        SEPARATOR_POSITION - code_length,
    ));
    padded.push(SEPARATOR);
    Ok(padded)
}
