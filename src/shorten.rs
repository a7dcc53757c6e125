use crate::codec::constants::{
    CODE_PRECISION_NORMAL, LATITUDE_MAX, MIN_TRIMMABLE_CODE_LEN, PADDING_CHARACTER,
    PAIR_RESOLUTIONS, SEPARATOR, SEPARATOR_POSITION,
};
use crate::codec::{decode, encode, is_full, is_short};
use crate::coord::{clip_latitude, normalize_longitude};
use crate::error::{OlcError, check_finite};
use log::debug;

/// Removes leading digits from a full code, relative to a reference location.
///
/// The closer the reference is to the code's center, the more digit pairs can
/// go. A pair is only dropped when the reference lies within 0.3 of that
/// pair's resolution from the center, which leaves a safety margin under the
/// half-cell that recovery needs.
///
/// # Example
/// ```
/// use olc_rs::shorten;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// assert_eq!(shorten("9C3W9QCJ+2VX", 51.3701125, -1.217765625)?, "+2VX");
/// assert_eq!(shorten("8FVC9G8F+6X", 47.5, 8.5)?, "9G8F+6X");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`OlcError::NotFullCode`] - the code is not a valid full code
/// - [`OlcError::PaddedCode`] - the code contains padding
/// - [`OlcError::CodeTooShort`] - the code has fewer than 6 digits
/// - [`OlcError::NonFiniteCoordinate`] - the reference is NaN or infinite
pub fn shorten(code: &str, latitude: f64, longitude: f64) -> Result<String, OlcError> {
    if !is_full(code) {
        return Err(OlcError::NotFullCode(code.to_string()));
    }
    if code.contains(PADDING_CHARACTER) {
        return Err(OlcError::PaddedCode(code.to_string()));
    }

    let code = code.to_ascii_uppercase();
    let area = decode(&code)?;
    if area.code_length() < MIN_TRIMMABLE_CODE_LEN {
        return Err(OlcError::CodeTooShort {
            code,
            min: MIN_TRIMMABLE_CODE_LEN,
        });
    }

    check_finite(latitude, longitude)?;
    let latitude = clip_latitude(latitude);
    let longitude = normalize_longitude(longitude);

    let range = (area.latitude_center() - latitude)
        .abs()
        .max((area.longitude_center() - longitude).abs());

    for i in (1..PAIR_RESOLUTIONS.len() - 1).rev() {
        if range < PAIR_RESOLUTIONS[i] * 0.3 {
            let trimmed = code[(i + 1) * 2..].to_string();
            debug!("shortened {code} to {trimmed} (range {range})");
            return Ok(trimmed);
        }
    }

    debug!("{code} is too far from ({latitude}, {longitude}) to shorten");
    Ok(code)
}

/// Recovers the full code nearest to a reference location from a short code.
///
/// The missing leading digits are taken from the reference location. If that
/// puts the result more than half a cell away from the reference, the
/// neighbouring cell on the other side is chosen instead, keeping latitude
/// within -90 to 90. Full codes are returned upper-cased and unchanged.
///
/// # Example
/// ```
/// use olc_rs::recover_nearest;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let code = recover_nearest("9G8F+6X", 47.4, 8.6)?;
/// assert_eq!(code, "8FVC9G8F+6X");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`OlcError::InvalidShortCode`] - the code is neither full nor a valid short code
/// - [`OlcError::NonFiniteCoordinate`] - the reference is NaN or infinite
pub fn recover_nearest(
    short_code: &str,
    latitude: f64,
    longitude: f64,
) -> Result<String, OlcError> {
    if is_full(short_code) {
        return Ok(short_code.to_ascii_uppercase());
    }
    if !is_short(short_code) {
        return Err(OlcError::InvalidShortCode(short_code.to_string()));
    }

    check_finite(latitude, longitude)?;
    let reference_latitude = clip_latitude(latitude);
    let reference_longitude = normalize_longitude(longitude);

    let short_code = short_code.to_ascii_uppercase();
    let separator = short_code
        .find(SEPARATOR)
        .ok_or_else(|| OlcError::InvalidShortCode(short_code.clone()))?;
    let padding_length = SEPARATOR_POSITION - separator;
    // Height and width in degrees of the area the missing digits describe.
    let resolution = 20f64.powi(2 - (padding_length / 2) as i32);
    let half_resolution = resolution / 2.0;

    let prefix = encode(
        reference_latitude,
        reference_longitude,
        CODE_PRECISION_NORMAL,
    )?;
    let area = decode(&format!("{}{}", &prefix[..padding_length], short_code))?;

    let mut latitude_center = area.latitude_center();
    let mut longitude_center = area.longitude_center();
    let latitude_max = LATITUDE_MAX as f64;

    if reference_latitude + half_resolution < latitude_center
        && latitude_center - resolution >= -latitude_max
    {
        latitude_center -= resolution;
    } else if reference_latitude - half_resolution > latitude_center
        && latitude_center + resolution <= latitude_max
    {
        latitude_center += resolution;
    }

    if reference_longitude + half_resolution < longitude_center {
        longitude_center -= resolution;
    } else if reference_longitude - half_resolution > longitude_center {
        longitude_center += resolution;
    }

    let recovered = encode(latitude_center, longitude_center, area.code_length())?;
    debug!(
        "recovered {recovered} from {short_code} near ({reference_latitude}, {reference_longitude})"
    );
    Ok(recovered)
}
