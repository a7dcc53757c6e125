use thiserror::Error;

/// Error type for olc-rs operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OlcError {
    /// A latitude or longitude was NaN or infinite.
    #[error("Coordinates are not finite numbers: ({latitude}, {longitude})")]
    NonFiniteCoordinate { latitude: f64, longitude: f64 },
    /// The requested code length is below 2, or odd and below 10.
    #[error("Invalid code length: {0}")]
    InvalidCodeLength(usize),
    /// The code is not a valid full code.
    #[error("Passed code is not a valid full code: {0}")]
    NotFullCode(String),
    /// The code is neither a valid short code nor a full code.
    #[error("Passed short code is not valid: {0}")]
    InvalidShortCode(String),
    /// Padded codes cannot be shortened.
    #[error("Cannot shorten padded codes: {0}")]
    PaddedCode(String),
    /// The code has too few digits to be shortened.
    #[error("Code length must be at least {min}: {code}")]
    CodeTooShort { code: String, min: usize },
}

pub(crate) fn check_finite(latitude: f64, longitude: f64) -> Result<(), OlcError> {
    if latitude.is_finite() && longitude.is_finite() {
        Ok(())
    } else {
        Err(OlcError::NonFiniteCoordinate {
            latitude,
            longitude,
        })
    }
}
