mod common;

use common::EncodingCase;
use olc_rs::{OlcError, encode, encode_integers, location_to_integers};

#[test]
fn test_location_to_integers_fixtures() {
    for case in common::load::<EncodingCase>("encoding.csv") {
        assert_eq!(
            location_to_integers(case.latitude, case.longitude),
            (case.latitude_int, case.longitude_int),
            "({}, {})",
            case.latitude,
            case.longitude
        );
    }
}

#[test]
fn test_encode_integers_fixtures() -> Result<(), OlcError> {
    for case in common::load::<EncodingCase>("encoding.csv") {
        let code = encode_integers(case.latitude_int, case.longitude_int, case.length)?;
        assert_eq!(code, case.code, "({}, {})", case.latitude_int, case.longitude_int);
    }
    Ok(())
}

#[test]
fn test_encode_fixtures() -> Result<(), OlcError> {
    for case in common::load::<EncodingCase>("encoding.csv") {
        let code = encode(case.latitude, case.longitude, case.length)?;
        assert_eq!(
            code, case.code,
            "({}, {}) at {}",
            case.latitude, case.longitude, case.length
        );
    }
    Ok(())
}

#[test]
fn test_encode_rejects_bad_lengths() {
    for length in [0, 1, 3, 5, 7, 9] {
        assert_eq!(
            encode(47.0, 8.0, length),
            Err(OlcError::InvalidCodeLength(length))
        );
    }
}
