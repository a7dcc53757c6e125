use crate::codec::constants::{
    ENCODING_BASE, LATITUDE_MAX, LONGITUDE_MAX, PADDING_CHARACTER, SEPARATOR, SEPARATOR_POSITION,
};
use crate::codec::digit_value;

/// Determines if a string is a valid Plus Code, full or short.
///
/// All characters must come from the code alphabet (in either case), with
/// exactly one separator at an even position no later than the eighth. A
/// single run of an even number of padding characters may sit directly
/// before a separator at position eight, which must then end the code.
///
/// # Example
/// ```
/// use olc_rs::is_valid;
///
/// assert!(is_valid("8FWC2345+G6"));
/// assert!(is_valid("8FWCX400+"));
/// assert!(is_valid("+G6"));
/// assert!(!is_valid("8FWC2345+G6+"));
/// assert!(!is_valid("8FWC2300+G6"));
/// ```
pub fn is_valid(code: &str) -> bool {
    if code.is_empty() || !code.is_ascii() {
        return false;
    }

    let Some(separator) = code.find(SEPARATOR) else {
        return false;
    };
    if code.rfind(SEPARATOR) != Some(separator)
        || code.len() == 1
        || separator > SEPARATOR_POSITION
        || separator % 2 == 1
    {
        return false;
    }

    if let Some(padding) = code.find(PADDING_CHARACTER) {
        let runs: Vec<&str> = code
            .split(|c| c != PADDING_CHARACTER)
            .filter(|run| !run.is_empty())
            .collect();
        // Short codes cannot be padded, and padding must be the last thing before the separator.
        if separator < SEPARATOR_POSITION
            || padding == 0
            || runs.len() != 1
            || runs[0].len() % 2 == 1
            || runs[0].len() > SEPARATOR_POSITION - 2
            || !code.ends_with(SEPARATOR)
        {
            return false;
        }
    }

    // A lone digit after the separator is never legal.
    if code.len() - separator - 1 == 1 {
        return false;
    }

    code.bytes()
        .filter(|&b| b != SEPARATOR as u8 && b != PADDING_CHARACTER as u8)
        .all(|b| digit_value(b).is_some())
}

/// Determines if a string is a valid short code.
///
/// A short code has had digits removed from the front, so fewer than eight
/// characters precede the separator. It needs a reference location to be
/// resolved with [`recover_nearest`](crate::recover_nearest).
pub fn is_short(code: &str) -> bool {
    if !is_valid(code) {
        return false;
    }
    code.find(SEPARATOR)
        .is_some_and(|separator| separator < SEPARATOR_POSITION)
}

/// Determines if a string is a valid full code.
///
/// Besides being valid and not short, the first two digits must not place
/// the code at or beyond 90 degrees latitude or 180 degrees longitude.
pub fn is_full(code: &str) -> bool {
    if !is_valid(code) || is_short(code) {
        return false;
    }

    let bytes = code.as_bytes();
    if let Some(value) = bytes.first().and_then(|&b| digit_value(b)) {
        if value * ENCODING_BASE >= LATITUDE_MAX * 2 {
            return false;
        }
    }
    if let Some(value) = bytes.get(1).and_then(|&b| digit_value(b)) {
        if value * ENCODING_BASE >= LONGITUDE_MAX * 2 {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_full_codes() {
        for code in ["8FWC2345+G6", "8FWC2345+G6G", "8fwc2345+", "8FWCX400+", "7FG49Q00+"] {
            assert!(is_valid(code), "{code}");
            assert!(!is_short(code), "{code}");
            assert!(is_full(code), "{code}");
        }
    }

    #[test]
    fn test_valid_short_codes() {
        for code in ["WC2345+G6g", "2345+G6", "45+G6", "+G6", "8FVC+"] {
            assert!(is_valid(code), "{code}");
            assert!(is_short(code), "{code}");
            assert!(!is_full(code), "{code}");
        }
    }

    #[test]
    fn test_separator_rules() {
        assert!(!is_valid(""));
        assert!(!is_valid("+"));
        assert!(!is_valid("G+"));
        assert!(!is_valid("8FWC2345"));
        assert!(!is_valid("8FWC2345G6+"));
        assert!(!is_valid("8FWC2345+G6+"));
        assert!(!is_valid("8FWC2345+G"));
        assert!(!is_valid("WC2345+G"));
    }

    #[test]
    fn test_padding_rules() {
        assert!(is_valid("8FWC2200+"));
        assert!(is_valid("8F000000+"));
        // starts with padding
        assert!(!is_valid("0FWC2345+"));
        // odd run
        assert!(!is_valid("8FWC2000+"));
        assert!(!is_valid("80000000+"));
        // two runs
        assert!(!is_valid("8F00X400+"));
        // digits after padded separator
        assert!(!is_valid("8FWC2300+G6"));
        // padded short codes
        assert!(!is_valid("WC2300+"));
        assert!(!is_valid("WC2300+G6g"));
    }

    #[test]
    fn test_bad_characters() {
        assert!(!is_valid("8FWC2_45+G6"));
        assert!(!is_valid("8FWC2η45+G6"));
        assert!(!is_valid("849VGJQF+VX7QR3U"));
        assert!(is_valid("849VGJQF+VX7QR3JW"));
    }

    #[test]
    fn test_full_code_range() {
        // 'X' * 20 = 380, past the latitude range
        assert!(is_valid("X2222222+"));
        assert!(!is_full("X2222222+"));
        assert!(!is_short("X2222222+"));
        // 'X' as longitude, past 360
        assert!(!is_full("2X222222+"));
        // 'C' * 20 = 160, still inside
        assert!(is_full("CFX30000+"));
    }
}
