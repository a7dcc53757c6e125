pub mod constants;
pub mod decode;
pub mod encode;
pub mod quantize;
pub mod validity;

pub use constants::{
    CODE_ALPHABET, CODE_PRECISION_EXTRA, CODE_PRECISION_NORMAL, MAX_DIGIT_COUNT, MIN_DIGIT_COUNT,
    PADDING_CHARACTER, SEPARATOR, SEPARATOR_POSITION,
};
pub use decode::decode;
pub use encode::{encode, encode_default, encode_integers};
pub use quantize::location_to_integers;
pub use validity::{is_full, is_short, is_valid};

use constants::ALPHABET_BYTES;

/// Returns the 20 character Plus Code alphabet.
pub fn get_alphabet() -> &'static str {
    CODE_ALPHABET
}

/// Value of a code digit, ignoring case. `None` for anything outside the alphabet.
pub(crate) fn digit_value(byte: u8) -> Option<u64> {
    let upper = byte.to_ascii_uppercase();
    ALPHABET_BYTES
        .iter()
        .position(|&b| b == upper)
        .map(|index| index as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_value() {
        assert_eq!(digit_value(b'2'), Some(0));
        assert_eq!(digit_value(b'X'), Some(19));
        assert_eq!(digit_value(b'x'), Some(19));
        assert_eq!(digit_value(b'c'), Some(8));
        assert_eq!(digit_value(b'0'), None);
        assert_eq!(digit_value(b'A'), None);
        assert_eq!(digit_value(b'+'), None);
    }

    #[test]
    fn test_get_alphabet() {
        assert_eq!(get_alphabet(), "23456789CFGHJMPQRVWX");
        assert_eq!(get_alphabet().len(), 20);
    }
}
