mod common;

use common::ValidityCase;
use olc_rs::{is_full, is_short, is_valid};

#[test]
fn test_validity_fixtures() {
    for case in common::load::<ValidityCase>("validity.csv") {
        assert_eq!(is_valid(&case.code), case.is_valid, "is_valid({})", case.code);
        assert_eq!(is_short(&case.code), case.is_short, "is_short({})", case.code);
        assert_eq!(is_full(&case.code), case.is_full, "is_full({})", case.code);
    }
}

#[test]
fn test_full_and_short_are_exclusive() {
    for case in common::load::<ValidityCase>("validity.csv") {
        assert!(!(is_full(&case.code) && is_short(&case.code)), "{}", case.code);
        if !is_valid(&case.code) {
            assert!(!is_full(&case.code) && !is_short(&case.code), "{}", case.code);
        }
    }
}
