/// Separator between the fourth and fifth digit pairs.
pub const SEPARATOR: char = '+';

/// Number of characters placed before the separator.
pub const SEPARATOR_POSITION: usize = 8;

/// Character used to pad short-precision codes out to the separator.
pub const PADDING_CHARACTER: char = '0';

/// The 20 digits, chosen to avoid spelling words and to resist misreading.
pub const CODE_ALPHABET: &str = "23456789CFGHJMPQRVWX";

pub(crate) const ALPHABET_BYTES: &[u8; 20] = b"23456789CFGHJMPQRVWX";

/// Base of the pair section digits.
pub const ENCODING_BASE: u64 = 20;

/// Maximum latitude in degrees
pub const LATITUDE_MAX: u64 = 90;

/// Maximum longitude in degrees
pub const LONGITUDE_MAX: u64 = 180;

/// Minimum number of significant digits in a code.
pub const MIN_DIGIT_COUNT: usize = 2;

/// Maximum number of significant digits processed.
pub const MAX_DIGIT_COUNT: usize = 15;

/// Number of digits encoded as latitude/longitude pairs.
pub const PAIR_CODE_LENGTH: usize = 10;

/// Number of digits in the grid refinement section.
pub const GRID_CODE_LENGTH: usize = MAX_DIGIT_COUNT - PAIR_CODE_LENGTH;

/// Columns in the grid refinement method.
pub const GRID_COLUMNS: u64 = 4;

/// Rows in the grid refinement method.
pub const GRID_ROWS: u64 = 5;

/// Place value of the most significant pair, in units of the last pair.
pub const PAIR_FIRST_PLACE_VALUE: u64 = ENCODING_BASE.pow((PAIR_CODE_LENGTH / 2 - 1) as u32);

/// Inverse of the precision of the pair section.
pub const PAIR_PRECISION: u64 = ENCODING_BASE.pow(3);

/// Height and width in degrees of the cell for each digit pair.
pub const PAIR_RESOLUTIONS: [f64; 5] = [20.0, 1.0, 0.05, 0.0025, 0.000125];

/// Place value of the first latitude grid digit, in units of the last.
pub const GRID_LAT_FIRST_PLACE_VALUE: u64 = GRID_ROWS.pow((GRID_CODE_LENGTH - 1) as u32);

/// Place value of the first longitude grid digit, in units of the last.
pub const GRID_LNG_FIRST_PLACE_VALUE: u64 = GRID_COLUMNS.pow((GRID_CODE_LENGTH - 1) as u32);

/// Latitude multiplier giving an integer count of the finest cells.
pub const FINAL_LAT_PRECISION: u64 = PAIR_PRECISION * GRID_ROWS.pow(GRID_CODE_LENGTH as u32);

/// Longitude multiplier giving an integer count of the finest cells.
pub const FINAL_LNG_PRECISION: u64 = PAIR_PRECISION * GRID_COLUMNS.pow(GRID_CODE_LENGTH as u32);

/// Codes shorter than this cannot be shortened.
pub const MIN_TRIMMABLE_CODE_LEN: usize = 6;

/// Normal precision, roughly 14x14 meters.
pub const CODE_PRECISION_NORMAL: usize = 10;

/// Extra precision, roughly 2x3 meters.
pub const CODE_PRECISION_EXTRA: usize = 11;
