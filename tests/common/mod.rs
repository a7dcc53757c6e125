use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Reads every record of a fixture under `tests/data`. Lines starting with `#`
/// are comments.
pub fn load<T: DeserializeOwned>(name: &str) -> Vec<T> {
    let path = format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"));
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .from_path(&path)
        .unwrap_or_else(|e| panic!("failed to open {path}: {e}"));

    let records: Vec<T> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .unwrap_or_else(|e| panic!("failed to parse {path}: {e}"));
    assert!(!records.is_empty(), "{path} has no records");
    records
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct ValidityCase {
    pub code: String,
    pub is_valid: bool,
    pub is_short: bool,
    pub is_full: bool,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct DecodingCase {
    pub code: String,
    pub length: usize,
    pub latitude_lo: f64,
    pub longitude_lo: f64,
    pub latitude_hi: f64,
    pub longitude_hi: f64,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct EncodingCase {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_int: u64,
    pub longitude_int: u64,
    pub length: usize,
    pub code: String,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct ShortenCase {
    pub full_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub short_code: String,
    pub kind: char,
}
