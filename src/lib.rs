//! # olc-rs
//!
//! Open Location Code (Plus Codes) for Rust. There are currently three main entry points.
//!
//! ### 1. Free functions - The Codec
//!
//! ```
//! use olc_rs::{decode, encode, is_full, CODE_PRECISION_NORMAL};
//!
//! # fn main() -> Result<(), olc_rs::OlcError> {
//! let code = encode(47.0000625, 8.0000625, CODE_PRECISION_NORMAL)?;
//! assert_eq!(code, "8FVC2222+22");
//! assert!(is_full(&code));
//!
//! let area = decode(&code)?;
//! println!("{} x {} degrees", area.latitude_hi() - area.latitude_lo(), area.longitude_hi() - area.longitude_lo());
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `PlusCode` - Single Code Operations
//!
//! ```
//! use olc_rs::PlusCode;
//!
//! # fn main() -> Result<(), olc_rs::OlcError> {
//! let code = PlusCode::from_wgs84(&(-1.217765625, 51.3701125), 11)?;
//! println!("{}", code);
//!
//! let short = code.shorten(&(-1.2, 51.4))?;
//! let polygon = code.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. Batches - Many Codes At Once
//!
//! ```
//! use olc_rs::{CoordinatesToPlusCodes, PlusCodesToPolygons};
//!
//! # fn main() -> Result<(), olc_rs::OlcError> {
//! let stops = vec![(8.54, 47.36), (8.55, 47.37), (8.56, 47.38)];
//! let codes = stops.to_plus_codes(10)?;
//! let polygons = codes.to_polygons();
//! assert_eq!(polygons.len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! Coordinates passed as tuples or points are `(longitude, latitude)`; the free
//! functions take `latitude, longitude` in that order.

pub mod area;
pub mod batch;
pub mod code;
pub mod codec;
pub mod coord;
pub mod error;
pub mod geom;
pub mod shorten;

pub use area::CodeArea;
pub use batch::{CoordinatesToPlusCodes, PlusCodesToPolygons, decode_all};
pub use code::PlusCode;
pub use codec::{
    CODE_ALPHABET, CODE_PRECISION_EXTRA, CODE_PRECISION_NORMAL, MAX_DIGIT_COUNT, MIN_DIGIT_COUNT,
    PADDING_CHARACTER, SEPARATOR, SEPARATOR_POSITION, decode, encode, encode_default,
    encode_integers, get_alphabet, is_full, is_short, is_valid, location_to_integers,
};
pub use coord::{Coordinate, clip_latitude, normalize_longitude};
pub use error::OlcError;
pub use geom::{polygon_to_geojson, polygon_to_wkt};
pub use shorten::{recover_nearest, shorten};

pub use geo_types;
