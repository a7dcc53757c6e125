mod export;

pub use export::{polygon_to_geojson, polygon_to_wkt};
