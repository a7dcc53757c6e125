use geo_types::Polygon;
use wkt::ToWkt;

/// Formats a polygon as Well-Known Text, e.g. `POLYGON((2 20,3 20,3 21,2 21,2 20))`.
pub fn polygon_to_wkt(polygon: &Polygon<f64>) -> String {
    polygon.wkt_string()
}

/// Formats a polygon as a GeoJSON geometry object.
pub fn polygon_to_geojson(polygon: &Polygon<f64>) -> String {
    let geom = geojson::Geometry::from(polygon);
    geom.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::polygon;

    fn unit_square() -> Polygon<f64> {
        polygon![
            (x: 2.0, y: 20.0),
            (x: 3.0, y: 20.0),
            (x: 3.0, y: 21.0),
            (x: 2.0, y: 21.0),
            (x: 2.0, y: 20.0),
        ]
    }

    #[test]
    fn test_polygon_to_wkt() {
        let wkt = polygon_to_wkt(&unit_square());
        assert!(wkt.starts_with("POLYGON(("));
        assert!(wkt.contains("3 21"));
    }

    #[test]
    fn test_polygon_to_geojson() {
        let json = polygon_to_geojson(&unit_square());
        assert!(json.contains("\"type\":\"Polygon\""));
        assert!(json.contains("[3.0,21.0]"));
    }
}
