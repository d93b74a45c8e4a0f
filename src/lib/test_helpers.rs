use super::crs::{Crs, NamedCrs};
use serde_json::{json, Value};

pub fn named_crs_json() -> Value {
    json!({
        "type": "name",
        "properties": {"name": "urn:ogc:def:crs:OGC:1.3:CRS84"}
    })
}

pub fn unwrap_named(crs: Crs) -> NamedCrs {
    match crs {
        Crs::Named(named) => named,
        other => panic!("expected a named crs, got {:?}", other),
    }
}

/// One valid document per geometry type, in canonical form.
pub fn geometry_samples() -> Vec<(&'static str, Value)> {
    vec![
        ("Point", json!({"type": "Point", "coordinates": [13.4, 52.5]})),
        (
            "MultiPoint",
            json!({"type": "MultiPoint", "coordinates": [[13.4, 52.5], [13.5, 52.6, 40.0]]}),
        ),
        (
            "LineString",
            json!({
                "type": "LineString",
                "coordinates": [[9.0, 50.0], [9.0, 51.0], [10.0, 51.0]],
                "bbox": [9.0, 50.0, 10.0, 51.0]
            }),
        ),
        (
            "MultiLineString",
            json!({
                "type": "MultiLineString",
                "coordinates": [[[9.0, 50.0], [9.0, 51.0]], [[10.0, 51.0], [11.0, 52.0]]]
            }),
        ),
        (
            "Polygon",
            json!({
                "type": "Polygon",
                "coordinates": [[[5.0, 49.0], [6.0, 50.0], [7.0, 49.0], [5.0, 49.0]]]
            }),
        ),
        (
            "MultiPolygon",
            json!({
                "type": "MultiPolygon",
                "coordinates": [
                    [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
                    [[[2.0, 2.0], [3.0, 2.0], [3.0, 3.0], [2.0, 2.0]]]
                ]
            }),
        ),
        (
            "GeometryCollection",
            json!({
                "type": "GeometryCollection",
                "geometries": [
                    {"type": "Point", "coordinates": [1.0, 2.0]},
                    {"type": "LineString", "coordinates": [[1.0, 2.0], [3.0, 4.0]]}
                ]
            }),
        ),
    ]
}
