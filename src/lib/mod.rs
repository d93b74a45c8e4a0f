//! Typed GeoJSON (RFC 7946) geometries and legacy CRS members on top of
//! `serde_json`.
//!
//! Both families are polymorphic over a `"type"` discriminator. Each has its
//! own converter with a separate [`registry::Registry`] of discriminators:
//!
//! - [`crs_converter`]: `null`, `name` and `link` coordinate reference systems
//! - [`geometry_converter`]: the seven geometry objects
//!
//! ```
//! use geojson_text::{geometry_converter, Geometry};
//!
//! let text = r#"{"type":"point","coordinates":[13.4,52.5]}"#;
//! let geometry = geometry_converter::from_str(text).unwrap().unwrap();
//! assert!(matches!(geometry, Geometry::Point(_)));
//! let json = serde_json::to_string(&geometry).unwrap();
//! assert_eq!(json, r#"{"type":"Point","coordinates":[13.4,52.5]}"#);
//! ```

pub mod crs;
pub mod crs_converter;
mod error;
mod geo;
pub mod geometry;
pub mod geometry_converter;
pub mod object_type;
pub mod registry;
#[cfg(test)]
mod test_helpers;

pub use crs::{Crs, CrsType, LinkedCrs, NamedCrs};
pub use error::{Error, Result};
pub use geometry::{
    Geometry, GeometryCollection, GeometryObject, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, Position,
};
pub use object_type::GeoJsonObjectType;
