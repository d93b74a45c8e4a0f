use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The GeoJSON object types of RFC 7946.
///
/// Parsing is case-insensitive, output always uses the canonical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeoJsonObjectType {
    /// https://tools.ietf.org/html/rfc7946#section-3.1.2
    Point,
    /// https://tools.ietf.org/html/rfc7946#section-3.1.3
    MultiPoint,
    /// https://tools.ietf.org/html/rfc7946#section-3.1.4
    LineString,
    /// https://tools.ietf.org/html/rfc7946#section-3.1.5
    MultiLineString,
    /// https://tools.ietf.org/html/rfc7946#section-3.1.6
    Polygon,
    /// https://tools.ietf.org/html/rfc7946#section-3.1.7
    MultiPolygon,
    /// https://tools.ietf.org/html/rfc7946#section-3.1.8
    GeometryCollection,
    /// https://tools.ietf.org/html/rfc7946#section-3.2
    Feature,
    /// https://tools.ietf.org/html/rfc7946#section-3.3
    FeatureCollection,
}

impl GeoJsonObjectType {
    pub const ALL: [GeoJsonObjectType; 9] = [
        GeoJsonObjectType::Point,
        GeoJsonObjectType::MultiPoint,
        GeoJsonObjectType::LineString,
        GeoJsonObjectType::MultiLineString,
        GeoJsonObjectType::Polygon,
        GeoJsonObjectType::MultiPolygon,
        GeoJsonObjectType::GeometryCollection,
        GeoJsonObjectType::Feature,
        GeoJsonObjectType::FeatureCollection,
    ];

    pub fn as_str(self) -> &'static str {
        use GeoJsonObjectType::*;

        match self {
            Point => "Point",
            MultiPoint => "MultiPoint",
            LineString => "LineString",
            MultiLineString => "MultiLineString",
            Polygon => "Polygon",
            MultiPolygon => "MultiPolygon",
            GeometryCollection => "GeometryCollection",
            Feature => "Feature",
            FeatureCollection => "FeatureCollection",
        }
    }

    pub fn is_geometry(self) -> bool {
        !matches!(
            self,
            GeoJsonObjectType::Feature | GeoJsonObjectType::FeatureCollection
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownObjectType(pub String);

impl fmt::Display for UnknownObjectType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown geojson object type {:?}", self.0)
    }
}

impl std::error::Error for UnknownObjectType {}

impl FromStr for GeoJsonObjectType {
    type Err = UnknownObjectType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeoJsonObjectType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownObjectType(s.to_string()))
    }
}

impl fmt::Display for GeoJsonObjectType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for GeoJsonObjectType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GeoJsonObjectType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
