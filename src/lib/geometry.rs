use super::crs::Crs;
use super::object_type::GeoJsonObjectType;
use serde::de::DeserializeOwned;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A `[longitude, latitude]` or `[longitude, latitude, altitude]` array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: Option<f64>,
}

impl Position {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Position {
            longitude,
            latitude,
            altitude: None,
        }
    }

    pub fn with_altitude(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Position {
            longitude,
            latitude,
            altitude: Some(altitude),
        }
    }
}

impl From<(f64, f64)> for Position {
    fn from(coordinates: (f64, f64)) -> Self {
        Position::new(coordinates.0, coordinates.1)
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.altitude.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.longitude)?;
        seq.serialize_element(&self.latitude)?;
        if let Some(altitude) = &self.altitude {
            seq.serialize_element(altitude)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<f64>::deserialize(deserializer)?;
        match values[..] {
            [longitude, latitude] => Ok(Position::new(longitude, latitude)),
            [longitude, latitude, altitude] => {
                Ok(Position::with_altitude(longitude, latitude, altitude))
            }
            _ => Err(serde::de::Error::invalid_length(
                values.len(),
                &"a position of 2 or 3 numbers",
            )),
        }
    }
}

/// Any of the seven RFC 7946 geometry objects.
///
/// Serialized with its `"type"` discriminator, see
/// [`geometry_converter`](crate::geometry_converter).
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    pub fn object_type(&self) -> GeoJsonObjectType {
        match self {
            Geometry::Point(_) => Point::TYPE,
            Geometry::MultiPoint(_) => MultiPoint::TYPE,
            Geometry::LineString(_) => LineString::TYPE,
            Geometry::MultiLineString(_) => MultiLineString::TYPE,
            Geometry::Polygon(_) => Polygon::TYPE,
            Geometry::MultiPolygon(_) => MultiPolygon::TYPE,
            Geometry::GeometryCollection(_) => GeometryCollection::TYPE,
        }
    }
}

/// A concrete geometry. Its serde impls cover the payload only, the
/// discriminator and the `crs` member are read by the geometry converter.
pub trait GeometryObject: Serialize + DeserializeOwned + Into<Geometry> {
    const TYPE: GeoJsonObjectType;

    fn downcast(geometry: &Geometry) -> Option<&Self>;

    fn crs_mut(&mut self) -> &mut Option<Crs>;
}

macro_rules! geometry_object {
    ($name:ident, $coordinates:ty) => {
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            pub coordinates: $coordinates,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub bbox: Option<Vec<f64>>,
            #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
            pub crs: Option<Crs>,
        }

        impl $name {
            pub fn new(coordinates: $coordinates) -> Self {
                $name {
                    coordinates,
                    bbox: None,
                    crs: None,
                }
            }
        }

        impl GeometryObject for $name {
            const TYPE: GeoJsonObjectType = GeoJsonObjectType::$name;

            fn downcast(geometry: &Geometry) -> Option<&Self> {
                match geometry {
                    Geometry::$name(inner) => Some(inner),
                    _ => None,
                }
            }

            fn crs_mut(&mut self) -> &mut Option<Crs> {
                &mut self.crs
            }
        }

        impl From<$name> for Geometry {
            fn from(inner: $name) -> Self {
                Geometry::$name(inner)
            }
        }
    };
}

geometry_object!(Point, Position);
geometry_object!(MultiPoint, Vec<Position>);
geometry_object!(LineString, Vec<Position>);
geometry_object!(MultiLineString, Vec<Vec<Position>>);
geometry_object!(Polygon, Vec<Vec<Position>>);
geometry_object!(MultiPolygon, Vec<Vec<Vec<Position>>>);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryCollection {
    pub geometries: Vec<Geometry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Vec<f64>>,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub crs: Option<Crs>,
}

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        GeometryCollection {
            geometries,
            bbox: None,
            crs: None,
        }
    }
}

impl GeometryObject for GeometryCollection {
    const TYPE: GeoJsonObjectType = GeoJsonObjectType::GeometryCollection;

    fn downcast(geometry: &Geometry) -> Option<&Self> {
        match geometry {
            Geometry::GeometryCollection(inner) => Some(inner),
            _ => None,
        }
    }

    fn crs_mut(&mut self) -> &mut Option<Crs> {
        &mut self.crs
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(inner: GeometryCollection) -> Self {
        Geometry::GeometryCollection(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn position_arrays() {
        let p: Position = serde_json::from_value(json!([13.4, 52.5])).unwrap();
        assert_eq!(p, Position::new(13.4, 52.5));
        let p: Position = serde_json::from_value(json!([13.4, 52.5, 34.0])).unwrap();
        assert_eq!(p.altitude, Some(34.0));
        assert_eq!(serde_json::to_value(&p).unwrap(), json!([13.4, 52.5, 34.0]));
    }

    #[test]
    fn position_length() {
        assert!(serde_json::from_value::<Position>(json!([1.0])).is_err());
        assert!(serde_json::from_value::<Position>(json!([1.0, 2.0, 3.0, 4.0])).is_err());
        assert!(serde_json::from_value::<Position>(json!(["a", "b"])).is_err());
    }

    #[test]
    fn payload_has_no_discriminator() {
        let point = Point::new((1.0, 2.0).into());
        assert_eq!(
            serde_json::to_value(&point).unwrap(),
            json!({"coordinates": [1.0, 2.0]})
        );
    }

    #[test]
    fn optional_members() {
        let json = json!({
            "coordinates": [[1.0, 2.0], [3.0, 4.0]],
            "bbox": [1.0, 2.0, 3.0, 4.0],
            "crs": {"type": "name", "properties": {"name": "EPSG:4326"}}
        });
        let line: LineString = serde_json::from_value(json).unwrap();
        assert_eq!(line.bbox, Some(vec![1.0, 2.0, 3.0, 4.0]));
        // read by the converter, not the payload
        assert_eq!(line.crs, None);
        assert_eq!(line.coordinates.len(), 2);
    }

    #[test]
    fn object_types() {
        let point: Geometry = Point::new((0.0, 0.0).into()).into();
        assert_eq!(point.object_type(), GeoJsonObjectType::Point);
        let collection: Geometry = GeometryCollection::new(vec![point.clone()]).into();
        assert_eq!(
            collection.object_type(),
            GeoJsonObjectType::GeometryCollection
        );
        assert!(Point::downcast(&point).is_some());
        assert!(Polygon::downcast(&point).is_none());
    }
}
