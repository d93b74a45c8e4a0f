//! Reads and writes [`Geometry`] values from and to json.
//!
//! The `"type"` member picks the geometry; `Feature` and `FeatureCollection`
//! are GeoJSON objects but not geometries and are rejected.

use super::crs::Crs;
use super::crs_converter;
use super::error::{Error, Result};
use super::geometry::{
    Geometry, GeometryCollection, GeometryObject, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use super::object_type::GeoJsonObjectType;
use super::registry::{Entry, Registry};
use log::{debug, trace};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

fn decode_crs(json: &Value) -> Result<Option<Crs>> {
    match json.get("crs") {
        None | Some(Value::Null) => Ok(None),
        Some(crs) => crs_converter::decode(crs).map(Some),
    }
}

fn decode_as<T: GeometryObject>(json: &Value) -> Result<Geometry> {
    let crs = decode_crs(json)?;
    let mut inner = T::deserialize(json)?;
    *inner.crs_mut() = crs;
    Ok(inner.into())
}

fn decode_collection(json: &Value) -> Result<Geometry> {
    let crs = decode_crs(json)?;
    let items = match json.get("geometries") {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(Error::structural("\"geometries\" must be a json array")),
        None => {
            return Err(Error::structural(
                "GeometryCollection must have a \"geometries\" property",
            ))
        }
    };

    let mut geometries = Vec::with_capacity(items.len());
    for item in items {
        let geometry = decode(item)?
            .ok_or_else(|| Error::structural("GeometryCollection members must not be null"))?;
        geometries.push(geometry);
    }

    let bbox = Option::<Vec<f64>>::deserialize(json.get("bbox").unwrap_or(&Value::Null))?;
    let collection = GeometryCollection {
        geometries,
        bbox,
        crs,
    };
    Ok(collection.into())
}

fn encode_as<T: GeometryObject>(geometry: &Geometry) -> Result<Value> {
    let inner = T::downcast(geometry).ok_or(Error::UnsupportedOperation)?;
    Ok(serde_json::to_value(inner)?)
}

macro_rules! entry {
    ($name:ident) => {
        Entry {
            tag: stringify!($name),
            kind: GeoJsonObjectType::$name,
            decode: decode_as::<$name>,
            encode: encode_as::<$name>,
        }
    };
}

static ENTRIES: [Entry<GeoJsonObjectType, Geometry>; 7] = [
    entry!(Point),
    entry!(MultiPoint),
    entry!(LineString),
    entry!(MultiLineString),
    entry!(Polygon),
    entry!(MultiPolygon),
    Entry {
        tag: "GeometryCollection",
        kind: GeoJsonObjectType::GeometryCollection,
        decode: decode_collection,
        encode: encode_as::<GeometryCollection>,
    },
];

/// Geometry discriminators. Feature objects have no entry.
pub static GEOMETRY_TYPES: Registry<GeoJsonObjectType, Geometry> = Registry::new(&ENTRIES);

fn token_kind(json: &Value) -> &'static str {
    match json {
        Value::Null => "Null",
        Value::Bool(true) => "True",
        Value::Bool(false) => "False",
        Value::Number(_) => "Number",
        Value::String(_) => "String",
        Value::Array(_) => "StartArray",
        Value::Object(_) => "StartObject",
    }
}

/// Decodes a geometry member. `null` is an absent geometry.
pub fn decode(json: &Value) -> Result<Option<Geometry>> {
    let object = match json {
        Value::Null => {
            debug!("null geometry decoded as absent");
            return Ok(None);
        }
        Value::Object(object) => object,
        other => {
            return Err(Error::structural(format!(
                "expected null, object or array token but received {}",
                token_kind(other)
            )))
        }
    };

    let token = object
        .get("type")
        .ok_or_else(|| Error::structural("json must contain a \"type\" property"))?;
    let object_type: GeoJsonObjectType = token
        .as_str()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| Error::structural("type must be a valid geojson geometry object type"))?;

    let entry = GEOMETRY_TYPES
        .get(object_type)
        .ok_or(Error::UnsupportedOperation)?;
    trace!("decoding geometry of type {}", entry.tag);
    (entry.decode)(json).map(Some)
}

/// Encodes a geometry with its `"type"` discriminator first.
pub fn encode(geometry: &Geometry) -> Result<Value> {
    let object_type = geometry.object_type();
    if !object_type.is_geometry() {
        return Err(Error::UnsupportedOperation);
    }
    let entry = GEOMETRY_TYPES
        .get(object_type)
        .ok_or(Error::UnsupportedOperation)?;
    trace!("encoding geometry of type {}", entry.tag);

    let mut object = Map::new();
    object.insert("type".into(), Value::String(entry.tag.into()));
    match (entry.encode)(geometry)? {
        Value::Object(payload) => object.extend(payload),
        other => {
            return Err(Error::structural(format!(
                "{} payload must be a json object but was {}",
                entry.tag,
                token_kind(&other)
            )))
        }
    }
    Ok(Value::Object(object))
}

/// Encodes an optional geometry, `None` becomes `null`.
pub fn encode_optional(geometry: Option<&Geometry>) -> Result<Value> {
    match geometry {
        Some(geometry) => encode(geometry),
        None => Ok(Value::Null),
    }
}

/// Parses json text and decodes it as a geometry member.
pub fn from_str(s: &str) -> Result<Option<Geometry>> {
    let value: Value = serde_json::from_str(s)?;
    decode(&value)
}

impl Serialize for Geometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let value = encode(self).map_err(serde::ser::Error::custom)?;
        value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Geometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        decode(&value)
            .map_err(serde::de::Error::custom)?
            .ok_or_else(|| serde::de::Error::custom("geometry must not be null"))
    }
}
