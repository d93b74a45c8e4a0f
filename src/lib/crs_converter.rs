//! Reads and writes [`Crs`] values from and to json.
//!
//! ```
//! use geojson_text::crs_converter::{decode, encode};
//! use geojson_text::Crs;
//! use serde_json::json;
//!
//! let json = json!({"type": "name", "properties": {"name": "EPSG:4326"}});
//! let crs = decode(&json).unwrap();
//! match &crs {
//!     Crs::Named(named) => assert_eq!(named.name(), "EPSG:4326"),
//!     _ => panic!("expected a named crs"),
//! }
//! assert_eq!(encode(Some(&crs)).unwrap(), json);
//! assert!(encode(None).unwrap().is_null());
//! ```

use super::crs::{Crs, CrsType, LinkedCrs, NamedCrs, Properties};
use super::error::{Error, Result};
use super::registry::{Entry, Registry};
use log::{debug, trace};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

fn seed<'a>(properties: &'a Value, key: &str) -> Result<(&'a str, &'a Map<String, Value>)> {
    let object = properties
        .as_object()
        .ok_or_else(|| Error::structural("CRS \"properties\" must be a json object"))?;
    let value = object.get(key).and_then(Value::as_str).ok_or_else(|| {
        Error::structural(format!("CRS properties must have a \"{}\" string property", key))
    })?;
    Ok((value, object))
}

fn decode_named(properties: &Value) -> Result<Crs> {
    let (name, object) = seed(properties, "name")?;
    let crs = NamedCrs::with_properties(name, object.clone());
    Ok(crs.into())
}

fn decode_linked(properties: &Value) -> Result<Crs> {
    let (href, object) = seed(properties, "href")?;
    let crs = LinkedCrs::with_properties(href, object.clone());
    Ok(crs.into())
}

fn encode_properties(crs: &Crs) -> Result<Value> {
    let properties: &Properties = match crs {
        Crs::Named(named) => named.properties(),
        Crs::Linked(linked) => linked.properties(),
        Crs::Unspecified => return Ok(Value::Null),
    };
    Ok(Value::Object(properties.clone()))
}

static ENTRIES: [Entry<CrsType, Crs>; 2] = [
    Entry {
        tag: "name",
        kind: CrsType::Name,
        decode: decode_named,
        encode: encode_properties,
    },
    Entry {
        tag: "link",
        kind: CrsType::Link,
        decode: decode_linked,
        encode: encode_properties,
    },
];

/// CRS discriminators. Their payload lives under `properties`.
pub static CRS_TYPES: Registry<CrsType, Crs> = Registry::new(&ENTRIES);

/// Decodes a CRS member. `null` is the unspecified CRS.
pub fn decode(json: &Value) -> Result<Crs> {
    let object = match json {
        Value::Null => {
            debug!("null CRS decoded as unspecified");
            return Ok(Crs::Unspecified);
        }
        Value::Object(object) => object,
        _ => return Err(Error::structural("CRS must be null or a json object")),
    };

    let token = object
        .get("type")
        .ok_or_else(|| Error::structural("CRS must have a \"type\" property"))?;

    // a known type without "properties" is reported like an unknown one
    if let (Some(tag), Some(properties)) = (token.as_str(), object.get("properties")) {
        if let Some(entry) = CRS_TYPES.lookup(tag) {
            trace!("decoding CRS of type {}", entry.tag);
            return (entry.decode)(properties);
        }
    }

    let crs_type = match token {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    Err(Error::UnsupportedType(crs_type))
}

/// Encodes a CRS member. Both `None` and the unspecified CRS become `null`.
pub fn encode(value: Option<&Crs>) -> Result<Value> {
    let crs = match value {
        None | Some(Crs::Unspecified) => return Ok(Value::Null),
        Some(crs) => crs,
    };
    let kind = crs.crs_type();
    let entry = match CRS_TYPES.get(kind) {
        Some(entry) => entry,
        None => unreachable!("no CRS encoder registered for {:?}", kind),
    };
    trace!("encoding CRS of type {}", entry.tag);

    let mut object = Map::new();
    object.insert("type".into(), Value::String(entry.tag.into()));
    object.insert("properties".into(), (entry.encode)(crs)?);
    Ok(Value::Object(object))
}

/// Parses json text and decodes it as a CRS member.
pub fn from_str(s: &str) -> Result<Crs> {
    let value: Value = serde_json::from_str(s)?;
    decode(&value)
}

impl Serialize for Crs {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let value = encode(Some(self)).map_err(serde::ser::Error::custom)?;
        value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Crs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        decode(&value).map_err(serde::de::Error::custom)
    }
}
