use serde_json::{Map, Value};

/// Ordered, case-sensitive CRS properties.
pub type Properties = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrsType {
    Unspecified,
    Name,
    Link,
}

/// Legacy GeoJSON coordinate reference system member.
#[derive(Debug, Clone, PartialEq)]
pub enum Crs {
    /// Represented on the wire as `null`.
    Unspecified,
    Named(NamedCrs),
    Linked(LinkedCrs),
}

impl Crs {
    pub fn crs_type(&self) -> CrsType {
        match self {
            Crs::Unspecified => CrsType::Unspecified,
            Crs::Named(_) => CrsType::Name,
            Crs::Linked(_) => CrsType::Link,
        }
    }
}

impl Default for Crs {
    fn default() -> Self {
        Crs::Unspecified
    }
}

fn seeded(key: &str, value: &str, extra: Properties) -> Properties {
    let mut properties = Properties::new();
    properties.insert(key.to_string(), Value::String(value.to_string()));
    for (k, v) in extra {
        properties.entry(k).or_insert(v);
    }
    properties
}

/// A CRS referenced by name, e.g. `urn:ogc:def:crs:OGC:1.3:CRS84`.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedCrs {
    name: String,
    properties: Properties,
}

impl NamedCrs {
    pub fn new(name: impl Into<String>) -> Self {
        NamedCrs::with_properties(name, Properties::new())
    }

    /// `name` is seeded first; `extra` never overwrites it.
    pub fn with_properties(name: impl Into<String>, extra: Properties) -> Self {
        let name = name.into();
        let properties = seeded("name", &name, extra);
        NamedCrs { name, properties }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }
}

/// A CRS referenced by link.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkedCrs {
    href: String,
    properties: Properties,
}

impl LinkedCrs {
    pub fn new(href: impl Into<String>) -> Self {
        LinkedCrs::with_properties(href, Properties::new())
    }

    /// `href` is seeded first; `extra` never overwrites it.
    pub fn with_properties(href: impl Into<String>, extra: Properties) -> Self {
        let href = href.into();
        let properties = seeded("href", &href, extra);
        LinkedCrs { href, properties }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    /// The optional `type` hint of the link, e.g. `proj4`.
    pub fn link_type(&self) -> Option<&str> {
        self.properties.get("type").and_then(Value::as_str)
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }
}

impl From<NamedCrs> for Crs {
    fn from(crs: NamedCrs) -> Self {
        Crs::Named(crs)
    }
}

impl From<LinkedCrs> for Crs {
    fn from(crs: LinkedCrs) -> Self {
        Crs::Linked(crs)
    }
}
