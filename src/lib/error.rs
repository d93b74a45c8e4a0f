#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The json shape does not match what is required at this point.
    #[error("{0}")]
    Structural(String),
    /// A CRS `type` discriminator other than `name` or `link`.
    #[error("Type {0} unexpected.")]
    UnsupportedType(String),
    /// A `Feature` or `FeatureCollection` where only geometries are legal.
    #[error("Feature and FeatureCollection types are Feature objects and not Geometry objects")]
    UnsupportedOperation,
    /// Raised by the geometry data classes while reading their payload.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn structural(message: impl Into<String>) -> Self {
        Error::Structural(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = Error::structural("CRS must be null or a json object");
        assert_eq!(err.to_string(), "CRS must be null or a json object");
        let err = Error::UnsupportedType("bogus".into());
        assert_eq!(err.to_string(), "Type bogus unexpected.");
        assert!(Error::UnsupportedOperation
            .to_string()
            .starts_with("Feature and FeatureCollection types"));
    }
}
