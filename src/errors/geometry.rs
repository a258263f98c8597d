use thiserror::Error;

/// Errors raised while parsing EWKT/WKT geometry text
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// Empty input
    #[error("Empty geometry text")]
    Empty,

    /// Geometry type keyword outside point/linestring/polygon
    #[error("Unsupported geometry type '{0}'")]
    UnsupportedType(String),

    /// The `SRID=<n>;` prefix does not parse
    #[error("Malformed SRID prefix '{0}'")]
    MalformedSrid(String),

    /// A coordinate is not a pair of finite numbers
    #[error("Malformed coordinate '{0}'")]
    MalformedCoordinate(String),

    /// Structural problem with the coordinate list
    #[error("Malformed geometry: {0}")]
    Syntax(String),

    /// The value read from the source column is not text
    #[error("Geometry value is not text")]
    NotText,
}
