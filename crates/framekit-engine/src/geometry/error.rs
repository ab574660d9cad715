use std::fmt;

/// Invalid input to a geometry constructor.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// No positions were supplied.
    Empty,
    /// The number of floats is not a multiple of nine.
    NotTriangles { len: usize },
    /// A coordinate is NaN or infinite.
    NonFinite { index: usize },
    /// More triangles than 32-bit vertex indices can address.
    TooManyTriangles { count: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "geometry has no positions"),
            Self::NotTriangles { len } => {
                write!(f, "{len} floats do not form whole triangles (expected a multiple of 9)")
            }
            Self::NonFinite { index } => write!(f, "position component {index} is not finite"),
            Self::TooManyTriangles { count } => {
                write!(f, "{count} triangles exceed the index limit of {}", super::Geometry::MAX_TRIANGLES)
            }
        }
    }
}

impl std::error::Error for GeometryError {}
