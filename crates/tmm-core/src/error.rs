use std::fmt;

/// Structural or physical problems with a waveguide description.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The parallel area and length lists differ in length.
    LengthMismatch { areas: usize, lengths: usize },
    InvalidArea { index: usize, area: f64 },
    InvalidLength { index: usize, length: f64 },
    InvalidExteriorArea(f64),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::LengthMismatch { areas, lengths } => {
                write!(f, "Segment list mismatch: {} areas but {} lengths", areas, lengths)
            }
            GeometryError::InvalidArea { index, area } => {
                write!(f, "Segment {} has non-positive or non-finite area {} m²", index, area)
            }
            GeometryError::InvalidLength { index, length } => {
                write!(f, "Segment {} has negative or non-finite length {} m", index, length)
            }
            GeometryError::InvalidExteriorArea(area) => {
                write!(f, "Exterior area must be positive and finite, got {} m²", area)
            }
        }
    }
}

impl std::error::Error for GeometryError {}
