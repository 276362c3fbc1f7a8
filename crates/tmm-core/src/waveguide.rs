use crate::constants::SoundSpeeds;
use crate::elements::Segment;
use crate::error::GeometryError;
use crate::transfer_matrix::TransferMatrix;
use crate::AcousticElement;
use serde::Serialize;

/// An ordered chain of segments between two exterior tubes of equal area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waveguide {
    segments: Vec<Segment>,
    /// Cross-sectional area of the exterior tube on both ends (m²).
    pub exterior_area: f64,
}

impl Waveguide {
    pub fn new(segments: Vec<Segment>, exterior_area: f64) -> Self {
        Self {
            segments,
            exterior_area,
        }
    }

    /// Build from parallel area and length lists. Only the list lengths are
    /// checked; see [`Waveguide::validate`] for the physical checks.
    pub fn from_parallel(
        areas: &[f64],
        lengths: &[f64],
        exterior_area: f64,
    ) -> Result<Self, GeometryError> {
        if areas.len() != lengths.len() {
            return Err(GeometryError::LengthMismatch {
                areas: areas.len(),
                lengths: lengths.len(),
            });
        }
        let segments = areas
            .iter()
            .zip(lengths)
            .map(|(&area, &length)| Segment::new(area, length))
            .collect();
        Ok(Self::new(segments, exterior_area))
    }

    /// `cells` repetitions of `unit_cell` followed by `terminal`.
    ///
    /// A row of two Helmholtz resonators is
    /// `periodic(&[cavity, neck], 2, cavity)`.
    pub fn periodic(
        unit_cell: &[Segment],
        cells: usize,
        terminal: Segment,
        exterior_area: f64,
    ) -> Self {
        let mut segments = Vec::with_capacity(unit_cell.len() * cells + 1);
        for _ in 0..cells {
            segments.extend_from_slice(unit_cell);
        }
        segments.push(terminal);
        Self::new(segments, exterior_area)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Reject geometry that has no physical meaning: non-positive or
    /// non-finite areas, negative or non-finite lengths. Zero-length
    /// segments are allowed.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !(self.exterior_area > 0.0 && self.exterior_area.is_finite()) {
            return Err(GeometryError::InvalidExteriorArea(self.exterior_area));
        }
        for (index, segment) in self.segments.iter().enumerate() {
            if !(segment.area > 0.0 && segment.area.is_finite()) {
                return Err(GeometryError::InvalidArea {
                    index,
                    area: segment.area,
                });
            }
            if !(segment.length >= 0.0 && segment.length.is_finite()) {
                return Err(GeometryError::InvalidLength {
                    index,
                    length: segment.length,
                });
            }
        }
        Ok(())
    }

    /// Total transfer matrix at `frequency` Hz.
    pub fn total_transfer_matrix(&self, frequency: f64, speeds: &SoundSpeeds) -> TransferMatrix {
        chain_elements(&self.segments, speeds.wavenumber_at(frequency), speeds)
    }

    /// Power transmittance at `frequency` Hz.
    pub fn transmittance(&self, frequency: f64, speeds: &SoundSpeeds) -> f64 {
        self.total_transfer_matrix(frequency, speeds)
            .transmittance(self.exterior_area, speeds.wavenumber)
    }

    /// Transmission loss in dB at `frequency` Hz.
    pub fn transmission_loss(&self, frequency: f64, speeds: &SoundSpeeds) -> f64 {
        self.total_transfer_matrix(frequency, speeds)
            .transmission_loss(self.exterior_area, speeds.wavenumber)
    }
}

/// Multiply the element matrices in order, first element leftmost.
pub fn chain_elements<E: AcousticElement>(
    elements: &[E],
    k: f64,
    speeds: &SoundSpeeds,
) -> TransferMatrix {
    let mut total = TransferMatrix::identity();
    for elem in elements {
        total *= elem.transfer_matrix(k, speeds);
    }
    total
}
