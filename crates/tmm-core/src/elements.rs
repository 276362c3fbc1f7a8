use crate::constants::{area_from_radius, SoundSpeeds};
use crate::transfer_matrix::TransferMatrix;
use crate::AcousticElement;
use num_complex::Complex64;
use serde::Serialize;

/// A straight waveguide segment of constant cross-section: a resonator
/// cavity, a neck, or a plain stretch of tube.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    /// Cross-sectional area in m².
    pub area: f64,
    /// Length in metres.
    pub length: f64,
}

impl Segment {
    pub fn new(area: f64, length: f64) -> Self {
        Self { area, length }
    }

    /// Circular segment of the given inner radius.
    pub fn from_radius(radius: f64, length: f64) -> Self {
        Self::new(area_from_radius(radius), length)
    }
}

impl AcousticElement for Segment {
    fn transfer_matrix(&self, k: f64, speeds: &SoundSpeeds) -> TransferMatrix {
        let kl = k * self.length;

        let cos_kl = Complex64::new(kl.cos(), 0.0);
        let sin_kl = kl.sin();
        let j = Complex64::new(0.0, 1.0);

        TransferMatrix::new(
            cos_kl,
            j * (speeds.impedance / self.area * sin_kl),
            j * (self.area / speeds.wavenumber * sin_kl),
            cos_kl,
        )
    }
}
