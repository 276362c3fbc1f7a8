pub mod constants;
pub mod elements;
pub mod error;
pub mod frequency_response;
pub mod transfer_matrix;
pub mod waveguide;

pub use constants::SoundSpeeds;
pub use elements::Segment;
pub use error::GeometryError;
pub use transfer_matrix::TransferMatrix;
pub use waveguide::Waveguide;

use serde::Serialize;
use tracing::debug;

/// Transmittance of a frequency sweep, consumed by the driver for output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    /// Frequencies in Hz, in caller order.
    pub frequencies: Vec<f64>,
    /// Power transmittance |t|² at each frequency.
    pub transmittance: Vec<f64>,
    /// Transmission loss in dB at each frequency.
    pub transmission_loss: Vec<f64>,
}

impl SweepResult {
    pub fn new(frequencies: Vec<f64>, transmittance: Vec<f64>) -> Self {
        let transmission_loss = transmittance.iter().map(|tau| -10.0 * tau.log10()).collect();
        Self {
            frequencies,
            transmittance,
            transmission_loss,
        }
    }

    /// `(frequency, transmittance)` of the deepest dip, ignoring NaN.
    pub fn min_transmittance(&self) -> Option<(f64, f64)> {
        self.frequencies
            .iter()
            .copied()
            .zip(self.transmittance.iter().copied())
            .filter(|(_, tau)| !tau.is_nan())
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// `(frequency, transmittance)` pairs in sweep order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies
            .iter()
            .copied()
            .zip(self.transmittance.iter().copied())
    }
}

/// Trait for waveguide elements that can produce a 2×2 transfer matrix
/// at a given wavenumber.
pub trait AcousticElement {
    /// Compute the transfer matrix at wavenumber `k` (rad/m).
    fn transfer_matrix(&self, k: f64, speeds: &SoundSpeeds) -> TransferMatrix;
}

/// Power transmittance of a segmented waveguide at each frequency.
///
/// `areas[i]` and `lengths[i]` describe segment `i`; segments are chained
/// in order between exterior tubes of area `exterior_area`. Only the list
/// lengths are checked. Degenerate geometry such as a zero area yields
/// non-finite values rather than an error.
pub fn compute(
    frequencies: &[f64],
    areas: &[f64],
    lengths: &[f64],
    exterior_area: f64,
) -> Result<Vec<f64>, GeometryError> {
    compute_with(frequencies, areas, lengths, exterior_area, &SoundSpeeds::default())
}

/// [`compute`] with explicit speed-of-sound constants.
pub fn compute_with(
    frequencies: &[f64],
    areas: &[f64],
    lengths: &[f64],
    exterior_area: f64,
    speeds: &SoundSpeeds,
) -> Result<Vec<f64>, GeometryError> {
    let waveguide = Waveguide::from_parallel(areas, lengths, exterior_area)?;
    debug!(
        segments = waveguide.segments().len(),
        frequencies = frequencies.len(),
        exterior_area,
        "computing transmittance"
    );
    Ok(frequencies
        .iter()
        .map(|&f| waveguide.transmittance(f, speeds))
        .collect())
}
