use crate::constants::SoundSpeeds;
use crate::waveguide::Waveguide;
use crate::SweepResult;
use rayon::prelude::*;

/// Upper bound on the points [`linear_sweep`] will generate.
pub const MAX_SWEEP_POINTS: usize = 10_000_000;

/// Relative slack on `(stop - start) / step` so a `stop` that is a whole
/// number of steps away survives rounding.
const STEP_TOLERANCE: f64 = 1e-9;

/// Frequencies `start, start + step, …` up to and including `stop`.
///
/// Each point is computed as `start + i·step` so long sweeps do not drift.
/// Non-finite inputs, a non-positive step, `stop < start` or more than
/// [`MAX_SWEEP_POINTS`] points give an empty list.
pub fn linear_sweep(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !(start.is_finite() && stop.is_finite() && step.is_finite()) || step <= 0.0 || stop < start {
        return Vec::new();
    }
    let steps = ((stop - start) / step + STEP_TOLERANCE).floor();
    if !(steps < MAX_SWEEP_POINTS as f64) {
        return Vec::new();
    }
    let count = steps as usize + 1;
    (0..count).map(|i| start + i as f64 * step).collect()
}

/// Evaluate the waveguide at every frequency, in order.
pub fn sweep(waveguide: &Waveguide, frequencies: &[f64], speeds: &SoundSpeeds) -> SweepResult {
    let transmittance: Vec<f64> = frequencies
        .iter()
        .map(|&f| waveguide.transmittance(f, speeds))
        .collect();
    SweepResult::new(frequencies.to_vec(), transmittance)
}

/// Same result as [`sweep`], with frequencies spread over the rayon pool.
pub fn sweep_parallel(
    waveguide: &Waveguide,
    frequencies: &[f64],
    speeds: &SoundSpeeds,
) -> SweepResult {
    let transmittance: Vec<f64> = frequencies
        .par_iter()
        .map(|&f| waveguide.transmittance(f, speeds))
        .collect();
    SweepResult::new(frequencies.to_vec(), transmittance)
}
