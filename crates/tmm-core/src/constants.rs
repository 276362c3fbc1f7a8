use serde::Serialize;

/// Speed of sound (m/s) used for the wavenumber, the lower-left matrix
/// entry and the termination impedances.
pub const SPEED_OF_SOUND: f64 = 342.0;

/// Speed of sound (m/s) used only in the upper-right matrix entry.
pub const SPEED_OF_SOUND_IMPEDANCE: f64 = 343.0;

/// The pair of speed-of-sound constants a transmittance computation uses.
///
/// The default reproduces the reference results, where the upper-right
/// entry of each segment matrix uses 343 m/s and everything else 342 m/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SoundSpeeds {
    /// Speed (m/s) for `k = 2πf / c`, the `j·(S/c)·sin(kL)` entry and the
    /// exterior terminations.
    pub wavenumber: f64,
    /// Speed (m/s) for the `j·(c/S)·sin(kL)` entry.
    pub impedance: f64,
}

impl Default for SoundSpeeds {
    fn default() -> Self {
        Self {
            wavenumber: SPEED_OF_SOUND,
            impedance: SPEED_OF_SOUND_IMPEDANCE,
        }
    }
}

impl SoundSpeeds {
    /// A single speed of sound for every entry.
    pub fn uniform(c: f64) -> Self {
        Self {
            wavenumber: c,
            impedance: c,
        }
    }

    /// Uniform speed of sound in air at `temperature_c` °C, from the
    /// ideal-gas approximation `c = 331.3·sqrt(T / 273.15)`.
    pub fn at_temperature(temperature_c: f64) -> Self {
        let t_kelvin = temperature_c + 273.15;
        Self::uniform(331.3 * (t_kelvin / 273.15).sqrt())
    }

    /// Wavenumber `k = 2πf / c` (rad/m) at `frequency` Hz.
    pub fn wavenumber_at(&self, frequency: f64) -> f64 {
        2.0 * std::f64::consts::PI * frequency / self.wavenumber
    }

    pub fn is_uniform(&self) -> bool {
        self.wavenumber == self.impedance
    }
}

/// Cross-sectional area from radius (both in metres).
pub fn area_from_radius(radius: f64) -> f64 {
    std::f64::consts::PI * radius.powi(2)
}

/// Cross-sectional area from diameter (both in metres).
pub fn area_from_diameter(diameter: f64) -> f64 {
    area_from_radius(diameter / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_speeds_keep_both_constants() {
        let speeds = SoundSpeeds::default();
        assert_eq!(speeds.wavenumber, 342.0);
        assert_eq!(speeds.impedance, 343.0);
        assert!(!speeds.is_uniform());
    }

    #[test]
    fn test_speed_of_sound_at_20c() {
        let speeds = SoundSpeeds::at_temperature(20.0);
        assert!(speeds.is_uniform());
        assert!((speeds.wavenumber - 343.2).abs() < 0.5, "c = {}", speeds.wavenumber);
    }

    #[test]
    fn test_wavenumber() {
        let speeds = SoundSpeeds::uniform(340.0);
        let k = speeds.wavenumber_at(340.0);
        assert!((k - 2.0 * std::f64::consts::PI).abs() < 1e-12, "k = {k}");
    }

    #[test]
    fn test_outer_tube_area() {
        // 51 mm radius tube
        let s = area_from_radius(0.051);
        assert!((s - 0.008_171_282_491_987_05).abs() < 1e-15, "S = {s}");
        assert!((area_from_diameter(0.102) - s).abs() < 1e-15);
    }
}
