//! Parameter block of the shrink-wrap solver.
//!
//! Every field treats a non-positive value as "use the canonical default",
//! so embedders can override single knobs without spelling out the rest.

use serde::{Deserialize, Serialize};

/// Tunable knobs of one reconstruction.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ShrinkWrapParams {
    /// Upper bound on outer mask-update cycles (0 → 20).
    pub cycles: usize,
    /// Convergence threshold on the masked-region complex-norm sum
    /// (≤0 → 1e-5).
    pub target_error: f32,
    /// HIO feedback coefficient (≤0 → 0.9).
    pub hio_beta: f32,
    /// Relative threshold for the very first mask taken from the
    /// autocorrelation envelope (≤0 → 0.04).
    pub autocorrelation_cutoff: f32,
    /// Relative threshold for all subsequent masks (≤0 → 0.20).
    pub intensity_cutoff: f32,
    /// Initial blur scale in pixels (≤0 → 3.0).
    pub sigma0: f32,
    /// Multiplicative sigma decay per outer cycle (≤0 → 0.01). Sigma never
    /// drops below 1.5 pixels.
    pub sigma_change: f32,
    /// Upper bound on inner HIO iterations per outer cycle (0 → 20).
    pub hio_cycles: usize,
}

impl Default for ShrinkWrapParams {
    fn default() -> Self {
        Self {
            cycles: 20,
            target_error: 1e-5,
            hio_beta: 0.9,
            autocorrelation_cutoff: 0.04,
            intensity_cutoff: 0.20,
            sigma0: 3.0,
            sigma_change: 0.01,
            hio_cycles: 20,
        }
    }
}

impl ShrinkWrapParams {
    /// Replace sentinel fields by their canonical defaults.
    pub fn resolved(&self) -> Self {
        let d = Self::default();
        Self {
            cycles: if self.cycles == 0 { d.cycles } else { self.cycles },
            target_error: positive_or(self.target_error, d.target_error),
            hio_beta: positive_or(self.hio_beta, d.hio_beta),
            autocorrelation_cutoff: positive_or(
                self.autocorrelation_cutoff,
                d.autocorrelation_cutoff,
            ),
            intensity_cutoff: positive_or(self.intensity_cutoff, d.intensity_cutoff),
            sigma0: positive_or(self.sigma0, d.sigma0),
            sigma_change: positive_or(self.sigma_change, d.sigma_change),
            hio_cycles: if self.hio_cycles == 0 {
                d.hio_cycles
            } else {
                self.hio_cycles
            },
        }
    }
}

fn positive_or(value: f32, default: f32) -> f32 {
    if value > 0.0 {
        value
    } else {
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_resolve_to_defaults() {
        let params = ShrinkWrapParams {
            cycles: 0,
            target_error: -1.0,
            hio_beta: 0.0,
            autocorrelation_cutoff: -0.5,
            intensity_cutoff: 0.0,
            sigma0: -3.0,
            sigma_change: 0.0,
            hio_cycles: 0,
        };
        let resolved = params.resolved();
        let d = ShrinkWrapParams::default();
        assert_eq!(resolved.cycles, d.cycles);
        assert_eq!(resolved.target_error, d.target_error);
        assert_eq!(resolved.hio_beta, d.hio_beta);
        assert_eq!(resolved.autocorrelation_cutoff, d.autocorrelation_cutoff);
        assert_eq!(resolved.intensity_cutoff, d.intensity_cutoff);
        assert_eq!(resolved.sigma0, d.sigma0);
        assert_eq!(resolved.sigma_change, d.sigma_change);
        assert_eq!(resolved.hio_cycles, d.hio_cycles);
    }

    #[test]
    fn explicit_values_pass_through() {
        let params = ShrinkWrapParams {
            cycles: 7,
            target_error: 0.25,
            hio_beta: 0.5,
            autocorrelation_cutoff: 0.1,
            intensity_cutoff: 0.3,
            sigma0: 5.0,
            sigma_change: 0.02,
            hio_cycles: 3,
        };
        let resolved = params.resolved();
        assert_eq!(resolved.cycles, 7);
        assert_eq!(resolved.target_error, 0.25);
        assert_eq!(resolved.hio_beta, 0.5);
        assert_eq!(resolved.sigma0, 5.0);
        assert_eq!(resolved.hio_cycles, 3);
    }
}
