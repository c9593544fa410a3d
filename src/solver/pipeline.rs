//! Solver pipeline driving the reconstruction end-to-end.
//!
//! The [`ShrinkWrapSolver`] exposes a simple API: feed a diffraction
//! intensity and get the reconstructed real object back in the same buffer,
//! together with a compact [`Reconstruction`] report.
//!
//! Typical usage:
//! ```no_run
//! use phase_retrieval::{ShrinkWrapParams, ShrinkWrapSolver};
//!
//! # fn example(intensity: &mut [f32]) {
//! let solver = ShrinkWrapSolver::new(ShrinkWrapParams::default());
//! let report = solver.reconstruct(intensity, 64, 64).unwrap();
//! if !report.converged {
//!     println!("stopped at error {:.3e}", report.final_error);
//! }
//! # }
//! ```

use super::observer::{NoopObserver, ShrinkWrapObserver};
use super::params::ShrinkWrapParams;
use super::workspace::Workspace;
use crate::error::ReconstructError;
use crate::fft::Fft2d;
use crate::filter::gaussian_blur;
use crate::ops;
use crate::reduce::{masked_complex_norm, vector_max};
use crate::types::Reconstruction;
use log::debug;
use std::time::Instant;

/// Sigma never shrinks below this, so the support estimate keeps a minimum
/// amount of smoothing.
const SIGMA_FLOOR: f32 = 1.5;

/// Shrink-wrap solver owning the resolved parameters. Stateless between
/// calls: every reconstruction allocates its own workspace and FFT plans.
pub struct ShrinkWrapSolver {
    params: ShrinkWrapParams,
}

/// Reconstruct one image in place with the given parameters.
///
/// `data` holds the measured intensity on input and the recovered real
/// object on output. Convenience wrapper around [`ShrinkWrapSolver`].
pub fn reconstruct(
    data: &mut [f32],
    width: usize,
    height: usize,
    params: &ShrinkWrapParams,
) -> Result<Reconstruction, ReconstructError> {
    ShrinkWrapSolver::new(*params).reconstruct(data, width, height)
}

impl ShrinkWrapSolver {
    /// Create a solver; sentinel parameter fields resolve to their
    /// canonical defaults here.
    pub fn new(params: ShrinkWrapParams) -> Self {
        Self {
            params: params.resolved(),
        }
    }

    /// Parameters actually in effect (after sentinel resolution).
    pub fn params(&self) -> &ShrinkWrapParams {
        &self.params
    }

    /// Run the reconstruction, overwriting `data` with the recovered
    /// object.
    pub fn reconstruct(
        &self,
        data: &mut [f32],
        width: usize,
        height: usize,
    ) -> Result<Reconstruction, ReconstructError> {
        self.reconstruct_with_observer(data, width, height, &mut NoopObserver)
    }

    /// Like [`reconstruct`](Self::reconstruct), with per-cycle callbacks.
    pub fn reconstruct_with_observer(
        &self,
        data: &mut [f32],
        width: usize,
        height: usize,
        observer: &mut dyn ShrinkWrapObserver,
    ) -> Result<Reconstruction, ReconstructError> {
        let n = validate_shape(data, width, height)?;
        let p = &self.params;
        debug!(
            "ShrinkWrapSolver::reconstruct start w={} h={} cycles={} hio_cycles={}",
            width, height, p.cycles, p.hio_cycles
        );
        let total_start = Instant::now();

        let mut fft = Fft2d::new(width, height);
        let mut ws = Workspace::new(data, width, height);
        let mut sigma = p.sigma0;

        // The inverse transform of the intensity is (up to scale) the
        // autocorrelation of the object: an intensity is |F|^2, and the
        // Wiener–Khinchin relation maps that back to the autocorrelation.
        // Its blurred envelope, thresholded generously, seeds the support.
        ws.estimate.fill_real(data);
        ws.previous.as_mut_slice().copy_from_slice(ws.estimate.spectrum());
        ws.estimate.inverse_to_object(&mut fft);
        ops::complex_norm(ws.mask.as_mut_slice(), ws.estimate.object());
        gaussian_blur(&mut ws.mask, sigma);
        let abs_max = vector_max(ws.mask.as_slice());
        ops::cutoff(
            ws.mask.as_mut_slice(),
            p.autocorrelation_cutoff * abs_max,
            1.0,
            0.0,
        );

        let mut converged = false;
        let mut cycles_run = 0usize;
        let mut final_error = f32::INFINITY;
        let mut masked_pixels = 0usize;

        for cycle in 0..p.cycles {
            observer.on_cycle_begin(cycle, sigma);

            // Mask update: blur |g'| (g' should be essentially real by now,
            // the modulus guards against a stray imaginary part), then
            // binarize against a fraction of the maximum.
            ops::complex_norm(ws.mask.as_mut_slice(), ws.estimate.object());
            gaussian_blur(&mut ws.mask, sigma);
            let abs_max = vector_max(ws.mask.as_slice());
            ops::cutoff(
                ws.mask.as_mut_slice(),
                p.intensity_cutoff * abs_max,
                1.0,
                0.0,
            );
            sigma = SIGMA_FLOOR.max((1.0 - p.sigma_change) * sigma);

            for step in 0..p.hio_cycles {
                // Domain constraints in object space give the next g.
                ops::hio_constraint(
                    ws.previous.as_mut_slice(),
                    ws.estimate.object(),
                    ws.mask.as_slice(),
                    p.hio_beta,
                );

                // g -> G, enforce the measured modulus, G' -> g'.
                ws.estimate.forward_from(&mut fft, ws.previous.as_slice());
                ops::apply_modulus(ws.estimate.spectrum_mut(), ws.amplitude.as_slice());
                ws.estimate.inverse_to_object(&mut fft);

                observer.on_hio_step(cycle, step);
            }

            // A perfect reconstruction vanishes outside the support, so the
            // summed magnitude over masked pixels measures the residual.
            let norm = masked_complex_norm(ws.estimate.object(), ws.mask.as_slice(), false);
            final_error = norm.total as f32;
            masked_pixels = norm.masked;
            cycles_run = cycle + 1;
            debug!(
                "ShrinkWrapSolver::cycle {}/{} sigma={:.3} masked={} error={:.3e}",
                cycle,
                p.cycles - 1,
                sigma,
                masked_pixels,
                final_error
            );
            observer.on_cycle_end(cycle, final_error);

            if final_error < p.target_error {
                converged = true;
                break;
            }
        }

        ops::copy_from_real(data, ws.estimate.object());
        debug_assert_eq!(data.len(), n);

        let latency_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "ShrinkWrapSolver::reconstruct done converged={} cycles={} latency_ms={:.3}",
            converged, cycles_run, latency_ms
        );
        Ok(Reconstruction {
            converged,
            cycles: cycles_run,
            final_error,
            masked_pixels,
            latency_ms,
        })
    }
}

fn validate_shape(
    data: &[f32],
    width: usize,
    height: usize,
) -> Result<usize, ReconstructError> {
    if width == 0 || height == 0 {
        return Err(ReconstructError::InvalidDimensions { width, height });
    }
    let n = width
        .checked_mul(height)
        .ok_or(ReconstructError::InvalidDimensions { width, height })?;
    if data.len() != n {
        return Err(ReconstructError::LengthMismatch {
            len: data.len(),
            width,
            height,
        });
    }
    Ok(n)
}
