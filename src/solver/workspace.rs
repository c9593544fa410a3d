//! Working buffers owned by one reconstruction.
//!
//! All planes share the input shape and live exactly as long as the call;
//! dropping the workspace releases everything.

use crate::fft::Fft2d;
use crate::image::{ImageC32, ImageF32};
use crate::ops;
use num_complex::Complex32;

/// Which space the estimate plane currently represents. The same buffer is
/// reused across transforms, so the role flips with every FFT.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EstimateRole {
    /// Frequency space: the current Fourier estimate `G`.
    Spectrum,
    /// Object space: the current object iterate `g'`.
    Object,
}

/// Complex estimate plane that tracks whether it holds `G` or `g'`.
///
/// Transforms go through this wrapper so the role can never silently
/// diverge from the buffer contents.
pub struct EstimateBuffer {
    plane: ImageC32,
    role: EstimateRole,
}

impl EstimateBuffer {
    fn new(w: usize, h: usize) -> Self {
        Self {
            plane: ImageC32::new(w, h),
            role: EstimateRole::Spectrum,
        }
    }

    /// Load a real array into the real parts; the result is treated as a
    /// frequency-space quantity (the pipeline seeds it with the intensity).
    pub fn fill_real(&mut self, src: &[f32]) {
        ops::copy_to_real(self.plane.as_mut_slice(), src);
        self.role = EstimateRole::Spectrum;
    }

    /// Forward-transform `src` into this buffer, which then holds `G`.
    pub fn forward_from(&mut self, fft: &mut Fft2d, src: &[Complex32]) {
        fft.forward(src, self.plane.as_mut_slice());
        self.role = EstimateRole::Spectrum;
    }

    /// Inverse-transform in place and rescale by `1 / pixel count`, after
    /// which the buffer holds `g'`.
    pub fn inverse_to_object(&mut self, fft: &mut Fft2d) {
        let norm = 1.0 / fft.len() as f32;
        fft.inverse_inplace(self.plane.as_mut_slice());
        ops::scale(self.plane.as_mut_slice(), norm);
        self.role = EstimateRole::Object;
    }

    /// Object-space view `g'`.
    pub fn object(&self) -> &[Complex32] {
        debug_assert_eq!(self.role, EstimateRole::Object, "buffer holds G, not g'");
        self.plane.as_slice()
    }

    /// Frequency-space view `G`.
    pub fn spectrum(&self) -> &[Complex32] {
        debug_assert_eq!(self.role, EstimateRole::Spectrum, "buffer holds g', not G");
        self.plane.as_slice()
    }

    /// Mutable frequency-space view `G`, for the modulus projection.
    pub fn spectrum_mut(&mut self) -> &mut [Complex32] {
        debug_assert_eq!(self.role, EstimateRole::Spectrum, "buffer holds g', not G");
        self.plane.as_mut_slice()
    }
}

/// All per-reconstruction state: the role-tracked estimate, the previous
/// object iterate, the support mask and the measured amplitude.
pub struct Workspace {
    pub estimate: EstimateBuffer,
    pub previous: ImageC32,
    pub mask: ImageF32,
    pub amplitude: ImageF32,
}

impl Workspace {
    /// Allocate buffers and derive the amplitude `|F| = sqrt(I)` from the
    /// measured intensity (negative readings clamp to zero).
    pub fn new(intensity: &[f32], w: usize, h: usize) -> Self {
        let amplitude = intensity.iter().map(|&v| v.max(0.0).sqrt()).collect();
        Self {
            estimate: EstimateBuffer::new(w, h),
            previous: ImageC32::new(w, h),
            mask: ImageF32::new(w, h),
            amplitude: ImageF32::from_vec(w, h, amplitude),
        }
    }
}
