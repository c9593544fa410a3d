//! 2D complex-to-complex FFT built from planned 1D row and column passes.
//!
//! Both directions are unnormalized, matching the underlying rustfft
//! convention: a forward transform followed by an inverse one returns the
//! input scaled by `width * height`. Callers that need unit scaling divide
//! by the pixel count themselves.

use num_complex::Complex32;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// Plan bundle for a fixed `width x height` shape.
///
/// Plans are built once (typically per reconstruction) and reused for every
/// transform of that shape; scratch buffers are owned here so repeated
/// execution does not allocate.
pub struct Fft2d {
    width: usize,
    height: usize,
    row_forward: Arc<dyn Fft<f32>>,
    row_inverse: Arc<dyn Fft<f32>>,
    col_forward: Arc<dyn Fft<f32>>,
    col_inverse: Arc<dyn Fft<f32>>,
    col_buf: Vec<Complex32>,
    scratch: Vec<Complex32>,
}

impl Fft2d {
    /// Plan forward and inverse transforms for the given shape.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "transform shape must be positive");
        let mut planner = FftPlanner::new();
        let row_forward = planner.plan_fft_forward(width);
        let row_inverse = planner.plan_fft_inverse(width);
        let col_forward = planner.plan_fft_forward(height);
        let col_inverse = planner.plan_fft_inverse(height);

        let scratch_len = row_forward
            .get_inplace_scratch_len()
            .max(row_inverse.get_inplace_scratch_len())
            .max(col_forward.get_inplace_scratch_len())
            .max(col_inverse.get_inplace_scratch_len());

        Self {
            width,
            height,
            row_forward,
            row_inverse,
            col_forward,
            col_inverse,
            col_buf: vec![Complex32::new(0.0, 0.0); height],
            scratch: vec![Complex32::new(0.0, 0.0); scratch_len],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels, which is also the forward+inverse scaling factor.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Out-of-place forward transform.
    pub fn forward(&mut self, src: &[Complex32], dst: &mut [Complex32]) {
        dst.copy_from_slice(src);
        self.forward_inplace(dst);
    }

    /// In-place forward transform.
    pub fn forward_inplace(&mut self, data: &mut [Complex32]) {
        self.execute(data, true);
    }

    /// Out-of-place inverse transform (unnormalized).
    pub fn inverse(&mut self, src: &[Complex32], dst: &mut [Complex32]) {
        dst.copy_from_slice(src);
        self.inverse_inplace(dst);
    }

    /// In-place inverse transform (unnormalized).
    pub fn inverse_inplace(&mut self, data: &mut [Complex32]) {
        self.execute(data, false);
    }

    fn execute(&mut self, data: &mut [Complex32], forward: bool) {
        assert_eq!(
            data.len(),
            self.width * self.height,
            "buffer does not match planned shape"
        );
        let (row_plan, col_plan) = if forward {
            (&self.row_forward, &self.col_forward)
        } else {
            (&self.row_inverse, &self.col_inverse)
        };

        for row in data.chunks_exact_mut(self.width) {
            row_plan.process_with_scratch(row, &mut self.scratch);
        }

        // Columns go through a gather/transform/scatter pass with a single
        // reused column buffer.
        for x in 0..self.width {
            for y in 0..self.height {
                self.col_buf[y] = data[y * self.width + x];
            }
            col_plan.process_with_scratch(&mut self.col_buf, &mut self.scratch);
            for y in 0..self.height {
                data[y * self.width + x] = self.col_buf[y];
            }
        }
    }
}
