//! Owned single-channel complex image in row-major layout.
use num_complex::Complex32;

/// Complex plane holding Fourier- or object-space iterates.
#[derive(Clone, Debug)]
pub struct ImageC32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order
    pub data: Vec<Complex32>,
}

impl ImageC32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![Complex32::new(0.0, 0.0); w * h],
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Complex32 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: Complex32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    #[inline]
    pub fn as_slice(&self) -> &[Complex32] {
        &self.data
    }
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Complex32] {
        &mut self.data
    }
}
