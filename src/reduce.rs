//! Deterministic reductions over large pixel arrays.
//!
//! The thresholding and convergence logic of the solver depends on these
//! being reproducible run-to-run, so sums use a fixed pairwise tree rather
//! than a parallel fold.

use num_complex::Complex32;

/// Below this length a sum is accumulated sequentially; above it the slice
/// is split in half and both halves reduced recursively.
const PAIRWISE_BASE: usize = 256;

/// Maximum element. `data` must be non-empty.
pub fn vector_max(data: &[f32]) -> f32 {
    assert!(!data.is_empty(), "reduction over empty slice");
    data.iter().copied().fold(f32::NEG_INFINITY, f32::max)
}

/// Minimum element. `data` must be non-empty.
pub fn vector_min(data: &[f32]) -> f32 {
    assert!(!data.is_empty(), "reduction over empty slice");
    data.iter().copied().fold(f32::INFINITY, f32::min)
}

/// Pairwise-tree sum; error grows like O(log N) in ulps instead of O(N).
pub fn vector_sum(data: &[f32]) -> f32 {
    if data.len() <= PAIRWISE_BASE {
        return data.iter().sum();
    }
    let mid = data.len() / 2;
    vector_sum(&data[..mid]) + vector_sum(&data[mid..])
}

/// Result of [`masked_complex_norm`]: summed magnitude over the selected
/// pixels and how many pixels were selected.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MaskedNorm {
    pub total: f64,
    pub masked: usize,
}

/// Sum of complex magnitudes over pixels where `mask` is nonzero (or zero,
/// with `invert`), plus the count of those pixels.
///
/// At a perfect reconstruction the object vanishes outside the support, so
/// this total is the residual the solver tests for convergence. Magnitudes
/// accumulate in f64 so integer-valued moduli stay exact for any realistic
/// pixel count.
pub fn masked_complex_norm(data: &[Complex32], mask: &[f32], invert: bool) -> MaskedNorm {
    debug_assert_eq!(data.len(), mask.len());
    let mut out = MaskedNorm::default();
    for (z, &m) in data.iter().zip(mask) {
        let selected = (m != 0.0) != invert;
        if selected {
            out.total += z.norm() as f64;
            out.masked += 1;
        }
    }
    out
}
