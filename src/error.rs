//! Error type returned by the reconstruction entry points.
use thiserror::Error;

/// Invalid-argument failures detected before any work is done.
///
/// Numerical non-convergence is deliberately *not* an error: the solver
/// returns its best estimate with [`Reconstruction::converged`] set to
/// `false` instead.
///
/// [`Reconstruction::converged`]: crate::types::Reconstruction::converged
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReconstructError {
    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("data length {len} does not match image dimensions {width}x{height}")]
    LengthMismatch {
        len: usize,
        width: usize,
        height: usize,
    },
}
