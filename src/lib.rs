#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod error;
pub mod image;
pub mod solver;
pub mod types;

// Building blocks – still public, but considered unstable internals.
pub mod fft;
pub mod filter;
pub mod ops;
pub mod reduce;

// --- High-level re-exports -------------------------------------------------

// Main entry points: driver function + solver + results.
pub use crate::error::ReconstructError;
pub use crate::solver::{
    reconstruct, NoopObserver, ShrinkWrapObserver, ShrinkWrapParams, ShrinkWrapSolver,
};
pub use crate::types::Reconstruction;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use phase_retrieval::prelude::*;
///
/// let (w, h) = (32usize, 32usize);
/// let mut intensity = vec![0.0f32; w * h];
/// let report = reconstruct(&mut intensity, w, h, &ShrinkWrapParams::default()).unwrap();
/// println!("cycles={} error={:.3e}", report.cycles, report.final_error);
/// ```
pub mod prelude {
    pub use crate::image::{ImageC32, ImageF32};
    pub use crate::{reconstruct, Reconstruction, ShrinkWrapParams};
}
