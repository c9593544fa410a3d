//! Shrink-wrap controller driving the outer mask-update loop and the inner
//! HIO phase-retrieval loop.
//!
//! Overview
//! - Seeds the support mask from the autocorrelation of the measured
//!   intensity (inverse transform of the intensity, blurred and
//!   thresholded generously).
//! - Each outer cycle re-estimates the support from the blurred magnitude
//!   of the current object iterate, then tightens the blur scale.
//! - Each inner cycle applies the HIO feedback in object space, enforces
//!   the measured modulus in frequency space, and transforms back.
//! - Stops early once the summed magnitude outside the support falls below
//!   the target error; running out of cycles is not a failure.
//!
//! Modules
//! - `params` – tunable knobs with sentinel-aware defaulting.
//! - `pipeline` – the [`ShrinkWrapSolver`] implementation and the
//!   [`reconstruct`] driver function.
//! - `observer` – per-cycle hooks for instrumentation.
//! - `workspace` – owned working buffers, including the role-tracked
//!   estimate plane.

mod observer;
mod params;
mod pipeline;
mod workspace;

pub use observer::{NoopObserver, ShrinkWrapObserver};
pub use params::ShrinkWrapParams;
pub use pipeline::{reconstruct, ShrinkWrapSolver};
