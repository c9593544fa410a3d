//! Instrumentation hooks invoked by the solver.
//!
//! Applications that want to dump intermediate masks or plot error curves
//! implement [`ShrinkWrapObserver`]; the core stays free of any I/O.

/// Callbacks at the stage boundaries of one reconstruction. All methods
/// default to no-ops, so implementors override only what they need.
pub trait ShrinkWrapObserver {
    /// Start of an outer cycle, before the mask update; `sigma` is the blur
    /// scale the mask update will use.
    fn on_cycle_begin(&mut self, cycle: usize, sigma: f32) {
        let _ = (cycle, sigma);
    }

    /// One inner HIO iteration finished; the estimate buffer holds the new
    /// object-space iterate.
    fn on_hio_step(&mut self, cycle: usize, step: usize) {
        let _ = (cycle, step);
    }

    /// End of an outer cycle with the masked-region error just measured.
    fn on_cycle_end(&mut self, cycle: usize, error: f32) {
        let _ = (cycle, error);
    }
}

/// Observer that ignores everything; the default for plain reconstructions.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl ShrinkWrapObserver for NoopObserver {}
