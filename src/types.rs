use serde::Serialize;

/// Outcome of one reconstruction run.
///
/// The reconstructed image itself is written into the caller's buffer; this
/// struct carries the bookkeeping around it.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Reconstruction {
    /// Whether the masked-region error fell below the target.
    pub converged: bool,
    /// Number of outer shrink-wrap cycles actually run.
    pub cycles: usize,
    /// Masked-region complex-norm sum after the last cycle.
    pub final_error: f32,
    /// Number of pixels outside the final support estimate.
    pub masked_pixels: usize,
    pub latency_ms: f64,
}
