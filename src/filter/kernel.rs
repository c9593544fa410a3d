//! Discrete 1D Gaussian kernel construction.

/// Kernel half-width per unit sigma. Chosen so the truncated tail stays
/// below single-precision tolerance.
const HALF_WIDTH_PER_SIGMA: f64 = 2.884402748387961466;

/// Required kernel length for `sigma`: `2n + 1` with
/// `n = ceil(HALF_WIDTH_PER_SIGMA * sigma - 0.5)`.
///
/// `sigma == 0` degenerates to a single-tap identity kernel.
pub fn gaussian_kernel_len(sigma: f32) -> usize {
    assert!(sigma >= 0.0, "sigma must be non-negative");
    if sigma == 0.0 {
        return 1;
    }
    let n = (HALF_WIDTH_PER_SIGMA * sigma as f64 - 0.5).ceil().max(0.0) as usize;
    2 * n + 1
}

/// Build the normalized kernel as an owned vector.
pub fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    let len = gaussian_kernel_len(sigma);
    let mut kernel = vec![0.0f32; len];
    let written = gaussian_kernel_into(sigma, &mut kernel);
    debug_assert_eq!(written, len);
    kernel
}

/// Write the normalized kernel into `out` and return its length.
///
/// If `out` is shorter than the required length, nothing is written and the
/// required length is returned, so callers can size a buffer with a first
/// query call.
pub fn gaussian_kernel_into(sigma: f32, out: &mut [f32]) -> usize {
    let len = gaussian_kernel_len(sigma);
    if out.len() < len {
        return len;
    }
    if len == 1 {
        out[0] = 1.0;
        return 1;
    }

    let n = (len / 2) as isize;
    let sigma = sigma as f64;
    let norm = 1.0 / (f64::sqrt(2.0 * std::f64::consts::PI) * sigma);
    let inv_two_sigma_sq = 1.0 / (2.0 * sigma * sigma);

    // Weights are built in f64 and normalized by their own sum, which
    // corrects for the truncated tails. Symmetric taps come out bit-equal
    // because they share the same i^2.
    let mut weights = vec![0.0f64; len];
    let mut sum = 0.0f64;
    for (k, w) in weights.iter_mut().enumerate() {
        let i = (k as isize - n) as f64;
        *w = norm * f64::exp(-i * i * inv_two_sigma_sq);
        sum += *w;
    }
    for (k, w) in weights.iter().enumerate() {
        out[k] = (w / sum) as f32;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_sums_to_one_and_is_symmetric() {
        for &sigma in &[0.5f32, 1.0, 3.0, 8.0] {
            let k = gaussian_kernel(sigma);
            assert_eq!(k.len() % 2, 1, "kernel length must be odd");
            let sum: f32 = k.iter().sum();
            assert!(
                (sum - 1.0).abs() < 1e-6,
                "sigma={sigma}: kernel sum {sum} not 1"
            );
            let n = k.len() / 2;
            for i in 0..=n {
                assert_eq!(k[n - i], k[n + i], "sigma={sigma}: asymmetric at {i}");
            }
            // Center is the largest tap.
            assert!(k.iter().all(|&w| w <= k[n]));
        }
    }

    #[test]
    fn zero_sigma_is_identity() {
        assert_eq!(gaussian_kernel(0.0), vec![1.0]);
        assert_eq!(gaussian_kernel_len(0.0), 1);
    }

    #[test]
    fn expected_lengths() {
        // n = ceil(2.8844.. * sigma - 0.5)
        assert_eq!(gaussian_kernel_len(1.0), 7);
        assert_eq!(gaussian_kernel_len(3.0), 19);
    }

    #[test]
    fn short_buffer_reports_required_length() {
        let mut buf = [0.5f32; 3];
        let needed = gaussian_kernel_into(3.0, &mut buf);
        assert_eq!(needed, 19);
        // Query mode must not touch the buffer.
        assert_eq!(buf, [0.5f32; 3]);
    }
}
