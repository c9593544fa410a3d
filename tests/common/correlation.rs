//! Pearson correlation modulo the trivial ambiguities of phase retrieval.
//!
//! A reconstruction may come back cyclically shifted, point-reflected
//! and/or sign-flipped relative to the ground truth. The comparison below
//! scores the best correlation over all of these at once, using the FFT
//! cross-correlation theorem: one transform pair evaluates every cyclic
//! shift, and dropping the conjugation evaluates the reflected object.

use num_complex::Complex32;
use phase_retrieval::fft::Fft2d;

/// Best absolute Pearson correlation between `a` and `b` over all cyclic
/// shifts and the point reflection of `b`.
pub fn best_pearson(a: &[f32], b: &[f32], width: usize, height: usize) -> f32 {
    assert_eq!(a.len(), width * height);
    assert_eq!(a.len(), b.len());
    let n = a.len();

    let mean = |v: &[f32]| v.iter().map(|&x| x as f64).sum::<f64>() / n as f64;
    let (ma, mb) = (mean(a), mean(b));

    let centered = |v: &[f32], m: f64| -> Vec<Complex32> {
        v.iter()
            .map(|&x| Complex32::new((x as f64 - m) as f32, 0.0))
            .collect()
    };
    let a0 = centered(a, ma);
    let b0 = centered(b, mb);

    let norm = |v: &[Complex32]| -> f64 {
        v.iter().map(|z| (z.re as f64) * (z.re as f64)).sum::<f64>().sqrt()
    };
    let (na, nb) = (norm(&a0), norm(&b0));
    if na == 0.0 || nb == 0.0 {
        return 0.0;
    }

    let mut fft = Fft2d::new(width, height);
    let mut fa = a0;
    let mut fb = b0;
    fft.forward_inplace(&mut fa);
    fft.forward_inplace(&mut fb);

    // Correlation against b uses conj(Fb); against the point reflection of
    // b (a real signal) the conjugation drops out.
    let mut best = 0.0f64;
    for conjugate in [true, false] {
        let mut cross: Vec<Complex32> = fa
            .iter()
            .zip(&fb)
            .map(|(&x, &y)| if conjugate { x * y.conj() } else { x * y })
            .collect();
        fft.inverse_inplace(&mut cross);
        for z in &cross {
            // inverse is unnormalized: every bin carries an extra factor n.
            let r = (z.re as f64).abs() / (n as f64 * na * nb);
            best = best.max(r);
        }
    }
    best as f32
}

#[cfg(test)]
mod tests {
    // Exercised indirectly through e2e.rs; the identities below pin the
    // normalization.
    use super::*;

    #[test]
    fn identical_arrays_correlate_to_one() {
        let (w, h) = (8usize, 6usize);
        let a: Vec<f32> = (0..w * h).map(|i| ((i * 7) % 13) as f32).collect();
        let r = best_pearson(&a, &a, w, h);
        assert!((r - 1.0).abs() < 1e-3, "self correlation {r}");
    }

    #[test]
    fn shifted_copy_correlates_to_one() {
        let (w, h) = (10usize, 10usize);
        let mut a = vec![0.0f32; w * h];
        a[3 * w + 4] = 1.0;
        a[3 * w + 5] = 2.0;
        let mut b = vec![0.0f32; w * h];
        b[7 * w + 1] = 1.0;
        b[7 * w + 2] = 2.0;
        let r = best_pearson(&a, &b, w, h);
        assert!((r - 1.0).abs() < 1e-3, "shifted correlation {r}");
    }
}
