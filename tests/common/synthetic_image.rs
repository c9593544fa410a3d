//! Synthetic objects and diffraction patterns for the end-to-end tests.

use num_complex::Complex32;
use phase_retrieval::fft::Fft2d;

/// Vertical slit of `slit_width` columns centred in a `width x height`
/// field: ones inside the slit, zeros elsewhere.
pub fn vertical_slit(width: usize, height: usize, slit_width: usize) -> Vec<f32> {
    assert!(slit_width <= width, "slit wider than the field");
    let x0 = (width - slit_width) / 2;
    let x1 = x0 + slit_width;
    let mut img = vec![0.0f32; width * height];
    for y in 0..height {
        for x in x0..x1 {
            img[y * width + x] = 1.0;
        }
    }
    img
}

/// Cluster of Gaussian blobs in the central part of the field, mimicking a
/// small group of atoms. Positions come from a tiny LCG so the image is
/// reproducible without pulling in an RNG.
pub fn atom_cluster(width: usize, height: usize) -> Vec<f32> {
    let mut img = vec![0.0f32; width * height];
    let mut state = 0x2545_f491u64;
    let mut next = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((state >> 33) as f64) / ((1u64 << 31) as f64)
    };

    let n_atoms = 12;
    let sigma = 2.5f64;
    for _ in 0..n_atoms {
        // Keep atoms inside the central quarter so the support stays
        // compact and well oversampled.
        let cx = width as f64 * (0.375 + 0.25 * next());
        let cy = height as f64 * (0.375 + 0.25 * next());
        let x_lo = (cx - 4.0 * sigma).floor().max(0.0) as usize;
        let x_hi = ((cx + 4.0 * sigma).ceil() as usize).min(width - 1);
        let y_lo = (cy - 4.0 * sigma).floor().max(0.0) as usize;
        let y_hi = ((cy + 4.0 * sigma).ceil() as usize).min(height - 1);
        for y in y_lo..=y_hi {
            for x in x_lo..=x_hi {
                let dx = x as f64 - cx;
                let dy = y as f64 - cy;
                let v = f64::exp(-(dx * dx + dy * dy) / (2.0 * sigma * sigma));
                img[y * width + x] += v as f32;
            }
        }
    }
    img
}

/// Phaseless measurement of `object`: the squared modulus of its 2D Fourier
/// transform, `I = |F|^2`.
pub fn diffraction_intensity(object: &[f32], width: usize, height: usize) -> Vec<f32> {
    let mut spectrum: Vec<Complex32> = object.iter().map(|&v| Complex32::new(v, 0.0)).collect();
    let mut fft = Fft2d::new(width, height);
    fft.forward_inplace(&mut spectrum);
    spectrum.iter().map(|z| z.norm_sqr()).collect()
}
