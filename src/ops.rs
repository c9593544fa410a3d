//! Elementwise kernels over real and complex pixel arrays.
//!
//! Every operation is data-parallel over pixels and deterministic; rayon
//! splits the work when the arrays are large.

use num_complex::Complex32;
use rayon::prelude::*;

/// `dst[i] = |src[i]|`.
pub fn complex_norm(dst: &mut [f32], src: &[Complex32]) {
    debug_assert_eq!(dst.len(), src.len());
    dst.par_iter_mut()
        .zip(src.par_iter())
        .for_each(|(d, z)| *d = z.norm());
}

/// `dst[i] = src[i] + 0i`.
pub fn copy_to_real(dst: &mut [Complex32], src: &[f32]) {
    debug_assert_eq!(dst.len(), src.len());
    dst.par_iter_mut()
        .zip(src.par_iter())
        .for_each(|(d, &v)| *d = Complex32::new(v, 0.0));
}

/// `dst[i] = Re(src[i])`.
pub fn copy_from_real(dst: &mut [f32], src: &[Complex32]) {
    debug_assert_eq!(dst.len(), src.len());
    dst.par_iter_mut()
        .zip(src.par_iter())
        .for_each(|(d, z)| *d = z.re);
}

/// Modulus projection: rescale every pixel so its magnitude equals
/// `amplitude[i]` while keeping its phase.
///
/// A zero pixel has no phase to keep; it becomes `amplitude[i] + 0i` so the
/// measured modulus is honored there too.
pub fn apply_modulus(data: &mut [Complex32], amplitude: &[f32]) {
    debug_assert_eq!(data.len(), amplitude.len());
    data.par_iter_mut()
        .zip(amplitude.par_iter())
        .for_each(|(z, &a)| {
            let norm = z.norm();
            if norm > 0.0 {
                *z *= a / norm;
            } else {
                *z = Complex32::new(a, 0.0);
            }
        });
}

/// Binarize in place: pixels below `threshold` become `low`, the rest
/// become `high`.
pub fn cutoff(data: &mut [f32], threshold: f32, low: f32, high: f32) {
    data.par_iter_mut()
        .for_each(|v| *v = if *v < threshold { low } else { high });
}

/// Hybrid input–output feedback. Pixels outside the support (`mask != 0`)
/// or with a negative real part are pushed back:
/// `prev[i] -= beta * prime[i]`; everywhere else the new iterate is adopted:
/// `prev[i] = prime[i]`.
pub fn hio_constraint(prev: &mut [Complex32], prime: &[Complex32], mask: &[f32], beta: f32) {
    debug_assert_eq!(prev.len(), prime.len());
    debug_assert_eq!(prev.len(), mask.len());
    prev.par_iter_mut()
        .zip(prime.par_iter().zip(mask.par_iter()))
        .for_each(|(g, (gp, &m))| {
            if m != 0.0 || gp.re < 0.0 {
                g.re -= beta * gp.re;
                g.im -= beta * gp.im;
            } else {
                *g = *gp;
            }
        });
}

/// Uniform scaling, used to fold the 1/N factor of an unnormalized inverse
/// transform back in.
pub fn scale(data: &mut [Complex32], factor: f32) {
    data.par_iter_mut().for_each(|z| *z *= factor);
}

/// Swap quadrants so the zero-frequency component moves to the centre:
/// `data[i] <-> data[(i + N/2) % N]` along both axes.
pub fn fft_shift(data: &mut [Complex32], width: usize, height: usize) {
    debug_assert_eq!(data.len(), width * height);
    // Swapping pairs fixes two elements per operation, so only the lower
    // half of the rows needs visiting.
    for y in 0..height / 2 {
        for x in 0..width {
            let other = ((y + height / 2) % height) * width + (x + width / 2) % width;
            data.swap(y * width + x, other);
        }
    }
}
