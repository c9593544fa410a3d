//! Separable Gaussian filtering used for support-mask estimation.
//!
//! `kernel` builds the discrete 1D weights, `blur` applies them along both
//! axes of an [`ImageF32`] in place. Borders use clamp-to-edge so the
//! unit-sum kernel still acts as a mean near the image edge instead of
//! darkening it.
//!
//! [`ImageF32`]: crate::image::ImageF32

mod blur;
mod kernel;

pub use blur::{gaussian_blur, gaussian_blur_row};
pub use kernel::{gaussian_kernel, gaussian_kernel_into, gaussian_kernel_len};
