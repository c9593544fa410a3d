pub mod correlation;
pub mod synthetic_image;
