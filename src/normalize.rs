//! Intensity normalization into a target display range.
//!
//! Two flavors exist and they are intentionally not unified:
//! - [`by_magnitude`] divides by the largest *absolute* value. The mosaic
//!   assembler applies it per cell, so signed data ends up in
//!   `[-scale_max, scale_max]` and keeps its sign structure.
//! - [`by_peak`] divides by the largest *signed* value. The single-frame
//!   display path applies it to the whole buffer before presentation. For a
//!   buffer whose peak is negative this flips signs and amplifies rather
//!   than attenuates. Known quirk, preserved: the two call sites have always
//!   disagreed on this and downstream review workflows rely on the per-site
//!   behavior.
//!
//! An all-zero buffer divides by `EPS` alone and comes back all zero.
use crate::image::ImageF32;

/// Numerical-stability guard against division by zero.
pub const EPS: f32 = 1e-15;

/// Nominal full-intensity value of the display scale.
pub const SCALE_MAX: f32 = 255.0;

/// Rescale so the largest absolute value maps to `scale_max`.
pub fn by_magnitude(image: &ImageF32, scale_max: f32) -> ImageF32 {
    let m = image.abs_max();
    image.map(|v| v / (m + EPS) * scale_max)
}

/// Rescale so the largest signed value maps to `scale_max`.
pub fn by_peak(image: &ImageF32, scale_max: f32) -> ImageF32 {
    let m = image.max_value();
    image.map(|v| v / (m + EPS) * scale_max)
}
