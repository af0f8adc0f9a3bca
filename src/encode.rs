//! Signed-value visualization encoding.
//!
//! Grayscale cannot distinguish a negative sample from a smaller positive
//! one, so signed images are split across two color channels: the magnitude
//! of negative samples goes to blue, positive samples go to red, and green
//! stays empty. Sign survives exactly; the exact value survives only within
//! the display's dynamic range.
use crate::image::{ImageBgrF32, ImageF32};

/// Encode a single-channel signed image as a blue/black/red 3-channel image.
///
/// Per sample `v`: `blue = max(-v, 0)`, `green = 0`, `red = max(v, 0)`.
/// Zero renders as black.
pub fn encode(image: &ImageF32) -> ImageBgrF32 {
    let mut out = ImageBgrF32::new(image.w, image.h);
    for y in 0..image.h {
        let row = image.row(y);
        for (x, &v) in row.iter().enumerate() {
            out.set(x, y, [(-v).max(0.0), 0.0, v.max(0.0)]);
        }
    }
    out
}
