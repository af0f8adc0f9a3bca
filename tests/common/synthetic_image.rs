use mosaic_viewer::image::{ImageBatch, ImageF32};

/// Constant-valued image, the simplest cell payload to assert on.
pub fn constant_image(w: usize, h: usize, value: f32) -> ImageF32 {
    ImageF32::filled(w, h, value)
}

/// Batch of constant images, one per value.
pub fn constant_batch(w: usize, h: usize, values: &[f32]) -> ImageBatch {
    let images = values.iter().map(|&v| constant_image(w, h, v)).collect();
    ImageBatch::from_images(images).expect("constant batch is well-formed")
}

/// Image whose left half is `-mag` and right half `+mag`, exercising both
/// signs in one buffer.
pub fn split_sign_image(w: usize, h: usize, mag: f32) -> ImageF32 {
    let mut img = ImageF32::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let v = if x < w / 2 { -mag } else { mag };
            img.set(x, y, v);
        }
    }
    img
}
