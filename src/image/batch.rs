//! Ordered batch of equally-sized single-channel images.
//!
//! The mosaic assembler consumes batches; all validation happens at
//! construction so downstream stages can rely on a non-empty batch of
//! uniform dimensions.
use super::ImageF32;

/// N single-channel images sharing one height and width.
#[derive(Clone, Debug)]
pub struct ImageBatch {
    images: Vec<ImageF32>,
    h: usize,
    w: usize,
}

impl ImageBatch {
    /// Build a batch from owned images, validating shared dimensions.
    pub fn from_images(images: Vec<ImageF32>) -> Result<Self, String> {
        let Some(first) = images.first() else {
            return Err("Image batch must contain at least one image".to_string());
        };
        let (h, w) = (first.h, first.w);
        for (n, img) in images.iter().enumerate() {
            if img.h != h || img.w != w {
                return Err(format!(
                    "Image {n} is {}x{} but the batch is {w}x{h}",
                    img.w, img.h
                ));
            }
        }
        Ok(Self { images, h, w })
    }

    /// Build a batch from a flat row-major sample buffer.
    ///
    /// `shape` must be `[n, h, w]` or `[n, h, w, 1]`; a trailing singleton
    /// channel axis is stripped. Any other rank, a trailing channel other
    /// than 1, or a sample count that does not match the shape is rejected.
    pub fn from_shaped(shape: &[usize], data: &[f32]) -> Result<Self, String> {
        let (n, h, w) = match *shape {
            [n, h, w] => (n, h, w),
            [n, h, w, 1] => (n, h, w),
            [_, _, _, c] => {
                return Err(format!(
                    "Trailing channel axis must have length 1, got {c}"
                ));
            }
            _ => {
                return Err(format!(
                    "Batch shape must have rank 3 or 4, got {:?}",
                    shape
                ));
            }
        };
        if data.len() != n * h * w {
            return Err(format!(
                "Batch of shape {shape:?} needs {} samples, got {}",
                n * h * w,
                data.len()
            ));
        }
        let images = data
            .chunks_exact(h * w)
            .map(|chunk| ImageF32::from_vec(w, h, chunk.to_vec()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_images(images)
    }

    /// Number of images in the batch (always ≥ 1).
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// A constructed batch is never empty; kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Shared image height in pixels.
    pub fn height(&self) -> usize {
        self.h
    }

    /// Shared image width in pixels.
    pub fn width(&self) -> usize {
        self.w
    }

    /// Borrow image `n`.
    pub fn get(&self, n: usize) -> &ImageF32 {
        &self.images[n]
    }

    /// Iterate over the images in order.
    pub fn iter(&self) -> impl Iterator<Item = &ImageF32> {
        self.images.iter()
    }
}
