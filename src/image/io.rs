//! I/O helpers for the demo driver and debug artifacts.
//!
//! - `load_grayscale_f32`: read a PNG/JPEG/etc. into a float image on the
//!   0–255 scale the pipeline operates on.
//! - `save_grayscale_f32`: write an `ImageF32` to a grayscale PNG.
//! - `save_bgr_f32`: write a sign-encoded `ImageBgrF32` to an RGB PNG.
use super::{ImageBgrF32, ImageF32};
use image::{GrayImage, Luma, Rgb, RgbImage};
use std::fs;
use std::path::Path;

/// Load an image from disk, convert to grayscale and lift to f32 in [0, 255].
pub fn load_grayscale_f32(path: &Path) -> Result<ImageF32, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let w = img.width() as usize;
    let h = img.height() as usize;
    let data = img.into_raw().into_iter().map(|v| v as f32).collect();
    ImageF32::from_vec(w, h, data)
}

/// Save a float image to a grayscale PNG, clamping values to [0, 255].
pub fn save_grayscale_f32(image: &ImageF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(image.w as u32, image.h as u32);
    for y in 0..image.h {
        let row = image.row(y);
        for (x, &px) in row.iter().enumerate() {
            let v = px.clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a 3-channel float image to an RGB PNG, clamping values to [0, 255].
pub fn save_bgr_f32(image: &ImageBgrF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = RgbImage::new(image.w as u32, image.h as u32);
    for y in 0..image.h {
        for x in 0..image.w {
            let [b, g, r] = image.get(x, y);
            let px = Rgb([
                r.clamp(0.0, 255.0) as u8,
                g.clamp(0.0, 255.0) as u8,
                b.clamp(0.0, 255.0) as u8,
            ]);
            out.put_pixel(x as u32, y as u32, px);
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
