//! Cell geometry planning and the nearest-neighbor resize primitive.
//!
//! Design
//! - The scale factor is derived from the desired display height alone and
//!   then applied to both axes, so aspect ratio is always preserved; the
//!   width scale is never computed independently.
//! - Resizing uses nearest-neighbor sampling. The inputs are character
//!   glyphs and filter maps with hard pixel edges; any interpolating filter
//!   would invent intermediate intensities and muddy the sign encoding.
use crate::image::ImageF32;
use crate::layout::GridLayout;

/// Per-cell pixel size and the scale factors that produce it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellGeometry {
    /// Cell height in pixels
    pub cell_h: usize,
    /// Cell width in pixels
    pub cell_w: usize,
    /// Vertical scale factor from source to cell
    pub scale_y: f32,
    /// Horizontal scale factor, always equal to `scale_y`
    pub scale_x: f32,
}

impl CellGeometry {
    /// Identity geometry: cells keep the source size, factors are 1.
    pub fn identity(src_h: usize, src_w: usize) -> Self {
        Self {
            cell_h: src_h,
            cell_w: src_w,
            scale_y: 1.0,
            scale_x: 1.0,
        }
    }
}

/// Plan the cell size that fits `layout` into `desired_height` pixels.
///
/// With `resize_to_fit` unset the sources are placed unscaled. Otherwise the
/// scale is `(desired_height - (rows + 1) * padding) / (rows * src_h)`; a
/// display height that cannot even cover the padding budget makes the scale
/// non-positive and is rejected before any resize is attempted.
pub fn plan_cells(
    desired_height: usize,
    layout: GridLayout,
    padding: usize,
    src_h: usize,
    src_w: usize,
    resize_to_fit: bool,
) -> Result<CellGeometry, String> {
    if !resize_to_fit {
        return Ok(CellGeometry::identity(src_h, src_w));
    }
    let total_row_padding = (layout.rows + 1) * padding;
    let scale = (desired_height as f32 - total_row_padding as f32)
        / (layout.rows * src_h) as f32;
    if scale <= 0.0 {
        return Err(format!(
            "Display height {desired_height} leaves no room for {} rows after {total_row_padding} px of padding",
            layout.rows
        ));
    }
    Ok(CellGeometry {
        cell_h: (scale * src_h as f32).round() as usize,
        cell_w: (scale * src_w as f32).round() as usize,
        scale_y: scale,
        scale_x: scale,
    })
}

/// Resize step applied to every image before placement.
///
/// Selected once per assembly call instead of branching per image.
pub trait ResizeStrategy {
    fn resize(&self, image: &ImageF32) -> ImageF32;
}

/// Leaves images untouched (mosaic with `resize_to_fit` disabled).
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityResize;

impl ResizeStrategy for IdentityResize {
    fn resize(&self, image: &ImageF32) -> ImageF32 {
        image.clone()
    }
}

/// Nearest-neighbor resize by independent horizontal/vertical factors.
#[derive(Clone, Copy, Debug)]
pub struct ScaledResize {
    scale_x: f32,
    scale_y: f32,
}

impl ScaledResize {
    /// Resize by the given factors; both must be positive.
    pub fn new(scale_x: f32, scale_y: f32) -> Self {
        assert!(
            scale_x > 0.0 && scale_y > 0.0,
            "resize factors must be positive, got {scale_x}x{scale_y}"
        );
        Self { scale_x, scale_y }
    }

    /// Resize with the factors planned for a mosaic cell.
    pub fn from_geometry(geom: &CellGeometry) -> Self {
        Self::new(geom.scale_x, geom.scale_y)
    }

    /// Uniform factor that brings `src_h` rows to `desired_height`.
    pub fn to_height(desired_height: usize, src_h: usize) -> Self {
        let s = desired_height as f32 / src_h as f32;
        Self::new(s, s)
    }
}

impl ResizeStrategy for ScaledResize {
    fn resize(&self, image: &ImageF32) -> ImageF32 {
        let out_w = ((image.w as f32 * self.scale_x).round() as usize).max(1);
        let out_h = ((image.h as f32 * self.scale_y).round() as usize).max(1);
        let mut out = ImageF32::new(out_w, out_h);
        for y in 0..out_h {
            let sy = ((y as f32 / self.scale_y) as usize).min(image.h - 1);
            for x in 0..out_w {
                let sx = ((x as f32 / self.scale_x) as usize).min(image.w - 1);
                out.set(x, y, image.get(sx, sy));
            }
        }
        out
    }
}
