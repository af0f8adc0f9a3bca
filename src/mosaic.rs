//! Mosaic assembly: one padded canvas from a batch of images.
//!
//! Overview
//! - Plans the grid arrangement and the per-cell pixel geometry.
//! - Fills a canvas with the background constant, then walks the grid in
//!   row-major order copying each (optionally normalized, optionally
//!   resized) image into its placement rectangle.
//! - Cells past the end of the batch keep the background; a ragged last row
//!   is expected, not an error.
//!
//! The caller's batch is never mutated; every stage allocates fresh
//! buffers.
use crate::diagnostics::DebugSink;
use crate::image::{ImageBatch, ImageF32};
use crate::layout::{GridLayout, Placement};
use crate::normalize::{self, SCALE_MAX};
use crate::scale::{plan_cells, IdentityResize, ResizeStrategy, ScaledResize};
use serde::Deserialize;

/// Display height the mosaic is fitted to by default.
pub const DESIRED_HEIGHT: usize = 500;

/// Canvas fill for padding and unused cells: mid-gray, visually distinct
/// from both pure black and full intensity.
pub const BACKGROUND: f32 = 0.3 * 255.0;

/// Knobs for one assembly call.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MosaicOptions {
    /// Padding in pixels around every cell.
    pub padding: usize,
    /// Overall display height the grid is scaled to fit.
    pub desired_height: usize,
    /// Scale cells to fit `desired_height`; unset places images 1:1.
    pub resize_to_fit: bool,
    /// Rescale each image by its own absolute maximum before placement.
    pub normalize: bool,
    /// Fill value for padding and empty cells.
    pub background: f32,
}

impl Default for MosaicOptions {
    fn default() -> Self {
        Self {
            padding: 1,
            desired_height: DESIRED_HEIGHT,
            resize_to_fit: true,
            normalize: false,
            background: BACKGROUND,
        }
    }
}

/// Assemble the batch into one background-filled canvas.
pub fn assemble(
    batch: &ImageBatch,
    options: &MosaicOptions,
    sink: &dyn DebugSink,
) -> Result<ImageF32, String> {
    let layout = GridLayout::plan(batch.len());
    let geom = plan_cells(
        options.desired_height,
        layout,
        options.padding,
        batch.height(),
        batch.width(),
        options.resize_to_fit,
    )?;
    let (canvas_h, canvas_w) = layout.canvas_size(geom.cell_h, geom.cell_w, options.padding);
    let mut canvas = ImageF32::filled(canvas_w, canvas_h, options.background);

    let resize: Box<dyn ResizeStrategy> = if options.resize_to_fit {
        Box::new(ScaledResize::from_geometry(&geom))
    } else {
        Box::new(IdentityResize)
    };
    sink.message(&format!(
        "Assembling {} images into a {}x{} grid of {}x{} px cells",
        batch.len(),
        layout.rows,
        layout.cols,
        geom.cell_h,
        geom.cell_w
    ));

    for row in 0..layout.rows {
        for col in 0..layout.cols {
            let n = row * layout.cols + col;
            if n >= batch.len() {
                continue;
            }
            let mut cell = resize.resize(batch.get(n));
            if options.normalize {
                cell = normalize::by_magnitude(&cell, SCALE_MAX);
            }
            let place = Placement::of_cell(row, col, geom.cell_h, geom.cell_w, options.padding);
            blit(&cell, &mut canvas, &place);
        }
    }
    Ok(canvas)
}

/// Copy `cell` into `canvas` at its placement rectangle.
fn blit(cell: &ImageF32, canvas: &mut ImageF32, place: &Placement) {
    // cell and placement share the planned geometry
    debug_assert_eq!((cell.h, cell.w), (place.height, place.width));
    for y in 0..cell.h {
        let dst = canvas.row_mut(place.top + y);
        dst[place.left..place.left + cell.w].copy_from_slice(cell.row(y));
    }
}
