//! Near-square grid arrangement for a batch of N images.
//!
//! Design
//! - `rows = floor(sqrt(N))`, `cols = ceil(N / rows)`, so `cols >= rows` and
//!   the mosaic comes out wider than tall, matching typical displays.
//! - Cells are addressed in row-major order; indices past N stay empty and
//!   keep the canvas background.
use serde::Serialize;

/// Rows × columns arrangement chosen for a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
}

impl GridLayout {
    /// Choose the most square layout with `cols >= rows` for `n` images.
    ///
    /// `n` must be positive; an empty batch is a caller error.
    pub fn plan(n: usize) -> Self {
        assert!(n > 0, "grid layout requires at least one image");
        let rows = (n as f64).sqrt().floor() as usize;
        let cols = n.div_ceil(rows);
        Self { rows, cols }
    }

    /// Total number of cells, including empty trailing ones.
    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Canvas size (height, width) for the given cell size and padding.
    ///
    /// Every cell is framed by `padding` pixels on all sides, with shared
    /// borders between neighbours, hence the `rows + 1` / `cols + 1` terms.
    pub fn canvas_size(&self, cell_h: usize, cell_w: usize, padding: usize) -> (usize, usize) {
        (
            self.rows * cell_h + (self.rows + 1) * padding,
            self.cols * cell_w + (self.cols + 1) * padding,
        )
    }
}

/// Half-open placement rectangle of one grid cell within the canvas.
///
/// Derived on demand from the cell coordinates; never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// First canvas row covered by the cell
    pub top: usize,
    /// First canvas column covered by the cell
    pub left: usize,
    /// Cell height in pixels
    pub height: usize,
    /// Cell width in pixels
    pub width: usize,
}

impl Placement {
    /// Rectangle of grid cell (`row`, `col`) for the given geometry.
    pub fn of_cell(
        row: usize,
        col: usize,
        cell_h: usize,
        cell_w: usize,
        padding: usize,
    ) -> Self {
        Self {
            top: (row + 1) * padding + row * cell_h,
            left: (col + 1) * padding + col * cell_w,
            height: cell_h,
            width: cell_w,
        }
    }
}
