#![doc = include_str!("../README.md")]

pub mod config;
pub mod diagnostics;
pub mod encode;
pub mod image;
pub mod layout;
pub mod mosaic;
pub mod normalize;
pub mod present;
pub mod scale;
pub mod viewer;
pub mod window;

// --- High-level re-exports -------------------------------------------------

// Core data types.
pub use crate::image::{ImageBatch, ImageBgrF32, ImageF32};
pub use crate::layout::GridLayout;

// Assembly and display entry points.
pub use crate::mosaic::{assemble, MosaicOptions};
pub use crate::present::{DisplaySurface, Frame, KeyCode, Presenter, Wait};
pub use crate::viewer::{show_grid, show_image, GridOptions, ShowOptions};
pub use crate::window::MiniWindow;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use mosaic_viewer::prelude::*;
/// use mosaic_viewer::diagnostics::NullSink;
///
/// # fn main() -> Result<(), String> {
/// let images = vec![ImageF32::filled(10, 10, 128.0); 6];
/// let batch = ImageBatch::from_images(images)?;
///
/// let mut presenter = Presenter::new(MiniWindow::new("demo"));
/// let quit = show_grid(
///     &mut presenter,
///     &batch,
///     &GridOptions::default(),
///     Wait::Poll,
///     &NullSink,
/// )?;
/// println!("quit requested: {quit}");
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageBatch, ImageF32};
    pub use crate::present::{Presenter, Wait};
    pub use crate::viewer::{show_grid, show_image, GridOptions, ShowOptions};
    pub use crate::window::MiniWindow;
    pub use crate::{GridLayout, MosaicOptions};
}
