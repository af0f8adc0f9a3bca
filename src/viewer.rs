//! High-level display drivers for single frames and whole batches.
//!
//! `show_image` is the common final step: optional whole-frame
//! normalization, optional fit to the desired display height, sign encoding
//! when negative samples are present, then presentation. `show_grid`
//! assembles a mosaic first and pushes the canvas through the same step.
use crate::diagnostics::DebugSink;
use crate::encode::encode;
use crate::image::{ImageBatch, ImageF32};
use crate::mosaic::{self, MosaicOptions, DESIRED_HEIGHT};
use crate::normalize::{self, SCALE_MAX};
use crate::present::{DisplaySurface, Frame, Presenter, Wait};
use crate::scale::{ResizeStrategy, ScaledResize};
use serde::Deserialize;

/// Knobs for displaying one frame.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ShowOptions {
    /// Rescale the whole frame by its signed peak before display.
    pub normalize: bool,
    /// Scale the frame so its height matches `desired_height`.
    pub resize_to_fit: bool,
    /// Encode negative samples as blue when any are present.
    pub visualize_negative: bool,
    /// Target display height used by `resize_to_fit`.
    pub desired_height: usize,
}

impl Default for ShowOptions {
    fn default() -> Self {
        Self {
            normalize: false,
            resize_to_fit: false,
            visualize_negative: true,
            desired_height: DESIRED_HEIGHT,
        }
    }
}

/// Knobs for displaying a batch as one mosaic.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    pub mosaic: MosaicOptions,
    /// Encode negative canvas samples as blue when any are present.
    pub visualize_negative: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            mosaic: MosaicOptions::default(),
            visualize_negative: true,
        }
    }
}

/// Show one image; returns `true` if the user asked to quit.
pub fn show_image<S: DisplaySurface>(
    presenter: &mut Presenter<S>,
    image: &ImageF32,
    options: &ShowOptions,
    wait: Wait,
    sink: &dyn DebugSink,
) -> Result<bool, String> {
    let mut frame = image.clone();
    if options.normalize {
        frame = normalize::by_peak(&frame, SCALE_MAX);
    }
    if options.resize_to_fit {
        frame = ScaledResize::to_height(options.desired_height, frame.h).resize(&frame);
    }
    if options.visualize_negative && frame.has_negative() {
        sink.message("Visualizing negative values as blue (positive as red)");
        presenter.present(&Frame::Bgr(encode(&frame)), wait)
    } else {
        presenter.present(&Frame::Gray(frame), wait)
    }
}

/// Show a batch as one padded mosaic; returns `true` on a quit request.
pub fn show_grid<S: DisplaySurface>(
    presenter: &mut Presenter<S>,
    batch: &ImageBatch,
    options: &GridOptions,
    wait: Wait,
    sink: &dyn DebugSink,
) -> Result<bool, String> {
    let canvas = mosaic::assemble(batch, &options.mosaic, sink)?;
    let show = ShowOptions {
        visualize_negative: options.visualize_negative,
        desired_height: options.mosaic.desired_height,
        ..ShowOptions::default()
    };
    show_image(presenter, &canvas, &show, wait, sink)
}
