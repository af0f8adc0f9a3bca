//! Final hop to the display surface and the quit-key mapping.
//!
//! The pipeline works on a 0–255 intensity scale; display surfaces expect
//! floats in [0, 1]. [`Presenter::present`] owns that conversion, forwards
//! the frame, and reduces whatever key came back to a single "quit
//! requested" boolean.
use crate::image::{ImageBgrF32, ImageF32};
use crate::normalize::SCALE_MAX;
use std::time::Duration;

/// How long to block waiting for a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wait {
    /// Block until a key is pressed.
    Block,
    /// Minimal one-millisecond wait; effectively a poll.
    Poll,
    /// Wait up to the given duration.
    WaitFor(Duration),
}

/// Key reported by a display surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCode {
    Escape,
    Char(char),
    /// A key the quit mapping does not distinguish.
    Other,
}

impl KeyCode {
    /// True for the keys that mean "stop showing me things".
    pub fn is_quit(&self) -> bool {
        matches!(self, KeyCode::Escape | KeyCode::Char('q'))
    }
}

/// One displayable buffer, single- or three-channel.
#[derive(Clone, Debug, PartialEq)]
pub enum Frame {
    Gray(ImageF32),
    Bgr(ImageBgrF32),
}

impl Frame {
    /// Frame size as (width, height).
    pub fn dims(&self) -> (usize, usize) {
        match self {
            Frame::Gray(img) => (img.w, img.h),
            Frame::Bgr(img) => (img.w, img.h),
        }
    }

    /// Multiply every sample by `k`, producing a new frame.
    pub fn rescaled(&self, k: f32) -> Frame {
        match self {
            Frame::Gray(img) => Frame::Gray(img.map(|v| v * k)),
            Frame::Bgr(img) => Frame::Bgr(img.map(|v| v * k)),
        }
    }
}

/// The external display primitive: renders a [0, 1] float frame to a window
/// and reports which key, if any, was pressed within the wait window.
pub trait DisplaySurface {
    fn present(&mut self, frame: &Frame, wait: Wait) -> Result<Option<KeyCode>, String>;
}

/// Thin wrapper over a [`DisplaySurface`] that handles intensity scaling
/// and the quit-key mapping.
pub struct Presenter<S: DisplaySurface> {
    surface: S,
}

impl<S: DisplaySurface> Presenter<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Borrow the wrapped surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Unwrap the surface, e.g. to inspect a test double.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Show a 0–255 scale frame; `true` means Escape or `q` was pressed.
    ///
    /// No key within the wait window is not a quit request.
    pub fn present(&mut self, frame: &Frame, wait: Wait) -> Result<bool, String> {
        let scaled = frame.rescaled(1.0 / SCALE_MAX);
        let key = self.surface.present(&scaled, wait)?;
        Ok(key.is_some_and(|k| k.is_quit()))
    }
}
