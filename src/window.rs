//! `minifb`-backed display surface.
//!
//! The window is created lazily at the size of the first frame and
//! recreated whenever the frame size changes. Frames arrive as floats in
//! [0, 1] and are packed into the 0RGB framebuffer format `minifb` expects.
//! Closing the window is reported as Escape so blocking callers always get
//! an answer.
use crate::present::{DisplaySurface, Frame, KeyCode, Wait};
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use std::time::{Duration, Instant};

/// Window-based [`DisplaySurface`] for interactive inspection.
pub struct MiniWindow {
    title: String,
    window: Option<Window>,
}

impl MiniWindow {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            window: None,
        }
    }

    fn ensure_window(&mut self, w: usize, h: usize) -> Result<&mut Window, String> {
        let stale = self
            .window
            .as_ref()
            .is_none_or(|win| win.get_size() != (w, h));
        if stale {
            let mut win = Window::new(&self.title, w, h, WindowOptions::default())
                .map_err(|e| format!("Failed to open a {w}x{h} window: {e}"))?;
            win.set_target_fps(60);
            self.window = Some(win);
        }
        self.window
            .as_mut()
            .ok_or_else(|| "Window unavailable".to_string())
    }
}

impl DisplaySurface for MiniWindow {
    fn present(&mut self, frame: &Frame, wait: Wait) -> Result<Option<KeyCode>, String> {
        let (w, h) = frame.dims();
        let buffer = pack_0rgb(frame);
        let window = self.ensure_window(w, h)?;

        let deadline = match wait {
            Wait::Block => None,
            Wait::Poll => Some(Instant::now() + Duration::from_millis(1)),
            Wait::WaitFor(d) => Some(Instant::now() + d),
        };
        loop {
            window
                .update_with_buffer(&buffer, w, h)
                .map_err(|e| format!("Failed to present frame: {e}"))?;
            if !window.is_open() {
                return Ok(Some(KeyCode::Escape));
            }
            if let Some(key) = window.get_keys_pressed(KeyRepeat::No).into_iter().next() {
                return Ok(Some(map_key(key)));
            }
            if deadline.is_some_and(|t| Instant::now() >= t) {
                return Ok(None);
            }
        }
    }
}

/// Pack a [0, 1] float frame into minifb's 0RGB u32 format.
fn pack_0rgb(frame: &Frame) -> Vec<u32> {
    let quantize = |v: f32| (v * 255.0).clamp(0.0, 255.0) as u32;
    match frame {
        Frame::Gray(img) => img
            .data
            .iter()
            .map(|&v| {
                let g = quantize(v);
                (g << 16) | (g << 8) | g
            })
            .collect(),
        Frame::Bgr(img) => img
            .data
            .chunks_exact(3)
            .map(|bgr| (quantize(bgr[2]) << 16) | (quantize(bgr[1]) << 8) | quantize(bgr[0]))
            .collect(),
    }
}

fn map_key(key: Key) -> KeyCode {
    match key {
        Key::Escape => KeyCode::Escape,
        Key::Q => KeyCode::Char('q'),
        _ => KeyCode::Other,
    }
}
