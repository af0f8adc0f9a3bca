use mosaic_viewer::present::{DisplaySurface, Frame, KeyCode, Wait};
use std::collections::VecDeque;

/// Display surface double that replays scripted key presses and records
/// every frame and wait it was handed.
#[derive(Default)]
pub struct ScriptedSurface {
    keys: VecDeque<Option<KeyCode>>,
    pub frames: Vec<Frame>,
    pub waits: Vec<Wait>,
}

impl ScriptedSurface {
    /// Surface that reports the given keys, one per `present` call, then
    /// "no key" forever.
    pub fn with_keys(keys: impl IntoIterator<Item = Option<KeyCode>>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            frames: Vec::new(),
            waits: Vec::new(),
        }
    }
}

impl DisplaySurface for ScriptedSurface {
    fn present(&mut self, frame: &Frame, wait: Wait) -> Result<Option<KeyCode>, String> {
        self.frames.push(frame.clone());
        self.waits.push(wait);
        Ok(self.keys.pop_front().unwrap_or(None))
    }
}
