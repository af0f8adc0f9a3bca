//! Injected destination for pipeline debug messages.
//!
//! The assembler and the viewer report what they are doing through a
//! [`DebugSink`] handed in by the caller instead of a process-wide logger,
//! so embedders pick the destination and tests can capture or suppress the
//! output.
use std::cell::RefCell;

/// Destination for debug messages emitted by the pipeline.
pub trait DebugSink {
    fn message(&self, text: &str);
}

/// Forwards messages to the `log` facade at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DebugSink for LogSink {
    fn message(&self, text: &str) {
        log::debug!("{text}");
    }
}

/// Discards every message.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DebugSink for NullSink {
    fn message(&self, _text: &str) {}
}

/// Writes messages to standard error; used by the demo driver.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrSink;

impl DebugSink for StderrSink {
    fn message(&self, text: &str) {
        eprintln!("{text}");
    }
}

/// Records messages for later inspection.
#[derive(Debug, Default)]
pub struct CaptureSink {
    messages: RefCell<Vec<String>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything recorded so far.
    pub fn take(&self) -> Vec<String> {
        self.messages.take()
    }

    /// True if any recorded message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.borrow().iter().any(|m| m.contains(needle))
    }
}

impl DebugSink for CaptureSink {
    fn message(&self, text: &str) {
        self.messages.borrow_mut().push(text.to_string());
    }
}
