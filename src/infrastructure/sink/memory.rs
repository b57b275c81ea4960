//! In-memory sink adapter

use std::sync::{Arc, Mutex, MutexGuard};

use crate::application::ports::MessageSink;

/// Collects emitted lines in memory.
///
/// Clones share the same buffer, so a test can keep one handle and pass
/// another (as a `SharedSink`) to the notifiers.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<String>> {
        // Lines stay valid after a poisoning panic
        self.lines.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of every line emitted so far
    pub fn lines(&self) -> Vec<String> {
        self.buffer().clone()
    }

    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }

    pub fn clear(&self) {
        self.buffer().clear();
    }
}

impl MessageSink for MemorySink {
    fn emit(&self, line: &str) {
        self.buffer().push(line.to_string());
    }
}
