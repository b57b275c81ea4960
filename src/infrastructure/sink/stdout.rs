//! Standard output sink adapter

use crate::application::ports::MessageSink;

/// Writes each line to standard output
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageSink for StdoutSink {
    fn emit(&self, line: &str) {
        println!("{}", line);
    }
}
