//! Output sink port interface

use std::sync::Arc;

/// Port for the side effect of a sent notification
pub trait MessageSink: Send + Sync {
    /// Emit one formatted line
    fn emit(&self, line: &str);
}

/// Sink handle shared between factories and the notifiers they produce
pub type SharedSink = Arc<dyn MessageSink>;
