//! Output sink module
//!
//! Stdout is the default destination for sent-message lines; the in-memory
//! sink captures them for inspection.

mod memory;
mod stdout;

pub use memory::MemorySink;
pub use stdout::StdoutSink;

use std::sync::Arc;

use crate::application::ports::SharedSink;

/// Create the default sink (standard output)
pub fn stdout_sink() -> SharedSink {
    Arc::new(StdoutSink::new())
}
