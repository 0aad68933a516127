//! Debug output channel.
//!
//! The transform itself is a pure function of its inputs; the optional
//! debug print goes through an injected sink so hosts and tests can
//! redirect or capture it.

use std::path::Path;

/// Receiver for the resolved output of one transform invocation.
pub trait DebugSink {
    /// Called once per invocation, after serialization, with the source
    /// file path supplied by the host and the final output.
    fn report(&mut self, filename: &str, output: &str);
}

/// Prints the output to stdout, bracketed by per-file markers.
pub struct ConsoleSink;

impl DebugSink for ConsoleSink {
    fn report(&mut self, filename: &str, output: &str) {
        let name = base_name(filename);
        println!("---------- Begin {name} ----------");
        println!("{output}");
        println!("---------- End {name} ----------");
    }
}

/// Base name of the host-supplied path; falls back to the raw string for
/// paths with no final component.
pub(crate) fn base_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}
