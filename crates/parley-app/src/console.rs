//! Terminal UI sink.

use std::io::Write;

use parley_ai::ConversationSink;
use parley_common::Diagnostic;

/// Prints the transcript to stdout and diagnostics to stderr.
pub struct ConsoleSink;

impl ConversationSink for ConsoleSink {
    fn on_message(&mut self, role: &str, text: &str) {
        let _ = writeln!(std::io::stdout().lock(), "{}", transcript_line(role, text));
    }

    fn on_diagnostic(&mut self, diagnostic: &Diagnostic) {
        let _ = writeln!(std::io::stderr().lock(), "{diagnostic}");
    }
}

pub fn transcript_line(role: &str, text: &str) -> String {
    format!("{role}: {text}")
}
