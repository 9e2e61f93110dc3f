//! Diagnostic signals raised by a conversation, kept apart from the
//! conversational transcript itself.

use std::fmt;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Warning,
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Warning => "warning",
            Self::Error => "error",
        };
        f.write_str(s)
    }
}

/// What went wrong during an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The request never produced a usable HTTP reply.
    Transport,
    /// A reply arrived but did not have the expected shape.
    Parse,
}

/// One diagnostic emitted by the conversation controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub kind: DiagnosticKind,
    pub detail: String,
}

impl Diagnostic {
    /// Transport failures are reported at error level.
    pub fn transport(detail: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            kind: DiagnosticKind::Transport,
            detail: detail.into(),
        }
    }

    /// Unexpected reply shapes are reported at warning level.
    pub fn parse(detail: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            kind: DiagnosticKind::Parse,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.detail)
    }
}
