pub mod diagnostics;
pub mod errors;
pub mod id;

pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticLevel};
pub use errors::{ConfigError, ParleyError};
pub use id::{ExchangeId, SessionId};

pub type Result<T> = std::result::Result<T, ParleyError>;
