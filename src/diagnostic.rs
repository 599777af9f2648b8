//! Diagnostic events for malformed solver and analyzer input.
//!
//! Diagnostics never affect results: the operation that emits one still returns its
//! (usually empty) result. They are published on the `log` facade under the
//! `fretwise::diagnostic` target, so applications subscribe by installing a logger.

use derive_more::Display;

// -------------------------------------------------------------------------------------------------

/// Log target of all diagnostic events.
pub const DIAGNOSTIC_TARGET: &str = "fretwise::diagnostic";

// -------------------------------------------------------------------------------------------------

/// A recoverable input problem, reported instead of raising an error.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    #[display("unknown chord root '{_0}'")]
    UnknownRoot(String),
    #[display("unknown chord quality '{_0}'")]
    UnknownQuality(String),
    #[display("chord quality '{_0}' is not a triad")]
    NotATriad(String),
    #[display("expected {expected} strings, got {got}")]
    StringCountMismatch { expected: usize, got: usize },
}

impl Diagnostic {
    /// Publish the diagnostic on the log facade.
    pub fn emit(self) {
        log::warn!(target: DIAGNOSTIC_TARGET, "{}", self);
    }
}

// -------------------------------------------------------------------------------------------------
