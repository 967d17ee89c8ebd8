//! Structured diagnostic messages with severity, codes, and notes.

use crate::code::DiagnosticCode;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// A structured diagnostic message.
///
/// Diagnostics name the design entities involved in their message rather
/// than carrying source spans; the translated documents are in-memory
/// structures, not source text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The unique code identifying the type of diagnostic.
    pub code: DiagnosticCode,
    /// The main diagnostic message.
    pub message: String,
    /// Explanatory footnotes (e.g., "note: ...").
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Creates a new error diagnostic with the given code and message.
    pub fn error(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    /// Creates a new warning diagnostic with the given code and message.
    pub fn warning(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    /// Adds a note to this diagnostic.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::codes;

    #[test]
    fn create_warning() {
        let diag = Diagnostic::warning(codes::UNKNOWN_NODE, "node 'dma0' not found");
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.message, "node 'dma0' not found");
        assert_eq!(format!("{}", diag.code), "W202");
    }

    #[test]
    fn create_error() {
        let diag = Diagnostic::error(
            crate::code::DiagnosticCode::new(crate::code::Category::Error, 1),
            "malformed design",
        );
        assert!(diag.severity.is_error());
    }

    #[test]
    fn with_note_appends() {
        let diag = Diagnostic::warning(codes::UNKNOWN_PARAMETER, "parameter 'depth' not found")
            .with_note("declared parameters: width, count");
        assert_eq!(diag.notes.len(), 1);
    }
}
