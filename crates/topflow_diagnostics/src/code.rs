//! Diagnostic codes with category prefixes for structured identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a diagnostic code, determining its prefix letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Error diagnostics, prefixed with `E`.
    Error,
    /// Warning diagnostics, prefixed with `W`.
    Warning,
}

impl Category {
    /// Returns the single-character prefix for this category.
    pub fn prefix(self) -> char {
        match self {
            Category::Error => 'E',
            Category::Warning => 'W',
        }
    }
}

/// A structured diagnostic code combining a category prefix and a numeric
/// identifier, displayed as e.g. `W101` or `E001`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The category of this diagnostic.
    pub category: Category,
    /// The numeric identifier within the category.
    pub number: u16,
}

impl DiagnosticCode {
    /// Creates a new diagnostic code.
    pub const fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}

/// Well-known codes emitted by the translation pipeline.
///
/// The `W1xx` block covers unsupported constructs, `W2xx` unresolvable
/// references, and `W3xx` connection legality.
pub mod codes {
    use super::{Category, DiagnosticCode};

    /// The design contains hierarchies, which are not translated.
    pub const UNSUPPORTED_HIERARCHY: DiagnosticCode =
        DiagnosticCode::new(Category::Warning, 101);
    /// The design contains interconnects, which are not translated.
    pub const UNSUPPORTED_INTERCONNECT: DiagnosticCode =
        DiagnosticCode::new(Category::Warning, 102);
    /// An IP core references a type absent from the node catalog.
    pub const UNKNOWN_NODE_TYPE: DiagnosticCode = DiagnosticCode::new(Category::Warning, 201);
    /// A connection names an instance with no corresponding node.
    pub const UNKNOWN_NODE: DiagnosticCode = DiagnosticCode::new(Category::Warning, 202);
    /// A connection names an interface absent from its node.
    pub const UNKNOWN_INTERFACE: DiagnosticCode = DiagnosticCode::new(Category::Warning, 203);
    /// A boundary connection names an undeclared external signal.
    pub const UNKNOWN_EXTERNAL: DiagnosticCode = DiagnosticCode::new(Category::Warning, 204);
    /// A parameter override names a property the node does not declare.
    pub const UNKNOWN_PARAMETER: DiagnosticCode = DiagnosticCode::new(Category::Warning, 205);
    /// Two endpoints with incompatible directions were asked to connect.
    pub const DIRECTION_MISMATCH: DiagnosticCode = DiagnosticCode::new(Category::Warning, 301);
}
