//! Structured diagnostics for the translation pipeline.
//!
//! Translation degrades gracefully: unsupported or unresolvable constructs
//! are dropped and reported as [`Diagnostic`]s rather than failing the run.
//! The thread-safe [`DiagnosticSink`] accumulates them while the translator
//! works, and [`TerminalRenderer`] formats them at the CLI edge. Tests
//! assert on sink contents instead of scraping log output.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{codes, Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
