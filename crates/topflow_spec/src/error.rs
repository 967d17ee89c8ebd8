//! Error types for node-catalog loading.

/// Errors that can occur when loading a node-catalog document.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    /// An I/O error occurred while reading the catalog file.
    #[error("failed to read specification: {0}")]
    Io(#[from] std::io::Error),

    /// The content did not match the catalog shape.
    #[error("failed to parse specification: {0}")]
    Parse(String),
}
