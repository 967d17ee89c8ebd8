//! Error types for design-description loading.

/// Errors that can occur when loading a design-description document.
///
/// A parse failure here is the structural-validation boundary: documents
/// that do not match the documented shape are rejected outright instead of
/// producing a partial translation.
#[derive(Debug, thiserror::Error)]
pub enum DesignError {
    /// An I/O error occurred while reading the design file.
    #[error("failed to read design description: {0}")]
    Io(#[from] std::io::Error),

    /// The YAML content did not match the design-description shape.
    #[error("failed to parse design description: {0}")]
    Parse(String),
}
