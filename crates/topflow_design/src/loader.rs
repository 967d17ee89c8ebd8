//! Design-description file loading.

use crate::error::DesignError;
use crate::types::DesignDescription;
use std::path::Path;

/// Loads a design description from a YAML file.
pub fn load_design(path: &Path) -> Result<DesignDescription, DesignError> {
    let content = std::fs::read_to_string(path)?;
    design_from_str(&content)
}

/// Parses a design description from a YAML string.
///
/// Useful for testing without filesystem dependencies.
pub fn design_from_str(content: &str) -> Result<DesignDescription, DesignError> {
    serde_yaml::from_str(content).map_err(|e| DesignError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "ips:\n  cpu:\n    file: cpu_core.yaml\n"
        )
        .unwrap();
        let design = load_design(file.path()).unwrap();
        assert_eq!(design.ips["cpu"].component_type(), "cpu_core");
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let err = design_from_str("ips: [not, a, mapping]").unwrap_err();
        assert!(matches!(err, DesignError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_design(Path::new("/nonexistent/design.yaml")).unwrap_err();
        assert!(matches!(err, DesignError::Io(_)));
    }

    #[test]
    fn empty_document_is_valid() {
        let design = design_from_str("{}").unwrap();
        assert!(design.ips.is_empty());
    }
}
