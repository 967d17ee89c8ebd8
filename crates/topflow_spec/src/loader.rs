//! Node-catalog file loading.

use crate::catalog::Specification;
use crate::error::SpecError;
use std::path::Path;

/// Loads a node catalog from a file.
///
/// Files with a `.yaml` or `.yml` extension are parsed as YAML; anything
/// else is treated as JSON, the format the graph-editor front-end speaks.
pub fn load_specification(path: &Path) -> Result<Specification, SpecError> {
    let content = std::fs::read_to_string(path)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => specification_from_yaml(&content),
        _ => specification_from_json(&content),
    }
}

/// Parses a node catalog from a JSON string.
pub fn specification_from_json(content: &str) -> Result<Specification, SpecError> {
    serde_json::from_str(content).map_err(|e| SpecError::Parse(e.to_string()))
}

/// Parses a node catalog from a YAML string.
pub fn specification_from_yaml(content: &str) -> Result<Specification, SpecError> {
    serde_yaml::from_str(content).map_err(|e| SpecError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const JSON_SPEC: &str = r#"{"nodes": [{"type": "cpu_core", "properties": [],
        "interfaces": [{"name": "clk", "direction": "input"}]}]}"#;

    #[test]
    fn load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spec.json");
        std::fs::write(&path, JSON_SPEC).unwrap();
        let spec = load_specification(&path).unwrap();
        assert!(spec.node_by_type("cpu_core").is_some());
    }

    #[test]
    fn load_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spec.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            "nodes:\n  - type: cpu_core\n    interfaces:\n      - name: clk\n        direction: input\n"
        )
        .unwrap();
        let spec = load_specification(&path).unwrap();
        assert_eq!(spec.node_by_type("cpu_core").unwrap().interfaces.len(), 1);
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = specification_from_json("{nodes: oops").unwrap_err();
        assert!(matches!(err, SpecError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_specification(Path::new("/nonexistent/spec.json")).unwrap_err();
        assert!(matches!(err, SpecError::Io(_)));
    }
}
