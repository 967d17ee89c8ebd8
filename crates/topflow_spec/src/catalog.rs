//! Typed structure of a node-catalog document.

use serde::{Deserialize, Serialize};
use topflow_common::{Direction, ElementValue};

/// A property declared by a node template: a name and its default value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyTemplate {
    /// The property name.
    pub name: String,
    /// The value the property takes when the design supplies no override.
    pub default: ElementValue,
}

/// An interface declared by a node template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterfaceTemplate {
    /// The interface name.
    pub name: String,
    /// The interface direction.
    pub direction: Direction,
}

/// The declared shape of one component type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeTemplate {
    /// The component type name this template describes.
    #[serde(rename = "type")]
    pub node_type: String,
    /// Declared properties, in declaration order.
    #[serde(default)]
    pub properties: Vec<PropertyTemplate>,
    /// Declared interfaces, in declaration order.
    #[serde(default)]
    pub interfaces: Vec<InterfaceTemplate>,
}

/// A catalog of node templates keyed by component type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Specification {
    /// The declared node templates.
    #[serde(default)]
    pub nodes: Vec<NodeTemplate>,
}

impl Specification {
    /// Looks up the template for a component type, if the catalog declares
    /// one.
    pub fn node_by_type(&self, node_type: &str) -> Option<&NodeTemplate> {
        self.nodes.iter().find(|node| node.node_type == node_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Specification {
        serde_json::from_str(
            r#"{
                "nodes": [
                    {
                        "type": "axi_dma",
                        "properties": [
                            {"name": "width", "default": 32},
                            {"name": "mode", "default": "fast"}
                        ],
                        "interfaces": [
                            {"name": "clk", "direction": "input"},
                            {"name": "m_axi", "direction": "output"}
                        ]
                    },
                    {"type": "gpio", "properties": [], "interfaces": []}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn lookup_by_type() {
        let spec = sample();
        let node = spec.node_by_type("axi_dma").unwrap();
        assert_eq!(node.properties.len(), 2);
        assert_eq!(node.interfaces[0].direction, Direction::Input);
        assert!(spec.node_by_type("missing").is_none());
    }

    #[test]
    fn declaration_order_preserved() {
        let spec = sample();
        let node = spec.node_by_type("axi_dma").unwrap();
        let names: Vec<_> = node.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["width", "mode"]);
    }

    #[test]
    fn integer_default_parses() {
        let spec = sample();
        let node = spec.node_by_type("axi_dma").unwrap();
        assert_eq!(node.properties[0].default, ElementValue::Int(32));
        assert_eq!(
            node.properties[1].default,
            ElementValue::Str("fast".to_string())
        );
    }

    #[test]
    fn empty_sections_default() {
        let spec: Specification = serde_json::from_str(r#"{"nodes": [{"type": "t"}]}"#).unwrap();
        let node = spec.node_by_type("t").unwrap();
        assert!(node.properties.is_empty());
        assert!(node.interfaces.is_empty());
    }
}
