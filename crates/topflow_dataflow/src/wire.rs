//! Exact serde types for the dataflow wire format.
//!
//! Field names and nesting are fixed by the graph-editor front-end. The
//! types derive both `Serialize` and `Deserialize` so that exported
//! documents round-trip through the reverse (graph to design) path.

use serde::{Deserialize, Serialize};
use topflow_common::Direction;

/// The format version tag attached to every exported document.
pub const DATAFLOW_FORMAT_VERSION: &str = "20230824.9";

/// Display side hint for an interface. Purely visual.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionSide {
    /// Rendered on the left edge of the node (inputs).
    Left,
    /// Rendered on the right edge of the node.
    Right,
}

/// A node position in editor coordinates. Exported nodes all sit at the
/// origin; the editor lays them out.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate.
    pub y: i64,
}

/// Wire shape of an interface.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct InterfaceDoc {
    /// The interface name.
    pub name: String,
    /// The interface id.
    pub id: String,
    /// The interface direction.
    pub direction: Direction,
    /// Display side hint.
    #[serde(rename = "connectionSide")]
    pub connection_side: ConnectionSide,
}

/// Wire shape of a property.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PropertyDoc {
    /// The property name.
    pub name: String,
    /// The property id.
    pub id: String,
    /// The display value.
    pub value: String,
}

/// Wire shape of a node.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct NodeDoc {
    /// The component type name, or one of the boundary tags.
    #[serde(rename = "type")]
    pub node_type: String,
    /// The node id.
    pub id: String,
    /// The display name.
    pub name: String,
    /// The node's interfaces.
    pub interfaces: Vec<InterfaceDoc>,
    /// Editor position.
    pub position: Position,
    /// Display width.
    pub width: u32,
    /// Whether the node renders its interfaces in two columns.
    #[serde(rename = "twoColumn")]
    pub two_column: bool,
    /// The node's properties.
    pub properties: Vec<PropertyDoc>,
}

/// Wire shape of a connection between two interface ids.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ConnectionDoc {
    /// The connection id.
    pub id: String,
    /// The id of the `from` interface.
    pub from: String,
    /// The id of the `to` interface.
    pub to: String,
}

/// Wire shape of the graph itself.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct GraphDoc {
    /// Fresh top-level identifier for this translation run.
    pub id: String,
    /// Component nodes followed by external pseudo-nodes.
    pub nodes: Vec<NodeDoc>,
    /// Inter-node connections followed by boundary connections.
    pub connections: Vec<ConnectionDoc>,
    /// Graph-level input ports. Unused by the translation; always empty.
    pub inputs: Vec<serde_json::Value>,
    /// Graph-level output ports. Unused by the translation; always empty.
    pub outputs: Vec<serde_json::Value>,
}

/// The complete exported document.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct DataflowDocument {
    /// The graph.
    pub graph: GraphDoc,
    /// Template instances. Unused by the translation; always empty.
    #[serde(rename = "graphTemplateInstances")]
    pub graph_template_instances: Vec<serde_json::Value>,
    /// The fixed format-version tag.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc() -> DataflowDocument {
        DataflowDocument {
            graph: GraphDoc {
                id: "17".to_string(),
                nodes: vec![NodeDoc {
                    node_type: "cpu_core".to_string(),
                    id: "node_18".to_string(),
                    name: "cpu".to_string(),
                    interfaces: vec![InterfaceDoc {
                        name: "clk".to_string(),
                        id: "ni_19".to_string(),
                        direction: Direction::Input,
                        connection_side: ConnectionSide::Left,
                    }],
                    position: Position { x: 0, y: 0 },
                    width: 200,
                    two_column: false,
                    properties: vec![PropertyDoc {
                        name: "width".to_string(),
                        id: "20".to_string(),
                        value: "32".to_string(),
                    }],
                }],
                connections: vec![ConnectionDoc {
                    id: "21".to_string(),
                    from: "ni_19".to_string(),
                    to: "ni_22".to_string(),
                }],
                inputs: vec![],
                outputs: vec![],
            },
            graph_template_instances: vec![],
            version: DATAFLOW_FORMAT_VERSION.to_string(),
        }
    }

    #[test]
    fn serializes_exact_field_names() {
        let json = serde_json::to_value(sample_doc()).unwrap();
        let node = &json["graph"]["nodes"][0];
        assert_eq!(node["type"], "cpu_core");
        assert_eq!(node["twoColumn"], false);
        assert_eq!(node["interfaces"][0]["connectionSide"], "left");
        assert_eq!(node["interfaces"][0]["direction"], "input");
        assert!(json["graphTemplateInstances"].as_array().unwrap().is_empty());
        assert_eq!(json["version"], DATAFLOW_FORMAT_VERSION);
        let conn = &json["graph"]["connections"][0];
        assert_eq!(conn["from"], "ni_19");
        assert_eq!(conn["to"], "ni_22");
    }

    #[test]
    fn document_roundtrips() {
        let doc = sample_doc();
        let json = serde_json::to_string(&doc).unwrap();
        let back: DataflowDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }
}
