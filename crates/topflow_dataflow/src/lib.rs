//! Translation between design descriptions and the dataflow-graph format of
//! the node-graph editor front-end.
//!
//! The translation builds one graph node per instantiated IP core, synthetic
//! pseudo-nodes for the design's boundary signals, and id-referenced
//! connections between interface endpoints, validated for direction
//! compatibility. Unsupported or unresolvable constructs degrade to
//! diagnostics plus omission; the result is always a complete, internally
//! consistent document.

#![warn(missing_docs)]

pub mod entity;
pub mod translate;
pub mod wire;

pub use entity::{
    DataflowConnection, DataflowInterface, DataflowNode, DataflowProperty, ExternalNodeKind,
    UnknownExternalKind,
};
pub use translate::{
    connect, connections_from_design, dataflow_from_design, external_connections_from_design,
    external_nodes_from_design, nodes_from_design,
};
pub use wire::{DataflowDocument, GraphDoc, DATAFLOW_FORMAT_VERSION};
