//! Forward translation: design description to dataflow graph.
//!
//! Each step takes the shared [`IdGenerator`] and a [`DiagnosticSink`].
//! Per-entity problems (unknown types, dangling references, illegal
//! direction pairs) are reported and the entity omitted; translation never
//! fails once both input documents have been loaded.

use crate::entity::{
    DataflowConnection, DataflowInterface, DataflowNode, DataflowProperty, ExternalNodeKind,
};
use crate::wire::{DataflowDocument, GraphDoc, DATAFLOW_FORMAT_VERSION};
use topflow_common::{Direction, IdGenerator};
use topflow_design::{DesignDescription, EndpointTarget};
use topflow_diagnostics::{codes, Diagnostic, DiagnosticSink};
use topflow_spec::Specification;

/// Builds one dataflow node per translatable IP core instance.
///
/// Instances whose type is missing from the catalog are omitted entirely.
/// Parameter overrides replace matching catalog defaults in design
/// declaration order; overrides naming no declared property are reported
/// and ignored.
pub fn nodes_from_design(
    design: &DesignDescription,
    spec: &Specification,
    idgen: &IdGenerator,
    sink: &DiagnosticSink,
) -> Vec<DataflowNode> {
    let hierarchies = design.hierarchy_names();
    if !hierarchies.is_empty() {
        sink.emit(Diagnostic::warning(
            codes::UNSUPPORTED_HIERARCHY,
            format!(
                "design contains hierarchies ({}) which are not supported; \
                 the translated graph will be incomplete",
                hierarchies.join(", ")
            ),
        ));
    }
    let interconnects = design.interconnect_names();
    if !interconnects.is_empty() {
        sink.emit(Diagnostic::warning(
            codes::UNSUPPORTED_INTERCONNECT,
            format!(
                "design contains interconnects ({}) which are not supported; \
                 the translated graph will be incomplete",
                interconnects.join(", ")
            ),
        ));
    }

    let mut nodes = Vec::new();
    for instance in design.ipcore_names() {
        let ip_type = design.ips[instance].component_type();
        let Some(template) = spec.node_by_type(ip_type) else {
            sink.emit(Diagnostic::warning(
                codes::UNKNOWN_NODE_TYPE,
                format!("node type '{ip_type}' not found in specification"),
            ));
            continue;
        };

        let mut properties: Vec<_> = template
            .properties
            .iter()
            .map(|prop| {
                DataflowProperty::new(&prop.name, prop.default.to_property_string(), idgen)
            })
            .collect();

        if let Some(overrides) = design.design.parameters.get(instance) {
            for (param, value) in overrides {
                match properties.iter_mut().find(|prop| prop.name == *param) {
                    Some(prop) => prop.value = value.to_property_string(),
                    None => sink.emit(Diagnostic::warning(
                        codes::UNKNOWN_PARAMETER,
                        format!("parameter '{param}' not found in node '{instance}'"),
                    )),
                }
            }
        }

        let interfaces = template
            .interfaces
            .iter()
            .map(|iface| DataflowInterface::new(&iface.name, iface.direction, idgen))
            .collect();

        nodes.push(DataflowNode::new(
            instance, ip_type, properties, interfaces, idgen,
        ));
    }
    nodes
}

/// Checks the direction-compatibility rule for a candidate connection.
///
/// Legal pairs are output to input, input to output, and inout to inout.
/// An inout endpoint never pairs with a plain input or output; the rule is
/// deliberately asymmetric because inout models bus-style shared signals.
fn directions_compatible(from: Direction, to: Direction) -> bool {
    matches!(
        (from, to),
        (Direction::Output, Direction::Input)
            | (Direction::Input, Direction::Output)
            | (Direction::Inout, Direction::Inout)
    )
}

/// Constructs a connection between two interfaces if their directions are
/// compatible; otherwise reports a mismatch and returns `None`.
pub fn connect(
    from: &DataflowInterface,
    to: &DataflowInterface,
    idgen: &IdGenerator,
    sink: &DiagnosticSink,
) -> Option<DataflowConnection> {
    if !directions_compatible(from.direction, to.direction) {
        sink.emit(Diagnostic::warning(
            codes::DIRECTION_MISMATCH,
            format!(
                "port/interface direction mismatch for connection: '{}<->{}'",
                from.name, to.name
            ),
        ));
        return None;
    }
    Some(DataflowConnection::new(&from.id, &to.id, idgen))
}

/// Resolves the `iface` interface of the node named `instance`, reporting a
/// diagnostic when either the node or the interface is missing.
fn find_interface<'a>(
    nodes: &'a [DataflowNode],
    instance: &str,
    iface: &str,
    sink: &DiagnosticSink,
) -> Option<&'a DataflowInterface> {
    let Some(node) = nodes.iter().find(|node| node.name == instance) else {
        sink.emit(Diagnostic::warning(
            codes::UNKNOWN_NODE,
            format!("node '{instance}' not found"),
        ));
        return None;
    };
    let found = node.interface(iface);
    if found.is_none() {
        sink.emit(Diagnostic::warning(
            codes::UNKNOWN_INTERFACE,
            format!("interface '{iface}' not found in node '{instance}'"),
        ));
    }
    found
}

/// Builds the connections between IP core nodes from the design's wiring
/// sections.
///
/// Only two-element peer references are considered; entries owned by or
/// targeting a hierarchy instance are skipped, and unresolvable endpoints
/// are dropped with a diagnostic.
pub fn connections_from_design(
    design: &DesignDescription,
    nodes: &[DataflowNode],
    idgen: &IdGenerator,
    sink: &DiagnosticSink,
) -> Vec<DataflowConnection> {
    let mut connections = Vec::new();
    for row in design.endpoint_connections() {
        let EndpointTarget::Peer(peer, peer_endpoint) = row.target else {
            continue;
        };
        if design.design.hierarchies.contains_key(row.instance)
            || design.design.hierarchies.contains_key(peer.as_str())
        {
            continue;
        }

        // The two-element reference names the originating endpoint, so the
        // peer side is `from` and the owning side is `to`.
        let from = find_interface(nodes, peer, peer_endpoint, sink);
        let to = find_interface(nodes, row.instance, row.endpoint, sink);
        if let (Some(from), Some(to)) = (from, to) {
            if let Some(conn) = connect(from, to, idgen, sink) {
                connections.push(conn);
            }
        }
    }
    connections
}

/// Builds one external pseudo-node per boundary signal declared in the
/// design's `external` section, in declaration order.
pub fn external_nodes_from_design(
    design: &DesignDescription,
    idgen: &IdGenerator,
) -> Vec<DataflowNode> {
    design
        .external
        .signals()
        .map(|(_, dir, name)| {
            DataflowNode::external(ExternalNodeKind::for_external_dir(dir), name, idgen)
        })
        .collect()
}

/// Builds the connections between IP core nodes and external pseudo-nodes.
///
/// Wiring entries whose target is a plain string name a boundary signal; the
/// matching pseudo-node is the first one whose property value equals that
/// name. Entries owned by hierarchy instances are skipped.
pub fn external_connections_from_design(
    design: &DesignDescription,
    nodes: &[DataflowNode],
    external_nodes: &[DataflowNode],
    idgen: &IdGenerator,
    sink: &DiagnosticSink,
) -> Vec<DataflowConnection> {
    let mut connections = Vec::new();
    for row in design.endpoint_connections() {
        let EndpointTarget::External(signal) = row.target else {
            continue;
        };
        if design.design.hierarchies.contains_key(row.instance) {
            continue;
        }

        let iface = find_interface(nodes, row.instance, row.endpoint, sink);
        let pseudo = external_nodes
            .iter()
            .find(|node| node.external_value() == Some(signal.as_str()));
        if pseudo.is_none() {
            sink.emit(Diagnostic::warning(
                codes::UNKNOWN_EXTERNAL,
                format!("external port/interface '{signal}' not found in design description"),
            ));
        }

        if let (Some(iface), Some(ext_iface)) =
            (iface, pseudo.and_then(DataflowNode::external_interface))
        {
            if let Some(conn) = connect(iface, ext_iface, idgen, sink) {
                connections.push(conn);
            }
        }
    }
    connections
}

/// Translates a complete design description into a dataflow document.
///
/// The node list is component nodes followed by pseudo-nodes, the connection
/// list inter-node connections followed by boundary connections, both in
/// construction order. The graph id is freshly generated per call.
pub fn dataflow_from_design(
    design: &DesignDescription,
    spec: &Specification,
    idgen: &IdGenerator,
    sink: &DiagnosticSink,
) -> DataflowDocument {
    let nodes = nodes_from_design(design, spec, idgen, sink);
    let external_nodes = external_nodes_from_design(design, idgen);
    let connections = connections_from_design(design, &nodes, idgen, sink);
    let external_connections =
        external_connections_from_design(design, &nodes, &external_nodes, idgen, sink);

    DataflowDocument {
        graph: GraphDoc {
            id: idgen.generate(),
            nodes: nodes
                .iter()
                .chain(external_nodes.iter())
                .map(DataflowNode::render)
                .collect(),
            connections: connections
                .iter()
                .chain(external_connections.iter())
                .map(DataflowConnection::render)
                .collect(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        },
        graph_template_instances: Vec::new(),
        version: DATAFLOW_FORMAT_VERSION.to_string(),
    }
}
