//! In-memory graph entities: nodes, interfaces, properties, connections.
//!
//! Entities trust their constructor arguments; all validation lives in the
//! translator. Each entity renders itself into its wire-format counterpart.

use crate::wire::{ConnectionDoc, ConnectionSide, InterfaceDoc, NodeDoc, Position, PropertyDoc};
use topflow_common::{Direction, IdGenerator};
use topflow_design::ExternalDir;

/// The interface name carried by every external pseudo-node.
const EXT_INTERFACE_NAME: &str = "external";

/// The property name carried by every external pseudo-node.
const EXT_PROPERTY_NAME: &str = "External Name";

/// Display width of a rendered node, in editor units.
const DEFAULT_NODE_WIDTH: u32 = 200;

/// The boundary kind of an external pseudo-node.
///
/// A pseudo-node's single interface connects *toward* the real node, so its
/// direction is the logical opposite of the boundary signal's declared
/// direction: an `out` boundary gets an input-direction interface, an `in`
/// boundary an output-direction one, and `inout` stays `inout`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ExternalNodeKind {
    /// A signal entering the design.
    Input,
    /// A signal leaving the design.
    Output,
    /// A bidirectional boundary signal.
    Inout,
}

/// Error raised when a node type string is not one of the three fixed
/// boundary tags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid external node type: '{0}'")]
pub struct UnknownExternalKind(pub String);

impl ExternalNodeKind {
    /// Returns the fixed node type tag for this boundary kind.
    pub fn type_tag(self) -> &'static str {
        match self {
            ExternalNodeKind::Input => "External Input",
            ExternalNodeKind::Output => "External Output",
            ExternalNodeKind::Inout => "External Inout",
        }
    }

    /// Parses a node type tag back into a boundary kind.
    pub fn from_type_tag(tag: &str) -> Result<Self, UnknownExternalKind> {
        match tag {
            "External Input" => Ok(ExternalNodeKind::Input),
            "External Output" => Ok(ExternalNodeKind::Output),
            "External Inout" => Ok(ExternalNodeKind::Inout),
            _ => Err(UnknownExternalKind(tag.to_string())),
        }
    }

    /// Maps a boundary signal's declared direction to its pseudo-node kind.
    pub fn for_external_dir(dir: ExternalDir) -> Self {
        match dir {
            ExternalDir::In => ExternalNodeKind::Input,
            ExternalDir::Out => ExternalNodeKind::Output,
            ExternalDir::Inout => ExternalNodeKind::Inout,
        }
    }

    /// The direction of the pseudo-node's single interface.
    pub fn interface_direction(self) -> Direction {
        match self {
            ExternalNodeKind::Input => Direction::Output,
            ExternalNodeKind::Output => Direction::Input,
            ExternalNodeKind::Inout => Direction::Inout,
        }
    }
}

/// A named, directioned connection point on a node.
#[derive(Clone, Debug, PartialEq)]
pub struct DataflowInterface {
    /// Generated identity, prefixed `ni_`.
    pub id: String,
    /// The interface name.
    pub name: String,
    /// The interface direction.
    pub direction: Direction,
}

impl DataflowInterface {
    /// Creates an interface with a fresh `ni_`-prefixed id.
    pub fn new(name: impl Into<String>, direction: Direction, idgen: &IdGenerator) -> Self {
        Self {
            id: format!("ni_{}", idgen.generate()),
            name: name.into(),
            direction,
        }
    }

    /// Creates the single interface of an external pseudo-node.
    pub fn external(direction: Direction, idgen: &IdGenerator) -> Self {
        Self::new(EXT_INTERFACE_NAME, direction, idgen)
    }

    /// Renders the wire shape. The connection side is a display hint:
    /// inputs sit on the left, everything else on the right.
    pub fn render(&self) -> InterfaceDoc {
        InterfaceDoc {
            name: self.name.clone(),
            id: self.id.clone(),
            direction: self.direction,
            connection_side: if self.direction == Direction::Input {
                ConnectionSide::Left
            } else {
                ConnectionSide::Right
            },
        }
    }
}

/// A named property on a node, with its display value.
#[derive(Clone, Debug, PartialEq)]
pub struct DataflowProperty {
    /// Generated identity, no prefix.
    pub id: String,
    /// The property name.
    pub name: String,
    /// The display value shown in the property textbox.
    pub value: String,
}

impl DataflowProperty {
    /// Creates a property with a fresh id.
    pub fn new(name: impl Into<String>, value: impl Into<String>, idgen: &IdGenerator) -> Self {
        Self {
            id: idgen.generate(),
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates the single property of an external pseudo-node, holding the
    /// boundary signal name.
    pub fn external(value: impl Into<String>, idgen: &IdGenerator) -> Self {
        Self::new(EXT_PROPERTY_NAME, value, idgen)
    }

    /// Renders the wire shape.
    pub fn render(&self) -> PropertyDoc {
        PropertyDoc {
            name: self.name.clone(),
            id: self.id.clone(),
            value: self.value.clone(),
        }
    }
}

/// A graph node: one per translated IP core instance, plus one pseudo-node
/// per boundary signal.
#[derive(Clone, Debug, PartialEq)]
pub struct DataflowNode {
    /// Generated identity, prefixed `node_`.
    pub id: String,
    /// The display name (the instance name, or the boundary tag).
    pub name: String,
    /// The component type, or one of the three boundary tags.
    pub node_type: String,
    /// Properties in catalog declaration order.
    pub properties: Vec<DataflowProperty>,
    /// Interfaces in catalog declaration order.
    pub interfaces: Vec<DataflowInterface>,
}

impl DataflowNode {
    /// Creates a node with a fresh `node_`-prefixed id.
    pub fn new(
        name: impl Into<String>,
        node_type: impl Into<String>,
        properties: Vec<DataflowProperty>,
        interfaces: Vec<DataflowInterface>,
        idgen: &IdGenerator,
    ) -> Self {
        Self {
            id: format!("node_{}", idgen.generate()),
            name: name.into(),
            node_type: node_type.into(),
            properties,
            interfaces,
        }
    }

    /// Creates an external pseudo-node for one boundary signal: exactly one
    /// property holding the signal name and exactly one interface with the
    /// kind's fixed direction.
    pub fn external(kind: ExternalNodeKind, signal: &str, idgen: &IdGenerator) -> Self {
        Self::new(
            kind.type_tag(),
            kind.type_tag(),
            vec![DataflowProperty::external(signal, idgen)],
            vec![DataflowInterface::external(kind.interface_direction(), idgen)],
            idgen,
        )
    }

    /// Resolves an interface by exact name match.
    pub fn interface(&self, name: &str) -> Option<&DataflowInterface> {
        self.interfaces.iter().find(|iface| iface.name == name)
    }

    /// For a pseudo-node, the boundary signal name held by its property.
    pub fn external_value(&self) -> Option<&str> {
        self.properties.first().map(|prop| prop.value.as_str())
    }

    /// For a pseudo-node, its sole interface.
    pub fn external_interface(&self) -> Option<&DataflowInterface> {
        self.interfaces.first()
    }

    /// Renders the wire shape, including the fixed display attributes.
    pub fn render(&self) -> NodeDoc {
        NodeDoc {
            node_type: self.node_type.clone(),
            id: self.id.clone(),
            name: self.name.clone(),
            interfaces: self.interfaces.iter().map(DataflowInterface::render).collect(),
            position: Position { x: 0, y: 0 },
            width: DEFAULT_NODE_WIDTH,
            two_column: false,
            properties: self.properties.iter().map(DataflowProperty::render).collect(),
        }
    }
}

/// A connection between two interface endpoints, referenced by id.
///
/// Storage is undirected; direction legality is checked when the connection
/// is constructed by the translator.
#[derive(Clone, Debug, PartialEq)]
pub struct DataflowConnection {
    /// Generated identity.
    pub id: String,
    /// The id of the `from` interface.
    pub from: String,
    /// The id of the `to` interface.
    pub to: String,
}

impl DataflowConnection {
    /// Creates a connection between two interface ids.
    pub fn new(from: impl Into<String>, to: impl Into<String>, idgen: &IdGenerator) -> Self {
        Self {
            id: idgen.generate(),
            from: from.into(),
            to: to.into(),
        }
    }

    /// Renders the wire shape.
    pub fn render(&self) -> ConnectionDoc {
        ConnectionDoc {
            id: self.id.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }
}
