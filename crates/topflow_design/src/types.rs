//! Typed structure of a design-description document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use topflow_common::ElementValue;

/// A reference to an IP core description file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IpRef {
    /// Path to the core's description file. The basename without extension
    /// is the core's type name in the node catalog.
    pub file: String,
    /// Optional HDL module name override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
}

impl IpRef {
    /// Returns the component type this reference resolves to: the file
    /// basename, stripped of its extension.
    pub fn component_type(&self) -> &str {
        Path::new(&self.file)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&self.file)
    }
}

/// The target of one entry in the `ports` or `interfaces` wiring sections.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EndpointTarget {
    /// A constant value tied to the port. Not represented in the dataflow
    /// graph; both connection collectors skip it.
    Constant(i64),
    /// The name of an external boundary signal.
    External(String),
    /// A `[instance, endpoint]` reference to a peer port or interface.
    Peer(String, String),
}

/// The `design` section: parameters and wiring of the instantiated cores.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignSection {
    /// Parameter overrides per instance, in declaration order.
    #[serde(default)]
    pub parameters: IndexMap<String, IndexMap<String, ElementValue>>,
    /// Port wiring per instance.
    #[serde(default)]
    pub ports: IndexMap<String, IndexMap<String, EndpointTarget>>,
    /// Interface wiring per instance.
    #[serde(default)]
    pub interfaces: IndexMap<String, IndexMap<String, EndpointTarget>>,
    /// Nested sub-designs. Only the names are inspected; hierarchies are not
    /// translated.
    #[serde(default)]
    pub hierarchies: IndexMap<String, serde_yaml::Value>,
    /// Interconnect fabrics. Only the names are inspected; interconnects are
    /// not translated.
    #[serde(default)]
    pub interconnects: IndexMap<String, serde_yaml::Value>,
}

/// The declared direction of an external boundary signal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExternalDir {
    /// The signal enters the design.
    In,
    /// The signal leaves the design.
    Out,
    /// Bidirectional boundary signal.
    Inout,
}

impl fmt::Display for ExternalDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExternalDir::In => write!(f, "in"),
            ExternalDir::Out => write!(f, "out"),
            ExternalDir::Inout => write!(f, "inout"),
        }
    }
}

/// Boundary signal names grouped by direction, in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalDirections {
    /// Signals entering the design.
    #[serde(default, rename = "in", skip_serializing_if = "Vec::is_empty")]
    pub input: Vec<String>,
    /// Signals leaving the design.
    #[serde(default, rename = "out", skip_serializing_if = "Vec::is_empty")]
    pub output: Vec<String>,
    /// Bidirectional signals.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inout: Vec<String>,
}

impl ExternalDirections {
    /// Iterates `(direction, signal name)` pairs in declaration order,
    /// `in` signals first, then `out`, then `inout`.
    pub fn signals(&self) -> impl Iterator<Item = (ExternalDir, &str)> {
        let ins = self.input.iter().map(|s| (ExternalDir::In, s.as_str()));
        let outs = self.output.iter().map(|s| (ExternalDir::Out, s.as_str()));
        let inouts = self.inout.iter().map(|s| (ExternalDir::Inout, s.as_str()));
        ins.chain(outs).chain(inouts)
    }
}

/// The `external` section: boundary signals by connection kind.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalSection {
    /// Boundary ports.
    #[serde(default)]
    pub ports: ExternalDirections,
    /// Boundary interfaces.
    #[serde(default)]
    pub interfaces: ExternalDirections,
}

impl ExternalSection {
    /// Iterates every boundary signal as `(kind, direction, name)`, ports
    /// before interfaces.
    pub fn signals(&self) -> impl Iterator<Item = (ConnectionKind, ExternalDir, &str)> {
        let ports = self
            .ports
            .signals()
            .map(|(dir, name)| (ConnectionKind::Port, dir, name));
        let ifaces = self
            .interfaces
            .signals()
            .map(|(dir, name)| (ConnectionKind::Interface, dir, name));
        ports.chain(ifaces)
    }
}

/// Whether a wiring entry connects single ports or grouped interfaces.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionKind {
    /// A single named port.
    Port,
    /// A grouped port bundle.
    Interface,
}

/// One flattened wiring entry: the owning instance, its local endpoint name,
/// and the entry's target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EndpointRef<'a> {
    /// Whether this row came from the `ports` or `interfaces` section.
    pub kind: ConnectionKind,
    /// The instance owning the endpoint.
    pub instance: &'a str,
    /// The local port or interface name on the owning instance.
    pub endpoint: &'a str,
    /// What the endpoint is wired to.
    pub target: &'a EndpointTarget,
}

/// A complete design-description document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignDescription {
    /// Instance name to IP core reference, in declaration order.
    #[serde(default)]
    pub ips: IndexMap<String, IpRef>,
    /// Parameters and wiring.
    #[serde(default)]
    pub design: DesignSection,
    /// Boundary signals.
    #[serde(default)]
    pub external: ExternalSection,
}

impl DesignDescription {
    /// Names of hierarchy instances, in declaration order.
    pub fn hierarchy_names(&self) -> Vec<&str> {
        self.design.hierarchies.keys().map(String::as_str).collect()
    }

    /// Names of interconnect instances, in declaration order.
    pub fn interconnect_names(&self) -> Vec<&str> {
        self.design
            .interconnects
            .keys()
            .map(String::as_str)
            .collect()
    }

    /// Names of translatable IP core instances: the `ips` entries that are
    /// not hierarchies or interconnects, in declaration order.
    pub fn ipcore_names(&self) -> Vec<&str> {
        self.ips
            .keys()
            .map(String::as_str)
            .filter(|name| {
                !self.design.hierarchies.contains_key(*name)
                    && !self.design.interconnects.contains_key(*name)
            })
            .collect()
    }

    /// Flattens the `ports` and `interfaces` wiring sections into one list
    /// of rows, ports first, preserving document order within each section.
    pub fn endpoint_connections(&self) -> Vec<EndpointRef<'_>> {
        let mut rows = Vec::new();
        for (kind, section) in [
            (ConnectionKind::Port, &self.design.ports),
            (ConnectionKind::Interface, &self.design.interfaces),
        ] {
            for (instance, endpoints) in section {
                for (endpoint, target) in endpoints {
                    rows.push(EndpointRef {
                        kind,
                        instance,
                        endpoint,
                        target,
                    });
                }
            }
        }
        rows
    }
}
