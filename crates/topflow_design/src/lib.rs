//! The design-description document: a declarative listing of IP core
//! instances, their parameters, and their port/interface wiring.
//!
//! Documents are loaded from YAML into explicit typed structures so that
//! shape mismatches surface once, at the load boundary, instead of deep in
//! the translation. Map sections keep document order; node emission and
//! parameter-override application depend on it.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::DesignError;
pub use loader::{design_from_str, load_design};
pub use types::{
    ConnectionKind, DesignDescription, DesignSection, EndpointRef, EndpointTarget, ExternalDir,
    ExternalDirections, ExternalSection, IpRef,
};
