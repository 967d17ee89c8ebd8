//! The node-catalog side of the translation: per-type node templates with
//! their declared properties and interfaces.
//!
//! Catalogs are produced by the HDL-parsing subsystem and consumed here
//! read-only. Declaration order of properties and interfaces is preserved;
//! translated nodes reproduce it.

#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod loader;

pub use catalog::{InterfaceTemplate, NodeTemplate, PropertyTemplate, Specification};
pub use error::SpecError;
pub use loader::{load_specification, specification_from_json, specification_from_yaml};
