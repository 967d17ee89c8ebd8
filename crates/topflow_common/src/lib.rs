//! Shared foundational types used across the topflow toolkit.
//!
//! This crate provides the unique-identifier service that stamps every
//! synthesized graph entity, the three-valued interface direction, and the
//! parameter value type shared by design descriptions and node catalogs.

#![warn(missing_docs)]

pub mod direction;
pub mod idgen;
pub mod value;

pub use direction::{Direction, ParseDirectionError};
pub use idgen::IdGenerator;
pub use value::ElementValue;
