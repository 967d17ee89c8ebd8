//! Parameter and property values shared by designs and node catalogs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parameter value from a design description, or a property default from a
/// node catalog.
///
/// Deserializes untagged: a bare integer, a `{value, width}` mapping for a
/// sized HDL literal, or any string.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementValue {
    /// A plain integer, displayed decimally.
    Int(i64),
    /// A sized literal such as `8'ha`, stored as value and bit width.
    Sized {
        /// The numeric value of the literal.
        value: u64,
        /// The bit width of the literal.
        width: u32,
    },
    /// A free-form string, passed through unchanged.
    Str(String),
}

impl ElementValue {
    /// Renders the value as the string placed in a dataflow property textbox.
    ///
    /// Integers stringify decimally; sized literals render as
    /// `<width>'h<hex-value>` with no `0x` prefix.
    pub fn to_property_string(&self) -> String {
        match self {
            ElementValue::Int(i) => i.to_string(),
            ElementValue::Sized { value, width } => format!("{width}'h{value:x}"),
            ElementValue::Str(s) => s.clone(),
        }
    }
}

impl fmt::Display for ElementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_property_string())
    }
}
