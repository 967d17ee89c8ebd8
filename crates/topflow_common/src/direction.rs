//! Interface directions as used by node catalogs and the dataflow format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The direction of a node interface.
///
/// Serialized in lowercase (`"input"`, `"output"`, `"inout"`), which is
/// exactly the wire representation expected by the graph editor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Data flows into the node.
    Input,
    /// Data flows out of the node.
    Output,
    /// Bidirectional, bus-style interface.
    Inout,
}

impl Direction {
    /// Returns the lowercase wire string for this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Input => "input",
            Direction::Output => "output",
            Direction::Inout => "inout",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing direction strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid interface direction: '{input}'")]
pub struct ParseDirectionError {
    /// The input string that failed to parse.
    pub input: String,
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(Direction::Input),
            "output" => Ok(Direction::Output),
            "inout" => Ok(Direction::Inout),
            _ => Err(ParseDirectionError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        assert_eq!("input".parse::<Direction>().unwrap(), Direction::Input);
        assert_eq!("output".parse::<Direction>().unwrap(), Direction::Output);
        assert_eq!("inout".parse::<Direction>().unwrap(), Direction::Inout);
    }

    #[test]
    fn parse_invalid() {
        let err = "in".parse::<Direction>().unwrap_err();
        assert_eq!(format!("{err}"), "invalid interface direction: 'in'");
    }

    #[test]
    fn display_matches_wire_strings() {
        assert_eq!(format!("{}", Direction::Input), "input");
        assert_eq!(format!("{}", Direction::Output), "output");
        assert_eq!(format!("{}", Direction::Inout), "inout");
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Inout).unwrap(), "\"inout\"");
        let d: Direction = serde_json::from_str("\"output\"").unwrap();
        assert_eq!(d, Direction::Output);
    }
}
