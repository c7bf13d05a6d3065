//! Port identifiers and the per-port settings fields.

use crate::{leading_int, ParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Integer identifier of a switch port, taken from the `ID` attribute.
///
/// # Examples
///
/// ```
/// use ctrlsys_types::PortId;
///
/// let id: PortId = "12".parse().unwrap();
/// assert_eq!(id.as_i64(), 12);
///
/// assert!("eth0".parse::<PortId>().is_err());
/// assert_eq!(PortId::from_leading_int("eth0").as_i64(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortId(i64);

impl PortId {
    /// Creates a port ID from a raw integer.
    pub const fn new(id: i64) -> Self {
        PortId(id)
    }

    /// Lenient parse: the leading integer of `s`, or 0 when there is none.
    pub fn from_leading_int(s: &str) -> Self {
        PortId(leading_int(s))
    }

    /// Returns the port ID as an i64.
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PortId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(PortId)
            .map_err(|_| ParseError::InvalidPortId(s.to_string()))
    }
}

impl From<i64> for PortId {
    fn from(id: i64) -> Self {
        PortId(id)
    }
}

/// Settings every `<Port>` element must carry, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortField {
    /// Link administratively up.
    Up,
    /// Auto-negotiation enabled.
    AutoNegotiationEnabled,
    /// 10 Mb/s allowed.
    AllowedSpeed10M,
    /// 100 Mb/s allowed.
    AllowedSpeed100M,
    /// 1 Gb/s allowed.
    AllowedSpeed1G,
    /// 10 Gb/s allowed.
    AllowedSpeed10G,
}

impl PortField {
    /// All required fields, in the order they are checked and printed.
    pub const ALL: [PortField; 6] = [
        PortField::Up,
        PortField::AutoNegotiationEnabled,
        PortField::AllowedSpeed10M,
        PortField::AllowedSpeed100M,
        PortField::AllowedSpeed1G,
        PortField::AllowedSpeed10G,
    ];

    /// Returns the XML tag name of this field.
    pub const fn tag_name(&self) -> &'static str {
        match self {
            PortField::Up => "Up",
            PortField::AutoNegotiationEnabled => "AutoNegotiationEnabled",
            PortField::AllowedSpeed10M => "AllowedSpeed_10M",
            PortField::AllowedSpeed100M => "AllowedSpeed_100M",
            PortField::AllowedSpeed1G => "AllowedSpeed_1G",
            PortField::AllowedSpeed10G => "AllowedSpeed_10G",
        }
    }
}

impl fmt::Display for PortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_name())
    }
}
