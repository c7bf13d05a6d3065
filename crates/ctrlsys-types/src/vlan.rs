//! Default VLAN number type.

use crate::{leading_int, ParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// VLAN number assigned to a port by the `<defVlans>` section.
///
/// No range validation is performed: the configuration format treats the
/// VLAN as a plain integer, and reserved IDs such as 0 or 4095 pass through.
///
/// # Examples
///
/// ```
/// use ctrlsys_types::VlanNumber;
///
/// let vlan: VlanNumber = "100".parse().unwrap();
/// assert_eq!(vlan.as_i64(), 100);
/// assert_eq!(VlanNumber::UNASSIGNED.to_string(), "0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VlanNumber(i64);

impl VlanNumber {
    /// Printed for ports that have no default VLAN entry.
    pub const UNASSIGNED: VlanNumber = VlanNumber(0);

    /// Creates a VLAN number from a raw integer.
    pub const fn new(vlan: i64) -> Self {
        VlanNumber(vlan)
    }

    /// Lenient parse: the leading integer of `s`, or 0 when there is none.
    pub fn from_leading_int(s: &str) -> Self {
        VlanNumber(leading_int(s))
    }

    /// Returns the VLAN number as an i64.
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Default for VlanNumber {
    fn default() -> Self {
        Self::UNASSIGNED
    }
}

impl fmt::Display for VlanNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VlanNumber {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(VlanNumber)
            .map_err(|_| ParseError::InvalidVlanNumber(s.to_string()))
    }
}

impl From<i64> for VlanNumber {
    fn from(vlan: i64) -> Self {
        VlanNumber(vlan)
    }
}
