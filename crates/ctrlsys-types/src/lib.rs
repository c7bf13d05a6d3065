//! Common types for ControlSystem switch configuration documents.
//!
//! This crate provides type-safe representations of the values a
//! `ControlSystem` document carries:
//!
//! - [`PortId`]: integer identifier of a switch port
//! - [`VlanNumber`]: default VLAN assigned to a port
//! - [`PortField`]: the settings every `<Port>` element must carry

mod port;
mod vlan;

pub use port::{PortField, PortId};
pub use vlan::VlanNumber;

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid port ID: '{0}'")]
    InvalidPortId(String),

    #[error("invalid VLAN number: '{0}'")]
    InvalidVlanNumber(String),
}

/// Leading integer of `s` after optional whitespace and sign, with `0x`
/// selecting hex. Text without digits yields 0; overflow saturates.
pub(crate) fn leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value: i64 = 0;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(digit));
    }

    if negative {
        value.saturating_neg()
    } else {
        value
    }
}
