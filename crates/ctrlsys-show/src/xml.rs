//! Tag names of the ControlSystem document and tree lookup helpers.
//!
//! Lookups follow the first-match convention: `child` returns the first
//! element child with the tag, and `text` returns the first text child.

use roxmltree::Node;

/// Document element.
pub const CONTROL_SYSTEM: &str = "ControlSystem";

/// Section holding the physical ports.
pub const PORTS: &str = "Ports";

/// One physical port inside `<Ports>`.
pub const PORT: &str = "Port";

/// Section holding VLAN settings.
pub const VLANS: &str = "Vlans";

/// Default VLAN assignments inside `<Vlans>`.
pub const DEF_VLANS: &str = "defVlans";

/// One assignment inside `<defVlans>`; lowercase, unlike [`PORT`].
pub const DEF_VLAN_PORT: &str = "port";

/// VLAN number inside a `<defVlans>` entry.
pub const VLAN: &str = "vlan";

/// Port identifier attribute on both `<Port>` and `<port>`.
pub const ID_ATTR: &str = "ID";

/// First element child named `name`.
pub fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.has_tag_name(name))
}

/// All element children named `name`, in document order.
pub fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |n| n.is_element() && n.has_tag_name(name))
}

/// First text child of an element, skipping comments and processing
/// instructions; empty when it has none.
pub fn text<'a>(node: Node<'a, '_>) -> &'a str {
    node.children()
        .find(|n| n.is_text())
        .and_then(|n| n.text())
        .unwrap_or("")
}
