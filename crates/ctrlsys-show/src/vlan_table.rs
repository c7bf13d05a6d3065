//! Default VLAN lookup table built from `<defVlans>`.

use std::collections::HashMap;

use ctrlsys_types::{PortId, VlanNumber};
use roxmltree::Node;
use tracing::{debug, warn};

use crate::error::SchemaError;
use crate::validator::{entry_id, entry_vlan};
use crate::xml::{self, DEF_VLAN_PORT};

/// Mapping from port ID to its default VLAN.
///
/// Built once and read-only afterwards. A repeated ID replaces the earlier
/// assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultVlanTable {
    entries: HashMap<PortId, VlanNumber>,
}

impl DefaultVlanTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from every `<port>` entry of a `<defVlans>` element.
    ///
    /// IDs and VLAN numbers are read as their leading integer.
    pub fn from_def_vlans(def_vlans: Node<'_, '_>) -> Result<Self, SchemaError> {
        let mut table = Self::new();

        for entry in xml::children(def_vlans, DEF_VLAN_PORT) {
            let id = entry_id(entry, DEF_VLAN_PORT, false)?;
            let vlan = entry_vlan(entry, false)?;
            if let Some(previous) = table.insert(id, vlan) {
                warn!(port = %id, previous = %previous, vlan = %vlan, "default VLAN assigned twice, keeping the later entry");
            }
        }

        debug!(entries = table.entries.len(), "built default VLAN table");
        Ok(table)
    }

    /// Assign `vlan` to `id`, returning the replaced assignment.
    pub fn insert(&mut self, id: PortId, vlan: VlanNumber) -> Option<VlanNumber> {
        self.entries.insert(id, vlan)
    }

    /// Default VLAN for `id`, if one was assigned.
    pub fn lookup(&self, id: PortId) -> Option<VlanNumber> {
        self.entries.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctrlsys_test::documents;
    use roxmltree::Document;

    fn table_for(text: &str) -> DefaultVlanTable {
        let doc = Document::parse(text).unwrap();
        let root = doc.root_element();
        let def_vlans = crate::validator::def_vlans_section(root).unwrap();
        DefaultVlanTable::from_def_vlans(def_vlans).unwrap()
    }

    #[test]
    fn test_lookup() {
        let table = table_for(&documents::two_ports().to_xml());
        assert_eq!(table.entries.len(), 2);
        assert_eq!(table.lookup(PortId::new(1)), Some(VlanNumber::new(100)));
        assert_eq!(table.lookup(PortId::new(2)), Some(VlanNumber::new(200)));
    }

    #[test]
    fn test_lookup_absent() {
        let table = table_for(&documents::port_without_default_vlan().to_xml());
        assert_eq!(table.lookup(PortId::new(2)), None);
    }

    #[test]
    fn test_last_write_wins() {
        let table = table_for(&documents::duplicate_default_vlan().to_xml());
        assert_eq!(table.entries.len(), 1);
        assert_eq!(table.lookup(PortId::new(1)), Some(VlanNumber::new(300)));
    }

    #[test]
    fn test_non_integer_values_read_leniently() {
        let table = table_for(
            "<ControlSystem><Vlans><defVlans>\
             <port ID=\"eth1\"><vlan>Vlan5</vlan></port>\
             <port ID=\"3\"><vlan>30 native</vlan></port>\
             </defVlans></Vlans></ControlSystem>",
        );
        assert_eq!(table.lookup(PortId::new(0)), Some(VlanNumber::new(0)));
        assert_eq!(table.lookup(PortId::new(3)), Some(VlanNumber::new(30)));
    }

    #[test]
    fn test_insert_returns_previous() {
        let mut table = DefaultVlanTable::new();
        assert!(table.entries.is_empty());
        assert_eq!(table.insert(PortId::new(5), VlanNumber::new(10)), None);
        assert_eq!(
            table.insert(PortId::new(5), VlanNumber::new(20)),
            Some(VlanNumber::new(10))
        );
    }
}
