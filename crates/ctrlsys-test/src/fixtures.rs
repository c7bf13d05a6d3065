//! Document fixtures for ControlSystem configuration testing
//!
//! Provides a builder for `ControlSystem` XML documents so tests can
//! describe a configuration, knock out one piece of it, and render the
//! result.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ctrlsys_types::PortField;

/// A `<Port>` entry inside `<Ports>`
#[derive(Debug, Clone)]
pub struct PortEntry {
    /// Raw `ID` attribute; `None` omits the attribute
    pub id: Option<String>,
    /// Child elements in document order
    pub fields: Vec<(String, String)>,
}

impl PortEntry {
    /// Port with all six required fields set to typical values
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            fields: Vec::new(),
        }
        .with_field(PortField::Up.tag_name(), "true")
        .with_field(PortField::AutoNegotiationEnabled.tag_name(), "true")
        .with_field(PortField::AllowedSpeed10M.tag_name(), "true")
        .with_field(PortField::AllowedSpeed100M.tag_name(), "true")
        .with_field(PortField::AllowedSpeed1G.tag_name(), "true")
        .with_field(PortField::AllowedSpeed10G.tag_name(), "false")
    }

    /// Set a child element, replacing an existing one with the same tag
    pub fn with_field(mut self, tag: impl Into<String>, value: impl Into<String>) -> Self {
        let tag = tag.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == tag) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((tag, value)),
        }
        self
    }

    /// Drop a child element
    pub fn without_field(mut self, tag: &str) -> Self {
        self.fields.retain(|(name, _)| name != tag);
        self
    }

    /// Drop the `ID` attribute
    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }
}

/// A `<port>` entry inside `<defVlans>`
#[derive(Debug, Clone)]
pub struct DefVlanEntry {
    /// Raw `ID` attribute; `None` omits the attribute
    pub id: Option<String>,
    /// Raw `<vlan>` text; `None` omits the element
    pub vlan: Option<String>,
}

impl DefVlanEntry {
    /// Default VLAN assignment for a port
    pub fn new(id: impl Into<String>, vlan: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            vlan: Some(vlan.into()),
        }
    }

    /// Drop the `ID` attribute
    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }

    /// Drop the `<vlan>` element
    pub fn without_vlan(mut self) -> Self {
        self.vlan = None;
        self
    }
}

/// Shape of the `<Vlans>` section
#[derive(Debug, Clone)]
pub enum VlansSection {
    /// No `<Vlans>` element
    Missing,
    /// `<Vlans>` without a `<defVlans>` child
    WithoutDefVlans,
    /// `<Vlans><defVlans>` holding these entries
    DefVlans(Vec<DefVlanEntry>),
}

/// Builder for a complete `ControlSystem` document
#[derive(Debug, Clone)]
pub struct ControlSystemXml {
    /// Name of the document element
    pub root: String,
    /// `<Port>` entries; `None` omits the `<Ports>` element
    pub ports: Option<Vec<PortEntry>>,
    /// The `<Vlans>` section
    pub vlans: VlansSection,
}

impl Default for ControlSystemXml {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlSystemXml {
    /// Empty `<Ports>` and empty `<defVlans>`
    pub fn new() -> Self {
        Self {
            root: "ControlSystem".to_string(),
            ports: Some(Vec::new()),
            vlans: VlansSection::DefVlans(Vec::new()),
        }
    }

    /// Rename the document element
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    /// Append a `<Port>` entry
    pub fn with_port(mut self, port: PortEntry) -> Self {
        self.ports.get_or_insert_with(Vec::new).push(port);
        self
    }

    /// Omit the `<Ports>` element
    pub fn without_ports(mut self) -> Self {
        self.ports = None;
        self
    }

    /// Append a `<port>` entry under `<defVlans>`
    pub fn with_def_vlan(mut self, entry: DefVlanEntry) -> Self {
        match &mut self.vlans {
            VlansSection::DefVlans(entries) => entries.push(entry),
            _ => self.vlans = VlansSection::DefVlans(vec![entry]),
        }
        self
    }

    /// Replace the `<Vlans>` section
    pub fn with_vlans(mut self, vlans: VlansSection) -> Self {
        self.vlans = vlans;
        self
    }

    /// Render the document
    pub fn to_xml(&self) -> String {
        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str(&format!("<{}>\n", self.root));

        if let Some(ports) = &self.ports {
            xml.push_str("  <Ports>\n");
            for port in ports {
                xml.push_str(&format!("    <Port{}>\n", id_attr(port.id.as_deref())));
                for (tag, value) in &port.fields {
                    xml.push_str(&format!("      <{tag}>{}</{tag}>\n", escape(value)));
                }
                xml.push_str("    </Port>\n");
            }
            xml.push_str("  </Ports>\n");
        }

        match &self.vlans {
            VlansSection::Missing => {}
            VlansSection::WithoutDefVlans => xml.push_str("  <Vlans>\n  </Vlans>\n"),
            VlansSection::DefVlans(entries) => {
                xml.push_str("  <Vlans>\n    <defVlans>\n");
                for entry in entries {
                    xml.push_str(&format!("      <port{}>\n", id_attr(entry.id.as_deref())));
                    if let Some(vlan) = &entry.vlan {
                        xml.push_str(&format!("        <vlan>{}</vlan>\n", escape(vlan)));
                    }
                    xml.push_str("      </port>\n");
                }
                xml.push_str("    </defVlans>\n  </Vlans>\n");
            }
        }

        xml.push_str(&format!("</{}>\n", self.root));
        xml
    }

    /// Render the document into `dir/name` and return the path
    pub fn write_to(&self, dir: &Path, name: &str) -> io::Result<PathBuf> {
        let path = dir.join(name);
        fs::write(&path, self.to_xml())?;
        Ok(path)
    }
}

fn id_attr(id: Option<&str>) -> String {
    match id {
        Some(id) => format!(" ID=\"{}\"", escape(id)),
        None => String::new(),
    }
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Canned documents
pub mod documents {
    use super::*;

    /// Two ports, both with default VLANs
    pub fn two_ports() -> ControlSystemXml {
        ControlSystemXml::new()
            .with_port(PortEntry::new("1"))
            .with_port(
                PortEntry::new("2")
                    .with_field("Up", "false")
                    .with_field("AllowedSpeed_10G", "true"),
            )
            .with_def_vlan(DefVlanEntry::new("1", "100"))
            .with_def_vlan(DefVlanEntry::new("2", "200"))
    }

    /// Port 2 has no default VLAN entry
    pub fn port_without_default_vlan() -> ControlSystemXml {
        ControlSystemXml::new()
            .with_port(PortEntry::new("1"))
            .with_port(PortEntry::new("2"))
            .with_def_vlan(DefVlanEntry::new("1", "100"))
    }

    /// Port 1 is assigned twice in `<defVlans>`; the later entry is 300
    pub fn duplicate_default_vlan() -> ControlSystemXml {
        ControlSystemXml::new()
            .with_port(PortEntry::new("1"))
            .with_def_vlan(DefVlanEntry::new("1", "100"))
            .with_def_vlan(DefVlanEntry::new("1", "300"))
    }
}
