//! Port report: every `<Port>` with its settings and default VLAN.
//!
//! The whole report is assembled before anything is written, so a value
//! that fails to parse never leaves a partial report on the output.

use std::fmt;
use std::io::{self, Write};

use ctrlsys_types::{PortField, PortId, VlanNumber};
use roxmltree::Document;
use tracing::{info, warn};

use crate::error::SchemaError;
use crate::settings::ReportSettings;
use crate::validator::{control_system, def_vlans_section, entry_id, ports_section};
use crate::vlan_table::DefaultVlanTable;
use crate::xml::{self, PORT};

/// One `<Port>` as it will be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortReport {
    pub id: PortId,
    /// Field text verbatim, in [`PortField::ALL`] order.
    pub fields: Vec<(PortField, String)>,
    /// `None` when `<defVlans>` has no entry for this port.
    pub default_vlan: Option<VlanNumber>,
}

/// All ports of a validated document, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    ports: Vec<PortReport>,
    missing_vlan_default: VlanNumber,
}

impl Report {
    /// Assemble the report for a document that passed validation.
    pub fn build(doc: &Document<'_>, settings: &ReportSettings) -> Result<Self, SchemaError> {
        let root = control_system(doc)?;
        let table = DefaultVlanTable::from_def_vlans(def_vlans_section(root)?)?;

        let mut ports = Vec::new();
        for port in xml::children(ports_section(root)?, PORT) {
            // Strict parsing, when enabled, already passed in validation.
            let id = entry_id(port, PORT, false)?;

            let mut fields = Vec::with_capacity(PortField::ALL.len());
            for field in PortField::ALL {
                let node = xml::child(port, field.tag_name())
                    .ok_or(SchemaError::MissingPortField { field })?;
                fields.push((field, xml::text(node).to_string()));
            }

            let default_vlan = table.lookup(id);
            if default_vlan.is_none() && settings.warn_on_missing_vlan {
                warn!(port = %id, fallback = %settings.missing_vlan_default, "port has no default VLAN entry");
            }

            ports.push(PortReport {
                id,
                fields,
                default_vlan,
            });
        }

        Ok(Self {
            ports,
            missing_vlan_default: settings.missing_vlan_default,
        })
    }

    pub fn ports(&self) -> &[PortReport] {
        &self.ports
    }

    /// Write the rendered report and flush.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)?;
        out.flush()?;
        info!(ports = self.ports.len(), "report written");
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for port in &self.ports {
            writeln!(f, "Port ID=\"{}\"", port.id)?;
            for (field, value) in &port.fields {
                writeln!(f, "  {field}: {value}")?;
            }
            let vlan = port.default_vlan.unwrap_or(self.missing_vlan_default);
            writeln!(f, "  Default VLAN: {vlan}")?;
        }
        Ok(())
    }
}
