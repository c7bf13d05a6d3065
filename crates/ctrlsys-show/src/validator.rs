//! Structural validation of a ControlSystem document.
//!
//! Rules run in a fixed order and the first violation ends validation:
//!
//! 1. the document element is `<ControlSystem>`
//! 2. it contains `<Ports>`
//! 3. `<Ports>` contains at least one `<Port>`
//! 4. every `<Port>` has an `ID` attribute
//! 5. every `<Port>` has all six [`PortField`] children
//! 6. the root contains `<Vlans>`, which contains `<defVlans>`
//! 7. `<defVlans>` contains at least one `<port>`
//! 8. every `<port>` has an `ID` attribute and a non-empty `<vlan>` child
//!
//! Values are otherwise unchecked. IDs and VLAN numbers are read as their
//! leading integer, or 0 when there is none. [`ValidationSettings`] can
//! turn on strict integer parsing and duplicate-ID rejection, both
//! applied after the presence rules.

use std::collections::HashSet;

use ctrlsys_types::{PortField, PortId, VlanNumber};
use roxmltree::{Document, Node};
use tracing::{debug, info};

use crate::error::SchemaError;
use crate::settings::ValidationSettings;
use crate::xml::{self, CONTROL_SYSTEM, DEF_VLANS, DEF_VLAN_PORT, ID_ATTR, PORT, PORTS, VLAN, VLANS};

/// Check `doc` against the ControlSystem schema.
pub fn validate(doc: &Document<'_>, settings: &ValidationSettings) -> Result<(), SchemaError> {
    let root = control_system(doc)?;

    let ports = ports_section(root)?;
    check_ports(ports)?;

    let def_vlans = def_vlans_section(root)?;
    check_def_vlans(def_vlans)?;

    check_values(ports, def_vlans, settings)?;

    info!("configuration passed validation");
    Ok(())
}

/// The `<ControlSystem>` document element.
pub(crate) fn control_system<'a, 'input>(
    doc: &'a Document<'input>,
) -> Result<Node<'a, 'input>, SchemaError> {
    let root = doc.root_element();
    if root.has_tag_name(CONTROL_SYSTEM) {
        Ok(root)
    } else {
        Err(SchemaError::MissingNode {
            tag: CONTROL_SYSTEM,
        })
    }
}

/// The `<Ports>` section under the root.
pub(crate) fn ports_section<'a, 'input>(
    root: Node<'a, 'input>,
) -> Result<Node<'a, 'input>, SchemaError> {
    xml::child(root, PORTS).ok_or(SchemaError::MissingNode { tag: PORTS })
}

/// The `<Vlans><defVlans>` section under the root.
pub(crate) fn def_vlans_section<'a, 'input>(
    root: Node<'a, 'input>,
) -> Result<Node<'a, 'input>, SchemaError> {
    let vlans = xml::child(root, VLANS).ok_or(SchemaError::MissingNode { tag: VLANS })?;
    xml::child(vlans, DEF_VLANS).ok_or(SchemaError::MissingNode { tag: DEF_VLANS })
}

fn check_ports(ports: Node<'_, '_>) -> Result<(), SchemaError> {
    let mut count = 0usize;

    for port in xml::children(ports, PORT) {
        count += 1;

        if port.attribute(ID_ATTR).is_none() {
            return Err(SchemaError::MissingId { tag: PORT });
        }

        for field in PortField::ALL {
            if xml::child(port, field.tag_name()).is_none() {
                return Err(SchemaError::MissingPortField { field });
            }
        }
    }

    if count == 0 {
        return Err(SchemaError::NoEntries {
            section: PORTS,
            entry: PORT,
        });
    }

    debug!(ports = count, "checked <Port> entries");
    Ok(())
}

fn check_def_vlans(def_vlans: Node<'_, '_>) -> Result<(), SchemaError> {
    let mut count = 0usize;

    for entry in xml::children(def_vlans, DEF_VLAN_PORT) {
        count += 1;

        if entry.attribute(ID_ATTR).is_none() {
            return Err(SchemaError::MissingId {
                tag: DEF_VLAN_PORT,
            });
        }

        let vlan = xml::child(entry, VLAN).ok_or(SchemaError::MissingVlan)?;
        if xml::text(vlan).trim().is_empty() {
            return Err(SchemaError::EmptyVlan);
        }
    }

    if count == 0 {
        return Err(SchemaError::NoEntries {
            section: DEF_VLANS,
            entry: DEF_VLAN_PORT,
        });
    }

    debug!(entries = count, "checked <defVlans> entries");
    Ok(())
}

fn check_values(
    ports: Node<'_, '_>,
    def_vlans: Node<'_, '_>,
    settings: &ValidationSettings,
) -> Result<(), SchemaError> {
    let strict = settings.strict_integers;

    let mut seen = HashSet::new();
    for port in xml::children(ports, PORT) {
        let id = entry_id(port, PORT, strict)?;
        if !seen.insert(id) && settings.reject_duplicate_ids {
            return Err(SchemaError::DuplicateId { section: PORTS, id });
        }
    }

    seen.clear();
    for entry in xml::children(def_vlans, DEF_VLAN_PORT) {
        let id = entry_id(entry, DEF_VLAN_PORT, strict)?;
        entry_vlan(entry, strict)?;
        if !seen.insert(id) && settings.reject_duplicate_ids {
            return Err(SchemaError::DuplicateId {
                section: DEF_VLANS,
                id,
            });
        }
    }

    Ok(())
}

/// Parse the `ID` attribute of a `<Port>` or `<port>` entry.
pub(crate) fn entry_id(
    node: Node<'_, '_>,
    tag: &'static str,
    strict: bool,
) -> Result<PortId, SchemaError> {
    let raw = node
        .attribute(ID_ATTR)
        .ok_or(SchemaError::MissingId { tag })?;
    if !strict {
        return Ok(PortId::from_leading_int(raw));
    }
    raw.parse().map_err(|_| SchemaError::InvalidId {
        tag,
        value: raw.to_string(),
    })
}

/// Parse the `<vlan>` child of a `<defVlans>` entry.
pub(crate) fn entry_vlan(node: Node<'_, '_>, strict: bool) -> Result<VlanNumber, SchemaError> {
    let raw = xml::text(xml::child(node, VLAN).ok_or(SchemaError::MissingVlan)?);
    if raw.trim().is_empty() {
        return Err(SchemaError::EmptyVlan);
    }
    if !strict {
        return Ok(VlanNumber::from_leading_int(raw));
    }
    raw.parse().map_err(|_| SchemaError::InvalidVlan {
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctrlsys_test::{documents, ControlSystemXml, DefVlanEntry, PortEntry, VlansSection};
    use pretty_assertions::assert_eq;

    fn check(xml: &ControlSystemXml) -> Result<(), SchemaError> {
        check_with(xml, &ValidationSettings::default())
    }

    fn check_with(xml: &ControlSystemXml, settings: &ValidationSettings) -> Result<(), SchemaError> {
        let text = xml.to_xml();
        let doc = Document::parse(&text).unwrap();
        validate(&doc, settings)
    }

    fn valid() -> ControlSystemXml {
        ControlSystemXml::new()
            .with_port(PortEntry::new("1"))
            .with_def_vlan(DefVlanEntry::new("1", "100"))
    }

    #[test]
    fn test_valid_document() {
        assert_eq!(check(&valid()), Ok(()));
        assert_eq!(check(&documents::two_ports()), Ok(()));
        assert_eq!(check(&documents::port_without_default_vlan()), Ok(()));
    }

    #[test]
    fn test_wrong_root() {
        let err = check(&valid().with_root("SwitchConfig")).unwrap_err();
        assert_eq!(err.to_string(), "XML error: <ControlSystem> node missing");
    }

    #[test]
    fn test_missing_ports() {
        let err = check(&valid().without_ports()).unwrap_err();
        assert_eq!(err, SchemaError::MissingNode { tag: "Ports" });
    }

    #[test]
    fn test_empty_ports() {
        let xml = ControlSystemXml::new().with_def_vlan(DefVlanEntry::new("1", "100"));
        let err = check(&xml).unwrap_err();
        assert_eq!(err.to_string(), "XML error: no <Port> entries inside <Ports>");
    }

    #[test]
    fn test_lowercase_port_not_counted_in_ports() {
        let text = "<ControlSystem><Ports><port ID=\"1\"/></Ports></ControlSystem>";
        let doc = Document::parse(text).unwrap();
        let err = validate(&doc, &ValidationSettings::default()).unwrap_err();
        assert_eq!(
            err,
            SchemaError::NoEntries {
                section: "Ports",
                entry: "Port"
            }
        );
    }

    #[test]
    fn test_port_missing_id() {
        let xml = valid().with_port(PortEntry::new("2").without_id());
        assert_eq!(check(&xml), Err(SchemaError::MissingId { tag: "Port" }));
    }

    #[test]
    fn test_port_missing_each_field() {
        for field in PortField::ALL {
            let xml = ControlSystemXml::new()
                .with_port(PortEntry::new("1").without_field(field.tag_name()))
                .with_def_vlan(DefVlanEntry::new("1", "100"));
            assert_eq!(check(&xml), Err(SchemaError::MissingPortField { field }));
        }
    }

    #[test]
    fn test_port_missing_10g_message() {
        let xml = ControlSystemXml::new()
            .with_port(PortEntry::new("1").without_field("AllowedSpeed_10G"))
            .with_def_vlan(DefVlanEntry::new("1", "100"));
        assert_eq!(
            check(&xml).unwrap_err().to_string(),
            "XML error: <Port> missing tag <AllowedSpeed_10G>"
        );
    }

    #[test]
    fn test_empty_field_value_is_accepted() {
        let xml = ControlSystemXml::new()
            .with_port(PortEntry::new("1").with_field("Up", ""))
            .with_def_vlan(DefVlanEntry::new("1", "100"));
        assert_eq!(check(&xml), Ok(()));
    }

    #[test]
    fn test_missing_vlans() {
        let xml = valid().with_vlans(VlansSection::Missing);
        assert_eq!(check(&xml), Err(SchemaError::MissingNode { tag: "Vlans" }));
    }

    #[test]
    fn test_missing_def_vlans() {
        let xml = valid().with_vlans(VlansSection::WithoutDefVlans);
        assert_eq!(
            check(&xml),
            Err(SchemaError::MissingNode { tag: "defVlans" })
        );
    }

    #[test]
    fn test_empty_def_vlans() {
        let xml = valid().with_vlans(VlansSection::DefVlans(Vec::new()));
        assert_eq!(
            check(&xml).unwrap_err().to_string(),
            "XML error: no <port> entries inside <defVlans>"
        );
    }

    #[test]
    fn test_def_vlan_missing_id() {
        let xml = valid().with_def_vlan(DefVlanEntry::new("2", "200").without_id());
        assert_eq!(check(&xml), Err(SchemaError::MissingId { tag: "port" }));
    }

    #[test]
    fn test_def_vlan_missing_vlan() {
        let xml = valid().with_def_vlan(DefVlanEntry::new("2", "200").without_vlan());
        assert_eq!(check(&xml), Err(SchemaError::MissingVlan));
    }

    #[test]
    fn test_def_vlan_empty_value() {
        let xml = valid().with_def_vlan(DefVlanEntry::new("2", ""));
        assert_eq!(
            check(&xml).unwrap_err().to_string(),
            "XML error: <vlan> tag has no value"
        );
    }

    #[test]
    fn test_def_vlan_whitespace_value() {
        let xml = valid().with_def_vlan(DefVlanEntry::new("2", "   "));
        assert_eq!(check(&xml), Err(SchemaError::EmptyVlan));
    }

    #[test]
    fn test_first_violation_wins() {
        // Port field rule runs before any Vlans rule.
        let xml = ControlSystemXml::new()
            .with_port(PortEntry::new("1").without_field("Up"))
            .with_vlans(VlansSection::Missing);
        assert_eq!(
            check(&xml),
            Err(SchemaError::MissingPortField {
                field: PortField::Up
            })
        );
    }

    fn strict() -> ValidationSettings {
        ValidationSettings {
            strict_integers: true,
            ..ValidationSettings::default()
        }
    }

    #[test]
    fn test_non_integer_values_accepted_by_default() {
        let xml = ControlSystemXml::new()
            .with_port(PortEntry::new("eth0"))
            .with_def_vlan(DefVlanEntry::new("1", "Vlan100"));
        assert_eq!(check(&xml), Ok(()));
    }

    #[test]
    fn test_non_integer_port_id_strict() {
        let xml = ControlSystemXml::new()
            .with_port(PortEntry::new("eth0"))
            .with_def_vlan(DefVlanEntry::new("1", "100"));
        assert_eq!(
            check_with(&xml, &strict()),
            Err(SchemaError::InvalidId {
                tag: "Port",
                value: "eth0".to_string()
            })
        );
    }

    #[test]
    fn test_non_integer_vlan_strict() {
        let xml = valid().with_def_vlan(DefVlanEntry::new("2", "Vlan200"));
        assert_eq!(
            check_with(&xml, &strict()),
            Err(SchemaError::InvalidVlan {
                value: "Vlan200".to_string()
            })
        );
    }

    #[test]
    fn test_vlan_after_comment_is_present() {
        let text = "<ControlSystem><Ports><Port ID=\"1\"><Up/><AutoNegotiationEnabled/>\
                    <AllowedSpeed_10M/><AllowedSpeed_100M/><AllowedSpeed_1G/><AllowedSpeed_10G/>\
                    </Port></Ports><Vlans><defVlans><port ID=\"1\"><vlan><!-- trunk -->100</vlan>\
                    </port></defVlans></Vlans></ControlSystem>";
        let doc = Document::parse(text).unwrap();
        assert_eq!(validate(&doc, &strict()), Ok(()));
    }

    #[test]
    fn test_duplicates_allowed_by_default() {
        assert_eq!(check(&documents::duplicate_default_vlan()), Ok(()));
        let xml = valid().with_port(PortEntry::new("1"));
        assert_eq!(check(&xml), Ok(()));
    }

    #[test]
    fn test_duplicates_rejected_when_enabled() {
        let settings = ValidationSettings {
            reject_duplicate_ids: true,
            ..ValidationSettings::default()
        };
        assert_eq!(
            check_with(&documents::duplicate_default_vlan(), &settings),
            Err(SchemaError::DuplicateId {
                section: "defVlans",
                id: PortId::new(1)
            })
        );

        let xml = valid().with_port(PortEntry::new("1"));
        assert_eq!(
            check_with(&xml, &settings),
            Err(SchemaError::DuplicateId {
                section: "Ports",
                id: PortId::new(1)
            })
        );
    }
}
