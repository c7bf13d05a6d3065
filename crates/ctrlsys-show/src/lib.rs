//! ctrlsys-show - ControlSystem switch configuration checker
//!
//! Validates a `ControlSystem` XML document describing physical switch
//! ports and their default VLAN assignments, then prints each port's
//! settings alongside its resolved default VLAN.
//!
//! The run is strictly sequential: load, validate, build the report, write
//! it. Nothing is written unless every earlier stage succeeded.

mod error;
mod loader;
mod report;
mod settings;
mod validator;
mod vlan_table;
pub mod xml;

use std::io::Write;
use std::path::Path;

pub use error::*;
pub use loader::ConfigSource;
pub use report::{PortReport, Report};
pub use settings::*;
pub use validator::validate;
pub use vlan_table::DefaultVlanTable;

/// Validate the document at `path` and write its port report to `out`.
pub fn run<W: Write>(path: &Path, settings: &CtrlSysSettings, out: &mut W) -> Result<()> {
    let source = ConfigSource::read(path)?;
    let doc = source.parse()?;

    validate(&doc, &settings.validation)?;
    let report = Report::build(&doc, &settings.report)?;

    report.write_to(out).map_err(CtrlSysError::Output)?;
    Ok(())
}
