//! Report verification helpers
//!
//! Parses the plain-text port report back into per-port blocks so tests
//! can assert on individual values.

/// One `Port ID="..."` block of the printed report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportBlock {
    /// Port ID as printed inside the quotes
    pub id: String,
    /// `(label, value)` lines in printed order, `Default VLAN` included
    pub lines: Vec<(String, String)>,
}

impl ReportBlock {
    /// Value printed for a label
    pub fn value(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, value)| value.as_str())
    }

    /// Value printed on the `Default VLAN` line
    pub fn default_vlan(&self) -> Option<&str> {
        self.value("Default VLAN")
    }
}

/// Split report output into port blocks
pub fn parse_report(output: &str) -> Vec<ReportBlock> {
    let mut blocks: Vec<ReportBlock> = Vec::new();

    for line in output.lines() {
        if let Some(rest) = line.strip_prefix("Port ID=\"") {
            blocks.push(ReportBlock {
                id: rest.trim_end_matches('"').to_string(),
                lines: Vec::new(),
            });
        } else if let Some(rest) = line.strip_prefix("  ") {
            if let (Some(block), Some((label, value))) = (blocks.last_mut(), rest.split_once(": "))
            {
                block.lines.push((label.to_string(), value.to_string()));
            }
        }
    }

    blocks
}
