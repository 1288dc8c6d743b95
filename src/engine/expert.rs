#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Chat,
    Note,
    Warn,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpertGroup {
    Protocol,
    Malformed,
    Sequence,
}

/// Diagnostic notice attached to a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpertInfo {
    pub abbrev: &'static str,
    pub group: ExpertGroup,
    pub severity: Severity,
    pub summary: &'static str,
}

pub const RAW_NO_LINK: ExpertInfo = ExpertInfo {
    abbrev: "raw.no_link",
    group: ExpertGroup::Protocol,
    severity: Severity::Note,
    summary: "No link information available",
};
