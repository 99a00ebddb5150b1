//! Issues reported by the audits.
//!
//! An issue is an audit failure, not an error: the audit ran to completion
//! and found keys out of place. Decode and I/O problems are errors instead.

/// A key in the reference locale that the registry does not list.
///
/// Fixed by regenerating the registry (`langc save-keys`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnregisteredKeyIssue {
    pub key: String,
}

/// A registry key that no locale file supplies.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MissingKeyIssue {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Issue {
    UnregisteredKey(UnregisteredKeyIssue),
    MissingKey(MissingKeyIssue),
}
