use std::fmt;

use serde::{Deserialize, Serialize};

use crate::AreaCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warning => "warning",
        })
    }
}

/// Category of a finding made while building indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Two or more nodes share a code. Fatal to the build.
    DuplicateCode,
    /// `parentCode` does not resolve; the node is left out of the children index.
    OrphanNode,
    /// The parent chain never reaches a root (cycle, or below an orphan).
    UnreachableNode,
    /// The node's `typeId` has no catalog entry.
    UnknownLevelType,
    /// The embedded type stub disagrees with the catalog or the node's `typeId`.
    TypeStubMismatch,
    /// Siblings carry different type ids. Fatal under the reject policy,
    /// otherwise the first child's type is used.
    MixedSiblingTypes,
}

impl IssueKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DuplicateCode => "duplicate_code",
            Self::OrphanNode => "orphan_node",
            Self::UnreachableNode => "unreachable_node",
            Self::UnknownLevelType => "unknown_level_type",
            Self::TypeStubMismatch => "type_stub_mismatch",
            Self::MixedSiblingTypes => "mixed_sibling_types",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finding about the source node set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexIssue {
    pub kind: IssueKind,
    pub severity: IssueSeverity,
    /// Node the issue is about, when it concerns a single node.
    pub code: Option<AreaCode>,
    /// Human-readable message describing the issue.
    pub message: String,
}

impl IndexIssue {
    pub fn warning(kind: IssueKind, code: Option<AreaCode>, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: IssueSeverity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn error(kind: IssueKind, code: Option<AreaCode>, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Error,
            ..Self::warning(kind, code, message)
        }
    }
}

/// Findings collected over one index build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexReport {
    pub issues: Vec<IndexIssue>,
}

impl IndexReport {
    pub fn push(&mut self, issue: IndexIssue) {
        self.issues.push(issue);
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = IndexIssue>) {
        self.issues.extend(issues);
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn count_of(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|issue| issue.kind == kind).count()
    }

    /// Codes of all nodes reported under `kind`.
    pub fn codes_of(&self, kind: IssueKind) -> Vec<&AreaCode> {
        self.issues
            .iter()
            .filter(|issue| issue.kind == kind)
            .filter_map(|issue| issue.code.as_ref())
            .collect()
    }
}
