use thiserror::Error;

use crate::{AreaCode, IndexIssue, IssueKind};

/// Label used for the root bucket in messages.
pub const ROOT_LABEL: &str = "<root>";

/// Errors raised while constructing model values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid area code: {0:?}")]
    InvalidCode(String),
}

/// Integrity violations that make a node set unusable for index building.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IndexError {
    /// Two or more nodes share a code. Every offending code is listed once.
    #[error("duplicate area codes: {}", join_codes(.codes))]
    DuplicateCodes { codes: Vec<AreaCode> },

    /// A parent's children carry more than one type id.
    ///
    /// Only raised under `SiblingTypePolicy::Reject`.
    #[error("mixed level types among children of: {}", .parents.join(", "))]
    MixedSiblingTypes { parents: Vec<String> },
}

impl IndexError {
    /// One error-severity issue per offending code or parent, for reports that
    /// list fatal findings next to the recoverable ones.
    pub fn issues(&self) -> Vec<IndexIssue> {
        match self {
            Self::DuplicateCodes { codes } => codes
                .iter()
                .map(|code| {
                    IndexIssue::error(
                        IssueKind::DuplicateCode,
                        Some(code.clone()),
                        format!("code {code} is used by more than one node"),
                    )
                })
                .collect(),
            Self::MixedSiblingTypes { parents } => parents
                .iter()
                .map(|parent| {
                    let code =
                        AreaCode::parse_optional(parent).filter(|_| parent != ROOT_LABEL);
                    IndexIssue::error(
                        IssueKind::MixedSiblingTypes,
                        code,
                        format!("children of {parent} carry mixed level types"),
                    )
                })
                .collect(),
        }
    }
}

/// Failures while reconstructing a selection sequence from a stored leaf code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PathError {
    /// The leaf code is not present in the current code index.
    #[error("area code not found: {code}")]
    NotFound { code: String },

    /// The ancestor walk did not reach a root within the node count.
    #[error("cycle detected while walking ancestors of {code} (limit {limit})")]
    CycleDetected { code: AreaCode, limit: usize },

    /// The walk reached a node whose parent is not indexed.
    #[error("area {code} references unknown parent {parent}")]
    DanglingParent { code: AreaCode, parent: AreaCode },
}

impl PathError {
    /// Returns true when the stored code is simply unknown, as opposed to the
    /// data around it being corrupt.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Rejections from validated selection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectionError {
    #[error("depth {depth} is not selectable; {levels} level(s) are currently available")]
    DepthOutOfRange { depth: usize, levels: usize },

    #[error("{code} is not an option at depth {depth}")]
    NotAnOption { depth: usize, code: String },
}

fn join_codes(codes: &[AreaCode]) -> String {
    codes
        .iter()
        .map(AreaCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, ModelError>;
