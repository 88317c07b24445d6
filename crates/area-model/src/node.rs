//! Area hierarchy entries and level type definitions.
//!
//! Nodes arrive as a flat list from the tenant's data source. Each node only
//! knows its parent; depth and level order are derived later from the parent
//! links, never from the type's `rank`.

use serde::{Deserialize, Serialize};

use crate::{AreaCode, LevelTypeId};

/// A single entry of the area hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaNode {
    /// Unique, stable identifier.
    pub code: AreaCode,

    /// Display name.
    pub name: String,

    /// Localized display name, when the tenant provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_name: Option<String>,

    /// Level type this node belongs to.
    pub type_id: LevelTypeId,

    /// Parent code. `None` marks a root. Blank strings are read as `None`.
    #[serde(default, deserialize_with = "crate::ids::blank_code::deserialize")]
    pub parent_code: Option<AreaCode>,

    /// Sibling ordering key.
    #[serde(default)]
    pub sort_order: i64,

    /// Type metadata embedded by some data sources. Reconciled against the
    /// catalog, never trusted over it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_stub: Option<LevelTypeStub>,
}

impl AreaNode {
    pub fn new(
        code: AreaCode,
        name: impl Into<String>,
        type_id: LevelTypeId,
        parent_code: Option<AreaCode>,
    ) -> Self {
        Self {
            code,
            name: name.into(),
            local_name: None,
            type_id,
            parent_code,
            sort_order: 0,
            type_stub: None,
        }
    }

    #[must_use]
    pub fn with_sort_order(mut self, sort_order: i64) -> Self {
        self.sort_order = sort_order;
        self
    }

    #[must_use]
    pub fn with_local_name(mut self, local_name: impl Into<String>) -> Self {
        self.local_name = Some(local_name.into());
        self
    }

    #[must_use]
    pub fn with_type_stub(mut self, stub: LevelTypeStub) -> Self {
        self.type_stub = Some(stub);
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_code.is_none()
    }

    /// Sibling ordering: `sort_order`, then `code`.
    pub fn sort_key(&self) -> (i64, &str) {
        (self.sort_order, self.code.as_str())
    }

    /// Name to show, preferring the localized one when asked and available.
    pub fn display_name(&self, prefer_local: bool) -> &str {
        match (&self.local_name, prefer_local) {
            (Some(local), true) if !local.trim().is_empty() => local,
            _ => &self.name,
        }
    }
}

/// Definition of one hierarchy level (province, district, ...).
///
/// `rank` is a display hint only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelType {
    pub id: LevelTypeId,
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_name: Option<String>,
    #[serde(default)]
    pub rank: i32,
}

impl LevelType {
    pub fn new(id: LevelTypeId, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            local_name: None,
            rank: 0,
        }
    }

    #[must_use]
    pub fn with_rank(mut self, rank: i32) -> Self {
        self.rank = rank;
        self
    }

    #[must_use]
    pub fn with_local_name(mut self, local_name: impl Into<String>) -> Self {
        self.local_name = Some(local_name.into());
        self
    }

    pub fn display_name(&self, prefer_local: bool) -> &str {
        match (&self.local_name, prefer_local) {
            (Some(local), true) if !local.trim().is_empty() => local,
            _ => &self.name,
        }
    }
}

/// Partial type metadata embedded in a node by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelTypeStub {
    pub id: LevelTypeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
