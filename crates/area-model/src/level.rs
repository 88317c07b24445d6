//! Derived, per-call views of a selection: renderable levels and breadcrumbs.

use serde::{Deserialize, Serialize};

use crate::{AreaCode, AreaNode, LevelTypeId};

/// One renderable depth of the cascade: its candidates and current choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownLevel {
    pub depth: usize,
    pub type_id: LevelTypeId,
    /// Catalog name of the level type; empty when the type id is unknown.
    pub type_name: String,
    pub options: Vec<AreaNode>,
    /// Serialized as `""` when nothing is selected.
    #[serde(default, with = "crate::ids::blank_code")]
    pub selected_code: Option<AreaCode>,
}

impl DropdownLevel {
    pub fn is_selected(&self) -> bool {
        self.selected_code.is_some()
    }

    pub fn selected_node(&self) -> Option<&AreaNode> {
        let selected = self.selected_code.as_ref()?;
        self.options.iter().find(|node| &node.code == selected)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.options.iter().any(|node| node.code.as_str() == code)
    }

    /// The sole candidate, when there is exactly one.
    pub fn single_option(&self) -> Option<&AreaNode> {
        match self.options.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Selected code as the string form persisted by forms (`""` when unset).
    pub fn selected_str(&self) -> &str {
        self.selected_code.as_ref().map_or("", AreaCode::as_str)
    }
}

/// One breadcrumb entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionPathEntry {
    pub type_id: LevelTypeId,
    pub type_name: String,
    pub area_code: AreaCode,
    pub area_name: String,
}

/// Root-to-leaf breadcrumb of every depth with a valid selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionPath {
    entries: Vec<SelectionPathEntry>,
}

impl SelectionPath {
    pub fn new(entries: Vec<SelectionPathEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SelectionPathEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectionPathEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn leaf(&self) -> Option<&SelectionPathEntry> {
        self.entries.last()
    }

    pub fn leaf_code(&self) -> Option<&AreaCode> {
        self.leaf().map(|entry| &entry.area_code)
    }

    /// Leaf code as persisted by the enclosing form; `""` for an empty path.
    pub fn leaf_code_str(&self) -> &str {
        self.leaf_code().map_or("", AreaCode::as_str)
    }

    pub fn codes(&self) -> Vec<AreaCode> {
        self.entries
            .iter()
            .map(|entry| entry.area_code.clone())
            .collect()
    }
}

impl<'a> IntoIterator for &'a SelectionPath {
    type Item = &'a SelectionPathEntry;
    type IntoIter = std::slice::Iter<'a, SelectionPathEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
