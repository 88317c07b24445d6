//! The per-session selection sequence.

use area_model::{AreaCode, DropdownLevel};

use crate::catalog::TypeCatalog;
use crate::index::Indices;
use crate::levels::compute_levels;

/// Where a selection sequence stands relative to the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Empty,
    /// `k` depths selected, deeper levels still available.
    Partial(usize),
    /// The last selection has no children.
    Complete,
}

impl SelectionPhase {
    /// Phase of computed levels. Only selections that survived pruning count.
    pub fn from_levels(levels: &[DropdownLevel]) -> Self {
        let selected = levels
            .iter()
            .take_while(|level| level.is_selected())
            .count();
        match levels.last() {
            _ if selected == 0 => Self::Empty,
            Some(last) if last.is_selected() => Self::Complete,
            _ => Self::Partial(selected),
        }
    }
}

/// Ordered selected codes, one per depth, without gaps.
///
/// Only [`select`](Self::select) and [`reset`](Self::reset) mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selections: Vec<AreaCode>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_codes(selections: Vec<AreaCode>) -> Self {
        Self { selections }
    }

    /// Keep depths `0..depth`, then append `code` unless it is blank.
    ///
    /// Everything at or below `depth` is discarded even when `code` equals
    /// the previous value.
    pub fn select(&mut self, depth: usize, code: &str) {
        self.selections.truncate(depth);
        if let Some(code) = AreaCode::parse_optional(code) {
            self.selections.push(code);
        }
    }

    pub fn reset(&mut self) {
        self.selections.clear();
    }

    pub fn as_slice(&self) -> &[AreaCode] {
        &self.selections
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn last(&self) -> Option<&AreaCode> {
        self.selections.last()
    }

    /// Phase against `indices`. A stale code and everything after it do not
    /// count, matching [`compute_levels`].
    pub fn phase(&self, indices: &Indices) -> SelectionPhase {
        let levels = compute_levels(indices, &self.selections, &TypeCatalog::default());
        SelectionPhase::from_levels(&levels)
    }
}
