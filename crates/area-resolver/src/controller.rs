//! Session-level selection controller.
//!
//! The controller owns one [`SelectionState`] and derives levels, breadcrumbs
//! and the leaf code from it on every call. Indices and the catalog are passed
//! in explicitly; the controller never caches them.

use tracing::debug;

use area_model::{
    AreaCode, DropdownLevel, PathError, ResolverOptions, SelectionError, SelectionPath,
};

use crate::catalog::TypeCatalog;
use crate::index::Indices;
use crate::levels::{compute_levels, leaf_code, selection_path};
use crate::path::from_leaf;
use crate::state::{SelectionPhase, SelectionState};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    state: SelectionState,
    auto_advance: bool,
}

impl SelectionController {
    pub fn new(options: &ResolverOptions) -> Self {
        Self {
            state: SelectionState::new(),
            auto_advance: options.auto_advance,
        }
    }

    #[must_use]
    pub fn with_auto_advance(mut self, enable: bool) -> Self {
        self.auto_advance = enable;
        self
    }

    /// Start a session from a stored leaf code.
    ///
    /// # Errors
    ///
    /// Propagates the [`PathError`] from [`from_leaf`].
    pub fn from_leaf(
        leaf: &str,
        indices: &Indices,
        options: &ResolverOptions,
    ) -> Result<Self, PathError> {
        let selections = from_leaf(leaf, indices)?;
        Ok(Self {
            state: SelectionState::from_codes(selections),
            auto_advance: options.auto_advance,
        })
    }

    /// Replace the selection with the path to `leaf`. On error the selection
    /// is left empty.
    ///
    /// # Errors
    ///
    /// Propagates the [`PathError`] from [`from_leaf`].
    pub fn restore(&mut self, leaf: &str, indices: &Indices) -> Result<(), PathError> {
        match from_leaf(leaf, indices) {
            Ok(selections) => {
                self.state = SelectionState::from_codes(selections);
                Ok(())
            }
            Err(error) => {
                self.state.reset();
                Err(error)
            }
        }
    }

    pub fn auto_advance_enabled(&self) -> bool {
        self.auto_advance
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selections(&self) -> &[AreaCode] {
        self.state.as_slice()
    }

    /// Cascade-clear from `depth` and select `code` there (blank clears).
    pub fn select(&mut self, depth: usize, code: &str) {
        self.state.select(depth, code);
    }

    /// Like [`select`](Self::select), but only accepts a code that is an option
    /// of a currently presented level.
    ///
    /// # Errors
    ///
    /// - [`SelectionError::DepthOutOfRange`] when `depth` is past the presented levels.
    /// - [`SelectionError::NotAnOption`] when `code` is not among that level's options.
    pub fn try_select(
        &mut self,
        indices: &Indices,
        catalog: &TypeCatalog,
        depth: usize,
        code: &str,
    ) -> Result<(), SelectionError> {
        let levels = self.levels(indices, catalog);
        let Some(level) = levels.get(depth) else {
            return Err(SelectionError::DepthOutOfRange {
                depth,
                levels: levels.len(),
            });
        };
        let code = code.trim();
        if !code.is_empty() && !level.contains(code) {
            return Err(SelectionError::NotAnOption {
                depth,
                code: code.to_string(),
            });
        }
        self.select(depth, code);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn levels(&self, indices: &Indices, catalog: &TypeCatalog) -> Vec<DropdownLevel> {
        compute_levels(indices, self.state.as_slice(), catalog)
    }

    pub fn selection_path(&self, indices: &Indices, catalog: &TypeCatalog) -> SelectionPath {
        selection_path(&self.levels(indices, catalog))
    }

    pub fn leaf_code(&self, indices: &Indices, catalog: &TypeCatalog) -> Option<AreaCode> {
        leaf_code(&self.levels(indices, catalog))
    }

    pub fn phase(&self, indices: &Indices) -> SelectionPhase {
        self.state.phase(indices)
    }

    /// Select the only option of the first unselected level, if it has
    /// exactly one. Performs at most one selection per call and returns it.
    pub fn auto_advance(&mut self, indices: &Indices, catalog: &TypeCatalog) -> Option<AreaCode> {
        if !self.auto_advance {
            return None;
        }
        let levels = self.levels(indices, catalog);
        let level = levels.last().filter(|level| !level.is_selected())?;
        let only = level.single_option()?.code.clone();
        debug!(depth = level.depth, code = %only, "Auto-advanced single-option level");
        self.state.select(level.depth, only.as_str());
        Some(only)
    }

    /// Call [`auto_advance`](Self::auto_advance) until it stops selecting or
    /// `limit` steps were taken. Returns the number of steps.
    pub fn settle(&mut self, indices: &Indices, catalog: &TypeCatalog, limit: usize) -> usize {
        let mut steps = 0;
        while steps < limit && self.auto_advance(indices, catalog).is_some() {
            steps += 1;
        }
        steps
    }
}
