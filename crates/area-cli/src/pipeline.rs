//! Command logic shared by the binary and tests.

use anyhow::{Context, Result};
use tracing::{error, info, info_span};

use area_model::{AreaCode, PathError};
use area_resolver::{SelectionController, from_leaf, leaf_code, selection_path};

use crate::dataset::Dataset;
use crate::types::{CheckOutcome, LevelsOutcome, PathOutcome};

/// Build indices and gather every finding. A fatal build error is captured
/// in the outcome rather than returned, and listed in the report as
/// error-severity issues.
pub fn check(dataset: &Dataset) -> CheckOutcome {
    let span = info_span!("check", tenant = %dataset.label());
    let _guard = span.enter();
    let mut outcome = CheckOutcome {
        tenant: dataset.label().to_string(),
        nodes: dataset.nodes.len(),
        types: dataset.types.len(),
        roots: 0,
        max_depth: 0,
        report: Default::default(),
        fatal: None,
    };
    match dataset.snapshot() {
        Ok(snapshot) => {
            outcome.roots = snapshot.indices.roots().len();
            outcome.max_depth = snapshot.indices.max_depth();
            outcome.report = snapshot.report;
        }
        Err(error) => {
            error!(%error, "Area node set is unusable");
            outcome.report.extend(error.issues());
            outcome.fatal = Some(error);
        }
    }
    info!(
        errors = outcome.report.error_count(),
        warnings = outcome.report.warning_count(),
        fatal = outcome.fatal.is_some(),
        "Checked dataset"
    );
    outcome
}

/// Apply `selections` depth by depth, then optionally settle auto-advance.
pub fn walk(dataset: &Dataset, selections: &[String]) -> Result<LevelsOutcome> {
    let snapshot = dataset.snapshot().context("build indices")?;
    let (indices, catalog) = (&snapshot.indices, &snapshot.catalog);
    let mut controller = SelectionController::new(&dataset.options);
    for (depth, code) in selections.iter().enumerate() {
        controller
            .try_select(indices, catalog, depth, code)
            .with_context(|| format!("select {code} at depth {depth}"))?;
    }
    let manual = controller.selections().len();
    let steps = controller.settle(indices, catalog, indices.max_depth() + 1);
    let auto_selected = controller
        .selections()
        .get(manual..)
        .map(<[AreaCode]>::to_vec)
        .unwrap_or_default();
    if steps > 0 {
        info!(steps, "Auto-advanced single-option levels");
    }
    let levels = controller.levels(indices, catalog);
    let path = selection_path(&levels);
    let leaf = leaf_code(&levels);
    Ok(LevelsOutcome {
        levels,
        path,
        leaf,
        auto_selected,
    })
}

/// Rebuild the selection for a stored leaf code.
pub fn trace_leaf(dataset: &Dataset, leaf: &str) -> Result<PathOutcome, TraceError> {
    let snapshot = dataset.snapshot().map_err(TraceError::Index)?;
    let selections = from_leaf(leaf, &snapshot.indices).map_err(TraceError::Path)?;
    let levels = snapshot.levels(&selections);
    Ok(PathOutcome {
        leaf: leaf.trim().to_string(),
        path: selection_path(&levels),
        selections,
    })
}

/// Failures of [`trace_leaf`], kept apart so callers can tell an unknown code
/// from broken data.
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("build indices: {0}")]
    Index(area_model::IndexError),
    #[error(transparent)]
    Path(PathError),
}

impl TraceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Path(error) if error.is_not_found())
    }
}

/// Codes of a selection as plain strings, for display.
pub fn code_strings(codes: &[AreaCode]) -> Vec<&str> {
    codes.iter().map(AreaCode::as_str).collect()
}
