//! Dynamic hierarchical-selection resolution.
//!
//! This crate turns a flat, parent-pointer node list into cascading selection
//! levels:
//!
//! - **index**: children and code indices, orphan and reachability checks
//! - **catalog**: level type lookup and embedded type stub reconciliation
//! - **levels**: level computation, breadcrumbs and leaf derivation
//! - **path**: selection reconstruction from a stored leaf code
//! - **state** / **controller**: the per-session selection sequence
//! - **store**: atomically swapped snapshots shared between sessions

pub mod catalog;
pub mod controller;
pub mod index;
pub mod levels;
pub mod path;
pub mod state;
pub mod store;

pub use catalog::{TypeCatalog, check_catalog, reconcile_type_stubs, unknown_type_issues};
pub use controller::SelectionController;
pub use index::{
    ChildrenIndex, CodeIndex, Indices, build_children_index, build_code_index, build_indices,
};
pub use levels::{compute_levels, effective_selections, leaf_code, selection_path};
pub use path::from_leaf;
pub use state::{SelectionPhase, SelectionState};
pub use store::{IndexStore, Snapshot};
