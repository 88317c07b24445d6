//! Shared, atomically swapped index snapshots.
//!
//! Readers get an immutable `Arc<Snapshot>`; a refresh builds a complete new
//! snapshot and swaps it in, so no reader ever sees a half-built index.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use tracing::{info, warn};

use area_model::{
    AreaCode, AreaNode, DropdownLevel, IndexError, IndexReport, LevelType, ResolverOptions,
};

use crate::catalog::{TypeCatalog, check_catalog};
use crate::index::Indices;
use crate::levels::compute_levels;

/// Indices and catalog for one tenant's node set, plus every finding made
/// while building them.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub indices: Indices,
    pub catalog: TypeCatalog,
    pub report: IndexReport,
}

impl Snapshot {
    /// # Errors
    ///
    /// See [`Indices::build`].
    pub fn build(
        nodes: &[AreaNode],
        types: Vec<LevelType>,
        options: &ResolverOptions,
    ) -> Result<Self, IndexError> {
        let indices = Indices::build(nodes, options)?;
        let catalog = TypeCatalog::new(types);
        let mut report = indices.report().clone();
        report.extend(check_catalog(nodes, &catalog, options).issues);
        Ok(Self {
            indices,
            catalog,
            report,
        })
    }

    pub fn levels(&self, selections: &[AreaCode]) -> Vec<DropdownLevel> {
        compute_levels(&self.indices, selections, &self.catalog)
    }
}

/// Holder of the current snapshot. Empty until the first successful build.
#[derive(Debug, Default)]
pub struct IndexStore {
    current: ArcSwapOption<Snapshot>,
}

impl IndexStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot, or `None` while data is not yet available.
    pub fn load(&self) -> Option<Arc<Snapshot>> {
        self.current.load_full()
    }

    pub fn is_loaded(&self) -> bool {
        self.current.load().is_some()
    }

    /// Build a new snapshot and publish it.
    ///
    /// On failure the previous snapshot stays current.
    ///
    /// # Errors
    ///
    /// See [`Indices::build`].
    pub fn replace(
        &self,
        nodes: &[AreaNode],
        types: Vec<LevelType>,
        options: &ResolverOptions,
    ) -> Result<Arc<Snapshot>, IndexError> {
        match Snapshot::build(nodes, types, options) {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                self.current.store(Some(Arc::clone(&snapshot)));
                info!(
                    nodes = snapshot.indices.len(),
                    issues = snapshot.report.issues.len(),
                    "Published area index snapshot"
                );
                Ok(snapshot)
            }
            Err(error) => {
                warn!(%error, "Kept previous area index snapshot");
                Err(error)
            }
        }
    }

    /// Publish an already built snapshot.
    pub fn publish(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let snapshot = Arc::new(snapshot);
        self.current.store(Some(Arc::clone(&snapshot)));
        snapshot
    }

    pub fn clear(&self) {
        self.current.store(None);
    }

    /// Levels for `selections` against the current snapshot; empty while
    /// nothing is loaded.
    pub fn levels(&self, selections: &[AreaCode]) -> Vec<DropdownLevel> {
        self.load()
            .map(|snapshot| snapshot.levels(selections))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use area_model::LevelTypeId;

    use super::*;

    fn root(code: &str) -> AreaNode {
        AreaNode::new(AreaCode::new(code).unwrap(), code, LevelTypeId::new(1), None)
    }

    #[test]
    fn empty_store_yields_no_levels() {
        let store = IndexStore::new();
        assert!(!store.is_loaded());
        assert!(store.levels(&[]).is_empty());
    }

    #[test]
    fn failed_replace_keeps_previous_snapshot() {
        let store = IndexStore::new();
        store
            .replace(&[root("MA")], Vec::new(), &ResolverOptions::default())
            .unwrap();
        let before = store.load().unwrap();

        let err = store
            .replace(&[root("RA"), root("RA")], Vec::new(), &ResolverOptions::default())
            .unwrap_err();
        assert!(matches!(err, IndexError::DuplicateCodes { .. }));

        let after = store.load().unwrap();
        assert!(Arc::ptr_eq(&before, &after));
        assert_eq!(store.levels(&[])[0].options[0].code, "MA");
    }

    #[test]
    fn readers_keep_their_snapshot_across_swaps() {
        let store = IndexStore::new();
        store
            .replace(&[root("MA")], Vec::new(), &ResolverOptions::default())
            .unwrap();
        let held = store.load().unwrap();
        store
            .replace(&[root("RA")], Vec::new(), &ResolverOptions::default())
            .unwrap();
        assert!(held.indices.contains("MA"));
        assert!(!store.load().unwrap().indices.contains("MA"));
        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn publish_swaps_in_prebuilt_snapshot() {
        let store = IndexStore::new();
        let snapshot = Snapshot::build(
            &[root("MA"), root("RA")],
            vec![LevelType::new(LevelTypeId::new(1), "REG", "Region")],
            &ResolverOptions::default(),
        )
        .unwrap();
        let published = store.publish(snapshot);
        assert!(store.is_loaded());
        assert!(Arc::ptr_eq(&published, &store.load().unwrap()));

        let levels = store.levels(&[AreaCode::new("RA").unwrap()]);
        assert_eq!(levels[0].type_name, "Region");
        assert_eq!(levels[0].selected_str(), "RA");
    }
}
