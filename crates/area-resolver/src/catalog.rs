//! Level type catalog keyed by type id.
//!
//! The catalog is the single source of truth for level names. Type stubs
//! embedded in nodes are only compared against it; a disagreement is
//! reported, and neither side is rewritten.

use std::collections::HashMap;

use tracing::{debug, warn};

use area_model::{
    AreaNode, IndexIssue, IndexReport, IssueKind, LevelType, LevelTypeId, ResolverOptions,
    TypeStubPolicy,
};

#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    types: HashMap<LevelTypeId, LevelType>,
}

impl TypeCatalog {
    /// Build a catalog. When an id repeats, the first definition is kept.
    pub fn new<I>(types: I) -> Self
    where
        I: IntoIterator<Item = LevelType>,
    {
        let mut map = HashMap::new();
        for level_type in types {
            if map.contains_key(&level_type.id) {
                debug!(type_id = %level_type.id, "Ignoring repeated level type definition");
                continue;
            }
            map.insert(level_type.id, level_type);
        }
        Self { types: map }
    }

    pub fn get(&self, id: LevelTypeId) -> Option<&LevelType> {
        self.types.get(&id)
    }

    pub fn contains(&self, id: LevelTypeId) -> bool {
        self.types.contains_key(&id)
    }

    /// Catalog name for `id`, or `""` when the id is unknown.
    pub fn name_of(&self, id: LevelTypeId) -> &str {
        self.get(id).map_or("", |level_type| level_type.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Types ordered by `rank`, then id.
    pub fn by_rank(&self) -> Vec<&LevelType> {
        let mut types: Vec<&LevelType> = self.types.values().collect();
        types.sort_by_key(|level_type| (level_type.rank, level_type.id));
        types
    }
}

/// Report nodes whose `type_id` is missing from the catalog.
pub fn unknown_type_issues(nodes: &[AreaNode], catalog: &TypeCatalog) -> Vec<IndexIssue> {
    nodes
        .iter()
        .filter(|node| !catalog.contains(node.type_id))
        .map(|node| {
            warn!(code = %node.code, type_id = %node.type_id, "Unknown level type");
            IndexIssue::warning(
                IssueKind::UnknownLevelType,
                Some(node.code.clone()),
                format!("level type {} is not in the catalog", node.type_id),
            )
        })
        .collect()
}

/// Compare each embedded type stub with the node's `type_id` and the catalog.
pub fn reconcile_type_stubs(nodes: &[AreaNode], catalog: &TypeCatalog) -> Vec<IndexIssue> {
    let mut issues = Vec::new();
    for node in nodes {
        let Some(stub) = &node.type_stub else {
            continue;
        };
        let mut problems = Vec::new();
        if stub.id != node.type_id {
            problems.push(format!(
                "stub id {} differs from typeId {}",
                stub.id, node.type_id
            ));
        }
        if let Some(level_type) = catalog.get(stub.id) {
            if let Some(name) = &stub.name
                && name != &level_type.name
            {
                problems.push(format!(
                    "stub name {name:?} differs from catalog name {:?}",
                    level_type.name
                ));
            }
            if let Some(code) = &stub.code
                && code != &level_type.code
            {
                problems.push(format!(
                    "stub code {code:?} differs from catalog code {:?}",
                    level_type.code
                ));
            }
        } else if stub.id != node.type_id {
            problems.push(format!("stub id {} is not in the catalog", stub.id));
        }
        if problems.is_empty() {
            continue;
        }
        let message = problems.join("; ");
        warn!(code = %node.code, details = %message, "Embedded type stub disagrees with catalog");
        issues.push(IndexIssue::warning(
            IssueKind::TypeStubMismatch,
            Some(node.code.clone()),
            message,
        ));
    }
    issues
}

/// Catalog checks for a node set, honoring the stub policy.
pub fn check_catalog(
    nodes: &[AreaNode],
    catalog: &TypeCatalog,
    options: &ResolverOptions,
) -> IndexReport {
    let mut report = IndexReport::default();
    report.extend(unknown_type_issues(nodes, catalog));
    if options.type_stubs == TypeStubPolicy::Warn {
        report.extend(reconcile_type_stubs(nodes, catalog));
    }
    report
}
