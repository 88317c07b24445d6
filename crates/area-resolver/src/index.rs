//! Children and code indices built from a flat node list.
//!
//! Indices are immutable once built. A data refresh builds a new pair; see
//! [`crate::store::IndexStore`] for the swap.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use tracing::{debug, debug_span, warn};

use area_model::{
    AreaCode, AreaNode, IndexError, IndexIssue, IndexReport, IssueKind, LevelTypeId,
    ResolverOptions, SiblingTypePolicy,
};

pub use area_model::ROOT_LABEL;

/// Code to node lookup, used for ancestor walks.
pub type CodeIndex = HashMap<AreaCode, AreaNode>;

/// Nodes grouped by parent, each bucket sorted by `(sort_order, code)`.
#[derive(Debug, Clone, Default)]
pub struct ChildrenIndex {
    roots: Vec<AreaNode>,
    by_parent: HashMap<AreaCode, Vec<AreaNode>>,
}

impl ChildrenIndex {
    /// Children of `parent`, or the roots when `parent` is `None`.
    pub fn get(&self, parent: Option<&str>) -> Option<&[AreaNode]> {
        let bucket = match parent {
            None => &self.roots,
            Some(code) => self.by_parent.get(code)?,
        };
        if bucket.is_empty() {
            None
        } else {
            Some(bucket.as_slice())
        }
    }

    pub fn roots(&self) -> &[AreaNode] {
        &self.roots
    }

    /// Buckets keyed by parent (`None` for the roots), in no particular order.
    pub fn buckets(&self) -> impl Iterator<Item = (Option<&AreaCode>, &[AreaNode])> {
        let roots = (!self.roots.is_empty()).then_some((None, self.roots.as_slice()));
        roots.into_iter().chain(
            self.by_parent
                .iter()
                .map(|(parent, children)| (Some(parent), children.as_slice())),
        )
    }
}

/// Build the code index, failing on duplicate codes.
///
/// # Errors
///
/// Returns [`IndexError::DuplicateCodes`] listing every code seen more than
/// once, sorted.
pub fn build_code_index(nodes: &[AreaNode]) -> Result<CodeIndex, IndexError> {
    let mut index = CodeIndex::with_capacity(nodes.len());
    let mut duplicates = BTreeSet::new();
    for node in nodes {
        if index.contains_key(&node.code) {
            duplicates.insert(node.code.clone());
            continue;
        }
        index.insert(node.code.clone(), node.clone());
    }
    if !duplicates.is_empty() {
        return Err(IndexError::DuplicateCodes {
            codes: duplicates.into_iter().collect(),
        });
    }
    Ok(index)
}

/// Group nodes by parent. Nodes whose parent is not in `codes` are orphans:
/// they are left out and reported.
pub fn build_children_index(
    nodes: &[AreaNode],
    codes: &CodeIndex,
) -> (ChildrenIndex, Vec<IndexIssue>) {
    let mut index = ChildrenIndex::default();
    let mut issues = Vec::new();
    for node in nodes {
        match &node.parent_code {
            None => index.roots.push(node.clone()),
            Some(parent) if codes.contains_key(parent) => index
                .by_parent
                .entry(parent.clone())
                .or_default()
                .push(node.clone()),
            Some(parent) => {
                warn!(
                    code = %node.code,
                    parent = %parent,
                    "Excluded orphan area node with unknown parent"
                );
                issues.push(IndexIssue::warning(
                    IssueKind::OrphanNode,
                    Some(node.code.clone()),
                    format!("parent {parent} does not exist"),
                ));
            }
        }
    }
    index.roots.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    for bucket in index.by_parent.values_mut() {
        bucket.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    }
    (index, issues)
}

/// The built indices for one node set.
#[derive(Debug, Clone, Default)]
pub struct Indices {
    children: ChildrenIndex,
    codes: CodeIndex,
    max_depth: usize,
    report: IndexReport,
}

impl Indices {
    /// Build both indices and run the structural checks.
    ///
    /// # Errors
    ///
    /// Fails on duplicate codes, and on mixed sibling types when the policy
    /// is [`SiblingTypePolicy::Reject`].
    pub fn build(nodes: &[AreaNode], options: &ResolverOptions) -> Result<Self, IndexError> {
        let span = debug_span!("build_indices", nodes = nodes.len());
        let _guard = span.enter();

        let codes = build_code_index(nodes)?;
        let (children, orphan_issues) = build_children_index(nodes, &codes);
        let mut report = IndexReport::default();
        report.extend(orphan_issues);

        let mixed = mixed_sibling_parents(&children);
        if !mixed.is_empty() {
            match options.sibling_types {
                SiblingTypePolicy::Reject => {
                    return Err(IndexError::MixedSiblingTypes { parents: mixed });
                }
                SiblingTypePolicy::Warn => {
                    for parent in mixed {
                        warn!(parent = %parent, "Children carry mixed level types");
                        let code = AreaCode::parse_optional(&parent)
                            .filter(|_| parent != ROOT_LABEL);
                        report.push(IndexIssue::warning(
                            IssueKind::MixedSiblingTypes,
                            code,
                            format!("children of {parent} carry mixed level types"),
                        ));
                    }
                }
            }
        }

        let (reached, max_depth) = walk_reachable(&children);
        let mut unreachable: Vec<&AreaNode> = codes
            .values()
            .filter(|node| !reached.contains(node.code.as_str()))
            .filter(|node| {
                node.parent_code
                    .as_ref()
                    .is_some_and(|parent| codes.contains_key(parent))
            })
            .collect();
        unreachable.sort_by(|a, b| a.code.cmp(&b.code));
        for node in unreachable {
            warn!(code = %node.code, "Area node is not reachable from any root");
            report.push(IndexIssue::warning(
                IssueKind::UnreachableNode,
                Some(node.code.clone()),
                "parent chain does not reach a root",
            ));
        }

        debug!(
            roots = children.roots().len(),
            max_depth,
            issues = report.issues.len(),
            "Built area indices"
        );
        Ok(Self {
            children,
            codes,
            max_depth,
            report,
        })
    }

    pub fn children(&self) -> &ChildrenIndex {
        &self.children
    }

    pub fn codes(&self) -> &CodeIndex {
        &self.codes
    }

    pub fn roots(&self) -> &[AreaNode] {
        self.children.roots()
    }

    pub fn children_of(&self, parent: Option<&str>) -> &[AreaNode] {
        self.children.get(parent).unwrap_or(&[])
    }

    pub fn get(&self, code: &str) -> Option<&AreaNode> {
        self.codes.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains_key(code)
    }

    /// Total number of indexed nodes, orphans included.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Number of levels on the longest root-to-leaf chain.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn report(&self) -> &IndexReport {
        &self.report
    }
}

/// Library-boundary entry point for building indices.
///
/// # Errors
///
/// See [`Indices::build`].
pub fn build_indices(nodes: &[AreaNode], options: &ResolverOptions) -> Result<Indices, IndexError> {
    Indices::build(nodes, options)
}

/// Parents whose children disagree on type id, root first then by code.
fn mixed_sibling_parents(children: &ChildrenIndex) -> Vec<String> {
    let mut root_mixed = false;
    let mut parents = BTreeSet::new();
    for (parent, bucket) in children.buckets() {
        let types: HashSet<LevelTypeId> = bucket.iter().map(|node| node.type_id).collect();
        if types.len() > 1 {
            match parent {
                None => root_mixed = true,
                Some(code) => {
                    parents.insert(code.to_string());
                }
            }
        }
    }
    let mut out = Vec::with_capacity(parents.len() + 1);
    if root_mixed {
        out.push(ROOT_LABEL.to_string());
    }
    out.extend(parents);
    out
}

/// Breadth-first walk from the roots. Returns the reached codes and the
/// number of levels on the deepest chain.
fn walk_reachable(children: &ChildrenIndex) -> (HashSet<&str>, usize) {
    let mut reached = HashSet::new();
    let mut max_depth = 0;
    let mut queue: VecDeque<(&AreaNode, usize)> =
        children.roots().iter().map(|node| (node, 1)).collect();
    while let Some((node, depth)) = queue.pop_front() {
        if !reached.insert(node.code.as_str()) {
            continue;
        }
        max_depth = max_depth.max(depth);
        if let Some(bucket) = children.get(Some(node.code.as_str())) {
            queue.extend(bucket.iter().map(|child| (child, depth + 1)));
        }
    }
    (reached, max_depth)
}
