//! Cascading level computation.
//!
//! Depth is discovered by walking parent links from the roots, one level per
//! iteration. The walk stops at the first depth without a valid selection, so
//! a stale code silently prunes everything below it.

use tracing::debug;

use area_model::{AreaCode, DropdownLevel, SelectionPath, SelectionPathEntry};

use crate::catalog::TypeCatalog;
use crate::index::Indices;

/// Derive the levels to present for `selections`.
///
/// Every returned level except possibly the last has a selection. The last
/// level is unselected unless its selected node has no children.
pub fn compute_levels(
    indices: &Indices,
    selections: &[AreaCode],
    catalog: &TypeCatalog,
) -> Vec<DropdownLevel> {
    let mut levels = Vec::new();
    let mut parent: Option<&str> = None;
    let mut depth = 0;
    loop {
        let Some(children) = indices.children().get(parent) else {
            break;
        };
        // Siblings share a type; the first child names the level.
        let type_id = children[0].type_id;
        let type_name = catalog.name_of(type_id).to_string();
        let selected = selections
            .get(depth)
            .filter(|code| children.iter().any(|child| &child.code == *code));

        if let Some(stale) = selections.get(depth)
            && selected.is_none()
        {
            debug!(depth, code = %stale, "Pruned stale selection");
        }

        levels.push(DropdownLevel {
            depth,
            type_id,
            type_name,
            options: children.to_vec(),
            selected_code: selected.cloned(),
        });

        let Some(code) = selected else {
            break;
        };
        parent = Some(code.as_str());
        depth += 1;
    }
    levels
}

/// Breadcrumb for the selected depths of `levels`.
pub fn selection_path(levels: &[DropdownLevel]) -> SelectionPath {
    let entries = levels
        .iter()
        .filter_map(|level| {
            let node = level.selected_node()?;
            Some(SelectionPathEntry {
                type_id: level.type_id,
                type_name: level.type_name.clone(),
                area_code: node.code.clone(),
                area_name: node.name.clone(),
            })
        })
        .collect();
    SelectionPath::new(entries)
}

/// Deepest valid selection of `levels`.
pub fn leaf_code(levels: &[DropdownLevel]) -> Option<AreaCode> {
    levels
        .iter()
        .rev()
        .find_map(|level| level.selected_code.clone())
}

/// The selections that survived pruning, root to leaf.
pub fn effective_selections(levels: &[DropdownLevel]) -> Vec<AreaCode> {
    levels
        .iter()
        .map_while(|level| level.selected_code.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use area_model::{AreaNode, LevelType, LevelTypeId, ResolverOptions};

    use super::*;

    fn code(value: &str) -> AreaCode {
        AreaCode::new(value).unwrap()
    }

    fn fixture() -> (Indices, TypeCatalog) {
        let nodes = vec![
            AreaNode::new(code("MA"), "Marrakech", LevelTypeId::new(1), None),
            AreaNode::new(code("MA-05"), "Medina", LevelTypeId::new(2), Some(code("MA"))),
            AreaNode::new(
                code("MA-05-01"),
                "Riad Zitoun",
                LevelTypeId::new(3),
                Some(code("MA-05")),
            ),
        ];
        let catalog = TypeCatalog::new([
            LevelType::new(LevelTypeId::new(1), "REG", "Region"),
            LevelType::new(LevelTypeId::new(2), "PREF", "Prefecture"),
            LevelType::new(LevelTypeId::new(3), "COM", "Commune"),
        ]);
        let indices = Indices::build(&nodes, &ResolverOptions::default()).unwrap();
        (indices, catalog)
    }

    #[test]
    fn complete_chain_ends_with_selected_leaf_level() {
        let (indices, catalog) = fixture();
        let selections = [code("MA"), code("MA-05"), code("MA-05-01")];
        let levels = compute_levels(&indices, &selections, &catalog);
        assert_eq!(levels.len(), 3);
        assert!(levels.iter().all(DropdownLevel::is_selected));
        assert_eq!(levels[2].type_name, "Commune");
        assert_eq!(leaf_code(&levels), Some(code("MA-05-01")));
        assert_eq!(effective_selections(&levels), selections.to_vec());
    }

    #[test]
    fn selections_beyond_leaf_are_ignored() {
        let (indices, catalog) = fixture();
        let selections = [code("MA"), code("MA-05"), code("MA-05-01"), code("EXTRA")];
        let levels = compute_levels(&indices, &selections, &catalog);
        assert_eq!(levels.len(), 3);
    }

    #[test]
    fn path_uses_level_type_names() {
        let (indices, catalog) = fixture();
        let levels = compute_levels(&indices, &[code("MA"), code("MA-05")], &catalog);
        let path = selection_path(&levels);
        let names: Vec<&str> = path.iter().map(|e| e.type_name.as_str()).collect();
        assert_eq!(names, ["Region", "Prefecture"]);
        assert_eq!(path.leaf_code_str(), "MA-05");
    }

    #[test]
    fn empty_indices_yield_no_levels() {
        let levels = compute_levels(&Indices::default(), &[code("MA")], &TypeCatalog::default());
        assert!(levels.is_empty());
        assert!(selection_path(&levels).is_empty());
        assert_eq!(leaf_code(&levels), None);
    }

    #[test]
    fn unknown_type_yields_blank_name() {
        let (indices, _) = fixture();
        let levels = compute_levels(&indices, &[], &TypeCatalog::default());
        assert_eq!(levels[0].type_id, LevelTypeId::new(1));
        assert_eq!(levels[0].type_name, "");
    }
}
