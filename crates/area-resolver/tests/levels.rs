//! Cascading level computation, including the stale-selection and
//! three-level chain scenarios.

mod common;

use area_model::LevelTypeId;
use area_resolver::{
    SelectionController, compute_levels, effective_selections, leaf_code, selection_path,
};

use common::{build, catalog, chain_nodes, code, codes, option_codes, tenant_nodes};

#[test]
fn no_selection_yields_single_root_level() {
    let indices = build(&tenant_nodes());
    let levels = compute_levels(&indices, &[], &catalog());
    assert_eq!(levels.len(), 1);
    assert_eq!(levels[0].depth, 0);
    assert_eq!(levels[0].type_name, "Region");
    assert_eq!(option_codes(&levels[0].options), ["MA", "RA"]);
    assert_eq!(levels[0].selected_code, None);
}

#[test]
fn chain_scenario_walks_to_leaf() {
    let indices = build(&chain_nodes());
    let catalog = catalog();
    let mut controller = SelectionController::default();

    let levels = controller.levels(&indices, &catalog);
    assert_eq!(levels.len(), 1);
    assert_eq!(option_codes(&levels[0].options), ["MA"]);

    controller.select(0, "MA");
    let levels = controller.levels(&indices, &catalog);
    assert_eq!(levels.len(), 2);
    assert_eq!(levels[0].selected_code, Some(code("MA")));
    assert_eq!(option_codes(&levels[1].options), ["MA-05"]);
    assert_eq!(levels[1].selected_code, None);

    controller.select(1, "MA-05");
    controller.select(2, "MA-05-01");
    assert_eq!(
        controller.leaf_code(&indices, &catalog),
        Some(code("MA-05-01"))
    );
    let path = controller.selection_path(&indices, &catalog);
    assert_eq!(path.len(), 3);
    assert_eq!(path.leaf_code_str(), "MA-05-01");
}

#[test]
fn selecting_grandchild_at_child_depth_is_pruned() {
    let indices = build(&chain_nodes());
    let catalog = catalog();
    let mut controller = SelectionController::default();
    controller.select(0, "MA");
    controller.select(1, "MA-05-01");

    let levels = controller.levels(&indices, &catalog);
    assert_eq!(levels.len(), 2);
    assert_eq!(levels[1].selected_code, None);
    assert_eq!(controller.leaf_code(&indices, &catalog), Some(code("MA")));
}

#[test]
fn stale_selection_prunes_deeper_levels() {
    let indices = build(&chain_nodes());
    let catalog = catalog();
    let stale = compute_levels(&indices, &codes(&["MA", "X-99"]), &catalog);
    let pruned = compute_levels(&indices, &codes(&["MA"]), &catalog);
    assert_eq!(stale, pruned);
    assert_eq!(effective_selections(&stale), codes(&["MA"]));
}

#[test]
fn stale_root_selection_leaves_root_level_unselected() {
    let indices = build(&tenant_nodes());
    let levels = compute_levels(&indices, &codes(&["GONE", "MA-05"]), &catalog());
    assert_eq!(levels.len(), 1);
    assert_eq!(levels[0].selected_code, None);
    assert!(selection_path(&levels).is_empty());
    assert_eq!(leaf_code(&levels), None);
}

#[test]
fn stale_middle_selection_drops_valid_deeper_codes() {
    let indices = build(&tenant_nodes());
    let levels = compute_levels(&indices, &codes(&["MA", "RA-01", "MA-05-01"]), &catalog());
    assert_eq!(levels.len(), 2);
    assert_eq!(option_codes(&levels[1].options), ["MA-01", "MA-05"]);
    assert_eq!(levels[1].selected_code, None);
}

#[test]
fn breadcrumb_carries_type_and_area_names() {
    let indices = build(&tenant_nodes());
    let levels = compute_levels(&indices, &codes(&["MA", "MA-05", "MA-05-02"]), &catalog());
    let path = selection_path(&levels);
    let crumbs: Vec<(LevelTypeId, &str, &str)> = path
        .iter()
        .map(|entry| {
            (
                entry.type_id,
                entry.type_name.as_str(),
                entry.area_name.as_str(),
            )
        })
        .collect();
    assert_eq!(
        crumbs,
        [
            (LevelTypeId::new(1), "Region", "Area MA"),
            (LevelTypeId::new(2), "Prefecture", "Area MA-05"),
            (LevelTypeId::new(3), "Commune", "Area MA-05-02"),
        ]
    );
}

#[test]
fn leaf_without_children_ends_the_cascade() {
    let indices = build(&tenant_nodes());
    let levels = compute_levels(&indices, &codes(&["RA", "RA-01"]), &catalog());
    assert_eq!(levels.len(), 2);
    assert!(levels.iter().all(|level| level.is_selected()));
}
