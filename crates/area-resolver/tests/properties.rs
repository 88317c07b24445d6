//! Property tests over randomly generated forests.

mod common;

use area_model::{AreaCode, AreaNode, LevelTypeId};
use area_resolver::{
    Indices, SelectionController, SelectionState, compute_levels, from_leaf, leaf_code,
};
use proptest::prelude::*;
use proptest::sample::Index;

use common::{build, catalog, code};

/// A forest where node `i` may only point at an earlier node, so there are
/// no cycles. Type id equals depth + 1, which keeps siblings homogeneous.
fn forest() -> impl Strategy<Value = Vec<AreaNode>> {
    prop::collection::vec((any::<Option<Index>>(), 0i64..3), 1..40).prop_map(|specs| {
        let mut depths: Vec<u64> = Vec::with_capacity(specs.len());
        let mut nodes = Vec::with_capacity(specs.len());
        for (i, (parent, sort_order)) in specs.into_iter().enumerate() {
            let parent = parent.filter(|_| i > 0).map(|index| index.index(i));
            let depth = parent.map_or(0, |p| depths[p] + 1);
            depths.push(depth);
            nodes.push(
                AreaNode::new(
                    code(&format!("N{i:02}")),
                    format!("Node {i}"),
                    LevelTypeId::new(depth + 1),
                    parent.map(|p| code(&format!("N{p:02}"))),
                )
                .with_sort_order(sort_order),
            );
        }
        nodes
    })
}

fn sorted_roots(nodes: &[AreaNode]) -> Vec<AreaCode> {
    let mut roots: Vec<&AreaNode> = nodes.iter().filter(|node| node.is_root()).collect();
    roots.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    roots.into_iter().map(|node| node.code.clone()).collect()
}

proptest! {
    #[test]
    fn empty_selection_yields_sorted_roots(nodes in forest()) {
        let indices = build(&nodes);
        let levels = compute_levels(&indices, &[], &catalog());
        prop_assert_eq!(levels.len(), 1);
        let options: Vec<AreaCode> =
            levels[0].options.iter().map(|node| node.code.clone()).collect();
        prop_assert_eq!(options, sorted_roots(&nodes));
        prop_assert!(levels[0].selected_code.is_none());
    }

    #[test]
    fn from_leaf_round_trips(nodes in forest(), pick in any::<Index>()) {
        let indices = build(&nodes);
        let leaf = &nodes[pick.index(nodes.len())].code;
        let selections = from_leaf(leaf.as_str(), &indices).unwrap();
        prop_assert_eq!(selections.last(), Some(leaf));
        let levels = compute_levels(&indices, &selections, &catalog());
        prop_assert_eq!(leaf_code(&levels), Some(leaf.clone()));
        prop_assert!(selections.len() <= indices.max_depth());
    }

    #[test]
    fn select_clears_every_deeper_depth(
        nodes in forest(),
        pick in any::<Index>(),
        depth_pick in any::<Index>(),
    ) {
        let indices = build(&nodes);
        let leaf = nodes[pick.index(nodes.len())].code.as_str();
        let selections = from_leaf(leaf, &indices).unwrap();
        let depth = depth_pick.index(selections.len());
        let same = selections[depth].clone();

        let mut state = SelectionState::from_codes(selections);
        state.select(depth, same.as_str());
        prop_assert_eq!(state.len(), depth + 1);

        let levels = compute_levels(&indices, state.as_slice(), &catalog());
        for level in levels.iter().skip(depth + 1) {
            prop_assert!(level.selected_code.is_none());
        }
    }

    #[test]
    fn reset_is_idempotent(nodes in forest(), pick in any::<Index>()) {
        let indices = build(&nodes);
        let leaf = nodes[pick.index(nodes.len())].code.as_str();
        let mut once = SelectionController::from_leaf(leaf, &indices, &Default::default()).unwrap();
        once.reset();
        let mut twice = once.clone();
        twice.reset();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn auto_advance_equals_manual_select(nodes in forest(), pick in any::<Index>()) {
        let indices = build(&nodes);
        let catalog = catalog();
        let leaf = nodes[pick.index(nodes.len())].code.as_str();
        let start = from_leaf(leaf, &indices).unwrap();

        let mut automatic = SelectionController::default().with_auto_advance(true);
        let mut manual = SelectionController::default();
        for (depth, code) in start.iter().enumerate() {
            automatic.select(depth, code.as_str());
            manual.select(depth, code.as_str());
        }

        let levels = manual.levels(&indices, &catalog);
        let last = levels.last().cloned();
        match automatic.auto_advance(&indices, &catalog) {
            Some(chosen) => {
                let last = last.expect("a level to advance");
                prop_assert!(!last.is_selected());
                prop_assert_eq!(last.options.len(), 1);
                manual.select(last.depth, chosen.as_str());
                prop_assert_eq!(automatic.state(), manual.state());
            }
            None => {
                let advanceable = last
                    .as_ref()
                    .is_some_and(|level| !level.is_selected() && level.options.len() == 1);
                prop_assert!(!advanceable);
                prop_assert_eq!(automatic.state(), manual.state());
            }
        }
    }

    #[test]
    fn settle_converges_within_max_depth(nodes in forest()) {
        let indices: Indices = build(&nodes);
        let catalog = catalog();
        let mut controller = SelectionController::default().with_auto_advance(true);
        let steps = controller.settle(&indices, &catalog, indices.max_depth() + 1);
        prop_assert!(steps <= indices.max_depth());
        prop_assert!(controller.auto_advance(&indices, &catalog).is_none());
    }
}
