//! Rebuild a selection sequence from a stored leaf code.

use area_model::{AreaCode, PathError};

use crate::index::Indices;

/// Walk parent links from `leaf` up to its root and return the root-to-leaf
/// selection sequence.
///
/// A blank `leaf` means "nothing was selected" and yields an empty sequence.
/// The walk is bounded by the node count.
///
/// # Errors
///
/// - [`PathError::NotFound`] when `leaf` is not indexed.
/// - [`PathError::DanglingParent`] when an ancestor's parent is not indexed.
/// - [`PathError::CycleDetected`] when the walk exceeds the node count.
pub fn from_leaf(leaf: &str, indices: &Indices) -> Result<Vec<AreaCode>, PathError> {
    let leaf = leaf.trim();
    if leaf.is_empty() {
        return Ok(Vec::new());
    }
    let Some(mut node) = indices.get(leaf) else {
        return Err(PathError::NotFound {
            code: leaf.to_string(),
        });
    };
    let limit = indices.len();
    let mut codes = vec![node.code.clone()];
    while let Some(parent) = &node.parent_code {
        let Some(next) = indices.get(parent.as_str()) else {
            return Err(PathError::DanglingParent {
                code: node.code.clone(),
                parent: parent.clone(),
            });
        };
        if codes.len() >= limit {
            return Err(PathError::CycleDetected {
                code: codes[0].clone(),
                limit,
            });
        }
        codes.push(next.code.clone());
        node = next;
    }
    codes.reverse();
    Ok(codes)
}
