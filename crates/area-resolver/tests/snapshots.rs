//! Serialized shapes handed to the rendering layer.

mod common;

use area_resolver::{compute_levels, selection_path};

use common::{build, catalog, chain_nodes, codes};

#[test]
fn breadcrumb_json_shape_is_stable() {
    let indices = build(&chain_nodes());
    let levels = compute_levels(&indices, &codes(&["MA", "MA-05"]), &catalog());
    insta::assert_json_snapshot!(selection_path(&levels), @r###"
    [
      {
        "typeId": 1,
        "typeName": "Region",
        "areaCode": "MA",
        "areaName": "Area MA"
      },
      {
        "typeId": 2,
        "typeName": "Prefecture",
        "areaCode": "MA-05",
        "areaName": "Area MA-05"
      }
    ]
    "###);
}

#[test]
fn unselected_level_json_shape_is_stable() {
    let indices = build(&chain_nodes());
    let levels = compute_levels(&indices, &codes(&["MA"]), &catalog());
    insta::assert_json_snapshot!(&levels[1], @r###"
    {
      "depth": 1,
      "typeId": 2,
      "typeName": "Prefecture",
      "options": [
        {
          "code": "MA-05",
          "name": "Area MA-05",
          "typeId": 2,
          "parentCode": "MA",
          "sortOrder": 0
        }
      ],
      "selectedCode": ""
    }
    "###);
}
