#![allow(dead_code)]

use area_model::{AreaCode, AreaNode, LevelType, LevelTypeId, ResolverOptions};
use area_resolver::{Indices, TypeCatalog};

pub fn code(value: &str) -> AreaCode {
    AreaCode::new(value).unwrap()
}

pub fn codes(values: &[&str]) -> Vec<AreaCode> {
    values.iter().map(|value| code(value)).collect()
}

pub fn node(code_value: &str, parent: Option<&str>, type_id: u64, sort_order: i64) -> AreaNode {
    AreaNode::new(
        code(code_value),
        format!("Area {code_value}"),
        LevelTypeId::new(type_id),
        parent.map(code),
    )
    .with_sort_order(sort_order)
}

pub fn types() -> Vec<LevelType> {
    vec![
        LevelType::new(LevelTypeId::new(1), "REG", "Region").with_rank(1),
        LevelType::new(LevelTypeId::new(2), "PREF", "Prefecture").with_rank(2),
        LevelType::new(LevelTypeId::new(3), "COM", "Commune").with_rank(3),
    ]
}

pub fn catalog() -> TypeCatalog {
    TypeCatalog::new(types())
}

/// `MA -> MA-05 -> MA-05-01`.
pub fn chain_nodes() -> Vec<AreaNode> {
    vec![
        node("MA", None, 1, 0),
        node("MA-05", Some("MA"), 2, 0),
        node("MA-05-01", Some("MA-05"), 3, 0),
    ]
}

/// Two regions with prefectures and communes, sort orders out of code order.
pub fn tenant_nodes() -> Vec<AreaNode> {
    vec![
        node("RA", None, 1, 2),
        node("MA", None, 1, 1),
        node("MA-05", Some("MA"), 2, 2),
        node("MA-01", Some("MA"), 2, 1),
        node("MA-05-02", Some("MA-05"), 3, 0),
        node("MA-05-01", Some("MA-05"), 3, 0),
        node("MA-01-01", Some("MA-01"), 3, 0),
        node("RA-01", Some("RA"), 2, 0),
    ]
}

pub fn build(nodes: &[AreaNode]) -> Indices {
    Indices::build(nodes, &ResolverOptions::default()).unwrap()
}

pub fn option_codes(options: &[AreaNode]) -> Vec<&str> {
    options.iter().map(|node| node.code.as_str()).collect()
}
