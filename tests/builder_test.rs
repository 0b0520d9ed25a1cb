//! Tests for TreeBuilder

use wbs2dot::domain::{Record, TreeBuilder, WbsError, WbsTree};

fn child_codes(tree: &WbsTree, idx: generational_arena::Index) -> Vec<String> {
    let node = tree.get(idx).unwrap();
    node.children
        .iter()
        .map(|&c| tree.get(c).unwrap().code.clone())
        .collect()
}

#[test]
fn given_root_and_children_when_building_then_links_and_orders() {
    // Arrange
    let records = vec![
        Record::new("1", "Root"),
        Record::new("1.2", "Child 2"),
        Record::new("1.1", "Child 1"),
    ];

    // Act
    let tree = TreeBuilder::new(true).build(records).unwrap();

    // Assert
    assert_eq!(tree.roots().len(), 1);
    let root = tree.roots()[0];
    assert_eq!(tree.get(root).unwrap().code, "1");
    assert_eq!(child_codes(&tree, root), vec!["1.1", "1.2"]);
}

#[test]
fn given_deep_leaf_when_building_relaxed_then_ancestors_are_synthesized() {
    let records = vec![Record::new("2.1.1", "Leaf")];

    let tree = TreeBuilder::new(false).build(records).unwrap();

    assert_eq!(tree.len(), 3);
    assert_eq!(tree.roots().len(), 1);

    let root = tree.get(tree.roots()[0]).unwrap();
    assert_eq!(root.code, "2");
    assert_eq!(root.title, "[Auto] 2");

    let mid = tree.get(tree.lookup("2.1").unwrap()).unwrap();
    assert_eq!(mid.title, "[Auto] 2.1");
    assert_eq!(mid.primary_resp, "");

    let leaf = tree.get(tree.lookup("2.1.1").unwrap()).unwrap();
    assert_eq!(leaf.title, "Leaf");
}

#[test]
fn given_deep_leaf_when_building_strict_then_missing_parent() {
    let records = vec![Record::new("2.1.1", "Leaf")];

    let result = TreeBuilder::new(true).build(records);

    match result {
        Err(WbsError::MissingParent(code)) => assert_eq!(code, "2.1"),
        other => panic!("expected MissingParent, got {:?}", other),
    }
}

#[test]
fn given_duplicate_code_when_building_then_short_circuits() {
    let records = vec![
        Record::new("1", "Root"),
        Record::new("1.1", "Child"),
        Record::new("1.1", "Child again"),
    ];

    let result = TreeBuilder::new(true).build(records);

    match result {
        Err(WbsError::DuplicateCode(code)) => assert_eq!(code, "1.1"),
        other => panic!("expected DuplicateCode, got {:?}", other),
    }
}

#[test]
fn given_invalid_code_when_building_then_invalid_code() {
    let records = vec![Record::new("1.a", "Bad")];

    let result = TreeBuilder::new(true).build(records);

    match result {
        Err(WbsError::InvalidCode(code)) => assert_eq!(code, "1.a"),
        other => panic!("expected InvalidCode, got {:?}", other),
    }
}

#[test]
fn given_two_digit_segments_when_ordering_then_numeric_not_lexicographic() {
    let records = vec![
        Record::new("1", "Root"),
        Record::new("1.10", "Ten"),
        Record::new("1.2", "Two"),
    ];

    let tree = TreeBuilder::new(true).build(records).unwrap();

    assert_eq!(child_codes(&tree, tree.roots()[0]), vec!["1.2", "1.10"]);
}

#[test]
fn given_multiple_top_level_codes_when_building_then_roots_ordered_numerically() {
    let records = vec![
        Record::new("10", "Ten"),
        Record::new("2", "Two"),
        Record::new("1", "One"),
    ];

    let tree = TreeBuilder::new(true).build(records).unwrap();

    let roots: Vec<String> = tree
        .roots()
        .iter()
        .map(|&r| tree.get(r).unwrap().code.clone())
        .collect();
    assert_eq!(roots, vec!["1", "2", "10"]);
}

#[test]
fn given_separatorless_code_when_building_strict_then_becomes_root() {
    let records = vec![Record::new("7", "Standalone")];

    let tree = TreeBuilder::new(true).build(records).unwrap();

    assert_eq!(tree.roots().len(), 1);
    assert!(tree.contains_code("7"));
    assert!(child_codes(&tree, tree.roots()[0]).is_empty());
}

#[test]
fn given_gap_of_depth_three_when_building_relaxed_then_fills_transitively() {
    let records = vec![Record::new("4.3.2.1", "Deep leaf")];

    let tree = TreeBuilder::new(false).build(records).unwrap();

    assert_eq!(tree.len(), 4);
    for code in ["4", "4.3", "4.3.2"] {
        let node = tree.get(tree.lookup(code).unwrap()).unwrap();
        assert_eq!(node.title, format!("[Auto] {}", code));
    }
}

#[test]
fn given_record_fields_when_building_then_copied_onto_node() {
    let mut record = Record::new("1", "Root");
    record.description = "desc".into();
    record.primary_resp = "Alice".into();
    record.secondary_resp = "Bob".into();
    record.estimated_duration = "2w".into();

    let tree = TreeBuilder::new(true).build(vec![record]).unwrap();

    let node = tree.get(tree.roots()[0]).unwrap();
    assert_eq!(node.description, "desc");
    assert_eq!(node.primary_resp, "Alice");
    assert_eq!(node.secondary_resp, "Bob");
    assert_eq!(node.estimated_duration, "2w");
}
