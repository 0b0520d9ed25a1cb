//! End-to-end tests: CSV text through to DOT text

use std::path::Path;

use wbs2dot::cli::tree_view;
use wbs2dot::domain::{read_records, TreeBuilder, WbsError};
use wbs2dot::util::testing;
use wbs2dot::{generate_dot, RankDir};

#[test]
fn given_csv_text_when_generating_then_dot_document_produced() {
    testing::init_test_setup();
    let input = "code,title,primaryResp\n\
                 1,Root,Alice\n\
                 1.1,Child,\n";

    let dot = generate_dot(input, true, RankDir::TopBottom).unwrap();

    assert!(dot.contains("digraph WBS"));
    assert!(dot.contains("\"1\" -> \"1.1\""));
    assert!(dot.contains("PrimaryResp: Alice"));
}

#[test]
fn given_orphan_row_when_generating_relaxed_then_auto_parent_labeled() {
    let input = "code,title\n3.2,Orphan\n";

    let dot = generate_dot(input, false, RankDir::LeftRight).unwrap();

    assert!(dot.contains("rankdir=LR"));
    assert!(dot.contains("3  [Auto] 3"));
    assert!(dot.contains("\"3\" -> \"3.2\""));
}

#[test]
fn given_duplicate_code_when_generating_then_error_propagates() {
    let input = "code,title\n1,Root\n1,Root again\n";

    let result = generate_dot(input, true, RankDir::TopBottom);

    assert!(matches!(result, Err(WbsError::DuplicateCode(_))));
}

#[test]
fn given_example_csv_when_running_pipeline_then_every_code_appears() {
    let path = Path::new("demos/example.csv");
    let records = read_records(path).unwrap();
    assert!(!records.is_empty());

    let tree = TreeBuilder::new(true).build(records).unwrap();
    let dot = wbs2dot::DotEmitter::new(RankDir::TopBottom).emit(&tree);

    for code in tree.codes() {
        assert!(dot.contains(&format!("\"{}\"", code)));
    }
    assert_eq!(tree.roots().len(), 3);
}

#[test]
fn given_built_tree_when_rendering_tree_view_then_shows_codes_and_titles() {
    let input = "code,title\n1,Root\n1.1,Child\n1.2,Other\n";
    let records = wbs2dot::parse_records(input).unwrap();
    let tree = TreeBuilder::new(true).build(records).unwrap();

    let rendered = tree_view::render(&tree, tree.roots()[0]).to_string();

    assert!(rendered.contains("1  Root"));
    assert!(rendered.contains("1.1  Child"));
    assert!(rendered.contains("1.2  Other"));
}
