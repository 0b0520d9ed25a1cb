//! Terminal rendering of a built tree via termtree.

use generational_arena::Index;
use termtree::Tree as TermTree;

use crate::domain::WbsTree;

/// Render one root's subtree as a displayable termtree, children in their
/// already-sorted numeric order.
pub fn render(tree: &WbsTree, root: Index) -> TermTree<String> {
    let node = match tree.get(root) {
        Some(node) => node,
        None => return TermTree::new(String::new()),
    };
    let mut rendered = TermTree::new(node.to_string());
    for &child in &node.children {
        rendered.push(render(tree, child));
    }
    rendered
}
