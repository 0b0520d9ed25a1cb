//! Graphviz DOT emission with per-level node styling.
//!
//! Output is deterministic: the same tree always serializes to byte-identical
//! text. Each subtree's edges and nodes are emitted contiguously (edge first,
//! then the child's subtree), so the document can be streamed.

use clap::ValueEnum;
use generational_arena::Index;
use itertools::Itertools;

use crate::domain::code::{escape, level_of};
use crate::domain::tree::WbsTree;

/// Layout direction of the generated graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RankDir {
    /// Top to bottom
    #[default]
    #[value(name = "tb")]
    TopBottom,
    /// Left to right
    #[value(name = "lr")]
    LeftRight,
}

impl RankDir {
    fn as_dot(self) -> &'static str {
        match self {
            RankDir::TopBottom => "TB",
            RankDir::LeftRight => "LR",
        }
    }
}

/// One pastel hue family per hierarchy level, cycling past level 8.
const LEVEL_PALETTE: [&str; 8] = [
    "#E3F2FD", // L1  blue-50
    "#E8F5E9", // L2  green-50
    "#FFF3E0", // L3  orange-50
    "#F3E5F5", // L4  purple-50
    "#FCE4EC", // L5  pink-50
    "#E0F2F1", // L6  teal-50
    "#FFFDE7", // L7  yellow-50
    "#ECEFF1", // L8  blue-grey-50
];

/// Fill color for a node, indexed by its code's level.
pub fn fill_by_level(code: &str) -> &'static str {
    let level = level_of(code);
    if level == 0 {
        return "#FFFFFF";
    }
    LEVEL_PALETTE[(level - 1) % LEVEL_PALETTE.len()]
}

/// Serializes a [`WbsTree`] into a DOT document.
pub struct DotEmitter {
    rankdir: RankDir,
}

impl DotEmitter {
    pub fn new(rankdir: RankDir) -> Self {
        Self { rankdir }
    }

    /// Build the complete DOT document for the given tree.
    pub fn emit(&self, tree: &WbsTree) -> String {
        let mut out = String::new();
        out.push_str("digraph WBS {\n");
        out.push_str(&format!(
            "  graph [rankdir={}, nodesep=0.6, ranksep=0.9, splines=ortho, \
             ordering=out, outputorder=edgesfirst];\n",
            self.rankdir.as_dot()
        ));
        out.push_str("  edge  [arrowhead=none, weight=3, tailport=s, headport=n, minlen=1];\n");
        out.push_str("  node  [shape=box, style=rounded, fontsize=10];\n");

        for &root in tree.roots() {
            self.emit_node(&mut out, tree, root);
        }

        out.push_str("}\n");
        out
    }

    /// Emit one node statement, then for each child an edge statement followed
    /// by the child's own subtree (pre-order, already-sorted child order).
    fn emit_node(&self, out: &mut String, tree: &WbsTree, idx: Index) {
        let node = match tree.get(idx) {
            Some(node) => node,
            None => return,
        };

        let mut label = format!("{}  {}", escape(&node.code), escape(&node.title));
        let meta: Vec<String> = [
            ("PrimaryResp", &node.primary_resp),
            ("SecondaryResp", &node.secondary_resp),
            ("Est", &node.estimated_duration),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}: {}", key, escape(value)))
        .collect();
        if !meta.is_empty() {
            label.push_str(&format!("\\n({})", meta.iter().join(" | ")));
        }

        out.push_str(&format!(
            "  \"{}\" [label=\"{}\", style=\"filled\", shape=box, fontsize=10, \
             margin=\"0.06,0.04\", penwidth=1.0, fillcolor=\"{}\", tooltip=\"{}\", \
             URL=\"#\", target=\"_top\"];\n",
            escape(&node.code),
            label,
            fill_by_level(&node.code),
            escape(&node.description),
        ));

        for &child in &node.children {
            if let Some(child_node) = tree.get(child) {
                out.push_str(&format!(
                    "  \"{}\" -> \"{}\" [arrowhead=none];\n",
                    escape(&node.code),
                    escape(&child_node.code),
                ));
            }
            self.emit_node(out, tree, child);
        }
    }
}
