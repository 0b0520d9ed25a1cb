//! Arena-based tree structure for the work-breakdown hierarchy.

use std::collections::BTreeMap;
use std::fmt;

use generational_arena::{Arena, Index};

use crate::domain::code::compare_codes;
use crate::domain::entities::Record;

/// Tree vertex: the record fields plus arena links.
#[derive(Debug, Clone)]
pub struct WbsNode {
    pub code: String,
    pub title: String,
    pub description: String,
    pub primary_resp: String,
    pub secondary_resp: String,
    pub estimated_duration: String,
    /// Index of the parent node, None for roots
    pub parent: Option<Index>,
    /// Indices of child nodes, sorted numerically by code once the build is done
    pub children: Vec<Index>,
}

impl WbsNode {
    pub fn from_record(record: Record) -> Self {
        Self {
            code: record.code,
            title: record.title,
            description: record.description,
            primary_resp: record.primary_resp,
            secondary_resp: record.secondary_resp,
            estimated_duration: record.estimated_duration,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Placeholder for an ancestor that was absent from the input.
    /// The "[Auto] {code}" title is a fixed output contract.
    pub fn auto(code: &str) -> Self {
        Self {
            code: code.to_string(),
            title: format!("[Auto] {}", code),
            description: String::new(),
            primary_resp: String::new(),
            secondary_resp: String::new(),
            estimated_duration: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }
}

impl fmt::Display for WbsNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.code, self.title)
    }
}

/// The assembled work-breakdown forest.
///
/// Nodes live in a generational arena; a code-to-index map provides O(log n)
/// lookups and guarantees code uniqueness; `roots` lists the nodes whose
/// derived parent code is empty. Built once by `TreeBuilder`, then immutable.
#[derive(Debug, Default)]
pub struct WbsTree {
    arena: Arena<WbsNode>,
    index: BTreeMap<String, Index>,
    roots: Vec<Index>,
}

impl WbsTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, registering its code in the lookup map.
    /// Callers must have rejected duplicate codes beforehand.
    pub fn insert(&mut self, node: WbsNode) -> Index {
        let code = node.code.clone();
        let idx = self.arena.insert(node);
        self.index.insert(code, idx);
        idx
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn lookup(&self, code: &str) -> Option<Index> {
        self.index.get(code).copied()
    }

    pub fn get(&self, idx: Index) -> Option<&WbsNode> {
        self.arena.get(idx)
    }

    /// Node count across all roots.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Root indices, numerically ordered after `sort_by_code`.
    pub fn roots(&self) -> &[Index] {
        &self.roots
    }

    /// All codes in the tree, in map (lexicographic) order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    pub(crate) fn add_root(&mut self, idx: Index) {
        self.roots.push(idx);
    }

    /// Attach `child` under `parent`, recording the back link.
    pub(crate) fn attach(&mut self, parent: Index, child: Index) {
        if let Some(node) = self.arena.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.arena.get_mut(parent) {
            node.children.push(child);
        }
    }

    /// Sort the root list and every child list numerically by code.
    pub(crate) fn sort_by_code(&mut self) {
        let indices: Vec<Index> = self.arena.iter().map(|(idx, _)| idx).collect();
        for idx in indices {
            let mut children = match self.arena.get_mut(idx) {
                Some(node) => std::mem::take(&mut node.children),
                None => continue,
            };
            children.sort_by(|a, b| self.cmp_nodes(*a, *b));
            if let Some(node) = self.arena.get_mut(idx) {
                node.children = children;
            }
        }

        let mut roots = std::mem::take(&mut self.roots);
        roots.sort_by(|a, b| self.cmp_nodes(*a, *b));
        self.roots = roots;
    }

    fn cmp_nodes(&self, a: Index, b: Index) -> std::cmp::Ordering {
        match (self.arena.get(a), self.arena.get(b)) {
            (Some(a), Some(b)) => compare_codes(&a.code, &b.code),
            _ => std::cmp::Ordering::Equal,
        }
    }
}
