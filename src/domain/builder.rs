//! Tree builder: assembles the validated work-breakdown forest from records.

use tracing::{debug, instrument};

use crate::domain::code::{is_valid_code, parent_code};
use crate::domain::entities::Record;
use crate::domain::error::{WbsError, WbsResult};
use crate::domain::tree::{WbsNode, WbsTree};

/// Constructs a [`WbsTree`] from flat records.
///
/// In strict mode a referenced-but-absent ancestor is a fatal error; otherwise
/// missing ancestors are synthesized as `[Auto]` placeholder nodes, to
/// arbitrary depth.
pub struct TreeBuilder {
    strict: bool,
}

impl TreeBuilder {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Single pass from records to a fully linked, numerically ordered tree.
    /// Any failure aborts the build; callers never see a partial tree.
    #[instrument(level = "debug", skip(self, records))]
    pub fn build(&self, records: Vec<Record>) -> WbsResult<WbsTree> {
        let mut tree = WbsTree::new();

        for record in records {
            if !is_valid_code(&record.code) {
                return Err(WbsError::InvalidCode(record.code));
            }
            if tree.contains_code(&record.code) {
                return Err(WbsError::DuplicateCode(record.code));
            }
            tree.insert(WbsNode::from_record(record));
        }

        self.fill_ancestors(&mut tree)?;
        link(&mut tree)?;
        tree.sort_by_code();

        debug!("built tree with {} nodes, {} roots", tree.len(), tree.roots().len());
        Ok(tree)
    }

    /// Walk every code's ancestor chain and materialize the gaps.
    ///
    /// Iterative on purpose: parent codes are strictly shorter, so the loop
    /// terminates, and pathologically deep codes cannot blow the stack.
    fn fill_ancestors(&self, tree: &mut WbsTree) -> WbsResult<()> {
        let codes: Vec<String> = tree.codes().map(str::to_string).collect();
        for code in codes {
            let mut parent = parent_code(&code).to_string();
            while !parent.is_empty() && !tree.contains_code(&parent) {
                if self.strict {
                    return Err(WbsError::MissingParent(parent));
                }
                debug!("auto-creating missing ancestor {}", parent);
                let grandparent = parent_code(&parent).to_string();
                tree.insert(WbsNode::auto(&parent));
                parent = grandparent;
            }
        }
        Ok(())
    }
}

/// Attach every node to its parent, or to the root list when it has none.
fn link(tree: &mut WbsTree) -> WbsResult<()> {
    let codes: Vec<String> = tree.codes().map(str::to_string).collect();
    for code in codes {
        let idx = match tree.lookup(&code) {
            Some(idx) => idx,
            None => continue,
        };
        let parent = parent_code(&code);
        if parent.is_empty() {
            tree.add_root(idx);
        } else {
            // guaranteed present after ancestor filling
            match tree.lookup(parent) {
                Some(parent_idx) => tree.attach(parent_idx, idx),
                None => return Err(WbsError::MissingParent(parent.to_string())),
            }
        }
    }
    Ok(())
}
