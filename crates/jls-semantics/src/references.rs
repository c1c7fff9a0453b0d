//! Find references within one compilation unit.
//!
//! Collects every occurrence node whose resolved symbol is the target
//! symbol, by id equality. Scans exactly one unit; aggregating across
//! files is the caller's concern.

use jls_common::{CancellationToken, Cancelled};
use jls_resolve::{Resolver, SymbolId};
use jls_syntax::{NodeId, NodeKind, TreePath, walk};
use tracing::debug;

/// Reference search for one target symbol.
pub struct FindReferences<'a, R> {
    resolver: &'a R,
    target: SymbolId,
    token: &'a CancellationToken,
}

impl<'a, R: Resolver> FindReferences<'a, R> {
    pub fn new(
        resolver: &'a R,
        target: SymbolId,
        token: &'a CancellationToken,
    ) -> FindReferences<'a, R> {
        FindReferences {
            resolver,
            target,
            token,
        }
    }

    /// Collect every occurrence under `root` that resolves to the
    /// target symbol, in pre-order. Each node is visited once, so the
    /// output carries no duplicates.
    pub fn find(&self, root: NodeId) -> Result<Vec<TreePath>, Cancelled> {
        let resolver = self.resolver;
        let target = self.target;
        let tree = resolver.tree();
        let mut found: Vec<TreePath> = Vec::new();
        walk(tree, root, self.token, &mut found, &mut |tree,
                                                       path,
                                                       found| {
            match tree.node(path.leaf()).kind {
                NodeKind::Identifier
                | NodeKind::MemberSelect
                | NodeKind::NewClass
                | NodeKind::MemberReference => {
                    if resolver.symbol_at(path) == Some(target) {
                        found.push(path.clone());
                    }
                }
                _ => {}
            }
        })?;
        debug!(
            target = self.target.0,
            count = found.len(),
            "reference scan complete"
        );
        Ok(found)
    }
}

#[cfg(test)]
#[path = "tests/references_tests.rs"]
mod references_tests;
