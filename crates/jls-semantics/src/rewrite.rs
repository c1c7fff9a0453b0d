//! Innermost variable declaration lookup, for rename and
//! extract-variable tooling.

use jls_common::{CancellationToken, Cancelled};
use jls_resolve::Resolver;
use jls_syntax::{NodeId, NodeKind, walk_reduce};
use tracing::debug;

/// Find the innermost variable declaration whose span contains `offset`.
///
/// Containment is half-open on the declaration's own untrimmed span:
/// the start offset is inside, the end offset is not. A declaration
/// nested inside another wins over its ancestor. When independent
/// sibling subtrees both contain a match, the first in source order
/// wins. Identifier references are never returned, only Variable
/// declaration nodes.
///
/// `root` must be the unit's CompilationUnit node.
pub fn find_variable_at<R: Resolver>(
    resolver: &R,
    root: NodeId,
    offset: i32,
    token: &CancellationToken,
) -> Result<Option<NodeId>, Cancelled> {
    let tree = resolver.tree();
    let root_node = tree.get(root).expect("root node not in this unit's arena");
    assert!(
        root_node.kind == NodeKind::CompilationUnit,
        "variable lookup must start at a compilation unit"
    );

    let found = walk_reduce(tree, root, token, &mut |tree, id, smaller| {
        if smaller.is_some() {
            return smaller;
        }
        if tree.node(id).kind == NodeKind::Variable && resolver.span_of(id).contains(offset) {
            return Some(id);
        }
        None
    })?;
    debug!(offset, found = ?found.map(|id| id.0), "variable lookup complete");
    Ok(found)
}

#[cfg(test)]
#[path = "tests/rewrite_tests.rs"]
mod rewrite_tests;
