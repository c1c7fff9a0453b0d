//! Generic cancellable traversal over a `SyntaxTree`.
//!
//! Two traversal shapes cover every algorithm in the engine:
//!
//! - [`walk`] visits nodes in deterministic pre-order, threading a
//!   caller-supplied accumulator through a per-node handler. Handlers
//!   dispatch on node kind themselves and cannot prune the descent.
//! - [`walk_reduce`] evaluates bottom-up, combining sibling results
//!   first-`Some`-wins in source order, for innermost-match searches.
//!
//! Both poll the cancellation token before every node, so the latency of
//! a cancel is bounded by the cost of a single visit. On cancellation
//! the traversal aborts with [`Cancelled`] and whatever the accumulator
//! holds must be discarded.

use jls_common::{CancellationToken, Cancelled};
use smallvec::SmallVec;

use crate::tree::{NodeId, SyntaxTree};

/// An immutable root-to-leaf chain of node ids.
///
/// The walker maintains one path incrementally while it descends and
/// hands it to the visit handler by reference; handlers that need the
/// path to outlive the visit clone it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreePath {
    steps: SmallVec<[NodeId; 8]>,
}

impl TreePath {
    pub fn new() -> TreePath {
        TreePath::default()
    }

    /// The node this path leads to.
    ///
    /// Panics on an empty path; the walker never hands one out.
    pub fn leaf(&self) -> NodeId {
        *self.steps.last().expect("empty tree path")
    }

    /// The immediate ancestor of the leaf, if the leaf is not the root.
    pub fn parent(&self) -> Option<NodeId> {
        let len = self.steps.len();
        if len < 2 { None } else { Some(self.steps[len - 2]) }
    }

    /// Ancestors from the root down to the leaf.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.steps.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    fn push(&mut self, id: NodeId) {
        self.steps.push(id);
    }

    fn pop(&mut self) {
        self.steps.pop();
    }
}

/// Visit every node under `root` in deterministic pre-order.
///
/// The handler runs for each node with the current path and the
/// accumulator; afterwards the walker unconditionally descends into the
/// node's children in source order. Returns `Err(Cancelled)` as soon as
/// the token is signalled, before visiting the next node.
pub fn walk<A>(
    tree: &SyntaxTree,
    root: NodeId,
    token: &CancellationToken,
    acc: &mut A,
    visit: &mut dyn FnMut(&SyntaxTree, &TreePath, &mut A),
) -> Result<(), Cancelled> {
    let mut path = TreePath::new();
    walk_at(tree, root, token, acc, visit, &mut path)
}

fn walk_at<A>(
    tree: &SyntaxTree,
    node: NodeId,
    token: &CancellationToken,
    acc: &mut A,
    visit: &mut dyn FnMut(&SyntaxTree, &TreePath, &mut A),
    path: &mut TreePath,
) -> Result<(), Cancelled> {
    token.checkpoint()?;
    path.push(node);
    visit(tree, path, acc);
    for &child in &tree.node(node).children {
        walk_at(tree, child, token, acc, visit, path)?;
    }
    path.pop();
    Ok(())
}

/// Evaluate every node under `root` bottom-up.
///
/// Children are evaluated first, in source order, and their results are
/// combined first-`Some`-wins; `eval` then produces the node's own
/// result given the combined child result. The handler that wants
/// innermost-match semantics propagates a `Some` child result untouched
/// and only tests the node itself when no descendant matched.
pub fn walk_reduce<T>(
    tree: &SyntaxTree,
    root: NodeId,
    token: &CancellationToken,
    eval: &mut dyn FnMut(&SyntaxTree, NodeId, Option<T>) -> Option<T>,
) -> Result<Option<T>, Cancelled> {
    token.checkpoint()?;
    let mut reduced: Option<T> = None;
    for &child in &tree.node(root).children {
        let result = walk_reduce(tree, child, token, eval)?;
        if reduced.is_none() {
            reduced = result;
        }
    }
    Ok(eval(tree, root, reduced))
}
