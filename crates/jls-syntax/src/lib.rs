//! Resolved syntax tree model and traversal.
//!
//! This crate provides the tree half of the semantic analysis engine:
//! - `SyntaxTree`, an arena of tagged nodes with per-kind data pools
//! - `NodeId`/`NodeList` index types
//! - `TreePath`, an immutable root-to-leaf ancestor chain
//! - `walk`/`walk_reduce`, the generic cancellable traversals
//!
//! Trees are produced by an external parser/resolver and are never
//! mutated here; every algorithm in `jls-semantics` drives one of the
//! two traversals over a tree it only reads.

pub mod tree;
pub use tree::{Node, NodeId, NodeKind, NodeList, SyntaxTree};

pub mod walk;
pub use walk::{TreePath, walk, walk_reduce};
