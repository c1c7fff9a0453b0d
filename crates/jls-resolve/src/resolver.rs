//! The read-only interfaces the semantic algorithms consume, and the
//! concrete snapshot type a host resolver populates.
//!
//! One request operates against one immutable snapshot: the resolved
//! tree, the symbol table, the node-to-symbol bindings, doc comment
//! associations, and the materialized source text. Concurrent requests
//! may share a snapshot freely; nothing here is written after
//! population.

use jls_common::Span;
use jls_syntax::{NodeId, SyntaxTree, TreePath};
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::docs::DocComment;
use crate::symbol::{Symbol, SymbolArena, SymbolId};

/// Read-only view of a type resolver's output for one compilation unit.
pub trait Resolver {
    /// The resolved tree of the unit under scan.
    fn tree(&self) -> &SyntaxTree;

    /// The declaration the occurrence at `path` resolves to, if any.
    ///
    /// `None` is the expected answer for unresolvable or erroneous
    /// code, not an error.
    fn symbol_at(&self, path: &TreePath) -> Option<SymbolId>;

    /// Look up a symbol by id.
    fn symbol(&self, id: SymbolId) -> Option<&Symbol>;

    /// Source span of a node. `Span::NONE` when the position service
    /// does not know the node.
    fn span_of(&self, node: NodeId) -> Span;

    /// The doc comment attached to a declaration, if one exists.
    fn doc_comment(&self, symbol: SymbolId) -> Option<&DocComment>;
}

/// Read-only access to a unit's materialized source text.
pub trait TextSource {
    fn contents(&self) -> &str;
}

/// An immutable snapshot of one resolved compilation unit.
///
/// A host parser/type-resolver builds the tree and symbol arena, binds
/// occurrence nodes to symbol ids, attaches doc comments, and then hands
/// the snapshot to the semantic algorithms by shared reference. The
/// snapshot must not change for the duration of a request, even if a
/// newer edit arrives; hosts swap in a fresh snapshot instead.
#[derive(Debug)]
pub struct ResolvedUnit {
    source: String,
    tree: SyntaxTree,
    root: NodeId,
    symbols: SymbolArena,
    bindings: FxHashMap<NodeId, SymbolId>,
    docs: FxHashMap<SymbolId, DocComment>,
}

impl ResolvedUnit {
    pub fn new(
        source: impl Into<String>,
        tree: SyntaxTree,
        root: NodeId,
        symbols: SymbolArena,
    ) -> ResolvedUnit {
        ResolvedUnit {
            source: source.into(),
            tree,
            root,
            symbols,
            bindings: FxHashMap::default(),
            docs: FxHashMap::default(),
        }
    }

    /// Record that the occurrence at `node` resolves to `symbol`.
    pub fn bind(&mut self, node: NodeId, symbol: SymbolId) {
        trace!(node = node.0, symbol = symbol.0, "bind occurrence");
        self.bindings.insert(node, symbol);
    }

    /// Attach a doc comment to a declaration.
    pub fn attach_doc(&mut self, symbol: SymbolId, doc: DocComment) {
        self.docs.insert(symbol, doc);
    }

    /// The unit's root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn symbols(&self) -> &SymbolArena {
        &self.symbols
    }
}

impl Resolver for ResolvedUnit {
    fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    fn symbol_at(&self, path: &TreePath) -> Option<SymbolId> {
        self.bindings.get(&path.leaf()).copied()
    }

    fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id)
    }

    fn span_of(&self, node: NodeId) -> Span {
        self.tree.get(node).map(|n| n.span).unwrap_or(Span::NONE)
    }

    fn doc_comment(&self, symbol: SymbolId) -> Option<&DocComment> {
        self.docs.get(&symbol)
    }
}

impl TextSource for ResolvedUnit {
    fn contents(&self) -> &str {
        &self.source
    }
}
