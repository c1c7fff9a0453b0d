//! Semantic classification of name occurrences.
//!
//! Walks a resolved compilation unit and sorts every name occurrence
//! into one of a fixed set of highlight categories, keyed by the kind
//! (and modifiers) of the declaration the occurrence resolves to. Call
//! sites additionally land in `methodInvocations`, independent of the
//! kind table. Doc comments attached to visited declarations are
//! collected on the side.
//!
//! Unresolvable names and names without a usable source position are
//! skipped silently; broken code yields a sparser result, never an
//! error. Only cancellation aborts the scan.

use jls_common::{CancellationToken, Cancelled, Span};
use jls_resolve::{DocComment, Resolver, SymbolKind, TextSource};
use jls_syntax::{NodeId, NodeKind, SyntaxTree, TreePath, walk};
use serde::Serialize;
use tracing::{debug, trace};

use crate::name_span::locate_name;

/// Classified name ranges, one bucket per highlight category.
///
/// Field names serialize to the category names the protocol layer
/// expects (`enumTypes`, `methodDeclarations`, ...). Each visited node
/// contributes at most one range to the kind table's buckets, plus at
/// most one `methodInvocations` entry when it is a call site.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticHighlight {
    pub packages: Vec<Span>,
    pub enum_types: Vec<Span>,
    pub class_names: Vec<Span>,
    pub annotation_types: Vec<Span>,
    pub interfaces: Vec<Span>,
    pub enums: Vec<Span>,
    pub fields: Vec<Span>,
    pub statics: Vec<Span>,
    pub method_declarations: Vec<Span>,
    pub parameters: Vec<Span>,
    pub locals: Vec<Span>,
    pub exception_params: Vec<Span>,
    pub constructors: Vec<Span>,
    pub static_inits: Vec<Span>,
    pub instance_inits: Vec<Span>,
    pub type_params: Vec<Span>,
    pub resource_variables: Vec<Span>,
    pub method_invocations: Vec<Span>,
}

impl SemanticHighlight {
    /// Total number of classified ranges across all buckets.
    pub fn len(&self) -> usize {
        self.packages.len()
            + self.enum_types.len()
            + self.class_names.len()
            + self.annotation_types.len()
            + self.interfaces.len()
            + self.enums.len()
            + self.fields.len()
            + self.statics.len()
            + self.method_declarations.len()
            + self.parameters.len()
            + self.locals.len()
            + self.exception_params.len()
            + self.constructors.len()
            + self.static_inits.len()
            + self.instance_inits.len()
            + self.type_params.len()
            + self.resource_variables.len()
            + self.method_invocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Names that never produce a category.
fn is_pseudo_name(name: &str) -> bool {
    matches!(name, "this" | "super" | "class")
}

/// Classifier for one compilation unit.
pub struct SemanticHighlighter<'a, R> {
    resolver: &'a R,
    token: &'a CancellationToken,
    docs: Vec<DocComment>,
}

impl<'a, R: Resolver + TextSource> SemanticHighlighter<'a, R> {
    pub fn new(resolver: &'a R, token: &'a CancellationToken) -> SemanticHighlighter<'a, R> {
        SemanticHighlighter {
            resolver,
            token,
            docs: Vec::new(),
        }
    }

    /// Classify every name occurrence under `root`.
    ///
    /// `root` must be the unit's CompilationUnit node; anything else is
    /// a programming error upstream and panics.
    pub fn highlight(&mut self, root: NodeId) -> Result<SemanticHighlight, Cancelled> {
        let resolver = self.resolver;
        let tree = resolver.tree();
        let root_node = tree.get(root).expect("root node not in this unit's arena");
        assert!(
            root_node.kind == NodeKind::CompilationUnit,
            "semantic classification must start at a compilation unit"
        );

        let docs = &mut self.docs;
        let mut colors = SemanticHighlight::default();
        walk(tree, root, self.token, &mut colors, &mut |tree,
                                                        path,
                                                        colors| {
            visit_node(resolver, tree, path, colors, docs);
        })?;
        debug!(
            ranges = colors.len(),
            docs = docs.len(),
            "classified compilation unit"
        );
        Ok(colors)
    }

    /// Doc comments of the declarations visited so far, in visit order.
    pub fn docs(&self) -> &[DocComment] {
        &self.docs
    }
}

fn visit_node<R: Resolver + TextSource>(
    resolver: &R,
    tree: &SyntaxTree,
    path: &TreePath,
    colors: &mut SemanticHighlight,
    docs: &mut Vec<DocComment>,
) {
    let node = tree.node(path.leaf());
    match node.kind {
        NodeKind::Identifier | NodeKind::MemberSelect => {
            if let Some(name) = tree.name_of(node) {
                put_semantics(resolver, path, name, colors);
            }
        }
        NodeKind::Variable | NodeKind::Class | NodeKind::Method => {
            if let Some(name) = tree.name_of(node) {
                put_semantics(resolver, path, name, colors);
            }
            may_have_doc(resolver, path, docs);
        }
        NodeKind::MethodInvocation => {
            if let Some(name) = callee_name(tree, path.leaf()) {
                if let Some(range) = locate_name(resolver, path, name) {
                    colors.method_invocations.push(range);
                }
            }
        }
        _ => {}
    }
}

/// The called name of an invocation: the identifier itself for `run()`,
/// the trailing name for `receiver.run()`.
fn callee_name(tree: &SyntaxTree, invocation: NodeId) -> Option<&str> {
    let call = tree.get_invocation(tree.node(invocation))?;
    let callee = tree.get(call.select)?;
    match callee.kind {
        NodeKind::Identifier => tree.get_identifier(callee).map(|d| d.name.as_str()),
        NodeKind::MemberSelect => tree.get_member_select(callee).map(|d| d.name.as_str()),
        _ => None,
    }
}

fn put_semantics<R: Resolver + TextSource>(
    resolver: &R,
    path: &TreePath,
    name: &str,
    colors: &mut SemanticHighlight,
) {
    if is_pseudo_name(name) {
        return;
    }
    let Some(symbol_id) = resolver.symbol_at(path) else {
        trace!(node = path.leaf().0, name, "occurrence did not resolve");
        return;
    };
    let Some(symbol) = resolver.symbol(symbol_id) else {
        return;
    };
    let Some(range) = locate_name(resolver, path, name) else {
        trace!(node = path.leaf().0, name, "no usable name range");
        return;
    };
    let bucket = match symbol.kind {
        SymbolKind::Package => &mut colors.packages,
        SymbolKind::Enum => &mut colors.enum_types,
        SymbolKind::Class => &mut colors.class_names,
        SymbolKind::AnnotationType => &mut colors.annotation_types,
        SymbolKind::Interface => &mut colors.interfaces,
        SymbolKind::EnumConstant => &mut colors.enums,
        SymbolKind::Field => {
            if symbol.is_static() {
                &mut colors.statics
            } else {
                &mut colors.fields
            }
        }
        SymbolKind::Method => &mut colors.method_declarations,
        SymbolKind::Parameter => &mut colors.parameters,
        SymbolKind::LocalVariable => &mut colors.locals,
        SymbolKind::ExceptionParameter => &mut colors.exception_params,
        SymbolKind::Constructor => &mut colors.constructors,
        SymbolKind::StaticInit => &mut colors.static_inits,
        SymbolKind::InstanceInit => &mut colors.instance_inits,
        SymbolKind::TypeParameter => &mut colors.type_params,
        SymbolKind::ResourceVariable => &mut colors.resource_variables,
        SymbolKind::Unknown => return,
    };
    bucket.push(range);
}

fn may_have_doc<R: Resolver>(resolver: &R, path: &TreePath, docs: &mut Vec<DocComment>) {
    let Some(symbol) = resolver.symbol_at(path) else {
        return;
    };
    if let Some(doc) = resolver.doc_comment(symbol) {
        docs.push(doc.clone());
    }
}

#[cfg(test)]
#[path = "tests/highlight_tests.rs"]
mod highlight_tests;
