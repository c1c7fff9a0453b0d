//! Node arena for resolved compilation units.
//!
//! Nodes are stored flat in a `SyntaxTree` and addressed by `NodeId`.
//! Each node carries its kind tag, its source span, its children in
//! source order, and a link into the kind's data pool. Only the node
//! kinds the semantic algorithms dispatch on get a dedicated pool;
//! everything else is `Other`, which traversal still descends into.

use jls_common::Span;

/// Index of a node in a `SyntaxTree` arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel for "no node" (absent child, unresolved link).
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(&self) -> bool {
        *self == NodeId::NONE
    }

    pub fn is_some(&self) -> bool {
        !self.is_none()
    }
}

pub type NodeList = Vec<NodeId>;

/// Node kinds the semantic algorithms dispatch on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    CompilationUnit,
    Class,
    Method,
    Variable,
    Identifier,
    MemberSelect,
    MemberReference,
    MethodInvocation,
    NewClass,
    /// Any node kind the algorithms do not inspect. Still traversed.
    Other,
}

/// A single tree node: kind tag, source span, children in source order,
/// and a link into the kind's data pool.
#[derive(Clone, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    pub children: NodeList,
    pub(crate) data_index: u32,
}

impl Node {
    pub(crate) const NO_DATA: u32 = u32::MAX;

    pub fn has_data(&self) -> bool {
        self.data_index != Node::NO_DATA
    }
}

/// A simple name occurrence.
#[derive(Clone, Debug)]
pub struct IdentifierData {
    pub name: String,
}

/// A qualified selection `expression.name`.
#[derive(Clone, Debug)]
pub struct MemberSelectData {
    pub expression: NodeId,
    pub name: String,
}

/// A member reference `expression::name`.
#[derive(Clone, Debug)]
pub struct MemberReferenceData {
    pub expression: NodeId,
    pub name: String,
}

/// A constructor call site `new identifier(...)`.
#[derive(Clone, Debug)]
pub struct NewClassData {
    pub identifier: NodeId,
}

/// A call site. The callee is an `Identifier` or a `MemberSelect`.
#[derive(Clone, Debug)]
pub struct MethodInvocationData {
    pub select: NodeId,
}

/// A variable declaration `ty name [= initializer]`.
///
/// The declared name is not a child node of its own; it is part of the
/// declaration's span, exactly as the resolver reports it.
#[derive(Clone, Debug)]
pub struct VariableData {
    pub name: String,
    pub ty: NodeId,
    pub initializer: NodeId,
}

/// A class, interface, enum, or annotation type declaration.
#[derive(Clone, Debug)]
pub struct ClassData {
    pub name: String,
}

/// A method or constructor declaration.
#[derive(Clone, Debug)]
pub struct MethodData {
    pub name: String,
}

/// Arena of nodes for one compilation unit, with per-kind data pools.
#[derive(Debug, Default)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
    identifiers: Vec<IdentifierData>,
    member_selects: Vec<MemberSelectData>,
    member_references: Vec<MemberReferenceData>,
    new_classes: Vec<NewClassData>,
    invocations: Vec<MethodInvocationData>,
    variables: Vec<VariableData>,
    classes: Vec<ClassData>,
    methods: Vec<MethodData>,
}

impl SyntaxTree {
    pub fn new() -> SyntaxTree {
        SyntaxTree::default()
    }

    /// Get a node by index.
    #[inline]
    pub fn get(&self, index: NodeId) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Get a node by index, panicking on an id from another arena.
    ///
    /// Traversal uses this internally; a dangling id is a programming
    /// error upstream, not a property of the source text.
    #[inline]
    pub fn node(&self, index: NodeId) -> &Node {
        self.get(index).expect("node id out of arena")
    }

    /// Children of a node in source order. Empty for unknown ids.
    pub fn children(&self, index: NodeId) -> &[NodeId] {
        self.get(index).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get identifier data for a node.
    /// Returns None if the node is not an identifier.
    #[inline]
    pub fn get_identifier(&self, node: &Node) -> Option<&IdentifierData> {
        if node.has_data() && node.kind == NodeKind::Identifier {
            self.identifiers.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get member selection data for a node.
    #[inline]
    pub fn get_member_select(&self, node: &Node) -> Option<&MemberSelectData> {
        if node.has_data() && node.kind == NodeKind::MemberSelect {
            self.member_selects.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get member reference data for a node.
    #[inline]
    pub fn get_member_reference(&self, node: &Node) -> Option<&MemberReferenceData> {
        if node.has_data() && node.kind == NodeKind::MemberReference {
            self.member_references.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get constructor call data for a node.
    #[inline]
    pub fn get_new_class(&self, node: &Node) -> Option<&NewClassData> {
        if node.has_data() && node.kind == NodeKind::NewClass {
            self.new_classes.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get call site data for a node.
    #[inline]
    pub fn get_invocation(&self, node: &Node) -> Option<&MethodInvocationData> {
        if node.has_data() && node.kind == NodeKind::MethodInvocation {
            self.invocations.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get variable declaration data for a node.
    #[inline]
    pub fn get_variable(&self, node: &Node) -> Option<&VariableData> {
        if node.has_data() && node.kind == NodeKind::Variable {
            self.variables.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get class declaration data for a node.
    #[inline]
    pub fn get_class(&self, node: &Node) -> Option<&ClassData> {
        if node.has_data() && node.kind == NodeKind::Class {
            self.classes.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get method declaration data for a node.
    #[inline]
    pub fn get_method(&self, node: &Node) -> Option<&MethodData> {
        if node.has_data() && node.kind == NodeKind::Method {
            self.methods.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// The name a node carries, for name-bearing kinds.
    pub fn name_of(&self, node: &Node) -> Option<&str> {
        match node.kind {
            NodeKind::Identifier => self.get_identifier(node).map(|d| d.name.as_str()),
            NodeKind::MemberSelect => self.get_member_select(node).map(|d| d.name.as_str()),
            NodeKind::MemberReference => self.get_member_reference(node).map(|d| d.name.as_str()),
            NodeKind::Variable => self.get_variable(node).map(|d| d.name.as_str()),
            NodeKind::Class => self.get_class(node).map(|d| d.name.as_str()),
            NodeKind::Method => self.get_method(node).map(|d| d.name.as_str()),
            _ => None,
        }
    }

    // Builder methods. A host parser/resolver constructs children before
    // parents and links them by id.

    pub fn add_compilation_unit(&mut self, span: Span, children: NodeList) -> NodeId {
        self.push_node(NodeKind::CompilationUnit, span, children, Node::NO_DATA)
    }

    pub fn add_class(&mut self, span: Span, name: impl Into<String>, members: NodeList) -> NodeId {
        let data = self.classes.len() as u32;
        self.classes.push(ClassData { name: name.into() });
        self.push_node(NodeKind::Class, span, members, data)
    }

    pub fn add_method(&mut self, span: Span, name: impl Into<String>, children: NodeList) -> NodeId {
        let data = self.methods.len() as u32;
        self.methods.push(MethodData { name: name.into() });
        self.push_node(NodeKind::Method, span, children, data)
    }

    pub fn add_variable(
        &mut self,
        span: Span,
        name: impl Into<String>,
        ty: NodeId,
        initializer: NodeId,
    ) -> NodeId {
        let data = self.variables.len() as u32;
        self.variables.push(VariableData {
            name: name.into(),
            ty,
            initializer,
        });
        let children = [ty, initializer]
            .into_iter()
            .filter(|id| id.is_some())
            .collect();
        self.push_node(NodeKind::Variable, span, children, data)
    }

    pub fn add_identifier(&mut self, span: Span, name: impl Into<String>) -> NodeId {
        let data = self.identifiers.len() as u32;
        self.identifiers.push(IdentifierData { name: name.into() });
        self.push_node(NodeKind::Identifier, span, Vec::new(), data)
    }

    pub fn add_member_select(
        &mut self,
        span: Span,
        expression: NodeId,
        name: impl Into<String>,
    ) -> NodeId {
        let data = self.member_selects.len() as u32;
        self.member_selects.push(MemberSelectData {
            expression,
            name: name.into(),
        });
        self.push_node(NodeKind::MemberSelect, span, vec![expression], data)
    }

    pub fn add_member_reference(
        &mut self,
        span: Span,
        expression: NodeId,
        name: impl Into<String>,
    ) -> NodeId {
        let data = self.member_references.len() as u32;
        self.member_references.push(MemberReferenceData {
            expression,
            name: name.into(),
        });
        self.push_node(NodeKind::MemberReference, span, vec![expression], data)
    }

    pub fn add_method_invocation(
        &mut self,
        span: Span,
        select: NodeId,
        arguments: NodeList,
    ) -> NodeId {
        let data = self.invocations.len() as u32;
        self.invocations.push(MethodInvocationData { select });
        let mut children = vec![select];
        children.extend(arguments);
        self.push_node(NodeKind::MethodInvocation, span, children, data)
    }

    pub fn add_new_class(&mut self, span: Span, identifier: NodeId, arguments: NodeList) -> NodeId {
        let data = self.new_classes.len() as u32;
        self.new_classes.push(NewClassData { identifier });
        let mut children = vec![identifier];
        children.extend(arguments);
        self.push_node(NodeKind::NewClass, span, children, data)
    }

    pub fn add_other(&mut self, span: Span, children: NodeList) -> NodeId {
        self.push_node(NodeKind::Other, span, children, Node::NO_DATA)
    }

    fn push_node(&mut self, kind: NodeKind, span: Span, children: NodeList, data: u32) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            span,
            children,
            data_index: data,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_are_kind_checked() {
        let mut tree = SyntaxTree::new();
        let ident = tree.add_identifier(Span::new(0, 1), "x");
        let node = tree.node(ident);
        assert!(tree.get_identifier(node).is_some());
        assert!(tree.get_variable(node).is_none());
        assert_eq!(tree.name_of(node), Some("x"));
    }

    #[test]
    fn variable_children_skip_absent_links() {
        let mut tree = SyntaxTree::new();
        let ty = tree.add_other(Span::new(0, 3), Vec::new());
        let bare = tree.add_variable(Span::new(0, 5), "x", ty, NodeId::NONE);
        assert_eq!(tree.children(bare), &[ty]);

        let init = tree.add_identifier(Span::new(8, 9), "y");
        let full = tree.add_variable(Span::new(0, 9), "x", ty, init);
        assert_eq!(tree.children(full), &[ty, init]);
    }

    #[test]
    fn invocation_callee_precedes_arguments() {
        let mut tree = SyntaxTree::new();
        let callee = tree.add_identifier(Span::new(0, 3), "run");
        let arg = tree.add_identifier(Span::new(4, 5), "x");
        let call = tree.add_method_invocation(Span::new(0, 6), callee, vec![arg]);
        assert_eq!(tree.children(call), &[callee, arg]);
        let data = tree.get_invocation(tree.node(call)).unwrap();
        assert_eq!(data.select, callee);
    }

    #[test]
    fn get_none_is_none() {
        let tree = SyntaxTree::new();
        assert!(tree.get(NodeId::NONE).is_none());
        assert!(tree.children(NodeId::NONE).is_empty());
    }
}
