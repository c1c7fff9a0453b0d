//! Exact name spans inside composite nodes.
//!
//! A node's own span covers more than the name being highlighted: a
//! member selection spans `a.b.name`, a variable declaration spans
//! `Type name = init`. Locating the name means trimming the qualifying
//! prefix off the node's span and searching the remaining source text
//! for the name itself.

use jls_common::Span;
use jls_resolve::{Resolver, TextSource};
use jls_syntax::{NodeKind, TreePath};

/// Locate the exact span of `name` inside the node at the tip of `path`.
///
/// Returns `None` when either endpoint of the node's span is unknown or
/// the name's text does not occur in the trimmed region.
///
/// The search is textual, not structural: the first occurrence of
/// `name` inside the trimmed region wins, even when that occurrence is
/// part of a longer identifier or a type argument that repeats the
/// name's text. Callers that need structural precision must not get it
/// here.
pub fn locate_name<R>(resolver: &R, path: &TreePath, name: &str) -> Option<Span>
where
    R: Resolver + TextSource,
{
    let tree = resolver.tree();
    let leaf = path.leaf();
    let node = tree.get(leaf)?;
    let full = resolver.span_of(leaf);
    let mut start = full.start;
    let end = full.end;
    // Trim the LHS of member selections and declared types.
    match node.kind {
        NodeKind::MemberSelect => {
            if let Some(select) = tree.get_member_select(node) {
                start = resolver.span_of(select.expression).end;
            }
        }
        NodeKind::Variable => {
            if let Some(decl) = tree.get_variable(node) {
                if decl.ty.is_some() {
                    start = resolver.span_of(decl.ty).end;
                }
            }
        }
        _ => {}
    }
    // If no position, give up.
    if start < 0 || end < 0 {
        return None;
    }
    let contents = resolver.contents();
    let region = contents.get(start as usize..end as usize)?;
    let found = region.find(name)?;
    let name_start = start + found as i32;
    Some(Span::new(name_start, name_start + name.len() as i32))
}

#[cfg(test)]
#[path = "tests/name_span_tests.rs"]
mod name_span_tests;
