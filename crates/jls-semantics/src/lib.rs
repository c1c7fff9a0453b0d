//! Editor-facing semantic analysis over resolved compilation units.
//!
//! This crate provides the algorithms a language server front-end calls
//! into once it holds a resolved snapshot:
//! - Semantic classification of every name occurrence (highlighting)
//! - Find references to one symbol within a compilation unit
//! - Innermost variable declaration lookup (refactoring support)
//! - Exact name-range location inside composite nodes
//!
//! All of them are synchronous, single-threaded per invocation, and
//! cooperatively cancellable with a per-node checkpoint.

pub mod highlight;
pub use highlight::{SemanticHighlight, SemanticHighlighter};

pub mod name_span;
pub use name_span::locate_name;

pub mod references;
pub use references::FindReferences;

pub mod rewrite;
pub use rewrite::find_variable_at;

pub mod dap;

#[cfg(test)]
#[path = "tests/fixture.rs"]
mod fixture;
