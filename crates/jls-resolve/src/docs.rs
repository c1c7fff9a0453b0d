//! Doc comments attached to declarations.

use jls_common::Span;
use serde::{Deserialize, Serialize};

/// A doc comment the resolver associated with one declaration.
///
/// The text is the comment's content as the resolver hands it out; the
/// span covers the comment in the unit's source, or `Span::NONE` when
/// the resolver does not track comment positions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocComment {
    pub text: String,
    pub span: Span,
}

impl DocComment {
    pub fn new(text: impl Into<String>, span: Span) -> DocComment {
        DocComment {
            text: text.into(),
            span,
        }
    }

    /// A doc comment without a tracked source position.
    pub fn detached(text: impl Into<String>) -> DocComment {
        DocComment::new(text, Span::NONE)
    }
}
