//! Resolver boundary for the jls semantic analysis engine.
//!
//! Parsing and type resolution happen outside this workspace. This crate
//! defines what the engine consumes from that external resolver:
//! - `Symbol`, `SymbolId`, `SymbolKind`, `modifier_flags` — resolved
//!   declaration identities, compared by id and never structurally
//! - `SymbolArena` — storage a host resolver allocates symbols from
//! - `DocComment` — a doc comment attached to a declaration
//! - `Resolver` / `TextSource` — the read-only interfaces the semantic
//!   algorithms are written against
//! - `ResolvedUnit` — a concrete immutable snapshot of one resolved
//!   compilation unit implementing both interfaces

pub mod symbol;
pub use symbol::{Symbol, SymbolArena, SymbolId, SymbolKind, modifier_flags};

pub mod docs;
pub use docs::DocComment;

pub mod resolver;
pub use resolver::{ResolvedUnit, Resolver, TextSource};
