//! Common types for the jls semantic analysis engine.
//!
//! This crate provides foundational types used across all jls crates:
//! - Source spans (`Span`) with a "no position" sentinel
//! - Cooperative cancellation (`CancellationToken`, `Cancelled`)

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Cooperative cancellation of in-progress traversals
pub mod cancel;
pub use cancel::{CancellationToken, Cancelled};
