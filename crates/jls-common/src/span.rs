//! Source location tracking (byte offsets).
//!
//! A `Span` is a half-open `[start, end)` byte range into one compilation
//! unit's text. Offsets are signed so that `-1` can carry the "no position"
//! sentinel a resolver's position service reports for synthetic or
//! erroneous nodes.

use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` byte range in source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start offset (inclusive), or `-1` when unknown.
    pub start: i32,
    /// End offset (exclusive), or `-1` when unknown.
    pub end: i32,
}

impl Span {
    /// The "no position" sentinel.
    pub const NONE: Span = Span { start: -1, end: -1 };

    /// Create a resolved span. `start` and `end` must be non-negative
    /// with `start <= end`.
    pub fn new(start: i32, end: i32) -> Span {
        debug_assert!(0 <= start && start <= end, "invalid span [{start}, {end})");
        Span { start, end }
    }

    /// Whether either endpoint is unresolved.
    pub fn is_none(&self) -> bool {
        self.start < 0 || self.end < 0
    }

    /// Whether both endpoints are resolved.
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Half-open containment: `start <= offset < end`.
    ///
    /// An unresolved span contains nothing.
    pub fn contains(&self, offset: i32) -> bool {
        self.is_some() && self.start <= offset && offset < self.end
    }

    /// Length in bytes. Zero for unresolved spans.
    pub fn len(&self) -> u32 {
        if self.is_none() {
            0
        } else {
            (self.end - self.start) as u32
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
