//! Cooperative cancellation of in-progress traversals.
//!
//! A request issuer holds one clone of a [`CancellationToken`] and hands
//! another to the operation it starts. The operation polls the token at a
//! fixed checkpoint (once per visited node); once signalled it abandons
//! whatever it accumulated and yields [`Cancelled`] instead of a result.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A cooperative, pollable cancellation signal.
///
/// Cloning produces another handle to the same underlying flag, so a
/// token can be shared between the requesting side and the traversal.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> CancellationToken {
        CancellationToken::default()
    }

    /// Signal cancellation to every holder of this token.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Poll the token, yielding `Err(Cancelled)` once signalled.
    pub fn checkpoint(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() { Err(Cancelled) } else { Ok(()) }
    }
}

/// The distinguished outcome of an aborted operation.
///
/// No partially built result survives cancellation; callers discard
/// anything the traversal accumulated before the signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("operation was cancelled")
    }
}

impl std::error::Error for Cancelled {}
