//! Per-store id sequences.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::Id;

/// Monotonic id source. The first id handed out is 1.
///
/// Each store owns its own sequences, so independent stores never collide or
/// interfere with each other's numbering.
#[derive(Debug, Default)]
pub struct IdSequence {
    last: AtomicU64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically reserve the next id.
    pub fn next<T>(&self) -> Id<T> {
        Id::new(self.last.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// The most recently assigned value, 0 if none.
    pub fn current(&self) -> u64 {
        self.last.load(Ordering::Relaxed)
    }
}

/// One sequence per entity kind.
#[derive(Debug, Default)]
pub struct IdSequences {
    pub users: IdSequence,
    pub groups: IdSequence,
    pub projects: IdSequence,
}
