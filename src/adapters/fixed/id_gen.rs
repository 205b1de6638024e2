//! Deterministic ID generator.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::ports::id_gen::IdGenerator;

/// Produces `<prefix>-1`, `<prefix>-2`, ... in call order.
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose IDs start at `<prefix>-1`.
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self { prefix: prefix.to_string(), next: AtomicU64::new(1) }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{n}", self.prefix)
    }
}
