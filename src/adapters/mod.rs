//! Port implementations.
//!
//! `live` talks to the real system, `fixed` returns pinned values for
//! reproducible runs, and `memory` (unit tests only) keeps a whole file tree
//! in a map.

pub mod fixed;
pub mod live;
#[cfg(test)]
pub mod memory;
