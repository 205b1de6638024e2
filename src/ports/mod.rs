//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the expansion/validation core and
//! the outside world (time, filesystem, run identifiers).
//! Implementations live in `src/adapters/`.

pub mod clock;
pub mod filesystem;
pub mod id_gen;

pub use clock::Clock;
pub use filesystem::FileSystem;
pub use id_gen::IdGenerator;

/// Error type returned across port boundaries.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;
