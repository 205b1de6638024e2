//! Service context bundling all port trait objects.

use tracing::warn;

use crate::adapters::fixed::{FixedClock, SequentialIdGenerator};
use crate::adapters::live::{LiveClock, LiveFileSystem, LiveIdGenerator};
use crate::config;
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;
use crate::ports::id_gen::IdGenerator;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter implementations (live, reproducible, custom).
pub struct ServiceContext {
    /// Clock for generation timestamps and report headers.
    pub clock: Box<dyn Clock>,
    /// Filesystem for discovery and file I/O.
    pub fs: Box<dyn FileSystem>,
    /// ID generator for report run identifiers.
    pub id_gen: Box<dyn IdGenerator>,
}

impl ServiceContext {
    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn new(
        clock: Box<dyn Clock>,
        fs: Box<dyn FileSystem>,
        id_gen: Box<dyn IdGenerator>,
    ) -> Self {
        Self { clock, fs, id_gen }
    }

    /// Creates a live context backed by the system clock, real disk, and UUIDs.
    #[must_use]
    pub fn live() -> Self {
        Self::new(Box::new(LiveClock), Box::new(LiveFileSystem), Box::new(LiveIdGenerator))
    }

    /// Creates a context on real disk whose clock and run ids are pinned.
    #[must_use]
    pub fn reproducible(clock: FixedClock) -> Self {
        Self::new(
            Box::new(clock),
            Box::new(LiveFileSystem),
            Box::new(SequentialIdGenerator::new("run")),
        )
    }

    /// Creates the context for a CLI invocation.
    ///
    /// When `SOURCE_DATE_EPOCH` holds a valid Unix timestamp the context is
    /// reproducible; otherwise it is live.
    #[must_use]
    pub fn from_env() -> Self {
        match config::source_date_epoch() {
            Some(secs) => match FixedClock::from_epoch_secs(secs) {
                Some(clock) => Self::reproducible(clock),
                None => {
                    warn!(secs, "SOURCE_DATE_EPOCH out of range; using the system clock");
                    Self::live()
                }
            },
            None => Self::live(),
        }
    }
}
