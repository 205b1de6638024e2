//! Wall-clock time for artifact headers and report sections.

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;

/// Reads the system clock on every call.
///
/// Used unless `SOURCE_DATE_EPOCH` pins generation timestamps.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
