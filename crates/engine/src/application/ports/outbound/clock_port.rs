//! Clock Port - Interface for reading the current time
//!
//! Notifications carry the commit time of the change they describe;
//! injecting the clock keeps that timestamp deterministic in tests.

use chrono::{DateTime, Utc};

/// Port for reading the current time
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
