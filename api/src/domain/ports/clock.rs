//! Clock port
//!
//! Services never read the system time directly; they ask a `Clock` so tests
//! can pin and advance time.

use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    /// Current time. Successive calls must never go backwards.
    fn now(&self) -> DateTime<Utc>;
}
