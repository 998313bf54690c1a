//! System clock adapter

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

use crate::domain::ports::Clock;

/// Wall clock truncated to microseconds (PostgreSQL `timestamptz` precision).
///
/// Never goes backwards within the process: if the wall clock steps back, the
/// last issued instant is repeated until real time catches up.
#[derive(Default)]
pub struct SystemClock {
    last_issued_micros: AtomicI64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }

    fn issue(&self, wall_micros: i64) -> i64 {
        let previous = self
            .last_issued_micros
            .fetch_max(wall_micros, Ordering::SeqCst);
        previous.max(wall_micros)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        let wall = Utc::now();
        DateTime::<Utc>::from_timestamp_micros(self.issue(wall.timestamp_micros())).unwrap_or(wall)
    }
}
