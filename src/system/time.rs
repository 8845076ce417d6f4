//! Time keeping module for PineTime

use chrono::{NaiveDateTime, TimeDelta};
use embassy_time::Instant;
use pinetime_clock::{SampledTime, TimeSource};

/// Wall-clock time anchored to a monotonic instant
pub struct TimeReference {
    /// Clock time
    time: NaiveDateTime,
    /// Related system time
    instant: Instant,
}

impl Default for TimeReference {
    fn default() -> Self {
        Self {
            time: NaiveDateTime::UNIX_EPOCH,
            instant: Instant::from_ticks(0),
        }
    }
}

impl TimeReference {
    /// Reference for a unix timestamp shifted by a fixed offset, taken now
    pub fn from_timestamp(secs: i64, offset_secs: i32) -> Self {
        let time = NaiveDateTime::from_timestamp_opt(secs + offset_secs as i64, 0)
            .unwrap_or(NaiveDateTime::UNIX_EPOCH);

        Self {
            time,
            instant: Instant::now(),
        }
    }
}

pub struct TimeManager {
    reference: TimeReference,
}

impl TimeManager {
    /// Start keeping time from a reference
    pub fn init(reference: TimeReference) -> Self {
        Self { reference }
    }

    /// Get current time
    pub fn get_time(&self) -> NaiveDateTime {
        let elapsed = Instant::now().duration_since(self.reference.instant);
        self.reference.time + TimeDelta::microseconds(elapsed.as_micros() as i64)
    }

    /// Update time reference
    #[allow(unused)]
    pub fn set_time(&mut self, reference: TimeReference) {
        self.reference = reference;
    }
}

impl TimeSource for TimeManager {
    fn now(&self) -> SampledTime {
        SampledTime::from_timelike(&self.get_time())
    }
}
