use serde::{Deserialize, Serialize};
use std::{fmt, time::SystemTime};

pub const SECONDS_PER_HOUR: u64 = 3600;
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Time spent in the lot, split into whole hours, minutes and seconds.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Elapsed {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Elapsed {
    pub fn from_seconds(total: u64) -> Self {
        Self {
            hours: total / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    /// Sub-second remainders are floored away.
    pub fn from_millis(millis: u64) -> Self {
        Self::from_seconds(millis / 1000)
    }

    /// Clamps to zero when `now` precedes `entry`.
    pub fn between(entry: SystemTime, now: SystemTime) -> Self {
        Self::from_millis(millis_between(entry, now))
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours * SECONDS_PER_HOUR + self.minutes * SECONDS_PER_MINUTE + self.seconds
    }
}

/// Milliseconds from `entry` to `now`, zero if the clock went backwards.
pub fn millis_between(entry: SystemTime, now: SystemTime) -> u64 {
    match now.duration_since(entry) {
        Ok(delta) => u64::try_from(delta.as_millis()).unwrap_or(u64::MAX),
        Err(e) => {
            tracing::warn!(
                "Entry time lies {:?} in the future, clamping duration to zero",
                e.duration()
            );
            0
        }
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }
}
