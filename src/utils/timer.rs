//! Wall-clock timing for the benchmark phase.

use std::time::{Duration, Instant};

/// Run `f` once and return how long it took alongside its result.
///
/// Uses the monotonic clock, so the measurement is wall-clock time rather
/// than CPU time.
#[inline(always)]
pub fn measure<F, R>(f: F) -> (Duration, R)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    (start.elapsed(), result)
}

/// Elapsed time split into whole minutes, seconds and milliseconds.
///
/// Every field is truncated, never rounded: 125.3749 s is 2 min 5 s 374 ms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeBreakdown {
    pub minutes: u64,
    pub seconds: u64,
    pub milliseconds: u32,
}

impl TimeBreakdown {
    pub fn from_duration(duration: Duration) -> Self {
        let total_secs = duration.as_secs();
        Self {
            minutes: total_secs / 60,
            seconds: total_secs % 60,
            milliseconds: duration.subsec_millis(),
        }
    }
}
